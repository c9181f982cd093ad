//! The opencli category table and the overview's category source.

use help_surface::{classify, CategoryGroup, CategoryRule};

use crate::catalog::load_catalog;
use crate::config::HelpConfig;
use crate::store::ResourceStore;

/// Display order is declaration order.
pub const RULES: &[CategoryRule] = &[
    CategoryRule::prefix("User Management", &["user-"]),
    CategoryRule::prefix("Domain Management", &["domains-"]),
    CategoryRule::prefix("Website Management", &["websites-"]),
    CategoryRule::prefix("Plan Management", &["plan-"]),
    CategoryRule::prefix("PHP Management", &["php-"]),
    CategoryRule::prefix("FTP Management", &["ftp-"]),
    CategoryRule::prefix("Email Management", &["email-"]),
    CategoryRule::prefix(
        "Server Management",
        &["server-", "docker-", "firewall-", "files-"],
    ),
    CategoryRule::members(
        "Administration",
        &[
            "admin", "config", "license", "port", "domain", "proxy", "report", "update", "version",
        ],
    ),
    CategoryRule::prefix("Backup & Restore", &["backup-"]),
    CategoryRule::members("API & Documentation", &["api-list", "commands", "faq", "help"]),
];

/// Shown when the manifest cannot be read. Samples only.
pub fn fallback_groups() -> Vec<CategoryGroup> {
    vec![
        CategoryGroup::abbreviated("User Management", &["user-add", "user-delete", "user-list"]),
        CategoryGroup::abbreviated(
            "Domain Management",
            &["domains-add", "domains-delete", "domains-all"],
        ),
        CategoryGroup::abbreviated("Website Management", &["websites-all", "websites-user"]),
        CategoryGroup::abbreviated("Plan Management", &["plan-create", "plan-edit", "plan-delete"]),
        CategoryGroup::abbreviated("PHP Management", &["php-install", "php-default", "php-ini"]),
        CategoryGroup::abbreviated("FTP Management", &["ftp-add", "ftp-delete", "ftp-list"]),
        CategoryGroup::abbreviated(
            "Email Management",
            &["email-setup", "email-server", "email-manage"],
        ),
        CategoryGroup::abbreviated("Server Management", &["server-ips", "docker-limits"]),
        CategoryGroup::abbreviated("Administration", &["admin", "config", "license"]),
        CategoryGroup::new(
            "Documentation",
            vec!["commands".into(), "faq".into(), "help".into()],
        ),
    ]
}

/// Categories for the overview: classified from the manifest, or the
/// abbreviated table when the manifest is unavailable.
pub fn overview_groups(store: &dyn ResourceStore, config: &HelpConfig) -> Vec<CategoryGroup> {
    match load_catalog(store, &config.manifest_path(), &config.tool_name) {
        Ok(catalog) => classify(RULES, &catalog),
        Err(e) => {
            tracing::debug!(error = %e, "Using abbreviated category table");
            fallback_groups()
        }
    }
}
