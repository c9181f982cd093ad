/// How a category decides which commands belong to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleKind {
    /// Commands starting with any of these prefixes (e.g. `"user-"`).
    Prefixes(&'static [&'static str]),
    /// An explicit closed list of command names.
    Members(&'static [&'static str]),
}

impl RuleKind {
    pub fn matches(&self, command: &str) -> bool {
        match self {
            RuleKind::Prefixes(prefixes) => prefixes.iter().any(|p| command.starts_with(p)),
            RuleKind::Members(members) => members.contains(&command),
        }
    }
}

/// A labelled rule. A table of these, in display order, drives the
/// overview.
#[derive(Clone, Copy, Debug)]
pub struct CategoryRule {
    pub label: &'static str,
    pub kind: RuleKind,
}

impl CategoryRule {
    pub const fn prefix(label: &'static str, prefixes: &'static [&'static str]) -> Self {
        Self {
            label,
            kind: RuleKind::Prefixes(prefixes),
        }
    }

    pub const fn members(label: &'static str, members: &'static [&'static str]) -> Self {
        Self {
            label,
            kind: RuleKind::Members(members),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryGroup {
    pub label: String,
    pub commands: Vec<String>,
    /// The member list is a sample, not the full set. Rendered with a
    /// trailing `, etc.` regardless of length.
    pub abbreviated: bool,
}

impl CategoryGroup {
    pub fn new(label: impl Into<String>, commands: Vec<String>) -> Self {
        Self {
            label: label.into(),
            commands,
            abbreviated: false,
        }
    }

    pub fn abbreviated(label: impl Into<String>, commands: &[&str]) -> Self {
        Self {
            label: label.into(),
            commands: commands.iter().map(|c| (*c).to_string()).collect(),
            abbreviated: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Partition `catalog` by `rules`, one group per rule in rule order.
///
/// Members keep catalog order. A command matching no rule lands in no
/// group; one matching several rules lands in each of them.
pub fn classify<S: AsRef<str>>(rules: &[CategoryRule], catalog: &[S]) -> Vec<CategoryGroup> {
    rules
        .iter()
        .map(|rule| {
            let commands = catalog
                .iter()
                .map(AsRef::as_ref)
                .filter(|cmd| rule.kind.matches(cmd))
                .map(str::to_string)
                .collect();
            CategoryGroup::new(rule.label, commands)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[CategoryRule] = &[
        CategoryRule::prefix("Users", &["user-"]),
        CategoryRule::prefix("Server", &["server-", "docker-"]),
        CategoryRule::members("Admin", &["admin", "config"]),
        CategoryRule::members("Docs", &["help", "user-add"]),
    ];

    #[test]
    fn prefix_rule_matches_any_prefix() {
        let kind = RuleKind::Prefixes(&["server-", "docker-"]);
        assert!(kind.matches("server-ips"));
        assert!(kind.matches("docker-limits"));
        assert!(!kind.matches("dockerfile"));
    }

    #[test]
    fn member_rule_is_exact() {
        let kind = RuleKind::Members(&["admin"]);
        assert!(kind.matches("admin"));
        assert!(!kind.matches("admin-x"));
        assert!(!kind.matches("adm"));
    }

    #[test]
    fn classify_keeps_rule_and_catalog_order() {
        let catalog = ["docker-limits", "user-list", "server-ips", "user-add", "admin"];
        let groups = classify(RULES, &catalog);

        let labels: Vec<_> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, ["Users", "Server", "Admin", "Docs"]);
        assert_eq!(groups[0].commands, ["user-list", "user-add"]);
        assert_eq!(groups[1].commands, ["docker-limits", "server-ips"]);
        assert_eq!(groups[2].commands, ["admin"]);
    }

    #[test]
    fn classify_allows_overlap_and_omission() {
        let catalog = ["user-add", "unmatched"];
        let groups = classify(RULES, &catalog);

        assert_eq!(groups[0].commands, ["user-add"]);
        assert_eq!(groups[3].commands, ["user-add"]);
        assert!(groups
            .iter()
            .all(|g| !g.commands.iter().any(|c| c == "unmatched")));
    }

    #[test]
    fn classify_empty_catalog_yields_empty_groups() {
        let groups = classify::<&str>(RULES, &[]);
        assert_eq!(groups.len(), RULES.len());
        assert!(groups.iter().all(CategoryGroup::is_empty));
        assert!(groups.iter().all(|g| !g.abbreviated));
    }
}
