//! Hand-written help for the commands that deserve more than their
//! script header. Entries here take precedence over script introspection.

use help_surface::{CommandHelp, HelpRegistry, OptionHelp};
use once_cell::sync::Lazy;

pub static REGISTRY: Lazy<HelpRegistry> = Lazy::new(build_registry);

/// Hand-written help for `name`, if there is any.
pub fn lookup(name: &str) -> Option<&'static CommandHelp> {
    let registry: &'static HelpRegistry = &REGISTRY;
    registry.get(name)
}

const DEBUG: OptionHelp = OptionHelp {
    name: "--debug",
    description: "Show debug information",
};

fn build_registry() -> HelpRegistry {
    let mut r = HelpRegistry::new();

    // ── User Management ──────────────────────────────────────────────
    r.add(CommandHelp {
        name: "user-add",
        title: "User Add Command",
        description: "Create a new user account",
        usage: &[
            "opencli user-add <username> <password> <email> <plan_name>",
            "opencli user-add <username> generate <email> <plan_name> --send-email",
        ],
        options: &[
            OptionHelp {
                name: "--send-email",
                description: "Send login details to the user's email",
            },
            DEBUG,
            OptionHelp {
                name: "--reseller=<user>",
                description: "Set reseller for this account",
            },
            OptionHelp {
                name: "--server=<ip>",
                description: "Create user on remote server",
            },
        ],
        examples: &[
            "opencli user-add john password123 john@example.com basic_plan",
            "opencli user-add mary generate mary@example.com premium_plan --send-email",
        ],
    })
    .add(CommandHelp {
        name: "user-delete",
        title: "User Delete Command",
        description: "Delete a user account and all associated data",
        usage: &["opencli user-delete <username> [-y] [--all]"],
        options: &[
            OptionHelp {
                name: "-y",
                description: "Skip confirmation prompt",
            },
            OptionHelp {
                name: "--all",
                description: "Delete all users (use with caution)",
            },
        ],
        examples: &[],
    })
    .add(CommandHelp {
        name: "user-list",
        title: "User List Command",
        description: "List all user accounts",
        usage: &["opencli user-list [--json] [--total]"],
        options: &[
            OptionHelp {
                name: "--json",
                description: "Output in JSON format",
            },
            OptionHelp {
                name: "--total",
                description: "Show only the total count of users",
            },
        ],
        examples: &[],
    })
    .add(CommandHelp {
        name: "user-ssh",
        title: "User SSH Command",
        description: "Manage SSH access for a user",
        usage: &["opencli user-ssh <check|enable|disable> <username>"],
        options: &[],
        examples: &[],
    });

    // ── Domain Management ────────────────────────────────────────────
    r.add(CommandHelp {
        name: "domains-add",
        title: "Domain Add Command",
        description: "Add a domain to user account",
        usage: &[
            "opencli domains-add <domain_name> <username> [--debug]",
            "opencli domains-add <domain_name> <username> --docroot <path>",
        ],
        options: &[
            OptionHelp {
                name: "--docroot <path>",
                description: "Custom document root path",
            },
            DEBUG,
        ],
        examples: &[
            "opencli domains-add example.com testuser",
            "opencli domains-add shop.example.com testuser --docroot /home/testuser/shop",
        ],
    })
    .add(CommandHelp {
        name: "domains-dns",
        title: "Domain DNS Command",
        description: "Manage DNS settings for domains",
        usage: &[
            "opencli domains-dns reconfig",
            "opencli domains-dns check <domain>",
            "opencli domains-dns reload <domain>",
        ],
        options: &[],
        examples: &[],
    });

    // ── Plan Management ──────────────────────────────────────────────
    r.add(CommandHelp {
        name: "plan-create",
        title: "Plan Create Command",
        description: "Create a new hosting plan",
        usage: &["opencli plan-create <name> <description> <email_limit> <ftp_limit> <domains_limit> <websites_limit> <disk_limit> <inodes_limit> <db_limit> <cpu> <ram> <docker_image> <bandwidth>"],
        options: &[],
        examples: &["opencli plan-create 'basic' 'Basic Hosting Plan' 10 5 10 5 50 500000 10 2 4 nginx 1000"],
    })
    .add(CommandHelp {
        name: "plan-edit",
        title: "Plan Edit Command",
        description: "Edit an existing hosting plan and its parameters",
        usage: &["opencli plan-edit plan_id new_plan_name new_description new_email_limit new_ftp_limit new_domains_limit new_websites_limit new_disk_limit new_inodes_limit new_db_limit new_cpu new_ram new_docker_image new_bandwidth"],
        options: &[DEBUG],
        examples: &[],
    })
    .add(CommandHelp {
        name: "plan-apply",
        title: "Plan Apply Command",
        description: "Apply plan changes to users",
        usage: &[
            "opencli plan-apply <plan_id> <username1> <username2>...",
            "opencli plan-apply <plan_id> --all [--debug] [--cpu] [--ram] [--dsk] [--net]",
        ],
        options: &[
            DEBUG,
            OptionHelp {
                name: "--all",
                description: "Apply to all users on the plan",
            },
            OptionHelp {
                name: "--cpu",
                description: "Apply only CPU limits",
            },
            OptionHelp {
                name: "--ram",
                description: "Apply only RAM limits",
            },
            OptionHelp {
                name: "--dsk",
                description: "Apply only disk limits",
            },
            OptionHelp {
                name: "--net",
                description: "Apply only network limits",
            },
        ],
        examples: &[],
    });

    // ── PHP Management ───────────────────────────────────────────────
    r.add(CommandHelp {
        name: "php-install",
        title: "PHP Install Command",
        description: "Install a PHP version for a user",
        usage: &["opencli php-install <username> <php_version>"],
        options: &[],
        examples: &[],
    })
    .add(CommandHelp {
        name: "php-ini",
        title: "PHP INI Command",
        description: "View or change php.ini values for a user",
        usage: &["opencli php-ini <username> <action> <setting> [value]"],
        options: &[],
        examples: &[],
    });

    // ── Administration ───────────────────────────────────────────────
    r.add(CommandHelp {
        name: "admin",
        title: "Admin Command",
        description: "Manage OpenAdmin service and administrators",
        usage: &["opencli admin <command> [options]"],
        options: &[
            OptionHelp {
                name: "on",
                description: "Enable and start the OpenAdmin service",
            },
            OptionHelp {
                name: "off",
                description: "Stop and disable the OpenAdmin service",
            },
            OptionHelp {
                name: "log",
                description: "Display the last 25 lines of the OpenAdmin error log",
            },
            OptionHelp {
                name: "logs",
                description: "Display live logs for all OpenAdmin services",
            },
            OptionHelp {
                name: "list",
                description: "List all current admin users",
            },
            OptionHelp {
                name: "new <user> <pass>",
                description: "Add a new admin user",
            },
            OptionHelp {
                name: "password <user> <pass>",
                description: "Reset admin password",
            },
            OptionHelp {
                name: "notifications <cmd> <param> [value]",
                description: "Control notification preferences",
            },
        ],
        examples: &[
            "opencli admin on",
            "opencli admin new admin StrongPassword123",
            "opencli admin notifications update cpu 90",
        ],
    })
    .add(CommandHelp {
        name: "config",
        title: "Config Command",
        description: "View or change configuration settings",
        usage: &[
            "opencli config get <setting_name>",
            "opencli config update <setting_name> <new_value>",
        ],
        options: &[],
        examples: &[],
    })
    .add(CommandHelp {
        name: "license",
        title: "License Command",
        description: "Manage OpenPanel Enterprise license",
        usage: &["opencli license [options]"],
        options: &[
            OptionHelp {
                name: "key",
                description: "View current license key",
            },
            OptionHelp {
                name: "verify",
                description: "Verify the license key",
            },
            OptionHelp {
                name: "info",
                description: "Display license information",
            },
            OptionHelp {
                name: "delete",
                description: "Delete the license key",
            },
            OptionHelp {
                name: "enterprise-XXXXXXXXXX",
                description: "Save the license key",
            },
        ],
        examples: &[],
    })
    .add(CommandHelp {
        name: "update",
        title: "Update Command",
        description: "Update OpenPanel system components",
        usage: &["opencli update [options]"],
        options: &[
            OptionHelp {
                name: "--check",
                description: "Check if update is available",
            },
            OptionHelp {
                name: "--force",
                description: "Force update even when autoupdate is disabled",
            },
        ],
        examples: &[],
    })
    .add(CommandHelp {
        name: "report",
        title: "Report Command",
        description: "Generate system reports for diagnostics",
        usage: &["opencli report [options]"],
        options: &[
            OptionHelp {
                name: "--public",
                description: "Upload report to support server",
            },
            OptionHelp {
                name: "--cli",
                description: "Include OpenCLI information",
            },
            OptionHelp {
                name: "--csf",
                description: "Include ConfigServer Firewall rules",
            },
            OptionHelp {
                name: "--ufw",
                description: "Include UFW firewall rules",
            },
        ],
        examples: &[],
    });

    // ── Documentation ────────────────────────────────────────────────
    r.add(CommandHelp {
        name: "commands",
        title: "Commands Command",
        description: "List all available OpenCLI commands",
        usage: &["opencli commands"],
        options: &[],
        examples: &[],
    })
    .add(CommandHelp {
        name: "faq",
        title: "FAQ Command",
        description: "Display answers to frequently asked questions",
        usage: &["opencli faq"],
        options: &[],
        examples: &[],
    })
    .add(CommandHelp {
        name: "help",
        title: "Help Command",
        description: "Display help information for OpenCLI commands",
        usage: &["opencli help", "opencli help <command>"],
        options: &[],
        examples: &[],
    });

    r
}
