//! Help scraped from a command's shell script.
//!
//! opencli scripts conventionally open with `# Description:` and
//! `# Usage:` comment lines, and many print their own usage block with
//! `echo "Usage: ..."` followed by `exit 1`. Extraction is best effort: a
//! script that follows none of this still yields an (empty) record.

use std::path::PathBuf;

use help_surface::ScriptHelp;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::HelpConfig;
use crate::error::{HelpError, Result};
use crate::store::ResourceStore;

static DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)# Description: (.*)").unwrap_or_else(|e| panic!("description pattern: {e}"))
});

static USAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)# Usage: (.*)").unwrap_or_else(|e| panic!("usage pattern: {e}"))
});

/// Everything between `echo "Usage:` and the first `exit 1` after it.
static USAGE_BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)echo\s+"Usage:(.*?)exit 1"#)
        .unwrap_or_else(|e| panic!("usage block pattern: {e}"))
});

/// Look up and scrape the script for `command`. `None` when there is no
/// script or it cannot be read.
pub fn introspect(
    store: &dyn ResourceStore,
    config: &HelpConfig,
    command: &str,
) -> Option<ScriptHelp> {
    match read_script(store, config, command) {
        Ok(text) => Some(extract(command, &text)),
        Err(e @ HelpError::ScriptNotFound { .. }) => {
            tracing::debug!(command, error = %e, "No script to introspect");
            None
        }
        Err(e) => {
            tracing::warn!(command, error = %e, "Script introspection failed");
            None
        }
    }
}

fn read_script(store: &dyn ResourceStore, config: &HelpConfig, command: &str) -> Result<String> {
    let path = script_path(config, command)?;
    if !store.exists(&path) {
        return Err(HelpError::ScriptNotFound { path });
    }
    store
        .read_to_string(&path)
        .map_err(|source| HelpError::ScriptRead { path, source })
}

/// Command names never contain path syntax; one that does has no script.
fn script_path(config: &HelpConfig, command: &str) -> Result<PathBuf> {
    let path = config.script_path(command);
    let suspicious = command.is_empty()
        || command.starts_with('.')
        || command.contains(['/', '\\'])
        || command.contains("..");
    if suspicious {
        return Err(HelpError::ScriptNotFound { path });
    }
    Ok(path)
}

/// Pull description, usage and option lines out of script text.
pub fn extract(command: &str, text: &str) -> ScriptHelp {
    let description = first_capture(&DESCRIPTION_RE, text).unwrap_or_default();
    let usage = first_capture(&USAGE_RE, text)
        .filter(|u| !u.is_empty())
        .into_iter()
        .collect();

    let options = USAGE_BLOCK_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|block| option_lines(block.as_str()))
        .unwrap_or_default();

    ScriptHelp {
        command: command.to_string(),
        description,
        usage,
        options,
    }
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// The first line is the remainder of the `Usage:` line itself.
fn option_lines(block: &str) -> Vec<String> {
    block
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.to_ascii_lowercase().contains("usage:"))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    const SCRIPT: &str = r#"#!/bin/bash
################################################################################
# Script Name: user/quota.sh
# Description: Set disk quota for a user
# Usage: opencli user-quota <username> <limit>
# Author: Someone
################################################################################

if [ "$#" -lt 2 ]; then
    echo "Usage: opencli user-quota <username> <limit> [--debug]"
    echo ""
    echo "  --debug    Show debug information"
    echo "  --all      Apply to every user"
    exit 1
fi
"#;

    #[test]
    fn header_fields_are_extracted() {
        let help = extract("x", "# Description: Foo\n# Usage: bar baz\n");
        assert_eq!(help.description, "Foo");
        assert_eq!(help.usage, ["bar baz"]);
        assert!(help.options.is_empty());
    }

    #[test]
    fn header_match_is_case_insensitive_and_first_wins() {
        let help = extract(
            "x",
            "# DESCRIPTION: First\r\n# description: Second\n# usage: run it\n",
        );
        assert_eq!(help.description, "First");
        assert_eq!(help.usage, ["run it"]);
    }

    #[test]
    fn usage_block_becomes_raw_option_lines() {
        let help = extract("user-quota", SCRIPT);
        assert_eq!(help.command, "user-quota");
        assert_eq!(help.description, "Set disk quota for a user");
        assert_eq!(help.usage, ["opencli user-quota <username> <limit>"]);
        assert_eq!(
            help.options,
            [
                r#"echo """#,
                r#"echo "  --debug    Show debug information""#,
                r#"echo "  --all      Apply to every user""#,
            ]
        );
    }

    #[test]
    fn single_line_usage_block_has_no_options() {
        let help = extract("x", "echo \"Usage: x <y>\"; exit 1\n");
        assert!(help.options.is_empty());
    }

    #[test]
    fn usage_mentions_are_dropped_in_any_case() {
        let script = "echo \"usage: x <y>\"\necho \"  -f  force\"\necho \"see USAGE: below\"\nexit 1\n";
        let help = extract("x", script);
        assert_eq!(help.options, [r#"echo "  -f  force""#]);
    }

    #[test]
    fn unterminated_usage_block_degrades_to_no_options() {
        let help = extract("x", "echo \"Usage: x <y>\"\necho \"  -f  force\"\n");
        assert!(help.options.is_empty());
    }

    #[test]
    fn script_without_markers_yields_empty_record() {
        let help = extract("x", "#!/bin/sh\necho hi\n");
        assert_eq!(
            help,
            ScriptHelp {
                command: "x".into(),
                ..ScriptHelp::default()
            }
        );
    }

    #[test]
    fn introspect_reads_script_from_install_root() {
        let config = HelpConfig::default();
        let store = MemoryStore::new().with_file("/usr/local/opencli/user/quota.sh", SCRIPT);

        let help = introspect(&store, &config, "user-quota").unwrap();
        assert_eq!(help.description, "Set disk quota for a user");
        assert_eq!(help.options.len(), 3);
    }

    #[test]
    fn missing_or_unreadable_script_is_absent() {
        let config = HelpConfig::default();
        let store = MemoryStore::new().with_unreadable("/usr/local/opencli/user/locked.sh");

        assert!(introspect(&store, &config, "user-missing").is_none());
        assert!(introspect(&store, &config, "user-locked").is_none());
    }

    #[test]
    fn path_like_names_never_reach_the_store() {
        let config = HelpConfig::default();
        let store = MemoryStore::new().with_file("/usr/local/opencli/../secret.sh", "# Description: no");

        assert!(introspect(&store, &config, "../secret").is_none());
        assert!(introspect(&store, &config, "user-../../x").is_none());
        assert!(introspect(&store, &config, "").is_none());
    }
}
