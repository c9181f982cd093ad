mod category;
mod color;

pub use category::{classify, CategoryGroup, CategoryRule, RuleKind};
pub use color::Color;

#[cfg(feature = "render")]
pub mod render;

use std::collections::HashMap;

/// One documented flag or sub-action of a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionHelp {
    pub name: &'static str,
    pub description: &'static str,
}

/// Hand-maintained help for a known command.
///
/// Everything is `&'static` so a whole table can be declared as data and
/// shared for the life of the process.
#[derive(Clone, Copy, Debug)]
pub struct CommandHelp {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Invocation forms. Never empty.
    pub usage: &'static [&'static str],
    pub options: &'static [OptionHelp],
    pub examples: &'static [&'static str],
}

/// Help scraped from a command's script at runtime.
///
/// Coarser than [`CommandHelp`]: options are raw text lines lifted from the
/// script's own usage printout, not name/description pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptHelp {
    pub command: String,
    /// Empty when the script has no description header.
    pub description: String,
    /// Zero or one line.
    pub usage: Vec<String>,
    pub options: Vec<String>,
}

/// Lookup table of [`CommandHelp`] entries keyed by command name.
#[derive(Default)]
pub struct HelpRegistry {
    commands: HashMap<&'static str, CommandHelp>,
}

impl HelpRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn add(&mut self, help: CommandHelp) -> &mut Self {
        debug_assert!(
            !help.usage.is_empty(),
            "command without usage: {}",
            help.name
        );
        let previous = self.commands.insert(help.name, help);
        debug_assert!(previous.is_none(), "duplicate command name: {}", help.name);
        self
    }

    pub fn get(&self, name: &str) -> Option<&CommandHelp> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn all_sorted(&self) -> Vec<&CommandHelp> {
        let mut items: Vec<_> = self.commands.values().collect();
        items.sort_by_key(|help| help.name);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: CommandHelp = CommandHelp {
        name: "sample",
        title: "Sample Command",
        description: "Does sample things",
        usage: &["tool sample"],
        options: &[],
        examples: &[],
    };

    #[test]
    fn registry_get_and_names() {
        let mut registry = HelpRegistry::new();
        registry.add(SAMPLE).add(CommandHelp {
            name: "another",
            ..SAMPLE
        });

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("sample"));
        assert_eq!(registry.get("sample").map(|h| h.title), Some("Sample Command"));
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.names(), vec!["another", "sample"]);
    }

    #[test]
    #[should_panic(expected = "duplicate command name")]
    #[cfg(debug_assertions)]
    fn registry_rejects_duplicates() {
        let mut registry = HelpRegistry::new();
        registry.add(SAMPLE).add(SAMPLE);
    }

    #[test]
    #[should_panic(expected = "command without usage")]
    #[cfg(debug_assertions)]
    fn registry_rejects_missing_usage() {
        let mut registry = HelpRegistry::new();
        registry.add(CommandHelp {
            usage: &[],
            ..SAMPLE
        });
    }
}
