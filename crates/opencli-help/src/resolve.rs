//! Detail lookup: an ordered chain of resolvers, first answer wins.

use help_surface::{CommandHelp, ScriptHelp};

use crate::config::HelpConfig;
use crate::introspect::introspect;
use crate::registry::lookup;
use crate::store::ResourceStore;

/// What is known about one command.
#[derive(Debug)]
pub enum Resolution<'a> {
    /// Hand-written help.
    Registry(&'a CommandHelp),
    /// Help scraped from the command's script.
    Script(ScriptHelp),
    /// Nothing found; point the user at the command's own `--help`.
    Generic { command: String },
}

impl Resolution<'_> {
    /// Short name of the layer that answered.
    pub fn source(&self) -> &'static str {
        match self {
            Resolution::Registry(_) => "registry",
            Resolution::Script(_) => "script",
            Resolution::Generic { .. } => "generic",
        }
    }
}

pub trait Resolver<'a> {
    fn resolve(&self, command: &str) -> Option<Resolution<'a>>;
}

/// The built-in hand-written entries.
pub struct RegistryResolver;

impl Resolver<'static> for RegistryResolver {
    fn resolve(&self, command: &str) -> Option<Resolution<'static>> {
        lookup(command).map(Resolution::Registry)
    }
}

pub struct ScriptResolver<'s> {
    store: &'s dyn ResourceStore,
    config: &'s HelpConfig,
}

impl<'s> ScriptResolver<'s> {
    pub fn new(store: &'s dyn ResourceStore, config: &'s HelpConfig) -> Self {
        Self { store, config }
    }
}

impl<'a> Resolver<'a> for ScriptResolver<'_> {
    fn resolve(&self, command: &str) -> Option<Resolution<'a>> {
        introspect(self.store, self.config, command).map(Resolution::Script)
    }
}

/// Ask each resolver in turn; fall back to [`Resolution::Generic`].
pub fn resolve_with<'a>(resolvers: &[&dyn Resolver<'a>], command: &str) -> Resolution<'a> {
    resolvers
        .iter()
        .find_map(|resolver| resolver.resolve(command))
        .unwrap_or_else(|| Resolution::Generic {
            command: command.to_string(),
        })
}

/// The standard chain: static registry, then script introspection.
pub fn resolve(
    store: &dyn ResourceStore,
    config: &HelpConfig,
    command: &str,
) -> Resolution<'static> {
    let scripts = ScriptResolver::new(store, config);
    let chain: [&dyn Resolver<'static>; 2] = [&RegistryResolver, &scripts];
    let resolution = resolve_with(&chain, command);

    tracing::debug!(command, source = resolution.source(), "Resolved command help");
    resolution
}
