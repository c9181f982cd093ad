//! Help subsystem for the opencli administration tool.
//!
//! Two entry points matter: [`surface::write_help`] renders either the
//! category overview or detailed help for one command, and
//! [`resolve::resolve`] decides where that detail comes from (the
//! built-in [`registry`], the command's script, or a generic pointer).

pub mod catalog;
pub mod categories;
pub mod cli;
pub mod config;
pub mod error;
pub mod introspect;
pub mod logging;
pub mod registry;
pub mod resolve;
pub mod store;
pub mod surface;

pub use config::HelpConfig;
pub use error::HelpError;
pub use resolve::Resolution;
