use clap::{ArgAction, Parser, ValueEnum};
use help_surface::render::ColorChoice;
use std::path::PathBuf;

use crate::config::{ConfigOverrides, HelpConfig, CONFIG_FILENAME, DEFAULT_INSTALL_ROOT};
use crate::store::ResourceStore;

#[derive(Parser, Debug)]
#[command(
    name = "opencli-help",
    version,
    about = "Show help for opencli commands"
)]
pub struct Cli {
    /// Command to describe (omit for an overview of all commands)
    pub command: Option<String>,

    /// opencli install root (scripts and manifest live here)
    #[arg(long, env = "OPENCLI_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Command manifest (default: <root>/aliases.txt)
    #[arg(long, env = "OPENCLI_MANIFEST", value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Config file (default: <root>/help.toml)
    #[arg(long, env = "OPENCLI_HELP_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// When to use colour
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    pub color: ColorArg,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "OPENCLI_LOG", default_value = "warn")]
    pub log_level: String,

    /// Increase verbosity (-v = debug, -vv = trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Show debug information (same as -v)
    #[arg(long)]
    pub debug: bool,

    /// Write logs to file (in addition to stderr)
    #[arg(long, env = "OPENCLI_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// List the commands that have built-in help and exit
    #[arg(long)]
    pub list_known: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> &str {
        match (self.verbose, self.debug) {
            (0, false) => self.log_level.as_str(),
            (0 | 1, _) => "debug",
            _ => "trace",
        }
    }

    /// The config file to read and whether the user named it.
    pub fn config_path(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => {
                let root = self
                    .root
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_INSTALL_ROOT));
                (root.join(CONFIG_FILENAME), false)
            }
        }
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            install_root: self.root.clone(),
            manifest: self.manifest.clone(),
        }
    }

    /// Defaults, then the config file, then flags and environment.
    pub fn load_config(&self, store: &dyn ResourceStore) -> HelpConfig {
        let (path, explicit) = self.config_path();
        HelpConfig::load_or_default(store, &path, explicit).apply(self.overrides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("opencli-help").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn command_is_optional() {
        assert_eq!(parse(&[]).command, None);
        assert_eq!(parse(&["user-add"]).command.as_deref(), Some("user-add"));
    }

    #[test]
    fn verbosity_raises_log_level() {
        let cli = parse(&["--log-level", "error"]);
        assert_eq!(cli.log_level(), "error");
        assert_eq!(parse(&["-v"]).log_level(), "debug");
        assert_eq!(parse(&["--debug"]).log_level(), "debug");
        assert_eq!(parse(&["-vv"]).log_level(), "trace");
    }

    #[test]
    fn config_defaults_to_install_root() {
        let cli = parse(&["--root", "/opt/opencli"]);
        assert_eq!(
            cli.config_path(),
            (PathBuf::from("/opt/opencli/help.toml"), false)
        );

        let cli = parse(&["--config", "/etc/help.toml"]);
        assert_eq!(cli.config_path(), (PathBuf::from("/etc/help.toml"), true));
    }

    #[test]
    fn flags_override_config_file() {
        let store = MemoryStore::new().with_file(
            "/opt/opencli/help.toml",
            "manifest = \"/from/file.txt\"\nscript_extension = \"bash\"\n",
        );
        let cli = parse(&["--root", "/opt/opencli", "--manifest", "/from/flag.txt"]);
        let config = cli.load_config(&store);

        assert_eq!(config.install_root, PathBuf::from("/opt/opencli"));
        assert_eq!(config.manifest_path(), PathBuf::from("/from/flag.txt"));
        assert_eq!(config.script_extension, "bash");
    }

    #[test]
    fn color_arg_maps_to_choice() {
        let cli = parse(&["--color", "never"]);
        assert_eq!(ColorChoice::from(cli.color), ColorChoice::Never);
    }
}
