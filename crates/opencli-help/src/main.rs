use clap::Parser;
use help_surface::render::TerminalProfile;

use opencli_help::cli::Cli;
use opencli_help::logging;
use opencli_help::registry::REGISTRY;
use opencli_help::store::LocalFs;
use opencli_help::surface;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Hold the non-blocking guards for the lifetime of main so logs flush on exit.
    let _log_guards = logging::init_logging(
        logging::env_filter(cli.log_level()),
        cli.log_file.as_deref(),
    );

    let store = LocalFs;
    let config = cli.load_config(&store);
    tracing::debug!(
        install_root = %config.install_root.display(),
        manifest = %config.manifest_path().display(),
        "Help configuration"
    );

    if cli.list_known {
        surface::print_known_commands(&REGISTRY.names())?;
        return Ok(());
    }

    let profile = TerminalProfile::detect_stdout(cli.color.into());
    surface::print_help(&store, &config, cli.command.as_deref(), &profile)?;
    Ok(())
}
