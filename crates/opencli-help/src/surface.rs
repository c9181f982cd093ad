use help_surface::render::writers::{AnsiWriter, PlainWriter};
use help_surface::render::{
    write_category_summary, write_command_detail, write_generic_detail, write_script_detail,
    OutputWriter, Segment, TerminalProfile, TextStyle,
};
use help_surface::{CategoryGroup, Color};
use std::io::{self, Write};

use crate::categories::overview_groups;
use crate::config::HelpConfig;
use crate::resolve::{resolve, Resolution};
use crate::store::ResourceStore;

pub const BANNER: &str = "OpenCLI - Command Line Interface for OpenPanel";

/// Width of the flag column in the common options block.
const FLAG_WIDTH: usize = 22;

const COMMON_OPTIONS: &[(&str, &str)] = &[
    ("--debug", "Show debug information"),
    ("--json", "Output in JSON format (where supported)"),
    ("--help", "Show help for a specific command"),
];

/// Print help for `command` (or the overview) to stdout.
///
/// A reader that stops early (`opencli help | head`) is not an error.
pub fn print_help(
    store: &dyn ResourceStore,
    config: &HelpConfig,
    command: Option<&str>,
    profile: &TerminalProfile,
) -> io::Result<()> {
    let mut out = io::stdout().lock();
    let written = write_help(store, config, command, profile, &mut out).and_then(|()| out.flush());
    tolerate_closed_output(written)
}

/// Print the names of commands with built-in help, one per line.
pub fn print_known_commands(names: &[&str]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    let written = write_known_commands(names, &mut out).and_then(|()| out.flush());
    tolerate_closed_output(written)
}

pub fn write_known_commands(names: &[&str], out: &mut dyn Write) -> io::Result<()> {
    for name in names {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

fn tolerate_closed_output(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("Output closed before help was fully written");
            Ok(())
        }
        other => other,
    }
}

/// Render help into `out`, styled or plain according to `profile`.
pub fn write_help(
    store: &dyn ResourceStore,
    config: &HelpConfig,
    command: Option<&str>,
    profile: &TerminalProfile,
    out: &mut dyn Write,
) -> io::Result<()> {
    if profile.styled() {
        let mut writer = AnsiWriter::new(out);
        render(store, config, command, profile, &mut writer)
    } else {
        let mut writer = PlainWriter::new(out);
        render(store, config, command, profile, &mut writer)
    }
}

fn render<W: OutputWriter>(
    store: &dyn ResourceStore,
    config: &HelpConfig,
    command: Option<&str>,
    profile: &TerminalProfile,
    writer: &mut W,
) -> io::Result<()> {
    match command.map(str::trim).filter(|c| !c.is_empty()) {
        None => {
            let groups = overview_groups(store, config);
            render_overview(config, &groups, profile, writer)
        }
        Some(command) => {
            let resolution = resolve(store, config, command);
            render_detail(config, &resolution, profile, writer)
        }
    }
}

pub fn render_overview<W: OutputWriter + ?Sized>(
    config: &HelpConfig,
    groups: &[CategoryGroup],
    profile: &TerminalProfile,
    writer: &mut W,
) -> io::Result<()> {
    let tool = config.tool_name.as_str();

    writer.write_blank()?;
    let mut banner_style = TextStyle::plain();
    banner_style.bold = true;
    banner_style.fg = profile.resolve_color(Color::Info);
    writer.write_line(&[Segment::new(BANNER, banner_style)])?;
    writer.write_blank()?;

    writer.write_line(&[Segment::plain("Usage:")])?;
    writer.write_line(&[Segment::plain(format!("  {tool} [command] [options]"))])?;
    writer.write_blank()?;

    writer.write_line(&[Segment::plain("Command Categories:")])?;
    write_category_summary(groups, profile, writer)?;
    writer.write_blank()?;

    write_common_options(writer, profile)?;
    writer.write_blank()?;

    write_pointers(writer, profile, tool)?;
    writer.write_blank()?;

    writer.write_line(&[
        Segment::plain("For more information, visit "),
        Segment::new(config.docs_url.as_str(), info_style(profile)),
    ])?;
    writer.write_blank()
}

pub fn render_detail<W: OutputWriter + ?Sized>(
    config: &HelpConfig,
    resolution: &Resolution<'_>,
    profile: &TerminalProfile,
    writer: &mut W,
) -> io::Result<()> {
    let tool = config.tool_name.as_str();
    match resolution {
        Resolution::Registry(help) => write_command_detail(help, profile, writer),
        Resolution::Script(help) => write_script_detail(tool, help, profile, writer),
        Resolution::Generic { command } => write_generic_detail(tool, command, profile, writer),
    }
}

fn write_common_options<W: OutputWriter + ?Sized>(
    writer: &mut W,
    profile: &TerminalProfile,
) -> io::Result<()> {
    let mut flag_style = TextStyle::plain();
    flag_style.fg = profile.resolve_color(Color::Warning);

    writer.write_line(&[Segment::plain("Common Options:")])?;
    for (flag, description) in COMMON_OPTIONS {
        writer.write_line(&[
            Segment::plain("  "),
            Segment::new(format!("{flag:<width$}", width = FLAG_WIDTH), flag_style),
            Segment::plain(*description),
        ])?;
    }
    Ok(())
}

fn write_pointers<W: OutputWriter + ?Sized>(
    writer: &mut W,
    profile: &TerminalProfile,
    tool: &str,
) -> io::Result<()> {
    let pointers = [
        (
            format!("{tool} commands"),
            " to see a complete list of available commands.",
        ),
        (
            format!("{tool} help <command>"),
            " for detailed information about a specific command.",
        ),
        (
            format!("{tool} faq"),
            " for answers to frequently asked questions.",
        ),
    ];

    for (command, rest) in pointers {
        writer.write_line(&[
            Segment::plain("Run "),
            Segment::new(command, info_style(profile)),
            Segment::plain(rest),
        ])?;
    }
    Ok(())
}

fn info_style(profile: &TerminalProfile) -> TextStyle {
    let mut style = TextStyle::plain();
    style.fg = profile.resolve_color(Color::Info);
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn help_text(store: &MemoryStore, command: Option<&str>) -> String {
        let mut out = Vec::new();
        write_help(
            store,
            &HelpConfig::default(),
            command,
            &TerminalProfile::plain(),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn overview_frames_categories() {
        let config = HelpConfig::default();
        let store = MemoryStore::new().with_file(
            config.manifest_path(),
            "opencli user-add\nopencli faq\n",
        );
        let text = help_text(&store, None);

        assert!(text.starts_with("\nOpenCLI - Command Line Interface for OpenPanel\n\nUsage:\n  opencli [command] [options]\n\nCommand Categories:\n"));
        assert!(text.contains(&format!("{:<28}user-add\n", "  User Management:")));
        assert!(text.contains(&format!("{:<28}faq\n", "  API & Documentation:")));
        assert!(!text.contains("Domain Management"));
        assert!(text.contains("\nCommon Options:\n  --debug               Show debug information\n"));
        assert!(text.contains("Run opencli help <command> for detailed information about a specific command.\n"));
        assert!(text.ends_with("For more information, visit https://dev.openpanel.com/cli/\n\n"));
        assert!(!text.ends_with("\n\n\n"));
    }

    #[test]
    fn blank_command_shows_overview() {
        let text = help_text(&MemoryStore::new(), Some("  "));
        assert!(text.contains("Command Categories:"));
        assert!(text.contains("Documentation:"));
    }

    #[test]
    fn ansi_output_strips_to_plain_output() {
        let config = HelpConfig::default();
        let store = MemoryStore::new();
        let mut plain = Vec::new();
        let mut styled = Vec::new();

        let always = TerminalProfile::detect_stdout(help_surface::render::ColorChoice::Always);
        write_help(&store, &config, Some("user-add"), &TerminalProfile::plain(), &mut plain).unwrap();
        write_help(&store, &config, Some("user-add"), &always, &mut styled).unwrap();

        let plain = String::from_utf8(plain).unwrap();
        let styled = String::from_utf8(styled).unwrap();
        assert_ne!(plain, styled);
        assert_eq!(console_strip(&styled), plain);
    }

    /// Accepts `limit` bytes, then fails the way a closed pipe does.
    struct ClosedAfter {
        limit: usize,
        written: Vec<u8>,
    }

    impl Write for ClosedAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let room = self.limit - self.written.len();
            if room == 0 {
                return Err(io::Error::from(io::ErrorKind::BrokenPipe));
            }
            let n = buf.len().min(room);
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_output_is_not_an_error() {
        let mut out = ClosedAfter {
            limit: 1,
            written: Vec::new(),
        };
        let result = write_help(
            &MemoryStore::new(),
            &HelpConfig::default(),
            None,
            &TerminalProfile::plain(),
            &mut out,
        );

        let err = result.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(out.written, b"\n");
        assert!(tolerate_closed_output(Err(err)).is_ok());
    }

    #[test]
    fn other_output_failures_still_surface() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        let err = tolerate_closed_output(Err(denied)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn known_commands_one_per_line() {
        let mut out = Vec::new();
        write_known_commands(&["admin", "faq"], &mut out).unwrap();
        assert_eq!(out, b"admin\nfaq\n");
    }

    fn console_strip(text: &str) -> String {
        let escape = regex::Regex::new("\u{1b}\\[[0-9;]*m").unwrap();
        escape.replace_all(text, "").into_owned()
    }
}
