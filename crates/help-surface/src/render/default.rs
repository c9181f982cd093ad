use crate::{CategoryGroup, Color, CommandHelp, ScriptHelp};
use std::io;

use super::{OutputWriter, Segment, TerminalProfile, TextStyle};

/// Column at which member lists start in the category summary.
pub const SUMMARY_LABEL_WIDTH: usize = 28;

/// Members shown per category before the list is cut with `, etc.`.
pub const SUMMARY_MAX_MEMBERS: usize = 5;

/// Column width of option names in the detail view.
pub const OPTION_NAME_WIDTH: usize = 25;

// ---------------------------------------------------------------------------
// Category summary (one category per line)
// ---------------------------------------------------------------------------

/// Member list for one summary line, or `None` for an empty group.
pub fn summarize_members(group: &CategoryGroup) -> Option<String> {
    if group.is_empty() {
        return None;
    }

    let shown = group.commands.len().min(SUMMARY_MAX_MEMBERS);
    let mut text = group.commands[..shown].join(", ");
    if group.commands.len() > SUMMARY_MAX_MEMBERS || group.abbreviated {
        text.push_str(", etc.");
    }
    Some(text)
}

pub fn write_category_summary<W>(
    groups: &[CategoryGroup],
    profile: &TerminalProfile,
    writer: &mut W,
) -> io::Result<()>
where
    W: OutputWriter + ?Sized,
{
    let label_style = styled(profile, Color::Success, false);

    for group in groups {
        let Some(members) = summarize_members(group) else {
            continue;
        };

        let label = format!("{}:", group.label);
        let used = 2 + label.chars().count();
        let pad = SUMMARY_LABEL_WIDTH.saturating_sub(used).max(1);

        writer.write_line(&[
            Segment::plain("  "),
            Segment::new(label, label_style),
            Segment::plain(" ".repeat(pad)),
            Segment::plain(members),
        ])?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Command detail from the static registry
// ---------------------------------------------------------------------------

pub fn write_command_detail<W>(
    help: &CommandHelp,
    profile: &TerminalProfile,
    writer: &mut W,
) -> io::Result<()>
where
    W: OutputWriter + ?Sized,
{
    write_title(writer, profile, help.title)?;
    writer.write_line(&[Segment::plain(help.description)])?;

    // ── Usage ────────────────────────────────────────────────────────
    writer.write_blank()?;
    writer.write_line(&[Segment::plain("Usage:")])?;
    for usage in help.usage {
        writer.write_line(&[Segment::plain(format!("  {usage}"))])?;
    }

    // ── Options ──────────────────────────────────────────────────────
    if !help.options.is_empty() {
        writer.write_blank()?;
        writer.write_line(&[Segment::plain("Options:")])?;

        let name_style = styled(profile, Color::Warning, false);
        for option in help.options {
            writer.write_line(&[
                Segment::plain("  "),
                Segment::new(
                    format!("{:<width$}", option.name, width = OPTION_NAME_WIDTH),
                    name_style,
                ),
                Segment::plain(format!(" {}", option.description)),
            ])?;
        }
    }

    // ── Examples ─────────────────────────────────────────────────────
    if !help.examples.is_empty() {
        writer.write_blank()?;
        writer.write_line(&[Segment::plain("Examples:")])?;

        let example_style = styled(profile, Color::Success, false);
        for example in help.examples {
            writer.write_line(&[
                Segment::plain("  "),
                Segment::new(*example, example_style),
            ])?;
        }
    }

    writer.write_blank()
}

// ---------------------------------------------------------------------------
// Command detail scraped from a script
// ---------------------------------------------------------------------------

pub fn write_script_detail<W>(
    tool: &str,
    help: &ScriptHelp,
    profile: &TerminalProfile,
    writer: &mut W,
) -> io::Result<()>
where
    W: OutputWriter + ?Sized,
{
    write_title(writer, profile, &format!("Help for '{}'", help.command))?;

    if !help.description.is_empty() {
        writer.write_line(&[Segment::plain(help.description.as_str())])?;
        writer.write_blank()?;
    }

    if !help.usage.is_empty() {
        writer.write_line(&[Segment::plain("Usage:")])?;
        for usage in &help.usage {
            writer.write_line(&[Segment::plain(format!("  {usage}"))])?;
        }
        writer.write_blank()?;
    }

    if !help.options.is_empty() {
        writer.write_line(&[Segment::plain("Options:")])?;
        for line in &help.options {
            writer.write_line(&[Segment::plain(format!("  {line}"))])?;
        }
        writer.write_blank()?;
    }

    write_commands_pointer(tool, profile, writer)?;
    writer.write_blank()
}

// ---------------------------------------------------------------------------
// Generic detail when nothing is known about the command
// ---------------------------------------------------------------------------

pub fn write_generic_detail<W>(
    tool: &str,
    command: &str,
    profile: &TerminalProfile,
    writer: &mut W,
) -> io::Result<()>
where
    W: OutputWriter + ?Sized,
{
    write_title(writer, profile, &format!("Help for '{command}'"))?;

    writer.write_line(&[Segment::plain(
        "To get usage information for this command, run:",
    )])?;
    writer.write_line(&[
        Segment::plain("  "),
        Segment::new(
            format!("{tool} {command} --help"),
            styled(profile, Color::Warning, false),
        ),
    ])?;

    write_commands_pointer(tool, profile, writer)?;
    writer.write_blank()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn styled(profile: &TerminalProfile, color: Color, bold: bool) -> TextStyle {
    TextStyle {
        fg: profile.resolve_color(color),
        bold,
    }
}

/// Blank, bold title, blank.
fn write_title<W>(writer: &mut W, profile: &TerminalProfile, title: &str) -> io::Result<()>
where
    W: OutputWriter + ?Sized,
{
    writer.write_blank()?;
    writer.write_line(&[Segment::new(title, styled(profile, Color::Info, true))])?;
    writer.write_blank()
}

fn write_commands_pointer<W>(tool: &str, profile: &TerminalProfile, writer: &mut W) -> io::Result<()>
where
    W: OutputWriter + ?Sized,
{
    writer.write_blank()?;
    writer.write_line(&[Segment::plain("For a list of all commands, run:")])?;
    writer.write_line(&[
        Segment::plain("  "),
        Segment::new(
            format!("{tool} commands"),
            styled(profile, Color::Warning, false),
        ),
    ])
}
