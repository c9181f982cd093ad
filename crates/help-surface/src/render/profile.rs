use crate::Color;
use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    None,
    Basic16,
    Ansi256,
    TrueColor,
}

/// User override for colour detection (`--color`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone)]
pub struct TerminalProfile {
    pub color: ColorSupport,
}

impl TerminalProfile {
    pub fn detect_stdout(choice: ColorChoice) -> Self {
        let color = match choice {
            ColorChoice::Never => ColorSupport::None,
            ColorChoice::Always => ColorSupport::Basic16,
            ColorChoice::Auto => detect_color_support(std::io::stdout().is_terminal()),
        };

        Self { color }
    }

    pub fn with_color(color: ColorSupport) -> Self {
        Self { color }
    }

    /// Profile for non-terminal output: no colour, no escapes.
    pub fn plain() -> Self {
        Self::with_color(ColorSupport::None)
    }

    /// Whether output should go through the ANSI writer.
    pub fn styled(&self) -> bool {
        self.color != ColorSupport::None
    }

    pub fn resolve_color(&self, c: Color) -> Option<console::Color> {
        match self.color {
            ColorSupport::None => None,
            ColorSupport::Basic16 => Some(color_to_basic(c)),
            ColorSupport::Ansi256 => Some(color_to_256(c)),
            ColorSupport::TrueColor => Some(color_to_rgb(c)),
        }
    }
}

fn detect_color_support(interactive: bool) -> ColorSupport {
    if !interactive {
        return ColorSupport::None;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorSupport::None;
    }

    let support = supports_color::on(supports_color::Stream::Stdout);
    match support {
        Some(info) if info.has_16m => ColorSupport::TrueColor,
        Some(info) if info.has_256 => ColorSupport::Ansi256,
        Some(_) => ColorSupport::Basic16,
        None => ColorSupport::None,
    }
}

fn color_to_basic(color: Color) -> console::Color {
    match color {
        Color::Info => console::Color::Cyan,
        Color::Success => console::Color::Green,
        Color::Warning => console::Color::Yellow,
    }
}

/// Palette slots for terminals with a 256-colour table.
fn color_to_256(color: Color) -> console::Color {
    let index = match color {
        Color::Info => 38,
        Color::Success => 71,
        Color::Warning => 179,
    };
    console::Color::Color256(index)
}

/// `console` has no 24-bit colour, so exact shades go through the
/// 6x6x6 cube.
fn color_to_rgb(color: Color) -> console::Color {
    let (r, g, b) = match color {
        Color::Info => (86, 182, 194),
        Color::Success => (152, 195, 121),
        Color::Warning => (229, 192, 123),
    };
    console::Color::Color256(rgb_to_ansi256(r, g, b))
}

fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        }
        if r > 248 {
            return 231;
        }
        return 232 + ((r as u16 - 8) / 10) as u8;
    }

    let cube = |v: u8| ((v as f32 / 255.0) * 5.0).round() as u8;
    16 + 36 * cube(r) + 6 * cube(g) + cube(b)
}
