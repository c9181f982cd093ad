mod default;
mod profile;
pub mod writers;

pub use default::{
    summarize_members, write_category_summary, write_command_detail, write_generic_detail,
    write_script_detail, OPTION_NAME_WIDTH, SUMMARY_LABEL_WIDTH, SUMMARY_MAX_MEMBERS,
};
pub use profile::{ColorChoice, ColorSupport, TerminalProfile};

use std::io;

#[derive(Clone, Copy, Debug, Default)]
pub struct TextStyle {
    pub fg: Option<console::Color>,
    pub bold: bool,
}

impl TextStyle {
    pub fn plain() -> Self {
        Self::default()
    }
}

#[derive(Clone, Debug)]
pub struct Segment {
    pub text: String,
    pub style: TextStyle,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextStyle::plain())
    }
}

pub trait OutputWriter {
    fn write_line(&mut self, segments: &[Segment]) -> io::Result<()>;

    fn write_blank(&mut self) -> io::Result<()> {
        self.write_line(&[])
    }
}
