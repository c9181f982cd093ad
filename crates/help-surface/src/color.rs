/// Semantic colour roles. The terminal profile maps them to concrete
/// terminal colours, or drops them when colour is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Titles, banners and inline command references.
    Info,
    /// Category labels and examples.
    Success,
    /// Flags and commands the user is told to run.
    Warning,
}
