mod ansi;
mod plain;

pub use ansi::AnsiWriter;
pub use plain::PlainWriter;
