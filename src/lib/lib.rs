// Library interface for wc-stream
// Exposes the streaming counter core so the CLI stays thin glue around it

mod counter;
mod error;
mod input;
mod render;

pub use counter::{StreamCounter, count_reader};
pub use error::CountError;
pub use input::Source;
pub use render::result_line;

/// File statistics for word count operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileCounts {
    pub lines: usize,
    pub words: usize,
    pub bytes: usize,
    pub chars: usize,
}
