//! Payload Assembler.
//!
//! Joins a task's ordered output fragments into one decodable buffer.
//! Producers split encoded text at arbitrary byte boundaries, so fragments
//! are concatenated with no separator. Error-status tasks short-circuit:
//! their output is unspecified free text and is never parsed.

use crate::task::TaskStatus;

/// Placeholder shown while a task has produced no output.
pub const NO_RESPONSE_YET: &str = "No response yet from agent...";

/// Result of fragment assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assembled {
    /// Task reported failure; carries the verbatim fragment concatenation.
    Failed(String),
    /// Non-error task with no output yet.
    Empty,
    /// Assembled buffer ready for structured decoding.
    Buffer(String),
}

/// Assemble `(status, fragments)` into one buffer. Pure.
pub fn assemble(status: TaskStatus, fragments: &[String]) -> Assembled {
    if status.is_error() {
        return Assembled::Failed(fragments.concat());
    }
    if fragments.is_empty() {
        return Assembled::Empty;
    }
    Assembled::Buffer(fragments.concat())
}
