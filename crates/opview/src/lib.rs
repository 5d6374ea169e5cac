//! Opview - adaptive response rendering for the operator console.
//!
//! Turns heterogeneous, streaming tool output into renderer-agnostic table
//! descriptions: assemble fragments, decode, classify the payload shape,
//! derive a column schema, style each row, compose titled table blocks.
//! The guarantee to the console is total: `render` always returns a
//! renderable value, never an error.

pub mod assemble;
pub mod classify;
pub mod commands;
pub mod compose;
pub mod decode;
pub mod pipeline;
pub mod render;
pub mod schema;
pub mod style;
pub mod task;

pub use render::{Cell, Column, ColumnKind, RenderedOutput, Row, RowStyle, TableBlock};
pub use task::{TaskResult, TaskStatus};

/// Render one task's output for the named command.
///
/// The single entry point used by the console: looks up the command's
/// descriptor (falling back to the generic one) and runs the pipeline.
pub fn render(command: &str, status: TaskStatus, fragments: &[String]) -> RenderedOutput {
    pipeline::render(&commands::spec_for(command), status, fragments)
}

/// Convenience wrapper over a whole [`TaskResult`].
pub fn render_task(command: &str, task: &TaskResult) -> RenderedOutput {
    render(command, task.status, &task.fragments)
}
