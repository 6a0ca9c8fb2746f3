//! Application Layer
//!
//! Use cases for the writes that carry validation. Reads and deletes go
//! straight to the repository.

pub mod create_note;
pub mod update_note;

// Re-exports
pub use create_note::{CreateNoteInput, CreateNoteUseCase};
pub use update_note::{UpdateNoteInput, UpdateNoteUseCase};
