//! Value Object Module

pub mod note_content;
