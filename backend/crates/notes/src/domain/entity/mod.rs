//! Entity Module

pub mod note;
