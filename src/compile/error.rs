// ABOUTME: Error types for template tokenization and compilation
// ABOUTME: Defines failure cases for malformed template syntax

use thiserror::Error;

use crate::render::RenderError;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Unclosed tag starting at byte {position}: expected '{close}'")]
    UnclosedTag { position: usize, close: String },

    #[error("Empty placeholder at byte {position}")]
    EmptyPlaceholder { position: usize },

    #[error("Open and close tags must be non-empty, got '{open}' and '{close}'")]
    InvalidTags { open: String, close: String },

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, CompileError>;
