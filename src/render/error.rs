// ABOUTME: Error types for renderer construction
// ABOUTME: Covers token stream contract violations caught before any rendering happens

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(
        "Malformed token stream: expected literals to outnumber placeholders by one, \
         got {literals} literals and {placeholders} placeholders"
    )]
    MismatchedTokens { literals: usize, placeholders: usize },
}

pub type Result<T> = std::result::Result<T, RenderError>;
