// ABOUTME: Template tokenizer and compiler
// ABOUTME: Splits raw template text into literal segments and placeholder expressions

pub mod error;

pub use error::{CompileError, Result};

use tracing::trace;

use crate::render::{Renderer, RendererOptions};

/// A tokenized template: literal text segments interleaved with placeholder
/// expressions.
///
/// A well-formed stream always satisfies
/// `literals.len() == placeholders.len() + 1`; [`Renderer::new`] rejects
/// anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// Literal text segments, in order. Always one more than `placeholders`.
    pub literals: Vec<String>,
    /// Raw placeholder expression texts, e.g. the trimmed content of `{{ }}`.
    pub placeholders: Vec<String>,
}

impl Template {
    pub fn new(literals: Vec<String>, placeholders: Vec<String>) -> Self {
        Self {
            literals,
            placeholders,
        }
    }
}

/// Options for [`compile`].
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// The open and close tags delimiting placeholders.
    pub tags: (String, String),
    /// Options forwarded to the constructed [`Renderer`].
    pub renderer: RendererOptions,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            tags: ("{{".to_string(), "}}".to_string()),
            renderer: RendererOptions::default(),
        }
    }
}

/// Tokenize a raw template string into a [`Template`].
///
/// Placeholder expressions are trimmed; unclosed or empty placeholders are
/// compile errors.
pub fn tokenize(template: &str, tags: &(String, String)) -> Result<Template> {
    let (open, close) = tags;
    if open.is_empty() || close.is_empty() {
        return Err(CompileError::InvalidTags {
            open: open.clone(),
            close: close.clone(),
        });
    }

    let mut literals = Vec::new();
    let mut placeholders = Vec::new();
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find(open.as_str()) {
        literals.push(rest[..start].to_string());
        let after_open = start + open.len();
        let Some(end) = rest[after_open..].find(close.as_str()) else {
            return Err(CompileError::UnclosedTag {
                position: offset + start,
                close: close.clone(),
            });
        };
        let expr = rest[after_open..after_open + end].trim();
        if expr.is_empty() {
            return Err(CompileError::EmptyPlaceholder {
                position: offset + start,
            });
        }
        placeholders.push(expr.to_string());
        let consumed = after_open + end + close.len();
        rest = &rest[consumed..];
        offset += consumed;
    }
    literals.push(rest.to_string());

    Ok(Template::new(literals, placeholders))
}

/// Compile a raw template string into a reusable [`Renderer`].
pub fn compile(template: &str, options: CompileOptions) -> Result<Renderer> {
    let tokens = tokenize(template, &options.tags)?;
    trace!(
        placeholders = tokens.placeholders.len(),
        "compiled template"
    );
    Ok(Renderer::new(tokens, options.renderer)?)
}
