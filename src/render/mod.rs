// ABOUTME: Rendering module for the tessera interpolation engine
// ABOUTME: Exposes the Renderer, resolver traits, tag adapters and one-shot entry points

pub mod error;
pub mod renderer;
pub mod resolver;
pub mod tag;

pub use error::{RenderError, Result};
pub use renderer::{Renderer, RendererOptions};
pub use resolver::{Resolve, ResolveAsync};
pub use tag::{render_tag, render_tag_async};

use crate::compile::{compile, CompileOptions};
use crate::value::Scope;

/// Compile a template and render it once against a scope.
///
/// Convenience for one-off renders; for repeated rendering of the same
/// template, [`compile`] once and reuse the [`Renderer`].
pub fn render(
    template: &str,
    scope: &Scope,
    options: CompileOptions,
) -> crate::compile::Result<String> {
    let mut renderer = compile(template, options)?;
    Ok(renderer.render(scope))
}

/// Same as [`render`] but resolves placeholders asynchronously.
pub async fn render_async(
    template: &str,
    scope: &Scope,
    options: CompileOptions,
) -> crate::compile::Result<String> {
    let renderer = compile(template, options)?;
    Ok(renderer.render_async(scope).await)
}
