// ABOUTME: Template-literal style tag adapters
// ABOUTME: Builds closures that assemble a one-shot token stream and render it immediately

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use super::error::Result;
use super::renderer::{Renderer, RendererOptions};
use crate::compile::Template;
use crate::value::Scope;

/// Build a tag function bound to a scope.
///
/// The returned closure takes literal segments and the placeholder
/// expressions interleaved between them, builds a token stream from them
/// directly (no tokenizer pass) and renders it at once. Each invocation
/// constructs its own [`Renderer`]: the segments are fresh values at call
/// time, so the usual path-cache reuse has nothing to amortize.
pub fn render_tag(
    scope: Scope,
    options: RendererOptions,
) -> impl Fn(Vec<String>, Vec<String>) -> Result<String> {
    move |literals, placeholders| {
        let mut renderer = Renderer::new(Template::new(literals, placeholders), options.clone())?;
        Ok(renderer.render(&scope))
    }
}

/// Same as [`render_tag`] but resolves placeholders asynchronously.
pub fn render_tag_async(
    scope: Scope,
    options: RendererOptions,
) -> impl Fn(Vec<String>, Vec<String>) -> BoxFuture<'static, Result<String>> {
    let scope = Arc::new(scope);
    move |literals, placeholders| {
        let scope = Arc::clone(&scope);
        let options = options.clone();
        async move {
            let renderer = Renderer::new(Template::new(literals, placeholders), options)?;
            Ok(renderer.render_async(&scope).await)
        }
        .boxed()
    }
}
