// ABOUTME: The Renderer binding one tokenized template to its path cache and output buffer
// ABOUTME: Implements synchronous and concurrently-resolved asynchronous rendering

use std::fmt;
use std::sync::Arc;

use futures::future;
use tracing::{debug, instrument};

use super::error::{RenderError, Result};
use super::resolver::{effective_context, Resolve, ResolveAsync};
use crate::compile::Template;
use crate::path::{get_keys, to_path};
use crate::value::{stringify, Scope, StringifyOptions, Value};

/// Options fixed at renderer construction.
#[derive(Clone, Default)]
pub struct RendererOptions {
    /// Replaces default path lookup for every placeholder on `render`.
    pub resolve_fn: Option<Arc<dyn Resolve>>,
    /// Replaces default path lookup for every placeholder on `render_async`.
    pub resolve_fn_async: Option<Arc<dyn ResolveAsync>>,
    /// Context handed to resolvers when no per-call context is given.
    pub resolve_context: Option<Scope>,
    /// Fallback strings for values without a clean textual form.
    pub stringify: StringifyOptions,
}

impl fmt::Debug for RendererOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererOptions")
            .field("resolve_fn", &self.resolve_fn.is_some())
            .field("resolve_fn_async", &self.resolve_fn_async.is_some())
            .field("resolve_context", &self.resolve_context)
            .field("stringify", &self.stringify)
            .finish()
    }
}

/// Renders one tokenized template against per-call scopes.
///
/// Construction parses every placeholder expression into a path exactly once
/// and pre-fills the literal half of the assemble buffer; both live for the
/// renderer's lifetime, so a long-lived renderer pays tokenization and path
/// parsing only once no matter how many times it renders.
///
/// [`Renderer::render`] takes `&mut self` and reuses the internal buffer
/// across calls; the borrow rules make overlapping use of one renderer
/// unrepresentable. [`Renderer::render_async`] instead assembles into a fresh
/// buffer per call and takes `&self`, so one renderer can serve any number of
/// concurrent in-flight renders at the cost of the reuse optimization.
#[derive(Debug)]
pub struct Renderer {
    tokens: Template,
    options: RendererOptions,
    /// Parsed path per placeholder index, computed once at construction.
    path_cache: Vec<Vec<String>>,
    /// Length 2n+1: even slots hold literals (set once), odd slots are
    /// overwritten with stringified values on every sync render.
    assemble_cache: Vec<String>,
}

impl Renderer {
    /// Build a renderer from a token stream.
    ///
    /// Fails if the stream violates the interleaving invariant (one more
    /// literal than placeholders); downstream buffer indexing relies on it.
    pub fn new(tokens: Template, options: RendererOptions) -> Result<Self> {
        if tokens.literals.len() != tokens.placeholders.len() + 1 {
            return Err(RenderError::MismatchedTokens {
                literals: tokens.literals.len(),
                placeholders: tokens.placeholders.len(),
            });
        }

        let path_cache = tokens
            .placeholders
            .iter()
            .map(|expr| to_path(expr))
            .collect();

        let mut assemble_cache = vec![String::new(); tokens.placeholders.len() * 2 + 1];
        for (i, literal) in tokens.literals.iter().enumerate() {
            assemble_cache[i * 2] = literal.clone();
        }

        debug!(placeholders = tokens.placeholders.len(), "renderer built");

        Ok(Self {
            tokens,
            options,
            path_cache,
            assemble_cache,
        })
    }

    /// Render synchronously against a scope using the configured options.
    pub fn render(&mut self, scope: &Scope) -> String {
        self.render_with(scope, None, None)
    }

    /// Render synchronously with per-call resolver and context overrides.
    pub fn render_with(
        &mut self,
        scope: &Scope,
        resolve_fn: Option<&dyn Resolve>,
        resolve_context: Option<&Scope>,
    ) -> String {
        let resolver = resolve_fn.or(self.options.resolve_fn.as_deref());
        let context = effective_context(resolve_context, self.options.resolve_context.as_ref(), scope);

        let values: Vec<Value> = match resolver {
            None => self
                .path_cache
                .iter()
                .map(|path| get_keys(scope, path))
                .collect(),
            Some(resolver) => self
                .tokens
                .placeholders
                .iter()
                .map(|raw| resolver.resolve(raw, scope, context))
                .collect(),
        };

        self.assemble(&values)
    }

    /// Render asynchronously against a scope using the configured options.
    pub async fn render_async(&self, scope: &Scope) -> String {
        self.render_async_with(scope, None, None).await
    }

    /// Render asynchronously with per-call resolver and context overrides.
    ///
    /// All placeholder resolutions are started before any is awaited and
    /// joined in placeholder-index order, so a slow early placeholder never
    /// reorders the output, only delays its completion. Resolver precedence:
    /// per-call argument, then the configured async resolver, then the
    /// configured sync resolver, then default path lookup.
    #[instrument(skip_all, fields(placeholders = self.tokens.placeholders.len()))]
    pub async fn render_async_with(
        &self,
        scope: &Scope,
        resolve_fn: Option<&dyn ResolveAsync>,
        resolve_context: Option<&Scope>,
    ) -> String {
        let resolver = resolve_fn.or(self.options.resolve_fn_async.as_deref());
        let context = effective_context(resolve_context, self.options.resolve_context.as_ref(), scope);

        let values: Vec<Value> = if let Some(resolver) = resolver {
            let pending = self
                .tokens
                .placeholders
                .iter()
                .map(|raw| resolver.resolve(raw, scope, context));
            future::join_all(pending).await
        } else if let Some(resolver) = self.options.resolve_fn.as_deref() {
            self.tokens
                .placeholders
                .iter()
                .map(|raw| resolver.resolve(raw, scope, context))
                .collect()
        } else {
            self.path_cache
                .iter()
                .map(|path| get_keys(scope, path))
                .collect()
        };

        self.assemble_fresh(&values)
    }

    /// Stringify values into the odd slots of the reused buffer and join.
    fn assemble(&mut self, values: &[Value]) -> String {
        for (i, value) in values.iter().enumerate() {
            self.assemble_cache[i * 2 + 1] = stringify(value, &self.options.stringify);
        }
        self.assemble_cache.concat()
    }

    /// Assemble into a fresh buffer, leaving the renderer untouched.
    fn assemble_fresh(&self, values: &[Value]) -> String {
        let mut out = String::new();
        for (i, literal) in self.tokens.literals.iter().enumerate() {
            out.push_str(literal);
            if let Some(value) = values.get(i) {
                out.push_str(&stringify(value, &self.options.stringify));
            }
        }
        out
    }
}
