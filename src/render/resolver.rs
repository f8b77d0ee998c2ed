// ABOUTME: Resolver traits replacing default scope-walking per render call
// ABOUTME: Defines sync and async resolution plus the resolve-context precedence rule

use async_trait::async_trait;

use crate::value::{Scope, Value};

/// A synchronous placeholder resolver.
///
/// When configured, it fully replaces default path lookup: it is invoked once
/// per placeholder with the placeholder's raw, unparsed expression text, the
/// scope for this render call, and the effective resolve context. Handing
/// over the raw text rather than a parsed path keeps resolvers free to
/// implement an entirely different expression language.
pub trait Resolve: Send + Sync {
    fn resolve(&self, var_name: &str, scope: &Scope, context: &Scope) -> Value;
}

impl<F> Resolve for F
where
    F: Fn(&str, &Scope, &Scope) -> Value + Send + Sync,
{
    fn resolve(&self, var_name: &str, scope: &Scope, context: &Scope) -> Value {
        self(var_name, scope, context)
    }
}

/// An asynchronous placeholder resolver.
///
/// Same contract as [`Resolve`], but each resolution may await. The renderer
/// starts all resolutions before awaiting any of them, so independent slow
/// lookups overlap in wall-clock time.
#[async_trait]
pub trait ResolveAsync: Send + Sync {
    async fn resolve(&self, var_name: &str, scope: &Scope, context: &Scope) -> Value;
}

/// Every synchronous resolver works on the async path too.
#[async_trait]
impl<T: Resolve> ResolveAsync for T {
    async fn resolve(&self, var_name: &str, scope: &Scope, context: &Scope) -> Value {
        Resolve::resolve(self, var_name, scope, context)
    }
}

/// Pick the resolve context for one render call.
///
/// Precedence: explicit call argument, then the renderer-configured context,
/// then the scope itself.
pub(crate) fn effective_context<'a>(
    explicit: Option<&'a Scope>,
    configured: Option<&'a Scope>,
    scope: &'a Scope,
) -> &'a Scope {
    explicit.or(configured).unwrap_or(scope)
}
