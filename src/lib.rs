// ABOUTME: Main library module for the tessera interpolation engine
// ABOUTME: Exports the compiler, renderer, path utilities and value model

pub mod compile;
pub mod path;
pub mod render;
pub mod value;

// Re-export commonly used types
pub use compile::{compile, tokenize, CompileError, CompileOptions, Template};
pub use render::{
    render, render_async, render_tag, render_tag_async, RenderError, Renderer, RendererOptions,
    Resolve, ResolveAsync,
};
pub use value::{stringify, Scope, StringifyOptions, Value};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
