#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! * [`macro@ridge_error`] turns a plain enum into a `thiserror` error with context support.
//! * [`macro@main`] boots an `async fn main` on a pre-configured Tokio runtime.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! ridge-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, parse_macro_input};

/// Attribute macro to bootstrap the specialized Tokio runtime.
///
/// Turns an `async fn main` into a plain `fn main` that builds a runtime from one of
/// the `ridge_runtime::RuntimeConfig` presets and blocks on the original body.
///
/// # Arguments
///
/// * `high_performance` - Server preset (larger stacks, longer keep-alive).
/// * `default` or nothing - Worker threads auto-detected from available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[ridge_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: adds `Debug` and `thiserror::Error` unless already derived.
/// * **Context Support**: generates a `<Name>Ext` trait with `.context(...)` for
///   `Result<T, Name>` and for `Result<T, Source>` of every wrapped source type.
/// * **Conversions**: `From<Source>` for each variant with a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * A private `format_context` helper for use inside `#[error(...)]` strings.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields; tuple and unit variants are rejected.
/// 3. A variant with a source must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use ridge_derive::ridge_error;
/// use std::borrow::Cow;
///
/// #[ridge_error]
/// pub enum RenderError {
///     #[error("Write error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
/// }
///
/// fn flush(out: &mut impl std::io::Write) -> Result<(), RenderError> {
///     out.flush().context("Flushing rendered page")?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn ridge_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
