//! # Alpine
//!
//! [Alpine.js](https://alpinejs.dev) directives as ridge attribute nodes.
//!
//! Every function returns a [`Node`] that drops into any element's child list.
//! Expressions are opaque strings: they are neither parsed nor validated here,
//! only escaped when the tree is rendered.
//!
//! ```rust
//! use ridge_alpine as x;
//! use ridge_node::html::{button, div, span};
//! use ridge_node::text;
//!
//! let toggle = div([
//!     x::data("{ open: false }"),
//!     button([x::on("click", "open = !open"), text("Toggle")]),
//!     span([x::show("open"), x::transition!(), text("Hello")]),
//! ]);
//!
//! assert_eq!(
//!     toggle.to_string(),
//!     r#"<div x-data="{ open: false }"><button x-on:click="open = !open">Toggle</button><span x-show="open" x-transition>Hello</span></div>"#
//! );
//! ```

mod directive;
mod transition;

pub use crate::directive::{Arity, Directive, PREFIX};
pub use crate::transition::transition;

use ridge_node::{Node, attr, flag};

fn valued(directive: Directive, expression: impl Into<String>) -> Node {
    attr(directive.attribute_name(), expression)
}

fn keyed(directive: Directive, key: impl AsRef<str>, expression: impl Into<String>) -> Node {
    attr(format!("{}:{}", directive.attribute_name(), key.as_ref()), expression)
}

fn bare(directive: Directive) -> Node {
    flag(directive.attribute_name())
}

/// Declares a component and its reactive data.
/// See <https://alpinejs.dev/directives/data>.
#[must_use]
pub fn data(expression: impl Into<String>) -> Node {
    valued(Directive::Data, expression)
}

/// Runs an expression when the element is initialized.
/// See <https://alpinejs.dev/directives/init>.
#[must_use]
pub fn init(expression: impl Into<String>) -> Node {
    valued(Directive::Init, expression)
}

/// Toggles the element's `display` from an expression.
/// See <https://alpinejs.dev/directives/show>.
#[must_use]
pub fn show(expression: impl Into<String>) -> Node {
    valued(Directive::Show, expression)
}

/// Binds the HTML attribute `attribute` to an expression: `x-bind:<attribute>`.
/// See <https://alpinejs.dev/directives/bind>.
#[must_use]
pub fn bind(attribute: impl AsRef<str>, expression: impl Into<String>) -> Node {
    keyed(Directive::Bind, attribute, expression)
}

/// `x-bind:class`.
#[must_use]
pub fn class(expression: impl Into<String>) -> Node {
    bind("class", expression)
}

/// Runs an expression on a dispatched DOM event: `x-on:<event>`.
///
/// Event modifiers ride along in `event` (`"click.outside"`, `"keyup.enter"`).
/// See <https://alpinejs.dev/directives/on>.
#[must_use]
pub fn on(event: impl AsRef<str>, expression: impl Into<String>) -> Node {
    keyed(Directive::On, event, expression)
}

/// Sets the element's text content.
/// See <https://alpinejs.dev/directives/text>.
#[must_use]
pub fn text(expression: impl Into<String>) -> Node {
    valued(Directive::Text, expression)
}

/// Sets the element's `innerHTML`.
/// See <https://alpinejs.dev/directives/html>.
#[must_use]
pub fn html(expression: impl Into<String>) -> Node {
    valued(Directive::Html, expression)
}

/// Two-way binds an input's value to component data.
/// See <https://alpinejs.dev/directives/model>.
#[must_use]
pub fn model(expression: impl Into<String>) -> Node {
    valued(Directive::Model, expression)
}

/// Exposes a property as the target of an outer `x-model`.
/// See <https://alpinejs.dev/directives/modelable>.
#[must_use]
pub fn modelable(expression: impl Into<String>) -> Node {
    valued(Directive::Modelable, expression)
}

/// Repeats a `<template>` over a list.
/// See <https://alpinejs.dev/directives/for>.
#[must_use]
pub fn r#for(expression: impl Into<String>) -> Node {
    valued(Directive::For, expression)
}

/// Re-runs an expression whenever its dependencies change.
/// See <https://alpinejs.dev/directives/effect>.
#[must_use]
pub fn effect(expression: impl Into<String>) -> Node {
    valued(Directive::Effect, expression)
}

/// Stops Alpine from initializing this subtree.
/// See <https://alpinejs.dev/directives/ignore>.
#[must_use]
pub fn ignore() -> Node {
    bare(Directive::Ignore)
}

/// Registers the element under `$refs`.
/// See <https://alpinejs.dev/directives/ref>.
#[must_use]
pub fn r#ref(expression: impl Into<String>) -> Node {
    valued(Directive::Ref, expression)
}

/// Hides the element until Alpine has loaded.
/// See <https://alpinejs.dev/directives/cloak>.
#[must_use]
pub fn cloak() -> Node {
    bare(Directive::Cloak)
}

/// Moves a `<template>`'s content to the element matched by a selector.
/// See <https://alpinejs.dev/directives/teleport>.
#[must_use]
pub fn teleport(expression: impl Into<String>) -> Node {
    valued(Directive::Teleport, expression)
}

/// Adds or removes a `<template>`'s content, unlike [`show`] which only hides it.
/// See <https://alpinejs.dev/directives/if>.
#[must_use]
pub fn r#if(expression: impl Into<String>) -> Node {
    valued(Directive::If, expression)
}

/// Scopes ids generated with `$id()`.
/// See <https://alpinejs.dev/directives/id>.
#[must_use]
pub fn id(expression: impl Into<String>) -> Node {
    valued(Directive::Id, expression)
}

/// Formats an input as the user types, e.g. `"99/99/9999"`.
/// Mask plugin, see <https://alpinejs.dev/plugins/mask>.
#[must_use]
pub fn mask(pattern: impl Into<String>) -> Node {
    valued(Directive::Mask, pattern)
}

/// Like [`mask`], with the pattern computed by an expression.
/// Mask plugin, see <https://alpinejs.dev/plugins/mask>.
#[must_use]
pub fn mask_dynamic(expression: impl Into<String>) -> Node {
    valued(Directive::MaskDynamic, expression)
}
