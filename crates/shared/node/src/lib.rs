//! # Node
//!
//! An immutable tree of HTML nodes built from plain functions and rendered to a
//! string or any writer.
//!
//! Children of an element are one ordered list: attribute nodes go into the start
//! tag, everything else becomes content. Groups are transparent, so a helper can
//! return several attributes (or several elements) as a single [`Node`].
//!
//! ```rust
//! use ridge_node::html::{class, div, span};
//! use ridge_node::{attr, flag, group, text};
//!
//! let page = div([
//!     class("card"),
//!     group([attr("role", "note"), flag("hidden")]),
//!     span([text("1 < 2")]),
//! ]);
//!
//! assert_eq!(
//!     page.to_string(),
//!     r#"<div class="card" role="note" hidden><span>1 &lt; 2</span></div>"#
//! );
//! ```

mod error;
pub mod html;
mod node;
mod render;

pub use crate::error::{RenderError, RenderErrorExt};
pub use crate::node::{
    Attribute, Element, Leaves, Node, NodeKind, attr, doctype, el, flag, group, map, raw, text,
};
