//! Facade crate for ridge.
//! Re-exports the node tree, the HTML helpers and the Alpine directives under one roof.
//! Keep this crate thin: it should compose other crates, not implement markup logic.
//!
//! ## Usage
//! - `use ridge::prelude::*;` for node builders and HTML helpers.
//! - `use ridge::alpine as x;` for directives.
//! - Enable `server` to reach the kernel's HTTP system routes.
//!
//! ```rust
//! use ridge::alpine as x;
//! use ridge::prelude::*;
//!
//! let field = input([x::data(""), x::mask("99/99/9999"), r#type("text")]);
//! assert_eq!(field.to_string(), r#"<input x-data="" x-mask="99/99/9999" type="text">"#);
//! ```

pub use ridge_alpine as alpine;
pub use ridge_domain as domain;
pub use ridge_kernel as kernel;
pub use ridge_node as node;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use ridge_kernel::server::router::{HEALTH_PATH, system_router};
    }
}

/// Node builders and every HTML helper.
pub mod prelude {
    pub use ridge_node::html::*;
    pub use ridge_node::{Node, attr, doctype, el, flag, group, map, raw, text};
}
