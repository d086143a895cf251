//! Named helpers for the elements and attributes used in hand-built pages.
//!
//! Anything not listed here is one call away with [`el`], [`attr`] or [`flag`].

use crate::node::{Node, attr, el, flag};

macro_rules! elements {
    ($($fn_name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("`<", $tag, ">` element.")]
            #[must_use]
            pub fn $fn_name(children: impl IntoIterator<Item = Node>) -> Node {
                el($tag, children)
            }
        )*
    };
}

macro_rules! attributes {
    ($($fn_name:ident => $name:literal),* $(,)?) => {
        $(
            #[doc = concat!("`", $name, "=\"...\"` attribute.")]
            #[must_use]
            pub fn $fn_name(value: impl Into<String>) -> Node {
                attr($name, value)
            }
        )*
    };
}

macro_rules! flags {
    ($($fn_name:ident => $name:literal),* $(,)?) => {
        $(
            #[doc = concat!("Bare `", $name, "` attribute.")]
            #[must_use]
            pub fn $fn_name() -> Node {
                flag($name)
            }
        )*
    };
}

elements! {
    a => "a",
    body => "body",
    button => "button",
    div => "div",
    form => "form",
    h1 => "h1",
    h2 => "h2",
    head => "head",
    html => "html",
    input => "input",
    label => "label",
    li => "li",
    link => "link",
    meta => "meta",
    p => "p",
    path => "path",
    script => "script",
    section => "section",
    span => "span",
    svg => "svg",
    template => "template",
    title => "title",
    ul => "ul",
}

attributes! {
    charset => "charset",
    class => "class",
    content => "content",
    href => "href",
    id => "id",
    lang => "lang",
    name => "name",
    placeholder => "placeholder",
    rel => "rel",
    src => "src",
    style => "style",
    r#type => "type",
    value => "value",
}

flags! {
    r#async => "async",
    checked => "checked",
    defer => "defer",
    disabled => "disabled",
    hidden => "hidden",
    required => "required",
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_element_has_no_end_tag() {
        let node = input([r#type("checkbox"), name("agree"), checked()]);
        assert_eq!(node.to_string(), r#"<input type="checkbox" name="agree" checked>"#);
    }

    #[test]
    fn test_script_with_src_and_defer() {
        let node = script([defer(), src("https://cdn.example/alpine.js")]);
        assert_eq!(node.to_string(), r#"<script defer src="https://cdn.example/alpine.js"></script>"#);
    }
}
