use ridge_alpine as x;
use ridge_alpine::Directive;
use ridge_node::html::{div, input};
use ridge_node::{Node, el};
use rstest::rstest;

fn in_div(node: Node) -> String {
    el("div", [node]).to_string()
}

#[rstest]
#[case("data", x::data)]
#[case("init", x::init)]
#[case("show", x::show)]
#[case("text", x::text)]
#[case("html", x::html)]
#[case("model", x::model)]
#[case("modelable", x::modelable)]
#[case("for", x::r#for)]
#[case("effect", x::effect)]
#[case("ref", x::r#ref)]
#[case("teleport", x::teleport)]
#[case("if", x::r#if)]
#[case("id", x::id)]
#[case("mask", x::mask)]
#[case("mask:dynamic", x::mask_dynamic)]
fn value_directives_render_named_attribute(#[case] suffix: &str, #[case] build: fn(&'static str) -> Node) {
    assert_eq!(in_div(build("balloon")), format!(r#"<div x-{suffix}="balloon"></div>"#));
}

#[rstest]
#[case("cloak", x::cloak)]
#[case("ignore", x::ignore)]
fn bare_directives_render_without_value(#[case] suffix: &str, #[case] build: fn() -> Node) {
    assert_eq!(in_div(build()), format!("<div x-{suffix}></div>"));
}

#[rstest]
#[case("bind", x::bind)]
#[case("on", x::on)]
fn keyed_directives_join_discriminator(
    #[case] suffix: &str,
    #[case] build: fn(&'static str, &'static str) -> Node,
) {
    assert_eq!(in_div(build("hot-air", "balloon")), format!(r#"<div x-{suffix}:hot-air="balloon"></div>"#));
}

#[test]
fn every_single_value_directive_is_covered() {
    use strum::IntoEnumIterator;

    let value_directives =
        Directive::iter().filter(|d| d.arity() == ridge_alpine::Arity::Value).count();
    assert_eq!(value_directives, 15);
}

#[test]
fn data_wraps_component_state() {
    let node = div([x::data("{ isChecked: false }")]);
    assert_eq!(node.to_string(), r#"<div x-data="{ isChecked: false }"></div>"#);
}

#[test]
fn mask_dynamic_uses_compound_name() {
    assert_eq!(in_div(x::mask_dynamic("99/99")), r#"<div x-mask:dynamic="99/99"></div>"#);
}

#[test]
fn empty_expressions_are_kept() {
    assert_eq!(in_div(x::data("")), r#"<div x-data=""></div>"#);
    assert_eq!(in_div(x::on("", "")), r#"<div x-on:=""></div>"#);
}

#[test]
fn class_is_bind_shorthand() {
    assert_eq!(x::class("{ active: on }"), x::bind("class", "{ active: on }"));
}

#[test]
fn event_modifiers_ride_in_the_event_name() {
    assert_eq!(
        in_div(x::on("keyup.enter", "submit()")),
        r#"<div x-on:keyup.enter="submit()"></div>"#
    );
}

#[test]
fn expressions_with_quotes_are_escaped_on_render() {
    let node = input([x::model("search"), x::init(r#"search = "hi""#)]);
    assert_eq!(node.to_string(), r#"<input x-model="search" x-init="search = &quot;hi&quot;">"#);
}

#[rstest]
#[case::none(x::transition(Vec::<&str>::new()), "<div x-transition></div>")]
#[case::empty_string(x::transition([""]), "<div x-transition></div>")]
#[case::macro_none(x::transition!(), "<div x-transition></div>")]
#[case::one_modifier(x::transition([".duration.500ms"]), "<div x-transition.duration.500ms></div>")]
#[case::one_subdirective(x::transition!(":enter"), "<div x-transition:enter></div>")]
#[case::many(
    x::transition([":enter.opacity", ":leave.scale"]),
    "<div x-transition:enter.opacity x-transition:leave.scale></div>"
)]
#[case::many_with_duplicates(
    x::transition!(".a", ".a", ""),
    "<div x-transition.a x-transition.a x-transition></div>"
)]
fn transition_shapes(#[case] node: Node, #[case] expected: &str) {
    assert_eq!(in_div(node), expected);
}
