//! The demonstration page.

use ridge::alpine as x;
use ridge::domain::config::AssetsConfig;
use ridge::prelude::*;

const CROSS_ICON: &str = "M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z";
const CHECK_ICON: &str = "M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z";

/// Full document: the toggle switch and the masked date input.
#[must_use]
pub fn display(assets: &AssetsConfig) -> Node {
    layout(assets, [div([class("p-10 flex flex-col gap-10"), toggle(), mask_input()])])
}

/// `<!doctype html>` page shell with the script dependencies in `<head>`.
pub fn layout(assets: &AssetsConfig, children: impl IntoIterator<Item = Node>) -> Node {
    doctype(html([
        layout_head(assets),
        body([class("overscroll-x-none"), group(children)]),
    ]))
}

fn layout_head(assets: &AssetsConfig) -> Node {
    head([
        meta([charset("UTF-8")]),
        meta([name("viewport"), content("width=device-width, initial-scale=1.0")]),
        // Plugins must load before Alpine itself.
        deferred_script(&assets.alpine_mask),
        deferred_script(&assets.alpine),
        assets.tailwind.as_deref().map(deferred_script).unwrap_or_default(),
    ])
}

fn deferred_script(url: &str) -> Node {
    script([defer(), src(url)])
}

/// Checkbox styled as a switch; the knob shows a cross or a check mark.
#[must_use]
pub fn toggle() -> Node {
    label([
        x::data("{ isChecked: false }"),
        class(
            "relative inline-block h-8 w-14 cursor-pointer rounded-full transition [-webkit-tap-highlight-color:_transparent]",
        ),
        x::class("{ 'bg-gray-300': !isChecked, 'bg-green-500': isChecked }"),
        input([x::model("isChecked"), r#type("checkbox"), name("someFormInput"), class("sr-only")]),
        span([
            class(
                "absolute inset-y-0 m-1 inline-flex size-6 items-center justify-center rounded-full bg-white transition-all",
            ),
            attr(":class", "{ 'text-gray-400 start-0': !isChecked, 'start-6 text-green-600': isChecked }"),
            icon("!isChecked", CROSS_ICON),
            icon("isChecked", CHECK_ICON),
        ]),
    ])
}

fn icon(visible_when: &str, outline: &str) -> Node {
    svg([
        x::show(visible_when),
        flag("data-unchecked-icon"),
        attr("xmlns", "http://www.w3.org/2000/svg"),
        attr("viewBox", "0 0 20 20"),
        attr("fill", "currentColor"),
        class("size-4"),
        path([attr("fill-rule", "evenodd"), attr("d", outline), attr("clip-rule", "evenodd")]),
    ])
}

/// Text input formatted as `DD/MM/YYYY` while typing.
#[must_use]
pub fn mask_input() -> Node {
    input([
        x::data(""),
        x::mask("99/99/9999"),
        r#type("text"),
        placeholder("DD/MM/YYYY"),
        class("w-96 border rounded p-2"),
    ])
}
