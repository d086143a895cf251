use crate::directive::Directive;
use ridge_node::{Node, flag, group};

/// `x-transition`, optionally with modifiers or sub-directives.
///
/// Each modifier is appended to `x-transition` as-is, so it must bring its own
/// punctuation (`.duration.500ms`, `:enter`). The return shape follows the count:
///
/// * none, or a single empty string: bare `x-transition`;
/// * one modifier: a single bare attribute `x-transition<modifier>`;
/// * two or more: a group with one attribute per modifier, in order, duplicates kept.
///
/// See <https://alpinejs.dev/directives/transition>.
///
/// ```rust
/// use ridge_alpine::transition;
/// use ridge_node::el;
///
/// let node = el("div", [transition([":enter.duration.500ms", ":leave.duration.400ms"])]);
/// assert_eq!(
///     node.to_string(),
///     "<div x-transition:enter.duration.500ms x-transition:leave.duration.400ms></div>"
/// );
/// ```
#[must_use]
pub fn transition<I>(modifiers: I) -> Node
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let base = Directive::Transition.attribute_name();
    let mut names = modifiers.into_iter().map(|modifier| format!("{base}{}", modifier.as_ref()));

    let Some(first) = names.next() else {
        return flag(base.as_str());
    };
    let Some(second) = names.next() else {
        return flag(first);
    };

    group([first, second].into_iter().chain(names).map(flag))
}

/// Variadic form of [`transition()`](crate::transition()).
///
/// ```rust
/// use ridge_alpine::transition;
///
/// assert_eq!(transition!().to_string(), " x-transition");
/// assert_eq!(transition!(".opacity").to_string(), " x-transition.opacity");
/// assert_eq!(transition!(".opacity", String::from(".scale.80")).to_string(), " x-transition.opacity x-transition.scale.80");
/// ```
#[macro_export]
macro_rules! transition {
    () => {
        $crate::transition(::std::iter::empty::<&str>())
    };
    ($($modifier:expr),+ $(,)?) => {
        $crate::transition([$(::std::convert::AsRef::<str>::as_ref(&$modifier)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_modifiers_is_bare() {
        let node = transition(Vec::<String>::new());
        assert_eq!(node.as_attribute().map(|a| (a.name(), a.value())), Some(("x-transition", None)));
    }

    #[test]
    fn test_single_empty_modifier_collapses() {
        assert_eq!(transition([""]), transition(std::iter::empty::<&str>()));
    }

    #[test]
    fn test_single_modifier_is_one_attribute() {
        let node = transition([".scale.90"]);
        assert_eq!(node.as_attribute().map(ridge_node::Attribute::name), Some("x-transition.scale.90"));
    }

    #[test]
    fn test_many_modifiers_form_a_group() {
        let node = transition([":enter", ":enter", ""]);
        let names: Vec<_> = node
            .as_group()
            .expect("two or more modifiers build a group")
            .iter()
            .filter_map(Node::as_attribute)
            .map(ridge_node::Attribute::name)
            .collect();
        assert_eq!(names, ["x-transition:enter", "x-transition:enter", "x-transition"]);
    }

    #[test]
    fn test_macro_matches_function() {
        assert_eq!(transition!(), transition(Vec::<&str>::new()));
        assert_eq!(transition!(".opacity"), transition([".opacity"]));
        assert_eq!(transition!(".in", ".out",), transition([".in", ".out"]));
    }
}
