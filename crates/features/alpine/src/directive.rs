use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};

/// Prefix shared by every Alpine directive attribute.
pub const PREFIX: &str = "x-";

/// The closed set of directives this crate can emit.
///
/// The string form of a variant is the attribute suffix that follows [`PREFIX`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Directive {
    Data,
    Init,
    Show,
    Bind,
    On,
    Text,
    Html,
    Model,
    Modelable,
    For,
    Transition,
    Effect,
    Ignore,
    Ref,
    Cloak,
    Teleport,
    If,
    Id,
    /// Mask plugin.
    Mask,
    /// Mask plugin, dynamic form.
    #[strum(serialize = "mask:dynamic")]
    MaskDynamic,
}

/// How many strings a directive's builder takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// No arguments; renders as a bare attribute.
    Bare,
    /// One expression.
    Value,
    /// A discriminator joined with `:`, then an expression.
    Keyed,
    /// Any number of modifiers appended to the name.
    Variadic,
}

impl Directive {
    #[must_use]
    pub fn suffix(self) -> &'static str {
        self.into()
    }

    /// Full attribute name, e.g. `x-mask:dynamic`.
    #[must_use]
    pub fn attribute_name(self) -> String {
        format!("{PREFIX}{}", self.suffix())
    }

    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Cloak | Self::Ignore => Arity::Bare,
            Self::Bind | Self::On => Arity::Keyed,
            Self::Transition => Arity::Variadic,
            _ => Arity::Value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_suffixes_are_lowercase_keywords() {
        assert_eq!(Directive::Data.suffix(), "data");
        assert_eq!(Directive::Modelable.suffix(), "modelable");
        assert_eq!(Directive::MaskDynamic.suffix(), "mask:dynamic");
        assert_eq!(Directive::If.to_string(), "if");
    }

    #[test]
    fn test_attribute_names_carry_prefix() {
        for directive in Directive::iter() {
            let name = directive.attribute_name();
            assert!(name.starts_with(PREFIX), "{name} lacks the prefix");
            assert_eq!(&name[PREFIX.len()..], directive.as_ref());
        }
    }

    #[test]
    fn test_arity_table() {
        let bare: Vec<_> = Directive::iter().filter(|d| d.arity() == Arity::Bare).collect();
        let keyed: Vec<_> = Directive::iter().filter(|d| d.arity() == Arity::Keyed).collect();
        assert_eq!(bare, [Directive::Ignore, Directive::Cloak]);
        assert_eq!(keyed, [Directive::Bind, Directive::On]);
        assert_eq!(Directive::Transition.arity(), Arity::Variadic);
        assert_eq!(Directive::iter().count(), 20);
    }
}
