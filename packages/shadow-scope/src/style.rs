use std::fmt::{self, Display, Write};

use crate::{Result, ScopeError};

/// The text of a scoped stylesheet, assembled from a style template.
///
/// A template is a list of literal segments with interpolated values between them. The text is the
/// literal and stringified value segments joined in order: `literal, value, literal, ..., literal`.
///
/// Most code builds one with the [`css!`](crate::css) macro:
///
/// ```rust
/// use shadow_scope::css;
///
/// let color = "blue";
/// let text = css!("p { color: " {color} "; }");
/// assert_eq!(text.as_str(), "p { color: blue; }");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyleText(String);

impl StyleText {
    /// Wrap style text that has no interpolations.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Build style text from the literal segments and values of a template.
    ///
    /// There must be exactly one more literal than there are values. Anything else is a
    /// [`ScopeError::TemplateArity`] error, including an empty literal list.
    ///
    /// ```rust
    /// use shadow_scope::StyleText;
    ///
    /// let text = StyleText::from_template(&["color: ", ";"], &[&"red"]).unwrap();
    /// assert_eq!(text.as_str(), "color: red;");
    /// ```
    pub fn from_template(literals: &[&str], values: &[&dyn Display]) -> Result<Self> {
        let Some((first, rest)) = literals.split_first() else {
            return Err(ScopeError::TemplateArity {
                literals: 0,
                values: values.len(),
            });
        };

        if rest.len() != values.len() {
            return Err(ScopeError::TemplateArity {
                literals: literals.len(),
                values: values.len(),
            });
        }

        let pieces: Vec<_> = values.iter().copied().zip(rest.iter().copied()).collect();
        Ok(Self::from_pieces(first, &pieces))
    }

    /// Build style text from the leading literal and `(value, following literal)` pairs.
    ///
    /// This shape can't violate the template invariant, so it never fails. The [`css!`](crate::css)
    /// macro expands to this.
    pub fn from_pieces(first: &str, rest: &[(&dyn Display, &str)]) -> Self {
        let literal_len: usize = rest.iter().map(|(_, literal)| literal.len()).sum();
        let mut text = String::with_capacity(first.len() + literal_len);
        text.push_str(first);
        for (value, literal) in rest {
            // writing into a String can't fail
            let _ = write!(text, "{value}");
            text.push_str(literal);
        }
        Self(text)
    }

    /// The assembled style text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the text and return the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for StyleText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StyleText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StyleText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Build a [`StyleText`] from a style template.
///
/// Literal segments are string literals and interpolated values are expressions wrapped in braces.
/// Any value that implements [`Display`] can be interpolated. The grammar always puts a literal at
/// both ends, so the result can't have a missing or extra segment.
///
/// ```rust
/// use shadow_scope::css;
///
/// let size = 12;
/// let color = "blue";
/// let text = css!(".title { font-size: " {size} "px; color: " {color} "; }");
/// assert_eq!(text.as_str(), ".title { font-size: 12px; color: blue; }");
///
/// // No interpolations at all
/// assert_eq!(css!("color: red;").as_str(), "color: red;");
/// ```
#[macro_export]
macro_rules! css {
    ($first:literal $({ $value:expr } $literal:literal)*) => {
        $crate::StyleText::from_pieces(
            $first,
            &[$((&$value as &dyn $crate::__private::Display, $literal)),*],
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_segments_in_order() {
        let text = StyleText::from_template(&["a", "b", "c"], &[&1, &2]).unwrap();
        assert_eq!(text.as_str(), "a1b2c");
    }

    #[test]
    fn empty_segments_add_nothing() {
        let text = StyleText::from_template(&["", ""], &[&"x"]).unwrap();
        assert_eq!(text.as_str(), "x");

        let text = StyleText::from_template(&[""], &[]).unwrap();
        assert_eq!(text.as_str(), "");
    }

    #[test]
    fn arity_is_checked() {
        assert_eq!(
            StyleText::from_template(&["a", "b"], &[]),
            Err(ScopeError::TemplateArity {
                literals: 2,
                values: 0
            })
        );
        assert_eq!(
            StyleText::from_template(&["a"], &[&1]),
            Err(ScopeError::TemplateArity {
                literals: 1,
                values: 1
            })
        );
        assert_eq!(
            StyleText::from_template(&[], &[]),
            Err(ScopeError::TemplateArity {
                literals: 0,
                values: 0
            })
        );
    }

    #[test]
    fn macro_interpolates() {
        let c = "blue";
        assert_eq!(css!("color: " {c} ";").as_str(), "color: blue;");

        let width = 2.5;
        let text = css!("a { border: " {width} "px solid " {c} "; }");
        assert_eq!(text.as_str(), "a { border: 2.5px solid blue; }");
    }

    #[test]
    fn macro_matches_template() {
        let c = "green";
        let from_macro = css!("x" {c} "y" {3} "z");
        let from_template = StyleText::from_template(&["x", "y", "z"], &[&c, &3]).unwrap();
        assert_eq!(from_macro, from_template);
    }
}
