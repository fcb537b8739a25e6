use crate::{Result, ShadowBackend, StyleStrategy, StyleText};

/// The styles of a scope, resolved once when the scope is defined.
///
/// Every shadow root created from the same [`ShadowScope`](crate::ShadowScope) applies the same
/// resource. In adopted mode that means every root references one parsed stylesheet object. In
/// inline mode each root gets its own `<style>` element with the same text.
#[derive(Debug)]
pub enum StyleResource<S> {
    /// A parsed stylesheet shared by reference between every root.
    Adopted {
        /// The shared stylesheet.
        sheet: S,
        /// The text the sheet was parsed from.
        text: StyleText,
    },

    /// Text to inject as a `<style>` element into each root.
    Inline(StyleText),
}

impl<S> StyleResource<S> {
    /// Resolve the style delivery for `text` on `backend`.
    ///
    /// The capability check and the parse happen here and nowhere else.
    pub fn build<B>(backend: &B, text: StyleText, strategy: StyleStrategy) -> Result<Self>
    where
        B: ShadowBackend<StyleSheet = S>,
    {
        let adopt = match strategy {
            StyleStrategy::Detect => backend.supports_adopted_style_sheets(),
            StyleStrategy::Inline => false,
        };

        if adopt {
            let sheet = backend.parse_style_sheet(&text)?;
            tracing::debug!(len = text.as_str().len(), "built shared stylesheet for scope");
            Ok(Self::Adopted { sheet, text })
        } else {
            tracing::debug!(?strategy, "scope styles will be injected inline");
            Ok(Self::Inline(text))
        }
    }

    /// The style text this resource was built from.
    pub fn text(&self) -> &StyleText {
        match self {
            Self::Adopted { text, .. } => text,
            Self::Inline(text) => text,
        }
    }

    /// The shared stylesheet, if this resource is in adopted mode.
    pub fn sheet(&self) -> Option<&S> {
        match self {
            Self::Adopted { sheet, .. } => Some(sheet),
            Self::Inline(_) => None,
        }
    }

    /// Returns true if roots adopt a shared stylesheet.
    pub fn is_adopted(&self) -> bool {
        matches!(self, Self::Adopted { .. })
    }

    /// Apply these styles to a freshly attached shadow root.
    pub fn apply<B>(&self, backend: &B, root: &B::Root) -> Result<()>
    where
        B: ShadowBackend<StyleSheet = S>,
    {
        match self {
            Self::Adopted { sheet, .. } => {
                backend.adopt_style_sheets(root, std::slice::from_ref(sheet))
            }
            Self::Inline(text) => backend.append_style_element(root, text),
        }
    }
}
