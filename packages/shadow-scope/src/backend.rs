use crate::{Result, StyleText};

/// The encapsulation mode of a shadow root.
///
/// Open roots can be reached from outside through the host's `shadowRoot` property, which lets
/// tests and devtools inspect the projected content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShadowRootMode {
    /// The root is reachable from its host.
    #[default]
    Open,
    /// The root is hidden from its host.
    Closed,
}

impl ShadowRootMode {
    /// The name of this mode as the DOM spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            ShadowRootMode::Open => "open",
            ShadowRootMode::Closed => "closed",
        }
    }
}

/// The platform operations a shadow scope needs.
///
/// A backend owns the real tree. It knows how to attach a shadow root to a host element, whether
/// shadow roots can share a parsed stylesheet, and how to apply styles to a root.
///
/// Handles are cheap clones of references into the platform tree, the same way `web_sys` types
/// behave.
pub trait ShadowBackend: Clone + 'static {
    /// A handle to the host container element.
    type Host: Clone;

    /// A handle to a shadow root.
    type Root: Clone;

    /// A parsed stylesheet that many shadow roots can adopt at once.
    type StyleSheet;

    /// Returns true if shadow roots on this platform can adopt shared stylesheets.
    ///
    /// This is only consulted once per [`ShadowScope`](crate::ShadowScope).
    fn supports_adopted_style_sheets(&self) -> bool;

    /// Parse style text into a shareable stylesheet.
    fn parse_style_sheet(&self, text: &StyleText) -> Result<Self::StyleSheet>;

    /// Attach a new shadow root to `host`.
    ///
    /// Must fail with [`ScopeError::AlreadyAttached`](crate::ScopeError::AlreadyAttached) if the
    /// host already has one.
    fn attach_shadow(&self, host: &Self::Host, mode: ShadowRootMode) -> Result<Self::Root>;

    /// Replace the adopted stylesheets of `root` with `sheets`.
    fn adopt_style_sheets(&self, root: &Self::Root, sheets: &[Self::StyleSheet]) -> Result<()>;

    /// Append a `<style>` element containing `text` to `root`.
    fn append_style_element(&self, root: &Self::Root, text: &StyleText) -> Result<()>;
}
