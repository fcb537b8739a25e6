/// A specialized result type for shadow scope operations.
pub type Result<T, E = ScopeError> = std::result::Result<T, E>;

/// An error that can occur while building a scoped style or attaching a shadow root.
///
/// None of these are expected during normal operation. The mount protocol never attaches twice, so
/// [`ScopeError::AlreadyAttached`] only surfaces if a backend is driven by hand.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    /// A style template must have exactly one more literal segment than interpolated values.
    #[error("style template has {literals} literal segments for {values} values, expected {}", values + 1)]
    TemplateArity {
        /// The number of literal segments passed in.
        literals: usize,
        /// The number of interpolated values passed in.
        values: usize,
    },

    /// The platform rejected the style text while building a shared stylesheet.
    #[error("failed to parse scoped stylesheet: {0}")]
    StyleSheet(String),

    /// The host element already owns a shadow root.
    #[error("host element already has a shadow root attached")]
    AlreadyAttached,

    /// The platform has no shadow DOM at all.
    #[error("shadow DOM is not supported on this platform: {0}")]
    Unsupported(String),

    /// The platform refused to attach a shadow root for some other reason.
    #[error("failed to attach shadow root: {0}")]
    Attach(String),

    /// Styles could not be applied to a freshly attached shadow root.
    #[error("failed to apply styles to shadow root: {0}")]
    ApplyStyle(String),

    /// The projector could not place the rendered content inside the shadow root.
    #[error("failed to project content into shadow root: {0}")]
    Projection(String),
}
