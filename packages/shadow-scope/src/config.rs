use std::borrow::Cow;

use crate::ShadowRootMode;

/// How a scope delivers its styles to each shadow root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StyleStrategy {
    /// Share one parsed stylesheet between every root if the platform supports adopted
    /// stylesheets, otherwise inject a `<style>` element per root.
    #[default]
    Detect,

    /// Always inject a `<style>` element per root, even if adopted stylesheets are available.
    Inline,
}

/// Configuration for a [`ShadowScope`](crate::ShadowScope).
///
/// # Example
///
/// ```rust
/// use shadow_scope::{ScopeConfig, ShadowRootMode, StyleStrategy};
///
/// let cfg = ScopeConfig::new()
///     .host_tag("section")
///     .mode(ShadowRootMode::Closed)
///     .style_strategy(StyleStrategy::Inline);
/// assert_eq!(cfg.get_host_tag(), "section");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeConfig {
    pub(crate) mode: ShadowRootMode,
    pub(crate) host_tag: Cow<'static, str>,
    pub(crate) style_strategy: StyleStrategy,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            mode: ShadowRootMode::Open,
            host_tag: Cow::Borrowed("div"),
            style_strategy: StyleStrategy::Detect,
        }
    }
}

impl ScopeConfig {
    /// Create a new config with an open shadow root on a `div` host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mode every shadow root is attached with.
    pub fn mode(mut self, mode: ShadowRootMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the tag of the host container element the wrapper renders into the light tree.
    pub fn host_tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.host_tag = tag.into();
        self
    }

    /// Set how styles are delivered to each root. This is resolved once, when the scope is built.
    pub fn style_strategy(mut self, strategy: StyleStrategy) -> Self {
        self.style_strategy = strategy;
        self
    }

    /// The mode shadow roots are attached with.
    pub fn get_mode(&self) -> ShadowRootMode {
        self.mode
    }

    /// The tag of the host container element.
    pub fn get_host_tag(&self) -> &str {
        &self.host_tag
    }

    /// The configured style strategy.
    pub fn get_style_strategy(&self) -> StyleStrategy {
        self.style_strategy
    }
}
