use std::fmt;
use std::rc::Rc;

use crate::{
    Component, Result, ScopeConfig, ScopeInstance, ShadowBackend, StyleResource, StyleText,
};

/// State shared by a scope definition, every component it wraps and every instance of those.
pub(crate) struct ScopeShared<B: ShadowBackend> {
    pub(crate) backend: B,
    pub(crate) resource: StyleResource<B::StyleSheet>,
    pub(crate) config: ScopeConfig,
}

/// A set of scoped styles, ready to wrap components.
///
/// Building a scope resolves its styles exactly once. If the platform supports adopted
/// stylesheets the text is parsed here, and every shadow root created through this scope adopts
/// that one sheet. Wrapping components and mounting instances never parses again.
///
/// # Example
///
/// ```rust
/// use shadow_scope::memory::{MemoryDom, MemoryProjector, VNode};
/// use shadow_scope::{component, css, ForwardRef, ShadowScope};
///
/// let dom = MemoryDom::new();
/// let color = "blue";
/// let scope = ShadowScope::new(dom.clone(), css!("p { color: " {color} "; }")).unwrap();
///
/// let scoped = scope.wrap(component::from_fn(|text: &String, _: &ForwardRef<()>| {
///     VNode::element("p").child(VNode::text(text.as_str()))
/// }));
///
/// let host = dom.create_element(scoped.host_tag());
/// let mut label = scoped.instantiate();
/// let mut projector = MemoryProjector::new(dom.clone());
/// label
///     .cycle(Some(&host), &"hi".to_string(), &ForwardRef::new(), &mut projector)
///     .unwrap();
///
/// assert_eq!(
///     dom.to_html(host),
///     r#"<div><template shadowrootmode="open"><p>hi</p></template></div>"#
/// );
/// ```
pub struct ShadowScope<B: ShadowBackend> {
    shared: Rc<ScopeShared<B>>,
}

impl<B: ShadowBackend> ShadowScope<B> {
    /// Define a scope with the default [`ScopeConfig`].
    pub fn new(backend: B, text: impl Into<StyleText>) -> Result<Self> {
        Self::with_config(backend, text, ScopeConfig::default())
    }

    /// Define a scope with a custom [`ScopeConfig`].
    pub fn with_config(backend: B, text: impl Into<StyleText>, config: ScopeConfig) -> Result<Self> {
        let resource = StyleResource::build(&backend, text.into(), config.style_strategy)?;
        Ok(Self {
            shared: Rc::new(ScopeShared {
                backend,
                resource,
                config,
            }),
        })
    }

    /// Wrap `component` so that it renders into a shadow root carrying this scope's styles.
    ///
    /// The returned component shares this scope's styles with every other component wrapped by it.
    pub fn wrap<C: Component>(&self, component: C) -> ScopedComponent<B, C> {
        ScopedComponent {
            shared: self.shared.clone(),
            component: Rc::new(component),
        }
    }

    /// The resolved styles of this scope.
    pub fn resource(&self) -> &StyleResource<B::StyleSheet> {
        &self.shared.resource
    }

    /// The config this scope was built with.
    pub fn config(&self) -> &ScopeConfig {
        &self.shared.config
    }

    /// The backend this scope attaches shadow roots through.
    pub fn backend(&self) -> &B {
        &self.shared.backend
    }
}

impl<B: ShadowBackend> Clone for ShadowScope<B> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<B: ShadowBackend> fmt::Debug for ShadowScope<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShadowScope")
            .field("config", &self.shared.config)
            .field("adopted", &self.shared.resource.is_adopted())
            .finish()
    }
}

/// A component wrapped by a [`ShadowScope`].
///
/// It takes the same props as the component it wraps plus an optional forwarded reference, and
/// renders a single host container element. Its content shows up inside the host's shadow root
/// once the host has been committed to the tree.
pub struct ScopedComponent<B: ShadowBackend, C> {
    shared: Rc<ScopeShared<B>>,
    component: Rc<C>,
}

impl<B: ShadowBackend, C: Component> ScopedComponent<B, C> {
    /// Create a new, unmounted instance of this component.
    pub fn instantiate(&self) -> ScopeInstance<B, C> {
        ScopeInstance::new(self.shared.clone(), self.component.clone())
    }

    /// A name for diagnostics, `ShadowScope(<inner name>)`.
    pub fn name(&self) -> String {
        format!("ShadowScope({})", self.component.name())
    }

    /// The tag of the host container element instances render.
    pub fn host_tag(&self) -> &str {
        self.shared.config.get_host_tag()
    }

    /// The component being wrapped.
    pub fn inner(&self) -> &C {
        &self.component
    }

    /// The resolved styles shared with the scope that created this component.
    pub fn resource(&self) -> &StyleResource<B::StyleSheet> {
        &self.shared.resource
    }
}

impl<B: ShadowBackend, C> Clone for ScopedComponent<B, C> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
            component: self.component.clone(),
        }
    }
}
