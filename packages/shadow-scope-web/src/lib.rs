//! Shadow scopes for the browser.
//!
//! This crate implements [`shadow_scope::ShadowBackend`] on top of `web-sys`. Shadow roots are
//! attached with `Element.attachShadow`. If `ShadowRoot.prototype` has `adoptedStyleSheets`, every
//! root from one scope adopts the same `CSSStyleSheet`. Otherwise each root gets its own `<style>`
//! element.
//!
//! ```rust, no_run
//! use shadow_scope::{component, css, ForwardRef, ShadowScope};
//! use shadow_scope_web::{WebBackend, WebProjector};
//!
//! let backend = WebBackend::new().unwrap();
//! let scope = ShadowScope::new(backend.clone(), css!("p { color: red; }")).unwrap();
//!
//! let document = backend.document().clone();
//! let paragraph = scope.wrap(component::from_fn(move |text: &String, _: &ForwardRef<()>| {
//!     let p = document.create_element("p").unwrap();
//!     p.set_text_content(Some(text.as_str()));
//!     web_sys::Node::from(p)
//! }));
//!
//! let host = backend.document().create_element(paragraph.host_tag()).unwrap();
//! backend.document().body().unwrap().append_child(&host).unwrap();
//!
//! let mut instance = paragraph.instantiate();
//! instance
//!     .cycle(Some(&host), &"hello".to_string(), &ForwardRef::new(), &mut WebProjector::new())
//!     .unwrap();
//! ```

mod backend;
mod projector;

pub use backend::WebBackend;
pub use projector::WebProjector;

use shadow_scope::{Result, ShadowScope, StyleText};

/// Define a scope on the current document with the default config.
pub fn scope(text: impl Into<StyleText>) -> Result<ShadowScope<WebBackend>> {
    ShadowScope::new(WebBackend::new()?, text)
}
