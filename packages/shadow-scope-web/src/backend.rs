use js_sys::{Array, Reflect};
use shadow_scope::{Result, ScopeError, ShadowBackend, ShadowRootMode, StyleText};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleSheet, Document, Element, ShadowRoot, ShadowRootInit};

/// The web-target's shadow DOM backend.
#[derive(Debug, Clone)]
pub struct WebBackend {
    document: Document,
}

impl WebBackend {
    /// Get a backend for the current document.
    pub fn new() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ScopeError::Unsupported("no window.document".to_string()))?;
        Ok(Self { document })
    }

    /// Get a backend for a specific document.
    pub fn with_document(document: Document) -> Self {
        Self { document }
    }

    /// The document `<style>` elements are created in.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl ShadowBackend for WebBackend {
    type Host = Element;
    type Root = ShadowRoot;
    type StyleSheet = CssStyleSheet;

    fn supports_adopted_style_sheets(&self) -> bool {
        let Some(prototype) = shadow_root_prototype() else {
            tracing::warn!("ShadowRoot is not defined, shadow scopes will fail to attach");
            return false;
        };
        let supported =
            Reflect::has(&prototype, &JsValue::from_str("adoptedStyleSheets")).unwrap_or(false);
        tracing::trace!(supported, "checked for adoptedStyleSheets");
        supported
    }

    fn parse_style_sheet(&self, text: &StyleText) -> Result<CssStyleSheet> {
        let sheet = CssStyleSheet::new().map_err(|err| ScopeError::StyleSheet(js_error(&err)))?;
        sheet
            .replace_sync(text.as_str())
            .map_err(|err| ScopeError::StyleSheet(js_error(&err)))?;
        Ok(sheet)
    }

    fn attach_shadow(&self, host: &Element, mode: ShadowRootMode) -> Result<ShadowRoot> {
        let mode = match mode {
            ShadowRootMode::Open => web_sys::ShadowRootMode::Open,
            ShadowRootMode::Closed => web_sys::ShadowRootMode::Closed,
        };

        host.attach_shadow(&ShadowRootInit::new(mode))
            .map_err(|err| {
                if host.shadow_root().is_some() {
                    ScopeError::AlreadyAttached
                } else if err.is_instance_of::<js_sys::TypeError>() {
                    // attachShadow itself is missing
                    ScopeError::Unsupported(js_error(&err))
                } else {
                    ScopeError::Attach(js_error(&err))
                }
            })
    }

    fn adopt_style_sheets(&self, root: &ShadowRoot, sheets: &[CssStyleSheet]) -> Result<()> {
        let sheets: Array = sheets.iter().collect();
        let assigned = Reflect::set(root, &JsValue::from_str("adoptedStyleSheets"), &sheets)
            .map_err(|err| ScopeError::ApplyStyle(js_error(&err)))?;
        if !assigned {
            return Err(ScopeError::ApplyStyle(
                "adoptedStyleSheets could not be assigned".to_string(),
            ));
        }
        Ok(())
    }

    fn append_style_element(&self, root: &ShadowRoot, text: &StyleText) -> Result<()> {
        let style = self
            .document
            .create_element("style")
            .map_err(|err| ScopeError::ApplyStyle(js_error(&err)))?;
        style.set_text_content(Some(text.as_str()));
        root.append_child(&style)
            .map_err(|err| ScopeError::ApplyStyle(js_error(&err)))?;
        Ok(())
    }
}

/// `ShadowRoot.prototype`, if this environment has shadow roots at all.
fn shadow_root_prototype() -> Option<JsValue> {
    let constructor = Reflect::get(&js_sys::global(), &JsValue::from_str("ShadowRoot")).ok()?;
    if !constructor.is_function() {
        return None;
    }
    Reflect::get(&constructor, &JsValue::from_str("prototype"))
        .ok()
        .filter(|prototype| prototype.is_object())
}

/// Best effort description of a thrown JS value.
pub(crate) fn js_error(value: &JsValue) -> String {
    if let Some(exception) = value.dyn_ref::<web_sys::DomException>() {
        return format!("{}: {}", exception.name(), exception.message());
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
