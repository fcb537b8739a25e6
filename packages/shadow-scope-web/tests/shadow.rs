use js_sys::{Array, Reflect};
use shadow_scope::{
    component, css, ForwardRef, ScopeConfig, ScopeError, ShadowBackend, ShadowRootMode,
    ShadowScope, StyleStrategy,
};
use shadow_scope_web::{WebBackend, WebProjector};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::wasm_bindgen_test;
use web_sys::{Element, Node, ShadowRoot};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn init_logging() {
    let _ = tracing_wasm::try_set_as_global_default();
}

fn mounted_host(backend: &WebBackend, tag: &str) -> Element {
    let document = backend.document();
    let host = document.create_element(tag).unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

fn adopted_sheets(root: &ShadowRoot) -> Array {
    Reflect::get(root, &JsValue::from_str("adoptedStyleSheets"))
        .unwrap()
        .unchecked_into()
}

fn paragraph_scope(
    backend: &WebBackend,
    config: ScopeConfig,
) -> shadow_scope::ScopedComponent<
    WebBackend,
    component::FnComponent<impl Fn(&String, &ForwardRef<()>) -> Node, String, ()>,
> {
    let scope = ShadowScope::with_config(backend.clone(), css!("p { color: red; }"), config)
        .unwrap();
    let document = backend.document().clone();
    scope.wrap(component::from_fn(move |text: &String, _: &ForwardRef<()>| {
        let p = document.create_element("p").unwrap();
        p.set_text_content(Some(text.as_str()));
        Node::from(p)
    }))
}

#[wasm_bindgen_test]
fn modern_browsers_adopt_style_sheets() {
    let backend = WebBackend::new().unwrap();
    assert!(backend.supports_adopted_style_sheets());
}

#[wasm_bindgen_test]
fn instances_adopt_one_shared_sheet() {
    init_logging();
    let backend = WebBackend::new().unwrap();
    let scoped = paragraph_scope(&backend, ScopeConfig::new());
    let mut projector = WebProjector::new();

    let mut roots = Vec::new();
    for _ in 0..2 {
        let host = mounted_host(&backend, scoped.host_tag());
        let mut instance = scoped.instantiate();
        instance
            .cycle(Some(&host), &"hi".to_string(), &ForwardRef::new(), &mut projector)
            .unwrap();
        roots.push(host.shadow_root().unwrap());
    }

    let shared: &JsValue = scoped.resource().sheet().unwrap().as_ref();
    for root in &roots {
        let sheets = adopted_sheets(root);
        assert_eq!(sheets.length(), 1);
        assert_eq!(&sheets.get(0), shared);
        assert_eq!(root.text_content().unwrap(), "hi");
    }
}

#[wasm_bindgen_test]
fn inline_strategy_injects_a_style_element() {
    init_logging();
    let backend = WebBackend::new().unwrap();
    let config = ScopeConfig::new().style_strategy(StyleStrategy::Inline);
    let scoped = paragraph_scope(&backend, config);
    let mut projector = WebProjector::new();
    let host = mounted_host(&backend, scoped.host_tag());
    let mut instance = scoped.instantiate();

    for text in ["one", "two", "three"] {
        instance
            .cycle(Some(&host), &text.to_string(), &ForwardRef::new(), &mut projector)
            .unwrap();
    }

    let root = host.shadow_root().unwrap();
    let styles = root.query_selector_all("style").unwrap();
    assert_eq!(styles.length(), 1);
    assert_eq!(
        styles.get(0).unwrap().text_content().unwrap(),
        "p { color: red; }"
    );
    assert_eq!(adopted_sheets(&root).length(), 0);
    assert_eq!(root.child_nodes().length(), 2);
    assert_eq!(
        projector.projected(&root).unwrap().text_content().unwrap(),
        "three"
    );
}

#[wasm_bindgen_test]
fn content_waits_for_the_host() {
    let backend = WebBackend::new().unwrap();
    let scoped = paragraph_scope(&backend, ScopeConfig::new());
    let instance = scoped.instantiate();

    let frame = instance.render(&"early".to_string(), &ForwardRef::new());
    assert_eq!(frame.host_tag, "div");
    assert!(frame.projection.is_none());
}

#[wasm_bindgen_test]
fn closed_roots_are_hidden_from_the_host() {
    let backend = WebBackend::new().unwrap();
    let scoped = paragraph_scope(&backend, ScopeConfig::new().mode(ShadowRootMode::Closed));
    let host = mounted_host(&backend, "div");
    let mut instance = scoped.instantiate();

    instance
        .cycle(Some(&host), &"secret".to_string(), &ForwardRef::new(), &mut WebProjector::new())
        .unwrap();

    assert!(host.shadow_root().is_none());
    assert!(instance.is_attached());
}

#[wasm_bindgen_test]
fn attaching_twice_is_an_error() {
    let backend = WebBackend::new().unwrap();
    let host = mounted_host(&backend, "div");
    backend.attach_shadow(&host, ShadowRootMode::Open).unwrap();
    assert_eq!(
        backend.attach_shadow(&host, ShadowRootMode::Open),
        Err(ScopeError::AlreadyAttached)
    );
}

#[wasm_bindgen_test]
fn projector_drops_unmounted_roots() {
    let backend = WebBackend::new().unwrap();
    let scoped = paragraph_scope(&backend, ScopeConfig::new());
    let mut projector = WebProjector::new();

    let first = mounted_host(&backend, "div");
    scoped
        .instantiate()
        .cycle(Some(&first), &"gone".to_string(), &ForwardRef::new(), &mut projector)
        .unwrap();
    let first_root = first.shadow_root().unwrap();
    assert_eq!(projector.len(), 1);
    first.remove();

    let second = mounted_host(&backend, "div");
    scoped
        .instantiate()
        .cycle(Some(&second), &"here".to_string(), &ForwardRef::new(), &mut projector)
        .unwrap();

    assert_eq!(projector.len(), 1);
    assert!(projector.projected(&first_root).is_none());
    let second_root = second.shadow_root().unwrap();
    assert_eq!(
        projector.projected(&second_root).unwrap().text_content().unwrap(),
        "here"
    );
}
