//! An in-memory DOM with shadow roots.
//!
//! [`MemoryDom`] implements [`ShadowBackend`] without a browser, which makes it useful for tests and
//! for rendering scoped components to HTML on the server. Shadow roots are serialized as
//! declarative shadow DOM, so the output of [`MemoryDom::to_html`] can be sent straight to a
//! browser.
//!
//! ```rust
//! use shadow_scope::memory::{MemoryDom, VNode};
//!
//! let dom = MemoryDom::new();
//! let div = dom.create_element("div");
//! let text = dom.create_text("hello");
//! dom.append_child(div, text);
//! assert_eq!(dom.to_html(div), "<div>hello</div>");
//! ```

use std::cell::RefCell;
use std::fmt::Write;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use slab::Slab;

use crate::{Projector, Result, ScopeError, ShadowBackend, ShadowRootMode, StyleText};

/// A handle to a node in a [`MemoryDom`].
///
/// Slots in the arena are reused once a node is removed. Each handle also carries the generation
/// of the node it was created for, so a handle to a removed node never resolves to a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u64,
}

#[derive(Debug)]
enum NodeKind {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        shadow_root: Option<NodeId>,
    },
    Text(String),
    ShadowRoot {
        host: NodeId,
        mode: ShadowRootMode,
        adopted: Vec<MemoryStyleSheet>,
    },
}

#[derive(Debug)]
struct NodeData {
    generation: u64,
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug)]
struct DomInner {
    nodes: Slab<NodeData>,
    next_generation: u64,
    shadow_dom: bool,
    adopted_style_sheets: bool,
    next_sheet: usize,
    parse_count: usize,
    attach_count: usize,
}

impl DomInner {
    fn insert(&mut self, kind: NodeKind) -> NodeId {
        let generation = self.next_generation;
        self.next_generation += 1;
        let index = self.nodes.insert(NodeData {
            generation,
            kind,
            parent: None,
            children: Vec::new(),
        });
        NodeId { index, generation }
    }

    fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes
            .get(id.index)
            .filter(|node| node.generation == id.generation)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes
            .get_mut(id.index)
            .filter(|node| node.generation == id.generation)
    }

    /// Returns true if `node` is `ancestor` or sits somewhere below it.
    fn is_inclusive_descendant(&self, mut node: NodeId, ancestor: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            let Some(data) = self.get(node) else {
                return false;
            };
            node = match (&data.kind, data.parent) {
                (_, Some(parent)) => parent,
                (NodeKind::ShadowRoot { host, .. }, None) => *host,
                _ => return false,
            };
        }
    }

    fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.get_mut(id).and_then(|node| node.parent.take()) else {
            return;
        };
        if let Some(parent) = self.get_mut(parent) {
            parent.children.retain(|child| *child != id);
        }
    }

    fn remove(&mut self, id: NodeId) {
        if self.get(id).is_none() {
            return;
        }
        self.detach(id);
        let Some(node) = self.nodes.try_remove(id.index) else {
            return;
        };
        for child in node.children {
            if let Some(child) = self.get_mut(child) {
                child.parent = None;
            }
            self.remove(child);
        }
        if let NodeKind::Element {
            shadow_root: Some(root),
            ..
        } = node.kind
        {
            self.remove(root);
        }
    }

    fn write_html(&self, id: NodeId, raw_text: bool, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };

        match &node.kind {
            NodeKind::Text(text) if raw_text => out.push_str(text),
            NodeKind::Text(text) => {
                let _ = write!(out, "{}", askama_escape::escape(text, askama_escape::Html));
            }
            NodeKind::ShadowRoot { .. } => self.write_children(node, false, out),
            NodeKind::Element {
                tag,
                attributes,
                shadow_root,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attributes {
                    let _ = write!(
                        out,
                        " {name}=\"{}\"",
                        askama_escape::escape(value, askama_escape::Html)
                    );
                }
                out.push('>');

                if let Some(root) = shadow_root.and_then(|root| self.get(root)) {
                    if let NodeKind::ShadowRoot { mode, .. } = &root.kind {
                        let _ = write!(out, "<template shadowrootmode=\"{}\">", mode.as_str());
                    }
                    self.write_children(root, false, out);
                    out.push_str("</template>");
                }

                let raw = matches!(tag.as_str(), "style" | "script");
                self.write_children(node, raw, out);

                let _ = write!(out, "</{tag}>");
            }
        }
    }

    fn write_children(&self, node: &NodeData, raw_text: bool, out: &mut String) {
        for child in &node.children {
            self.write_html(*child, raw_text, out);
        }
    }

    fn text_content(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        if let NodeKind::Text(text) = &node.kind {
            out.push_str(text);
        }
        for child in &node.children {
            self.text_content(*child, out);
        }
    }
}

/// A parsed stylesheet in a [`MemoryDom`].
///
/// Clones refer to the same sheet. Two sheets are equal only if they are the same object, which
/// matches how the browser compares `CSSStyleSheet`s.
#[derive(Debug, Clone)]
pub struct MemoryStyleSheet(Rc<SheetData>);

#[derive(Debug)]
struct SheetData {
    id: usize,
    text: String,
}

impl MemoryStyleSheet {
    /// The text the sheet was parsed from.
    pub fn text(&self) -> &str {
        &self.0.text
    }

    /// A number unique to this sheet within its dom.
    pub fn id(&self) -> usize {
        self.0.id
    }

    /// Returns true if both handles refer to the same sheet.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for MemoryStyleSheet {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for MemoryStyleSheet {}

/// A platform-free DOM that supports shadow roots and adopted stylesheets.
///
/// The handle is cheap to clone and every clone refers to the same tree.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    inner: Rc<RefCell<DomInner>>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// Create a dom where shadow roots can adopt shared stylesheets.
    pub fn new() -> Self {
        Self::with_capabilities(true, true)
    }

    /// Create a dom that only supports `<style>` elements inside shadow roots.
    pub fn without_adopted_style_sheets() -> Self {
        Self::with_capabilities(true, false)
    }

    /// Create a dom with no shadow DOM support at all.
    pub fn without_shadow_dom() -> Self {
        Self::with_capabilities(false, false)
    }

    fn with_capabilities(shadow_dom: bool, adopted_style_sheets: bool) -> Self {
        Self {
            inner: Rc::new(RefCell::new(DomInner {
                nodes: Slab::new(),
                next_generation: 0,
                shadow_dom,
                adopted_style_sheets,
                next_sheet: 0,
                parse_count: 0,
                attach_count: 0,
            })),
        }
    }

    /// Create a detached element.
    pub fn create_element(&self, tag: &str) -> NodeId {
        self.inner.borrow_mut().insert(NodeKind::Element {
            tag: tag.to_string(),
            attributes: Vec::new(),
            shadow_root: None,
        })
    }

    /// Create a detached text node.
    pub fn create_text(&self, text: &str) -> NodeId {
        self.inner
            .borrow_mut()
            .insert(NodeKind::Text(text.to_string()))
    }

    /// Set an attribute on an element. Does nothing for other nodes.
    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        let mut inner = self.inner.borrow_mut();
        let Some(NodeKind::Element { attributes, .. }) =
            inner.get_mut(node).map(|node| &mut node.kind)
        else {
            return;
        };
        match attributes.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, old)) => *old = value.to_string(),
            None => attributes.push((name.to_string(), value.to_string())),
        }
    }

    /// Get an attribute of an element.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        let inner = self.inner.borrow();
        match &inner.get(node)?.kind {
            NodeKind::Element { attributes, .. } => attributes
                .iter()
                .find(|(existing, _)| existing == name)
                .map(|(_, value)| value.clone()),
            _ => None,
        }
    }

    /// Move `child` to the end of `parent`'s children.
    ///
    /// Like the DOM's `HierarchyRequestError`, appending a node into itself or one of its own
    /// descendants is refused. Shadow roots can't be moved either. Returns true if `child` moved.
    pub fn append_child(&self, parent: NodeId, child: NodeId) -> bool {
        let mut inner = self.inner.borrow_mut();
        match inner.get(child).map(|node| &node.kind) {
            None | Some(NodeKind::ShadowRoot { .. }) => return false,
            Some(_) => {}
        }
        if inner.get(parent).is_none() || inner.is_inclusive_descendant(parent, child) {
            tracing::trace!(?parent, ?child, "refusing append");
            return false;
        }
        inner.detach(child);
        if let Some(node) = inner.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = inner.get_mut(parent) {
            node.children.push(child);
        }
        true
    }

    /// Remove a node, its children and its shadow root from the dom.
    pub fn remove(&self, node: NodeId) {
        self.inner.borrow_mut().remove(node);
    }

    /// Returns true if the node still exists.
    pub fn contains(&self, node: NodeId) -> bool {
        self.inner.borrow().get(node).is_some()
    }

    /// The children of a node. For a host element this is its light tree, not its shadow root.
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.inner
            .borrow()
            .get(node)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    /// The parent of a node. Shadow roots have no parent, see [`MemoryDom::shadow_host`].
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.inner.borrow().get(node)?.parent
    }

    /// The tag of an element.
    pub fn tag(&self, node: NodeId) -> Option<String> {
        match &self.inner.borrow().get(node)?.kind {
            NodeKind::Element { tag, .. } => Some(tag.clone()),
            _ => None,
        }
    }

    /// The concatenated text of a node and its light tree descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.inner.borrow().text_content(node, &mut out);
        out
    }

    /// The shadow root attached to `host`, if any.
    pub fn shadow_root(&self, host: NodeId) -> Option<NodeId> {
        match &self.inner.borrow().get(host)?.kind {
            NodeKind::Element { shadow_root, .. } => *shadow_root,
            _ => None,
        }
    }

    /// The host a shadow root is attached to.
    pub fn shadow_host(&self, root: NodeId) -> Option<NodeId> {
        match &self.inner.borrow().get(root)?.kind {
            NodeKind::ShadowRoot { host, .. } => Some(*host),
            _ => None,
        }
    }

    /// The mode a shadow root was attached with.
    pub fn shadow_mode(&self, root: NodeId) -> Option<ShadowRootMode> {
        match &self.inner.borrow().get(root)?.kind {
            NodeKind::ShadowRoot { mode, .. } => Some(*mode),
            _ => None,
        }
    }

    /// Returns true if the node is a shadow root.
    pub fn is_shadow_root(&self, node: NodeId) -> bool {
        self.shadow_host(node).is_some()
    }

    /// The stylesheets a shadow root has adopted.
    pub fn adopted_style_sheets(&self, root: NodeId) -> Vec<MemoryStyleSheet> {
        match self.inner.borrow().get(root).map(|node| &node.kind) {
            Some(NodeKind::ShadowRoot { adopted, .. }) => adopted.clone(),
            _ => Vec::new(),
        }
    }

    /// The `<style>` elements directly under a node.
    pub fn style_elements(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node)
            .into_iter()
            .filter(|child| self.tag(*child).as_deref() == Some("style"))
            .collect()
    }

    /// How many stylesheets have been parsed in this dom.
    pub fn parse_count(&self) -> usize {
        self.inner.borrow().parse_count
    }

    /// How many shadow roots have been attached in this dom.
    pub fn attach_count(&self) -> usize {
        self.inner.borrow().attach_count
    }

    /// Serialize a node to HTML. Shadow roots are written as declarative shadow DOM templates.
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.inner.borrow().write_html(node, false, &mut out);
        out
    }

    /// Create the nodes described by `vnode` and return the top level ones.
    pub fn build(&self, vnode: &VNode) -> Vec<NodeId> {
        match vnode {
            VNode::Text(text) => vec![self.create_text(text)],
            VNode::Fragment(children) => children.iter().flat_map(|child| self.build(child)).collect(),
            VNode::Element {
                tag,
                attributes,
                children,
            } => {
                let element = self.create_element(tag);
                for (name, value) in attributes {
                    self.set_attribute(element, name, value);
                }
                for child in children.iter().flat_map(|child| self.build(child)) {
                    self.append_child(element, child);
                }
                vec![element]
            }
        }
    }
}

impl ShadowBackend for MemoryDom {
    type Host = NodeId;
    type Root = NodeId;
    type StyleSheet = MemoryStyleSheet;

    fn supports_adopted_style_sheets(&self) -> bool {
        let inner = self.inner.borrow();
        inner.shadow_dom && inner.adopted_style_sheets
    }

    fn parse_style_sheet(&self, text: &StyleText) -> Result<MemoryStyleSheet> {
        let mut depth = 0usize;
        for c in text.as_str().chars() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or_else(|| ScopeError::StyleSheet("unexpected `}`".to_string()))?
                }
                _ => {}
            }
        }
        if depth != 0 {
            return Err(ScopeError::StyleSheet("unclosed `{`".to_string()));
        }

        let mut inner = self.inner.borrow_mut();
        let id = inner.next_sheet;
        inner.next_sheet += 1;
        inner.parse_count += 1;

        Ok(MemoryStyleSheet(Rc::new(SheetData {
            id,
            text: text.as_str().to_string(),
        })))
    }

    fn attach_shadow(&self, host: &NodeId, mode: ShadowRootMode) -> Result<NodeId> {
        let mut inner = self.inner.borrow_mut();
        if !inner.shadow_dom {
            return Err(ScopeError::Unsupported("attachShadow is not available".to_string()));
        }

        match inner.get(*host).map(|node| &node.kind) {
            Some(NodeKind::Element {
                shadow_root: Some(_),
                ..
            }) => return Err(ScopeError::AlreadyAttached),
            Some(NodeKind::Element { .. }) => {}
            _ => return Err(ScopeError::Attach(format!("{host:?} is not an element"))),
        }

        let root = inner.insert(NodeKind::ShadowRoot {
            host: *host,
            mode,
            adopted: Vec::new(),
        });
        if let Some(NodeKind::Element { shadow_root, .. }) =
            inner.get_mut(*host).map(|node| &mut node.kind)
        {
            *shadow_root = Some(root);
        }
        inner.attach_count += 1;

        Ok(root)
    }

    fn adopt_style_sheets(&self, root: &NodeId, sheets: &[MemoryStyleSheet]) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        match inner.get_mut(*root).map(|node| &mut node.kind) {
            Some(NodeKind::ShadowRoot { adopted, .. }) => {
                *adopted = sheets.to_vec();
                Ok(())
            }
            _ => Err(ScopeError::ApplyStyle(format!("{root:?} is not a shadow root"))),
        }
    }

    fn append_style_element(&self, root: &NodeId, text: &StyleText) -> Result<()> {
        if !self.is_shadow_root(*root) {
            return Err(ScopeError::ApplyStyle(format!("{root:?} is not a shadow root")));
        }
        let style = self.create_element("style");
        let contents = self.create_text(text.as_str());
        self.append_child(style, contents);
        self.append_child(*root, style);
        Ok(())
    }
}

/// A small description of rendered content, used as component output with a [`MemoryDom`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VNode {
    /// An element with attributes and children.
    Element {
        /// The element's tag.
        tag: String,
        /// The element's attributes in order.
        attributes: Vec<(String, String)>,
        /// The element's children.
        children: Vec<VNode>,
    },
    /// A text node.
    Text(String),
    /// Several nodes with no wrapper.
    Fragment(Vec<VNode>),
}

impl VNode {
    /// An element with no attributes or children.
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A text node.
    pub fn text(text: impl Into<String>) -> Self {
        VNode::Text(text.into())
    }

    /// A list of nodes with no wrapper.
    pub fn fragment(children: impl IntoIterator<Item = VNode>) -> Self {
        VNode::Fragment(children.into_iter().collect())
    }

    /// Add an attribute. Ignored on anything but elements.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { attributes, .. } = &mut self {
            attributes.push((name.into(), value.into()));
        }
        self
    }

    /// Add a child. Elements get a new child, fragments a new entry, and text is left alone.
    pub fn child(mut self, child: VNode) -> Self {
        match &mut self {
            VNode::Element { children, .. } | VNode::Fragment(children) => children.push(child),
            VNode::Text(_) => {}
        }
        self
    }
}

/// Projects [`VNode`]s into shadow roots of a [`MemoryDom`].
///
/// Each projection replaces the nodes this projector placed in the same root last time. Anything
/// else in the root, like an injected `<style>`, is kept. Roots that no longer exist are forgotten
/// on the next projection.
#[derive(Debug)]
pub struct MemoryProjector {
    dom: MemoryDom,
    projected: FxHashMap<NodeId, Vec<NodeId>>,
}

impl MemoryProjector {
    /// Create a projector for `dom`.
    pub fn new(dom: MemoryDom) -> Self {
        Self {
            dom,
            projected: FxHashMap::default(),
        }
    }

    /// The nodes currently projected into `root`.
    pub fn projected(&self, root: NodeId) -> &[NodeId] {
        self.projected.get(&root).map(Vec::as_slice).unwrap_or_default()
    }
}

impl Projector<NodeId, VNode> for MemoryProjector {
    fn project(&mut self, target: &NodeId, content: VNode) -> Result<()> {
        if !self.dom.is_shadow_root(*target) {
            return Err(ScopeError::Projection(format!("{target:?} is not a shadow root")));
        }

        // roots whose host has been removed
        let dom = &self.dom;
        self.projected.retain(|root, _| dom.contains(*root));

        for old in self.projected.remove(target).unwrap_or_default() {
            if self.dom.parent(old) == Some(*target) {
                self.dom.remove(old);
            }
        }

        let nodes = self.dom.build(&content);
        for node in &nodes {
            self.dom.append_child(*target, *node);
        }
        self.projected.insert(*target, nodes);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_shadow_roots() {
        let dom = MemoryDom::without_adopted_style_sheets();
        let host = dom.create_element("div");
        let root = dom.attach_shadow(&host, ShadowRootMode::Open).unwrap();
        dom.append_style_element(&root, &"a > b { color: red; }".into())
            .unwrap();
        for node in dom.build(&VNode::element("p").attr("class", "x").child(VNode::text("1 < 2"))) {
            dom.append_child(root, node);
        }

        assert_eq!(
            dom.to_html(host),
            "<div><template shadowrootmode=\"open\"><style>a > b { color: red; }</style><p class=\"x\">1 &lt; 2</p></template></div>"
        );
    }

    #[test]
    fn attaching_twice_fails() {
        let dom = MemoryDom::new();
        let host = dom.create_element("div");
        dom.attach_shadow(&host, ShadowRootMode::Open).unwrap();
        assert_eq!(
            dom.attach_shadow(&host, ShadowRootMode::Open),
            Err(ScopeError::AlreadyAttached)
        );
        assert_eq!(dom.attach_count(), 1);
    }

    #[test]
    fn text_nodes_cannot_host() {
        let dom = MemoryDom::new();
        let text = dom.create_text("x");
        assert!(matches!(
            dom.attach_shadow(&text, ShadowRootMode::Open),
            Err(ScopeError::Attach(_))
        ));
    }

    #[test]
    fn removing_frees_the_subtree() {
        let dom = MemoryDom::new();
        let parent = dom.create_element("div");
        let nodes = dom.build(&VNode::element("ul").child(VNode::element("li").child(VNode::text("a"))));
        let list = nodes[0];
        dom.append_child(parent, list);
        let item = dom.children(list)[0];

        dom.remove(list);
        assert!(dom.children(parent).is_empty());
        assert!(!dom.contains(list));
        assert!(!dom.contains(item));
    }

    #[test]
    fn sheets_compare_by_identity() {
        let dom = MemoryDom::new();
        let a = dom.parse_style_sheet(&"p {}".into()).unwrap();
        let b = dom.parse_style_sheet(&"p {}".into()).unwrap();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
        assert_eq!(dom.parse_count(), 2);
    }

    #[test]
    fn unbalanced_sheets_are_rejected() {
        let dom = MemoryDom::new();
        assert!(dom.parse_style_sheet(&"p { color: red;".into()).is_err());
        assert!(dom.parse_style_sheet(&"p } {".into()).is_err());
        assert_eq!(dom.parse_count(), 0);
    }

    #[test]
    fn projector_replaces_previous_content() {
        let dom = MemoryDom::without_adopted_style_sheets();
        let host = dom.create_element("div");
        let root = dom.attach_shadow(&host, ShadowRootMode::Open).unwrap();
        dom.append_style_element(&root, &"p {}".into()).unwrap();

        let mut projector = MemoryProjector::new(dom.clone());
        projector.project(&root, VNode::text("one")).unwrap();
        projector
            .project(&root, VNode::fragment([VNode::text("two"), VNode::text("three")]))
            .unwrap();

        assert_eq!(projector.projected(root).len(), 2);
        assert_eq!(dom.style_elements(root).len(), 1);
        assert_eq!(dom.text_content(root), "p {}twothree");
    }

    #[test]
    fn removed_nodes_do_not_alias_new_ones() {
        let dom = MemoryDom::new();
        let old = dom.create_element("div");
        dom.remove(old);
        let new = dom.create_element("span");

        assert_ne!(old, new);
        assert!(!dom.contains(old));
        assert_eq!(dom.tag(old), None);
        dom.remove(old);
        assert_eq!(dom.tag(new).as_deref(), Some("span"));
    }

    #[test]
    fn projector_forgets_removed_roots() {
        let dom = MemoryDom::new();
        let body = dom.create_element("body");
        let mut projector = MemoryProjector::new(dom.clone());

        let first = dom.create_element("div");
        dom.append_child(body, first);
        let first_root = dom.attach_shadow(&first, ShadowRootMode::Open).unwrap();
        projector.project(&first_root, VNode::text("a")).unwrap();
        dom.remove(first);

        let aside = dom.create_element("aside");
        dom.append_child(body, aside);
        let second = dom.create_element("div");
        dom.append_child(body, second);
        let second_root = dom.attach_shadow(&second, ShadowRootMode::Open).unwrap();
        projector.project(&second_root, VNode::text("b")).unwrap();
        projector.project(&second_root, VNode::text("c")).unwrap();

        assert_eq!(dom.tag(second).as_deref(), Some("div"));
        assert_eq!(dom.shadow_root(second), Some(second_root));
        assert_eq!(dom.children(body), vec![aside, second]);
        assert_eq!(
            dom.to_html(body),
            "<body><aside></aside><div><template shadowrootmode=\"open\">c</template></div></body>"
        );
        assert!(projector.projected(first_root).is_empty());
        assert_eq!(projector.projected(second_root).len(), 1);
    }

    #[test]
    fn appending_into_a_descendant_is_refused() {
        let dom = MemoryDom::new();
        let outer = dom.create_element("div");
        let inner = dom.create_element("p");
        assert!(dom.append_child(outer, inner));

        assert!(!dom.append_child(outer, outer));
        assert!(!dom.append_child(inner, outer));

        let root = dom.attach_shadow(&inner, ShadowRootMode::Open).unwrap();
        assert!(!dom.append_child(root, outer));
        assert!(!dom.append_child(outer, root));

        assert_eq!(dom.parent(outer), None);
        assert_eq!(dom.children(outer), vec![inner]);
        assert_eq!(dom.to_html(outer), "<div><p><template shadowrootmode=\"open\"></template></p></div>");
        assert_eq!(dom.text_content(outer), "");
    }

    #[test]
    fn projector_needs_a_shadow_root() {
        let dom = MemoryDom::new();
        let div = dom.create_element("div");
        let mut projector = MemoryProjector::new(dom);
        assert!(matches!(
            projector.project(&div, VNode::text("x")),
            Err(ScopeError::Projection(_))
        ));
    }
}
