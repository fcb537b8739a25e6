use shadow_scope::{Projector, Result, ScopeError};
use web_sys::{Node, ShadowRoot};

use crate::backend::js_error;

/// Projects DOM nodes into shadow roots.
///
/// Each root holds at most one projected node. Projecting again swaps it for the new one in
/// place, so an injected `<style>` element stays first. Roots that are no longer connected to the
/// document are dropped on the next projection.
#[derive(Debug, Default)]
pub struct WebProjector {
    projected: Vec<(ShadowRoot, Node)>,
}

impl WebProjector {
    /// Create a projector with nothing projected yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many roots this projector is tracking.
    pub fn len(&self) -> usize {
        self.projected.len()
    }

    /// Returns true if nothing is projected anywhere.
    pub fn is_empty(&self) -> bool {
        self.projected.is_empty()
    }

    /// The node currently projected into `root`.
    pub fn projected(&self, root: &ShadowRoot) -> Option<&Node> {
        self.projected
            .iter()
            .find(|(target, _)| target == root)
            .map(|(_, node)| node)
    }
}

impl Projector<ShadowRoot, Node> for WebProjector {
    fn project(&mut self, target: &ShadowRoot, content: Node) -> Result<()> {
        // roots that have left the document belong to unmounted instances
        self.projected
            .retain(|(root, _)| root == target || root.is_connected());

        let slot = self.projected.iter_mut().find(|(root, _)| root == target);

        match slot {
            Some((_, old)) if *old == content => {}
            Some((_, old)) if old.parent_node().is_some() => {
                target
                    .replace_child(&content, old)
                    .map_err(|err| ScopeError::Projection(js_error(&err)))?;
                *old = content;
            }
            Some((_, old)) => {
                target
                    .append_child(&content)
                    .map_err(|err| ScopeError::Projection(js_error(&err)))?;
                *old = content;
            }
            None => {
                target
                    .append_child(&content)
                    .map_err(|err| ScopeError::Projection(js_error(&err)))?;
                self.projected.push((target.clone(), content));
            }
        }

        Ok(())
    }
}
