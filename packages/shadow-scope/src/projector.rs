use crate::Result;

/// Rendered content waiting to be placed under a shadow root.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<R, O> {
    /// The shadow root the content belongs under.
    pub target: R,
    /// The wrapped component's output.
    pub content: O,
}

/// Places rendered content under a node outside of its logical parent.
///
/// This is the host framework's "render this subtree at node X" primitive. The content keeps
/// taking part in the framework's normal updates, only its physical placement changes. Projecting
/// into the same target again replaces what was projected there before and leaves everything else
/// in the target alone, including any `<style>` element the scope injected.
pub trait Projector<R, O> {
    /// Render `content` under `target`.
    fn project(&mut self, target: &R, content: O) -> Result<()>;
}

impl<R, O, F> Projector<R, O> for F
where
    F: FnMut(&R, O) -> Result<()>,
{
    fn project(&mut self, target: &R, content: O) -> Result<()> {
        self(target, content)
    }
}
