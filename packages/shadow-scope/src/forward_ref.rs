use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A shared slot that resolves to a component's handle once the component fills it in.
///
/// The wrapper hands the exact slot it received to the wrapped component, so a reference held
/// outside the wrapper resolves to the wrapped component and never to the host element or the
/// shadow root.
///
/// ```rust
/// use shadow_scope::ForwardRef;
///
/// let outer: ForwardRef<u32> = ForwardRef::new();
/// let inner = outer.clone();
/// inner.set(7);
/// assert_eq!(outer.get(), Some(7));
/// assert!(outer.ptr_eq(&inner));
/// ```
pub struct ForwardRef<T> {
    slot: Rc<RefCell<Option<T>>>,
}

impl<T> ForwardRef<T> {
    /// Create an empty reference.
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// Point the reference at `value`.
    pub fn set(&self, value: T) {
        *self.slot.borrow_mut() = Some(value);
    }

    /// Clear the reference and return what it pointed at.
    pub fn take(&self) -> Option<T> {
        self.slot.borrow_mut().take()
    }

    /// Returns true if the reference currently points at something.
    pub fn is_set(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Run `f` with the current value, if any.
    pub fn with<O>(&self, f: impl FnOnce(&T) -> O) -> Option<O> {
        self.slot.borrow().as_ref().map(f)
    }

    /// Returns true if both references share the same slot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<T: Clone> ForwardRef<T> {
    /// Get a clone of the current value.
    pub fn get(&self) -> Option<T> {
        self.slot.borrow().clone()
    }
}

impl<T> Clone for ForwardRef<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> Default for ForwardRef<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ForwardRef").field(&*self.slot.borrow()).finish()
    }
}

/// The wrapper's own reference to its host container element.
///
/// Filled in at commit time and never exposed through a [`ForwardRef`].
#[derive(Debug)]
pub struct HostRef<H> {
    node: Option<H>,
}

impl<H> HostRef<H> {
    pub(crate) fn new() -> Self {
        Self { node: None }
    }

    pub(crate) fn mount(&mut self, node: H) {
        self.node = Some(node);
    }

    /// The host element, once it has been committed to the tree.
    pub fn get(&self) -> Option<&H> {
        self.node.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_a_slot() {
        let a = ForwardRef::new();
        let b = a.clone();
        assert!(!a.is_set());

        b.set("inner");
        assert_eq!(a.get(), Some("inner"));
        assert_eq!(a.with(|v| v.len()), Some(5));

        assert_eq!(a.take(), Some("inner"));
        assert!(!b.is_set());
    }

    #[test]
    fn separate_refs_are_distinct() {
        let a: ForwardRef<()> = ForwardRef::new();
        let b = ForwardRef::new();
        assert!(!a.ptr_eq(&b));
    }
}
