//! The contract between a scope and the component it wraps.

use std::borrow::Cow;
use std::marker::PhantomData;

use crate::ForwardRef;

/// A component that can be wrapped in a [`ShadowScope`](crate::ShadowScope).
///
/// The wrapper never looks at the props or the output. Props go to [`Component::render`]
/// unchanged and the output goes straight to the projector. The forwarded reference is the one the
/// caller handed to the wrapper. A component that wants to be reachable from outside sets its
/// handle on it.
///
/// Plain functions and closures can be turned into a component with [`from_fn`]:
///
/// ```rust
/// use shadow_scope::{component, Component, ForwardRef};
///
/// let greet = component::from_fn(|name: &String, _: &ForwardRef<()>| format!("hello {name}"));
/// assert_eq!(greet.render(&"world".to_string(), &ForwardRef::new()), "hello world");
/// ```
pub trait Component {
    /// The props the component renders from.
    type Props;

    /// What an external reference to this component resolves to.
    type Handle;

    /// The rendered output handed to the projector.
    type Output;

    /// Render the component.
    fn render(&self, props: &Self::Props, forward: &ForwardRef<Self::Handle>) -> Self::Output;

    /// A name for diagnostics.
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }
}

/// A [`Component`] backed by a function. Created with [`from_fn`].
pub struct FnComponent<F, P, H> {
    render: F,
    _marker: PhantomData<fn(&P, &H)>,
}

/// Turn a render function into a [`Component`].
pub fn from_fn<P, H, O, F>(render: F) -> FnComponent<F, P, H>
where
    F: Fn(&P, &ForwardRef<H>) -> O,
{
    FnComponent {
        render,
        _marker: PhantomData,
    }
}

impl<P, H, O, F> Component for FnComponent<F, P, H>
where
    F: Fn(&P, &ForwardRef<H>) -> O,
{
    type Props = P;
    type Handle = H;
    type Output = O;

    fn render(&self, props: &P, forward: &ForwardRef<H>) -> O {
        (self.render)(props, forward)
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<F>())
    }
}

impl<F: Clone, P, H> Clone for FnComponent<F, P, H> {
    fn clone(&self) -> Self {
        Self {
            render: self.render.clone(),
            _marker: PhantomData,
        }
    }
}
