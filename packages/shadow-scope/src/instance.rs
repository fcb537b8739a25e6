use std::rc::Rc;

use crate::definition::ScopeShared;
use crate::{Component, ForwardRef, HostRef, Projection, Projector, Result, ShadowBackend};

/// Where an instance is in the mount protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountState<R> {
    /// The host element has not been committed yet. Nothing is projected.
    NoHost,

    /// A shadow root is attached to the host and styled. This is terminal.
    Attached(R),
}

impl<R> MountState<R> {
    /// The attached shadow root, if any.
    pub fn root(&self) -> Option<&R> {
        match self {
            MountState::NoHost => None,
            MountState::Attached(root) => Some(root),
        }
    }
}

/// The result of committing an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a freshly attached instance needs one more render to project its content"]
pub enum Commit {
    /// No host element was available. The instance stays inert.
    Inert,

    /// A shadow root was attached during this commit. The instance must render once more so its
    /// content can be projected into the new root.
    Attached,

    /// The instance was already attached. Nothing happened.
    Unchanged,
}

impl Commit {
    /// Returns true if the instance asked for a follow-up render.
    pub fn needs_render(self) -> bool {
        matches!(self, Commit::Attached)
    }
}

/// One render pass of a scoped instance.
///
/// The host container is always present. The projection only exists once a shadow root has been
/// attached.
#[derive(Debug)]
pub struct ScopeFrame<'a, R, O> {
    /// The tag of the host container element rendered into the light tree.
    pub host_tag: &'a str,

    /// The wrapped component's output and the shadow root it belongs under.
    pub projection: Option<Projection<R, O>>,
}

impl<R, O> ScopeFrame<'_, R, O> {
    /// Hand the projection, if there is one, to `projector`.
    ///
    /// Returns true if anything was projected.
    pub fn project_with<P: Projector<R, O>>(self, projector: &mut P) -> Result<bool> {
        match self.projection {
            Some(Projection { target, content }) => {
                projector.project(&target, content)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// What a full [`ScopeInstance::cycle`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// How many render passes ran.
    pub renders: usize,
    /// Whether a shadow root was attached during this cycle.
    pub attached: bool,
    /// Whether content was projected at least once.
    pub projected: bool,
}

/// A mounted instance of a [`ScopedComponent`](crate::ScopedComponent).
///
/// The instance runs a two-state machine. It starts in [`MountState::NoHost`]. The first commit
/// that sees the host element attaches a shadow root, applies the scope's styles to it and moves to
/// [`MountState::Attached`], where it stays. A shadow root can't be attached to an element that
/// isn't in the tree yet, so content always shows up one render after the host does.
///
/// A framework binding drives it like this:
///
/// 1. Call [`ScopeInstance::render`] and render the host container it describes. Hand any
///    projection to the projector.
/// 2. Once the host element exists in the real tree, call [`ScopeInstance::commit`].
/// 3. If the commit returns [`Commit::Attached`], render once more.
///
/// [`ScopeInstance::cycle`] does all three.
pub struct ScopeInstance<B: ShadowBackend, C> {
    shared: Rc<ScopeShared<B>>,
    component: Rc<C>,
    state: MountState<B::Root>,
    host: HostRef<B::Host>,
    attach_count: usize,
}

impl<B: ShadowBackend, C: Component> ScopeInstance<B, C> {
    pub(crate) fn new(shared: Rc<ScopeShared<B>>, component: Rc<C>) -> Self {
        Self {
            shared,
            component,
            state: MountState::NoHost,
            host: HostRef::new(),
            attach_count: 0,
        }
    }

    /// Render the instance.
    ///
    /// The wrapped component is only rendered once a shadow root exists. Its props are passed
    /// through untouched, along with the caller's `forward` reference.
    pub fn render(
        &self,
        props: &C::Props,
        forward: &ForwardRef<C::Handle>,
    ) -> ScopeFrame<'_, B::Root, C::Output> {
        let projection = self.state.root().map(|root| Projection {
            target: root.clone(),
            content: self.component.render(props, forward),
        });

        tracing::trace!(projected = projection.is_some(), "rendered shadow scope");

        ScopeFrame {
            host_tag: self.shared.config.get_host_tag(),
            projection,
        }
    }

    /// Commit the instance after its host container has been placed in the real tree.
    ///
    /// Attaches and styles the shadow root the first time a host is available. Later commits do
    /// nothing, even if a different host is passed in.
    pub fn commit(&mut self, host: Option<&B::Host>) -> Result<Commit> {
        if self.state.root().is_some() {
            return Ok(Commit::Unchanged);
        }

        let Some(host) = host else {
            return Ok(Commit::Inert);
        };

        let ScopeShared {
            backend,
            resource,
            config,
        } = &*self.shared;

        let root = backend.attach_shadow(host, config.mode)?;
        resource.apply(backend, &root)?;

        tracing::debug!(
            mode = config.mode.as_str(),
            adopted = resource.is_adopted(),
            "attached shadow root"
        );

        self.host.mount(host.clone());
        self.state = MountState::Attached(root);
        self.attach_count += 1;

        Ok(Commit::Attached)
    }

    /// Run a full render and commit cycle.
    ///
    /// Renders and projects, commits against `host`, and if that attached a shadow root, renders
    /// and projects once more.
    pub fn cycle<P>(
        &mut self,
        host: Option<&B::Host>,
        props: &C::Props,
        forward: &ForwardRef<C::Handle>,
        projector: &mut P,
    ) -> Result<CycleReport>
    where
        P: Projector<B::Root, C::Output>,
    {
        let mut report = CycleReport {
            renders: 1,
            projected: self.render(props, forward).project_with(projector)?,
            ..Default::default()
        };

        if self.commit(host)?.needs_render() {
            report.attached = true;
            report.renders += 1;
            report.projected |= self.render(props, forward).project_with(projector)?;
        }

        Ok(report)
    }

    /// The current mount state.
    pub fn state(&self) -> &MountState<B::Root> {
        &self.state
    }

    /// The attached shadow root, if any.
    pub fn root(&self) -> Option<&B::Root> {
        self.state.root()
    }

    /// Returns true once a shadow root has been attached.
    pub fn is_attached(&self) -> bool {
        self.state.root().is_some()
    }

    /// The host container element this instance attached to.
    pub fn host(&self) -> Option<&B::Host> {
        self.host.get()
    }

    /// How many shadow roots this instance has attached. Never more than one.
    pub fn attach_count(&self) -> usize {
        self.attach_count
    }
}
