#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod backend;
pub mod component;
mod config;
mod definition;
mod error;
mod forward_ref;
mod instance;
mod projector;
mod resource;
mod style;

pub mod memory;

pub use crate::backend::{ShadowBackend, ShadowRootMode};
pub use crate::component::Component;
pub use crate::config::{ScopeConfig, StyleStrategy};
pub use crate::definition::{ScopedComponent, ShadowScope};
pub use crate::error::{Result, ScopeError};
pub use crate::forward_ref::{ForwardRef, HostRef};
pub use crate::instance::{Commit, CycleReport, MountState, ScopeFrame, ScopeInstance};
pub use crate::projector::{Projection, Projector};
pub use crate::resource::StyleResource;
pub use crate::style::StyleText;

#[doc(hidden)]
pub mod __private {
    pub use core::fmt::Display;
}

pub mod prelude {
    //! Everything needed to define and mount a scoped component.
    pub use crate::css;
    pub use crate::{
        Commit, Component, CycleReport, ForwardRef, MountState, Projector, ScopeConfig,
        ScopeError, ScopeInstance, ShadowBackend, ShadowRootMode, ShadowScope, StyleStrategy,
        StyleText,
    };
}
