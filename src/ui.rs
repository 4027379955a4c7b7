//! UI context - single-consumer task queue owning the view
//!
//! Marshals every view mutation onto one designated execution context. Store
//! observers and bridge methods never touch the view directly; they post
//! closures through a [`UiHandle`] and the [`UiActor`] applies them in order.

mod actor;
mod handle;

pub use actor::{UiActor, UiCommand, UiTask};
pub use handle::UiHandle;
