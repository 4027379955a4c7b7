//! param-bridge - Parameter sync bridge for a filter curve editor
//!
//! Mediates between two external collaborators: a graphical filter-curve
//! editor (the view) and an audio engine's observable parameter tree (the
//! store). The bridge keeps the two in sync:
//!
//! - Store-originated changes (host automation, preset recall) are marshaled
//!   onto a single UI-owning context before the view is touched
//! - View-originated edits are written back with gesture event kinds and an
//!   originator token, so the host hears live edits without echoing them
//!   back to the control that produced them
//! - The derived frequency-response curve is projected through an external
//!   engine collaborator
//! - Two fixed view layouts (compact, expanded) can be switched
//!
//! ```no_run
//! use std::sync::Arc;
//! use param_bridge::bridge::Bridge;
//! use param_bridge::config::BridgeConfig;
//! use param_bridge::params::{ParamSpec, ParameterStore, ParameterTree};
//! # use param_bridge::engine::ResponseCurve;
//! # use param_bridge::view::FilterView;
//! # fn make_view() -> Box<dyn FilterView> { unimplemented!() }
//! # fn make_engine() -> Arc<dyn ResponseCurve> { unimplemented!() }
//!
//! # #[tokio::main] async fn main() -> anyhow::Result<()> {
//! let tree = ParameterTree::builder()
//!     .parameter(ParamSpec::new("cutoff", 0, 12.0, 20_000.0, 400.0, "Hz"))
//!     .parameter(ParamSpec::new("resonance", 1, -20.0, 20.0, 0.0, "dB"))
//!     .build();
//! let store: Arc<dyn ParameterStore> = tree.clone();
//!
//! let bridge = Bridge::new(&BridgeConfig::default(), make_view(), make_engine());
//! bridge.attach(&store)?;
//! # Ok(()) }
//! ```

pub mod bridge;
pub mod config;
pub mod engine;
pub mod error;
pub mod params;
pub mod ui;
pub mod view;

pub use bridge::{Attach, Bridge, EditOutcome, ParamRole};
pub use config::BridgeConfig;
pub use error::BridgeError;
