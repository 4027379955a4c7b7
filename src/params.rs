//! Parameter store contract and in-memory tree
//!
//! The bridge only ever talks to parameters through the traits in this
//! module; the audio engine's real parameter tree lives behind them. The
//! bundled [`ParameterTree`] is an in-memory implementation used by the demo
//! binary and the test suite.

mod tree;
mod types;

pub use tree::{ParamSpec, ParameterTree, ParameterTreeBuilder};
pub use types::{
    BulkObserverFn, EventKind, ObserverToken, ParamAddress, Parameter, ParameterStore,
    ValueObserverFn,
};

/// Resolution key of the filter cutoff parameter
pub const CUTOFF_KEY: &str = "cutoff";

/// Resolution key of the filter resonance parameter
pub const RESONANCE_KEY: &str = "resonance";
