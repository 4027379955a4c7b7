//! Parameter contract type definitions
//!
//! Defines the addressable-parameter types and the observer traits that the
//! bridge relies on. The store behind these traits is typically the audio
//! engine's parameter tree; callbacks may arrive on any thread it chooses.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Opaque identity of a parameter inside a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamAddress(pub u64);

impl fmt::Display for ParamAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Place of a parameter write inside a user gesture
///
/// `Touch` opens a gesture, `Value` carries live edits, `Release` closes the
/// gesture with the final authoritative value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Gesture begin (control grabbed)
    Touch,
    /// Live value change during a gesture
    Value,
    /// Gesture end (control released)
    Release,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Touch => write!(f, "touch"),
            EventKind::Value => write!(f, "value"),
            EventKind::Release => write!(f, "release"),
        }
    }
}

/// Opaque handle identifying a registered value observer
///
/// Passed back as the `originator` of a write to suppress the echo
/// notification to that same observer. All other observers still fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverToken(u64);

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

impl ObserverToken {
    /// Allocate a process-unique token
    ///
    /// Store implementations call this when registering a value observer.
    pub fn allocate() -> Self {
        ObserverToken(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

/// Callback fired on coarse whole-state changes (e.g. preset recall)
///
/// May be invoked from an arbitrary thread; must never block.
pub type BulkObserverFn = Arc<dyn Fn() + Send + Sync>;

/// Callback fired on individual value changes, with address and new value
///
/// May be invoked from an arbitrary thread; must never block.
pub type ValueObserverFn = Arc<dyn Fn(ParamAddress, f32) + Send + Sync>;

/// A named, addressable, observable floating-point control
///
/// All methods take `&self`; implementations use interior mutability so
/// handles can be shared as `Arc<dyn Parameter>` across threads.
pub trait Parameter: Send + Sync {
    /// Resolution key of the parameter (e.g. "cutoff")
    fn name(&self) -> &str;

    /// Stable address within the owning store
    fn address(&self) -> ParamAddress;

    /// Current value
    fn value(&self) -> f32;

    /// Write a value as part of a gesture
    ///
    /// `originator` names the observer that initiated the write; that
    /// observer is not notified of its own edit. Passing `None` notifies
    /// every observer, including the initiator.
    fn set_value(&self, value: f32, originator: Option<ObserverToken>, kind: EventKind);

    /// Plain value commit with no gesture qualification
    ///
    /// Equivalent to a host-wide write: every observer is notified.
    fn set(&self, value: f32);

    /// Canonical human-readable representation of the current value
    fn display_string(&self) -> String;
}

/// A store of observable parameters (the audio engine's parameter tree)
pub trait ParameterStore: Send + Sync {
    /// Look up a parameter by its exact key
    fn resolve(&self, name: &str) -> Option<Arc<dyn Parameter>>;

    /// Register an observer for coarse whole-state changes
    fn observe_bulk(&self, callback: BulkObserverFn);

    /// Register an observer for value changes on the given addresses
    ///
    /// Returns the token identifying this registration, usable as a write
    /// originator for echo suppression.
    fn observe_values(&self, addresses: &[ParamAddress], callback: ValueObserverFn)
        -> ObserverToken;
}
