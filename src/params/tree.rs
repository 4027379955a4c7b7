//! In-memory parameter tree
//!
//! A [`ParameterStore`] implementation backing the demo binary and tests.
//! Values are clamped into the declared range on every write, and observer
//! notification implements originator-based echo suppression: a write that
//! names a registered token as its originator skips that observer and
//! notifies all others.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use super::types::{
    BulkObserverFn, EventKind, ObserverToken, ParamAddress, Parameter, ParameterStore,
    ValueObserverFn,
};

/// Declaration of a parameter hosted by a [`ParameterTree`]
#[derive(Debug, Clone)]
pub struct ParamSpec {
    /// Resolution key, matched bit-exact by `resolve`
    pub name: String,
    /// Stable address
    pub address: ParamAddress,
    /// Lower bound (inclusive)
    pub min: f32,
    /// Upper bound (inclusive)
    pub max: f32,
    /// Initial value
    pub default: f32,
    /// Unit suffix used by the canonical display string
    pub unit: String,
}

impl ParamSpec {
    /// Convenience constructor
    pub fn new(
        name: &str,
        address: u64,
        min: f32,
        max: f32,
        default: f32,
        unit: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            address: ParamAddress(address),
            min,
            max,
            default: default.clamp(min, max),
            unit: unit.to_string(),
        }
    }
}

struct ValueObserverEntry {
    token: ObserverToken,
    addresses: Vec<ParamAddress>,
    callback: ValueObserverFn,
}

/// Observer registrations shared between the tree and its parameters
#[derive(Default)]
struct Observers {
    bulk: RwLock<Vec<BulkObserverFn>>,
    value: RwLock<Vec<ValueObserverEntry>>,
}

impl Observers {
    /// Notify value observers watching `addr`, skipping the originator
    fn notify_value(&self, addr: ParamAddress, value: f32, originator: Option<ObserverToken>) {
        let observers = self.value.read();
        for entry in observers.iter() {
            if Some(entry.token) == originator {
                continue;
            }
            if entry.addresses.contains(&addr) {
                (entry.callback)(addr, value);
            }
        }
    }

    fn notify_bulk(&self) {
        let observers = self.bulk.read();
        for callback in observers.iter() {
            callback();
        }
    }
}

/// A parameter owned by a [`ParameterTree`]
struct TreeParameter {
    spec: ParamSpec,
    value: RwLock<f32>,
    precision: usize,
    observers: Arc<Observers>,
}

impl TreeParameter {
    /// Clamp and store, returning the stored value
    fn store(&self, value: f32) -> f32 {
        let clamped = value.clamp(self.spec.min, self.spec.max);
        *self.value.write() = clamped;
        clamped
    }
}

impl Parameter for TreeParameter {
    fn name(&self) -> &str {
        &self.spec.name
    }

    fn address(&self) -> ParamAddress {
        self.spec.address
    }

    fn value(&self) -> f32 {
        *self.value.read()
    }

    fn set_value(&self, value: f32, originator: Option<ObserverToken>, kind: EventKind) {
        let stored = self.store(value);
        trace!(
            param = %self.spec.name,
            value = stored,
            %kind,
            suppressed = originator.is_some(),
            "parameter write"
        );
        self.observers
            .notify_value(self.spec.address, stored, originator);
    }

    fn set(&self, value: f32) {
        let stored = self.store(value);
        trace!(param = %self.spec.name, value = stored, "parameter commit");
        self.observers.notify_value(self.spec.address, stored, None);
    }

    fn display_string(&self) -> String {
        let value = self.value();
        // Frequencies read better in kHz once they cross 1000 Hz.
        if self.spec.unit == "Hz" && value >= 1000.0 {
            format!("{:.*} kHz", self.precision, value / 1000.0)
        } else if self.spec.unit.is_empty() {
            format!("{:.*}", self.precision, value)
        } else {
            format!("{:.*} {}", self.precision, value, self.spec.unit)
        }
    }
}

/// In-memory observable parameter tree
pub struct ParameterTree {
    parameters: Vec<Arc<TreeParameter>>,
    observers: Arc<Observers>,
}

impl ParameterTree {
    /// Start declaring a tree
    pub fn builder() -> ParameterTreeBuilder {
        ParameterTreeBuilder {
            specs: Vec::new(),
            precision: 2,
        }
    }

    /// Replace every parameter value at once (preset recall)
    ///
    /// Entries are matched by name; unknown names are ignored. Per-address
    /// observers do not fire for preset recall; the bulk observers fire once
    /// after all values are in place.
    pub fn load_preset(&self, values: &[(&str, f32)]) {
        for (name, value) in values {
            if let Some(param) = self.parameters.iter().find(|p| p.spec.name == *name) {
                param.store(*value);
            } else {
                debug!(name = *name, "preset names unknown parameter, skipping");
            }
        }
        debug!(entries = values.len(), "preset loaded, notifying bulk observers");
        self.observers.notify_bulk();
    }
}

impl ParameterStore for ParameterTree {
    fn resolve(&self, name: &str) -> Option<Arc<dyn Parameter>> {
        self.parameters
            .iter()
            .find(|p| p.spec.name == name)
            .map(|p| p.clone() as Arc<dyn Parameter>)
    }

    fn observe_bulk(&self, callback: BulkObserverFn) {
        self.observers.bulk.write().push(callback);
    }

    fn observe_values(
        &self,
        addresses: &[ParamAddress],
        callback: ValueObserverFn,
    ) -> ObserverToken {
        let token = ObserverToken::allocate();
        self.observers.value.write().push(ValueObserverEntry {
            token,
            addresses: addresses.to_vec(),
            callback,
        });
        debug!(?token, watched = addresses.len(), "value observer registered");
        token
    }
}

/// Builder for [`ParameterTree`]
pub struct ParameterTreeBuilder {
    specs: Vec<ParamSpec>,
    precision: usize,
}

impl ParameterTreeBuilder {
    /// Declare a parameter
    pub fn parameter(mut self, spec: ParamSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Set the decimal digits used by every canonical display string
    pub fn display_precision(mut self, digits: usize) -> Self {
        self.precision = digits;
        self
    }

    /// Build the shared tree
    pub fn build(self) -> Arc<ParameterTree> {
        let observers = Arc::new(Observers::default());
        let precision = self.precision;
        let parameters = self
            .specs
            .into_iter()
            .map(|spec| {
                Arc::new(TreeParameter {
                    value: RwLock::new(spec.default),
                    spec,
                    precision,
                    observers: observers.clone(),
                })
            })
            .collect();
        Arc::new(ParameterTree {
            parameters,
            observers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn make_tree() -> Arc<ParameterTree> {
        ParameterTree::builder()
            .parameter(ParamSpec::new("cutoff", 0, 12.0, 20_000.0, 400.0, "Hz"))
            .parameter(ParamSpec::new("resonance", 1, -20.0, 20.0, 0.0, "dB"))
            .build()
    }

    #[test]
    fn test_resolve_exact_key_only() {
        let tree = make_tree();
        assert!(tree.resolve("cutoff").is_some());
        assert!(tree.resolve("resonance").is_some());
        assert!(tree.resolve("Cutoff").is_none());
        assert!(tree.resolve("cutoff ").is_none());
        assert!(tree.resolve("gain").is_none());
    }

    #[test]
    fn test_defaults_and_clamping() {
        let tree = make_tree();
        let cutoff = tree.resolve("cutoff").unwrap();
        assert_eq!(cutoff.value(), 400.0);

        cutoff.set(1_000_000.0);
        assert_eq!(cutoff.value(), 20_000.0);

        cutoff.set(-5.0);
        assert_eq!(cutoff.value(), 12.0);
    }

    #[test]
    fn test_display_string_khz_rollover() {
        let tree = make_tree();
        let cutoff = tree.resolve("cutoff").unwrap();
        let resonance = tree.resolve("resonance").unwrap();

        cutoff.set(440.0);
        assert_eq!(cutoff.display_string(), "440.00 Hz");

        cutoff.set(8_500.0);
        assert_eq!(cutoff.display_string(), "8.50 kHz");

        resonance.set(-3.25);
        assert_eq!(resonance.display_string(), "-3.25 dB");
    }

    #[test]
    fn test_display_string_honors_configured_precision() {
        let tree = ParameterTree::builder()
            .parameter(ParamSpec::new("cutoff", 0, 12.0, 20_000.0, 400.0, "Hz"))
            .parameter(ParamSpec::new("resonance", 1, -20.0, 20.0, 0.0, "dB"))
            .display_precision(3)
            .build();
        let cutoff = tree.resolve("cutoff").unwrap();
        let resonance = tree.resolve("resonance").unwrap();

        assert_eq!(cutoff.display_string(), "400.000 Hz");
        cutoff.set(2_500.0);
        assert_eq!(cutoff.display_string(), "2.500 kHz");
        assert_eq!(resonance.display_string(), "0.000 dB");
    }

    #[test]
    fn test_echo_suppression_skips_originator() {
        let tree = make_tree();
        let cutoff = tree.resolve("cutoff").unwrap();
        let addr = cutoff.address();

        let self_hits = Arc::new(AtomicUsize::new(0));
        let other_hits = Arc::new(AtomicUsize::new(0));

        let hits = self_hits.clone();
        let token = tree.observe_values(
            &[addr],
            Arc::new(move |_, _| {
                hits.fetch_add(1, Ordering::SeqCst);
            }),
        );
        let hits = other_hits.clone();
        tree.observe_values(
            &[addr],
            Arc::new(move |_, _| {
                hits.fetch_add(1, Ordering::SeqCst);
            }),
        );

        // Self-originated: every observer except the originator fires.
        cutoff.set_value(1_000.0, Some(token), EventKind::Value);
        assert_eq!(self_hits.load(Ordering::SeqCst), 0);
        assert_eq!(other_hits.load(Ordering::SeqCst), 1);

        // Host-wide release: everyone fires, the originator included.
        cutoff.set_value(1_200.0, None, EventKind::Release);
        assert_eq!(self_hits.load(Ordering::SeqCst), 1);
        assert_eq!(other_hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_value_observer_filters_addresses() {
        let tree = make_tree();
        let cutoff = tree.resolve("cutoff").unwrap();
        let resonance = tree.resolve("resonance").unwrap();

        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        tree.observe_values(
            &[cutoff.address()],
            Arc::new(move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        resonance.set(5.0);
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        cutoff.set(900.0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_preset_fires_bulk_not_value_observers() {
        let tree = make_tree();
        let cutoff = tree.resolve("cutoff").unwrap();

        let bulk_hits = Arc::new(AtomicUsize::new(0));
        let value_hits = Arc::new(AtomicUsize::new(0));

        let counter = bulk_hits.clone();
        tree.observe_bulk(Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        let counter = value_hits.clone();
        tree.observe_values(
            &[cutoff.address()],
            Arc::new(move |_, _| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        tree.load_preset(&[("cutoff", 8_000.0), ("resonance", -3.0), ("unknown", 1.0)]);

        assert_eq!(bulk_hits.load(Ordering::SeqCst), 1);
        assert_eq!(value_hits.load(Ordering::SeqCst), 0);
        assert_eq!(cutoff.value(), 8_000.0);
        assert_eq!(tree.resolve("resonance").unwrap().value(), -3.0);
    }
}
