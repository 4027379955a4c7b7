//! Bridge module - core parameter synchronization
//!
//! The [`Bridge`] mediates between the parameter store and the view:
//! - Attaches once per store, resolving the cutoff/resonance parameters and
//!   registering bulk + per-address observers
//! - Marshals every store-originated notification onto the UI context
//! - Maps view edit events to store writes with gesture event kinds and
//!   originator-token echo suppression
//! - Relays text-field edits and the derived response curve
//! - Switches between the two fixed view configurations

mod edits;
mod refresh;
mod view_config;


pub use edits::{EditOutcome, ParamRole};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::config::BridgeConfig;
use crate::engine::ResponseCurve;
use crate::error::BridgeError;
use crate::params::{ObserverToken, Parameter, ParameterStore, CUTOFF_KEY, RESONANCE_KEY};
use crate::ui::{UiActor, UiHandle};
use crate::view::{FilterView, ViewConfiguration};

/// Result of an attach attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attach {
    /// Parameters resolved, observers registered, initial refresh queued
    Connected,
    /// Already connected; nothing was done
    Deferred,
}

/// Parameter sync bridge between a filter view and a parameter store
///
/// Connection state is written once during [`Bridge::attach`] and read-only
/// afterwards, including from store callback threads, so no locks sit on the
/// notification path.
pub struct Bridge {
    engine: Arc<dyn ResponseCurve>,
    ui: UiHandle,
    compact: ViewConfiguration,
    expanded: ViewConfiguration,
    active_config: Mutex<ViewConfiguration>,
    cutoff: OnceCell<Arc<dyn Parameter>>,
    resonance: OnceCell<Arc<dyn Parameter>>,
    observer_token: OnceCell<ObserverToken>,
    needs_connection: AtomicBool,
}

impl Bridge {
    /// Create a bridge owning the view via a freshly spawned UI actor
    ///
    /// Must be called within a tokio runtime.
    pub fn new(
        config: &BridgeConfig,
        view: Box<dyn FilterView>,
        engine: Arc<dyn ResponseCurve>,
    ) -> Self {
        let ui = UiActor::spawn(view);
        Self::with_ui(config, ui, engine)
    }

    /// Create a bridge on an existing UI context
    pub fn with_ui(config: &BridgeConfig, ui: UiHandle, engine: Arc<dyn ResponseCurve>) -> Self {
        let compact =
            ViewConfiguration::new(0, config.view.compact.width, config.view.compact.height);
        let expanded =
            ViewConfiguration::new(1, config.view.expanded.width, config.view.expanded.height);
        Self {
            engine,
            ui,
            compact,
            expanded,
            // The expanded layout is mounted first.
            active_config: Mutex::new(expanded),
            cutoff: OnceCell::new(),
            resonance: OnceCell::new(),
            observer_token: OnceCell::new(),
            needs_connection: AtomicBool::new(true),
        }
    }

    /// Connect the view to the store's parameters
    ///
    /// Idempotent: once connected, further calls return [`Attach::Deferred`]
    /// without touching the store. A store missing either required parameter
    /// is a fatal configuration error; the bridge stays unconnected and the
    /// caller decides how to terminate.
    pub fn attach(&self, store: &Arc<dyn ParameterStore>) -> Result<Attach, BridgeError> {
        if !self.needs_connection.load(Ordering::Acquire) {
            return Ok(Attach::Deferred);
        }
        if !self.ui.is_alive() {
            return Err(BridgeError::UiClosed);
        }

        let cutoff = store
            .resolve(CUTOFF_KEY)
            .ok_or(BridgeError::ParameterNotFound { name: CUTOFF_KEY })?;
        let resonance = store
            .resolve(RESONANCE_KEY)
            .ok_or(BridgeError::ParameterNotFound {
                name: RESONANCE_KEY,
            })?;

        // Claim the single registration slot; a concurrent attach that
        // resolved in parallel backs off here.
        if self
            .needs_connection
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(Attach::Deferred);
        }

        let _ = self.cutoff.set(cutoff.clone());
        let _ = self.resonance.set(resonance.clone());

        // Coarse state changes (e.g. a user preset recall) refresh everything.
        {
            let ui = self.ui.clone();
            let cutoff = cutoff.clone();
            let resonance = resonance.clone();
            let engine = self.engine.clone();
            store.observe_bulk(Arc::new(move || {
                refresh::post_refresh(&ui, &cutoff, &resonance, &engine);
            }));
        }

        // Individual value changes on either of our two addresses. The store
        // may invoke this from any thread, so the callback only ever posts.
        let watched = [cutoff.address(), resonance.address()];
        let token = {
            let ui = self.ui.clone();
            let cutoff = cutoff.clone();
            let resonance = resonance.clone();
            let engine = self.engine.clone();
            store.observe_values(
                &watched,
                Arc::new(move |address, _value| {
                    if watched.contains(&address) {
                        refresh::post_refresh(&ui, &cutoff, &resonance, &engine);
                    }
                }),
            )
        };
        let _ = self.observer_token.set(token);

        info!(
            cutoff = %cutoff.address(),
            resonance = %resonance.address(),
            "bridge attached to parameter store"
        );

        // Sync the view with the current parameter state.
        self.refresh_display();
        Ok(Attach::Connected)
    }

    /// Whether attach has completed
    pub fn is_connected(&self) -> bool {
        !self.needs_connection.load(Ordering::Acquire)
    }

    /// Handle to the UI context (for flush barriers and shutdown)
    pub fn ui_handle(&self) -> &UiHandle {
        &self.ui
    }

    /// Both parameter handles, once connected
    pub(crate) fn connected_params(&self) -> Option<(&Arc<dyn Parameter>, &Arc<dyn Parameter>)> {
        match (self.cutoff.get(), self.resonance.get()) {
            (Some(cutoff), Some(resonance)) => Some((cutoff, resonance)),
            _ => {
                debug!("bridge used before attach completed");
                None
            }
        }
    }

    /// The token identifying this bridge as a write originator
    pub(crate) fn self_token(&self) -> Option<ObserverToken> {
        self.observer_token.get().copied()
    }
}
