//! Display refresh and response curve projection

use std::sync::Arc;

use tracing::{trace, warn};

use crate::engine::ResponseCurve;
use crate::params::Parameter;
use crate::ui::UiHandle;
use crate::view::FilterView;

impl super::Bridge {
    /// Push the latest store state to the view
    ///
    /// Values and display strings are read from the store at execution time
    /// on the UI context, never from a cache, so the view always reflects the
    /// newest state even when refreshes queue up. Idempotent for unchanged
    /// parameter values. A no-op before attach.
    pub fn refresh_display(&self) {
        let Some((cutoff, resonance)) = self.connected_params() else {
            return;
        };
        post_refresh(&self.ui, cutoff, resonance, &self.engine);
    }

    /// Recompute the derived response curve and push it to the view
    ///
    /// Sample points are pulled from the view, handed to the engine, and the
    /// magnitudes pushed back index-aligned.
    pub fn update_response_curve(&self) {
        let engine = self.engine.clone();
        self.ui.post(move |view| push_curve(view, &engine));
    }
}

/// Post a full view refresh onto the UI context
///
/// Shared by [`super::Bridge::refresh_display`] and the store observer
/// callbacks, which must not touch the view on their own thread.
pub(super) fn post_refresh(
    ui: &UiHandle,
    cutoff: &Arc<dyn Parameter>,
    resonance: &Arc<dyn Parameter>,
    engine: &Arc<dyn ResponseCurve>,
) {
    let cutoff = cutoff.clone();
    let resonance = resonance.clone();
    let engine = engine.clone();
    ui.post(move |view| {
        let frequency = cutoff.value();
        let res = resonance.value();
        view.display_values(frequency, res);
        view.set_frequency_text(cutoff.display_string());
        view.set_resonance_text(resonance.display_string());
        push_curve(view, &engine);
        trace!(frequency, resonance = res, "display refreshed");
    });
}

/// Pull sample points, evaluate the engine, push magnitudes
pub(super) fn push_curve(view: &mut dyn FilterView, engine: &Arc<dyn ResponseCurve>) {
    let frequencies = view.frequency_sample_points();
    let magnitudes = engine.magnitudes(&frequencies);
    if magnitudes.len() != frequencies.len() {
        warn!(
            frequencies = frequencies.len(),
            magnitudes = magnitudes.len(),
            "engine broke the same-length contract"
        );
    }
    view.set_magnitudes(magnitudes);
}
