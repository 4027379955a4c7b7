//! View-originated edits: gesture events and text-field commits

use tracing::{debug, trace};

use crate::params::EventKind;
use crate::view::ViewEvent;

/// Which of the two bridged parameters a text edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamRole {
    /// Cutoff frequency field
    Cutoff,
    /// Resonance field
    Resonance,
}

/// Result of a text-field commit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    /// The parsed value was written to the store
    Applied(f32),
    /// The text did not parse (or the bridge is unattached); nothing changed
    Ignored,
}

impl super::Bridge {
    /// Commit a text-field edit
    ///
    /// Unparseable input is dropped without store mutation. On success the
    /// value is written as a plain commit and the edited field is re-rendered
    /// from the store's canonical formatting, which may differ from the raw
    /// text (clamping, unit rollover). The other field is untouched.
    pub fn apply_edit_from_text(&self, role: ParamRole, raw: &str) -> EditOutcome {
        let Some((cutoff, resonance)) = self.connected_params() else {
            return EditOutcome::Ignored;
        };

        let value = match raw.trim().parse::<f32>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                debug!(?role, raw, "unparseable text edit ignored");
                return EditOutcome::Ignored;
            }
        };

        let param = match role {
            ParamRole::Cutoff => cutoff,
            ParamRole::Resonance => resonance,
        };
        param.set(value);

        // Round-trip: the field shows the store's canonical text, not the
        // user's raw input.
        let text = param.display_string();
        self.ui_handle().post(move |view| match role {
            ParamRole::Cutoff => view.set_frequency_text(text),
            ParamRole::Resonance => view.set_resonance_text(text),
        });

        debug!(?role, value, "text edit applied");
        EditOutcome::Applied(value)
    }

    /// Route an edit event from the view to the store
    ///
    /// Gesture boundaries (touch began/ended) capture the view's current
    /// values on the UI context and write both parameters, resonance first.
    /// Live drags carry their values and write exactly one parameter (or
    /// both for a diagonal drag) with the bridge's own token as originator,
    /// so the host hears the edit but the bridge's observer stays quiet.
    /// Release writes pass no originator: every observer, this bridge
    /// included, receives the final authoritative values.
    pub fn on_view_event(&self, event: ViewEvent) {
        let Some((cutoff, resonance)) = self.connected_params() else {
            return;
        };
        let token = self.self_token();
        trace!(?event, "view event");

        match event {
            ViewEvent::TouchBegan => {
                let cutoff = cutoff.clone();
                let resonance = resonance.clone();
                self.ui_handle().post(move |view| {
                    let res = view.current_resonance();
                    let freq = view.current_frequency();
                    resonance.set_value(res, token, EventKind::Touch);
                    cutoff.set_value(freq, token, EventKind::Touch);
                });
            }
            ViewEvent::TouchEnded => {
                let cutoff = cutoff.clone();
                let resonance = resonance.clone();
                self.ui_handle().post(move |view| {
                    let res = view.current_resonance();
                    let freq = view.current_frequency();
                    resonance.set_value(res, None, EventKind::Release);
                    cutoff.set_value(freq, None, EventKind::Release);
                });
            }
            ViewEvent::ResonanceChanged(value) => {
                resonance.set_value(value, token, EventKind::Value);
                self.update_response_curve();
            }
            ViewEvent::FrequencyChanged(value) => {
                cutoff.set_value(value, token, EventKind::Value);
                self.update_response_curve();
            }
            ViewEvent::BothChanged {
                frequency,
                resonance: res,
            } => {
                resonance.set_value(res, token, EventKind::Value);
                cutoff.set_value(frequency, token, EventKind::Value);
                self.update_response_curve();
            }
            ViewEvent::DataChanged => {
                self.update_response_curve();
            }
        }
    }
}
