//! View contract - filter curve editor display and edit events
//!
//! The concrete view belongs to whatever GUI toolkit hosts the plugin; the
//! bridge only needs a display surface it can push values to and a stream of
//! edit events coming back. All [`FilterView`] methods are invoked on the UI
//! context exclusively (see [`crate::ui`]).

use std::fmt;

/// Which of the two fixed view hierarchies is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Small strip layout
    Compact,
    /// Full-size layout with the curve editor
    Expanded,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Compact => write!(f, "compact"),
            Layout::Expanded => write!(f, "expanded"),
        }
    }
}

/// A fixed (width, height) layout descriptor
///
/// Exactly two exist per bridge, created as a pair from the configuration.
/// Configurations compare by identity (their `id`), not by dimensions: two
/// configurations with equal sizes are still distinct selections.
#[derive(Debug, Clone, Copy)]
pub struct ViewConfiguration {
    id: u32,
    /// Width in points
    pub width: u32,
    /// Height in points
    pub height: u32,
}

impl ViewConfiguration {
    /// Create a configuration with an explicit identity
    pub fn new(id: u32, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    /// Identity of this configuration
    pub fn id(&self) -> u32 {
        self.id
    }
}

/// Edit events emitted by the view while the user interacts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    /// The user grabbed the curve control point
    TouchBegan,
    /// The user let go of the control point
    TouchEnded,
    /// Vertical drag changed resonance only
    ResonanceChanged(f32),
    /// Horizontal drag changed frequency only
    FrequencyChanged(f32),
    /// Diagonal drag changed both axes at once
    BothChanged {
        /// New cutoff frequency in Hz
        frequency: f32,
        /// New resonance in dB
        resonance: f32,
    },
    /// The view's drawing data changed (e.g. resize changed sample points)
    DataChanged,
}

/// Display surface for the two parameter values and the response curve
///
/// Note: all methods are called from the UI context only. Implementations
/// never need internal locking, but must be `Send` so the UI actor can own
/// them.
pub trait FilterView: Send {
    /// Frequency sample points the view wants the curve evaluated at
    fn frequency_sample_points(&self) -> Vec<f32>;

    /// Accept magnitudes index-aligned with the last sample points
    fn set_magnitudes(&mut self, magnitudes: Vec<f32>);

    /// Update the graphical control point position
    fn display_values(&mut self, frequency: f32, resonance: f32);

    /// Update the frequency text field with its canonical formatted value
    fn set_frequency_text(&mut self, text: String);

    /// Update the resonance text field with its canonical formatted value
    fn set_resonance_text(&mut self, text: String);

    /// Cutoff frequency currently shown by the view
    fn current_frequency(&self) -> f32;

    /// Resonance currently shown by the view
    fn current_resonance(&self) -> f32;

    /// Swap the mounted view hierarchy
    fn switch_layout(&mut self, layout: Layout);
}
