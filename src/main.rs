//! param-bridge demo
//!
//! Wires the bridge to an in-memory parameter tree, a console view, and a
//! one-pole rolloff stand-in for the engine's magnitude response, then
//! replays a typical host session: a drag gesture, a text edit, and a preset
//! recall.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use parking_lot::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use param_bridge::bridge::{Bridge, ParamRole};
use param_bridge::config::BridgeConfig;
use param_bridge::engine::ResponseCurve;
use param_bridge::params::{ParamSpec, Parameter, ParameterStore, ParameterTree};
use param_bridge::view::{FilterView, Layout, ViewEvent};

/// Parameter sync bridge demo - filter editor against an in-memory tree
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

/// Console rendition of the filter view
struct ConsoleView {
    state: Arc<Mutex<ConsoleViewState>>,
}

#[derive(Debug)]
struct ConsoleViewState {
    frequency: f32,
    resonance: f32,
    frequency_text: String,
    resonance_text: String,
    magnitudes: Vec<f32>,
    layout: Layout,
}

impl ConsoleView {
    fn new() -> (Self, Arc<Mutex<ConsoleViewState>>) {
        let state = Arc::new(Mutex::new(ConsoleViewState {
            frequency: 400.0,
            resonance: 0.0,
            frequency_text: String::new(),
            resonance_text: String::new(),
            magnitudes: Vec::new(),
            layout: Layout::Expanded,
        }));
        (
            ConsoleView {
                state: state.clone(),
            },
            state,
        )
    }
}

impl FilterView for ConsoleView {
    fn frequency_sample_points(&self) -> Vec<f32> {
        // 16 log-spaced points over the audible band.
        let (lo, hi) = (20.0f32, 20_000.0f32);
        let step = (hi / lo).powf(1.0 / 15.0);
        (0..16).map(|i| lo * step.powi(i)).collect()
    }

    fn set_magnitudes(&mut self, magnitudes: Vec<f32>) {
        self.state.lock().magnitudes = magnitudes;
    }

    fn display_values(&mut self, frequency: f32, resonance: f32) {
        let mut state = self.state.lock();
        state.frequency = frequency;
        state.resonance = resonance;
    }

    fn set_frequency_text(&mut self, text: String) {
        info!(frequency = %text, "view text updated");
        self.state.lock().frequency_text = text;
    }

    fn set_resonance_text(&mut self, text: String) {
        info!(resonance = %text, "view text updated");
        self.state.lock().resonance_text = text;
    }

    fn current_frequency(&self) -> f32 {
        self.state.lock().frequency
    }

    fn current_resonance(&self) -> f32 {
        self.state.lock().resonance
    }

    fn switch_layout(&mut self, layout: Layout) {
        info!(%layout, "view layout switched");
        self.state.lock().layout = layout;
    }
}

/// One-pole rolloff stand-in for the engine's magnitude response
struct RolloffCurve {
    cutoff: Arc<dyn Parameter>,
}

impl ResponseCurve for RolloffCurve {
    fn magnitudes(&self, frequencies: &[f32]) -> Vec<f32> {
        let fc = self.cutoff.value().max(1.0);
        frequencies
            .iter()
            .map(|f| 1.0 / (1.0 + (f / fc).powi(2)).sqrt())
            .collect()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let config = match &args.config {
        Some(path) => BridgeConfig::load(path).await?,
        None => BridgeConfig::default(),
    };
    config.validate()?;

    // The engine-side parameter tree with the filter's two parameters.
    let tree = ParameterTree::builder()
        .parameter(ParamSpec::new("cutoff", 0, 12.0, 20_000.0, 400.0, "Hz"))
        .parameter(ParamSpec::new("resonance", 1, -20.0, 20.0, 0.0, "dB"))
        .display_precision(config.display_precision)
        .build();
    let store: Arc<dyn ParameterStore> = tree.clone();

    let (view, view_state) = ConsoleView::new();
    let engine = Arc::new(RolloffCurve {
        cutoff: tree.resolve("cutoff").expect("tree declares cutoff"),
    });

    let bridge = Bridge::new(&config, Box::new(view), engine);
    bridge.attach(&store)?;
    bridge.ui_handle().flush().await;

    // A drag gesture on the curve editor.
    info!("simulating drag gesture: cutoff -> 2 kHz");
    bridge.on_view_event(ViewEvent::TouchBegan);
    bridge.on_view_event(ViewEvent::FrequencyChanged(2_000.0));
    bridge.on_view_event(ViewEvent::TouchEnded);
    bridge.ui_handle().flush().await;

    // A text-field commit.
    info!("simulating text edit: resonance -> 6 dB");
    bridge.apply_edit_from_text(ParamRole::Resonance, "6.0");
    bridge.ui_handle().flush().await;

    // A host preset recall.
    info!("simulating preset recall");
    tree.load_preset(&[("cutoff", 8_000.0), ("resonance", -3.0)]);
    bridge.ui_handle().flush().await;

    // And a host asking for the compact layout.
    bridge.toggle_view_configuration();
    bridge.ui_handle().flush().await;

    {
        let state = view_state.lock();
        info!(
            frequency = state.frequency,
            resonance = state.resonance,
            frequency_text = %state.frequency_text,
            resonance_text = %state.resonance_text,
            layout = %state.layout,
            curve_points = state.magnitudes.len(),
            "final view state"
        );
    }

    bridge.ui_handle().shutdown();
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}
