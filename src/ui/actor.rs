//! UiActor - single-consumer owner of the view
//!
//! All view access is serialized through one actor task: producers on
//! arbitrary threads post closures, the actor applies them to the view it
//! owns, in arrival order. This stands in for a GUI toolkit's main thread:
//! - Eliminates re-entrant view mutation by serializing all access
//! - Lets store callbacks stay non-blocking (posting never waits)
//! - Gives tests a flush barrier to await quiescence

use std::fmt;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use super::handle::UiHandle;
use crate::view::FilterView;

/// A closure applied to the view on the UI context
pub type UiTask = Box<dyn FnOnce(&mut dyn FilterView) + Send>;

/// Commands for the UI actor
///
/// `Run` is the hot path: fire-and-forget view work. `Flush` is a barrier
/// that resolves once everything posted before it has executed.
pub enum UiCommand {
    /// Apply a closure to the view
    Run(UiTask),
    /// Barrier: acknowledge once all prior commands have run
    Flush {
        /// Response channel
        response: oneshot::Sender<()>,
    },
    /// Stop the run loop
    Shutdown,
}

impl fmt::Debug for UiCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiCommand::Run(_) => write!(f, "Run"),
            UiCommand::Flush { .. } => f.debug_struct("Flush").finish_non_exhaustive(),
            UiCommand::Shutdown => write!(f, "Shutdown"),
        }
    }
}

/// Actor owning the view and applying posted tasks sequentially
pub struct UiActor {
    view: Box<dyn FilterView>,
    command_rx: mpsc::UnboundedReceiver<UiCommand>,
    task_count: u64,
}

impl UiActor {
    /// Spawn the actor on the current tokio runtime and return its handle
    pub fn spawn(view: Box<dyn FilterView>) -> UiHandle {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();

        let actor = UiActor {
            view,
            command_rx: cmd_rx,
            task_count: 0,
        };

        tokio::spawn(actor.run());
        debug!("UiActor spawned");

        UiHandle::new(cmd_tx)
    }

    /// Main run loop: process commands until shutdown or channel close
    async fn run(mut self) {
        debug!("UiActor run loop started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                UiCommand::Run(task) => {
                    task(self.view.as_mut());
                    self.task_count += 1;
                }
                UiCommand::Flush { response } => {
                    let _ = response.send(());
                }
                UiCommand::Shutdown => {
                    info!("UiActor received shutdown command");
                    break;
                }
            }
        }

        info!(task_count = self.task_count, "UiActor run loop terminated");
    }
}
