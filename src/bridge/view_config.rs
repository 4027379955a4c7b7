//! View configuration selection

use tracing::debug;

use crate::view::{Layout, ViewConfiguration};

impl super::Bridge {
    /// The two supported configurations, default (expanded) first
    pub fn view_configurations(&self) -> [ViewConfiguration; 2] {
        [self.expanded, self.compact]
    }

    /// The configuration currently mounted
    pub fn active_view_configuration(&self) -> ViewConfiguration {
        *self.active_config.lock()
    }

    /// Switch to the other configuration of the pair
    pub fn toggle_view_configuration(&self) {
        let target = if self.active_config.lock().id() == self.expanded.id() {
            self.compact
        } else {
            self.expanded
        };
        self.select_view_configuration(&target);
    }

    /// Activate a view configuration
    ///
    /// A no-op when the requested configuration is already active, compared
    /// by identity rather than by dimensions. Otherwise the active
    /// configuration is replaced and the hierarchy swap is posted to the UI
    /// context.
    pub fn select_view_configuration(&self, config: &ViewConfiguration) {
        let mut active = self.active_config.lock();
        if active.id() == config.id() {
            return;
        }
        *active = *config;
        drop(active);

        let layout = self.classify(config);
        debug!(
            id = config.id(),
            width = config.width,
            height = config.height,
            %layout,
            "switching view configuration"
        );
        self.ui_handle().post(move |view| view.switch_layout(layout));
    }

    /// Classify a configuration against the expanded reference
    ///
    /// Anything meeting or exceeding the expanded reference on both axes is
    /// the default/expanded layout; everything else is compact.
    fn classify(&self, config: &ViewConfiguration) -> Layout {
        if config.width >= self.expanded.width && config.height >= self.expanded.height {
            Layout::Expanded
        } else {
            Layout::Compact
        }
    }
}
