use crate::config::TocConfig;
use crate::error::TocError;
use crate::panel::Panel;
use generatoc_traits::Host;
use std::rc::Rc;

/// Init / destroy / refresh over at most one panel.
///
/// This is the lenient boundary: every error is logged and the call leaves the
/// session without a panel instead of failing.
pub struct TocSession<H: Host> {
    host: Rc<H>,
    config: TocConfig,
    panel: Option<Panel<H>>,
}

impl<H: Host> TocSession<H> {
    pub fn init(host: Rc<H>, config: TocConfig) -> Self {
        let panel = build_logged(&host, &config);
        Self {
            host,
            config,
            panel,
        }
    }

    /// Tears down the current panel, if any.
    pub fn destroy(&mut self) {
        if let Some(panel) = self.panel.take() {
            panel.teardown();
        }
    }

    /// Tears down and rebuilds with the configuration the session was created with.
    pub fn refresh(&mut self) {
        self.destroy();
        self.panel = build_logged(&self.host, &self.config);
    }

    /// Replaces the configuration and rebuilds.
    pub fn reconfigure(&mut self, config: TocConfig) {
        self.config = config;
        self.refresh();
    }

    pub fn panel(&self) -> Option<&Panel<H>> {
        self.panel.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.panel.is_some()
    }

    pub fn config(&self) -> &TocConfig {
        &self.config
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }
}

fn build_logged<H: Host>(host: &Rc<H>, config: &TocConfig) -> Option<Panel<H>> {
    match Panel::build(host.clone(), config.clone()) {
        Ok(panel) => Some(panel),
        Err(e @ TocError::NoHeadings { .. }) => {
            log::debug!("{}; nothing to render", e);
            None
        }
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}
