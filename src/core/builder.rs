use std::sync::Arc;

use crate::core::config::Config;
use crate::core::emitter::Emitter;
use crate::core::hub::Hub;
use crate::timer::{Scheduler, TokioScheduler};

/// Builder for constructing a root Emitter with optional overrides.
pub struct EmitterBuilder {
    cfg: Config,
    scheduler: Option<Arc<dyn Scheduler>>,
}

impl EmitterBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            scheduler: None,
        }
    }

    /// Sets the scheduler backing notify batching and the click window clock.
    ///
    /// Tests and demos usually install a
    /// [`ManualScheduler`](crate::ManualScheduler) here to drive time
    /// explicitly.
    pub fn with_scheduler(mut self, scheduler: Arc<dyn Scheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    /// Builds and returns the root emitter over a fresh hub.
    ///
    /// Without an explicit scheduler this falls back to [`TokioScheduler`],
    /// so it must then be called from within a tokio runtime.
    pub fn build(self) -> Emitter {
        let scheduler = self
            .scheduler
            .unwrap_or_else(|| Arc::new(TokioScheduler::new()));
        Emitter::root(Hub::new(self.cfg, scheduler))
    }
}
