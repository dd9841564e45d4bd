//! ServiceContext: the single owner of every engine component.

use std::path::Path;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use coalesce_core::config::CoalesceConfig;
use coalesce_core::errors::WorkspaceError;
use coalesce_core::events::{EventDispatcher, ModelPublishedEvent};
use coalesce_core::logging;
use coalesce_core::models::Intelligence;
use coalesce_core::traits::HistoricalStore;
use coalesce_core::{CoalesceError, CoalesceResult};
use coalesce_extraction::{FeatureExtractor, PatternCache};
use coalesce_monitor::{MonitoringScheduler, StartOutcome, StopOutcome, TracingEventHandler};
use coalesce_prediction::{PredictiveModel, SqliteHistoricalStore};
use coalesce_similarity::SimilarityEngine;
use tracing::info;

use crate::gateway::ApiGateway;
use crate::metrics::RequestCounters;

/// Components shared by the context and every gateway handle.
pub(crate) struct Services {
    pub(crate) config: CoalesceConfig,
    pub(crate) extractor: FeatureExtractor,
    pub(crate) cache: PatternCache,
    pub(crate) similarity: SimilarityEngine,
    pub(crate) prediction: PredictiveModel,
    pub(crate) monitor: MonitoringScheduler,
    pub(crate) events: EventDispatcher,
    pub(crate) counters: RequestCounters,
}

impl Services {
    pub(crate) fn retrain(&self, store: &dyn HistoricalStore) -> Intelligence {
        let intelligence = self.prediction.retrain_from(store);
        self.events.emit_model_published(&ModelPublishedEvent {
            intelligence: intelligence.clone(),
        });
        intelligence
    }
}

/// Built once per process and passed by reference. Dropping it stops
/// the monitoring worker.
pub struct ServiceContext {
    services: Arc<Services>,
}

impl ServiceContext {
    /// Validate `config` and the workspace root, then build every component.
    ///
    /// Invalid configuration and a missing or non-directory root are the
    /// only failures; everything after this point degrades instead.
    pub fn initialize(config: CoalesceConfig) -> CoalesceResult<Self> {
        Self::initialize_with_events(config, EventDispatcher::new())
    }

    /// As [`initialize`](Self::initialize), with caller-registered event
    /// handlers. The tracing handler is always added.
    pub fn initialize_with_events(
        config: CoalesceConfig,
        mut events: EventDispatcher,
    ) -> CoalesceResult<Self> {
        config.validate()?;
        validate_root(&config.workspace.root)?;

        events.register(Arc::new(TracingEventHandler));

        let monitor =
            MonitoringScheduler::new(&config.workspace, config.monitor.clone(), events.clone());
        let services = Services {
            extractor: FeatureExtractor::new(config.extraction.clone()),
            cache: PatternCache::new(config.extraction.cache_capacity),
            similarity: SimilarityEngine::new(config.similarity.clone()),
            prediction: PredictiveModel::new(config.prediction.clone()),
            monitor,
            events,
            counters: RequestCounters::new(),
            config,
        };
        info!(
            root = %services.config.workspace.root.display(),
            backend = ?services.config.prediction.backend,
            "service context initialized"
        );
        Ok(Self {
            services: Arc::new(services),
        })
    }

    /// Install the tracing subscriber, load layered configuration for
    /// `root`, and initialize.
    pub fn open(root: &Path) -> CoalesceResult<Self> {
        logging::init_tracing();
        let config = CoalesceConfig::load(root)?;
        Self::initialize(config)
    }

    pub fn config(&self) -> &CoalesceConfig {
        &self.services.config
    }

    /// A request handle sharing this context's components.
    pub fn gateway(&self) -> ApiGateway {
        ApiGateway::new(Arc::clone(&self.services))
    }

    /// Retrain on the caller's thread and publish the result.
    pub fn retrain(&self, store: &dyn HistoricalStore) -> Intelligence {
        self.services.retrain(store)
    }

    /// Retrain from the workspace's own historical store.
    pub fn retrain_from_workspace(&self) -> Intelligence {
        let store = SqliteHistoricalStore::new(self.services.config.workspace.store_path());
        self.services.retrain(&store)
    }

    /// Retrain on a background thread. Predictions keep using the
    /// previous model until the new one is published.
    pub fn spawn_retrain(
        &self,
        store: Arc<dyn HistoricalStore>,
    ) -> CoalesceResult<JoinHandle<Intelligence>> {
        let services = Arc::clone(&self.services);
        thread::Builder::new()
            .name("coalesce-retrain".to_string())
            .spawn(move || services.retrain(store.as_ref()))
            .map_err(|e| CoalesceError::Scheduler {
                reason: format!("failed to spawn retraining thread: {e}"),
            })
    }

    pub fn start_monitoring(&self) -> CoalesceResult<StartOutcome> {
        self.services.monitor.start()
    }

    pub fn stop_monitoring(&self) -> StopOutcome {
        self.services.monitor.stop()
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        self.services.monitor.stop();
    }
}

fn validate_root(root: &Path) -> Result<(), WorkspaceError> {
    if !root.exists() {
        return Err(WorkspaceError::RootMissing {
            path: root.display().to_string(),
        });
    }
    if !root.is_dir() {
        return Err(WorkspaceError::NotADirectory {
            path: root.display().to_string(),
        });
    }
    Ok(())
}
