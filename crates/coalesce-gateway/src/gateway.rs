//! ApiGateway: the synchronous request surface.
//!
//! Every operation reads published snapshots; none waits on retraining
//! or on the monitoring worker.

use std::sync::Arc;

use coalesce_core::config::defaults;
use coalesce_core::errors::GatewayError;
use coalesce_core::events::ExtractionDegradedEvent;
use coalesce_core::models::{
    ConsolidationOpportunity, ExtractionMode, FeatureMap, GatewayMetrics, HealthSnapshot,
    Intelligence, IntegrationReport, MonitorSnapshot, PredictionBatch, Recommendation,
    SemanticPattern, SourceUnit,
};
use tracing::debug;

use crate::context::Services;
use crate::integration;

/// Cheap, cloneable request handle obtained from a `ServiceContext`.
#[derive(Clone)]
pub struct ApiGateway {
    services: Arc<Services>,
}

impl ApiGateway {
    pub(crate) fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    /// Ranked consolidation opportunities across `patterns`.
    pub fn analyze_consolidation(
        &self,
        patterns: &[SemanticPattern],
    ) -> Result<Vec<ConsolidationOpportunity>, GatewayError> {
        self.services.counters.request();
        self.check_batch(patterns.len())?;
        Ok(self.discover(patterns))
    }

    /// Register `units` and analyze them together.
    pub fn analyze_units(
        &self,
        units: &[SourceUnit],
    ) -> Result<Vec<ConsolidationOpportunity>, GatewayError> {
        self.services.counters.request();
        self.check_batch(units.len())?;
        let patterns = self.extract(units);
        Ok(self.discover(&patterns))
    }

    /// Similarity between two registered patterns.
    pub fn query_similarity(&self, id_a: &str, id_b: &str) -> Result<f64, GatewayError> {
        self.services.counters.request();
        let a = self.registered(id_a)?;
        let b = self.registered(id_b)?;
        Ok(self.services.similarity.similarity(&a, &b))
    }

    pub fn get_predictions(&self, feature_map: &FeatureMap) -> PredictionBatch {
        self.services.counters.request();
        let batch = self.services.prediction.predict(feature_map);
        self.services.counters.predictions(batch.predictions.len());
        batch
    }

    pub fn get_health(&self) -> HealthSnapshot {
        self.services.counters.request();
        self.services.monitor.health()
    }

    pub fn get_optimization_recommendations(&self) -> Vec<Recommendation> {
        self.services.counters.request();
        self.services.monitor.recommendations()
    }

    /// Extract `units` through the pattern cache, making them available
    /// to `query_similarity`. Output order follows input order.
    pub fn register_units(&self, units: &[SourceUnit]) -> Vec<Arc<SemanticPattern>> {
        self.services.counters.request();
        self.extract(units)
    }

    pub fn get_metrics(&self) -> GatewayMetrics {
        self.services.counters.request();
        let counters = &self.services.counters;
        let monitor = self.services.monitor.snapshot();
        GatewayMetrics {
            uptime_secs: counters.uptime_secs(),
            api_requests: counters.api_requests(),
            analyses_performed: counters.analyses_performed(),
            opportunities_found: counters.opportunities_found(),
            predictions_generated: counters.predictions_generated(),
            monitoring_ticks: monitor.ticks,
            optimization_cycles: monitor.cycles_completed,
            cumulative_improvement: monitor.cumulative_improvement,
            health_score: monitor.health.score,
            pattern_cache_hit_rate: self.services.cache.hit_rate(),
        }
    }

    /// Self-check of every component.
    pub fn validate_integration(&self) -> IntegrationReport {
        self.services.counters.request();
        let report = IntegrationReport::from_checks(
            integration::run_checks(&self.services),
            defaults::ENTERPRISE_READY_COMPLIANCE,
        );
        debug!(
            compliance = report.compliance_score,
            ready = report.enterprise_ready,
            "integration validated"
        );
        report
    }

    pub fn model_intelligence(&self) -> Intelligence {
        self.services.counters.request();
        self.services.prediction.intelligence()
    }

    pub fn monitor_snapshot(&self) -> Arc<MonitorSnapshot> {
        self.services.counters.request();
        self.services.monitor.snapshot()
    }

    fn check_batch(&self, size: usize) -> Result<(), GatewayError> {
        let limit = self.services.config.similarity.max_batch_patterns;
        if size > limit {
            return Err(GatewayError::BatchTooLarge { size, limit });
        }
        Ok(())
    }

    fn registered(&self, id: &str) -> Result<Arc<SemanticPattern>, GatewayError> {
        self.services
            .cache
            .lookup(id)
            .ok_or_else(|| GatewayError::UnknownPattern { id: id.to_string() })
    }

    fn extract(&self, units: &[SourceUnit]) -> Vec<Arc<SemanticPattern>> {
        let patterns = self
            .services
            .cache
            .get_or_extract_batch(units, &self.services.extractor);
        for pattern in patterns
            .iter()
            .filter(|p| p.extraction == ExtractionMode::Fallback)
        {
            self.services
                .events
                .emit_extraction_degraded(&ExtractionDegradedEvent {
                    unit_id: pattern.id.clone(),
                    confidence: pattern.confidence,
                });
        }
        patterns
    }

    fn discover<P>(&self, patterns: &[P]) -> Vec<ConsolidationOpportunity>
    where
        P: std::borrow::Borrow<SemanticPattern> + Sync,
    {
        let opportunities = self.services.similarity.discover_opportunities(patterns);
        self.services.counters.analysis(opportunities.len());
        opportunities
    }
}
