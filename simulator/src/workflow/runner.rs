use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use satsimcore::diagnostics::{LogManager, MetricsRecorder};
use satsimcore::orbit::split_at_dateline;
use satsimcore::prelude::{GeoPoint, GroundTarget};
use satsimcore::telemetry::{Alarm, TelemetryGenerator, TelemetryMode, TelemetrySample};
use satsimcore::visibility::PassReport;
use satsimcore::{PassSimulation, SatelliteState};
use std::sync::Arc;

pub struct WorkflowResult {
    pub target_name: String,
    pub target: GroundTarget,
    pub states: Vec<SatelliteState>,
    pub track_segments: Vec<Vec<GeoPoint>>,
    pub report: PassReport,
    pub mode: TelemetryMode,
    pub seed: u64,
    pub telemetry: Vec<TelemetrySample>,
    pub alarms: Vec<Alarm>,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
    metrics: Arc<MetricsRecorder>,
    logger: LogManager,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(MetricsRecorder::new()),
            logger: LogManager::new("workflow"),
        }
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        self.execute_config(&self.config)
    }

    /// Runs one pass simulation and one telemetry run for `config`.
    pub fn execute_config(&self, config: &WorkflowConfig) -> anyhow::Result<WorkflowResult> {
        let result = Self::run(config);
        match &result {
            Ok(done) => {
                self.metrics
                    .record_run(done.telemetry.len(), done.alarms.len());
                self.logger.record(&format!(
                    "{}: {} states, {} telemetry samples, {} alarms",
                    done.target_name,
                    done.states.len(),
                    done.telemetry.len(),
                    done.alarms.len()
                ));
            }
            Err(err) => {
                self.metrics.record_error();
                self.logger.warn(&format!("workflow failed: {err:#}"));
            }
        }
        result
    }

    fn run(config: &WorkflowConfig) -> anyhow::Result<WorkflowResult> {
        let (target_name, target) = config.resolve_target().context("resolving target")?;

        let simulation = PassSimulation::new(target);
        let (states, report) = simulation
            .run(&config.pass_window, &config.stations)
            .context("simulating pass")?;
        let track = simulation
            .ground_track(&config.track_window)
            .context("sampling background track")?;
        let track_segments = split_at_dateline(&track);

        let telemetry = TelemetryGenerator::new(config.mode)
            .with_seed(config.seed)
            .run()
            .context("generating telemetry")?;
        let alarms = config.thresholds.scan(&telemetry);

        Ok(WorkflowResult {
            target_name,
            target,
            states,
            track_segments,
            report,
            mode: config.mode,
            seed: config.seed,
            telemetry,
            alarms,
        })
    }
}
