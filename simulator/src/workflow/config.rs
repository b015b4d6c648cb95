use crate::presets::{default_stations, find_location, DEFAULT_TARGET};
use anyhow::{anyhow, Context};
use satsimcore::prelude::GroundTarget;
use satsimcore::telemetry::{AlarmThresholds, TelemetryMode, DEFAULT_SEED};
use satsimcore::visibility::GroundStation;
use satsimcore::PassWindow;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Preset name; ignored when both coordinates are given.
    pub target: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub mode: TelemetryMode,
    pub seed: u64,
    pub pass_window: PassWindow,
    pub track_window: PassWindow,
    pub stations: Vec<GroundStation>,
    pub thresholds: AlarmThresholds,
    pub bind_address: SocketAddr,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            target: None,
            latitude: None,
            longitude: None,
            mode: TelemetryMode::Event,
            seed: DEFAULT_SEED,
            pass_window: PassWindow::pass(),
            track_window: PassWindow::background_track(),
            stations: default_stations(),
            thresholds: AlarmThresholds::default(),
            bind_address: SocketAddr::from(([127, 0, 0, 1], 9000)),
        }
    }
}

/// Command-line values that take precedence over the YAML file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub target: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub mode: Option<TelemetryMode>,
    pub seed: Option<u64>,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(overrides: &Overrides) -> Self {
        let mut config = Self::default();
        config.apply(overrides);
        config
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(target) = &overrides.target {
            self.target = Some(target.clone());
            self.latitude = None;
            self.longitude = None;
        }
        if overrides.latitude.is_some() || overrides.longitude.is_some() {
            self.latitude = overrides.latitude.or(self.latitude);
            self.longitude = overrides.longitude.or(self.longitude);
        }
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(seed) = overrides.seed {
            self.seed = seed;
        }
    }

    /// Display name and validated coordinates of the tasking target.
    pub fn resolve_target(&self) -> anyhow::Result<(String, GroundTarget)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => {
                let target = GroundTarget::new(lat, lon).context("custom target")?;
                let name = self
                    .target
                    .clone()
                    .unwrap_or_else(|| format!("Custom ({lat:.4}, {lon:.4})"));
                Ok((name, target))
            }
            (Some(_), None) | (None, Some(_)) => Err(anyhow!(
                "custom target needs both latitude and longitude"
            )),
            (None, None) => {
                let name = self.target.as_deref().unwrap_or(DEFAULT_TARGET);
                let preset =
                    find_location(name).ok_or_else(|| anyhow!("unknown target preset `{name}`"))?;
                let target = preset
                    .target()
                    .with_context(|| format!("preset {}", preset.name))?;
                Ok((preset.name.to_string(), target))
            }
        }
    }
}
