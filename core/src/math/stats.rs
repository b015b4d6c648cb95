use serde::{Deserialize, Serialize};

/// Min/mean/max of a single telemetry channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelSummary {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

pub struct StatsHelper;

impl StatsHelper {
    pub fn summarize(samples: &[f64]) -> Option<ChannelSummary> {
        if samples.is_empty() {
            return None;
        }
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        Some(ChannelSummary { min, mean, max })
    }
}
