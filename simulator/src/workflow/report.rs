use crate::workflow::runner::WorkflowResult;
use satsimcore::math::StatsHelper;
use satsimcore::telemetry::TelemetryChannel;
use std::fmt::{self, Write};

/// Plain-text operations report for terminal output.
pub fn render_report(result: &WorkflowResult) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let target = result.target.position();
    writeln!(
        out,
        "Target: {} ({:.4}, {:.4})",
        result.target_name, target.lat, target.lon
    )?;

    if let (Some(first), Some(last)) = (result.states.first(), result.states.last()) {
        writeln!(
            out,
            "Pass: {} states, T{:+.0}s .. T{:+.0}s",
            result.states.len(),
            first.time,
            last.time
        )?;
    }
    for state in result.states.iter().filter(|state| state.time == 0.0) {
        writeln!(
            out,
            "  T={:+.0}s | {} | roll={:+.1} deg, pitch={:+.1} deg",
            state.time, state.status, state.roll, state.pitch
        )?;
    }

    if result.report.has_contact() {
        writeln!(
            out,
            "Stations in contact: {}",
            result.report.visible_stations.join(", ")
        )?;
    } else {
        writeln!(out, "No station in contact during this pass.")?;
        match (&result.report.next_downlink, result.report.wait_minutes()) {
            (Some(forecast), Some(minutes)) => {
                writeln!(
                    out,
                    "Next downlink: about {} min later ({})",
                    minutes, forecast.station
                )?;
            }
            _ => {
                writeln!(out, "Next downlink: beyond the forecast horizon")?;
            }
        }
    }

    writeln!(
        out,
        "Telemetry: {} samples ({} mode, seed {})",
        result.telemetry.len(),
        result.mode,
        result.seed
    )?;
    for channel in [
        TelemetryChannel::Battery,
        TelemetryChannel::TempExternal,
        TelemetryChannel::Memory,
    ] {
        if let Some(summary) = StatsHelper::summarize(&channel.series(&result.telemetry)) {
            writeln!(
                out,
                "  {:<10} min {:>7.2}  mean {:>7.2}  max {:>7.2}",
                channel.column(),
                summary.min,
                summary.mean,
                summary.max
            )?;
        }
    }

    if result.alarms.is_empty() {
        writeln!(out, "Alarms: none")?;
    } else {
        writeln!(out, "Alarms:")?;
        for alarm in &result.alarms {
            writeln!(
                out,
                "  {:<10} {:<4} x{}",
                alarm.signal.column(),
                alarm.kind.to_string(),
                alarm.count
            )?;
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::{Overrides, WorkflowConfig};
    use crate::workflow::runner::Runner;

    #[test]
    fn report_lists_contact_stations() {
        let result = Runner::new(WorkflowConfig::default()).execute().unwrap();
        let text = render_report(&result).unwrap();
        assert!(text.contains("Stations in contact: Tsukuba"));
        assert!(text.contains("CAPTURING"));
        assert!(text.contains("Alarms: none"));
    }

    #[test]
    fn report_without_contact_mentions_forecast() {
        let cfg = WorkflowConfig::from_args(&Overrides {
            target: Some("Canberra".into()),
            ..Default::default()
        });
        let result = Runner::new(cfg).execute().unwrap();
        let text = render_report(&result).unwrap();
        assert!(text.contains("No station in contact"));
        assert!(text.contains("Next downlink"));
    }

    #[test]
    fn report_lists_raised_alarms() {
        let mut cfg = WorkflowConfig::default();
        cfg.thresholds.battery_low = 101.0;
        let result = Runner::new(cfg).execute().unwrap();
        let text = render_report(&result).unwrap();
        assert!(text.contains("Alarms:\n  Battery    LOW  x81"));
    }
}
