use anyhow::Context;
use clap::Parser;
use gui_bridge::bridge::GuiBridge;
use gui_bridge::model::VisualizationModel;
use log::info;
use satsimcore::telemetry::{write_csv, TelemetryMode};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::{Overrides, WorkflowConfig};
use workflow::report::render_report;
use workflow::runner::Runner;

mod gui_bridge;
mod presets;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Satellite pass and bus telemetry simulation driver")]
struct Args {
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Tasking target by preset name (see --list-targets)
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    target: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    lon: Option<f64>,
    /// Telemetry mode: event or long-term
    #[arg(long)]
    mode: Option<TelemetryMode>,
    #[arg(long)]
    seed: Option<u64>,
    /// Write the generated telemetry to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Print the preset targets and exit
    #[arg(long, default_value_t = false)]
    list_targets: bool,
    /// Run once and print the operations report
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Keep the HTTP bridge alive until Ctrl+C
    #[arg(long, default_value_t = false)]
    serve: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            target: self.target.clone(),
            latitude: self.lat,
            longitude: self.lon,
            mode: self.mode,
            seed: self.seed,
        }
    }
}

fn list_targets() {
    for preset in presets::LOCATIONS {
        println!(
            "{:<28} {:<22} {:>9.4} {:>10.4}",
            preset.name, preset.region, preset.lat, preset.lon
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_targets {
        list_targets();
        return Ok(());
    }

    let mut workflow_config = if let Some(path) = &args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::default()
    };
    workflow_config.apply(&args.overrides());

    let runner = Arc::new(Runner::new(workflow_config.clone()));
    let gui_bridge = GuiBridge::new(runner.clone());

    let result = runner.execute()?;
    gui_bridge.publish(&VisualizationModel::from_result(
        &result,
        &workflow_config.stations,
    ));

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("creating telemetry CSV {}", path.display()))?;
        write_csv(&result.telemetry, BufWriter::new(file))
            .with_context(|| format!("writing telemetry CSV {}", path.display()))?;
        info!(
            "wrote {} telemetry rows to {}",
            result.telemetry.len(),
            path.display()
        );
    }

    if args.offline || !args.serve {
        print!("{}", render_report(&result).context("rendering report")?);
        gui_bridge.publish_status("Offline workflow results ready.");
    }

    if args.serve {
        gui_bridge.spawn(workflow_config.bind_address);
        gui_bridge.publish_status(&format!(
            "HTTP bridge on http://{} (Ctrl+C to stop)...",
            workflow_config.bind_address
        ));
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
