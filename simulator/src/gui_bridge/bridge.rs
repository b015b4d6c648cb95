use crate::gui_bridge::model::VisualizationModel;
use crate::workflow::config::{Overrides, WorkflowConfig};
use crate::workflow::runner::Runner;
use log::{error, info, warn};
use satsimcore::telemetry::{to_csv_string, TelemetryMode, DEFAULT_SEED};
use serde::Deserialize;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, PoisonError, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, reply::Response, Filter, Reply};

/// Body of `POST /simulate`.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub mode: TelemetryMode,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl SimulationRequest {
    fn to_config(&self, base: &WorkflowConfig) -> WorkflowConfig {
        let mut config = base.clone();
        config.target = None;
        config.apply(&Overrides {
            target: None,
            latitude: Some(self.latitude),
            longitude: Some(self.longitude),
            mode: Some(self.mode),
            seed: Some(self.seed),
        });
        config
    }
}

type SharedModel = Arc<RwLock<VisualizationModel>>;

fn error_reply(status: StatusCode, message: String) -> Response {
    warp::reply::with_status(
        warp::reply::json(&json!({"status": "error", "message": message})),
        status,
    )
    .into_response()
}

/// Hosts the latest simulation results as JSON/CSV and reruns on request.
pub struct GuiBridge {
    state: SharedModel,
    runner: Arc<Runner>,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        Self {
            state: Arc::new(RwLock::new(VisualizationModel::default())),
            runner,
        }
    }

    pub fn routes(
        &self,
    ) -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
        let state = self.state.clone();
        let state_filter = warp::any().map(move || state.clone());
        let runner = self.runner.clone();
        let runner_filter = warp::any().map(move || runner.clone());

        let pass_route = warp::path!("pass")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: SharedModel| {
                let guard = state.read().unwrap_or_else(PoisonError::into_inner);
                warp::reply::json(&guard.pass)
            });

        let telemetry_route = warp::path!("telemetry")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: SharedModel| {
                let guard = state.read().unwrap_or_else(PoisonError::into_inner);
                warp::reply::json(&guard.telemetry)
            });

        let csv_route = warp::path!("telemetry.csv")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: SharedModel| {
                let guard = state.read().unwrap_or_else(PoisonError::into_inner);
                match to_csv_string(&guard.telemetry.samples) {
                    Ok(body) => {
                        warp::reply::with_header(body, "content-type", "text/csv").into_response()
                    }
                    Err(err) => error_reply(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
                }
            });

        let metrics_route = warp::path!("metrics")
            .and(warp::get())
            .and(runner_filter.clone())
            .map(|runner: Arc<Runner>| warp::reply::json(&runner.metrics().snapshot()));

        let simulate_route = warp::path!("simulate")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(runner_filter)
            .and_then(
                |request: SimulationRequest, state: SharedModel, runner: Arc<Runner>| async move {
                    let config = request.to_config(runner.config());
                    let reply = match runner.execute_config(&config) {
                        Ok(result) => {
                            let model = VisualizationModel::from_result(&result, &config.stations);
                            let body = json!({
                                "status": "ok",
                                "target": result.target_name,
                                "visible_stations": result.report.visible_stations,
                                "alarms": result.alarms.len(),
                            });
                            *state.write().unwrap_or_else(PoisonError::into_inner) = model;
                            info!("[bridge] simulation rerun for {}", result.target_name);
                            warp::reply::with_status(warp::reply::json(&body), StatusCode::OK)
                                .into_response()
                        }
                        Err(err) => {
                            warn!("[bridge] simulate error: {err:#}");
                            error_reply(StatusCode::BAD_REQUEST, format!("{err:#}"))
                        }
                    };
                    Ok::<_, warp::Rejection>(reply)
                },
            );

        pass_route
            .or(telemetry_route)
            .or(csv_route)
            .or(metrics_route)
            .or(simulate_route)
    }

    /// Serves the routes on a background thread with its own runtime.
    pub fn spawn(&self, address: SocketAddr) {
        let routes = self.routes();
        thread::spawn(move || {
            let runtime = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    error!("[bridge] failed to build runtime: {err}");
                    return;
                }
            };
            runtime.block_on(async move {
                warp::serve(routes).run(address).await;
            });
        });
    }

    pub fn publish(&self, model: &VisualizationModel) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *guard = model.clone();
        info!(
            "[bridge] published {} pass frames, {} telemetry samples",
            guard.pass.frames.len(),
            guard.telemetry.samples.len()
        );
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> VisualizationModel {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::WorkflowConfig;
    use crate::workflow::runner::Runner;
    use std::sync::Arc;

    fn published_bridge() -> GuiBridge {
        let cfg = WorkflowConfig::default();
        let runner = Arc::new(Runner::new(cfg.clone()));
        let gui = GuiBridge::new(runner.clone());
        let result = runner.execute().unwrap();
        gui.publish(&VisualizationModel::from_result(&result, &cfg.stations));
        gui
    }

    #[test]
    fn gui_bridge_updates_state() {
        let gui = published_bridge();
        let snapshot = gui.snapshot();
        assert_eq!(snapshot.pass.frames.len(), 41);
        assert_eq!(snapshot.telemetry.samples.len(), 81);
        assert_eq!(snapshot.pass.stations.len(), 6);
    }

    #[tokio::test]
    async fn pass_route_serves_published_frames() {
        let gui = published_bridge();
        let response = warp::test::request()
            .method("GET")
            .path("/pass")
            .reply(&gui.routes())
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["frames"].as_array().unwrap().len(), 41);
        assert_eq!(body["frames"][0]["status"], "PREV TASK");
        assert_eq!(body["frames"][20]["status"], "CAPTURING");
        assert_eq!(body["report"]["visible_stations"][0], "Tsukuba");
    }

    #[tokio::test]
    async fn csv_route_serves_header_and_rows() {
        let gui = published_bridge();
        let response = warp::test::request()
            .method("GET")
            .path("/telemetry.csv")
            .reply(&gui.routes())
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "text/csv");
        let body = String::from_utf8_lossy(response.body()).to_string();
        assert!(body.starts_with("Time,Gen_Power,Cons_Power,Battery"));
        assert_eq!(body.lines().count(), 82);
    }

    #[tokio::test]
    async fn simulate_route_replaces_model() {
        let gui = published_bridge();
        let response = warp::test::request()
            .method("POST")
            .path("/simulate")
            .json(&json!({"latitude": -35.2809, "longitude": 149.13, "mode": "long_term"}))
            .reply(&gui.routes())
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let snapshot = gui.snapshot();
        assert_eq!(snapshot.telemetry.samples.len(), 145);
        assert!(snapshot.pass.target_name.starts_with("Custom"));
    }

    #[tokio::test]
    async fn simulate_route_rejects_invalid_latitude() {
        let gui = published_bridge();
        let response = warp::test::request()
            .method("POST")
            .path("/simulate")
            .json(&json!({"latitude": 123.0, "longitude": 0.0}))
            .reply(&gui.routes())
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(gui.snapshot().telemetry.samples.len(), 81);

        let metrics = warp::test::request()
            .method("GET")
            .path("/metrics")
            .reply(&gui.routes())
            .await;
        let body: serde_json::Value = serde_json::from_slice(metrics.body()).unwrap();
        assert_eq!(body["errors"], 1);
    }
}
