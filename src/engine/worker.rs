use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};

// Only import thread on non-WASM targets
#[cfg(not(target_arch = "wasm32"))]
use std::thread;

use anyhow::Result;

use super::messages::{JobRequest, JobResult, SchemeOutcome};

use crate::analysis::projector::{MonthlyPrices, project_timeline};
use crate::analysis::summary::summarize;
use crate::config::constants::projection;
use crate::config::{DF, PriceMode, UsdPrice};
use crate::domain::VestingSchedule;
use crate::utils::AppInstant;

/// NATIVE ONLY: Spawns a background thread to process jobs
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_worker_thread(rx: Receiver<JobRequest>, tx: Sender<JobResult>) {
    thread::spawn(move || {
        while let Ok(req) = rx.recv() {
            process_request_sync(req, tx.clone());
        }
    });
}

/// WASM ONLY: No-op.
/// The Engine holds the receiver and processes jobs manually in the update loop.
#[cfg(target_arch = "wasm32")]
pub fn spawn_worker_thread(_rx: Receiver<JobRequest>, _tx: Sender<JobResult>) {
    // Do nothing.
}

pub fn process_request_sync(req: JobRequest, tx: Sender<JobResult>) {
    let label = format!("{} [{}]", req.scheme.id, req.settings.mode);

    crate::trace_time!(&format!("Projection JOB {}", label), 2000, {
        let start = AppInstant::now();
        let scheme_id = req.scheme.id;

        let outcome = run_projection(&req);
        let elapsed = start.elapsed().as_millis();

        #[cfg(debug_assertions)]
        if DF.log_worker {
            match &outcome {
                Ok(_) => log::info!("WORKER: {} projected in {}ms", label, elapsed),
                Err(e) => log::warn!("WORKER: {} failed: {:#}", label, e),
            }
        }

        let response = JobResult {
            scheme_id,
            duration_ms: elapsed,
            result: outcome.map(Arc::new).map_err(|e| format!("{e:#}")),
        };

        let _ = tx.send(response);
    });
}

fn run_projection(req: &JobRequest) -> Result<SchemeOutcome> {
    let schedule = VestingSchedule::new(req.scheme.vesting.clone())?;

    let prices = match req.settings.mode {
        PriceMode::Projected => MonthlyPrices::Projected {
            start: resolve_spot_price(req),
            annual_growth: req.settings.annual_growth,
        },
        PriceMode::Historical => {
            let start_idx = req.history.index_of_year(req.settings.historical_start_year)?;
            MonthlyPrices::Historical {
                history: &req.history,
                start_idx,
            }
        }
    };

    let timeline = project_timeline(
        &req.scheme,
        &schedule,
        &prices,
        req.settings.horizon_months,
    );
    let summary = summarize(&timeline, &req.scheme, &schedule);
    let unlock_markers = schedule
        .breakpoints()
        .into_iter()
        .map(|(m, pct)| (m, pct.value()))
        .collect();

    Ok(SchemeOutcome {
        timeline,
        summary,
        unlock_markers,
    })
}

/// Seed price for projected mode.
/// Priority: manual override -> live stream snapshot -> latest cached close
/// -> configured fallback.
fn resolve_spot_price(req: &JobRequest) -> UsdPrice {
    if let Some(manual) = req.settings.manual_spot_price {
        if manual.is_positive() {
            return manual;
        }
    }

    if let Some(live) = req.spot_price {
        if live > f64::EPSILON {
            return UsdPrice::new(live);
        }
    }

    req.history
        .latest_close()
        .filter(|p| p.is_positive())
        .unwrap_or(UsdPrice::new(projection::FALLBACK_SPOT_PRICE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProjectionSettings, SchemeId};
    use crate::domain::VestingScheme;
    use crate::models::{PriceHistory, PricePoint};
    use crate::utils::TimeUtils;
    use std::sync::mpsc::channel;

    fn request(settings: ProjectionSettings) -> JobRequest {
        JobRequest {
            scheme: VestingScheme::from_preset(SchemeId::Accelerator),
            settings,
            spot_price: Some(100_000.0),
            history: Arc::new(PriceHistory::default()),
        }
    }

    #[test]
    fn projected_job_produces_outcome() {
        let (tx, rx) = channel();
        process_request_sync(request(ProjectionSettings::default()), tx);

        let result = rx.recv().unwrap();
        assert_eq!(result.scheme_id, SchemeId::Accelerator);
        let outcome = result.result.unwrap();
        assert_eq!(
            outcome.timeline.len() as u32,
            ProjectionSettings::default().horizon_months + 1
        );
        assert_eq!(outcome.timeline.point(0).bitcoin_price.value(), 100_000.0);
    }

    #[test]
    fn historical_job_without_data_reports_error() {
        let mut settings = ProjectionSettings::default();
        settings.mode = PriceMode::Historical;
        settings.historical_start_year = 2020;

        let (tx, rx) = channel();
        process_request_sync(request(settings), tx);

        let result = rx.recv().unwrap();
        assert!(result.result.is_err());
    }

    #[test]
    fn spot_resolution_prefers_manual_then_live_then_cache() {
        let mut req = request(ProjectionSettings::default());

        // Live only
        assert_eq!(resolve_spot_price(&req).value(), 100_000.0);

        // Manual beats live
        req.settings.manual_spot_price = Some(UsdPrice::new(50_000.0));
        assert_eq!(resolve_spot_price(&req).value(), 50_000.0);

        // Cache beats fallback when nothing else is available
        req.settings.manual_spot_price = None;
        req.spot_price = None;
        req.history = Arc::new(PriceHistory::from_points(
            "BTCUSDT",
            TimeUtils::MS_IN_1_MO,
            vec![PricePoint {
                timestamp_ms: 0,
                close: 77_000.0,
            }],
        ));
        assert_eq!(resolve_spot_price(&req).value(), 77_000.0);

        // Nothing at all: configured fallback
        req.history = Arc::new(PriceHistory::default());
        assert_eq!(
            resolve_spot_price(&req).value(),
            projection::FALLBACK_SPOT_PRICE
        );
    }
}
