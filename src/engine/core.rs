use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use strum::IntoEnumIterator;

use crate::config::{DF, PriceMode, ProjectionSettings, SYMBOL, SchemeId};
use crate::data::PriceTicker;
use crate::domain::{CustomVestingEvent, VestingScheme};
use crate::models::PriceHistory;
use crate::utils::{AppInstant, percent_diff};

use super::messages::{JobRequest, JobResult, SchemeOutcome};
use super::state::SchemeState;
use super::worker;

pub struct ProjectionEngine {
    /// Registry of all schemes
    pub schemes: HashMap<SchemeId, SchemeState>,

    /// Shared immutable price history
    pub history: Arc<PriceHistory>,

    /// Live Data Feed
    pub price_stream: Arc<PriceTicker>,

    // Common Channels
    job_tx: Sender<JobRequest>,     // UI writes to this
    result_rx: Receiver<JobResult>, // UI reads from this

    // WASM ONLY: The Engine acts as the Worker, so it needs the "Worker Ends" of the channels
    #[cfg(target_arch = "wasm32")]
    job_rx: Receiver<JobRequest>,
    #[cfg(target_arch = "wasm32")]
    result_tx: Sender<JobResult>,

    pub queue: VecDeque<SchemeId>,

    /// The Live Configuration State
    pub settings: ProjectionSettings,
}

impl ProjectionEngine {
    /// Initialize the engine, spawn the worker, and start the price stream.
    pub fn new(history: PriceHistory) -> Self {
        // 1. Create Channels
        let (job_tx, job_rx) = channel::<JobRequest>();
        let (result_tx, result_rx) = channel::<JobResult>();

        // NATIVE: Pass the receiver to the thread.
        #[cfg(not(target_arch = "wasm32"))]
        worker::spawn_worker_thread(job_rx, result_tx);

        // 2. Initialize Schemes
        let mut schemes = HashMap::new();
        for id in SchemeId::iter() {
            schemes.insert(id, SchemeState::new(VestingScheme::from_preset(id)));
        }

        // 3. Start the Live Ticker
        let price_stream = Arc::new(PriceTicker::new());
        price_stream.start(SYMBOL);

        Self {
            schemes,
            history: Arc::new(history),
            price_stream,
            job_tx,
            result_rx,
            // WASM: Store the handles so they don't get dropped
            #[cfg(target_arch = "wasm32")]
            job_rx,
            #[cfg(target_arch = "wasm32")]
            result_tx,
            queue: VecDeque::new(),
            settings: ProjectionSettings::default(),
        }
    }

    /// THE UPDATE LOOP. Called once per frame by the app.
    pub fn update(&mut self) {
        // WASM ONLY: Process jobs manually in the main thread
        #[cfg(target_arch = "wasm32")]
        {
            // Non-blocking check for work
            if let Ok(req) = self.job_rx.try_recv() {
                // Run sync calculation
                worker::process_request_sync(req, self.result_tx.clone());
            }
        }

        // Results
        while let Ok(result) = self.result_rx.try_recv() {
            self.handle_job_result(result);
        }

        // Triggers
        self.check_price_drift_trigger();

        // Queue
        self.process_queue();
    }

    // --- ACCESSORS FOR UI ---

    pub fn outcome(&self, id: SchemeId) -> Option<Arc<SchemeOutcome>> {
        self.schemes.get(&id).and_then(|s| s.outcome.clone())
    }

    pub fn scheme(&self, id: SchemeId) -> Option<&VestingScheme> {
        self.schemes.get(&id).map(|s| &s.scheme)
    }

    pub fn get_spot_price(&self) -> Option<f64> {
        self.price_stream.get_price()
    }

    pub fn scheme_status(&self, id: SchemeId) -> (bool, Option<String>) {
        if let Some(state) = self.schemes.get(&id) {
            (state.is_calculating, state.last_error.clone())
        } else {
            (false, None)
        }
    }

    pub fn worker_status_msg(&self) -> Option<String> {
        let calculating = self
            .schemes
            .iter()
            .find(|(_, state)| state.is_calculating)
            .map(|(id, _)| *id);

        if let Some(id) = calculating {
            Some(format!("Projecting {}", id))
        } else if !self.queue.is_empty() {
            Some(format!("Queued: {}", self.queue.len()))
        } else {
            None
        }
    }

    // --- MUTATIONS FROM UI ---

    /// Replace the live settings and reproject everything.
    pub fn update_settings(&mut self, mut new_settings: ProjectionSettings) {
        new_settings.clamp_horizon();
        if new_settings == self.settings {
            return;
        }

        #[cfg(debug_assertions)]
        if DF.log_settings_edits {
            log::info!("ENGINE: settings changed -> global reproject");
        }

        self.settings = new_settings;
        self.trigger_global_recalc(None);
    }

    /// Replace one scheme's custom unlock schedule and reproject it.
    pub fn set_custom_events(&mut self, id: SchemeId, events: Vec<CustomVestingEvent>) {
        if let Some(state) = self.schemes.get_mut(&id) {
            if state.scheme.vesting.custom_events == events {
                return;
            }
            state.scheme.vesting.custom_events = events;
            self.force_recalc(id);
        }
    }

    /// Smart Global Invalidation
    pub fn trigger_global_recalc(&mut self, priority: Option<SchemeId>) {
        self.queue.clear();

        let mut ids: Vec<SchemeId> = SchemeId::iter().collect();

        if let Some(vip) = priority {
            if let Some(pos) = ids.iter().position(|&id| id == vip) {
                ids.remove(pos);
            }
            self.queue.push_back(vip);
        }

        for id in ids {
            self.queue.push_back(id);
        }
    }

    /// Force a single reprojection
    pub fn force_recalc(&mut self, id: SchemeId) {
        let is_calculating = self
            .schemes
            .get(&id)
            .map(|s| s.is_calculating)
            .unwrap_or(false);

        let in_queue = self.queue.contains(&id);

        if !is_calculating && !in_queue {
            self.queue.push_front(id);
        }
    }

    // --- INTERNAL LOGIC ---

    fn handle_job_result(&mut self, result: JobResult) {
        if let Some(state) = self.schemes.get_mut(&result.scheme_id) {
            match result.result {
                Ok(outcome) => {
                    // Success: a newer result replaces the old state wholesale,
                    // which is how stale in-flight projections get discarded.
                    state.outcome = Some(outcome);
                    state.is_calculating = false;
                    state.last_update_time = Some(AppInstant::now());
                    state.last_error = None;
                }
                Err(e) => {
                    log::error!("Worker failed for {}: {}", result.scheme_id, e);
                    state.last_error = Some(e);
                    state.is_calculating = false;

                    // Clear old outcome so the UI shows the error, not ghost data
                    state.outcome = None;
                }
            }
        }
    }

    /// Reproject when the live price has drifted past the threshold.
    /// Only meaningful in projected mode; historical replay ignores spot.
    fn check_price_drift_trigger(&mut self) {
        if self.settings.mode != PriceMode::Projected {
            return;
        }
        let Some(current_price) = self.price_stream.get_price() else {
            return;
        };
        let threshold = self.settings.price_recalc_threshold_pct;

        let ids: Vec<SchemeId> = self.schemes.keys().copied().collect();
        for id in ids {
            let in_queue = self.queue.contains(&id);
            if let Some(state) = self.schemes.get_mut(&id) {
                if state.is_calculating || in_queue {
                    continue;
                }

                // Startup case: no baseline yet, just sync and let the
                // initial global recalc do the work.
                if state.last_update_price.abs() < f64::EPSILON {
                    state.last_update_price = current_price;
                    continue;
                }

                let pct_diff = percent_diff(current_price, state.last_update_price);

                if pct_diff > threshold {
                    #[cfg(debug_assertions)]
                    if DF.log_engine_core {
                        log::info!(
                            "ENGINE AUTO: spot moved {:.3}% (threshold {:.3}%). Reprojecting {}.",
                            pct_diff * 100.0,
                            threshold * 100.0,
                            id
                        );
                    }
                    self.queue.push_back(id);
                }
            }
        }
    }

    fn process_queue(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        // Peek at front
        if let Some(id) = self.queue.front() {
            // Race check: is it calculating now?
            if let Some(state) = self.schemes.get(id) {
                if state.is_calculating {
                    // It's busy. Wait.
                    return;
                }
            }
        }

        if let Some(id) = self.queue.pop_front() {
            self.dispatch_job(id);
        }
    }

    fn dispatch_job(&mut self, id: SchemeId) {
        let spot = self.price_stream.get_price();

        if let Some(state) = self.schemes.get_mut(&id) {
            state.is_calculating = true;
            if let Some(p) = spot {
                state.last_update_price = p;
            }

            let req = JobRequest {
                scheme: state.scheme.clone(),
                settings: self.settings.clone(),
                spot_price: spot,
                history: self.history.clone(),
            };

            let _ = self.job_tx.send(req);
        }
    }
}
