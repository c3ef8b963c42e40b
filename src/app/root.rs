use {
    eframe::{
        Frame, Storage,
        egui::{Context, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{
        mem,
        sync::{mpsc, mpsc::Receiver},
        time::Duration,
    },
};

use crate::{
    Cli,
    app::{AppState, BootstrapState, RunningState},
    config::SchemeId,
    data::load_price_history,
    engine::ProjectionEngine,
    models::PriceHistory,
    ui::{PlotView, UI_CONFIG, render_bootstrap},
};

#[cfg(not(target_arch = "wasm32"))]
use {std::thread, tokio::runtime::Runtime};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) selected: SchemeId,
    pub(crate) show_monthly_rows: bool,
    pub(crate) plot_view: PlotView,
    #[serde(skip)]
    pub(crate) engine: Option<ProjectionEngine>,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    pub(crate) data_rx: Option<Receiver<(PriceHistory, &'static str)>>,
    #[serde(skip)]
    pub(crate) data_signature: Option<&'static str>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            selected: SchemeId::default(),
            show_monthly_rows: false,
            plot_view: PlotView::default(),
            engine: None,
            state: AppState::default(),
            data_rx: None,
            data_signature: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.state = AppState::Bootstrapping(BootstrapState::default());

        let (data_tx, data_rx) = mpsc::channel();
        app.data_rx = Some(data_rx);

        #[cfg(not(target_arch = "wasm32"))]
        {
            let args_clone = args.clone();
            thread::spawn(move || {
                let rt = Runtime::new().expect("Failed to create runtime");
                rt.block_on(async move {
                    let (history, sig) = load_price_history(&args_clone).await;
                    let _ = data_tx.send((history, sig));
                });
            });
        }

        #[cfg(target_arch = "wasm32")]
        {
            let args_clone = args.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let (history, sig) = load_price_history(&args_clone).await;
                let _ = data_tx.send((history, sig));
            });
        }

        app
    }

    pub(crate) fn finalize_bootstrap_if_ready(&mut self) -> Option<AppState> {
        if let Some(rx) = &self.data_rx {
            if let Ok((history, sig)) = rx.try_recv() {
                self.data_signature = Some(sig);
                self.build_engine(history);
                return Some(AppState::Running(RunningState));
            }
        }
        None
    }

    fn build_engine(&mut self, history: PriceHistory) {
        let mut engine = ProjectionEngine::new(history);
        engine.trigger_global_recalc(Some(self.selected));
        self.engine = Some(engine);
    }

    pub(crate) fn tick_bootstrap_state(
        &mut self,
        ctx: &Context,
        state: &mut BootstrapState,
    ) -> AppState {
        // Creep toward 90% while the fetch is in flight
        state.progress = (state.progress + 0.002).min(0.9);
        ctx.request_repaint();

        if let Some(next_state) = self.finalize_bootstrap_if_ready() {
            return next_state;
        }
        render_bootstrap(ctx, state);
        AppState::Bootstrapping(state.clone())
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        if let Some(e) = &mut self.engine {
            e.update();
        }

        self.render_top_panel(ctx);
        self.render_left_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        // The live ticker and worker results arrive outside egui's event
        // stream, so keep a slow repaint heartbeat going.
        ctx.request_repaint_after(Duration::from_millis(500));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Bootstrapping(mut s) => self.tick_bootstrap_state(ctx, &mut s),
            AppState::Running(s) => {
                self.tick_running_state(ctx);
                AppState::Running(s)
            }
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
