// src/app/state.rs

#[derive(Clone)]
pub(crate) struct RunningState;

pub(crate) enum AppState {
    Bootstrapping(BootstrapState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Bootstrapping(BootstrapState::default())
    }
}

#[derive(Clone)]
pub(crate) struct BootstrapState {
    pub(crate) status: String,
    pub(crate) progress: f32,
}

impl Default for BootstrapState {
    fn default() -> Self {
        Self {
            status: "Syncing price history...".to_string(),
            progress: 0.05,
        }
    }
}
