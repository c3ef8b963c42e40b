mod root;
mod state;

pub(crate) use state::{AppState, BootstrapState, RunningState};

pub use root::App;
