//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit verbose logging for live price stream connections and ticks.
    pub log_price_stream_updates: bool,

    /// Activate trace_time macro (for scope-level timing)
    pub log_performance: bool,

    pub log_engine_core: bool,

    /// Log every job dispatch and result
    pub log_worker: bool,

    /// Log cache reads/writes for price history
    pub log_price_cache: bool,

    /// Log scheme/settings edits coming out of the UI
    pub log_settings_edits: bool,

    #[cfg(all(debug_assertions, target_arch = "wasm32"))]
    pub log_wasm_demo: bool,
}

pub const DF: LogFlags = LogFlags {
    log_price_stream_updates: false,
    log_performance: false,

    log_engine_core: false,
    log_worker: true,

    log_price_cache: false,
    log_settings_edits: false,

    #[cfg(all(debug_assertions, target_arch = "wasm32"))]
    log_wasm_demo: false,
};
