use std::sync::LazyLock;

pub const ICON_BITCOIN: &str = "₿";
pub const ICON_CHART: &str = "📈";
pub const ICON_LOCKED: &str = "🔒";
pub const ICON_UNLOCKED: &str = "🔓";
pub const ICON_CLOCK: &str = "⏱";
pub const ICON_COG: &str = "⚙";
pub const ICON_PULSE: &str = "📡";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_CALENDAR: &str = "🗓";

// Scheme icons
pub const ICON_SCHEME_ACCELERATOR: &str = "⚡";
pub const ICON_SCHEME_BUILDER: &str = "🔨";
pub const ICON_SCHEME_SLOW_BURN: &str = "🔥";

pub struct UiText {
    // Scheme selector
    pub icon_scheme_accelerator: String,
    pub icon_scheme_builder: String,
    pub icon_scheme_slow_burn: String,
    pub lp_scheme_heading: String,
    pub lp_settings_heading: String,
    pub lp_schedule_heading: String,
    pub lp_growth_label: String,
    pub lp_horizon_label: String,
    pub lp_mode_label: String,
    pub lp_start_year_label: String,
    pub lp_add_event: String,
    pub lp_remove_event: String,
    pub lp_reset_schedule: String,
    pub lp_schedule_invalid: String,

    // Cards
    pub card_total_grant: String,
    pub card_vested_today: String,
    pub card_value_today: String,
    pub card_value_horizon: String,
    pub card_growth_multiple: String,
    pub card_next_unlock: String,
    pub card_fully_vested: String,

    // Plot
    pub plot_x_axis: String,
    pub plot_value_series: String,
    pub plot_vested_series: String,
    pub plot_price_series: String,

    // Table
    pub tbl_month: String,
    pub tbl_date: String,
    pub tbl_granted: String,
    pub tbl_vested: String,
    pub tbl_unvested: String,
    pub tbl_price: String,
    pub tbl_value: String,
    pub tbl_show_monthly: String,

    // Center panel
    pub cp_system_starting: String,
    pub cp_projecting: String,
    pub cp_queued: String,

    // Status panel
    pub sp_spot: String,
    pub sp_stream_status: String,
    pub sp_demo_mode: String,

    // Errors
    pub error_projection_failed: String,
    pub error_no_history: String,
    pub error_no_history_body: String,

    // Loading screen
    pub ls_title: String,
    pub ls_main: String,

    // General
    pub label_working: String,
    pub label_warning: String,
}

// THE SINGLETON
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    icon_scheme_accelerator: ICON_SCHEME_ACCELERATOR.to_string(),
    icon_scheme_builder: ICON_SCHEME_BUILDER.to_string(),
    icon_scheme_slow_burn: ICON_SCHEME_SLOW_BURN.to_string(),

    lp_scheme_heading: "Vesting Scheme".to_string(),
    lp_settings_heading: "Projection".to_string(),
    lp_schedule_heading: "Unlock Schedule".to_string(),
    lp_growth_label: "Annual Growth".to_string(),
    lp_horizon_label: "Horizon".to_string(),
    lp_mode_label: "Price Source".to_string(),
    lp_start_year_label: "Start Year".to_string(),
    lp_add_event: "+ Add unlock".to_string(),
    lp_remove_event: "✕".to_string(),
    lp_reset_schedule: "Reset to default".to_string(),
    lp_schedule_invalid: "Percentages must not decrease over time".to_string(),

    card_total_grant: format!("{} Total Grant", ICON_BITCOIN),
    card_vested_today: format!("{} Vested Today", ICON_UNLOCKED),
    card_value_today: "Value Today".to_string(),
    card_value_horizon: "Value at Horizon".to_string(),
    card_growth_multiple: format!("{} Growth", ICON_CHART),
    card_next_unlock: format!("{} Next Unlock", ICON_CLOCK),
    card_fully_vested: "Fully vested".to_string(),

    plot_x_axis: "Months from start".to_string(),
    plot_value_series: "Vested value (USD)".to_string(),
    plot_vested_series: "Vested BTC".to_string(),
    plot_price_series: "BTC price".to_string(),

    tbl_month: "Month".to_string(),
    tbl_date: format!("{} Date", ICON_CALENDAR),
    tbl_granted: "Granted".to_string(),
    tbl_vested: "Vested".to_string(),
    tbl_unvested: "Unvested".to_string(),
    tbl_price: "BTC Price".to_string(),
    tbl_value: "USD Value".to_string(),
    tbl_show_monthly: "Monthly rows".to_string(),

    cp_system_starting: "System Starting...".to_string(),
    cp_projecting: "Projecting".to_string(),
    cp_queued: "Queued".to_string(),

    sp_spot: ICON_PULSE.to_string(),
    sp_stream_status: "Stream".to_string(),
    sp_demo_mode: "WEB DEMO (OFFLINE)".to_string(),

    error_projection_failed: "Projection Failed".to_string(),
    error_no_history: "No price history".to_string(),
    error_no_history_body:
        "Historical mode needs exchange data for the selected start year.\nPick a later year or switch back to Projected mode."
            .to_string(),

    ls_title: "VESTSCOPE INITIALIZATION".to_string(),
    ls_main: "Syncing monthly BTC prices from the exchange API. First runs take a few seconds; cached runs are instant.".to_string(),

    label_working: ICON_COG.to_string(),
    label_warning: ICON_WARNING.to_string(),
});
