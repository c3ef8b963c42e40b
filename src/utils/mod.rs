mod maths_utils;
mod perf;
mod time_utils;

pub use time_utils::{
    AppInstant, TimeUtils, current_year, epoch_ms_to_date_string, format_month_count, month_label,
    now_timestamp_ms, year_start_ms,
};

pub use maths_utils::{compound_factor, get_max, percent_diff};
