//! Configuration module for the vest-scope application.

// Can all be private now because we have a public re-export.
mod debug;
mod exchange;
mod persistence;
mod projection;
mod schemes;
mod types;

// Public
pub mod constants;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use debug::DF;
pub use exchange::{EXCHANGE, ExchangeConfig};
pub use persistence::{PERSISTENCE, demo_cache_filename};
pub use projection::{PROJECTION, PriceMode, ProjectionSettings};
pub use schemes::{PRESETS, SchemeId, SchemePreset, preset};
pub use types::{BtcAmount, GrowthPct, UsdPrice, UsdValue, VestedPct};

pub use constants::SYMBOL;
