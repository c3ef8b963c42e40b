//! File persistence and serialization configuration

/// Configuration for Price History Persistence
pub struct PriceCacheConfig {
    /// Directory path for storing price history data
    pub directory: &'static str,
    /// Base filename for the bundled demo cache (without extension)
    pub filename_base: &'static str,
    /// Current version of the cache serialization format
    pub version: f64,
    /// Sqlite database filename (native cache)
    pub db_filename: &'static str,
}

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state
    pub state_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub prices: PriceCacheConfig,
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    prices: PriceCacheConfig {
        directory: "price_data",
        filename_base: "btc_monthly",
        version: 1.0,
        db_filename: "prices.sqlite",
    },
    app: AppPersistenceConfig {
        state_path: ".states.json",
    },
};

/// Generate the demo cache filename.
/// Example: "demo_btc_monthly_v1.bin"
pub fn demo_cache_filename() -> String {
    format!(
        "demo_{}_v{}.bin",
        PERSISTENCE.prices.filename_base, PERSISTENCE.prices.version as u32
    )
}

// --- MACROS FOR COMPILE-TIME INCLUDES ---
// These allow include_bytes! to read "variables" by expanding them as literals.

#[macro_export]
macro_rules! price_data_dir {
    () => {
        "price_data"
    };
}

#[macro_export]
macro_rules! demo_spot_file {
    () => {
        "demo_spot.json"
    };
}

#[macro_export]
macro_rules! demo_cache_file {
    // You must update this string manually if the cache version changes
    () => {
        "demo_btc_monthly_v1.bin"
    };
}
