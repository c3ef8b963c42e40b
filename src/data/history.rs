//! Price history loading: local cache first, API top-up, demo bundle on WASM.
//! Runs before the GUI starts (native) or at startup (WASM).

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::config::PERSISTENCE;
use crate::config::constants::HISTORY_INTERVAL_MS;
use crate::models::PriceHistory;

#[cfg(not(target_arch = "wasm32"))]
use {
    crate::Cli,
    crate::config::SYMBOL,
    crate::data::provider::{BinanceProvider, PriceDataProvider},
    crate::data::storage::{PriceStorage, SqliteStorage},
    std::path::Path,
};

// ============================================================================
// CacheFile: the bundled/binary serialization envelope
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CacheFile {
    pub version: f64,
    pub interval_ms: i64,
    pub history: PriceHistory,
}

impl CacheFile {
    pub fn new(interval_ms: i64, history: PriceHistory, version: f64) -> Self {
        Self {
            version,
            interval_ms,
            history,
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let file: CacheFile = bincode::deserialize(bytes).context("cache bytes did not decode")?;
        file.validate()?;
        Ok(file)
    }

    pub fn validate(&self) -> Result<()> {
        if (self.version - PERSISTENCE.prices.version).abs() > f64::EPSILON {
            bail!(
                "cache version mismatch: file v{}, expected v{}",
                self.version,
                PERSISTENCE.prices.version
            );
        }
        if self.interval_ms != HISTORY_INTERVAL_MS {
            bail!(
                "cache interval mismatch: file {}ms, expected {}ms",
                self.interval_ms,
                HISTORY_INTERVAL_MS
            );
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let bytes = bincode::serialize(self)?;
        std::fs::write(path, bytes).with_context(|| format!("writing cache to {:?}", path))?;
        Ok(())
    }
}

// ============================================================================
// Native: sqlite cache + API top-up
// ============================================================================

/// NATIVE: load the monthly close history. Cache-first with an API top-up;
/// `--prefer-api` refetches the full span instead.
/// Returns the history plus a signature describing which path supplied it.
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_price_history(args: &Cli) -> (PriceHistory, &'static str) {
    match load_price_history_inner(args).await {
        Ok(result) => result,
        Err(e) => {
            log::error!("Price history load failed: {:#}", e);
            (PriceHistory::default(), "no price data")
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_price_history_inner(args: &Cli) -> Result<(PriceHistory, &'static str)> {
    let storage = SqliteStorage::new(PERSISTENCE.prices.db_filename)
        .await
        .context("opening price cache db")?;
    storage.initialize().await?;

    let cached = storage.load_points(SYMBOL, None).await?;

    // Fetch from the last cached bucket onwards. Refetching that bucket is
    // deliberate: its close was still moving when it was stored.
    let fetch_from = if args.prefer_api {
        None
    } else {
        storage.last_close_time(SYMBOL).await?
    };

    let provider = BinanceProvider::new();
    match provider.fetch_monthly_closes(SYMBOL, fetch_from).await {
        Ok(fresh) => {
            storage.insert_points(SYMBOL, &fresh).await?;
            let all = storage.load_points(SYMBOL, None).await?;
            let history = PriceHistory::from_points(SYMBOL, HISTORY_INTERVAL_MS, all);
            Ok((history, "exchange API + local cache"))
        }
        Err(e) if !cached.is_empty() => {
            log::warn!("API fetch failed ({:#}); serving cached history only", e);
            let history = PriceHistory::from_points(SYMBOL, HISTORY_INTERVAL_MS, cached);
            Ok((history, "local cache (API unavailable)"))
        }
        Err(e) => Err(e.context("no cached history and the API fetch failed")),
    }
}

// ============================================================================
// WASM: bundled demo cache
// ============================================================================

#[cfg(target_arch = "wasm32")]
const DEMO_CACHE_BYTES: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/",
    crate::price_data_dir!(), // Expands to "price_data"
    "/",
    crate::demo_cache_file!() // Expands to "demo_btc_monthly_v1.bin"
));

/// WASM: decode the demo cache baked into the binary by make_demo_cache.
#[cfg(target_arch = "wasm32")]
pub async fn load_price_history(_args: &crate::Cli) -> (PriceHistory, &'static str) {
    match CacheFile::from_bytes(DEMO_CACHE_BYTES) {
        Ok(file) => (file.history, "bundled demo cache"),
        Err(e) => {
            log::error!("Demo cache failed to decode: {:#}", e);
            (PriceHistory::default(), "no price data")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PricePoint;

    fn sample_history() -> PriceHistory {
        PriceHistory::from_points(
            "BTCUSDT",
            HISTORY_INTERVAL_MS,
            vec![
                PricePoint {
                    timestamp_ms: 0,
                    close: 50_000.0,
                },
                PricePoint {
                    timestamp_ms: HISTORY_INTERVAL_MS,
                    close: 51_000.0,
                },
            ],
        )
    }

    #[test]
    fn cache_round_trips_through_bincode() {
        let file = CacheFile::new(
            HISTORY_INTERVAL_MS,
            sample_history(),
            PERSISTENCE.prices.version,
        );
        let bytes = bincode::serialize(&file).unwrap();
        let decoded = CacheFile::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.history.closes, file.history.closes);
        assert_eq!(decoded.history.symbol, "BTCUSDT");
    }

    #[test]
    fn stale_version_is_rejected() {
        let file = CacheFile::new(HISTORY_INTERVAL_MS, sample_history(), -1.0);
        let bytes = bincode::serialize(&file).unwrap();
        assert!(CacheFile::from_bytes(&bytes).is_err());
    }

    #[test]
    fn wrong_interval_is_rejected() {
        let file = CacheFile::new(12345, sample_history(), PERSISTENCE.prices.version);
        let bytes = bincode::serialize(&file).unwrap();
        assert!(CacheFile::from_bytes(&bytes).is_err());
    }
}
