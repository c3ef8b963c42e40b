use anyhow::{Context, Result};
use std::path::PathBuf;
use vest_scope::config::constants::{HISTORY_INTERVAL_MS, SYMBOL};
use vest_scope::config::{PERSISTENCE, demo_cache_filename};
use vest_scope::data::{CacheFile, PriceStorage, SqliteStorage};
use vest_scope::models::PriceHistory;

// Limit demo data so the WASM binary stays small. 240 monthly closes is
// 20 years of history, far more than the longest horizon needs.
const DEMO_POINT_LIMIT: usize = 240;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let db_path = PERSISTENCE.prices.db_filename;

    log::info!("🚀 Building WASM demo cache from local DB: {}", db_path);
    log::info!("Symbol: {}", SYMBOL);

    // 2. Connect to DB
    let storage = SqliteStorage::new(db_path)
        .await
        .context("Failed to connect to SQLite DB. Run the Native App first to populate data!")?;

    // 3. Extract Data
    let mut points = storage.load_points(SYMBOL, None).await?;
    if points.is_empty() {
        log::error!("No data found for {}. Aborting.", SYMBOL);
        return Ok(());
    }

    if points.len() > DEMO_POINT_LIMIT {
        let start = points.len() - DEMO_POINT_LIMIT;
        points = points.drain(start..).collect();
        log::info!("   ✂ Truncated to last {} monthly closes.", DEMO_POINT_LIMIT);
    }

    let latest_close = points.last().map(|p| p.close).unwrap_or_default();
    let history = PriceHistory::from_points(SYMBOL, HISTORY_INTERVAL_MS, points);

    // 4. Serialize the bundled cache
    let demo_filename = demo_cache_filename();
    let output_path = PathBuf::from(PERSISTENCE.prices.directory).join(&demo_filename);

    log::info!("📦 Serializing {} points to {:?}", history.len(), output_path);

    let cache_file = CacheFile::new(HISTORY_INTERVAL_MS, history, PERSISTENCE.prices.version);
    cache_file.save_to_path(&output_path)?;

    // 5. Demo spot price for the offline ticker
    let spot_path = PathBuf::from(PERSISTENCE.prices.directory).join("demo_spot.json");
    let spot_json = serde_json::json!({ "symbol": SYMBOL, "price": latest_close });
    std::fs::write(&spot_path, serde_json::to_string_pretty(&spot_json)?)?;
    log::info!("📦 Wrote demo spot price to {:?}", spot_path);

    log::info!("✅ Success!");
    log::info!("IMPORTANT: Update src/config/persistence.rs macro if the filename changed:");
    log::info!(
        "   macro_rules! demo_cache_file {{ () => {{ \"{}\" }}; }}",
        demo_filename
    );

    Ok(())
}
