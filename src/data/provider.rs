// Native-only code i.e. gated in mod.rs by #[cfg(not(target_arch = "wasm32"))] so no need to gate internally here

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use binance_sdk::{
    config::ConfigurationRestApi,
    spot::{
        SpotRestApi,
        rest_api::{KlinesIntervalEnum, KlinesItemInner, KlinesParams, RestApi},
    },
};

use crate::config::EXCHANGE;
use crate::config::constants::HISTORY_INTERVAL_MS;
use crate::models::PricePoint;
use crate::utils::TimeUtils;

/// Abstract interface for fetching monthly price history.
#[async_trait]
pub trait PriceDataProvider: Send + Sync {
    /// Fetch monthly closes for a symbol, optionally from a start timestamp.
    /// Points come back in chronological order.
    async fn fetch_monthly_closes(
        &self,
        symbol: &str,
        start_time: Option<i64>,
    ) -> Result<Vec<PricePoint>>;
}

pub struct BinanceProvider;

impl BinanceProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

async fn configure_rest_client() -> Result<RestApi> {
    let rest_conf = ConfigurationRestApi::builder()
        .timeout(EXCHANGE.limits.timeout_ms)
        .retries(EXCHANGE.limits.retries)
        .backoff(EXCHANGE.limits.backoff_ms)
        .build()?;
    Ok(SpotRestApi::production(rest_conf))
}

fn interval_for_history() -> Result<KlinesIntervalEnum> {
    match HISTORY_INTERVAL_MS {
        TimeUtils::MS_IN_1_MO => Ok(KlinesIntervalEnum::Interval1M),
        other => bail!("unsupported history interval: {}ms", other),
    }
}

/// One exchange kline row -> (open time, close). The row is a 12-element
/// mixed array; index 0 is the open time, index 4 the close price string.
fn close_point(row: Vec<KlinesItemInner>) -> Option<PricePoint> {
    let mut items = row.into_iter();

    let timestamp_ms = match items.next()? {
        KlinesItemInner::Integer(ts) => ts,
        _ => return None,
    };

    // Skip open/high/low, take close
    let close_item = items.nth(3)?;
    let close = match close_item {
        KlinesItemInner::String(s) => s.parse::<f64>().ok()?,
        _ => return None,
    };

    Some(PricePoint {
        timestamp_ms,
        close,
    })
}

#[async_trait]
impl PriceDataProvider for BinanceProvider {
    async fn fetch_monthly_closes(
        &self,
        symbol: &str,
        start_time: Option<i64>,
    ) -> Result<Vec<PricePoint>> {
        let rest_client = configure_rest_client().await?;
        let page_limit = EXCHANGE.limits.klines_limit;

        let mut all_points: Vec<PricePoint> = Vec::new();
        let mut cursor = start_time;

        // Monthly klines fit one page for any realistic span, but page
        // forward anyway so a shrunken limit can't silently truncate.
        loop {
            let params = KlinesParams::builder(symbol.to_string(), interval_for_history()?)
                .limit(page_limit)
                .start_time(cursor)
                .build()?;

            let response = rest_client
                .klines(params)
                .await
                .with_context(|| format!("klines request failed for {}", symbol))?;
            let rows = response.data().await?;
            let row_count = rows.len();

            let mut points: Vec<PricePoint> = rows.into_iter().filter_map(close_point).collect();
            if points.len() < row_count {
                bail!(
                    "{}: {} of {} kline rows were malformed",
                    symbol,
                    row_count - points.len(),
                    row_count
                );
            }

            // Drop any overlap with the previous page
            if let Some(last_ts) = all_points.last().map(|p| p.timestamp_ms) {
                points.retain(|p| p.timestamp_ms > last_ts);
            }

            let page_exhausted = row_count < page_limit as usize;
            match points.last() {
                Some(last) => cursor = Some(last.timestamp_ms + 1),
                None => break,
            }
            all_points.extend(points);

            if page_exhausted {
                break;
            }
        }

        Ok(all_points)
    }
}
