//! Live spot price. Native: Binance miniticker over websocket with
//! auto-reconnect. WASM: a bundled demo price (the web build is offline).

#[cfg(not(target_arch = "wasm32"))]
use {
    crate::config::EXCHANGE,
    futures::StreamExt,
    std::{
        sync::{Arc, Mutex},
        thread,
        time::Duration,
    },
    tokio::runtime::Runtime,
    tokio::time::sleep,
    tokio_tungstenite::{connect_async, tungstenite::Message},
};

#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
use crate::config::DF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    Disconnected,
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionStatus::Connecting => write!(f, "connecting"),
            ConnectionStatus::Connected => write!(f, "live"),
            ConnectionStatus::Disconnected => write!(f, "offline"),
        }
    }
}

// ============================================================================
// Native: websocket ticker
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
pub struct PriceTicker {
    price: Arc<Mutex<Option<f64>>>,
    status: Arc<Mutex<ConnectionStatus>>,
}

#[cfg(not(target_arch = "wasm32"))]
fn build_stream_url(symbol: &str) -> String {
    format!(
        "{}{}@miniTicker",
        EXCHANGE.ws.combined_base_url,
        symbol.to_lowercase()
    )
}

#[cfg(not(target_arch = "wasm32"))]
impl PriceTicker {
    pub fn new() -> Self {
        Self {
            price: Arc::new(Mutex::new(None)),
            status: Arc::new(Mutex::new(ConnectionStatus::Connecting)),
        }
    }

    pub fn get_price(&self) -> Option<f64> {
        *self.price.lock().unwrap()
    }

    pub fn status(&self) -> ConnectionStatus {
        *self.status.lock().unwrap()
    }

    /// Spawn the stream thread. One symbol, reconnects forever with doubling
    /// backoff capped by config.
    pub fn start(&self, symbol: &str) {
        let url = build_stream_url(symbol);
        let price = self.price.clone();
        let status = self.status.clone();

        thread::spawn(move || {
            let rt = match Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Price ticker runtime failed to start: {}", e);
                    *status.lock().unwrap() = ConnectionStatus::Disconnected;
                    return;
                }
            };

            rt.block_on(async move {
                let mut delay = EXCHANGE.ws.initial_reconnect_delay_sec;

                loop {
                    *status.lock().unwrap() = ConnectionStatus::Connecting;

                    match connect_async(url.as_str()).await {
                        Ok((ws_stream, _)) => {
                            *status.lock().unwrap() = ConnectionStatus::Connected;
                            delay = EXCHANGE.ws.initial_reconnect_delay_sec;

                            let (_, mut read) = ws_stream.split();
                            while let Some(msg) = read.next().await {
                                match msg {
                                    Ok(Message::Text(text)) => {
                                        if let Some(p) = parse_miniticker_price(&text) {
                                            *price.lock().unwrap() = Some(p);

                                            #[cfg(debug_assertions)]
                                            if DF.log_price_stream_updates {
                                                log::info!("TICKER: {} @ {}", url, p);
                                            }
                                        }
                                    }
                                    Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {}
                                    Ok(Message::Close(_)) | Err(_) => break,
                                    _ => {}
                                }
                            }
                        }
                        Err(e) => {
                            log::warn!("Ticker connect failed ({}); retrying in {}s", e, delay);
                        }
                    }

                    *status.lock().unwrap() = ConnectionStatus::Disconnected;
                    sleep(Duration::from_secs(delay)).await;
                    delay = (delay * 2).min(EXCHANGE.ws.max_reconnect_delay_sec);
                }
            });
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for PriceTicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Combined-stream payload: {"stream":"btcusdt@miniTicker","data":{"c":"..."}}.
/// Bare-stream payloads carry "c" at the top level; accept both.
fn parse_miniticker_price(text: &str) -> Option<f64> {
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    let close = value
        .get("data")
        .and_then(|d| d.get("c"))
        .or_else(|| value.get("c"))?;
    close.as_str()?.parse::<f64>().ok()
}

// ============================================================================
// WASM: bundled demo price
// ============================================================================

#[cfg(target_arch = "wasm32")]
const DEMO_SPOT_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/",
    crate::price_data_dir!(), // Expands to "price_data"
    "/",
    crate::demo_spot_file!() // Expands to "demo_spot.json"
));

#[cfg(target_arch = "wasm32")]
pub struct PriceTicker {
    demo_price: Option<f64>,
}

#[cfg(target_arch = "wasm32")]
impl PriceTicker {
    pub fn new() -> Self {
        let demo_price = serde_json::from_str::<serde_json::Value>(DEMO_SPOT_JSON)
            .ok()
            .and_then(|v| v.get("price").and_then(|p| p.as_f64()));
        if demo_price.is_none() {
            log::error!("Demo spot price failed to parse");
        }
        Self { demo_price }
    }

    pub fn get_price(&self) -> Option<f64> {
        self.demo_price
    }

    pub fn status(&self) -> ConnectionStatus {
        ConnectionStatus::Disconnected
    }

    pub fn start(&self, _symbol: &str) {
        // Offline demo: nothing to stream.
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for PriceTicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_combined_stream_payload() {
        let text = r#"{"stream":"btcusdt@miniTicker","data":{"e":"24hrMiniTicker","s":"BTCUSDT","c":"101250.55","o":"99000.0"}}"#;
        assert_eq!(parse_miniticker_price(text), Some(101250.55));
    }

    #[test]
    fn parses_bare_stream_payload() {
        let text = r#"{"e":"24hrMiniTicker","s":"BTCUSDT","c":"98000.1"}"#;
        assert_eq!(parse_miniticker_price(text), Some(98000.1));
    }

    #[test]
    fn garbage_payload_is_ignored() {
        assert_eq!(parse_miniticker_price("not json"), None);
        assert_eq!(parse_miniticker_price(r#"{"data":{"c":12}}"#), None);
    }
}
