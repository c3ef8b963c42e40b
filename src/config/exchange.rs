/// REST constraints: kline page size, retry policy.
pub struct RestLimits {
    pub klines_limit: i32,
    pub retries: u32,
    pub backoff_ms: u64,
    pub timeout_ms: u64,
}

pub struct WsConfig {
    pub combined_base_url: &'static str,
    pub max_reconnect_delay_sec: u64,
    pub initial_reconnect_delay_sec: u64,
}

pub struct ExchangeConfig {
    pub limits: RestLimits,
    pub ws: WsConfig,
}

pub const EXCHANGE: ExchangeConfig = ExchangeConfig {
    limits: RestLimits {
        klines_limit: 1000,
        retries: 5,
        backoff_ms: 5000,
        timeout_ms: 5000,
    },
    ws: WsConfig {
        combined_base_url: "wss://stream.binance.com:9443/stream?streams=",
        max_reconnect_delay_sec: 300, // 5 minutes
        initial_reconnect_delay_sec: 1,
    },
};
