mod history;
mod price_stream;
#[cfg(not(target_arch = "wasm32"))]
mod provider;
#[cfg(not(target_arch = "wasm32"))]
mod storage;

pub use {
    history::{CacheFile, load_price_history},
    price_stream::{ConnectionStatus, PriceTicker},
};

#[cfg(not(target_arch = "wasm32"))]
pub use {
    provider::{BinanceProvider, PriceDataProvider},
    storage::{PriceStorage, SqliteStorage},
};
