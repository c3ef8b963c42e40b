pub mod price_series;
pub mod summary;
pub mod timeline;

pub use price_series::{PriceHistory, PricePoint};
pub use summary::{BenefitSummary, NextUnlock};
pub use timeline::{TimelinePoint, VestingTimeline};
