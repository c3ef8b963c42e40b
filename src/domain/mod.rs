pub mod grant;
pub mod milestone;
pub mod schedule;

pub use grant::{GrantSchedule, VestingScheme};
pub use milestone::{CustomVestingEvent, Milestone, VestingConfig};
pub use schedule::{VestedStep, VestingSchedule};
