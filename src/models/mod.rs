mod interval;
mod record;

pub use interval::{IntervalKind, IntervalResult};
pub use record::{date_key, DailyRecord, HOURS_PER_DAY, MINUTES_PER_HOUR};
