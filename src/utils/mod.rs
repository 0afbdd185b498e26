pub mod time;
pub mod week_days;

pub use time::{MINUTES_PER_DAY, TimeCodecError, hour_to_minutes, minutes_to_hour};
pub use week_days::{WeekDaysError, join_week_days, split_week_days};
