mod money;
mod perf;
mod time_utils;

pub use money::{format_amount, format_axis_amount};
pub use time_utils::{
    AppInstant, TimeUtils, epoch_secs, epoch_secs_to_clock, format_clock, format_clock_secs,
    format_duration,
};
