mod aggregate;
mod messages;
mod poller;
mod report;
mod tracker;
mod worker;

pub use aggregate::{aggregate_profit, convert, to_whole_units};
pub use messages::{JobPurpose, JobRequest, JobResult};
pub use poller::{PollController, PollDecision, TimerState, Visibility};
pub use report::{ResultRow, RowTone, TotalRow, build_rows, build_total};
pub use tracker::Tracker;
pub use worker::ResultsWorker;
