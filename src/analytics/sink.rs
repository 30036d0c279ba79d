use clap::ValueEnum;
use serde_json::Value;
use uuid::Uuid;

use crate::analytics::AnalyticsEvent;

/// Where analytics events go. Chosen once at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AnalyticsMode {
    /// Write each event to the application log.
    #[default]
    Log,
    /// Drop every event.
    Off,
}

pub trait AnalyticsSink {
    fn emit(&self, event: AnalyticsEvent, properties: Value);
}

/// Logs events tagged with an anonymous id that lives as long as the process.
pub struct LogSink {
    tracking_id: Uuid,
}

impl LogSink {
    pub fn new() -> Self {
        Self {
            tracking_id: Uuid::new_v4(),
        }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsSink for LogSink {
    fn emit(&self, event: AnalyticsEvent, properties: Value) {
        let name: &'static str = event.into();
        log::info!("analytics [{}] {} {}", self.tracking_id, name, properties);
    }
}

pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn emit(&self, _event: AnalyticsEvent, _properties: Value) {}
}
