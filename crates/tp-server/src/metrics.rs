//! Per-session call counters, owned by `AppState`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Key under which calls to unregistered tool names are counted.
pub const UNKNOWN_TOOL: &str = "(unknown)";

/// Counters since the last reset.
#[derive(Debug, Clone)]
pub struct SessionMetrics {
    started_at: DateTime<Utc>,
    tool_calls: BTreeMap<String, u64>,
    tool_errors: BTreeMap<String, u64>,
    resource_reads: BTreeMap<String, u64>,
}

/// Exported view of `SessionMetrics`.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub started_at: DateTime<Utc>,
    pub total_tool_calls: u64,
    pub total_tool_errors: u64,
    pub tool_calls: BTreeMap<String, u64>,
    pub tool_errors: BTreeMap<String, u64>,
    pub resource_reads: BTreeMap<String, u64>,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            tool_calls: BTreeMap::new(),
            tool_errors: BTreeMap::new(),
            resource_reads: BTreeMap::new(),
        }
    }

    pub fn record_tool_call(&mut self, tool: &str) {
        *self.tool_calls.entry(tool.to_string()).or_default() += 1;
    }

    pub fn record_tool_error(&mut self, tool: &str) {
        *self.tool_errors.entry(tool.to_string()).or_default() += 1;
    }

    pub fn record_resource_read(&mut self, uri: &str) {
        *self.resource_reads.entry(uri.to_string()).or_default() += 1;
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            started_at: self.started_at,
            total_tool_calls: self.tool_calls.values().sum(),
            total_tool_errors: self.tool_errors.values().sum(),
            tool_calls: self.tool_calls.clone(),
            tool_errors: self.tool_errors.clone(),
            resource_reads: self.resource_reads.clone(),
        }
    }

    /// Clear all counters and restart the session clock. Returns the counters
    /// as they were before the reset.
    pub fn reset(&mut self) -> MetricsSnapshot {
        let before = self.snapshot();
        *self = Self::new();
        before
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
