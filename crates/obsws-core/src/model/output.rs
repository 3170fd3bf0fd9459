// ── Output status types ──

use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecordStatus {
    pub active: bool,
    pub paused: bool,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreamStatus {
    pub active: bool,
    pub reconnecting: bool,
    pub duration: Duration,
}
