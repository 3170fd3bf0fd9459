// ── Miscellaneous domain types ──

use std::path::PathBuf;

use serde::Serialize;

/// A set of named entries of which exactly one is current
/// (profiles, scene collections).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NamedList {
    pub current: String,
    pub names: Vec<String>,
}

impl NamedList {
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn is_current(&self, name: &str) -> bool {
        self.current == name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Monitor {
    pub index: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub obs_version: String,
    pub websocket_version: String,
    pub rpc_version: u32,
    pub platform: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct KeyModifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub command: bool,
}

/// Parameters for saving a source screenshot to disk on the OBS host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screenshot {
    pub source: String,
    /// Image format, e.g. `png`; must be one OBS supports.
    pub format: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// 0 (smallest) to 100 (uncompressed); -1 for the format default.
    pub quality: i32,
}
