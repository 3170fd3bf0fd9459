// ── Domain model ──
//
// Request-scoped views of OBS state. Every value is fetched fresh for the
// command that needs it and dropped with the invocation; nothing here is
// cached or persisted.

pub mod general;
pub mod output;
pub mod scene;
pub mod source;

pub use general::{KeyModifiers, Monitor, NamedList, Screenshot, VersionInfo};
pub use output::{RecordStatus, StreamStatus};
pub use scene::{Scene, SceneItem, SceneList};
pub use source::{Filter, Input, InputSettings};
