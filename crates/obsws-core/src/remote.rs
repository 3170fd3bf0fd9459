// ── Remote trait ──
//
// One async method per obs-websocket request the CLI issues. `Session`
// implements it over a live connection; `testing::FakeObs` implements it
// in memory. Command handlers are generic over this trait so they never
// touch the client library directly.

use crate::error::CoreError;
use crate::model::{
    Filter, Input, InputSettings, KeyModifiers, Monitor, NamedList, RecordStatus, SceneItem,
    SceneList, Screenshot, StreamStatus, VersionInfo,
};

pub type Result<T, E = CoreError> = std::result::Result<T, E>;

/// Read and mutate calls against a connected OBS instance.
///
/// Each method maps to exactly one request; callers compose them.
#[allow(async_fn_in_trait)]
pub trait Remote {
    // ── General ──────────────────────────────────────────────────────
    async fn version(&self) -> Result<VersionInfo>;

    // ── Scenes ───────────────────────────────────────────────────────
    async fn scenes(&self) -> Result<SceneList>;
    async fn current_program_scene(&self) -> Result<String>;
    async fn current_preview_scene(&self) -> Result<String>;
    async fn set_current_program_scene(&self, scene: &str) -> Result<()>;
    async fn set_current_preview_scene(&self, scene: &str) -> Result<()>;

    // ── Studio mode ──────────────────────────────────────────────────
    async fn studio_mode_enabled(&self) -> Result<bool>;
    async fn set_studio_mode_enabled(&self, enabled: bool) -> Result<()>;

    // ── Scene items ──────────────────────────────────────────────────
    async fn scene_items(&self, scene: &str) -> Result<Vec<SceneItem>>;
    /// Items inside a group, addressed by the group's name.
    async fn group_scene_items(&self, group: &str) -> Result<Vec<SceneItem>>;
    async fn scene_item_id(&self, scene: &str, source: &str) -> Result<i64>;
    async fn scene_item_enabled(&self, scene: &str, item_id: i64) -> Result<bool>;
    async fn set_scene_item_enabled(&self, scene: &str, item_id: i64, enabled: bool)
    -> Result<()>;

    // ── Inputs ───────────────────────────────────────────────────────
    async fn inputs(&self) -> Result<Vec<Input>>;
    /// Fails with `CoreError::InvalidResourceState` for inputs without audio.
    async fn input_muted(&self, input: &str) -> Result<bool>;
    async fn set_input_muted(&self, input: &str, muted: bool) -> Result<()>;
    async fn input_settings(&self, input: &str) -> Result<InputSettings>;
    /// Overlays `settings` on top of the input's current settings.
    async fn set_input_settings(&self, input: &str, settings: &serde_json::Value) -> Result<()>;

    // ── Filters ──────────────────────────────────────────────────────
    async fn source_filters(&self, source: &str) -> Result<Vec<Filter>>;
    async fn filter_default_settings(
        &self,
        kind: &str,
    ) -> Result<serde_json::Map<String, serde_json::Value>>;
    async fn set_filter_enabled(&self, source: &str, filter: &str, enabled: bool) -> Result<()>;

    // ── Profiles ─────────────────────────────────────────────────────
    async fn profiles(&self) -> Result<NamedList>;
    async fn set_current_profile(&self, name: &str) -> Result<()>;
    async fn create_profile(&self, name: &str) -> Result<()>;
    async fn remove_profile(&self, name: &str) -> Result<()>;

    // ── Scene collections ────────────────────────────────────────────
    async fn scene_collections(&self) -> Result<NamedList>;
    async fn set_current_scene_collection(&self, name: &str) -> Result<()>;
    async fn create_scene_collection(&self, name: &str) -> Result<()>;

    // ── Recording ────────────────────────────────────────────────────
    async fn record_status(&self) -> Result<RecordStatus>;
    async fn start_record(&self) -> Result<()>;
    /// Returns the path of the saved recording.
    async fn stop_record(&self) -> Result<String>;
    /// Returns whether recording is active afterwards.
    async fn toggle_record(&self) -> Result<bool>;
    async fn pause_record(&self) -> Result<()>;
    async fn resume_record(&self) -> Result<()>;
    async fn split_record_file(&self) -> Result<()>;
    async fn create_record_chapter(&self, name: Option<&str>) -> Result<()>;
    async fn record_directory(&self) -> Result<String>;
    async fn set_record_directory(&self, directory: &str) -> Result<()>;

    // ── Streaming ────────────────────────────────────────────────────
    async fn stream_status(&self) -> Result<StreamStatus>;
    async fn start_stream(&self) -> Result<()>;
    async fn stop_stream(&self) -> Result<()>;
    async fn toggle_stream(&self) -> Result<bool>;

    // ── Replay buffer ────────────────────────────────────────────────
    async fn replay_buffer_active(&self) -> Result<bool>;
    async fn start_replay_buffer(&self) -> Result<()>;
    async fn stop_replay_buffer(&self) -> Result<()>;
    async fn toggle_replay_buffer(&self) -> Result<bool>;
    async fn save_replay_buffer(&self) -> Result<()>;

    // ── Virtual camera ───────────────────────────────────────────────
    async fn virtual_cam_active(&self) -> Result<bool>;
    async fn start_virtual_cam(&self) -> Result<()>;
    async fn stop_virtual_cam(&self) -> Result<()>;
    async fn toggle_virtual_cam(&self) -> Result<bool>;

    // ── Hotkeys ──────────────────────────────────────────────────────
    async fn hotkeys(&self) -> Result<Vec<String>>;
    async fn trigger_hotkey(&self, name: &str) -> Result<()>;
    async fn trigger_key_sequence(&self, key_id: &str, modifiers: KeyModifiers) -> Result<()>;

    // ── Projectors and screenshots ───────────────────────────────────
    async fn monitors(&self) -> Result<Vec<Monitor>>;
    async fn open_source_projector(&self, source: &str, monitor_index: u32) -> Result<()>;
    async fn save_source_screenshot(&self, screenshot: &Screenshot) -> Result<()>;
}
