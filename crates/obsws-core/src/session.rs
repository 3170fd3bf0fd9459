// ── Session ──
//
// One obs-websocket connection per CLI invocation. `connect` performs the
// handshake, every request is bounded by the configured timeout, and
// `close` tears the connection down. Nothing is retried.

use std::future::Future;
use std::time::Duration;

use obws::client::{ConnectConfig, DEFAULT_BROADCAST_CAPACITY};
use obws::requests::EventSubscription;
use obws::requests::{filters, hotkeys, inputs, scene_items, sources, ui};
use obws::Client;
use tracing::{debug, info};

use crate::config::ConnectionConfig;
use crate::error::CoreError;
use crate::model::{
    Filter, Input, InputSettings, KeyModifiers, Monitor, NamedList, RecordStatus, SceneItem,
    SceneList, Screenshot, StreamStatus, VersionInfo,
};
use crate::remote::{Remote, Result};

/// A live connection to OBS.
pub struct Session {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl Session {
    /// Connect and authenticate.
    ///
    /// Fails fast on an unreachable host, a rejected password or when the
    /// handshake does not finish within the configured timeout.
    pub async fn connect(config: &ConnectionConfig) -> Result<Self> {
        let endpoint = config.endpoint();
        debug!(%endpoint, timeout = ?config.timeout, "connecting to obs-websocket");

        let connect = ConnectConfig {
            host: config.host.as_str(),
            port: config.port,
            dangerous: None,
            password: config.password(),
            event_subscriptions: Some(EventSubscription::NONE),
            broadcast_capacity: DEFAULT_BROADCAST_CAPACITY,
            connect_timeout: config.timeout,
        };

        let client = Client::connect_with_config(connect)
            .await
            .map_err(|e| CoreError::from_connect(e, &endpoint, config.timeout.as_secs()))?;

        info!(%endpoint, "connected to obs-websocket");
        Ok(Self {
            client,
            endpoint,
            timeout: config.timeout,
        })
    }

    /// Disconnect from OBS. Dropping a session disconnects as well, but
    /// without waiting for the socket to shut down.
    pub async fn close(mut self) {
        debug!(endpoint = %self.endpoint, "closing obs-websocket session");
        self.client.disconnect().await;
    }

    /// Run one request under the session timeout.
    async fn call<T>(
        &self,
        request: &'static str,
        fut: impl Future<Output = obws::error::Result<T>>,
    ) -> Result<T> {
        debug!(request, "sending request");
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result.map_err(|e| {
                let err = CoreError::from(e);
                debug!(request, status = ?err.status_code(), error = %err, "request failed");
                err
            }),
            Err(_) => Err(CoreError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }),
        }
    }
}

impl Remote for Session {
    // ── General ──────────────────────────────────────────────────────

    async fn version(&self) -> Result<VersionInfo> {
        let version = self
            .call("GetVersion", self.client.general().version())
            .await?;
        Ok(version.into())
    }

    // ── Scenes ───────────────────────────────────────────────────────

    async fn scenes(&self) -> Result<SceneList> {
        let scenes = self
            .call("GetSceneList", self.client.scenes().list())
            .await?;
        Ok(scenes.into())
    }

    async fn current_program_scene(&self) -> Result<String> {
        let scene = self
            .call(
                "GetCurrentProgramScene",
                self.client.scenes().current_program_scene(),
            )
            .await?;
        Ok(scene.id.name)
    }

    async fn current_preview_scene(&self) -> Result<String> {
        let scene = self
            .call(
                "GetCurrentPreviewScene",
                self.client.scenes().current_preview_scene(),
            )
            .await?;
        Ok(scene.id.name)
    }

    async fn set_current_program_scene(&self, scene: &str) -> Result<()> {
        self.call(
            "SetCurrentProgramScene",
            self.client.scenes().set_current_program_scene(scene),
        )
        .await
    }

    async fn set_current_preview_scene(&self, scene: &str) -> Result<()> {
        self.call(
            "SetCurrentPreviewScene",
            self.client.scenes().set_current_preview_scene(scene),
        )
        .await
    }

    // ── Studio mode ──────────────────────────────────────────────────

    async fn studio_mode_enabled(&self) -> Result<bool> {
        self.call(
            "GetStudioModeEnabled",
            self.client.ui().studio_mode_enabled(),
        )
        .await
    }

    async fn set_studio_mode_enabled(&self, enabled: bool) -> Result<()> {
        self.call(
            "SetStudioModeEnabled",
            self.client.ui().set_studio_mode_enabled(enabled),
        )
        .await
    }

    // ── Scene items ──────────────────────────────────────────────────

    async fn scene_items(&self, scene: &str) -> Result<Vec<SceneItem>> {
        let items = self
            .call(
                "GetSceneItemList",
                self.client.scene_items().list(scene.into()),
            )
            .await?;
        Ok(items.into_iter().map(SceneItem::from).collect())
    }

    async fn group_scene_items(&self, group: &str) -> Result<Vec<SceneItem>> {
        let items = self
            .call(
                "GetGroupSceneItemList",
                self.client.scene_items().list_group(group.into()),
            )
            .await?;
        Ok(items.into_iter().map(SceneItem::from).collect())
    }

    async fn scene_item_id(&self, scene: &str, source: &str) -> Result<i64> {
        self.call(
            "GetSceneItemId",
            self.client.scene_items().id(scene_items::Id {
                scene: scene.into(),
                source,
                search_offset: None,
            }),
        )
        .await
    }

    async fn scene_item_enabled(&self, scene: &str, item_id: i64) -> Result<bool> {
        self.call(
            "GetSceneItemEnabled",
            self.client.scene_items().enabled(scene.into(), item_id),
        )
        .await
    }

    async fn set_scene_item_enabled(
        &self,
        scene: &str,
        item_id: i64,
        enabled: bool,
    ) -> Result<()> {
        self.call(
            "SetSceneItemEnabled",
            self.client.scene_items().set_enabled(scene_items::SetEnabled {
                scene: scene.into(),
                item_id,
                enabled,
            }),
        )
        .await
    }

    // ── Inputs ───────────────────────────────────────────────────────

    async fn inputs(&self) -> Result<Vec<Input>> {
        let inputs = self
            .call("GetInputList", self.client.inputs().list(None))
            .await?;
        Ok(inputs.into_iter().map(Input::from).collect())
    }

    async fn input_muted(&self, input: &str) -> Result<bool> {
        self.call(
            "GetInputMute",
            self.client.inputs().muted(inputs::InputId::Name(input)),
        )
        .await
    }

    async fn set_input_muted(&self, input: &str, muted: bool) -> Result<()> {
        self.call(
            "SetInputMute",
            self.client
                .inputs()
                .set_muted(inputs::InputId::Name(input), muted),
        )
        .await
    }

    async fn input_settings(&self, input: &str) -> Result<InputSettings> {
        let resp = self
            .call(
                "GetInputSettings",
                self.client
                    .inputs()
                    .settings::<serde_json::Value>(inputs::InputId::Name(input)),
            )
            .await?;
        Ok(InputSettings {
            kind: resp.kind,
            settings: resp.settings,
        })
    }

    async fn set_input_settings(&self, input: &str, settings: &serde_json::Value) -> Result<()> {
        self.call(
            "SetInputSettings",
            self.client.inputs().set_settings(inputs::SetSettings {
                input: inputs::InputId::Name(input),
                settings,
                overlay: Some(true),
            }),
        )
        .await
    }

    // ── Filters ──────────────────────────────────────────────────────

    async fn source_filters(&self, source: &str) -> Result<Vec<Filter>> {
        let filters = self
            .call(
                "GetSourceFilterList",
                self.client.filters().list(sources::SourceId::Name(source)),
            )
            .await?;
        Ok(filters.into_iter().map(Filter::from).collect())
    }

    async fn filter_default_settings(
        &self,
        kind: &str,
    ) -> Result<serde_json::Map<String, serde_json::Value>> {
        let defaults = self
            .call(
                "GetSourceFilterDefaultSettings",
                self.client
                    .filters()
                    .default_settings::<serde_json::Value>(kind),
            )
            .await?;
        Ok(match defaults {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        })
    }

    async fn set_filter_enabled(&self, source: &str, filter: &str, enabled: bool) -> Result<()> {
        self.call(
            "SetSourceFilterEnabled",
            self.client.filters().set_enabled(filters::SetEnabled {
                source: sources::SourceId::Name(source),
                filter,
                enabled,
            }),
        )
        .await
    }

    // ── Profiles ─────────────────────────────────────────────────────

    async fn profiles(&self) -> Result<NamedList> {
        let profiles = self
            .call("GetProfileList", self.client.profiles().list())
            .await?;
        Ok(profiles.into())
    }

    async fn set_current_profile(&self, name: &str) -> Result<()> {
        self.call(
            "SetCurrentProfile",
            self.client.profiles().set_current(name),
        )
        .await
    }

    async fn create_profile(&self, name: &str) -> Result<()> {
        self.call("CreateProfile", self.client.profiles().create(name))
            .await
    }

    async fn remove_profile(&self, name: &str) -> Result<()> {
        self.call("RemoveProfile", self.client.profiles().remove(name))
            .await
    }

    // ── Scene collections ────────────────────────────────────────────

    async fn scene_collections(&self) -> Result<NamedList> {
        let collections = self
            .call(
                "GetSceneCollectionList",
                self.client.scene_collections().list(),
            )
            .await?;
        Ok(collections.into())
    }

    async fn set_current_scene_collection(&self, name: &str) -> Result<()> {
        self.call(
            "SetCurrentSceneCollection",
            self.client.scene_collections().set_current(name),
        )
        .await
    }

    async fn create_scene_collection(&self, name: &str) -> Result<()> {
        self.call(
            "CreateSceneCollection",
            self.client.scene_collections().create(name),
        )
        .await
    }

    // ── Recording ────────────────────────────────────────────────────

    async fn record_status(&self) -> Result<RecordStatus> {
        let status = self
            .call("GetRecordStatus", self.client.recording().status())
            .await?;
        Ok(status.into())
    }

    async fn start_record(&self) -> Result<()> {
        self.call("StartRecord", self.client.recording().start())
            .await
    }

    async fn stop_record(&self) -> Result<String> {
        self.call("StopRecord", self.client.recording().stop()).await
    }

    async fn toggle_record(&self) -> Result<bool> {
        self.call("ToggleRecord", self.client.recording().toggle())
            .await
    }

    async fn pause_record(&self) -> Result<()> {
        self.call("PauseRecord", self.client.recording().pause())
            .await
    }

    async fn resume_record(&self) -> Result<()> {
        self.call("ResumeRecord", self.client.recording().resume())
            .await
    }

    async fn split_record_file(&self) -> Result<()> {
        self.call("SplitRecordFile", self.client.recording().split_file())
            .await
    }

    async fn create_record_chapter(&self, name: Option<&str>) -> Result<()> {
        self.call(
            "CreateRecordChapter",
            self.client.recording().create_chapter(name),
        )
        .await
    }

    async fn record_directory(&self) -> Result<String> {
        self.call(
            "GetRecordDirectory",
            self.client.config().record_directory(),
        )
        .await
    }

    async fn set_record_directory(&self, directory: &str) -> Result<()> {
        self.call(
            "SetRecordDirectory",
            self.client.config().set_record_directory(directory),
        )
        .await
    }

    // ── Streaming ────────────────────────────────────────────────────

    async fn stream_status(&self) -> Result<StreamStatus> {
        let status = self
            .call("GetStreamStatus", self.client.streaming().status())
            .await?;
        Ok(status.into())
    }

    async fn start_stream(&self) -> Result<()> {
        self.call("StartStream", self.client.streaming().start())
            .await
    }

    async fn stop_stream(&self) -> Result<()> {
        self.call("StopStream", self.client.streaming().stop()).await
    }

    async fn toggle_stream(&self) -> Result<bool> {
        self.call("ToggleStream", self.client.streaming().toggle())
            .await
    }

    // ── Replay buffer ────────────────────────────────────────────────

    async fn replay_buffer_active(&self) -> Result<bool> {
        self.call(
            "GetReplayBufferStatus",
            self.client.replay_buffer().status(),
        )
        .await
    }

    async fn start_replay_buffer(&self) -> Result<()> {
        self.call("StartReplayBuffer", self.client.replay_buffer().start())
            .await
    }

    async fn stop_replay_buffer(&self) -> Result<()> {
        self.call("StopReplayBuffer", self.client.replay_buffer().stop())
            .await
    }

    async fn toggle_replay_buffer(&self) -> Result<bool> {
        self.call("ToggleReplayBuffer", self.client.replay_buffer().toggle())
            .await
    }

    async fn save_replay_buffer(&self) -> Result<()> {
        self.call("SaveReplayBuffer", self.client.replay_buffer().save())
            .await
    }

    // ── Virtual camera ───────────────────────────────────────────────

    async fn virtual_cam_active(&self) -> Result<bool> {
        self.call("GetVirtualCamStatus", self.client.virtual_cam().status())
            .await
    }

    async fn start_virtual_cam(&self) -> Result<()> {
        self.call("StartVirtualCam", self.client.virtual_cam().start())
            .await
    }

    async fn stop_virtual_cam(&self) -> Result<()> {
        self.call("StopVirtualCam", self.client.virtual_cam().stop())
            .await
    }

    async fn toggle_virtual_cam(&self) -> Result<bool> {
        self.call("ToggleVirtualCam", self.client.virtual_cam().toggle())
            .await
    }

    // ── Hotkeys ──────────────────────────────────────────────────────

    async fn hotkeys(&self) -> Result<Vec<String>> {
        self.call("GetHotkeyList", self.client.hotkeys().list())
            .await
    }

    async fn trigger_hotkey(&self, name: &str) -> Result<()> {
        self.call(
            "TriggerHotkeyByName",
            self.client.hotkeys().trigger_by_name(name, None),
        )
        .await
    }

    async fn trigger_key_sequence(&self, key_id: &str, modifiers: KeyModifiers) -> Result<()> {
        let modifiers = hotkeys::KeyModifiers {
            shift: modifiers.shift,
            control: modifiers.control,
            alt: modifiers.alt,
            command: modifiers.command,
        };
        self.call(
            "TriggerHotkeyByKeySequence",
            self.client.hotkeys().trigger_by_sequence(key_id, modifiers),
        )
        .await
    }

    // ── Projectors and screenshots ───────────────────────────────────

    async fn monitors(&self) -> Result<Vec<Monitor>> {
        let monitors = self
            .call("GetMonitorList", self.client.ui().list_monitors())
            .await?;
        Ok(monitors.into_iter().map(Monitor::from).collect())
    }

    async fn open_source_projector(&self, source: &str, monitor_index: u32) -> Result<()> {
        let index = i32::try_from(monitor_index).map_err(|_| CoreError::InvalidRequest {
            code: 402,
            message: format!("monitor index {monitor_index} is out of range"),
        })?;
        self.call(
            "OpenSourceProjector",
            self.client.ui().open_source_projector(ui::OpenSourceProjector {
                source: sources::SourceId::Name(source),
                location: Some(ui::Location::MonitorIndex(index)),
            }),
        )
        .await
    }

    async fn save_source_screenshot(&self, screenshot: &Screenshot) -> Result<()> {
        self.call(
            "SaveSourceScreenshot",
            self.client.sources().save_screenshot(sources::SaveScreenshot {
                source: sources::SourceId::Name(&screenshot.source),
                format: &screenshot.format,
                width: Some(screenshot.width),
                height: Some(screenshot.height),
                compression_quality: Some(screenshot.quality),
                file_path: &screenshot.path,
            }),
        )
        .await
    }
}
