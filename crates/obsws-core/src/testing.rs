// ── In-memory OBS ──
//
// `FakeObs` implements `Remote` over plain collections so command handlers
// can be exercised without a running OBS. It mirrors the obs-websocket
// error codes handlers rely on (600 for unknown resources, 604 for mute on
// inputs without audio, 500/501 for output state) and records every
// mutating request in call order.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::model::{
    Filter, Input, InputSettings, KeyModifiers, Monitor, NamedList, RecordStatus, Scene,
    SceneItem, SceneList, Screenshot, StreamStatus, VersionInfo,
};
use crate::remote::{Remote, Result};

type FailureFn = fn() -> CoreError;

#[derive(Default)]
struct FakeState {
    scenes: Vec<Scene>,
    program_scene: String,
    preview_scene: Option<String>,
    studio_mode: bool,

    scene_items: HashMap<String, Vec<SceneItem>>,
    group_items: HashMap<String, Vec<SceneItem>>,
    item_enabled: HashMap<(String, i64), bool>,

    inputs: Vec<Input>,
    muted: HashMap<String, bool>,
    input_settings: HashMap<String, Value>,

    filters: HashMap<String, Vec<Filter>>,
    filter_defaults: HashMap<String, Map<String, Value>>,

    profiles: NamedList,
    scene_collections: NamedList,

    record: RecordStatus,
    record_directory: String,
    stream: StreamStatus,
    replay_buffer: bool,
    virtual_cam: bool,

    hotkeys: Vec<String>,
    monitors: Vec<Monitor>,

    failures: HashMap<&'static str, FailureFn>,
    mutations: Vec<String>,
}

impl FakeState {
    fn mutated(&mut self, mutation: String) {
        self.mutations.push(mutation);
    }
}

/// Scriptable stand-in for a connected OBS instance.
#[derive(Default)]
pub struct FakeObs {
    state: Mutex<FakeState>,
}

fn not_found(what: &str) -> CoreError {
    CoreError::NotFound {
        message: format!("No source was found by the name of `{what}`."),
    }
}

fn uuid_for(index: usize) -> String {
    format!("00000000-0000-4000-8000-{index:012}")
}

impl FakeObs {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_failure(&self, request: &'static str) -> Result<()> {
        match self.state().failures.get(request) {
            Some(fail) => Err(fail()),
            None => Ok(()),
        }
    }

    // ── Item builders ────────────────────────────────────────────────

    pub fn item(id: i64, name: &str) -> SceneItem {
        SceneItem {
            id,
            source_name: name.into(),
            is_group: false,
        }
    }

    pub fn group(id: i64, name: &str) -> SceneItem {
        SceneItem {
            id,
            source_name: name.into(),
            is_group: true,
        }
    }

    // ── Scenario builders ────────────────────────────────────────────

    /// Scenes in the order OBS would report them.
    pub fn with_scenes(self, names: &[&str], program: &str) -> Self {
        {
            let mut s = self.state();
            s.scenes = names
                .iter()
                .enumerate()
                .map(|(i, n)| Scene {
                    name: (*n).into(),
                    uuid: uuid_for(i),
                })
                .collect();
            s.program_scene = program.into();
        }
        self
    }

    /// Enable studio mode with `preview` as the preview scene.
    pub fn with_studio_mode(self, preview: &str) -> Self {
        {
            let mut s = self.state();
            s.studio_mode = true;
            s.preview_scene = Some(preview.into());
        }
        self
    }

    /// Items in a scene; all start enabled.
    pub fn with_scene_items(self, scene: &str, items: Vec<SceneItem>) -> Self {
        {
            let mut s = self.state();
            for item in &items {
                s.item_enabled.insert((scene.into(), item.id), true);
            }
            s.scene_items.insert(scene.into(), items);
        }
        self
    }

    /// Items inside a group; all start enabled.
    pub fn with_group_items(self, group: &str, items: Vec<SceneItem>) -> Self {
        {
            let mut s = self.state();
            for item in &items {
                s.item_enabled.insert((group.into(), item.id), true);
            }
            s.group_items.insert(group.into(), items);
        }
        self
    }

    pub fn with_item_enabled(self, container: &str, id: i64, enabled: bool) -> Self {
        self.state()
            .item_enabled
            .insert((container.into(), id), enabled);
        self
    }

    /// Add an input. `muted: None` models an input without audio.
    pub fn with_input(self, name: &str, kind: &str, muted: Option<bool>) -> Self {
        {
            let mut s = self.state();
            let uuid = uuid_for(100 + s.inputs.len());
            s.inputs.push(Input {
                name: name.into(),
                uuid,
                kind: kind.into(),
            });
            if let Some(muted) = muted {
                s.muted.insert(name.into(), muted);
            }
            s.input_settings
                .insert(name.into(), Value::Object(Map::new()));
        }
        self
    }

    pub fn with_input_settings(self, name: &str, settings: Value) -> Self {
        self.state().input_settings.insert(name.into(), settings);
        self
    }

    pub fn with_filter(
        self,
        source: &str,
        name: &str,
        kind: &str,
        enabled: bool,
        settings: Value,
    ) -> Self {
        {
            let settings = match settings {
                Value::Object(map) => map,
                _ => Map::new(),
            };
            self.state()
                .filters
                .entry(source.into())
                .or_default()
                .push(Filter {
                    name: name.into(),
                    kind: kind.into(),
                    enabled,
                    settings,
                });
        }
        self
    }

    pub fn with_filter_defaults(self, kind: &str, defaults: Value) -> Self {
        if let Value::Object(map) = defaults {
            self.state().filter_defaults.insert(kind.into(), map);
        }
        self
    }

    pub fn with_profiles(self, names: &[&str], current: &str) -> Self {
        self.state().profiles = named_list(names, current);
        self
    }

    pub fn with_scene_collections(self, names: &[&str], current: &str) -> Self {
        self.state().scene_collections = named_list(names, current);
        self
    }

    pub fn with_recording(self, active: bool, paused: bool) -> Self {
        {
            let mut s = self.state();
            s.record.active = active;
            s.record.paused = paused;
        }
        self
    }

    pub fn with_record_directory(self, directory: &str) -> Self {
        self.state().record_directory = directory.into();
        self
    }

    pub fn with_stream(self, active: bool, duration: Duration) -> Self {
        {
            let mut s = self.state();
            s.stream.active = active;
            s.stream.duration = duration;
        }
        self
    }

    pub fn with_replay_buffer(self, active: bool) -> Self {
        self.state().replay_buffer = active;
        self
    }

    pub fn with_virtual_cam(self, active: bool) -> Self {
        self.state().virtual_cam = active;
        self
    }

    pub fn with_hotkeys(self, names: &[&str]) -> Self {
        self.state().hotkeys = names.iter().map(|n| (*n).to_owned()).collect();
        self
    }

    /// Monitors as `(index, name)` pairs, in reported order.
    pub fn with_monitors(self, monitors: &[(u32, &str)]) -> Self {
        self.state().monitors = monitors
            .iter()
            .map(|(index, name)| Monitor {
                index: *index,
                name: (*name).into(),
            })
            .collect();
        self
    }

    /// Make the named `Remote` method fail with the error `fail` builds.
    pub fn with_failure(self, request: &'static str, fail: FailureFn) -> Self {
        self.state().failures.insert(request, fail);
        self
    }

    // ── Inspection ───────────────────────────────────────────────────

    /// Every mutating request issued so far, in order.
    pub fn mutations(&self) -> Vec<String> {
        self.state().mutations.clone()
    }

    pub fn program_scene(&self) -> String {
        self.state().program_scene.clone()
    }

    pub fn preview_scene(&self) -> Option<String> {
        self.state().preview_scene.clone()
    }

    pub fn studio_mode(&self) -> bool {
        self.state().studio_mode
    }

    pub fn muted(&self, input: &str) -> Option<bool> {
        self.state().muted.get(input).copied()
    }

    pub fn item_enabled(&self, container: &str, id: i64) -> Option<bool> {
        self.state()
            .item_enabled
            .get(&(container.to_owned(), id))
            .copied()
    }

    pub fn filter_enabled(&self, source: &str, filter: &str) -> Option<bool> {
        self.state()
            .filters
            .get(source)
            .and_then(|fs| fs.iter().find(|f| f.name == filter))
            .map(|f| f.enabled)
    }

    pub fn input_text(&self, input: &str) -> Option<String> {
        self.state()
            .input_settings
            .get(input)
            .and_then(|s| s.get("text"))
            .and_then(Value::as_str)
            .map(str::to_owned)
    }

    pub fn current_profile(&self) -> String {
        self.state().profiles.current.clone()
    }

    pub fn profile_names(&self) -> Vec<String> {
        self.state().profiles.names.clone()
    }

    pub fn current_scene_collection(&self) -> String {
        self.state().scene_collections.current.clone()
    }

    pub fn recording(&self) -> RecordStatus {
        self.state().record
    }

    pub fn streaming(&self) -> bool {
        self.state().stream.active
    }

    pub fn replay_buffer(&self) -> bool {
        self.state().replay_buffer
    }

    pub fn virtual_cam(&self) -> bool {
        self.state().virtual_cam
    }
}

fn named_list(names: &[&str], current: &str) -> NamedList {
    NamedList {
        current: current.into(),
        names: names.iter().map(|n| (*n).to_owned()).collect(),
    }
}

fn output_error(code: u16, message: &str) -> CoreError {
    CoreError::OutputState {
        code,
        message: message.into(),
    }
}

impl Remote for FakeObs {
    // ── General ──────────────────────────────────────────────────────

    async fn version(&self) -> Result<VersionInfo> {
        self.check_failure("version")?;
        Ok(VersionInfo {
            obs_version: "31.0.0".into(),
            websocket_version: "5.5.0".into(),
            rpc_version: 1,
            platform: "Linux (fake)".into(),
        })
    }

    // ── Scenes ───────────────────────────────────────────────────────

    async fn scenes(&self) -> Result<SceneList> {
        self.check_failure("scenes")?;
        let s = self.state();
        Ok(SceneList {
            current_program: Some(s.program_scene.clone()),
            current_preview: s.preview_scene.clone(),
            scenes: s.scenes.clone(),
        })
    }

    async fn current_program_scene(&self) -> Result<String> {
        self.check_failure("current_program_scene")?;
        Ok(self.state().program_scene.clone())
    }

    async fn current_preview_scene(&self) -> Result<String> {
        self.check_failure("current_preview_scene")?;
        let s = self.state();
        if !s.studio_mode {
            return Err(CoreError::StudioModeNotActive);
        }
        Ok(s.preview_scene.clone().unwrap_or_default())
    }

    async fn set_current_program_scene(&self, scene: &str) -> Result<()> {
        let mut s = self.state();
        if !s.scenes.iter().any(|sc| sc.name == scene) {
            return Err(not_found(scene));
        }
        s.program_scene = scene.into();
        s.mutated(format!("set_current_program_scene({scene})"));
        Ok(())
    }

    async fn set_current_preview_scene(&self, scene: &str) -> Result<()> {
        let mut s = self.state();
        if !s.studio_mode {
            return Err(CoreError::StudioModeNotActive);
        }
        if !s.scenes.iter().any(|sc| sc.name == scene) {
            return Err(not_found(scene));
        }
        s.preview_scene = Some(scene.into());
        s.mutated(format!("set_current_preview_scene({scene})"));
        Ok(())
    }

    // ── Studio mode ──────────────────────────────────────────────────

    async fn studio_mode_enabled(&self) -> Result<bool> {
        Ok(self.state().studio_mode)
    }

    async fn set_studio_mode_enabled(&self, enabled: bool) -> Result<()> {
        let mut s = self.state();
        s.studio_mode = enabled;
        if enabled && s.preview_scene.is_none() {
            s.preview_scene = Some(s.program_scene.clone());
        }
        s.mutated(format!("set_studio_mode_enabled({enabled})"));
        Ok(())
    }

    // ── Scene items ──────────────────────────────────────────────────

    async fn scene_items(&self, scene: &str) -> Result<Vec<SceneItem>> {
        let s = self.state();
        if !s.scenes.iter().any(|sc| sc.name == scene) {
            return Err(not_found(scene));
        }
        Ok(s.scene_items.get(scene).cloned().unwrap_or_default())
    }

    async fn group_scene_items(&self, group: &str) -> Result<Vec<SceneItem>> {
        self.state()
            .group_items
            .get(group)
            .cloned()
            .ok_or_else(|| not_found(group))
    }

    async fn scene_item_id(&self, scene: &str, source: &str) -> Result<i64> {
        let s = self.state();
        let items = s
            .scene_items
            .get(scene)
            .or_else(|| s.group_items.get(scene))
            .ok_or_else(|| not_found(scene))?;
        items
            .iter()
            .find(|i| i.source_name == source)
            .map(|i| i.id)
            .ok_or_else(|| not_found(source))
    }

    async fn scene_item_enabled(&self, scene: &str, item_id: i64) -> Result<bool> {
        self.state()
            .item_enabled
            .get(&(scene.to_owned(), item_id))
            .copied()
            .ok_or_else(|| not_found(&format!("{scene}#{item_id}")))
    }

    async fn set_scene_item_enabled(
        &self,
        scene: &str,
        item_id: i64,
        enabled: bool,
    ) -> Result<()> {
        let mut s = self.state();
        let key = (scene.to_owned(), item_id);
        if !s.item_enabled.contains_key(&key) {
            return Err(not_found(&format!("{scene}#{item_id}")));
        }
        s.item_enabled.insert(key, enabled);
        s.mutated(format!("set_scene_item_enabled({scene}, {item_id}, {enabled})"));
        Ok(())
    }

    // ── Inputs ───────────────────────────────────────────────────────

    async fn inputs(&self) -> Result<Vec<Input>> {
        self.check_failure("inputs")?;
        Ok(self.state().inputs.clone())
    }

    async fn input_muted(&self, input: &str) -> Result<bool> {
        let s = self.state();
        if !s.inputs.iter().any(|i| i.name == input) {
            return Err(not_found(input));
        }
        s.muted
            .get(input)
            .copied()
            .ok_or_else(|| CoreError::InvalidResourceState {
                message: "The specified input does not support audio.".into(),
            })
    }

    async fn set_input_muted(&self, input: &str, muted: bool) -> Result<()> {
        let mut s = self.state();
        if !s.muted.contains_key(input) {
            return Err(not_found(input));
        }
        s.muted.insert(input.into(), muted);
        s.mutated(format!("set_input_muted({input}, {muted})"));
        Ok(())
    }

    async fn input_settings(&self, input: &str) -> Result<InputSettings> {
        let s = self.state();
        let kind = s
            .inputs
            .iter()
            .find(|i| i.name == input)
            .map(|i| i.kind.clone())
            .ok_or_else(|| not_found(input))?;
        Ok(InputSettings {
            kind,
            settings: s.input_settings.get(input).cloned().unwrap_or_default(),
        })
    }

    async fn set_input_settings(&self, input: &str, settings: &Value) -> Result<()> {
        let mut s = self.state();
        if !s.inputs.iter().any(|i| i.name == input) {
            return Err(not_found(input));
        }
        let current = s
            .input_settings
            .entry(input.into())
            .or_insert_with(|| Value::Object(Map::new()));
        if let (Value::Object(current), Value::Object(overlay)) = (current, settings) {
            for (k, v) in overlay {
                current.insert(k.clone(), v.clone());
            }
        }
        s.mutated(format!("set_input_settings({input}, {settings})"));
        Ok(())
    }

    // ── Filters ──────────────────────────────────────────────────────

    async fn source_filters(&self, source: &str) -> Result<Vec<Filter>> {
        let s = self.state();
        let known = s.scenes.iter().any(|sc| sc.name == source)
            || s.inputs.iter().any(|i| i.name == source);
        if !known {
            return Err(not_found(source));
        }
        Ok(s.filters.get(source).cloned().unwrap_or_default())
    }

    async fn filter_default_settings(&self, kind: &str) -> Result<Map<String, Value>> {
        Ok(self
            .state()
            .filter_defaults
            .get(kind)
            .cloned()
            .unwrap_or_default())
    }

    async fn set_filter_enabled(&self, source: &str, filter: &str, enabled: bool) -> Result<()> {
        let mut s = self.state();
        let found = s
            .filters
            .get_mut(source)
            .and_then(|fs| fs.iter_mut().find(|f| f.name == filter))
            .ok_or_else(|| not_found(filter))?;
        found.enabled = enabled;
        s.mutated(format!("set_filter_enabled({source}, {filter}, {enabled})"));
        Ok(())
    }

    // ── Profiles ─────────────────────────────────────────────────────

    async fn profiles(&self) -> Result<NamedList> {
        Ok(self.state().profiles.clone())
    }

    async fn set_current_profile(&self, name: &str) -> Result<()> {
        let mut s = self.state();
        if !s.profiles.contains(name) {
            return Err(not_found(name));
        }
        s.profiles.current = name.into();
        s.mutated(format!("set_current_profile({name})"));
        Ok(())
    }

    async fn create_profile(&self, name: &str) -> Result<()> {
        let mut s = self.state();
        if s.profiles.contains(name) {
            return Err(CoreError::AlreadyExists {
                message: format!("A profile already exists by that name: {name}"),
            });
        }
        s.profiles.names.push(name.into());
        s.profiles.current = name.into();
        s.mutated(format!("create_profile({name})"));
        Ok(())
    }

    async fn remove_profile(&self, name: &str) -> Result<()> {
        let mut s = self.state();
        if !s.profiles.contains(name) {
            return Err(not_found(name));
        }
        s.profiles.names.retain(|n| n != name);
        s.mutated(format!("remove_profile({name})"));
        Ok(())
    }

    // ── Scene collections ────────────────────────────────────────────

    async fn scene_collections(&self) -> Result<NamedList> {
        Ok(self.state().scene_collections.clone())
    }

    async fn set_current_scene_collection(&self, name: &str) -> Result<()> {
        let mut s = self.state();
        if !s.scene_collections.contains(name) {
            return Err(not_found(name));
        }
        s.scene_collections.current = name.into();
        s.mutated(format!("set_current_scene_collection({name})"));
        Ok(())
    }

    async fn create_scene_collection(&self, name: &str) -> Result<()> {
        let mut s = self.state();
        if s.scene_collections.contains(name) {
            return Err(CoreError::AlreadyExists {
                message: format!("A scene collection already exists by that name: {name}"),
            });
        }
        s.scene_collections.names.push(name.into());
        s.scene_collections.current = name.into();
        s.mutated(format!("create_scene_collection({name})"));
        Ok(())
    }

    // ── Recording ────────────────────────────────────────────────────

    async fn record_status(&self) -> Result<RecordStatus> {
        Ok(self.state().record)
    }

    async fn start_record(&self) -> Result<()> {
        let mut s = self.state();
        if s.record.active {
            return Err(output_error(500, "Recording is already active."));
        }
        s.record.active = true;
        s.mutated("start_record".into());
        Ok(())
    }

    async fn stop_record(&self) -> Result<String> {
        let mut s = self.state();
        if !s.record.active {
            return Err(output_error(501, "Recording is not active."));
        }
        s.record = RecordStatus::default();
        s.mutated("stop_record".into());
        let dir = if s.record_directory.is_empty() {
            "/tmp"
        } else {
            s.record_directory.as_str()
        };
        Ok(format!("{dir}/recording.mkv"))
    }

    async fn toggle_record(&self) -> Result<bool> {
        let mut s = self.state();
        s.record.active = !s.record.active;
        s.record.paused = false;
        let active = s.record.active;
        s.mutated("toggle_record".into());
        Ok(active)
    }

    async fn pause_record(&self) -> Result<()> {
        let mut s = self.state();
        if !s.record.active {
            return Err(output_error(501, "Recording is not active."));
        }
        s.record.paused = true;
        s.mutated("pause_record".into());
        Ok(())
    }

    async fn resume_record(&self) -> Result<()> {
        let mut s = self.state();
        if !s.record.paused {
            return Err(output_error(503, "Recording is not paused."));
        }
        s.record.paused = false;
        s.mutated("resume_record".into());
        Ok(())
    }

    async fn split_record_file(&self) -> Result<()> {
        let mut s = self.state();
        s.mutated("split_record_file".into());
        Ok(())
    }

    async fn create_record_chapter(&self, name: Option<&str>) -> Result<()> {
        let mut s = self.state();
        s.mutated(format!("create_record_chapter({})", name.unwrap_or_default()));
        Ok(())
    }

    async fn record_directory(&self) -> Result<String> {
        Ok(self.state().record_directory.clone())
    }

    async fn set_record_directory(&self, directory: &str) -> Result<()> {
        let mut s = self.state();
        s.record_directory = directory.into();
        s.mutated(format!("set_record_directory({directory})"));
        Ok(())
    }

    // ── Streaming ────────────────────────────────────────────────────

    async fn stream_status(&self) -> Result<StreamStatus> {
        Ok(self.state().stream)
    }

    async fn start_stream(&self) -> Result<()> {
        let mut s = self.state();
        if s.stream.active {
            return Err(output_error(500, "Stream is already active."));
        }
        s.stream.active = true;
        s.mutated("start_stream".into());
        Ok(())
    }

    async fn stop_stream(&self) -> Result<()> {
        let mut s = self.state();
        if !s.stream.active {
            return Err(output_error(501, "Stream is not active."));
        }
        s.stream = StreamStatus::default();
        s.mutated("stop_stream".into());
        Ok(())
    }

    async fn toggle_stream(&self) -> Result<bool> {
        let mut s = self.state();
        s.stream.active = !s.stream.active;
        let active = s.stream.active;
        s.mutated("toggle_stream".into());
        Ok(active)
    }

    // ── Replay buffer ────────────────────────────────────────────────

    async fn replay_buffer_active(&self) -> Result<bool> {
        Ok(self.state().replay_buffer)
    }

    async fn start_replay_buffer(&self) -> Result<()> {
        let mut s = self.state();
        s.replay_buffer = true;
        s.mutated("start_replay_buffer".into());
        Ok(())
    }

    async fn stop_replay_buffer(&self) -> Result<()> {
        let mut s = self.state();
        s.replay_buffer = false;
        s.mutated("stop_replay_buffer".into());
        Ok(())
    }

    async fn toggle_replay_buffer(&self) -> Result<bool> {
        let mut s = self.state();
        s.replay_buffer = !s.replay_buffer;
        let active = s.replay_buffer;
        s.mutated("toggle_replay_buffer".into());
        Ok(active)
    }

    async fn save_replay_buffer(&self) -> Result<()> {
        let mut s = self.state();
        if !s.replay_buffer {
            return Err(output_error(501, "Replay buffer is not active."));
        }
        s.mutated("save_replay_buffer".into());
        Ok(())
    }

    // ── Virtual camera ───────────────────────────────────────────────

    async fn virtual_cam_active(&self) -> Result<bool> {
        Ok(self.state().virtual_cam)
    }

    async fn start_virtual_cam(&self) -> Result<()> {
        let mut s = self.state();
        s.virtual_cam = true;
        s.mutated("start_virtual_cam".into());
        Ok(())
    }

    async fn stop_virtual_cam(&self) -> Result<()> {
        let mut s = self.state();
        s.virtual_cam = false;
        s.mutated("stop_virtual_cam".into());
        Ok(())
    }

    async fn toggle_virtual_cam(&self) -> Result<bool> {
        let mut s = self.state();
        s.virtual_cam = !s.virtual_cam;
        let active = s.virtual_cam;
        s.mutated("toggle_virtual_cam".into());
        Ok(active)
    }

    // ── Hotkeys ──────────────────────────────────────────────────────

    async fn hotkeys(&self) -> Result<Vec<String>> {
        Ok(self.state().hotkeys.clone())
    }

    async fn trigger_hotkey(&self, name: &str) -> Result<()> {
        let mut s = self.state();
        s.mutated(format!("trigger_hotkey({name})"));
        Ok(())
    }

    async fn trigger_key_sequence(&self, key_id: &str, modifiers: KeyModifiers) -> Result<()> {
        let mut s = self.state();
        s.mutated(format!(
            "trigger_key_sequence({key_id}, shift={}, ctrl={}, alt={}, cmd={})",
            modifiers.shift, modifiers.control, modifiers.alt, modifiers.command
        ));
        Ok(())
    }

    // ── Projectors and screenshots ───────────────────────────────────

    async fn monitors(&self) -> Result<Vec<Monitor>> {
        Ok(self.state().monitors.clone())
    }

    async fn open_source_projector(&self, source: &str, monitor_index: u32) -> Result<()> {
        let mut s = self.state();
        s.mutated(format!("open_source_projector({source}, {monitor_index})"));
        Ok(())
    }

    async fn save_source_screenshot(&self, screenshot: &Screenshot) -> Result<()> {
        self.check_failure("save_source_screenshot")?;
        let mut s = self.state();
        let known = s.scenes.iter().any(|sc| sc.name == screenshot.source)
            || s.inputs.iter().any(|i| i.name == screenshot.source);
        if !known {
            return Err(not_found(&screenshot.source));
        }
        s.mutated(format!(
            "save_source_screenshot({}, {}, {})",
            screenshot.source,
            screenshot.format,
            screenshot.path.display()
        ));
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn toggling_twice_restores_state() {
        let obs = FakeObs::new().with_virtual_cam(false);
        assert!(obs.toggle_virtual_cam().await.unwrap());
        assert!(!obs.toggle_virtual_cam().await.unwrap());
        assert!(!obs.virtual_cam());
        assert_eq!(obs.mutations().len(), 2);
    }

    #[tokio::test]
    async fn inputs_without_audio_report_invalid_state() {
        let obs = FakeObs::new().with_input("Colour", "color_source_v3", None);
        let err = obs.input_muted("Colour").await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidResourceState { .. }));
    }

    #[tokio::test]
    async fn injected_failures_surface() {
        let obs = FakeObs::new().with_failure("version", || CoreError::Timeout { timeout_secs: 5 });
        assert!(matches!(
            obs.version().await,
            Err(CoreError::Timeout { timeout_secs: 5 })
        ));
    }
}
