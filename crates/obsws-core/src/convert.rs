// ── Client response → domain type conversions ──
//
// Keeps the shapes of `obws::responses` out of the rest of the workspace.

use std::time::Duration;

use obws::responses;

use crate::model::{
    Filter, Input, Monitor, NamedList, RecordStatus, Scene, SceneItem, SceneList, StreamStatus,
    VersionInfo,
};

/// OBS reports output durations as signed values; clamp anything negative to zero.
fn std_duration<D>(duration: D) -> Duration
where
    Duration: TryFrom<D>,
{
    Duration::try_from(duration).unwrap_or_default()
}

impl From<responses::scenes::Scenes> for SceneList {
    fn from(resp: responses::scenes::Scenes) -> Self {
        Self {
            current_program: resp.current_program_scene.map(|id| id.name),
            current_preview: resp.current_preview_scene.map(|id| id.name),
            scenes: resp
                .scenes
                .into_iter()
                .map(|s| Scene {
                    name: s.id.name,
                    uuid: s.id.uuid.to_string(),
                })
                .collect(),
        }
    }
}

impl From<responses::scene_items::SceneItem> for SceneItem {
    fn from(item: responses::scene_items::SceneItem) -> Self {
        Self {
            id: item.id,
            source_name: item.source_name,
            is_group: item.is_group.unwrap_or(false),
        }
    }
}

impl From<responses::inputs::Input> for Input {
    fn from(input: responses::inputs::Input) -> Self {
        Self {
            name: input.id.name,
            uuid: input.id.uuid.to_string(),
            kind: input.kind,
        }
    }
}

impl From<responses::filters::SourceFilter> for Filter {
    fn from(filter: responses::filters::SourceFilter) -> Self {
        Self {
            name: filter.name,
            kind: filter.kind,
            enabled: filter.enabled,
            settings: match filter.settings {
                serde_json::Value::Object(map) => map,
                _ => serde_json::Map::new(),
            },
        }
    }
}

impl From<responses::profiles::Profiles> for NamedList {
    fn from(resp: responses::profiles::Profiles) -> Self {
        Self {
            current: resp.current,
            names: resp.profiles,
        }
    }
}

impl From<responses::scene_collections::SceneCollections> for NamedList {
    fn from(resp: responses::scene_collections::SceneCollections) -> Self {
        Self {
            current: resp.current,
            names: resp.collections,
        }
    }
}

impl From<responses::recording::RecordStatus> for RecordStatus {
    fn from(status: responses::recording::RecordStatus) -> Self {
        Self {
            active: status.active,
            paused: status.paused,
            duration: std_duration(status.duration),
        }
    }
}

impl From<responses::streaming::StreamStatus> for StreamStatus {
    fn from(status: responses::streaming::StreamStatus) -> Self {
        Self {
            active: status.active,
            reconnecting: status.reconnecting,
            duration: std_duration(status.duration),
        }
    }
}

impl From<responses::ui::Monitor> for Monitor {
    fn from(monitor: responses::ui::Monitor) -> Self {
        Self {
            index: monitor.index,
            name: monitor.name,
        }
    }
}

impl From<responses::general::Version> for VersionInfo {
    fn from(version: responses::general::Version) -> Self {
        Self {
            obs_version: version.obs_version.to_string(),
            websocket_version: version.obs_web_socket_version.to_string(),
            rpc_version: version.rpc_version,
            platform: version.platform_description,
        }
    }
}
