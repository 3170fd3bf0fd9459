// ── Scene domain types ──

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    pub name: String,
    pub uuid: String,
}

/// Scene list as OBS returns it, plus the names of the active scenes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SceneList {
    pub current_program: Option<String>,
    /// Only set while studio mode is enabled.
    pub current_preview: Option<String>,
    /// In the order OBS reports them (bottom of the scene dock first).
    pub scenes: Vec<Scene>,
}

impl SceneList {
    pub fn contains(&self, name: &str) -> bool {
        self.scenes.iter().any(|s| s.name == name)
    }
}

/// An item placed in a scene or group.
///
/// `id` is only unique within the immediate container, so an item inside a
/// group has to be addressed through the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneItem {
    pub id: i64,
    pub source_name: String,
    pub is_group: bool,
}
