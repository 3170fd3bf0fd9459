// ── Validators ──
//
// Pre-flight existence checks. Each performs one fresh fetch and one exact,
// case-sensitive linear scan. OBS state can change between the check and
// the mutating call that follows; nothing here guards against that.

use crate::model::{Monitor, SceneItem};
use crate::remote::{Remote, Result};

pub async fn scene_exists(remote: &impl Remote, name: &str) -> Result<bool> {
    Ok(remote.scenes().await?.contains(name))
}

pub async fn input_exists(remote: &impl Remote, name: &str) -> Result<bool> {
    Ok(remote.inputs().await?.iter().any(|i| i.name == name))
}

pub async fn profile_exists(remote: &impl Remote, name: &str) -> Result<bool> {
    Ok(remote.profiles().await?.contains(name))
}

pub async fn scene_collection_exists(remote: &impl Remote, name: &str) -> Result<bool> {
    Ok(remote.scene_collections().await?.contains(name))
}

/// The monitor at `index`, if OBS reports one.
pub async fn monitor_at(remote: &impl Remote, index: u32) -> Result<Option<Monitor>> {
    Ok(remote.monitors().await?.into_iter().find(|m| m.index == index))
}

pub async fn studio_mode_enabled(remote: &impl Remote) -> Result<bool> {
    remote.studio_mode_enabled().await
}

/// Look up an item by source name inside a group's own item list.
pub async fn item_in_group(
    remote: &impl Remote,
    group: &str,
    item: &str,
) -> Result<Option<SceneItem>> {
    let items = remote.group_scene_items(group).await?;
    Ok(find_item(&items, item).cloned())
}

/// First item whose source name matches exactly.
pub fn find_item<'a>(items: &'a [SceneItem], name: &str) -> Option<&'a SceneItem> {
    items.iter().find(|i| i.source_name == name)
}

/// First group item whose source name matches exactly.
pub fn find_group<'a>(items: &'a [SceneItem], name: &str) -> Option<&'a SceneItem> {
    items.iter().find(|i| i.is_group && i.source_name == name)
}
