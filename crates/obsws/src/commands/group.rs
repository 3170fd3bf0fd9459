//! Group command handlers.

use tabled::Tabled;

use obsws_core::{Remote, validate};

use crate::cli::{GroupArgs, GroupCommand, GroupTarget};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Group Name")]
    name: String,
    #[tabled(rename = "Enabled")]
    enabled: &'static str,
}

/// Scene item id of a group, checked against the scene's items.
async fn group_id(remote: &impl Remote, target: &GroupTarget) -> Result<i64, CliError> {
    let GroupTarget { scene, group } = target;
    util::require_scene(remote, scene).await?;
    let items = remote.scene_items(scene).await?;
    validate::find_group(&items, group)
        .map(|g| g.id)
        .ok_or_else(|| CliError::not_found(format!("Group {group} not found in scene {scene}.")))
}

fn visibility(visible: bool) -> &'static str {
    if visible { "visible" } else { "hidden" }
}

async fn set_visibility(
    remote: &impl Remote,
    target: &GroupTarget,
    visible: Option<bool>,
    ctx: &Context,
) -> Result<String, CliError> {
    let id = group_id(remote, target).await?;
    let visible = match visible {
        Some(visible) => visible,
        None => !remote.scene_item_enabled(&target.scene, id).await?,
    };
    remote
        .set_scene_item_enabled(&target.scene, id, visible)
        .await?;
    Ok(format!(
        "Group {} is now {}.",
        ctx.hl(&target.group),
        visibility(visible)
    ))
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    remote: &impl Remote,
    args: GroupArgs,
    ctx: &Context,
) -> Result<String, CliError> {
    match args.command {
        GroupCommand::List { scene } => {
            let scene = util::scene_or_current(remote, scene).await?;
            util::require_scene(remote, &scene).await?;

            let mut groups: Vec<_> = remote
                .scene_items(&scene)
                .await?
                .into_iter()
                .filter(|i| i.is_group)
                .collect();
            if groups.is_empty() {
                return Ok(format!("No groups found in scene {}.", ctx.hl(&scene)));
            }
            groups.sort_by_key(|g| g.id);

            let mut rows = Vec::with_capacity(groups.len());
            for group in groups {
                let enabled = remote.scene_item_enabled(&scene, group.id).await?;
                rows.push(GroupRow {
                    id: group.id,
                    name: group.source_name,
                    enabled: output::check_mark(enabled, false),
                });
            }
            Ok(output::render_table(
                &format!("Groups in Scene: {scene}"),
                &rows,
                &ctx.style,
            ))
        }

        GroupCommand::Show(target) => set_visibility(remote, &target, Some(true), ctx).await,
        GroupCommand::Hide(target) => set_visibility(remote, &target, Some(false), ctx).await,
        GroupCommand::Toggle(target) => set_visibility(remote, &target, None, ctx).await,

        GroupCommand::Status(target) => {
            let id = group_id(remote, &target).await?;
            let visible = remote.scene_item_enabled(&target.scene, id).await?;
            Ok(format!(
                "Group {} is {}.",
                ctx.hl(&target.group),
                visibility(visible)
            ))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use obsws_core::testing::FakeObs;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::exit_code;

    fn obs() -> FakeObs {
        FakeObs::new()
            .with_scenes(&["Main", "Plain"], "Main")
            .with_scene_items(
                "Main",
                vec![
                    FakeObs::group(7, "Lower Third"),
                    FakeObs::item(1, "Camera"),
                    FakeObs::group(3, "Overlay"),
                ],
            )
            .with_scene_items("Plain", vec![FakeObs::item(1, "Camera")])
            .with_item_enabled("Main", 7, false)
    }

    fn target(group: &str) -> GroupTarget {
        GroupTarget {
            scene: "Main".into(),
            group: group.into(),
        }
    }

    async fn run(obs: &FakeObs, command: GroupCommand) -> Result<String, CliError> {
        handle(obs, GroupArgs { command }, &Context::default()).await
    }

    #[tokio::test]
    async fn list_shows_only_groups_sorted_by_id() {
        let out = run(&obs(), GroupCommand::List { scene: None }).await.unwrap();
        assert!(out.contains("Groups in Scene: Main"));
        assert!(!out.contains("Camera"));
        let overlay = out.find("Overlay").unwrap();
        let lower = out.find("Lower Third").unwrap();
        assert!(overlay < lower);
    }

    #[tokio::test]
    async fn scene_without_groups() {
        let out = run(
            &obs(),
            GroupCommand::List {
                scene: Some("Plain".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(out, "No groups found in scene Plain.");
    }

    #[tokio::test]
    async fn plain_items_are_not_groups() {
        let obs = obs();
        let err = run(&obs, GroupCommand::Hide(target("Camera")))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Group Camera not found in scene Main.");
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        assert!(obs.mutations().is_empty());
    }

    #[tokio::test]
    async fn toggle_and_status() {
        let obs = obs();
        let out = run(&obs, GroupCommand::Toggle(target("Lower Third")))
            .await
            .unwrap();
        assert_eq!(out, "Group Lower Third is now visible.");
        let out = run(&obs, GroupCommand::Status(target("Lower Third")))
            .await
            .unwrap();
        assert_eq!(out, "Group Lower Third is visible.");
        assert_eq!(obs.mutations().len(), 1);
    }

    #[tokio::test]
    async fn show_and_hide() {
        let obs = obs();
        assert_eq!(
            run(&obs, GroupCommand::Hide(target("Overlay"))).await.unwrap(),
            "Group Overlay is now hidden."
        );
        assert_eq!(obs.item_enabled("Main", 3), Some(false));
        assert_eq!(
            run(&obs, GroupCommand::Show(target("Overlay"))).await.unwrap(),
            "Group Overlay is now visible."
        );
        assert_eq!(obs.item_enabled("Main", 3), Some(true));
    }
}
