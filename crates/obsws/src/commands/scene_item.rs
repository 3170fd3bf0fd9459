//! Scene item command handlers.
//!
//! Item ids are only unique within their immediate container, so an item
//! inside a group is addressed as `(group, id)` rather than `(scene, id)`.

use tabled::Tabled;

use obsws_core::{Remote, SceneItem, validate};

use crate::cli::{ItemTarget, SceneItemArgs, SceneItemCommand};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct SceneItemRow {
    #[tabled(rename = "Item ID")]
    id: i64,
    #[tabled(rename = "Item Name")]
    name: String,
    #[tabled(rename = "In Group")]
    group: String,
    #[tabled(rename = "Enabled")]
    enabled: &'static str,
}

fn sorted_by_id(mut items: Vec<SceneItem>) -> Vec<SceneItem> {
    items.sort_by_key(|i| i.id);
    items
}

/// Top-level rows in id order, each group followed by its own children.
async fn item_rows(remote: &impl Remote, scene: &str) -> Result<Vec<SceneItemRow>, CliError> {
    let mut rows = Vec::new();
    for item in sorted_by_id(remote.scene_items(scene).await?) {
        let enabled = remote.scene_item_enabled(scene, item.id).await?;
        rows.push(SceneItemRow {
            id: item.id,
            name: item.source_name.clone(),
            group: String::new(),
            enabled: output::check_mark(enabled, false),
        });

        if item.is_group {
            let group = &item.source_name;
            for child in sorted_by_id(remote.group_scene_items(group).await?) {
                let enabled = remote.scene_item_enabled(group, child.id).await?;
                rows.push(SceneItemRow {
                    id: child.id,
                    name: child.source_name,
                    group: group.clone(),
                    enabled: output::check_mark(enabled, false),
                });
            }
        }
    }
    Ok(rows)
}

// ── Target resolution ───────────────────────────────────────────────

/// The container to address and the item's id within it.
async fn resolve(remote: &impl Remote, target: &ItemTarget) -> Result<(String, i64), CliError> {
    let ItemTarget { scene, item, group } = target;
    util::require_scene(remote, scene).await?;
    let items = remote.scene_items(scene).await?;

    match group {
        Some(group) => {
            if validate::find_group(&items, group).is_none() {
                return Err(CliError::not_found(format!(
                    "Group {group} not found in scene {scene}."
                )));
            }
            let nested = validate::item_in_group(remote, group, item)
                .await?
                .ok_or_else(|| {
                    CliError::not_found(format!("Item {item} not found in group {group}."))
                })?;
            Ok((group.clone(), nested.id))
        }
        None => {
            let found = validate::find_item(&items, item).ok_or_else(|| {
                CliError::not_found(format!("Item {item} not found in scene {scene}."))
            })?;
            Ok((scene.clone(), found.id))
        }
    }
}

async fn set_visibility(
    remote: &impl Remote,
    target: &ItemTarget,
    visible: Option<bool>,
    ctx: &Context,
) -> Result<String, CliError> {
    let (container, id) = resolve(remote, target).await?;
    let visible = match visible {
        Some(visible) => visible,
        None => !remote.scene_item_enabled(&container, id).await?,
    };
    remote.set_scene_item_enabled(&container, id, visible).await?;

    let state = if visible { "shown" } else { "hidden" };
    Ok(format!(
        "Item {} in scene {} has been {state}.",
        ctx.hl(&target.item),
        ctx.hl(&target.scene)
    ))
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    remote: &impl Remote,
    args: SceneItemArgs,
    ctx: &Context,
) -> Result<String, CliError> {
    match args.command {
        SceneItemCommand::List { scene } => {
            let scene = util::scene_or_current(remote, scene).await?;
            util::require_scene(remote, &scene).await?;

            let rows = item_rows(remote, &scene).await?;
            if rows.is_empty() {
                return Ok(format!("No items found in scene {}.", ctx.hl(&scene)));
            }
            Ok(output::render_table(
                &format!("Items in Scene: {scene}"),
                &rows,
                &ctx.style,
            ))
        }

        SceneItemCommand::Show(target) => set_visibility(remote, &target, Some(true), ctx).await,
        SceneItemCommand::Hide(target) => set_visibility(remote, &target, Some(false), ctx).await,
        SceneItemCommand::Toggle(target) => set_visibility(remote, &target, None, ctx).await,

        SceneItemCommand::Visible(target) => {
            let (container, id) = resolve(remote, &target).await?;
            let state = if remote.scene_item_enabled(&container, id).await? {
                "visible"
            } else {
                "hidden"
            };
            let location = match &target.group {
                Some(group) => format!("group {} in scene {}", ctx.hl(group), ctx.hl(&target.scene)),
                None => format!("scene {}", ctx.hl(&target.scene)),
            };
            Ok(format!(
                "Item {} in {location} is currently {state}.",
                ctx.hl(&target.item)
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
            .with_scenes(&["Main", "Empty"], "Main")
            .with_scene_items(
                "Main",
                vec![
                    FakeObs::item(5, "Mic"),
                    FakeObs::group(2, "Overlay"),
                    FakeObs::item(1, "Camera"),
                ],
            )
            .with_group_items(
                "Overlay",
                vec![FakeObs::item(2, "Ticker"), FakeObs::item(1, "Logo")],
            )
            .with_item_enabled("Overlay", 2, false)
    }

    fn target(item: &str, group: Option<&str>) -> ItemTarget {
        ItemTarget {
            scene: "Main".into(),
            item: item.into(),
            group: group.map(Into::into),
        }
    }

    async fn run(obs: &FakeObs, command: SceneItemCommand) -> Result<String, CliError> {
        handle(obs, SceneItemArgs { command }, &Context::default()).await
    }

    #[tokio::test]
    async fn list_orders_by_id_with_group_children_after_their_group() {
        let out = run(&obs(), SceneItemCommand::List { scene: None })
            .await
            .unwrap();
        assert!(out.contains("Items in Scene: Main"));

        // Second column of each data row.
        let order: Vec<&str> = out
            .lines()
            .filter_map(|l| l.split('│').nth(2))
            .map(str::trim)
            .filter(|name| !name.is_empty() && *name != "Item Name")
            .collect();
        assert_eq!(order, vec!["Camera", "Overlay", "Logo", "Ticker", "Mic"]);

        let ticker = out.lines().find(|l| l.contains("Ticker")).unwrap();
        assert!(ticker.contains("Overlay") && ticker.contains('✗'));
    }

    #[tokio::test]
    async fn empty_scene_is_not_an_error() {
        let out = run(
            &obs(),
            SceneItemCommand::List {
                scene: Some("Empty".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(out, "No items found in scene Empty.");
    }

    #[tokio::test]
    async fn hide_addresses_top_level_items_by_scene() {
        let obs = obs();
        let out = run(&obs, SceneItemCommand::Hide(target("Camera", None)))
            .await
            .unwrap();
        assert_eq!(out, "Item Camera in scene Main has been hidden.");
        assert_eq!(obs.mutations(), vec!["set_scene_item_enabled(Main, 1, false)"]);
    }

    #[tokio::test]
    async fn nested_items_are_addressed_through_their_group() {
        let obs = obs();
        run(&obs, SceneItemCommand::Show(target("Ticker", Some("Overlay"))))
            .await
            .unwrap();
        assert_eq!(obs.item_enabled("Overlay", 2), Some(true));
        assert_eq!(obs.item_enabled("Main", 2), Some(true));
        assert_eq!(
            obs.mutations(),
            vec!["set_scene_item_enabled(Overlay, 2, true)"]
        );
    }

    #[tokio::test]
    async fn lookup_failures_are_not_found() {
        let obs = obs();
        let cases = [
            (target("Logo", None), "Item Logo not found in scene Main."),
            (
                target("Logo", Some("Camera")),
                "Group Camera not found in scene Main.",
            ),
            (
                target("Camera", Some("Overlay")),
                "Item Camera not found in group Overlay.",
            ),
        ];
        for (target, message) in cases {
            let err = run(&obs, SceneItemCommand::Toggle(target)).await.unwrap_err();
            assert_eq!(err.to_string(), message);
            assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
        }

        let err = run(
            &obs,
            SceneItemCommand::Show(ItemTarget {
                scene: "Nope".into(),
                item: "Camera".into(),
                group: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Scene Nope not found.");
        assert!(obs.mutations().is_empty());
    }

    #[tokio::test]
    async fn toggle_twice_restores_visibility() {
        let obs = obs();
        let first = run(&obs, SceneItemCommand::Toggle(target("Mic", None)))
            .await
            .unwrap();
        assert_eq!(first, "Item Mic in scene Main has been hidden.");
        let second = run(&obs, SceneItemCommand::Toggle(target("Mic", None)))
            .await
            .unwrap();
        assert_eq!(second, "Item Mic in scene Main has been shown.");
        assert_eq!(obs.item_enabled("Main", 5), Some(true));
    }

    #[tokio::test]
    async fn visible_reports_group_location() {
        let obs = obs();
        let out = run(&obs, SceneItemCommand::Visible(target("Ticker", Some("Overlay"))))
            .await
            .unwrap();
        assert_eq!(
            out,
            "Item Ticker in group Overlay in scene Main is currently hidden."
        );
        let out = run(&obs, SceneItemCommand::Visible(target("Camera", None)))
            .await
            .unwrap();
        assert_eq!(out, "Item Camera in scene Main is currently visible.");
        assert!(obs.mutations().is_empty());
    }
}
