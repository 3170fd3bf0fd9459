//! Command dispatch: bridges CLI args -> remote calls -> rendered output.
//!
//! Every handler is generic over [`Remote`] and returns the text to print,
//! so the same code runs against a live session and against `FakeObs`.

pub mod filter;
pub mod group;
pub mod hotkey;
pub mod input;
pub mod profile;
pub mod projector;
pub mod record;
pub mod replay_buffer;
pub mod scene;
pub mod scene_collection;
pub mod scene_item;
pub mod screenshot;
pub mod stream;
pub mod studio_mode;
pub mod text;
pub mod util;
pub mod version;
pub mod virtual_cam;

use obsws_core::Remote;

use crate::cli::Command;
use crate::error::CliError;
use crate::style::Style;

/// Per-invocation state handed to every handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    pub style: Style,
}

impl Context {
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    /// Highlight a user-facing name in the active style.
    pub fn hl(&self, text: &str) -> String {
        self.style.highlight(text)
    }
}

/// Dispatch a connection-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    remote: &impl Remote,
    ctx: &Context,
) -> Result<String, CliError> {
    match cmd {
        Command::Scene(args) => scene::handle(remote, args, ctx).await,
        Command::SceneCollection(args) => scene_collection::handle(remote, args, ctx).await,
        Command::SceneItem(args) => scene_item::handle(remote, args, ctx).await,
        Command::Group(args) => group::handle(remote, args, ctx).await,
        Command::Input(args) => input::handle(remote, args, ctx).await,
        Command::Filter(args) => filter::handle(remote, args, ctx).await,
        Command::Profile(args) => profile::handle(remote, args, ctx).await,
        Command::Record(args) => record::handle(remote, args, ctx).await,
        Command::Stream(args) => stream::handle(remote, args, ctx).await,
        Command::ReplayBuffer(args) => replay_buffer::handle(remote, args, ctx).await,
        Command::StudioMode(args) => studio_mode::handle(remote, args, ctx).await,
        Command::VirtualCam(args) => virtual_cam::handle(remote, args, ctx).await,
        Command::Hotkey(args) => hotkey::handle(remote, args, ctx).await,
        Command::Projector(args) => projector::handle(remote, args, ctx).await,
        Command::Screenshot(args) => screenshot::handle(remote, args, ctx).await,
        Command::Text(args) => text::handle(remote, args, ctx).await,
        Command::Version => version::handle(remote, ctx).await,
        // Generated in `main` without a connection.
        Command::Completions(_) => Err(CliError::Internal(
            "completions do not need a connection".into(),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;
    use obsws_core::testing::FakeObs;

    use super::*;
    use crate::cli::Cli;

    async fn run(obs: &FakeObs, argv: &[&str]) -> Result<String, CliError> {
        let mut full = vec!["obsws-cli"];
        full.extend_from_slice(argv);
        let cli = Cli::try_parse_from(full).unwrap();
        dispatch(cli.command, obs, &Context::default()).await
    }

    #[tokio::test]
    async fn aliases_reach_the_same_handler() {
        let obs = FakeObs::new().with_scenes(&["Intro", "Main"], "Main");
        let long = run(&obs, &["scene", "current"]).await.unwrap();
        let short = run(&obs, &["sc", "get"]).await.unwrap();
        assert_eq!(long, short);
        assert_eq!(short, "Current Program Scene: Main");
    }

    #[tokio::test]
    async fn version_is_dispatched() {
        let obs = FakeObs::new();
        let out = run(&obs, &["version"]).await.unwrap();
        assert!(out.contains("31.0.0"));
    }
}
