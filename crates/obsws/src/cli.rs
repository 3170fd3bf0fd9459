//! Clap derive structures for the `obsws-cli` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// obsws-cli -- control OBS Studio from the command line
#[derive(Debug, Parser)]
#[command(
    name = "obsws-cli",
    version,
    about = "Control OBS Studio from the command line",
    long_about = "A command line interface for OBS Studio over obs-websocket v5.\n\n\
        Every command opens one connection, issues a handful of requests,\n\
        prints the result and disconnects.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

/// Unset options fall back to the config file, then to built-in defaults.
#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// WebSocket host [default: localhost]
    #[arg(long, env = "OBSWS_HOST", global = true)]
    pub host: Option<String>,

    /// WebSocket port [default: 4455]
    #[arg(long, env = "OBSWS_PORT", global = true)]
    pub port: Option<u16>,

    /// WebSocket password
    #[arg(long, env = "OBSWS_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Connect and request timeout in seconds [default: 5]
    #[arg(long, env = "OBSWS_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Output style [default: disabled]
    #[arg(long, short = 's', env = "OBSWS_STYLE", global = true, ignore_case = true)]
    pub style: Option<StyleName>,

    /// Render tables without borders
    #[arg(
        long,
        short = 'b',
        env = "OBSWS_STYLE_NO_BORDER",
        global = true,
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub no_border: bool,

    /// Log level when RUST_LOG is unset [default: warn]
    #[arg(long, env = "OBSWS_LOGLEVEL", global = true, ignore_case = true)]
    pub loglevel: Option<LogLevel>,
}

// ── Style & Log Level Enums ──────────────────────────────────────────

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StyleName {
    /// No colour at all
    #[default]
    Disabled,
    Red,
    Magenta,
    Purple,
    Blue,
    Cyan,
    Green,
    Yellow,
    Orange,
    White,
    Grey,
    Navy,
    Black,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Control OBS scenes
    #[command(alias = "sc")]
    Scene(SceneArgs),

    /// Control scene collections
    #[command(aliases = ["scenecollection", "scc"])]
    SceneCollection(SceneCollectionArgs),

    /// Control items in OBS scenes
    #[command(aliases = ["sceneitem", "si"])]
    SceneItem(SceneItemArgs),

    /// Control groups in OBS scenes
    #[command(alias = "g")]
    Group(GroupArgs),

    /// Control inputs
    #[command(alias = "i")]
    Input(InputArgs),

    /// Control source filters
    #[command(alias = "f")]
    Filter(FilterArgs),

    /// Control profiles
    #[command(alias = "prf")]
    Profile(ProfileArgs),

    /// Control recording
    #[command(alias = "rc")]
    Record(RecordArgs),

    /// Control streaming
    #[command(alias = "st")]
    Stream(StreamArgs),

    /// Control the replay buffer
    #[command(name = "replaybuffer", aliases = ["replay-buffer", "rb"])]
    ReplayBuffer(ReplayBufferArgs),

    /// Control studio mode
    #[command(name = "studiomode", aliases = ["studio-mode", "sm"])]
    StudioMode(StudioModeArgs),

    /// Control the virtual camera
    #[command(name = "virtualcam", aliases = ["virtual-cam", "vc"])]
    VirtualCam(VirtualCamArgs),

    /// Control hotkeys
    #[command(alias = "hk")]
    Hotkey(HotkeyArgs),

    /// Control projectors
    #[command(alias = "prj")]
    Projector(ProjectorArgs),

    /// Take screenshots of sources
    #[command(alias = "ss")]
    Screenshot(ScreenshotArgs),

    /// Control text inputs
    #[command(alias = "t")]
    Text(TextArgs),

    /// Show the OBS and obs-websocket versions
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared Targets ───────────────────────────────────────────────────

/// A scene item, optionally nested inside a group.
#[derive(Debug, Args)]
pub struct ItemTarget {
    /// Scene containing the item
    pub scene: String,

    /// Source name of the item
    pub item: String,

    /// Group the item lives in
    #[arg(long, value_name = "GROUP")]
    pub group: Option<String>,
}

#[derive(Debug, Args)]
pub struct GroupTarget {
    /// Scene containing the group
    pub scene: String,

    /// Name of the group
    pub group: String,
}

#[derive(Debug, Args)]
pub struct FilterTarget {
    /// Source (input or scene) the filter is attached to
    pub source: String,

    /// Name of the filter
    pub filter: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SCENES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SceneArgs {
    #[command(subcommand)]
    pub command: SceneCommand,
}

#[derive(Debug, Subcommand)]
pub enum SceneCommand {
    /// List all scenes
    #[command(alias = "ls")]
    List {
        /// Show scene UUIDs
        #[arg(long)]
        uuid: bool,
    },

    /// Show the current program (or preview) scene
    #[command(alias = "get")]
    Current {
        /// Show the preview scene instead (studio mode)
        #[arg(long)]
        preview: bool,
    },

    /// Switch the program (or preview) scene
    #[command(alias = "set")]
    Switch {
        /// Scene to switch to
        scene: String,

        /// Switch the preview scene instead (studio mode)
        #[arg(long)]
        preview: bool,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SCENE COLLECTIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SceneCollectionArgs {
    #[command(subcommand)]
    pub command: SceneCollectionCommand,
}

#[derive(Debug, Subcommand)]
pub enum SceneCollectionCommand {
    /// List all scene collections
    #[command(alias = "ls")]
    List,

    /// Show the current scene collection
    #[command(alias = "get")]
    Current,

    /// Switch to another scene collection
    #[command(alias = "set")]
    Switch {
        /// Scene collection name
        name: String,
    },

    /// Create a new scene collection and switch to it
    #[command(alias = "new")]
    Create {
        /// Scene collection name
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SCENE ITEMS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SceneItemArgs {
    #[command(subcommand)]
    pub command: SceneItemCommand,
}

#[derive(Debug, Subcommand)]
pub enum SceneItemCommand {
    /// List items in a scene, including the contents of groups
    #[command(alias = "ls")]
    List {
        /// Scene to list [default: current program scene]
        scene: Option<String>,
    },

    /// Show an item
    #[command(alias = "sh")]
    Show(ItemTarget),

    /// Hide an item
    #[command(alias = "h")]
    Hide(ItemTarget),

    /// Toggle an item's visibility
    #[command(alias = "tg")]
    Toggle(ItemTarget),

    /// Report whether an item is visible
    #[command(alias = "v")]
    Visible(ItemTarget),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  GROUPS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct GroupArgs {
    #[command(subcommand)]
    pub command: GroupCommand,
}

#[derive(Debug, Subcommand)]
pub enum GroupCommand {
    /// List groups in a scene
    #[command(alias = "ls")]
    List {
        /// Scene to list [default: current program scene]
        scene: Option<String>,
    },

    /// Show a group
    #[command(alias = "sh")]
    Show(GroupTarget),

    /// Hide a group
    #[command(alias = "h")]
    Hide(GroupTarget),

    /// Toggle a group's visibility
    #[command(alias = "tg")]
    Toggle(GroupTarget),

    /// Report whether a group is visible
    #[command(alias = "ss")]
    Status(GroupTarget),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  INPUTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct InputArgs {
    #[command(subcommand)]
    pub command: InputCommand,
}

/// Kind filters for `input list`; none set means every kind.
#[derive(Debug, Default, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct InputKindFilter {
    /// Include input devices (kinds containing `input`)
    #[arg(long)]
    pub input: bool,

    /// Include output devices (kinds containing `output`)
    #[arg(long)]
    pub output: bool,

    /// Include colour sources
    #[arg(long)]
    pub colour: bool,

    /// Include ffmpeg media sources
    #[arg(long)]
    pub ffmpeg: bool,

    /// Include VLC sources
    #[arg(long)]
    pub vlc: bool,
}

#[derive(Debug, Subcommand)]
pub enum InputCommand {
    /// List inputs
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        kinds: InputKindFilter,

        /// Show input UUIDs
        #[arg(long)]
        uuid: bool,
    },

    /// Mute an input
    #[command(alias = "m")]
    Mute {
        /// Input name
        name: String,
    },

    /// Unmute an input
    #[command(alias = "um")]
    Unmute {
        /// Input name
        name: String,
    },

    /// Toggle an input's mute state
    #[command(alias = "tg")]
    Toggle {
        /// Input name
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  FILTERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct FilterArgs {
    #[command(subcommand)]
    pub command: FilterCommand,
}

#[derive(Debug, Subcommand)]
pub enum FilterCommand {
    /// List the filters on a source
    #[command(alias = "ls")]
    List {
        /// Source to inspect [default: current program scene]
        source: Option<String>,
    },

    /// Enable a filter
    #[command(alias = "on")]
    Enable(FilterTarget),

    /// Disable a filter
    #[command(alias = "off")]
    Disable(FilterTarget),

    /// Toggle a filter
    #[command(alias = "tg")]
    Toggle(FilterTarget),

    /// Report whether a filter is enabled
    #[command(alias = "ss")]
    Status(FilterTarget),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PROFILES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// List profiles
    #[command(alias = "ls")]
    List,

    /// Show the current profile
    #[command(alias = "get")]
    Current,

    /// Switch to another profile
    #[command(alias = "set")]
    Switch {
        /// Profile name
        name: String,
    },

    /// Create a new profile and switch to it
    #[command(alias = "new")]
    Create {
        /// Profile name
        name: String,
    },

    /// Remove a profile
    #[command(alias = "rm")]
    Remove {
        /// Profile name
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  RECORDING
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct RecordArgs {
    #[command(subcommand)]
    pub command: RecordCommand,
}

#[derive(Debug, Subcommand)]
pub enum RecordCommand {
    /// Start recording
    #[command(alias = "s")]
    Start,

    /// Stop recording
    #[command(alias = "st")]
    Stop,

    /// Toggle recording
    #[command(alias = "tg")]
    Toggle,

    /// Show recording status
    #[command(alias = "ss")]
    Status,

    /// Resume a paused recording
    #[command(alias = "r")]
    Resume,

    /// Pause recording
    #[command(alias = "p")]
    Pause,

    /// Show or set the recording directory
    #[command(alias = "d")]
    Directory {
        /// New recording directory
        directory: Option<String>,
    },

    /// Split the current recording into a new file
    #[command(alias = "sp")]
    Split,

    /// Add a chapter marker to the current recording
    #[command(alias = "ch")]
    Chapter {
        /// Chapter name
        name: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  STREAMING
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct StreamArgs {
    #[command(subcommand)]
    pub command: StreamCommand,
}

#[derive(Debug, Subcommand)]
pub enum StreamCommand {
    /// Start streaming
    #[command(alias = "s")]
    Start,

    /// Stop streaming
    #[command(alias = "st")]
    Stop,

    /// Toggle streaming
    #[command(alias = "tg")]
    Toggle,

    /// Show streaming status
    #[command(alias = "ss")]
    Status,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  REPLAY BUFFER
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ReplayBufferArgs {
    #[command(subcommand)]
    pub command: ReplayBufferCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReplayBufferCommand {
    /// Start the replay buffer
    #[command(alias = "s")]
    Start,

    /// Stop the replay buffer
    #[command(alias = "st")]
    Stop,

    /// Toggle the replay buffer
    #[command(alias = "tg")]
    Toggle,

    /// Show replay buffer status
    #[command(alias = "ss")]
    Status,

    /// Save the replay buffer to disk
    #[command(alias = "sv")]
    Save,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  STUDIO MODE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct StudioModeArgs {
    #[command(subcommand)]
    pub command: StudioModeCommand,
}

#[derive(Debug, Subcommand)]
pub enum StudioModeCommand {
    /// Enable studio mode
    #[command(alias = "on")]
    Enable,

    /// Disable studio mode
    #[command(alias = "off")]
    Disable,

    /// Toggle studio mode
    #[command(alias = "tg")]
    Toggle,

    /// Show studio mode status
    #[command(alias = "ss")]
    Status,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  VIRTUAL CAMERA
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct VirtualCamArgs {
    #[command(subcommand)]
    pub command: VirtualCamCommand,
}

#[derive(Debug, Subcommand)]
pub enum VirtualCamCommand {
    /// Start the virtual camera
    #[command(alias = "s")]
    Start,

    /// Stop the virtual camera
    #[command(alias = "p")]
    Stop,

    /// Toggle the virtual camera
    #[command(alias = "tg")]
    Toggle,

    /// Show virtual camera status
    #[command(alias = "ss")]
    Status,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  HOTKEYS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct HotkeyArgs {
    #[command(subcommand)]
    pub command: HotkeyCommand,
}

#[derive(Debug, Subcommand)]
pub enum HotkeyCommand {
    /// List registered hotkeys
    #[command(alias = "ls")]
    List,

    /// Trigger a hotkey by name
    #[command(alias = "tr")]
    Trigger {
        /// Hotkey name, e.g. `OBSBasic.StartRecording`
        name: String,
    },

    /// Trigger a key sequence by key id
    #[command(alias = "trs")]
    TriggerSequence {
        /// OBS key id, e.g. `OBS_KEY_F1`
        key_id: String,

        /// Hold shift
        #[arg(long)]
        shift: bool,

        /// Hold control
        #[arg(long)]
        ctrl: bool,

        /// Hold alt
        #[arg(long)]
        alt: bool,

        /// Hold command (macOS)
        #[arg(long)]
        cmd: bool,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  PROJECTORS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ProjectorArgs {
    #[command(subcommand)]
    pub command: ProjectorCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProjectorCommand {
    /// List monitors available for fullscreen projectors
    #[command(alias = "ls-m")]
    ListMonitors,

    /// Open a fullscreen projector for a source
    #[command(alias = "o")]
    Open {
        /// Source to project [default: current program scene]
        source: Option<String>,

        /// Monitor to open the projector on
        #[arg(long, default_value_t = 0)]
        monitor_index: u32,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SCREENSHOTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ScreenshotArgs {
    #[command(subcommand)]
    pub command: ScreenshotCommand,
}

#[derive(Debug, Subcommand)]
pub enum ScreenshotCommand {
    /// Save a screenshot of a source on the OBS host
    #[command(alias = "sv")]
    Save {
        /// Source (input or scene) to capture
        source: String,

        /// Destination path; the extension selects the image format
        path: PathBuf,

        /// Image width in pixels
        #[arg(long, default_value_t = 1920)]
        width: u32,

        /// Image height in pixels
        #[arg(long, default_value_t = 1080)]
        height: u32,

        /// Compression quality, 0-100 (-1 for the format default)
        #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
        quality: i32,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TEXT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct TextArgs {
    #[command(subcommand)]
    pub command: TextCommand,
}

#[derive(Debug, Subcommand)]
pub enum TextCommand {
    /// Show the text of a text input
    #[command(alias = "get")]
    Current {
        /// Text input name
        input: String,
    },

    /// Set the text of a text input
    #[command(alias = "set")]
    Update {
        /// Text input name
        input: String,

        /// New text [default: empty]
        text: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn group_aliases_resolve() {
        for argv in [
            ["obsws-cli", "sc", "ls"],
            ["obsws-cli", "scc", "ls"],
            ["obsws-cli", "rb", "ss"],
            ["obsws-cli", "studio-mode", "ss"],
            ["obsws-cli", "vc", "tg"],
            ["obsws-cli", "prj", "ls-m"],
        ] {
            assert!(Cli::try_parse_from(argv).is_ok(), "failed to parse {argv:?}");
        }
    }

    #[test]
    fn style_names_parse_case_insensitively() {
        let cli = Cli::try_parse_from(["obsws-cli", "--style", "CYAN", "version"]);
        assert!(matches!(
            cli.map(|c| c.global.style),
            Ok(Some(StyleName::Cyan))
        ));
        assert_eq!("Navy".parse::<StyleName>().ok(), Some(StyleName::Navy));
    }

    #[test]
    fn no_border_is_a_plain_switch() {
        let on = Cli::try_parse_from(["obsws-cli", "-b", "version"]).unwrap();
        assert!(on.global.no_border);
        let off = Cli::try_parse_from(["obsws-cli", "version"]).unwrap();
        assert!(!off.global.no_border);
    }

    #[test]
    fn screenshot_quality_accepts_negative_values() {
        let cli = Cli::try_parse_from([
            "obsws-cli", "ss", "save", "Main", "/tmp/a.png", "--quality", "-1",
        ]);
        assert!(cli.is_ok());
    }
}
