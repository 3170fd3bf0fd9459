//! Typed boundary between the `obsws-cli` front-end and OBS Studio.
//!
//! The wire protocol, handshake and authentication all live in [`obws`];
//! this crate only shapes what the CLI needs on top of it:
//!
//! - **[`Session`]**: one connection per invocation, every request bounded
//!   by the configured timeout, explicit [`close()`](Session::close).
//!
//! - **[`Remote`]**: one async method per obs-websocket request the CLI
//!   issues. Command handlers are generic over it, so they run equally
//!   against a live [`Session`] or the in-memory `testing::FakeObs`
//!   (feature `test-support`).
//!
//! - **[`CoreError`]**: obs-websocket status codes folded into named
//!   variants (`NotFound`, `AlreadyExists`, `InvalidResourceState`, ...).
//!
//! - **[`validate`]**: pre-flight existence checks that turn opaque remote
//!   failures into clear upfront errors.
//!
//! - **Domain model** ([`model`]): request-scoped views of scenes, items,
//!   inputs, filters and output state.

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod remote;
pub mod session;
pub mod validate;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::ConnectionConfig;
pub use error::CoreError;
pub use remote::Remote;
pub use session::Session;

pub use model::{
    Filter, Input, InputSettings, KeyModifiers, Monitor, NamedList, RecordStatus, Scene,
    SceneItem, SceneList, Screenshot, StreamStatus, VersionInfo,
};
