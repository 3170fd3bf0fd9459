//! Screenshot command handler.

use std::path::Path;

use obsws_core::{CoreError, Remote, Screenshot};

use crate::cli::{ScreenshotArgs, ScreenshotCommand};
use crate::error::CliError;

use super::Context;

const MISSING_FORMAT: &str = "The image format (file extension) must be included in the file \
                              name, for example: '/path/to/screenshot.png'.";

/// Image format taken from the file extension, lowercased.
fn image_format(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(str::to_ascii_lowercase)
}

pub async fn handle(
    remote: &impl Remote,
    args: ScreenshotArgs,
    ctx: &Context,
) -> Result<String, CliError> {
    match args.command {
        ScreenshotCommand::Save {
            source,
            path,
            width,
            height,
            quality,
        } => {
            let format =
                image_format(&path).ok_or_else(|| CliError::invalid_parameter(MISSING_FORMAT))?;
            let screenshot = Screenshot {
                source,
                format,
                path,
                width,
                height,
                quality,
            };

            match remote.save_source_screenshot(&screenshot).await {
                Ok(()) => Ok(format!(
                    "Screenshot saved to {}.",
                    ctx.hl(&screenshot.path.display().to_string())
                )),
                // OBS reports an empty format field this way
                Err(CoreError::InvalidRequest { code: 403, .. }) => {
                    Err(CliError::invalid_parameter(MISSING_FORMAT))
                }
                Err(CoreError::NotFound { .. }) => Err(CliError::not_found(format!(
                    "No source was found by the name of {}.",
                    screenshot.source
                ))),
                Err(e) => Err(e.into()),
            }
        }
    }
}
