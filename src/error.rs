//! Error types
//!
//! Every failure surfaces as a `SplashError`. Precondition errors abort the
//! run before any file is written; io and image errors during generation are
//! reported per file and do not stop the batch.

use thiserror::Error;

/// Errors produced while checking the project or generating splashes
#[derive(Error, Debug)]
pub enum SplashError {
    #[error(
        "No cordova platforms found. Make sure you are in the root folder of your Cordova project and add platforms with 'cordova platform add'"
    )]
    NoPlatformsFound,

    #[error("{0} does not exist in the root folder")]
    SourceImageMissing(String),

    #[error("cordova's {0} does not exist in the root folder")]
    ConfigFileMissing(String),

    #[error("could not read the project name from {path}: {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image operation failed: {0}")]
    Image(#[from] image::ImageError),
}
