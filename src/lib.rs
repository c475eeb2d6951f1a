//! Splashgen - Cordova splash screen generator
//!
//! Reads a Cordova project's config.xml, detects which platforms were added,
//! and crops a single source image into every splash size iOS and Android
//! expect. Organized into the static asset manifest, the project inspector,
//! and the generation workflow.

pub mod display;
pub mod error;
pub mod generate;
pub mod manifest;
pub mod project;
pub mod settings;

// Re-export commonly used types for convenience
pub use error::SplashError;
pub use generate::splash::SourceImage;
pub use manifest::{ANDROID_SPLASHES, Asset, IOS_SPLASHES, PLATFORMS, Platform, PlatformKind};
pub use settings::{DEFAULT_CONFIG_FILE, DEFAULT_SPLASH_FILE, Settings};
