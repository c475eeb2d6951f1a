//! Splash generation workflow
//!
//! `run` checks the project, reads the project name, then walks each added
//! platform in order. Platforms are processed one at a time; the splashes
//! within a platform are generated in parallel and joined before the next
//! platform starts.

pub mod splash;

use rayon::prelude::*;

use crate::display;
use crate::error::SplashError;
use crate::manifest::Platform;
use crate::project;
use crate::settings::Settings;
use splash::SourceImage;

/// Run the full generation workflow.
///
/// Precondition failures abort before anything is written. Failures of
/// individual splashes are reported and do not stop the rest of the batch.
pub fn run(settings: &Settings) -> Result<(), SplashError> {
    display::header("Checking Project & Splash");
    project::require_platforms()?;
    project::require_source_image(settings)?;
    project::require_config_file(settings)?;

    let project_name = project::project_name(settings)?;
    let platforms = project::platforms(settings, &project_name);
    let source = SourceImage::open(&settings.splash_file)?;

    for platform in platforms.iter().filter(|p| p.is_added) {
        generate_platform(&source, platform);
    }
    Ok(())
}

/// Generate every splash a platform expects, in parallel
fn generate_platform(source: &SourceImage, platform: &Platform) {
    display::header(&format!("Generating splash screen for {}", platform.kind.name()));
    platform.assets().par_iter().for_each(|asset| {
        match splash::generate_asset(source, platform, asset) {
            Ok(()) => display::success(&format!("{} created", asset.name)),
            Err(e) => display::error(&format!("{} failed: {}", asset.name, e)),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_platforms_abort_first() {
        // No platforms/ directory in the test environment, so the run must
        // fail on the platform check even though the splash file given here
        // is also absent.
        let settings = Settings {
            splash_file: "no-such-splash.png".to_string(),
            ..Default::default()
        };
        match run(&settings) {
            Err(SplashError::NoPlatformsFound) => {}
            other => panic!("expected NoPlatformsFound, got {:?}", other),
        }
    }
}
