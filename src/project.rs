//! Project inspection
//!
//! Presence checks for platforms, the source splash and the config file,
//! plus project-name extraction from config.xml. All of these run before
//! any splash is generated.

use std::fs;
use std::path::Path;

use crate::display;
use crate::error::SplashError;
use crate::manifest::{PLATFORMS, Platform, PlatformKind};
use crate::settings::Settings;

/// Platforms whose project directory exists
pub fn added_platforms() -> Vec<PlatformKind> {
    PLATFORMS
        .into_iter()
        .filter(|kind| Path::new(kind.project_dir()).is_dir())
        .collect()
}

/// Check that at least one platform was added to the project
pub fn require_platforms() -> Result<Vec<PlatformKind>, SplashError> {
    let added = added_platforms();
    if added.is_empty() {
        return Err(SplashError::NoPlatformsFound);
    }
    let names: Vec<&str> = added.iter().map(|kind| kind.name()).collect();
    display::success(&format!("platforms found: {}", names.join(", ")));
    Ok(added)
}

/// Check that the source splash image exists
pub fn require_source_image(settings: &Settings) -> Result<(), SplashError> {
    if !Path::new(&settings.splash_file).is_file() {
        return Err(SplashError::SourceImageMissing(settings.splash_file.clone()));
    }
    display::success(&format!("{} exists", settings.splash_file));
    Ok(())
}

/// Check that the project config file exists
pub fn require_config_file(settings: &Settings) -> Result<(), SplashError> {
    if !Path::new(&settings.config_file).is_file() {
        return Err(SplashError::ConfigFileMissing(settings.config_file.clone()));
    }
    display::success(&format!("{} exists", settings.config_file));
    Ok(())
}

/// Read the project name from the config file
pub fn project_name(settings: &Settings) -> Result<String, SplashError> {
    let xml = fs::read_to_string(&settings.config_file)?;
    parse_project_name(&xml).map_err(|reason| SplashError::ConfigParse {
        path: settings.config_file.clone(),
        reason,
    })
}

/// Extract the widget name from a config.xml document
fn parse_project_name(xml: &str) -> Result<String, String> {
    let doc = roxmltree::Document::parse(xml).map_err(|e| e.to_string())?;
    let root = doc.root_element();
    if !root.has_tag_name("widget") {
        return Err(format!(
            "expected a <widget> root element, found <{}>",
            root.tag_name().name()
        ));
    }
    root.children()
        .find(|node| node.has_tag_name("name"))
        .and_then(|node| node.text())
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| "missing <name> element".to_string())
}

/// Full platform list annotated with presence flags and resolved splash roots
pub fn platforms(settings: &Settings, project_name: &str) -> Vec<Platform> {
    PLATFORMS
        .into_iter()
        .map(|kind| Platform {
            kind,
            is_added: Path::new(kind.project_dir()).is_dir(),
            splash_path: kind.splash_root(settings, project_name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project_name() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<widget id="com.example.app" version="1.0.0">
    <name>HelloCordova</name>
    <description>A sample app.</description>
</widget>"#;
        assert_eq!(parse_project_name(xml).unwrap(), "HelloCordova");
    }

    #[test]
    fn test_parse_project_name_trims_whitespace() {
        let xml = "<widget><name>\n        My App\n    </name></widget>";
        assert_eq!(parse_project_name(xml).unwrap(), "My App");
    }

    #[test]
    fn test_parse_project_name_missing_name() {
        let xml = "<widget><description>no name here</description></widget>";
        assert!(parse_project_name(xml).is_err());
    }

    #[test]
    fn test_parse_project_name_wrong_root() {
        let xml = "<manifest><name>App</name></manifest>";
        let err = parse_project_name(xml).unwrap_err();
        assert!(err.contains("widget"), "unexpected error: {}", err);
    }

    #[test]
    fn test_parse_project_name_malformed() {
        assert!(parse_project_name("<widget><name>App").is_err());
    }

    #[test]
    fn test_require_source_image_missing() {
        let settings = Settings {
            splash_file: "no-such-splash.png".to_string(),
            ..Default::default()
        };
        match require_source_image(&settings) {
            Err(SplashError::SourceImageMissing(path)) => assert_eq!(path, "no-such-splash.png"),
            other => panic!("expected SourceImageMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_require_config_file_missing() {
        let settings = Settings {
            config_file: "no-such-config.xml".to_string(),
            ..Default::default()
        };
        match require_config_file(&settings) {
            Err(SplashError::ConfigFileMissing(path)) => assert_eq!(path, "no-such-config.xml"),
            other => panic!("expected ConfigFileMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_project_name_from_file() {
        let path = std::env::temp_dir().join("splashgen_test_config.xml");
        fs::write(&path, "<widget><name>TempApp</name></widget>").unwrap();
        let settings = Settings {
            config_file: path.to_string_lossy().into_owned(),
            ..Default::default()
        };
        assert!(require_config_file(&settings).is_ok());
        assert_eq!(project_name(&settings).unwrap(), "TempApp");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_platforms_cover_manifest() {
        // No platforms/ directory in the test environment, so every entry
        // comes back with is_added = false and a resolved splash root.
        let settings = Settings::default();
        let platforms = platforms(&settings, "App");
        assert_eq!(platforms.len(), PLATFORMS.len());
        for platform in &platforms {
            assert!(!platform.is_added);
            assert!(platform.splash_path.ends_with('/'));
        }
    }
}
