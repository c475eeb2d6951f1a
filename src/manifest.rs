//! Splash asset manifest
//!
//! Static tables of every splash image iOS and Android expect: a file name
//! relative to the platform's splash root plus exact pixel dimensions.
//! Destination roots are resolved at runtime from the settings and the
//! project name.

use crate::settings::Settings;

/// One required splash file: relative name and exact output dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    /// File name relative to the platform splash root. May carry a density
    /// subdirectory, e.g. `drawable-land-ldpi/screen.png`.
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

/// Target platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    Ios,
    Android,
}

/// All supported platforms, in processing order
pub const PLATFORMS: [PlatformKind; 2] = [PlatformKind::Ios, PlatformKind::Android];

/// Splash sizes for every iOS device class
pub const IOS_SPLASHES: &[Asset] = &[
    Asset { name: "Default-568h@2x~iphone.png", width: 640, height: 1136 },
    Asset { name: "Default-667h.png", width: 750, height: 1334 },
    Asset { name: "Default-736h.png", width: 1242, height: 2208 },
    Asset { name: "Default-Landscape-736h.png", width: 2208, height: 1242 },
    Asset { name: "Default-Landscape@2x~ipad.png", width: 2048, height: 1536 },
    Asset { name: "Default-Landscape~ipad.png", width: 1024, height: 768 },
    Asset { name: "Default-Portrait@2x~ipad.png", width: 1536, height: 2048 },
    Asset { name: "Default-Portrait~ipad.png", width: 768, height: 1024 },
    Asset { name: "Default@2x~iphone.png", width: 640, height: 960 },
    Asset { name: "Default~iphone.png", width: 320, height: 480 },
];

/// Splash sizes for every Android screen density, landscape and portrait
pub const ANDROID_SPLASHES: &[Asset] = &[
    Asset { name: "drawable-land-ldpi/screen.png", width: 320, height: 200 },
    Asset { name: "drawable-land-mdpi/screen.png", width: 480, height: 320 },
    Asset { name: "drawable-land-hdpi/screen.png", width: 800, height: 480 },
    Asset { name: "drawable-land-xhdpi/screen.png", width: 1280, height: 720 },
    Asset { name: "drawable-port-ldpi/screen.png", width: 200, height: 320 },
    Asset { name: "drawable-port-mdpi/screen.png", width: 320, height: 480 },
    Asset { name: "drawable-port-hdpi/screen.png", width: 480, height: 800 },
    Asset { name: "drawable-port-xhdpi/screen.png", width: 720, height: 1280 },
];

impl PlatformKind {
    /// Platform name as it appears in output and destination paths
    pub fn name(self) -> &'static str {
        match self {
            PlatformKind::Ios => "ios",
            PlatformKind::Android => "android",
        }
    }

    /// Directory whose presence marks the platform as added to the project
    pub fn project_dir(self) -> &'static str {
        match self {
            PlatformKind::Ios => "platforms/ios",
            PlatformKind::Android => "platforms/android",
        }
    }

    /// Splash files this platform expects
    pub fn assets(self) -> &'static [Asset] {
        match self {
            PlatformKind::Ios => IOS_SPLASHES,
            PlatformKind::Android => ANDROID_SPLASHES,
        }
    }

    /// Resolve the directory splash files are written under.
    ///
    /// iOS defaults to the project's own resource folder, which embeds the
    /// project name from config.xml; Android defaults to the shared res/
    /// tree. A dest override from the command line replaces the default.
    pub fn splash_root(self, settings: &Settings, project_name: &str) -> String {
        match self {
            PlatformKind::Ios => match &settings.ios_dest {
                Some(dest) => format!("{}/ios/", dest),
                None => format!("platforms/ios/{}/Resources/splash/", project_name),
            },
            PlatformKind::Android => match &settings.android_dest {
                Some(dest) => format!("{}/android/", dest),
                None => "platforms/android/res/".to_string(),
            },
        }
    }
}

/// A platform annotated with project presence and its resolved splash root
#[derive(Debug, Clone)]
pub struct Platform {
    pub kind: PlatformKind,
    /// Whether the platform directory exists in the project
    pub is_added: bool,
    /// Directory splash files are written under, trailing slash included
    pub splash_path: String,
}

impl Platform {
    /// Splash files this platform expects
    pub fn assets(&self) -> &'static [Asset] {
        self.kind.assets()
    }
}
