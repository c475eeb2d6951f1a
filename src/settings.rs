//! Invocation settings
//!
//! Command line flags are parsed once at startup into an immutable
//! `Settings` value that every component receives by reference.

/// Default project config file
pub const DEFAULT_CONFIG_FILE: &str = "config.xml";

/// Default source splash image
pub const DEFAULT_SPLASH_FILE: &str = "splash.png";

/// Resolved invocation settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Path to the Cordova config file
    pub config_file: String,
    /// Path to the source splash image
    pub splash_file: String,
    /// Output root override for iOS splashes
    pub ios_dest: Option<String>,
    /// Output root override for Android splashes. Only honored when an iOS
    /// override was supplied as well.
    pub android_dest: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            splash_file: DEFAULT_SPLASH_FILE.to_string(),
            ios_dest: None,
            android_dest: None,
        }
    }
}

impl Settings {
    /// Parse settings from the process arguments
    pub fn from_args() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args)
    }

    /// Parse a flag list into settings. Flags that take a value consume the
    /// next argument; anything unrecognized is skipped.
    pub fn parse(args: &[String]) -> Self {
        let mut settings = Self::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--config" => {
                    if i + 1 < args.len() {
                        settings.config_file = args[i + 1].clone();
                        i += 1;
                    }
                }
                "--splash" => {
                    if i + 1 < args.len() {
                        settings.splash_file = args[i + 1].clone();
                        i += 1;
                    }
                }
                "--ios-dest" => {
                    if i + 1 < args.len() {
                        settings.ios_dest = Some(strip_trailing_slash(&args[i + 1]));
                        i += 1;
                    }
                }
                "--android-dest" => {
                    if i + 1 < args.len() {
                        settings.android_dest = Some(strip_trailing_slash(&args[i + 1]));
                        i += 1;
                    }
                }
                _ => {}
            }
            i += 1;
        }

        // An android override without an ios override is ignored
        if settings.ios_dest.is_none() {
            settings.android_dest = None;
        }

        settings
    }
}

/// Strip a single trailing '/' from a destination override
fn strip_trailing_slash(path: &str) -> String {
    path.strip_suffix('/').unwrap_or(path).to_string()
}
