//! splashgen - Cordova splash screen generator
//!
//! Run from the root of a Cordova project:
//!   splashgen [--config <file>] [--splash <file>] [--ios-dest <dir>] [--android-dest <dir>]

use splashgen::{Settings, display, generate};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }

    let settings = Settings::parse(&args);
    let result = generate::run(&settings);
    if let Err(e) = &result {
        display::error(&e.to_string());
    }

    // Output always ends with a blank line
    println!();
    if result.is_err() {
        std::process::exit(1);
    }
}

fn print_help() {
    println!(
        r#"splashgen - Generate Cordova splash screens

USAGE:
    splashgen [OPTIONS]

OPTIONS:
    --config <FILE>        Project config file [default: config.xml]
    --splash <FILE>        Source splash image [default: splash.png]
    --ios-dest <DIR>       Output root for iOS splashes
    --android-dest <DIR>   Output root for Android splashes (needs --ios-dest)
    -h, --help             Show this help message

Run from the root of a Cordova project. Platforms are detected from the
platforms/ directory; splashes are written into each platform's resource
tree unless a dest override is given.
"#
    );
}
