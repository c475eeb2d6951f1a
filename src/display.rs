//! Console output helpers
//!
//! Progress is reported as indented check/cross lines grouped under section
//! headers.

/// Print a success line
pub fn success(msg: &str) {
    println!("  ✓  {}", msg);
}

/// Print an error line
pub fn error(msg: &str) {
    println!("  ✗  {}", msg);
}

/// Print a section header surrounded by blank lines
pub fn header(msg: &str) {
    println!();
    println!(" {}", msg);
    println!();
}
