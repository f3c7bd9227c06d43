//! Process exit codes for the inkmd binary.

/// Rendering finished successfully
pub const SUCCESS: i32 = 0;

/// Unreadable input, invalid configuration or another tool failure
pub const TOOL_ERROR: i32 = 2;

pub mod exit {
    use super::*;

    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
