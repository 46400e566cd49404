//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code.
pub const ERROR: i32 = 2;

/// Input was abandoned mid-match (stdin closed or Ctrl+C).
pub const INTERRUPTED: i32 = 130;
