//! Platform-specific configuration

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
