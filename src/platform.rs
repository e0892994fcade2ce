//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the copy-link shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Copy phone shortcut display
#[cfg(target_os = "macos")]
pub const CALL_SHORTCUT: &str = "Cmd+P";

#[cfg(not(target_os = "macos"))]
pub const CALL_SHORTCUT: &str = "Ctrl+P";

/// Copy email shortcut display
#[cfg(target_os = "macos")]
pub const EMAIL_SHORTCUT: &str = "Cmd+E";

#[cfg(not(target_os = "macos"))]
pub const EMAIL_SHORTCUT: &str = "Ctrl+E";
