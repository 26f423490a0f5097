//! Keyboard input the customizer reacts to

use serde::{Deserialize, Serialize};

/// Key codes
///
/// Only the keys that make sense as a manual refresh trigger are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// Home key
    Home,
    /// End key
    End,
    /// Insert key
    Insert,
    /// Delete key
    Delete,
    /// Page up key
    PageUp,
    /// Page down key
    PageDown,
    /// F5 function key
    F5,
    /// F9 function key
    F9,
    /// Escape key
    Escape,
    /// Enter key
    Enter,
    /// Space key
    Space,
}
