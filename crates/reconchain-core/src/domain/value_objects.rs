//! Domain value objects: the fixed tool menu and answer classification.
//!
//! # Adding New Tools
//!
//! 1. Add the enum variant here
//! 2. Add its `as_str` arm
//! 3. Extend `Tool::ALL` in the order the user should be asked
//! 4. The selector and directory layout pick it up from there

use serde::{Deserialize, Serialize};
use std::fmt;

// ── Tool ─────────────────────────────────────────────────────────────────────

/// A follow-up tool the user can opt into after the nmap stages.
///
/// The set is closed; each variant names its own working directory under the
/// project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Screenshot tool, run in a container against the port list.
    Gowitness,
    /// Intel tool. Only receives a copy of the port list.
    Shodan,
    /// Web scanner. Only receives a copy of the port list.
    Nikto,
}

impl Tool {
    /// Every tool, in the order the selector asks about them.
    pub const ALL: [Tool; 3] = [Tool::Gowitness, Tool::Shodan, Tool::Nikto];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gowitness => "gowitness",
            Self::Shodan => "shodan",
            Self::Nikto => "nikto",
        }
    }

    /// Whether selecting this tool triggers the screenshot stage.
    pub const fn takes_screenshots(self) -> bool {
        matches!(self, Self::Gowitness)
    }

    /// Directory name under the project root.
    pub const fn directory_name(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Answers ──────────────────────────────────────────────────────────────────

/// Classify a yes/no answer.
///
/// Only `yes` (any case, surrounding whitespace ignored) affirms. `y`,
/// `yes please` and the empty string are all negative.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
