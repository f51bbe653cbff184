//! Per-letter feedback classification
//!
//! The derived ordering is the "best so far" ranking used by the keyboard:
//! `Absent < Present < Exact`. A letter that has never been observed has no
//! classification at all and is represented as `None` by callers.

use std::fmt;

/// Feedback for one letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    /// Letter cannot be credited at this position (gray)
    Absent,
    /// Letter is in the secret but elsewhere (yellow)
    Present,
    /// Letter is in the secret at exactly this position (green)
    Exact,
}

impl Classification {
    /// Emoji square used in share lines
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single ASCII marker: `G`, `Y` or `-`
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exact => "exact",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}
