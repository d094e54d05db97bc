use serde::Serialize;
use std::fmt;

/// Sub-day scheduling slot. Column order is fixed: M, P, N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Shift {
    Morning,
    Afternoon,
    Night,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Night];

    /// Short code used in the stored field and in column headers.
    pub fn code(&self) -> &'static str {
        match self {
            Shift::Morning => "M",
            Shift::Afternoon => "P",
            Shift::Night => "N",
        }
    }

    /// Parse one token of a stored shift value.
    /// Accepts the short codes ('M', 'P', 'N') and the long names,
    /// case-insensitive. Unknown tokens yield None and are dropped by
    /// the caller: they could never land in an M/P/N column anyway.
    pub fn parse_token(token: &str) -> Option<Shift> {
        match token.trim().to_ascii_uppercase().as_str() {
            "M" | "MORNING" => Some(Shift::Morning),
            "P" | "AFTERNOON" => Some(Shift::Afternoon),
            "N" | "NIGHT" => Some(Shift::Night),
            _ => None,
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Night => "Night",
        };
        write!(f, "{}", name)
    }
}
