//! Match outcomes

use std::fmt;

/// One of the three results a fixture can end in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Home side wins
    Home,
    /// Draw
    Draw,
    /// Away side wins
    Away,
}

impl Outcome {
    /// All outcomes, in display order
    pub const ALL: [Outcome; 3] = [Outcome::Home, Outcome::Draw, Outcome::Away];

    /// Token used for this outcome in the completion grammar
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Home => "HOME",
            Outcome::Draw => "DRAW",
            Outcome::Away => "AWAY",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
