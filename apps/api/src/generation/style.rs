//! Response styles. The set is closed: every bundle carries all three.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Creative,
    Concise,
    StepByStep,
}

impl Style {
    /// All styles in display order.
    pub const ALL: [Style; 3] = [Style::Creative, Style::Concise, Style::StepByStep];

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Creative => "creative",
            Style::Concise => "concise",
            Style::StepByStep => "stepbystep",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
