//! Tab strip sides
//!
//! ```text
//!   left            right
//! [ a  b ]  (c)  [ d  e ]
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabSide {
    /// Tabs inserted before the reference tab
    Left,
    /// Tabs inserted after the reference tab
    Right,
}

impl TabSide {
    pub fn opposite(&self) -> TabSide {
        match self {
            TabSide::Left => TabSide::Right,
            TabSide::Right => TabSide::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabSide::Left => "left",
            TabSide::Right => "right",
        }
    }
}

impl std::fmt::Display for TabSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(TabSide::Left),
            "right" => Ok(TabSide::Right),
            _ => Err(format!("Unknown tab side: {}", s)),
        }
    }
}
