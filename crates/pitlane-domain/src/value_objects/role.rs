//! Caller roles used for endpoint authorization

use serde::{Deserialize, Serialize};

/// Role claim attached to a caller's identity.
///
/// Kept as an enum rather than free-form strings; each endpoint names the
/// roles it requires from this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full write access to the robot collection
    Admin,
    /// Race official; same robot write access as admin
    Referee,
    /// Trackside timing hardware; may capture lap times only
    Sensor,
}

impl Role {
    /// Stable wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Referee => "referee",
            Self::Sensor => "sensor",
        }
    }
}
