//! Robot aggregate and its embedded lap-time records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::repositories::Document;

/// A competing robot, stored as a single document.
///
/// The wire format uses PascalCase field names (`Id`, `Name`, `LapTimes`).
/// Fields beyond the ones modelled here are schema-flexible document payload
/// and round-trip untouched through `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Robot {
    /// Store-assigned identifier; absent until first insert
    #[serde(default)]
    pub id: Option<String>,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Per-round lap times; absent until the first capture
    #[serde(default)]
    pub lap_times: Option<Vec<LapTime>>,

    /// Remainder of the document, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Robot {
    /// Create a robot with just a name, as a convenience for tests and seeds
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            lap_times: None,
            extra: Map::new(),
        }
    }

    /// Lap times with the absent collection defaulted to empty
    pub fn lap_times_or_empty(&self) -> &[LapTime] {
        self.lap_times.as_deref().unwrap_or_default()
    }

    /// Record a lap time, keyed by round number.
    ///
    /// At most one lap time exists per round: any entry already stored for
    /// the same round is removed before the new one is appended. An absent
    /// collection is initialized empty first.
    pub fn record_lap_time(&mut self, lap: LapTime) {
        let laps = self.lap_times.get_or_insert_with(Vec::new);
        laps.retain(|existing| existing.round_number != lap.round_number);
        laps.push(lap);
    }
}

impl Document for Robot {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

/// A single recorded lap, unique per round within its robot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LapTime {
    /// Round the time was captured for
    #[serde(default)]
    pub round_number: i64,

    /// Elapsed time for the lap in milliseconds
    pub time_elapsed_ms: i64,
}
