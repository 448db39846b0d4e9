//! Wire DTOs for the activities REST API.
//!
//! DESIGN
//! ======
//! `GET /activities` returns a JSON object keyed by activity name. The UI
//! renders activities in the order the server lists them, so `Roster` keeps
//! entries in document order instead of collecting into a hash map.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A scheduled offering with a participant capacity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Registered emails in registration order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus current registrations. Negative only when the server
    /// sends an over-full activity.
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        i64::from(self.max_participants) - taken
    }
}

/// The full activity mapping, in server order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<(String, Activity)>,
}

impl Roster {
    /// Build a roster from `(name, activity)` pairs. A repeated name replaces
    /// the earlier activity but keeps its position.
    pub fn new(entries: impl IntoIterator<Item = (String, Activity)>) -> Self {
        let mut roster = Self::default();
        for (name, activity) in entries {
            roster.insert(name, activity);
        }
        roster
    }

    fn insert(&mut self, name: String, activity: Activity) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(name, activity)| (name.as_str(), activity))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|(existing, _)| existing == name).map(|(_, activity)| activity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RosterVisitor;

        impl<'de> Visitor<'de> for RosterVisitor {
            type Value = Roster;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Roster, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut roster = Roster { entries: Vec::with_capacity(map.size_hint().unwrap_or(0)) };
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    roster.insert(name, activity);
                }
                Ok(roster)
            }
        }

        deserializer.deserialize_map(RosterVisitor)
    }
}

/// Success body of the signup and removal endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body of the signup and removal endpoints.
///
/// `detail` is usually a string, but validation failures send a list of
/// objects, so it is kept as raw JSON.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The human-readable detail, if the server sent one as a string.
    pub fn detail_text(&self) -> Option<String> {
        self.detail.as_ref().and_then(serde_json::Value::as_str).map(str::to_owned)
    }
}
