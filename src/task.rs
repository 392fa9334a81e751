//! Task record and identifier handling.
//!
//! A `Task` carries exactly the four fields persisted for it. Its identifier is not a
//! field: it is the key under which the task sits in the store's map.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::Status;

/// Identifier of a task. Serialized as a decimal string key in the task file.
pub type TaskId = u64;

/// One tracked unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Task {
    pub description: String,
    pub status: Status,
    #[serde(with = "rfc3339")]
    pub created_at: DateTime<FixedOffset>,
    #[serde(with = "rfc3339")]
    pub updated_at: DateTime<FixedOffset>,
}

/// Timestamps always carry a numeric offset (`+00:00`, never `Z`).
mod rfc3339 {
    use chrono::{DateTime, FixedOffset, SecondsFormat};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<FixedOffset>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, false))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw).map_err(de::Error::custom)
    }
}

impl Task {
    /// Create a `Todo` task whose created and updated times are both `now`.
    pub fn new(description: String, now: DateTime<FixedOffset>) -> Self {
        Task {
            description,
            status: Status::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`. The new value is always later than the old one.
    pub fn touch(&mut self, now: DateTime<FixedOffset>) {
        self.updated_at = now.max(self.updated_at + Duration::nanoseconds(1));
    }
}

/// Current time in UTC, carrying an explicit `+00:00` offset when serialized.
pub fn now() -> DateTime<FixedOffset> {
    Utc::now().into()
}

/// Parse the decimal text of an identifier.
///
/// Only the canonical form is accepted: ASCII digits with no sign and no leading zero
/// (except `0` itself). That form is exactly what the task file uses as keys.
pub fn parse_task_id(raw: &str) -> Option<TaskId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if raw.len() > 1 && raw.starts_with('0') {
        return None;
    }
    raw.parse().ok()
}
