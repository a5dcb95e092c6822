use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single game-play entry as stored in the `play_records` table.
/// `id` and `created_at` are server-assigned; the client never writes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub id: Uuid,
    pub date: NaiveDate,
    pub game_title: String,
    pub cost: u32,
    pub play_count: u32,
    pub created_at: DateTime<Utc>,
}

/// Insert payload. Row-level security checks `user_id` against the caller's
/// session, so it has to match the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRecord {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub game_title: String,
    pub cost: u32,
    pub play_count: u32,
}

/// Update payload: exactly the four mutable fields, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordChanges {
    pub date: NaiveDate,
    pub game_title: String,
    pub cost: u32,
    pub play_count: u32,
}

impl RecordChanges {
    pub fn into_new(self, user_id: Uuid) -> NewRecord {
        NewRecord {
            user_id,
            date: self.date,
            game_title: self.game_title,
            cost: self.cost,
            play_count: self.play_count,
        }
    }
}

/// Raw form input as typed by the user. Parsed at submit; discarded on
/// success or cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub date: String,
    pub game_title: String,
    pub cost: String,
    pub play_count: String,
}

impl RecordDraft {
    /// Validate and convert the draft. The inputs already constrain
    /// cost >= 0 and play_count >= 1, so failures here are about malformed
    /// text rather than out-of-range business values.
    pub fn parse(&self) -> Result<RecordChanges, String> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| format!("'{}' is not a valid date", self.date))?;

        let game_title = self.game_title.trim();
        if game_title.is_empty() {
            return Err("Please enter a game title".to_string());
        }

        let cost: u32 = self
            .cost
            .trim()
            .parse()
            .map_err(|_| "Cost must be a non-negative whole number".to_string())?;

        let play_count: u32 = self
            .play_count
            .trim()
            .parse()
            .map_err(|_| "Play count must be a whole number".to_string())?;
        if play_count < 1 {
            return Err("Play count must be at least 1".to_string());
        }

        Ok(RecordChanges {
            date,
            game_title: game_title.to_string(),
            cost,
            play_count,
        })
    }
}
