use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Accumulated statistics for a single player across every uploaded log.
///
/// # Fields
///
/// * `name` - The player's name, also the key in the `PlayerMap`.
/// * `team` - The team the player was last seen playing for.
/// * `kills` - The sum of kills over every processed log.
/// * `best_team_rank` - The lowest team rank ever associated with the player.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    pub team: String,
    pub kills: u64,
    #[serde(rename = "bestTeamRank")]
    pub best_team_rank: u32,
}

impl PlayerRecord {
    /// Creates a record with no kills, attributed to `team` at `team_rank`.
    pub fn new(name: &str, team: &str, team_rank: u32) -> Self {
        Self {
            name: name.to_owned(),
            team: team.to_owned(),
            kills: 0,
            best_team_rank: team_rank,
        }
    }

    /// Adds `kills` seen while the player was on `team` ranked `team_rank`.
    ///
    /// The team is always overwritten with the latest one, while the rank only
    /// ever improves (gets lower).
    pub fn record_kills(&mut self, kills: u64, team: &str, team_rank: u32) {
        self.kills = self.kills.saturating_add(kills);
        if self.team != team {
            self.team = team.to_owned();
        }
        self.best_team_rank = self.best_team_rank.min(team_rank);
    }
}

/// Every known player, keyed by name.
pub type PlayerMap = BTreeMap<String, PlayerRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_kills_keeps_best_rank_and_latest_team() {
        let mut record = PlayerRecord::new("Ghost", "Alpha", 3);
        record.record_kills(4, "Bravo", 7);
        record.record_kills(2, "Charlie", 1);
        record.record_kills(1, "Delta", 5);

        assert_eq!(record.kills, 7);
        assert_eq!(record.team, "Delta");
        assert_eq!(record.best_team_rank, 1);
    }

    #[test]
    fn test_serializes_rank_with_blob_field_name() {
        let record = PlayerRecord::new("Ghost", "Alpha", 2);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["bestTeamRank"], 2);
        assert_eq!(json["kills"], 0);
        assert!(json.get("best_team_rank").is_none());
    }
}
