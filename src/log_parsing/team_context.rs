/// Rank given to players seen before any ranked team header. Worse than any real rank.
pub const UNRANKED: u32 = 999;

/// Team name given to players seen before any team header.
pub const UNKNOWN_TEAM: &str = "UNKNOWN TEAM";

/// The team currently in effect while scanning a single log.
///
/// # Fields
///
/// * `team_name` - Name taken from the most recent team header.
/// * `team_rank` - Rank taken from the most recent team header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamContext {
    pub(crate) team_name: String,
    pub(crate) team_rank: u32,
}

impl TeamContext {
    /// Applies a team header. Missing fields leave the current values untouched.
    pub fn update(&mut self, name: Option<&str>, rank: Option<u32>) {
        if let Some(name) = name {
            self.team_name = name.to_owned();
        }
        if let Some(rank) = rank {
            self.team_rank = rank;
        }
    }
}

impl Default for TeamContext {
    fn default() -> Self {
        Self {
            team_name: UNKNOWN_TEAM.to_owned(),
            team_rank: UNRANKED,
        }
    }
}
