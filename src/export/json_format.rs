use crate::leaderboard::podium::Podium;
use serde::Serialize;

/// Wrapper structure for serializing a `Podium` with its snapshot metadata.
///
/// # Fields
///
/// * `title` - Heading of the snapshot.
/// * `total_players` - Number of players the podium was picked from.
/// * `podium` - The `Podium` data, flattened into the JSON object.
#[derive(Serialize, Debug)]
pub struct JsonFormat<'a> {
    pub(crate) title: &'static str,
    pub(crate) total_players: usize,
    #[serde(flatten)]
    pub(crate) podium: &'a Podium,
}
