use crate::log_parsing::player_record::PlayerRecord;

use serde::Serialize;

/// The top three players of the board. Positions are empty when fewer players are known.
///
/// # Fields
///
/// * `first` - The most valuable player.
/// * `second` - The runner up, if any.
/// * `third` - The third place, if any.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Podium {
    pub first: Option<PlayerRecord>,
    pub second: Option<PlayerRecord>,
    pub third: Option<PlayerRecord>,
}

impl Podium {
    /// Iterates over the occupied positions as `(place, record)`, place starting at 1.
    pub fn places(&self) -> impl Iterator<Item = (usize, &PlayerRecord)> {
        [&self.first, &self.second, &self.third]
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| record.as_ref().map(|record| (index + 1, record)))
    }
}
