use crate::leaderboard::podium::Podium;
use crate::log_parsing::player_record::{PlayerMap, PlayerRecord};

/// Builds the MVP podium from the accumulated players.
///
/// Players are ranked by kills, highest first. Equal kills are broken by the
/// best team rank, lowest first. Players tied on both keep the map's
/// iteration order, which for a `PlayerMap` is name order.
///
/// # Arguments
///
/// * `players` - Every accumulated player.
///
/// # Returns
///
/// * `Some(Podium)` - The top three, with empty positions when fewer players exist.
/// * `None` - If there is no player at all.
pub fn build_top3(players: &PlayerMap) -> Option<Podium> {
    if players.is_empty() {
        return None;
    }

    let mut ranked = sort_players_by_kills(players).into_iter();

    Some(Podium {
        first: ranked.next(),
        second: ranked.next(),
        third: ranked.next(),
    })
}

/// Sorts players by kills in descending order, then by best team rank ascending.
///
/// # Arguments
///
/// * `players` - Every accumulated player.
///
/// # Returns
///
/// A `Vec` of cloned `PlayerRecord`s in podium order.
fn sort_players_by_kills(players: &PlayerMap) -> Vec<PlayerRecord> {
    let mut player_vec: Vec<PlayerRecord> = players.values().cloned().collect();

    player_vec.sort_by(|p1, p2| {
        p2.kills
            .cmp(&p1.kills)
            .then_with(|| p1.best_team_rank.cmp(&p2.best_team_rank))
    });

    player_vec
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, kills: u64, rank: u32) -> PlayerRecord {
        PlayerRecord {
            name: name.to_owned(),
            team: format!("Team {rank}"),
            kills,
            best_team_rank: rank,
        }
    }

    fn map_of(records: Vec<PlayerRecord>) -> PlayerMap {
        records
            .into_iter()
            .map(|record| (record.name.clone(), record))
            .collect()
    }

    fn names(podium: &Podium) -> Vec<&str> {
        podium
            .places()
            .map(|(_, record)| record.name.as_str())
            .collect()
    }

    #[test]
    fn test_kills_first_then_rank_breaks_ties() {
        let players = map_of(vec![player("A", 10, 2), player("B", 10, 1), player("C", 12, 5)]);

        let podium = build_top3(&players).unwrap();

        assert_eq!(names(&podium), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_only_three_places_are_kept() {
        let players = map_of(vec![
            player("A", 1, 1),
            player("B", 4, 1),
            player("C", 3, 1),
            player("D", 2, 1),
        ]);

        let podium = build_top3(&players).unwrap();

        assert_eq!(names(&podium), vec!["B", "C", "D"]);
    }

    #[test]
    fn test_fewer_than_three_players_leave_empty_places() {
        let players = map_of(vec![player("Solo", 3, 4)]);

        let podium = build_top3(&players).unwrap();

        assert_eq!(podium.first.as_ref().map(|p| p.name.as_str()), Some("Solo"));
        assert!(podium.second.is_none());
        assert!(podium.third.is_none());
    }

    #[test]
    fn test_empty_map_has_no_podium() {
        assert!(build_top3(&PlayerMap::new()).is_none());
    }

    #[test]
    fn test_full_ties_keep_name_order() {
        let players = map_of(vec![player("Zed", 5, 1), player("Amy", 5, 1)]);

        let podium = build_top3(&players).unwrap();

        assert_eq!(names(&podium), vec!["Amy", "Zed"]);
    }
}
