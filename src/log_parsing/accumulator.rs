use crate::log_parsing::line_classifier::classify_lines;
use crate::log_parsing::line_event::LineEvent;
use crate::log_parsing::player_record::{PlayerMap, PlayerRecord};
use crate::log_parsing::team_context::TeamContext;

/// Counters describing what a single accumulation pass did.
///
/// # Fields
///
/// * `team_headers` - Number of `TeamName:` lines seen.
/// * `player_lines` - Number of player lines folded into the map.
/// * `dropped_player_lines` - Number of `NAME:` lines discarded for missing fields.
/// * `new_players` - Number of players that were not in the prior map.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseReport {
    pub team_headers: usize,
    pub player_lines: usize,
    pub dropped_player_lines: usize,
    pub new_players: usize,
}

/// Folds a log into previously accumulated player statistics.
///
/// # Arguments
///
/// * `log_text` - The full content of an uploaded log.
/// * `prior` - The players accumulated by earlier uploads.
///
/// # Returns
///
/// The updated `PlayerMap`, containing every player of `prior`.
pub fn accumulate(log_text: &str, prior: PlayerMap) -> PlayerMap {
    accumulate_with_report(log_text, prior).0
}

/// Same as `accumulate`, also returning the `ParseReport` of the pass.
pub fn accumulate_with_report(log_text: &str, prior: PlayerMap) -> (PlayerMap, ParseReport) {
    accumulate_events(classify_lines(log_text), prior)
}

/// Folds classified lines into the player map.
///
/// The team context starts at its defaults for every call. Each team header
/// updates it, and every later player line is attributed to it until the next
/// header. Player lines add their kills, overwrite the team and keep the best
/// (lowest) rank.
///
/// # Arguments
///
/// * `events` - The classified lines, in log order.
/// * `prior` - The players accumulated by earlier uploads.
///
/// # Returns
///
/// A tuple with the updated `PlayerMap` and the `ParseReport` of the pass.
pub fn accumulate_events<I>(events: I, mut prior: PlayerMap) -> (PlayerMap, ParseReport)
where
    I: IntoIterator<Item = LineEvent>,
{
    let mut context = TeamContext::default();
    let mut report = ParseReport::default();

    for event in events {
        match event {
            LineEvent::TeamHeader { name, rank } => {
                context.update(name.as_deref(), rank);
                report.team_headers += 1;
            }
            LineEvent::PlayerStat { name, kills } => {
                apply_player_stat(&mut prior, &context, name, kills, &mut report);
            }
            LineEvent::MalformedPlayer => report.dropped_player_lines += 1,
            LineEvent::Ignored => {}
        }
    }

    (prior, report)
}

/// Adds one player line to the map under the current team context.
///
/// # Arguments
///
/// * `players` - The map being accumulated.
/// * `context` - The team in effect for this line.
/// * `name` - The player's name.
/// * `kills` - Kills reported on the line.
/// * `report` - The counters of the current pass.
fn apply_player_stat(
    players: &mut PlayerMap,
    context: &TeamContext,
    name: String,
    kills: u64,
    report: &mut ParseReport,
) {
    let record = players.entry(name).or_insert_with_key(|name| {
        report.new_players += 1;
        PlayerRecord::new(name, &context.team_name, context.team_rank)
    });
    record.record_kills(kills, &context.team_name, context.team_rank);
    report.player_lines += 1;
}
