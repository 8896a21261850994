use crate::leaderboard::podium::Podium;
use crate::log_parsing::player_record::PlayerRecord;

use std::fmt::Write;

/// Message shown in place of the podium while nothing has been uploaded.
pub const NO_DATA_MESSAGE: &str = "Please upload a log file first";

/// Renders the podium as text cards, one per occupied place.
///
/// # Arguments
///
/// * `podium` - The podium to render, `None` when there is no data.
///
/// # Returns
///
/// The rendered board, or `NO_DATA_MESSAGE` when there is no podium.
pub fn render(podium: Option<&Podium>) -> String {
    let podium = match podium {
        Some(podium) => podium,
        None => return format!("{NO_DATA_MESSAGE}\n"),
    };

    let mut out = String::from("MATCH MVP\n");
    for (place, record) in podium.places() {
        render_card(&mut out, place, record);
    }
    out
}

fn render_card(out: &mut String, place: usize, record: &PlayerRecord) {
    // Writing into a String never fails.
    let _ = writeln!(out, "#{place} {}", record.name);
    let _ = writeln!(out, "   {}", record.team);
    let _ = writeln!(out, "   Kills: {}", record.kills);
}
