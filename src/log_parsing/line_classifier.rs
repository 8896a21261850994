use crate::log_parsing::line_event::LineEvent;

use rayon::prelude::{ParallelIterator, ParallelString};
use regex::Regex;
use std::sync::LazyLock;

const TEAM_PREFIX: &str = "TeamName:";
const PLAYER_PREFIX: &str = "NAME:";
const BYTE_ORDER_MARK: char = '\u{FEFF}';

static TEAM_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TeamName:\s(.+?)\s+Rank:").expect("valid team name regex"));
static TEAM_RANK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Rank:\s+([0-9]+)").expect("valid team rank regex"));
static PLAYER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"NAME:\s(.+?)\s+ID:").expect("valid player name regex"));
static PLAYER_KILLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"KILL:\s+([0-9]+)").expect("valid kill regex"));

/// Classifies every line of a log, in order, using the current rayon pool.
///
/// Lines are trimmed of whitespace and byte order marks before
/// classification. The returned events keep the order of the lines they came
/// from, which the accumulation depends on.
///
/// # Arguments
///
/// * `log_text` - The full content of an uploaded log.
///
/// # Returns
///
/// A `Vec<LineEvent>` with one event per line of `log_text`.
pub fn classify_lines(log_text: &str) -> Vec<LineEvent> {
    log_text
        .par_lines()
        .map(|line| classify(trim_line(line)))
        .collect()
}

/// Classifies a single, already trimmed, log line.
///
/// The line is routed by its prefix first. A `TeamName:` line always yields a
/// `TeamHeader`, even if neither of its fields can be extracted. A `NAME:`
/// line needs both its name and its kill count, otherwise it is reported as
/// `MalformedPlayer`.
///
/// # Arguments
///
/// * `line` - The trimmed line.
///
/// # Returns
///
/// The `LineEvent` describing the line.
pub fn classify(line: &str) -> LineEvent {
    if line.starts_with(TEAM_PREFIX) {
        return LineEvent::TeamHeader {
            name: capture_text(&TEAM_NAME, line),
            rank: capture_rank(line),
        };
    }

    if line.starts_with(PLAYER_PREFIX) {
        return match (
            capture_text(&PLAYER_NAME, line),
            capture_number(&PLAYER_KILLS, line),
        ) {
            (Some(name), Some(kills)) => LineEvent::PlayerStat { name, kills },
            _ => LineEvent::MalformedPlayer,
        };
    }

    LineEvent::Ignored
}

/// Trims whitespace and any byte order mark an editor left on the line.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Returns the first capture group of `pattern` in `line`, trimmed.
fn capture_text(pattern: &Regex, line: &str) -> Option<String> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_owned())
}

/// Parses the team rank. A rank too large for `u32` saturates, so it stays worse than any real rank.
fn capture_rank(line: &str) -> Option<u32> {
    TEAM_RANK
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().parse().unwrap_or(u32::MAX))
}

/// Parses the first capture group of `pattern` in `line`. Overflowing digit runs count as no match.
fn capture_number<T: std::str::FromStr>(pattern: &Regex, line: &str) -> Option<T> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
