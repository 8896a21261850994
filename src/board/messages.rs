use crate::board::board_error::BoardError;
use crate::leaderboard::podium::Podium;
use crate::log_parsing::accumulator::ParseReport;

use actix::prelude::*;

/// Message to fold the text of an uploaded log into the board
#[derive(Message, Debug)]
#[rtype(result = "Result<UploadReport, BoardError>")]
pub struct UploadLog {
    pub source: String,
    pub text: String,
}

/// Outcome of an `UploadLog`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReport {
    pub source: String,
    pub parse: ParseReport,
    pub total_players: usize,
}

/// Message to delete every accumulated player
#[derive(Message, Debug)]
#[rtype(result = "Result<(), BoardError>")]
pub struct ResetBoard;

/// Message to build the current podium
#[derive(Message, Debug)]
#[rtype(result = "Result<PodiumSnapshot, BoardError>")]
pub struct BuildPodium;

/// Podium together with the number of players it was picked from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodiumSnapshot {
    pub podium: Option<Podium>,
    pub total_players: usize,
}

/// Message to check whether anything was uploaded since the last reset
#[derive(Message, Debug)]
#[rtype(result = "Result<bool, BoardError>")]
pub struct HasData;
