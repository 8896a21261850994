use crate::board::board_error::Result;
use crate::board::messages::*;
use crate::config::BoardConfig;
use crate::leaderboard::leaderboard_builder::build_top3;
use crate::log_parsing::accumulator::accumulate_events;
use crate::log_parsing::line_classifier::classify_lines;
use crate::storage::{FileStore, MvpStore};

use actix::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Owner of the accumulated players.
///
/// Every upload, reset and podium request goes through this actor's mailbox,
/// so the load → accumulate → save sequence of one upload never interleaves
/// with another.
///
/// # Fields
///
/// * `store` - Where the accumulated players live between uploads.
/// * `thread_pool` - Pool used to classify the lines of an upload.
pub struct MvpBoard {
    store: Box<dyn MvpStore>,
    thread_pool: ThreadPool,
}

/// Implementation of the `Actor` trait for `MvpBoard`.
impl Actor for MvpBoard {
    type Context = Context<Self>;

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        tracing::debug!("MVP board stopped");
    }
}

impl MvpBoard {
    /// Creates a board over `store`, classifying lines with `parse_threads` threads.
    ///
    /// # Arguments
    ///
    /// * `store` - The store holding previously accumulated players.
    /// * `parse_threads` - Number of threads of the classification pool.
    ///
    /// # Returns
    ///
    /// The new `MvpBoard`, or a `BoardError` if the thread pool cannot be built.
    pub fn new(store: Box<dyn MvpStore>, parse_threads: usize) -> Result<Self> {
        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(parse_threads.max(1))
            .build()?;
        Ok(Self { store, thread_pool })
    }

    /// Opens the file store named by `config` and starts a board over it.
    ///
    /// Must be called from within a running actix system.
    pub fn open(config: &BoardConfig) -> Result<Addr<Self>> {
        let store = FileStore::new(&config.store_dir)?;
        tracing::debug!("Using store {}", store.path().display());
        Ok(Self::new(Box::new(store), config.parse_threads)?.start())
    }
}

/// Builds the podium, but only once something has been uploaded.
///
/// Mirrors the "upload a log file first" guard of the board page: the store
/// is checked with `HasData` before any podium is built.
///
/// # Arguments
///
/// * `board` - Address of the running board.
///
/// # Returns
///
/// * `Ok(Some(snapshot))` - The current podium when players are stored.
/// * `Ok(None)` - If nothing was uploaded since the last reset.
pub async fn podium_if_uploaded(board: &Addr<MvpBoard>) -> Result<Option<PodiumSnapshot>> {
    if !board.send(HasData).await?? {
        return Ok(None);
    }
    Ok(Some(board.send(BuildPodium).await??))
}

/// Handles the `UploadLog` message in the `MvpBoard` actor.
///
/// Loads the stored players, folds the uploaded log into them and saves the
/// result. If loading fails nothing is saved, leaving the store as it was.
impl Handler<UploadLog> for MvpBoard {
    type Result = Result<UploadReport>;

    fn handle(&mut self, msg: UploadLog, _ctx: &mut Context<Self>) -> Self::Result {
        let prior = self.store.load()?;
        let events = self.thread_pool.install(|| classify_lines(&msg.text));
        let (players, parse) = accumulate_events(events, prior);
        self.store.save(&players)?;

        if parse.dropped_player_lines > 0 {
            tracing::warn!(
                "{}: dropped {} malformed player lines",
                msg.source,
                parse.dropped_player_lines
            );
        }
        tracing::info!(
            "{}: {} player lines under {} team headers, {} new players, {} total",
            msg.source,
            parse.player_lines,
            parse.team_headers,
            parse.new_players,
            players.len()
        );

        Ok(UploadReport {
            source: msg.source,
            parse,
            total_players: players.len(),
        })
    }
}

/// Handles the `ResetBoard` message in the `MvpBoard` actor.
impl Handler<ResetBoard> for MvpBoard {
    type Result = Result<()>;

    fn handle(&mut self, _msg: ResetBoard, _ctx: &mut Context<Self>) -> Self::Result {
        self.store.clear()?;
        tracing::info!("MVP data reset");
        Ok(())
    }
}

/// Handles the `BuildPodium` message in the `MvpBoard` actor.
impl Handler<BuildPodium> for MvpBoard {
    type Result = Result<PodiumSnapshot>;

    fn handle(&mut self, _msg: BuildPodium, _ctx: &mut Context<Self>) -> Self::Result {
        let players = self.store.load()?;
        Ok(PodiumSnapshot {
            podium: build_top3(&players),
            total_players: players.len(),
        })
    }
}

/// Handles the `HasData` message in the `MvpBoard` actor.
impl Handler<HasData> for MvpBoard {
    type Result = Result<bool>;

    fn handle(&mut self, _msg: HasData, _ctx: &mut Context<Self>) -> Self::Result {
        Ok(self.store.has_data()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_parsing::team_context::UNKNOWN_TEAM;
    use crate::storage::MemoryStore;

    fn upload(text: &str) -> UploadLog {
        UploadLog {
            source: "test.log".to_owned(),
            text: text.to_owned(),
        }
    }

    fn start_board(store: &MemoryStore) -> Addr<MvpBoard> {
        MvpBoard::new(Box::new(store.clone()), 2).unwrap().start()
    }

    #[actix_rt::test]
    async fn test_upload_persists_accumulated_players() {
        let store = MemoryStore::new();
        let board = start_board(&store);

        let report = board
            .send(upload("TeamName: Red Rank: 1\nNAME: A ID: 1 KILL: 3\nNAME: Bob\n"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(report.total_players, 1);
        assert_eq!(report.parse.dropped_player_lines, 1);
        assert_eq!(store.load().unwrap()["A"].kills, 3);
    }

    #[actix_rt::test]
    async fn test_queued_uploads_all_accumulate() {
        let store = MemoryStore::new();
        let board = start_board(&store);

        let pending: Vec<_> = (0..10)
            .map(|_| board.send(upload("NAME: A ID: 1 KILL: 2\n")))
            .collect();
        for request in pending {
            request.await.unwrap().unwrap();
        }

        let players = store.load().unwrap();
        assert_eq!(players["A"].kills, 20);
        assert_eq!(players["A"].team, UNKNOWN_TEAM);
    }

    #[actix_rt::test]
    async fn test_reset_then_podium_has_no_data() {
        let store = MemoryStore::new();
        let board = start_board(&store);
        board
            .send(upload("NAME: A ID: 1 KILL: 2\n"))
            .await
            .unwrap()
            .unwrap();
        assert!(board.send(HasData).await.unwrap().unwrap());

        board.send(ResetBoard).await.unwrap().unwrap();

        let snapshot = board.send(BuildPodium).await.unwrap().unwrap();
        assert!(snapshot.podium.is_none());
        assert_eq!(snapshot.total_players, 0);
        assert!(!board.send(HasData).await.unwrap().unwrap());
    }

    #[actix_rt::test]
    async fn test_podium_requires_an_upload_first() {
        let store = MemoryStore::new();
        let board = start_board(&store);

        assert!(podium_if_uploaded(&board).await.unwrap().is_none());

        board
            .send(upload("NAME: A ID: 1 KILL: 2\n"))
            .await
            .unwrap()
            .unwrap();
        let snapshot = podium_if_uploaded(&board).await.unwrap().unwrap();
        assert_eq!(snapshot.total_players, 1);
        assert_eq!(snapshot.podium.unwrap().first.unwrap().name, "A");

        board.send(ResetBoard).await.unwrap().unwrap();
        assert!(podium_if_uploaded(&board).await.unwrap().is_none());
    }

    #[actix_rt::test]
    async fn test_podium_reads_prior_store() {
        let store = MemoryStore::with_players(crate::log_parsing::accumulator::accumulate(
            "TeamName: X Rank: 2\nNAME: A ID: 1 KILL: 10\nTeamName: Y Rank: 1\nNAME: B ID: 2 KILL: 10\n",
            Default::default(),
        ));
        let board = start_board(&store);

        let snapshot = board.send(BuildPodium).await.unwrap().unwrap();
        let podium = snapshot.podium.unwrap();

        assert_eq!(podium.first.unwrap().name, "B");
        assert_eq!(podium.second.unwrap().name, "A");
        assert!(podium.third.is_none());
    }
}
