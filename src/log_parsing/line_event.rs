/// What a single log line means for the accumulation.
///
/// # Variants
///
/// * `TeamHeader` - A `TeamName:` line. Either field may be missing when its
///   pattern did not match; the missing field keeps its previous value.
/// * `PlayerStat` - A well formed `NAME:` line.
/// * `MalformedPlayer` - A `NAME:` line missing its name or kill field. Dropped
///   as a whole, only counted.
/// * `Ignored` - Any other line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    TeamHeader {
        name: Option<String>,
        rank: Option<u32>,
    },
    PlayerStat {
        name: String,
        kills: u64,
    },
    MalformedPlayer,
    Ignored,
}
