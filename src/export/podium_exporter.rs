use crate::export::export_error::ExportError;
use crate::export::json_format::JsonFormat;
use crate::leaderboard::podium::Podium;

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

/// Default file name of an exported snapshot.
pub const DEFAULT_EXPORT_FILE: &str = "match-mvp.json";

const SNAPSHOT_TITLE: &str = "MATCH MVP";

/// Serializes a `Podium` into a pretty JSON string.
///
/// # Arguments
///
/// * `podium` - The `Podium` to be serialized.
/// * `total_players` - Number of players the podium was picked from.
///
/// # Returns
///
/// A `Result` containing the serialized JSON string if successful, or an `ExportError` if serialization fails.
fn generate_json(podium: &Podium, total_players: usize) -> Result<String, ExportError> {
    let wrapper = JsonFormat {
        title: SNAPSHOT_TITLE,
        total_players,
        podium,
    };
    serde_json::to_string_pretty(&wrapper).map_err(ExportError::Serialization)
}

/// Writes a snapshot of the podium to `filename`.
///
/// # Arguments
///
/// * `filename` - The path to the file where the JSON will be written.
/// * `podium` - The podium to export, `None` when nothing was uploaded yet.
/// * `total_players` - Number of players the podium was picked from.
///
/// # Returns
///
/// A `Result` indicating success or failure. Errors are represented by `ExportError`.
pub fn export_podium(
    filename: &Path,
    podium: Option<&Podium>,
    total_players: usize,
) -> Result<(), ExportError> {
    let podium = podium.ok_or(ExportError::NoData)?;
    let json_output = generate_json(podium, total_players)?;

    let file = File::create(filename).map_err(ExportError::FileCreation)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(json_output.as_bytes())
        .map_err(ExportError::FileWrite)?;
    writer.flush().map_err(ExportError::FileWrite)?;

    tracing::info!("Exported podium to {}", filename.display());
    Ok(())
}
