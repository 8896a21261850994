use thiserror::Error;

/// Errors that may occur while exporting the podium snapshot.
///
/// # Variants
///
/// * `NoData` - There is no podium to export yet.
/// * `Serialization` - An error occurred while serializing the podium.
/// * `FileCreation` - An error occurred while creating the file.
/// * `FileWrite` - An error occurred while writing to the file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export, upload a log first")]
    NoData,

    #[error("failed to serialize podium: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("failed to create export file: {0}")]
    FileCreation(#[source] std::io::Error),

    #[error("failed to write export file: {0}")]
    FileWrite(#[source] std::io::Error),
}
