pub mod export_error;
pub mod json_format;
pub mod podium_exporter;
