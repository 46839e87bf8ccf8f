//! Roster export encoding.
//!
//! Flattens a store snapshot into one record per entity and delegates the
//! tabular encoding to the CSV collaborator. The export always covers the
//! full roster regardless of the active display filter, with quadrants in
//! their fixed enumeration order and entities in insertion order. The
//! artifact carries both the raw bytes (for a direct download response) and
//! a base64 `data:` URI (for an in-page download link).

use crate::errors::CoreError;
use crate::store::Snapshot;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use quadra_types::ExportArtifact;
use serde::Serialize;

/// Download filename offered to the client.
pub const EXPORT_FILENAME: &str = "company_list.csv";
/// Media type of the encoded document.
pub const EXPORT_MEDIA_TYPE: &str = "text/csv";

#[derive(Serialize)]
struct ExportRecord<'a> {
    #[serde(rename = "Company")]
    company: &'a str,
    #[serde(rename = "Quadrant")]
    quadrant: &'a str,
    #[serde(rename = "Dual Use")]
    dual_use: bool,
}

/// Encode the full roster as CSV, header row first.
pub fn csv_bytes(snapshot: &Snapshot) -> Result<Vec<u8>, CoreError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    // Written explicitly so an empty roster still exports a header row.
    writer.write_record(["Company", "Quadrant", "Dual Use"])?;
    for (quadrant, entities) in snapshot.iter() {
        for entity in entities {
            writer.serialize(ExportRecord {
                company: &entity.name,
                quadrant: quadrant.label(),
                dual_use: entity.dual_use,
            })?;
        }
    }
    writer
        .into_inner()
        .map_err(|e| CoreError::Export(e.to_string()))
}

/// Build the downloadable export artifact for a snapshot.
pub fn export_artifact(snapshot: &Snapshot) -> Result<ExportArtifact, CoreError> {
    let bytes = csv_bytes(snapshot)?;
    Ok(ExportArtifact {
        filename: EXPORT_FILENAME.to_string(),
        media_type: EXPORT_MEDIA_TYPE.to_string(),
        data_uri: format!("data:{};base64,{}", EXPORT_MEDIA_TYPE, BASE64.encode(&bytes)),
    })
}
