//! Batched 3D Model (`.b3dm`) writer.
//!
//! Layout: header, feature table JSON, batch table JSON, batch table binary,
//! embedded GLB. The feature table has no binary body.

use std::io::Write;

use serde_json::json;

use super::batch_table::BatchTable;
use super::header::B3dmHeader;
use crate::error::{Result, checked_u32};
use crate::gltf::{GltfDocument, to_glb};
use crate::model::InstancesAttributes;
use crate::utils::{pad_binary, pad_json};

/// Write `document` as a B3DM, batched by the rows of `attributes`.
///
/// Returns the container's byte length.
pub fn write_b3dm<W: Write>(
    writer: &mut W,
    document: &GltfDocument,
    attributes: Option<&InstancesAttributes>,
) -> Result<u32> {
    let batch_table = BatchTable::for_all(attributes)?;

    let mut glb = to_glb(document)?;
    pad_binary(&mut glb);

    let batch_length = attributes.map_or(0, InstancesAttributes::instance_count);
    let mut feature_table_json = serde_json::to_string(&json!({ "BATCH_LENGTH": batch_length }))?;
    pad_json(&mut feature_table_json, B3dmHeader::SIZE);

    let total = B3dmHeader::SIZE
        + feature_table_json.len()
        + batch_table.json.len()
        + batch_table.binary.len()
        + glb.len();

    let header = B3dmHeader {
        byte_length: checked_u32("b3dm", total)?,
        feature_table_json_byte_length: checked_u32("b3dm feature table JSON", feature_table_json.len())?,
        feature_table_bin_byte_length: 0,
        batch_table_json_byte_length: checked_u32("b3dm batch table JSON", batch_table.json.len())?,
        batch_table_bin_byte_length: checked_u32("b3dm batch table", batch_table.binary.len())?,
    };

    header.write(writer)?;
    writer.write_all(feature_table_json.as_bytes())?;
    writer.write_all(batch_table.json.as_bytes())?;
    writer.write_all(&batch_table.binary)?;
    writer.write_all(&glb)?;

    tracing::debug!(
        "Wrote b3dm: {} batches, {} bytes",
        batch_length,
        header.byte_length
    );

    Ok(header.byte_length)
}
