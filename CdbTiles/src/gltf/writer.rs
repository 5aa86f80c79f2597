//! Standalone GLB tile content.

use std::io::Write;

use super::glb::to_glb;
use super::types::GltfDocument;
use crate::error::{Result, checked_u32};
use crate::metadata::add_feature_metadata;
use crate::model::InstancesAttributes;
use crate::utils::pad_binary;

/// Write `document` as a GLB with `EXT_feature_metadata` for `attributes`.
///
/// The caller's document is left untouched. The output is zero-padded to
/// 8 bytes so it can sit inside a composite tile. Returns the bytes written.
pub fn write_glb<W: Write>(
    writer: &mut W,
    document: &GltfDocument,
    attributes: Option<&InstancesAttributes>,
) -> Result<u32> {
    let mut document = document.clone();
    add_feature_metadata(&mut document, attributes)?;

    let mut glb = to_glb(&document)?;
    pad_binary(&mut glb);
    let length = checked_u32("glb", glb.len())?;

    writer.write_all(&glb)?;

    tracing::debug!("Wrote glb: {} meshes, {} bytes", document.meshes.len(), length);

    Ok(length)
}
