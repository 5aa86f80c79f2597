//! Instanced 3D Model (`.i3dm`) writer.
//!
//! Layout: header, feature table JSON, feature table binary, batch table
//! JSON, batch table binary, glTF URI. Instance positions are stored
//! relative to the tile center (`RTC_CENTER`) as 32-bit floats.

use std::io::Write;

use serde_json::json;

use super::batch_table::BatchTable;
use super::header::I3dmHeader;
use crate::config::TilesConfig;
use crate::error::{Result, checked_u32};
use crate::geo::BoundingRegion;
use crate::model::ModelsAttributes;
use crate::utils::{ByteBuffer, pad_json, round_up};

/// Bytes per `VEC3` of `f32`.
const VEC3_SIZE: usize = 12;

/// `gltfFormat` value for a glTF referenced by URI.
const GLTF_FORMAT_URI: u32 = 0;

/// Write one I3DM containing the instances in `selection`, in that order.
///
/// `gltf_uri` is the external model every instance refers to, and
/// `bound_region` the region of the owning tile whose center becomes the RTC
/// origin. Positions are placed on `config.ellipsoid`. Returns the
/// container's byte length.
pub fn write_i3dm<W: Write>(
    writer: &mut W,
    gltf_uri: &str,
    models: &ModelsAttributes,
    bound_region: &BoundingRegion,
    selection: &[usize],
    config: &TilesConfig,
) -> Result<u32> {
    config.validate()?;
    models.validate()?;
    models.instances.check_selection(selection)?;

    let ellipsoid = &config.ellipsoid;
    let center = ellipsoid.cartographic_to_cartesian(&bound_region.rectangle().center());

    let array_size = selection.len() * VEC3_SIZE;
    let position_offset = 0;
    let scale_offset = position_offset + array_size;
    let normal_up_offset = scale_offset + array_size;
    let normal_right_offset = normal_up_offset + array_size;

    let mut feature_table_json = serde_json::to_string(&json!({
        "INSTANCES_LENGTH": selection.len(),
        "RTC_CENTER": [center.x, center.y, center.z],
        "POSITION": { "byteOffset": position_offset },
        "SCALE_NON_UNIFORM": { "byteOffset": scale_offset },
        "NORMAL_UP": { "byteOffset": normal_up_offset },
        "NORMAL_RIGHT": { "byteOffset": normal_right_offset },
    }))?;
    pad_json(&mut feature_table_json, I3dmHeader::SIZE);

    let mut feature_table = ByteBuffer::zeroed(round_up(4 * array_size, 8));
    for (i, &instance) in selection.iter().enumerate() {
        let world_position =
            ellipsoid.cartographic_to_cartesian(&models.cartographic_positions[instance]);
        let frame = models.orientations[instance].local_frame(world_position, ellipsoid);
        let normal_up = frame.y_axis.truncate().normalize();
        let normal_right = frame.x_axis.truncate().normalize();

        let slot = i * VEC3_SIZE;
        feature_table.write_vec3_at(position_offset + slot, (world_position - center).as_vec3())?;
        feature_table.write_vec3_at(scale_offset + slot, models.scales[instance])?;
        feature_table.write_vec3_at(normal_up_offset + slot, normal_up.as_vec3())?;
        feature_table.write_vec3_at(normal_right_offset + slot, normal_right.as_vec3())?;
    }

    let batch_table = BatchTable::build(Some(&models.instances), selection)?;

    let mut uri = gltf_uri.to_string();
    pad_json(&mut uri, 0);

    let total = I3dmHeader::SIZE
        + feature_table_json.len()
        + feature_table.len()
        + batch_table.json.len()
        + batch_table.binary.len()
        + uri.len();

    let header = I3dmHeader {
        byte_length: checked_u32("i3dm", total)?,
        feature_table_json_byte_length: checked_u32("i3dm feature table JSON", feature_table_json.len())?,
        feature_table_bin_byte_length: checked_u32("i3dm feature table", feature_table.len())?,
        batch_table_json_byte_length: checked_u32("i3dm batch table JSON", batch_table.json.len())?,
        batch_table_bin_byte_length: checked_u32("i3dm batch table", batch_table.binary.len())?,
        gltf_format: GLTF_FORMAT_URI,
    };

    header.write(writer)?;
    writer.write_all(feature_table_json.as_bytes())?;
    writer.write_all(feature_table.as_slice())?;
    writer.write_all(batch_table.json.as_bytes())?;
    writer.write_all(&batch_table.binary)?;
    writer.write_all(uri.as_bytes())?;

    tracing::debug!(
        "Wrote i3dm: {} instances of '{}', {} bytes",
        selection.len(),
        gltf_uri,
        header.byte_length
    );

    Ok(header.byte_length)
}
