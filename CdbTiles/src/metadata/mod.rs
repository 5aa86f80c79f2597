//! `EXT_feature_metadata` support for glTF tile content.
//!
//! Numeric instance attributes are copied into a new glTF buffer and
//! described by a single class / feature table pair. Meshes that carry a
//! legacy `_BATCHID` attribute have it renamed to `_FEATURE_ID_0` so that
//! vertices index the feature table.
//!
//! Only the first primitive of each mesh is rewritten. CDB models are
//! exported with one primitive per mesh; extra primitives that still carry
//! `_BATCHID` are reported and left alone.

mod dictionary;
mod schema;

pub use dictionary::{AttributeInfo, attribute_dictionary, describe_attribute};
pub use schema::{
    ClassProperty, FeatureIdAttribute, FeatureIds, FeatureMetadata, FeatureTable,
    FeatureTableProperty, MetadataClass, PrimitiveFeatureMetadata, PropertyType,
};

use indexmap::IndexMap;

use crate::error::Result;
use crate::gltf::{GltfDocument, GltfPrimitive};
use crate::model::InstancesAttributes;
use crate::utils::ByteBuffer;

/// Extension identifier used in `extensionsUsed` and extension maps.
pub const EXT_FEATURE_METADATA: &str = "EXT_feature_metadata";

pub const CDB_CLASS_NAME: &str = "CDBClass";
pub const CDB_FEATURE_TABLE_NAME: &str = "CDBFeatureTable";

const BATCH_ID_ATTRIBUTE: &str = "_BATCHID";
const FEATURE_ID_ATTRIBUTE: &str = "_FEATURE_ID_0";

/// Add feature metadata for `attributes` to `document`.
///
/// Does nothing when there is no attribute table. String columns are not
/// part of the metadata; a table with no numeric columns still gets the
/// class and feature table (with no properties) but no new buffer.
pub fn add_feature_metadata(
    document: &mut GltfDocument,
    attributes: Option<&InstancesAttributes>,
) -> Result<()> {
    let Some(attributes) = attributes else {
        return Ok(());
    };
    attributes.validate()?;

    let primitive_extension = serde_json::to_value(PrimitiveFeatureMetadata {
        feature_id_attributes: vec![FeatureIdAttribute {
            feature_table: CDB_FEATURE_TABLE_NAME.to_string(),
            feature_ids: FeatureIds {
                attribute: FEATURE_ID_ATTRIBUTE.to_string(),
            },
        }],
    })?;

    for (mesh_index, mesh) in document.meshes.iter_mut().enumerate() {
        let Some((first, rest)) = mesh.primitives.split_first_mut() else {
            continue;
        };
        if rename_batch_id(first) {
            first
                .extensions
                .insert(EXT_FEATURE_METADATA.to_string(), primitive_extension.clone());
        }
        if rest.iter().any(|p| p.attributes.contains_key(BATCH_ID_ATTRIBUTE)) {
            tracing::warn!(
                "Mesh {} has more than one primitive with {}; only the first is tagged",
                mesh_index,
                BATCH_ID_ATTRIBUTE
            );
        }
    }

    let instance_count = attributes.instance_count();
    let metadata_buffer = document.buffers.len();
    let mut data = ByteBuffer::new();
    let mut class = MetadataClass::default();
    let mut feature_table = FeatureTable {
        class: CDB_CLASS_NAME.to_string(),
        element_count: instance_count,
        properties: IndexMap::new(),
    };

    let integer_columns = attributes.integer_attributes.iter().map(|(code, column)| {
        let bytes: Vec<u8> = column.iter().flat_map(|v| v.to_le_bytes()).collect();
        (code, bytes, PropertyType::Int32)
    });
    let double_columns = attributes.double_attributes.iter().map(|(code, column)| {
        let bytes: Vec<u8> = column.iter().flat_map(|v| v.to_le_bytes()).collect();
        (code, bytes, PropertyType::Float64)
    });

    for (code, bytes, property_type) in integer_columns.chain(double_columns) {
        data.align(8);
        let byte_offset = data.append(&bytes);
        let buffer_view = document.push_buffer_view(metadata_buffer, byte_offset, bytes.len());

        let info = describe_attribute(code);
        class.properties.insert(
            code.clone(),
            ClassProperty {
                name: info.name.to_string(),
                description: info.description.to_string(),
                property_type,
            },
        );
        feature_table
            .properties
            .insert(code.clone(), FeatureTableProperty { buffer_view });
    }

    // glTF buffers must hold at least one byte.
    if !data.is_empty() {
        document.push_buffer(data.into_inner());
    }

    let metadata = FeatureMetadata {
        classes: IndexMap::from([(CDB_CLASS_NAME.to_string(), class)]),
        feature_tables: IndexMap::from([(CDB_FEATURE_TABLE_NAME.to_string(), feature_table)]),
    };
    document
        .extensions
        .insert(EXT_FEATURE_METADATA.to_string(), serde_json::to_value(&metadata)?);
    document.declare_extension_used(EXT_FEATURE_METADATA);

    tracing::debug!(
        "Added {} metadata properties for {} instances",
        metadata.feature_tables[CDB_FEATURE_TABLE_NAME].properties.len(),
        instance_count
    );

    Ok(())
}

/// Move the `_BATCHID` accessor to `_FEATURE_ID_0`. Returns whether it was present.
fn rename_batch_id(primitive: &mut GltfPrimitive) -> bool {
    match primitive.attributes.shift_remove(BATCH_ID_ATTRIBUTE) {
        Some(accessor) => {
            primitive
                .attributes
                .insert(FEATURE_ID_ATTRIBUTE.to_string(), accessor);
            true
        }
        None => false,
    }
}
