//! `EXT_feature_metadata` schema objects.

use indexmap::IndexMap;
use serde::Serialize;

/// Scene-level extension object.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FeatureMetadata {
    pub classes: IndexMap<String, MetadataClass>,
    #[serde(rename = "featureTables")]
    pub feature_tables: IndexMap<String, FeatureTable>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MetadataClass {
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, ClassProperty>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassProperty {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
}

/// Scalar component type of a metadata property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PropertyType {
    #[serde(rename = "INT32")]
    Int32,
    #[serde(rename = "FLOAT64")]
    Float64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureTable {
    pub class: String,
    #[serde(rename = "elementCount")]
    pub element_count: usize,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, FeatureTableProperty>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureTableProperty {
    #[serde(rename = "bufferView")]
    pub buffer_view: usize,
}

/// Primitive-level extension object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimitiveFeatureMetadata {
    #[serde(rename = "featureIdAttributes")]
    pub feature_id_attributes: Vec<FeatureIdAttribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureIdAttribute {
    #[serde(rename = "featureTable")]
    pub feature_table: String,
    #[serde(rename = "featureIds")]
    pub feature_ids: FeatureIds,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureIds {
    pub attribute: String,
}
