//! Core glTF 2.0 structure types.
//!
//! Only what tile content needs is typed; materials and other objects the
//! encoders never touch are carried as raw JSON values.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Per-object extension map (`"extensions": { "EXT_...": {...} }`).
pub type Extensions = IndexMap<String, Value>;

/// Asset metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GltfAsset {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
}

impl Default for GltfAsset {
    fn default() -> Self {
        Self {
            version: "2.0".to_string(),
            generator: Some(format!("cdbtiles {}", crate::VERSION)),
        }
    }
}

/// Scene definition
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GltfScene {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<usize>,
}

/// Node in the scene graph
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GltfNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<[f64; 16]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<[f64; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<[f64; 3]>,
}

/// Mesh definition
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GltfMesh {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub primitives: Vec<GltfPrimitive>,
}

/// Mesh primitive (geometry + material)
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GltfPrimitive {
    /// Attribute semantic -> accessor index.
    pub attributes: IndexMap<String, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indices: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<u32>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: Extensions,
}

/// Accessor for typed buffer data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GltfAccessor {
    #[serde(rename = "bufferView", skip_serializing_if = "Option::is_none")]
    pub buffer_view: Option<usize>,
    #[serde(rename = "byteOffset", skip_serializing_if = "Option::is_none")]
    pub byte_offset: Option<usize>,
    #[serde(rename = "componentType")]
    pub component_type: u32,
    pub count: usize,
    #[serde(rename = "type")]
    pub accessor_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<bool>,
}

/// Buffer view (slice of a buffer)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GltfBufferView {
    pub buffer: usize,
    #[serde(rename = "byteOffset")]
    pub byte_offset: usize,
    #[serde(rename = "byteLength")]
    pub byte_length: usize,
    #[serde(rename = "byteStride", skip_serializing_if = "Option::is_none")]
    pub byte_stride: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
}

/// Binary buffer
///
/// `data` holds the payload; `byte_length` is kept in step with it by
/// [`GltfDocument::push_buffer`] and refreshed on export.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GltfBuffer {
    #[serde(rename = "byteLength")]
    pub byte_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip)]
    pub data: Vec<u8>,
}

/// Complete glTF document
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GltfDocument {
    pub asset: GltfAsset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scenes: Vec<GltfScene>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<GltfNode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub meshes: Vec<GltfMesh>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub accessors: Vec<GltfAccessor>,
    #[serde(rename = "bufferViews", skip_serializing_if = "Vec::is_empty")]
    pub buffer_views: Vec<GltfBufferView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buffers: Vec<GltfBuffer>,
    #[serde(rename = "extensionsUsed", skip_serializing_if = "Vec::is_empty")]
    pub extensions_used: Vec<String>,
    #[serde(rename = "extensionsRequired", skip_serializing_if = "Vec::is_empty")]
    pub extensions_required: Vec<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: Extensions,
}

impl GltfDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a buffer, returning its index.
    pub fn push_buffer(&mut self, data: Vec<u8>) -> usize {
        let index = self.buffers.len();
        self.buffers.push(GltfBuffer {
            byte_length: data.len(),
            uri: None,
            data,
        });
        index
    }

    /// Append a buffer view, returning its index.
    pub fn push_buffer_view(&mut self, buffer: usize, byte_offset: usize, byte_length: usize) -> usize {
        let index = self.buffer_views.len();
        self.buffer_views.push(GltfBufferView {
            buffer,
            byte_offset,
            byte_length,
            byte_stride: None,
            target: None,
        });
        index
    }

    /// Append an accessor, returning its index.
    pub fn push_accessor(&mut self, accessor: GltfAccessor) -> usize {
        let index = self.accessors.len();
        self.accessors.push(accessor);
        index
    }

    /// Add `name` to `extensionsUsed` unless it is already listed.
    pub fn declare_extension_used(&mut self, name: &str) {
        if !self.extensions_used.iter().any(|used| used == name) {
            self.extensions_used.push(name.to_string());
        }
    }
}
