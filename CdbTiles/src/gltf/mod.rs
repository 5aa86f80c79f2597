//! glTF 2.0 document model and binary export.
//!
//! The document is built upstream by the mesh builder; this crate only
//! decorates it with tile metadata and serializes it.

mod glb;
mod types;
mod writer;

pub use glb::to_glb;
pub use types::{
    Extensions, GltfAccessor, GltfAsset, GltfBuffer, GltfBufferView, GltfDocument, GltfMesh,
    GltfNode, GltfPrimitive, GltfScene,
};
pub use writer::write_glb;
