//! 3D Tiles container encoders.
//!
//! # Supported Containers
//!
//! - **I3DM** - Instanced models referencing an external glTF
//! - **B3DM** - Batched models with an embedded GLB
//! - **CMPT** - Composites of any of the above
//! - **tileset.json** - The tile hierarchy

pub mod b3dm;
pub mod batch_table;
pub mod cmpt;
pub mod header;
pub mod i3dm;
pub mod tileset;

pub use b3dm::write_b3dm;
pub use batch_table::BatchTable;
pub use cmpt::write_cmpt;
pub use header::{B3dmHeader, CmptHeader, I3dmHeader, TILE_FORMAT_VERSION};
pub use i3dm::write_i3dm;
pub use tileset::{
    CONTENT_GLTF_EXTENSION, RefineMode, TILESET_VERSION, combine_tileset_json,
    combine_tileset_json_file, tile_to_json, write_tileset_json, write_tileset_json_file,
};
