//! # `CdbTiles`
//!
//! Encoders that turn CDB-derived tile data into 3D Tiles content.
//!
//! ## Supported Formats
//!
//! - **I3DM** - Instanced models with an RTC-relative feature table
//! - **B3DM** - Batched models with an embedded GLB
//! - **CMPT** - Composite tiles built from any of the above
//! - **GLB** - Standalone glTF content with `EXT_feature_metadata`
//! - **tileset.json** - Tile hierarchies and combined tilesets
//!
//! ## Quick Start
//!
//! ```no_run
//! use cdbtiles::prelude::*;
//!
//! let root = Tile::new(BoundingRegion::new(
//!     GlobeRectangle::from_degrees(-75.0, 40.0, -74.0, 41.0),
//!     0.0,
//!     100.0,
//! ))
//! .with_content_uri("Tiles/0.b3dm");
//!
//! write_tileset_json_file("tileset.json", &Tileset::new(root), &TilesConfig::default())?;
//! # Ok::<(), cdbtiles::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `cdbtiles` command-line binary

pub mod config;
pub mod error;
pub mod formats;
pub mod geo;
pub mod gltf;
pub mod metadata;
pub mod model;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::TilesConfig;
    pub use crate::error::{Error, Result};
    pub use crate::formats::{
        BatchTable, RefineMode, combine_tileset_json, combine_tileset_json_file, write_b3dm,
        write_cmpt, write_i3dm, write_tileset_json, write_tileset_json_file,
    };
    pub use crate::geo::{BoundingRegion, Cartographic, Ellipsoid, GlobeRectangle};
    pub use crate::gltf::{GltfDocument, write_glb};
    pub use crate::metadata::add_feature_metadata;
    pub use crate::model::{HeadingPitchRoll, InstancesAttributes, ModelsAttributes, Tile, Tileset};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
