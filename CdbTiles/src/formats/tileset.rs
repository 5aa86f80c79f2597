//! Tileset hierarchy JSON (`tileset.json`).
//!
//! Geometric error starts at the configured maximum for the root and halves
//! at every level; leaves always report 0. Documents are written compactly
//! and followed by a newline.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{Map, Value, json};

use crate::config::TilesConfig;
use crate::error::{Error, Result};
use crate::geo::BoundingRegion;
use crate::model::{Tile, Tileset};

/// 3D Tiles version written to `asset.version`.
pub const TILESET_VERSION: &str = "1.0";

/// Extension declared by combined tilesets whose children reference glTF content.
pub const CONTENT_GLTF_EXTENSION: &str = "3DTILES_content_gltf";

/// Refinement strategy of a tileset root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefineMode {
    /// Children replace their parent when refined.
    #[default]
    Replace,
    /// Children are rendered in addition to their parent.
    Add,
}

impl RefineMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Replace => "REPLACE",
            Self::Add => "ADD",
        }
    }
}

fn bounding_volume(region: &BoundingRegion) -> Value {
    json!({ "region": region.to_region_array() })
}

/// Render `tile` and its present descendants.
///
/// `geometric_error` applies to `tile` itself unless it is a leaf; children
/// receive half of it.
#[must_use]
pub fn tile_to_json(tile: &Tile, geometric_error: f64) -> Value {
    let mut object = Map::new();
    object.insert("boundingVolume".to_string(), bounding_volume(&tile.bound_region));

    if let Some(uri) = &tile.custom_content_uri {
        object.insert("content".to_string(), json!({ "uri": uri }));
    }

    if tile.is_leaf() {
        object.insert("geometricError".to_string(), Value::from(0.0));
    } else {
        object.insert("geometricError".to_string(), Value::from(geometric_error));
        let children: Vec<Value> = tile
            .present_children()
            .map(|child| tile_to_json(child, geometric_error / 2.0))
            .collect();
        object.insert("children".to_string(), Value::Array(children));
    }

    Value::Object(object)
}

fn finish<W: Write>(writer: &mut W, document: &Value) -> Result<()> {
    serde_json::to_writer(&mut *writer, document)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Write `tileset` as a tileset JSON document.
///
/// Writes nothing when the tileset has no root. Returns whether a document
/// was written.
pub fn write_tileset_json<W: Write>(
    writer: &mut W,
    tileset: &Tileset,
    refine: RefineMode,
    config: &TilesConfig,
) -> Result<bool> {
    config.validate()?;
    let Some(root) = &tileset.root else {
        tracing::debug!("Tileset has no root; nothing written");
        return Ok(false);
    };

    let mut root_json = Map::new();
    root_json.insert("refine".to_string(), Value::from(refine.as_str()));
    if let Value::Object(fields) = tile_to_json(root, config.max_geometric_error) {
        root_json.extend(fields);
    }
    let geometric_error = root_json
        .get("geometricError")
        .cloned()
        .unwrap_or(Value::from(0.0));

    let document = json!({
        "asset": { "version": TILESET_VERSION },
        "geometricError": geometric_error,
        "root": root_json,
    });
    finish(writer, &document)?;

    tracing::debug!("Wrote tileset JSON with {} refinement", refine.as_str());
    Ok(true)
}

/// Write a tileset that references each tileset in `paths` as a child.
///
/// `regions[i]` is the bounding region of `paths[i]`; the root region is
/// their union. With `use_3d_tiles_next` the document declares
/// `3DTILES_content_gltf` as used and required.
pub fn combine_tileset_json<W, P>(
    writer: &mut W,
    paths: &[P],
    regions: &[BoundingRegion],
    use_3d_tiles_next: bool,
    config: &TilesConfig,
) -> Result<()>
where
    W: Write,
    P: AsRef<Path>,
{
    config.validate()?;
    let Some((first, rest)) = regions.split_first() else {
        return Err(Error::EmptyRegionList);
    };
    if paths.len() != regions.len() {
        return Err(Error::CombineInputMismatch {
            paths: paths.len(),
            regions: regions.len(),
        });
    }

    let max_error = config.max_geometric_error;
    let root_region = rest.iter().fold(*first, |union, region| union.union(region));

    let children: Vec<Value> = paths
        .iter()
        .zip(regions)
        .map(|(path, region)| {
            json!({
                "geometricError": max_error,
                "content": { "uri": path.as_ref().to_string_lossy() },
                "boundingVolume": bounding_volume(region),
            })
        })
        .collect();

    let mut document = Map::new();
    document.insert("asset".to_string(), json!({ "version": TILESET_VERSION }));
    document.insert("geometricError".to_string(), Value::from(max_error));
    if use_3d_tiles_next {
        document.insert("extensionsUsed".to_string(), json!([CONTENT_GLTF_EXTENSION]));
        document.insert("extensionsRequired".to_string(), json!([CONTENT_GLTF_EXTENSION]));
    }
    document.insert(
        "root".to_string(),
        json!({
            "refine": RefineMode::Add.as_str(),
            "geometricError": max_error,
            "boundingVolume": bounding_volume(&root_region),
            "children": children,
        }),
    );
    finish(writer, &Value::Object(document))?;

    tracing::debug!("Combined {} tilesets", paths.len());
    Ok(())
}

/// Write `tileset` to `path` using the refinement from `config`.
///
/// No file is created when the tileset has no root.
pub fn write_tileset_json_file<P: AsRef<Path>>(
    path: P,
    tileset: &Tileset,
    config: &TilesConfig,
) -> Result<bool> {
    if tileset.root.is_none() {
        return Ok(false);
    }
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    let written = write_tileset_json(&mut writer, tileset, config.refine, config)?;
    writer.flush()?;
    Ok(written)
}

/// Combine `paths` into a new tileset file at `path`.
pub fn combine_tileset_json_file<P, C>(
    path: P,
    paths: &[C],
    regions: &[BoundingRegion],
    config: &TilesConfig,
) -> Result<()>
where
    P: AsRef<Path>,
    C: AsRef<Path>,
{
    let mut buffer = Vec::new();
    combine_tileset_json(&mut buffer, paths, regions, config.use_3d_tiles_next, config)?;
    std::fs::write(path.as_ref(), buffer)?;
    Ok(())
}
