//! CLI command for combining tilesets

use std::fs::File;
use std::io::BufReader;
use std::path::{Component, Path, PathBuf};

use serde_json::Value;

use crate::config::TilesConfig;
use crate::error::{Error, Result};
use crate::formats::combine_tileset_json_file;
use crate::geo::BoundingRegion;

/// Combine `children` into a root tileset written to `output`
pub fn execute(
    output: &Path,
    children: &[PathBuf],
    gltf_content: bool,
    max_geometric_error: Option<f64>,
) -> anyhow::Result<()> {
    let mut config = TilesConfig::new().with_3d_tiles_next(gltf_content);
    if let Some(max_geometric_error) = max_geometric_error {
        config = config.with_max_geometric_error(max_geometric_error);
    }
    config.validate()?;

    let output_dir = output.parent().unwrap_or_else(|| Path::new(""));
    let mut uris = Vec::with_capacity(children.len());
    let mut regions = Vec::with_capacity(children.len());
    for child in children {
        regions.push(read_root_region(child)?);
        uris.push(relative_uri(child, output_dir));
    }

    combine_tileset_json_file(output, &uris, &regions, &config)?;

    println!("Combined {} tilesets into {}", children.len(), output.display());
    Ok(())
}

/// Read `root.boundingVolume.region` from an existing tileset file.
pub fn read_root_region(path: &Path) -> Result<BoundingRegion> {
    let document: Value = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    let region = document
        .pointer("/root/boundingVolume/region")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            Error::InvalidTileset(format!(
                "{}: missing root.boundingVolume.region",
                path.display()
            ))
        })?;

    let values: Vec<f64> = region.iter().filter_map(Value::as_f64).collect();
    let values: [f64; 6] = values.try_into().map_err(|_| {
        Error::InvalidTileset(format!(
            "{}: root region must hold six numbers",
            path.display()
        ))
    })?;

    Ok(BoundingRegion::from_region_array(values))
}

/// Express `path` relative to `base` with forward slashes, as tileset URIs are.
///
/// Falls back to the path as given when it does not live under `base`.
pub fn relative_uri(path: &Path, base: &Path) -> String {
    let relative = path
        .strip_prefix(base)
        .ok()
        .map(Path::to_path_buf)
        .or_else(|| {
            let path = path.canonicalize().ok()?;
            let base = base.canonicalize().ok()?;
            path.strip_prefix(base).ok().map(Path::to_path_buf)
        })
        .unwrap_or_else(|| path.to_path_buf());

    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::RootDir => Some(String::new()),
            Component::CurDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
