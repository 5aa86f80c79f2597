use byteorder::{ByteOrder, LittleEndian};
use cdbtiles::gltf::{GltfMesh, GltfPrimitive};
use cdbtiles::prelude::*;
use glam::Vec3;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::tempdir;

fn u32_at(bytes: &[u8], offset: usize) -> usize {
    LittleEndian::read_u32(&bytes[offset..offset + 4]) as usize
}

fn tile_region() -> BoundingRegion {
    BoundingRegion::new(
        GlobeRectangle::from_degrees(-118.0, 34.0, -117.0, 35.0),
        0.0,
        500.0,
    )
}

fn models() -> ModelsAttributes {
    let mut instances = InstancesAttributes::new();
    instances.cnam = vec!["tree_a".into(), "tree_b".into(), "tree_c".into()];
    instances.integer_attributes.insert("NIS".into(), vec![1, 2, 3]);
    instances.double_attributes.insert("BSR".into(), vec![1.5, 2.5, 3.5]);
    instances
        .string_attributes
        .insert("MODL".into(), vec!["oak".into(), "pine".into(), "oak".into()]);

    ModelsAttributes {
        instances,
        cartographic_positions: vec![
            Cartographic::from_degrees(-117.9, 34.1, 100.0),
            Cartographic::from_degrees(-117.5, 34.5, 120.0),
            Cartographic::from_degrees(-117.1, 34.9, 140.0),
        ],
        scales: vec![Vec3::ONE; 3],
        orientations: vec![
            HeadingPitchRoll::from_heading(10.0),
            HeadingPitchRoll::from_heading(20.0),
            HeadingPitchRoll::new(30.0, 5.0, -5.0),
        ],
    }
}

fn building() -> GltfDocument {
    let mut document = GltfDocument::new();
    document.push_buffer(vec![0; 48]);
    let mut primitive = GltfPrimitive::default();
    primitive.attributes.insert("POSITION".into(), 0);
    primitive.attributes.insert("_BATCHID".into(), 1);
    document.meshes.push(GltfMesh {
        name: Some("building".into()),
        primitives: vec![primitive],
    });
    document
}

#[test]
fn test_composite_of_every_tile_format() {
    let models = models();
    let config = TilesConfig::default();
    let building = building();

    let mut out = Vec::new();
    let length = write_cmpt(&mut out, 3, |body, index| match index {
        0 => write_i3dm(body, "oak.glb", &models, &tile_region(), &[0, 2], &config),
        1 => write_b3dm(body, &building, Some(&models.instances)),
        _ => write_glb(body, &building, Some(&models.instances)),
    })
    .unwrap();

    assert_eq!(length as usize, out.len());
    assert_eq!(u32_at(&out, 12), 3);

    let mut offset = 16;
    let mut magics = Vec::new();
    while offset < out.len() {
        magics.push(out[offset..offset + 4].to_vec());
        let inner = if &out[offset..offset + 4] == b"glTF" {
            u32_at(&out, offset + 8).next_multiple_of(8)
        } else {
            u32_at(&out, offset + 8)
        };
        assert_eq!(inner % 8, 0);
        offset += inner;
    }
    assert_eq!(offset, out.len());
    assert_eq!(magics, vec![b"i3dm".to_vec(), b"b3dm".to_vec(), b"glTF".to_vec()]);
}

#[test]
fn test_batch_table_selection_example() {
    let table = BatchTable::build(Some(&models().instances), &[2, 0]).unwrap();
    let json: Value = serde_json::from_str(&table.json).unwrap();

    assert_eq!(json["CNAM"], serde_json::json!(["tree_c", "tree_a"]));
    assert_eq!(json["MODL"], serde_json::json!(["oak", "oak"]));
    assert_eq!(json["BSR"]["byteOffset"], 8);
    assert_eq!(LittleEndian::read_i32(&table.binary[0..4]), 3);
    assert_eq!(LittleEndian::read_i32(&table.binary[4..8]), 1);
    assert_eq!(LittleEndian::read_f64(&table.binary[8..16]), 3.5);
    assert_eq!(LittleEndian::read_f64(&table.binary[16..24]), 1.5);
}

#[test]
fn test_glb_metadata_buffer_views() {
    let mut document = building();
    let views_before = document.buffer_views.len();
    let instances = models().instances;
    add_feature_metadata(&mut document, Some(&instances)).unwrap();

    assert_eq!(document.buffer_views.len(), views_before + 2);
    let metadata = &document.extensions["EXT_feature_metadata"];
    assert_eq!(metadata["featureTables"]["CDBFeatureTable"]["elementCount"], 3);
    assert_eq!(metadata["classes"]["CDBClass"]["properties"]["BSR"]["type"], "FLOAT64");
}

#[test]
fn test_tileset_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tileset.json");

    let child = Tile::new(tile_region()).with_content_uri("Tiles/1.cmpt");
    let root = Tile::new(tile_region())
        .with_content_uri("Tiles/0.cmpt")
        .with_children(vec![Some(child), None]);
    let config = TilesConfig::new().with_refine(RefineMode::Add);

    assert!(write_tileset_json_file(&path, &Tileset::new(root), &config).unwrap());

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.ends_with('\n'));
    let json: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["root"]["refine"], "ADD");
    assert_eq!(json["geometricError"], 300000.0);
    assert_eq!(json["root"]["children"][0]["content"]["uri"], "Tiles/1.cmpt");
    assert_eq!(json["root"]["children"][0]["geometricError"], 0.0);
}

#[test]
fn test_empty_tileset_creates_no_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tileset.json");
    assert!(!write_tileset_json_file(&path, &Tileset::empty(), &TilesConfig::default()).unwrap());
    assert!(!path.exists());
}

#[test]
fn test_cli_combine() {
    use cdbtiles::cli::commands::combine;

    let dir = tempdir().unwrap();
    let west = GlobeRectangle::from_degrees(-118.0, 34.0, -117.0, 35.0);
    let east = GlobeRectangle::from_degrees(-116.0, 33.0, -115.0, 34.0);

    let mut children = Vec::new();
    for (name, rectangle) in [("west", west), ("east", east)] {
        let child_dir = dir.path().join(name);
        std::fs::create_dir(&child_dir).unwrap();
        let path = child_dir.join("tileset.json");
        let tileset = Tileset::new(Tile::new(BoundingRegion::new(rectangle, -10.0, 90.0)));
        write_tileset_json_file(&path, &tileset, &TilesConfig::default()).unwrap();
        children.push(path);
    }

    let output = dir.path().join("tileset.json");
    combine::execute(&output, &children, true, None).unwrap();

    let json: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["extensionsRequired"][0], "3DTILES_content_gltf");
    assert_eq!(json["root"]["children"][0]["content"]["uri"], "west/tileset.json");
    assert_eq!(json["root"]["children"][1]["content"]["uri"], "east/tileset.json");

    let union = BoundingRegion::new(west, -10.0, 90.0).union(&BoundingRegion::new(east, -10.0, 90.0));
    let region: Vec<f64> = serde_json::from_value(json["root"]["boundingVolume"]["region"].clone()).unwrap();
    assert_eq!(region, union.to_region_array().to_vec());
}
