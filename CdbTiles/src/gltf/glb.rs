//! Binary glTF (GLB) export.
//!
//! Buffer 0 becomes the BIN chunk; any further buffers are embedded as
//! base64 data URIs, since a GLB container holds a single binary chunk.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::types::GltfDocument;
use crate::error::{Result, checked_u32};

const GLB_MAGIC: &[u8; 4] = b"glTF";
const GLB_VERSION: u32 = 2;
const GLB_HEADER_SIZE: usize = 12;
const CHUNK_HEADER_SIZE: usize = 8;
const CHUNK_JSON: u32 = 0x4E4F534A; // "JSON"
const CHUNK_BIN: u32 = 0x004E4942; // "BIN\0"

const DATA_URI_PREFIX: &str = "data:application/octet-stream;base64,";

/// Serialize a document to GLB bytes.
pub fn to_glb(document: &GltfDocument) -> Result<Vec<u8>> {
    let mut document = document.clone();
    let bin = prepare_buffers(&mut document);

    let json = serde_json::to_string(&document)?;
    let json_bytes = json.as_bytes();

    let json_padding = (4 - (json_bytes.len() % 4)) % 4;
    let json_chunk_len = json_bytes.len() + json_padding;

    let bin_padding = (4 - (bin.len() % 4)) % 4;
    let bin_chunk_len = bin.len() + bin_padding;
    let has_bin = !bin.is_empty();

    let mut total_len = GLB_HEADER_SIZE + CHUNK_HEADER_SIZE + json_chunk_len;
    if has_bin {
        total_len += CHUNK_HEADER_SIZE + bin_chunk_len;
    }

    let mut output = Vec::with_capacity(total_len);

    // GLB header
    output.extend_from_slice(GLB_MAGIC);
    output.extend_from_slice(&GLB_VERSION.to_le_bytes());
    output.extend_from_slice(&checked_u32("glb", total_len)?.to_le_bytes());

    // JSON chunk
    output.extend_from_slice(&checked_u32("glb JSON chunk", json_chunk_len)?.to_le_bytes());
    output.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    output.extend_from_slice(json_bytes);
    output.extend(std::iter::repeat_n(b' ', json_padding));

    // Binary chunk
    if has_bin {
        output.extend_from_slice(&checked_u32("glb BIN chunk", bin_chunk_len)?.to_le_bytes());
        output.extend_from_slice(&CHUNK_BIN.to_le_bytes());
        output.extend_from_slice(&bin);
        output.extend(std::iter::repeat_n(0u8, bin_padding));
    }

    Ok(output)
}

/// Refresh buffer lengths, embed secondary buffers, and return the BIN payload.
fn prepare_buffers(document: &mut GltfDocument) -> Vec<u8> {
    let mut bin = Vec::new();
    for (index, buffer) in document.buffers.iter_mut().enumerate() {
        buffer.byte_length = buffer.data.len();
        if index == 0 {
            buffer.uri = None;
            bin = std::mem::take(&mut buffer.data);
        } else if buffer.uri.is_none() {
            buffer.uri = Some(format!("{DATA_URI_PREFIX}{}", STANDARD.encode(&buffer.data)));
        }
    }
    bin
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{ByteOrder, LittleEndian};
    use serde_json::Value;

    fn json_chunk(glb: &[u8]) -> Value {
        let len = LittleEndian::read_u32(&glb[12..16]) as usize;
        serde_json::from_slice(&glb[20..20 + len]).unwrap()
    }

    #[test]
    fn test_glb_layout() {
        let mut document = GltfDocument::new();
        document.push_buffer(vec![1, 2, 3, 4, 5]);

        let glb = to_glb(&document).unwrap();
        assert_eq!(&glb[0..4], b"glTF");
        assert_eq!(LittleEndian::read_u32(&glb[4..8]), 2);
        assert_eq!(LittleEndian::read_u32(&glb[8..12]) as usize, glb.len());

        let json_len = LittleEndian::read_u32(&glb[12..16]) as usize;
        assert_eq!(json_len % 4, 0);
        let bin_start = 20 + json_len;
        assert_eq!(LittleEndian::read_u32(&glb[bin_start..]), 8);
        assert_eq!(LittleEndian::read_u32(&glb[bin_start + 4..]), CHUNK_BIN);
        assert_eq!(&glb[bin_start + 8..bin_start + 13], &[1, 2, 3, 4, 5]);

        let json = json_chunk(&glb);
        assert_eq!(json["asset"]["version"], "2.0");
        assert_eq!(json["buffers"][0]["byteLength"], 5);
        assert!(json["buffers"][0].get("uri").is_none());
    }

    #[test]
    fn test_secondary_buffers_are_embedded() {
        let mut document = GltfDocument::new();
        document.push_buffer(vec![0; 4]);
        document.push_buffer(vec![0xFF, 0x00]);

        let json = json_chunk(&to_glb(&document).unwrap());
        assert_eq!(
            json["buffers"][1]["uri"],
            format!("{DATA_URI_PREFIX}{}", STANDARD.encode([0xFFu8, 0x00]))
        );
        assert_eq!(json["buffers"][1]["byteLength"], 2);
    }

    #[test]
    fn test_no_bin_chunk_without_buffers() {
        let glb = to_glb(&GltfDocument::new()).unwrap();
        let json_len = LittleEndian::read_u32(&glb[12..16]) as usize;
        assert_eq!(glb.len(), 20 + json_len);
    }
}
