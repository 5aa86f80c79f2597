//! Fixed-size container headers.
//!
//! All fields are little-endian `u32`. `byte_length` covers the header plus
//! every section that follows it.

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::Result;

/// Container version written by every encoder.
pub const TILE_FORMAT_VERSION: u32 = 1;

/// Instanced 3D Model header (32 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I3dmHeader {
    pub byte_length: u32,
    pub feature_table_json_byte_length: u32,
    pub feature_table_bin_byte_length: u32,
    pub batch_table_json_byte_length: u32,
    pub batch_table_bin_byte_length: u32,
    /// 0 when the glTF is referenced by URI, 1 when embedded.
    pub gltf_format: u32,
}

impl I3dmHeader {
    pub const MAGIC: [u8; 4] = *b"i3dm";
    pub const SIZE: usize = 32;

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&Self::MAGIC)?;
        writer.write_u32::<LittleEndian>(TILE_FORMAT_VERSION)?;
        writer.write_u32::<LittleEndian>(self.byte_length)?;
        writer.write_u32::<LittleEndian>(self.feature_table_json_byte_length)?;
        writer.write_u32::<LittleEndian>(self.feature_table_bin_byte_length)?;
        writer.write_u32::<LittleEndian>(self.batch_table_json_byte_length)?;
        writer.write_u32::<LittleEndian>(self.batch_table_bin_byte_length)?;
        writer.write_u32::<LittleEndian>(self.gltf_format)?;
        Ok(())
    }
}

/// Batched 3D Model header (28 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct B3dmHeader {
    pub byte_length: u32,
    pub feature_table_json_byte_length: u32,
    pub feature_table_bin_byte_length: u32,
    pub batch_table_json_byte_length: u32,
    pub batch_table_bin_byte_length: u32,
}

impl B3dmHeader {
    pub const MAGIC: [u8; 4] = *b"b3dm";
    pub const SIZE: usize = 28;

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&Self::MAGIC)?;
        writer.write_u32::<LittleEndian>(TILE_FORMAT_VERSION)?;
        writer.write_u32::<LittleEndian>(self.byte_length)?;
        writer.write_u32::<LittleEndian>(self.feature_table_json_byte_length)?;
        writer.write_u32::<LittleEndian>(self.feature_table_bin_byte_length)?;
        writer.write_u32::<LittleEndian>(self.batch_table_json_byte_length)?;
        writer.write_u32::<LittleEndian>(self.batch_table_bin_byte_length)?;
        Ok(())
    }
}

/// Composite tile header (16 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CmptHeader {
    pub byte_length: u32,
    pub tiles_length: u32,
}

impl CmptHeader {
    pub const MAGIC: [u8; 4] = *b"cmpt";
    pub const SIZE: usize = 16;

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&Self::MAGIC)?;
        writer.write_u32::<LittleEndian>(TILE_FORMAT_VERSION)?;
        writer.write_u32::<LittleEndian>(self.byte_length)?;
        writer.write_u32::<LittleEndian>(self.tiles_length)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_sizes_match_written_bytes() {
        let mut out = Vec::new();
        I3dmHeader::default().write(&mut out).unwrap();
        assert_eq!(out.len(), I3dmHeader::SIZE);

        out.clear();
        B3dmHeader::default().write(&mut out).unwrap();
        assert_eq!(out.len(), B3dmHeader::SIZE);

        out.clear();
        CmptHeader::default().write(&mut out).unwrap();
        assert_eq!(out.len(), CmptHeader::SIZE);
    }

    #[test]
    fn test_cmpt_header_layout() {
        let mut out = Vec::new();
        CmptHeader {
            byte_length: 200,
            tiles_length: 2,
        }
        .write(&mut out)
        .unwrap();

        assert_eq!(&out[0..4], b"cmpt");
        assert_eq!(&out[4..8], &1u32.to_le_bytes());
        assert_eq!(&out[8..12], &200u32.to_le_bytes());
        assert_eq!(&out[12..16], &2u32.to_le_bytes());
    }
}
