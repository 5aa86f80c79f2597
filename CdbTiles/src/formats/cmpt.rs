//! Composite tile (`.cmpt`) writer.
//!
//! Sub-tiles are encoded into memory first so the header can be written
//! with its final byte length in a single pass over the sink.

use std::io::Write;

use super::header::CmptHeader;
use crate::error::{Error, Result, checked_u32};

/// Write a composite of `tile_count` sub-tiles.
///
/// `write_tile(body, index)` appends sub-tile `index` to `body` and returns
/// the number of bytes it appended, as the I3DM/B3DM/GLB writers do.
/// Returns the composite's byte length.
pub fn write_cmpt<W, F>(writer: &mut W, tile_count: u32, mut write_tile: F) -> Result<u32>
where
    W: Write,
    F: FnMut(&mut Vec<u8>, usize) -> Result<u32>,
{
    let mut body = Vec::new();
    for index in 0..tile_count as usize {
        let start = body.len();
        let reported = write_tile(&mut body, index)?;
        let written = body.len() - start;
        if reported as usize != written {
            return Err(Error::SubTileLengthMismatch {
                index,
                reported,
                written,
            });
        }
    }

    let header = CmptHeader {
        byte_length: checked_u32("cmpt", CmptHeader::SIZE + body.len())?,
        tiles_length: tile_count,
    };
    header.write(writer)?;
    writer.write_all(&body)?;

    tracing::debug!("Wrote cmpt: {} tiles, {} bytes", tile_count, header.byte_length);

    Ok(header.byte_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{ByteOrder, LittleEndian};

    #[test]
    fn test_lengths_add_up() {
        let sizes = [120usize, 64];
        let mut out = Vec::new();
        let length = write_cmpt(&mut out, 2, |body, index| {
            body.extend(std::iter::repeat_n(index as u8, sizes[index]));
            Ok(sizes[index] as u32)
        })
        .unwrap();

        assert_eq!(length, 200);
        assert_eq!(out.len(), 200);
        assert_eq!(&out[0..4], b"cmpt");
        assert_eq!(LittleEndian::read_u32(&out[4..8]), 1);
        assert_eq!(LittleEndian::read_u32(&out[8..12]), 200);
        assert_eq!(LittleEndian::read_u32(&out[12..16]), 2);
        assert_eq!(out[16], 0);
        assert_eq!(out[16 + 120], 1);
    }

    #[test]
    fn test_empty_composite() {
        let mut out = Vec::new();
        let length = write_cmpt(&mut out, 0, |_, _| Ok(0)).unwrap();
        assert_eq!(length, 16);
        assert_eq!(out.len(), 16);
    }

    #[test]
    fn test_misreported_length_is_rejected() {
        let mut out = Vec::new();
        let err = write_cmpt(&mut out, 1, |body, _| {
            body.extend_from_slice(&[0; 8]);
            Ok(16)
        })
        .unwrap_err();

        assert!(matches!(
            err,
            Error::SubTileLengthMismatch {
                index: 0,
                reported: 16,
                written: 8
            }
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_sub_tile_error_propagates() {
        let mut out = Vec::new();
        let result = write_cmpt(&mut out, 3, |_, index| {
            Err(Error::InstanceIndexOutOfRange { index, count: 0 })
        });
        assert!(matches!(result, Err(Error::InstanceIndexOutOfRange { index: 0, .. })));
    }
}
