//! Error types for `CdbTiles`

use thiserror::Error;

/// The error type for `CdbTiles` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from the output sink.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ==================== Attribute Table Errors ====================
    /// An attribute column does not hold one entry per instance.
    #[error("attribute column '{column}' has {actual} entries, expected {expected}")]
    AttributeColumnLength {
        /// The attribute code (or `CNAM`).
        column: String,
        /// The instance count of the table.
        expected: usize,
        /// The number of entries found in the column.
        actual: usize,
    },

    /// A selection references an instance the table does not have.
    #[error("instance index {index} out of range (instance count: {count})")]
    InstanceIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The instance count of the table.
        count: usize,
    },

    /// A model placement array is not index-aligned with the attribute table.
    #[error("placement array '{array}' has {actual} entries, expected {expected}")]
    PlacementLength {
        /// Which placement array is misaligned.
        array: &'static str,
        /// The instance count of the attribute table.
        expected: usize,
        /// The number of entries found.
        actual: usize,
    },

    // ==================== Container Errors ====================
    /// A checked write fell outside the buffer.
    #[error("write of {len} bytes at offset {offset} exceeds buffer length {buffer_len}")]
    BufferOutOfBounds {
        /// Write offset.
        offset: usize,
        /// Number of bytes written.
        len: usize,
        /// Current buffer length.
        buffer_len: usize,
    },

    /// A container (or one of its sections) does not fit a `u32` length field.
    #[error("{container} byte length {length} exceeds u32 range")]
    ContainerTooLarge {
        /// The container or section name.
        container: &'static str,
        /// The length that overflowed.
        length: usize,
    },

    /// A composite sub-tile writer reported a length that differs from what it wrote.
    #[error("sub-tile {index} reported {reported} bytes but wrote {written}")]
    SubTileLengthMismatch {
        /// Sub-tile index.
        index: usize,
        /// Length returned by the writer.
        reported: u32,
        /// Bytes actually appended.
        written: usize,
    },

    // ==================== Tileset Errors ====================
    /// `combine_tileset_json` was given no regions.
    #[error("cannot combine tilesets: region list is empty")]
    EmptyRegionList,

    /// Tileset paths and regions are not index-aligned.
    #[error("cannot combine tilesets: {paths} paths but {regions} regions")]
    CombineInputMismatch {
        /// Number of tileset paths.
        paths: usize,
        /// Number of regions.
        regions: usize,
    },

    /// An existing tileset file lacks the data needed to combine it.
    #[error("invalid tileset: {0}")]
    InvalidTileset(String),

    // ==================== Configuration Errors ====================
    /// Configuration value is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A specialized Result type for `CdbTiles` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Convert a section or container length into a `u32` header field.
pub(crate) fn checked_u32(container: &'static str, length: usize) -> Result<u32> {
    u32::try_from(length).map_err(|_| Error::ContainerTooLarge { container, length })
}
