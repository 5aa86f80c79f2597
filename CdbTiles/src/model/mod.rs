//! In-memory values handed to the encoders by the tile tree builder.

mod attributes;
mod orientation;
mod tile;

pub use attributes::{InstancesAttributes, ModelsAttributes};
pub use orientation::HeadingPitchRoll;
pub use tile::{Tile, Tileset};
