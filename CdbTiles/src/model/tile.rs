//! Sparse tile tree.

use crate::geo::BoundingRegion;

/// A node of the tile tree.
///
/// `children` is sparse: a `None` slot is a quadrant/octant with no data and
/// is skipped by every consumer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tile {
    pub bound_region: BoundingRegion,
    pub children: Vec<Option<Tile>>,
    pub custom_content_uri: Option<String>,
}

impl Tile {
    #[must_use]
    pub fn new(bound_region: BoundingRegion) -> Self {
        Self {
            bound_region,
            children: Vec::new(),
            custom_content_uri: None,
        }
    }

    #[must_use]
    pub fn with_content_uri(mut self, uri: impl Into<String>) -> Self {
        self.custom_content_uri = Some(uri.into());
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Option<Tile>>) -> Self {
        self.children = children;
        self
    }

    /// Iterate over the children that are present.
    pub fn present_children(&self) -> impl Iterator<Item = &Tile> {
        self.children.iter().flatten()
    }

    /// A tile is a leaf when none of its child slots holds a tile.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.present_children().next().is_none()
    }
}

/// A tile tree; an empty tileset has no root.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tileset {
    pub root: Option<Tile>,
}

impl Tileset {
    #[must_use]
    pub fn new(root: Tile) -> Self {
        Self { root: Some(root) }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self { root: None }
    }
}
