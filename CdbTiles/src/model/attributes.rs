//! Per-instance attribute tables.

use glam::Vec3;
use indexmap::IndexMap;

use super::HeadingPitchRoll;
use crate::error::{Error, Result};
use crate::geo::Cartographic;

/// Columnar per-instance attributes keyed by CDB attribute code.
///
/// Every column holds exactly one entry per instance; the instance count is
/// the length of the `CNAM` column. Columns keep their declaration order,
/// which is the order they are encoded in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstancesAttributes {
    pub cnam: Vec<String>,
    pub integer_attributes: IndexMap<String, Vec<i32>>,
    pub double_attributes: IndexMap<String, Vec<f64>>,
    pub string_attributes: IndexMap<String, Vec<String>>,
}

impl InstancesAttributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.cnam.len()
    }

    /// Check that every column has one entry per instance.
    ///
    /// # Errors
    /// Returns [`Error::AttributeColumnLength`] naming the first misaligned column.
    pub fn validate(&self) -> Result<()> {
        let expected = self.instance_count();
        let lengths = self
            .integer_attributes
            .iter()
            .map(|(code, column)| (code, column.len()))
            .chain(self.double_attributes.iter().map(|(code, column)| (code, column.len())))
            .chain(self.string_attributes.iter().map(|(code, column)| (code, column.len())));

        for (code, actual) in lengths {
            if actual != expected {
                return Err(Error::AttributeColumnLength {
                    column: code.clone(),
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Check that every selected index refers to an instance of this table.
    ///
    /// # Errors
    /// Returns [`Error::InstanceIndexOutOfRange`] for the first bad index.
    pub fn check_selection(&self, selection: &[usize]) -> Result<()> {
        let count = self.instance_count();
        match selection.iter().find(|&&index| index >= count) {
            Some(&index) => Err(Error::InstanceIndexOutOfRange { index, count }),
            None => Ok(()),
        }
    }
}

/// Placement of model instances inside one tile.
///
/// Positions, scales and orientations are index-aligned with `instances`.
/// Encoders receive a separate selection of indices, so one table can be
/// split across several output files.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelsAttributes {
    pub instances: InstancesAttributes,
    pub cartographic_positions: Vec<Cartographic>,
    pub scales: Vec<Vec3>,
    pub orientations: Vec<HeadingPitchRoll>,
}

impl ModelsAttributes {
    /// Validate the attribute columns and the placement arrays.
    ///
    /// # Errors
    /// Returns [`Error::AttributeColumnLength`] or [`Error::PlacementLength`].
    pub fn validate(&self) -> Result<()> {
        self.instances.validate()?;

        let expected = self.instances.instance_count();
        let arrays = [
            ("positions", self.cartographic_positions.len()),
            ("scales", self.scales.len()),
            ("orientations", self.orientations.len()),
        ];
        for (array, actual) in arrays {
            if actual != expected {
                return Err(Error::PlacementLength {
                    array,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}
