//! Batch table encoding shared by the I3DM and B3DM writers.
//!
//! The JSON part carries `CNAM` and every string column inline; integer and
//! double columns go to the binary part, integers first, with the double
//! block starting on an 8-byte boundary.

use serde_json::{Map, Value, json};

use crate::error::Result;
use crate::model::InstancesAttributes;
use crate::utils::{ByteBuffer, pad_json};

/// An encoded batch table: space-padded JSON plus its binary body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchTable {
    pub json: String,
    pub binary: Vec<u8>,
}

impl BatchTable {
    /// Encode the instances picked by `selection`, in selection order.
    ///
    /// With no attribute table the result is empty: a zero-length JSON
    /// section and an empty body, which readers treat as "no batch table".
    pub fn build(attributes: Option<&InstancesAttributes>, selection: &[usize]) -> Result<Self> {
        let Some(attributes) = attributes else {
            return Ok(Self::default());
        };
        attributes.validate()?;
        attributes.check_selection(selection)?;

        let mut table = Map::new();
        table.insert(
            "CNAM".to_string(),
            Value::from(project(&attributes.cnam, selection)),
        );

        for (code, column) in &attributes.string_attributes {
            table.insert(code.clone(), Value::from(project(column, selection)));
        }

        let mut binary = ByteBuffer::new();
        for (code, column) in &attributes.integer_attributes {
            let byte_offset = binary.len();
            for &index in selection {
                binary.append_i32(column[index]);
            }
            table.insert(code.clone(), scalar_reference(byte_offset, "INT"));
        }

        binary.align(8);
        for (code, column) in &attributes.double_attributes {
            let byte_offset = binary.len();
            for &index in selection {
                binary.append_f64(column[index]);
            }
            table.insert(code.clone(), scalar_reference(byte_offset, "DOUBLE"));
        }

        let mut json = serde_json::to_string(&Value::Object(table))?;
        pad_json(&mut json, 0);

        tracing::debug!(
            "Encoded batch table: {} instances, {} JSON bytes, {} binary bytes",
            selection.len(),
            json.len(),
            binary.len()
        );

        Ok(Self {
            json,
            binary: binary.into_inner(),
        })
    }

    /// Encode every instance of the table in table order.
    pub fn for_all(attributes: Option<&InstancesAttributes>) -> Result<Self> {
        let selection: Vec<usize> = attributes
            .map(|a| (0..a.instance_count()).collect())
            .unwrap_or_default();
        Self::build(attributes, &selection)
    }
}

fn project<T: Clone>(column: &[T], selection: &[usize]) -> Vec<T> {
    selection.iter().map(|&index| column[index].clone()).collect()
}

fn scalar_reference(byte_offset: usize, component_type: &str) -> Value {
    json!({
        "byteOffset": byte_offset,
        "type": "SCALAR",
        "componentType": component_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{ByteOrder, LittleEndian};
    use pretty_assertions::assert_eq;

    fn sample() -> InstancesAttributes {
        let mut attributes = InstancesAttributes::new();
        attributes.cnam = vec!["tree".into(), "house".into(), "tower".into()];
        attributes.integer_attributes.insert("NIS".into(), vec![1, 2, 3]);
        attributes.double_attributes.insert("BSR".into(), vec![1.5, 2.5, 3.5]);
        attributes
    }

    #[test]
    fn test_selection_projects_binary_columns() {
        let table = BatchTable::build(Some(&sample()), &[2, 0]).unwrap();

        // Two ints (8 bytes, already aligned) then two doubles.
        assert_eq!(table.binary.len(), 8 + 16);
        assert_eq!(LittleEndian::read_i32(&table.binary[0..4]), 3);
        assert_eq!(LittleEndian::read_i32(&table.binary[4..8]), 1);
        assert_eq!(LittleEndian::read_f64(&table.binary[8..16]), 3.5);
        assert_eq!(LittleEndian::read_f64(&table.binary[16..24]), 1.5);

        let json: Value = serde_json::from_str(table.json.trim_end()).unwrap();
        assert_eq!(json["CNAM"], json!(["tower", "tree"]));
        assert_eq!(
            json["NIS"],
            json!({"byteOffset": 0, "type": "SCALAR", "componentType": "INT"})
        );
        assert_eq!(
            json["BSR"],
            json!({"byteOffset": 8, "type": "SCALAR", "componentType": "DOUBLE"})
        );
    }

    #[test]
    fn test_double_block_starts_aligned() {
        let mut attributes = sample();
        attributes.cnam.truncate(1);
        for column in attributes.integer_attributes.values_mut() {
            column.truncate(1);
        }
        for column in attributes.double_attributes.values_mut() {
            column.truncate(1);
        }

        let table = BatchTable::for_all(Some(&attributes)).unwrap();
        // 4 bytes of ints padded to 8, then one double.
        assert_eq!(table.binary.len(), 16);
        assert_eq!(&table.binary[4..8], &[0, 0, 0, 0]);
        let json: Value = serde_json::from_str(table.json.trim_end()).unwrap();
        assert_eq!(json["BSR"]["byteOffset"], json!(8));
    }

    #[test]
    fn test_string_columns_stay_in_json() {
        let mut attributes = sample();
        attributes
            .string_attributes
            .insert("FACC".into(), vec!["AL015".into(), "AL013".into(), "AL241".into()]);

        let table = BatchTable::build(Some(&attributes), &[1]).unwrap();
        let json: Value = serde_json::from_str(table.json.trim_end()).unwrap();
        assert_eq!(json["FACC"], json!(["AL013"]));
        // Binary only holds NIS (padded) and BSR.
        assert_eq!(table.binary.len(), 16);
    }

    #[test]
    fn test_json_is_padded() {
        let table = BatchTable::for_all(Some(&sample())).unwrap();
        assert_eq!(table.json.len() % 8, 0);
        assert!(table.json.starts_with("{\"CNAM\""));
    }

    #[test]
    fn test_absent_table_is_empty() {
        let table = BatchTable::build(None, &[0, 1]).unwrap();
        assert!(table.json.is_empty());
        assert!(table.binary.is_empty());
    }

    #[test]
    fn test_bad_selection_is_rejected() {
        assert!(BatchTable::build(Some(&sample()), &[5]).is_err());
    }
}
