// src/data.rs

use crate::model::{Unit, UnitId};

/// Loads a unit catalog from the YAML embedded in the binary.
/// The data is trusted; a parse or consistency failure aborts startup.
pub fn read_unit_embedded(id: UnitId) -> Unit {
    let raw = match id {
        UnitId::Unit33 => include_str!("data/unit33.yaml"),
        UnitId::Unit34 => include_str!("data/unit34.yaml"),
    };
    let unit: Unit =
        serde_yaml::from_str(raw).expect("embedded unit catalog must parse");
    if let Err(msg) = unit.validate() {
        panic!("embedded catalog for unit {} is inconsistent: {msg}", id.number());
    }
    unit
}
