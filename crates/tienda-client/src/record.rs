//! Result-record unwrapping.
//!
//! Gateway rows come back either keyed by the query's return variable
//! (`{"p": {...}}`) or as a bare entity, and driver-level envelopes can add
//! one more `properties` layer. The shapes are modeled explicitly instead
//! of probing fields speculatively.

use serde_json::Value;

/// The record shapes the gateway (and the JS driver it replaced) produce.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordShape {
    /// Keyed by the query's first return variable, e.g. `{"p": {...}}`.
    Keyed(Value),
    /// The record is the entity itself.
    Bare(Value),
}

impl RecordShape {
    /// Classify a record, trying the conventional return variables first.
    pub fn classify(record: &Value) -> Self {
        for var in ["p", "p0"] {
            if let Some(inner) = record.get(var) {
                return RecordShape::Keyed(inner.clone());
            }
        }
        RecordShape::Bare(record.clone())
    }

    /// The entity payload, whichever shape carried it.
    pub fn into_inner(self) -> Value {
        match self {
            RecordShape::Keyed(inner) | RecordShape::Bare(inner) => inner,
        }
    }
}

/// Extract the entity property map from a record, stripping one
/// `properties` envelope if present.
pub fn unwrap_entity(record: &Value) -> Value {
    let inner = RecordShape::classify(record).into_inner();
    match inner.get("properties") {
        Some(properties) => properties.clone(),
        None => inner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keyed_record_unwraps_the_variable() {
        let record = json!({ "p": { "id": 1, "nombre": "Televisor" } });
        assert_eq!(
            RecordShape::classify(&record),
            RecordShape::Keyed(json!({ "id": 1, "nombre": "Televisor" }))
        );
        assert_eq!(unwrap_entity(&record)["nombre"], "Televisor");
    }

    #[test]
    fn test_positional_variable_p0_is_recognized() {
        let record = json!({ "p0": { "id": 2 } });
        assert_eq!(unwrap_entity(&record)["id"], 2);
    }

    #[test]
    fn test_bare_record_falls_back_to_itself() {
        let record = json!({ "id": 3, "nombre": "Teléfono" });
        assert_eq!(RecordShape::classify(&record), RecordShape::Bare(record.clone()));
        assert_eq!(unwrap_entity(&record)["id"], 3);
    }

    #[test]
    fn test_properties_envelope_is_stripped_once() {
        let record = json!({
            "p": {
                "identity": 42,
                "labels": ["Producto"],
                "properties": { "id": 4, "nombre": "Radio" }
            }
        });
        let entity = unwrap_entity(&record);
        assert_eq!(entity["nombre"], "Radio");
        assert!(entity.get("labels").is_none());
    }
}
