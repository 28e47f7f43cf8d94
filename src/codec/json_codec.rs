//! JSON document codec

use crate::codec::{CodecError, CodecOutput, CodecResult, ElementCodec};
use crate::element::{Element, ElementKind, Value};
use crate::fields;

/// Converts an element into a single-field mapping holding its complete
/// JSON encoding.
///
/// The `json` field carries the UTF-8 text of the whole element - group,
/// endpoint or vertex ids, directed flag and the full property bag - so the
/// foreign consumer only needs a JSON parser. Property keys are emitted in
/// insertion order. An encode failure is surfaced as
/// [`CodecError::JsonEncode`]; the codec never returns a mapping with a
/// missing or partial `json` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self
    }
}

impl ElementCodec for JsonCodec {
    fn name(&self) -> &'static str {
        "json"
    }

    fn can_handle(&self, _kind: ElementKind) -> bool {
        // Handles any element, not just specific variants
        true
    }

    fn convert(&self, element: &Element) -> CodecResult<CodecOutput> {
        let json = serde_json::to_string(element).map_err(CodecError::JsonEncode)?;

        let mut map = CodecOutput::new();
        map.insert(fields::JSON.to_string(), Value::from(json));
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Edge, Entity};

    #[test]
    fn test_output_is_a_single_json_field() {
        let element = Element::from(
            Edge::new("edges", "A".into(), "B".into(), true).with_property("count", 1.into()),
        );

        let map = JsonCodec::new().convert(&element).unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(
            map[fields::JSON].as_str().unwrap(),
            "{\"type\":\"edge\",\"group\":\"edges\",\"source\":\"A\",\
             \"destination\":\"B\",\"directed\":true,\"properties\":{\"count\":1}}"
        );
    }

    #[test]
    fn test_edge_round_trip() {
        let element = Element::from(
            Edge::new("edges", "A".into(), "B".into(), true).with_property("count", 1.into()),
        );

        let map = JsonCodec::new().convert(&element).unwrap();
        let decoded = Element::from_json(map[fields::JSON].as_str().unwrap()).unwrap();
        assert_eq!(decoded, element);
    }

    #[test]
    fn test_entity_round_trip() {
        let element = Element::from(
            Entity::new("entities", "A".into()).with_property("count", 1.into()),
        );

        let map = JsonCodec::new().convert(&element).unwrap();
        let decoded = Element::from_json(map[fields::JSON].as_str().unwrap()).unwrap();
        assert_eq!(decoded, element);
    }

    #[test]
    fn test_can_handle_any_kind() {
        let codec = JsonCodec::new();
        assert!(codec.can_handle(ElementKind::Edge));
        assert!(codec.can_handle(ElementKind::Entity));
    }

    #[test]
    fn test_unencodable_property_is_a_reported_failure() {
        let element = Element::from(
            Entity::new("entities", "A".into()).with_property("score", f64::NAN.into()),
        );

        let result = JsonCodec::new().convert(&element);
        assert!(matches!(result, Err(CodecError::JsonEncode(_))));
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let element = Element::from(
            Entity::new("entities", "A".into()).with_property("count", 1.into()),
        );

        let codec = JsonCodec::new();
        assert_eq!(codec.convert(&element).unwrap(), codec.convert(&element).unwrap());
    }
}
