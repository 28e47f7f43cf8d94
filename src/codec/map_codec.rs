//! Flat map codec

use crate::codec::{CodecOutput, CodecResult, ElementCodec};
use crate::element::{Element, ElementKind, Value};
use crate::fields;

/// Converts an element into a flat field-name to value mapping.
///
/// The `type` field discriminates edges from entities; endpoint and vertex
/// ids keep their native value types, the directed flag stays a boolean,
/// and the property bag is copied unmodified into the nested `properties`
/// field. The foreign consumer reconstructs element semantics purely from
/// the field names.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapCodec;

impl MapCodec {
    /// Create a new map codec
    pub fn new() -> Self {
        Self
    }
}

impl ElementCodec for MapCodec {
    fn name(&self) -> &'static str {
        "map"
    }

    fn can_handle(&self, kind: ElementKind) -> bool {
        matches!(kind, ElementKind::Edge | ElementKind::Entity)
    }

    fn convert(&self, element: &Element) -> CodecResult<CodecOutput> {
        let mut map = CodecOutput::new();
        map.insert(fields::TYPE.to_string(), Value::from(element.kind().as_str()));
        map.insert(fields::GROUP.to_string(), Value::from(element.group()));

        match element {
            Element::Edge(edge) => {
                map.insert(fields::SOURCE.to_string(), edge.source.clone());
                map.insert(fields::DESTINATION.to_string(), edge.destination.clone());
                map.insert(fields::DIRECTED.to_string(), Value::from(edge.directed));
            }
            Element::Entity(entity) => {
                map.insert(fields::VERTEX.to_string(), entity.vertex.clone());
            }
        }

        map.insert(
            fields::PROPERTIES.to_string(),
            Value::Map(element.properties().clone()),
        );
        Ok(map)
    }
}
