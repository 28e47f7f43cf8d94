//! Graph element value objects
//!
//! Elements are immutable values produced by the graph engine and passed
//! into the codec layer read-only. An element is either an edge between two
//! vertices or an entity attached to a single vertex; both carry a
//! schema-defined group name and a property bag.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::codec::{CodecError, CodecResult};
use crate::fields;

pub mod value;

pub use value::{Properties, Value};

/// An edge between two vertex ids, optionally directed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub group: String,
    pub source: Value,
    pub destination: Value,
    pub directed: bool,
    pub properties: Properties,
}

impl Edge {
    /// Create a new edge with an empty property bag
    pub fn new(group: &str, source: Value, destination: Value, directed: bool) -> Self {
        Self {
            group: group.to_string(),
            source,
            destination,
            directed,
            properties: Properties::new(),
        }
    }

    /// Add a property, keeping insertion order
    pub fn with_property(mut self, name: &str, value: Value) -> Self {
        self.properties.insert(name.to_string(), value);
        self
    }
}

/// An entity attached to a single vertex id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub group: String,
    pub vertex: Value,
    pub properties: Properties,
}

impl Entity {
    /// Create a new entity with an empty property bag
    pub fn new(group: &str, vertex: Value) -> Self {
        Self {
            group: group.to_string(),
            vertex,
            properties: Properties::new(),
        }
    }

    /// Add a property, keeping insertion order
    pub fn with_property(mut self, name: &str, value: Value) -> Self {
        self.properties.insert(name.to_string(), value);
        self
    }
}

/// A graph element: either an edge or an entity.
///
/// The JSON encoding is self-describing: the variant is carried in the
/// `type` field alongside the element's own fields, so a foreign consumer
/// can discriminate without the native type system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Edge(Edge),
    Entity(Entity),
}

impl Element {
    /// The runtime kind of this element
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Edge(_) => ElementKind::Edge,
            Element::Entity(_) => ElementKind::Entity,
        }
    }

    /// The element's schema-defined group name
    pub fn group(&self) -> &str {
        match self {
            Element::Edge(edge) => &edge.group,
            Element::Entity(entity) => &entity.group,
        }
    }

    /// The element's property bag
    pub fn properties(&self) -> &Properties {
        match self {
            Element::Edge(edge) => &edge.properties,
            Element::Entity(entity) => &entity.properties,
        }
    }

    /// Reconstruct an element from its complete JSON encoding
    pub fn from_json(json: &str) -> CodecResult<Self> {
        serde_json::from_str(json).map_err(CodecError::JsonDecode)
    }
}

impl From<Edge> for Element {
    fn from(edge: Edge) -> Self {
        Element::Edge(edge)
    }
}

impl From<Entity> for Element {
    fn from(entity: Entity) -> Self {
        Element::Entity(entity)
    }
}

/// The closed set of element kinds a codec can declare capability for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Edge,
    Entity,
}

impl ElementKind {
    /// Get the wire discriminator for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Edge => fields::TYPE_EDGE,
            ElementKind::Entity => fields::TYPE_ENTITY,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_kind() {
        let edge = Element::from(Edge::new("edges", "A".into(), "B".into(), true));
        let entity = Element::from(Entity::new("entities", "A".into()));

        assert_eq!(edge.kind(), ElementKind::Edge);
        assert_eq!(entity.kind(), ElementKind::Entity);
        assert_eq!(edge.kind().to_string(), "edge");
        assert_eq!(entity.kind().to_string(), "entity");
    }

    #[test]
    fn test_element_accessors() {
        let element = Element::from(
            Entity::new("entities", "A".into()).with_property("count", 1.into()),
        );

        assert_eq!(element.group(), "entities");
        assert_eq!(element.properties().get("count"), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_edge_json_is_self_describing() {
        let element = Element::from(
            Edge::new("edges", "A".into(), "B".into(), true).with_property("count", 1.into()),
        );

        let json = serde_json::to_string(&element).unwrap();
        assert_eq!(
            json,
            "{\"type\":\"edge\",\"group\":\"edges\",\"source\":\"A\",\
             \"destination\":\"B\",\"directed\":true,\"properties\":{\"count\":1}}"
        );
    }

    #[test]
    fn test_element_json_round_trip() {
        let element = Element::from(
            Entity::new("entities", "A".into()).with_property("count", 1.into()),
        );

        let json = serde_json::to_string(&element).unwrap();
        let decoded = Element::from_json(&json).unwrap();
        assert_eq!(decoded, element);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let result = Element::from_json("{\"type\":\"vertex-set\"}");
        assert!(matches!(result, Err(CodecError::JsonDecode(_))));
    }
}
