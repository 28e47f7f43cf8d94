//! Wire field names shared with foreign-runtime consumers
//!
//! Both sides of the language boundary must agree on these names verbatim:
//! the foreign consumer reconstructs element semantics purely from them,
//! without access to the native type system. They are process-wide
//! constants and never vary per element instance.

/// Discriminates the element variant in a flat mapping ("edge" or "entity")
pub const TYPE: &str = "type";

/// The element's schema-defined group name
pub const GROUP: &str = "group";

/// The vertex id an entity is attached to
pub const VERTEX: &str = "vertex";

/// The source vertex id of an edge
pub const SOURCE: &str = "source";

/// The destination vertex id of an edge
pub const DESTINATION: &str = "destination";

/// Whether the edge's source-to-destination direction is meaningful
pub const DIRECTED: &str = "directed";

/// The element's property bag, nested one level deep
pub const PROPERTIES: &str = "properties";

/// The complete JSON encoding of an element, as a single string value
pub const JSON: &str = "json";

/// `TYPE` value for edges
pub const TYPE_EDGE: &str = "edge";

/// `TYPE` value for entities
pub const TYPE_ENTITY: &str = "entity";
