//! Element codecs
//!
//! A codec is one serialisation strategy for handing elements across the
//! language boundary: the map codec flattens an element into a field-name
//! to value mapping, the JSON codec wraps its complete JSON encoding.
//! Strategies are registered on a [`CodecDispatcher`], which picks the
//! first codec capable of the element's runtime kind.

use indexmap::IndexMap;

use crate::element::{Element, ElementKind, Value};

pub mod dispatcher;
pub mod json_codec;
pub mod map_codec;

pub use dispatcher::{CodecDispatcher, CodecKind, DispatcherConfig};
pub use json_codec::JsonCodec;
pub use map_codec::MapCodec;

/// The mapping a codec produces: wire field name to value, in a fixed order
pub type CodecOutput = IndexMap<String, Value>;

/// Errors that can occur while serialising elements
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// No registered codec reported capability for the element's kind
    #[error("no registered codec can handle element kind: {0}")]
    UnsupportedElementType(ElementKind),

    /// The underlying JSON encode of an element failed
    #[error("failed to encode element as JSON: {0}")]
    JsonEncode(#[source] serde_json::Error),

    /// A JSON document could not be decoded back into an element
    #[error("failed to decode element from JSON: {0}")]
    JsonDecode(#[source] serde_json::Error),

    /// A dispatcher configuration document was malformed
    #[error("invalid dispatcher configuration: {0}")]
    InvalidConfig(#[source] serde_json::Error),
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// One serialisation strategy for graph elements.
///
/// Implementations are stateless: `convert` is a pure function of the
/// element, so a codec shared across threads needs no synchronisation. A
/// failed conversion substitutes the whole output - a codec never returns
/// a partially populated mapping.
pub trait ElementCodec: Send + Sync {
    /// Short name used in logs and configuration
    fn name(&self) -> &'static str;

    /// Report whether this codec can serialise elements of the given kind
    fn can_handle(&self, kind: ElementKind) -> bool;

    /// Convert one element into its wire mapping
    fn convert(&self, element: &Element) -> CodecResult<CodecOutput>;
}
