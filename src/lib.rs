//! Element serialisation bridge for graph data
//!
//! This is the codec layer that hands graph elements across a language
//! boundary: a foreign runtime with no access to the native type system
//! receives either a flat field-name to value mapping or a self-describing
//! JSON document per element. The graph engine producing elements and the
//! transport moving bytes are external collaborators; this crate only owns
//! the element model, the wire field-naming contract, the codecs and the
//! dispatch between them.

pub mod codec;
pub mod element;
pub mod fields;

// Re-export main types
pub use codec::{
    CodecDispatcher, CodecError, CodecKind, CodecOutput, CodecResult, DispatcherConfig,
    ElementCodec, JsonCodec, MapCodec,
};
pub use element::{Edge, Element, ElementKind, Entity, Properties, Value};
