//! Codec registry and selection

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::codec::{
    CodecError, CodecOutput, CodecResult, ElementCodec, JsonCodec, MapCodec,
};
use crate::element::Element;

/// Codec identifiers that can appear in a dispatcher configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecKind {
    Map,
    Json,
}

/// Dispatcher configuration: which codecs to register, in priority order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatcherConfig {
    pub codecs: Vec<CodecKind>,
}

impl DispatcherConfig {
    /// Parse a configuration from its JSON encoding
    pub fn from_json(json: &str) -> CodecResult<Self> {
        serde_json::from_str(json).map_err(CodecError::InvalidConfig)
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            codecs: vec![CodecKind::Map, CodecKind::Json],
        }
    }
}

/// Owns the registered codecs and selects one per element.
///
/// Registration order is the priority order: `serialise` asks each codec in
/// turn whether it can handle the element's kind and uses the first that
/// reports capability. Dispatchers are constructed explicitly - there is no
/// process-wide registry - so one process can run several, configured
/// independently per consumer.
pub struct CodecDispatcher {
    codecs: Vec<Box<dyn ElementCodec>>,
}

impl CodecDispatcher {
    /// Create a dispatcher with no registered codecs
    pub fn new() -> Self {
        Self { codecs: Vec::new() }
    }

    /// Create a dispatcher with the default codec set: map first, then JSON
    pub fn with_defaults() -> Self {
        Self::from_config(&DispatcherConfig::default())
    }

    /// Create a dispatcher from a configuration
    pub fn from_config(config: &DispatcherConfig) -> Self {
        let mut dispatcher = Self::new();
        for kind in &config.codecs {
            match kind {
                CodecKind::Map => dispatcher.register(Box::new(MapCodec::new())),
                CodecKind::Json => dispatcher.register(Box::new(JsonCodec::new())),
            }
        }
        dispatcher
    }

    /// Register a codec behind any already-registered ones
    pub fn register(&mut self, codec: Box<dyn ElementCodec>) {
        debug!("registered element codec `{}`", codec.name());
        self.codecs.push(codec);
    }

    /// Serialise one element with the first capable codec
    pub fn serialise(&self, element: &Element) -> CodecResult<CodecOutput> {
        let kind = element.kind();
        for codec in &self.codecs {
            if codec.can_handle(kind) {
                debug!("serialising `{}` element with codec `{}`", kind, codec.name());
                return codec.convert(element);
            }
        }

        warn!("no registered codec can handle element kind `{}`", kind);
        Err(CodecError::UnsupportedElementType(kind))
    }

    /// Serialise a batch of elements, one result per element.
    ///
    /// A failure for one element never affects the serialisation of the
    /// others.
    pub fn serialise_batch<'a, I>(&self, elements: I) -> Vec<CodecResult<CodecOutput>>
    where
        I: IntoIterator<Item = &'a Element>,
    {
        elements
            .into_iter()
            .map(|element| self.serialise(element))
            .collect()
    }
}

impl Default for CodecDispatcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
