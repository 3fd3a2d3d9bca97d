//! JSON sequence codec.

use crate::error::{CodecError, CodecResult};
use crate::SequenceCodec;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// The JSON array codec.
///
/// Encodes a record sequence as one compact JSON array, records in
/// insertion order. This is the persisted layout cellar ships with: a key
/// holds `[{...}, {...}]` with application-defined record objects.
///
/// Record shape is owned by the calling application - any type that
/// implements `Serialize` and `DeserializeOwned` works, and the codec
/// performs no validation beyond JSON well-formedness.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl<T> SequenceCodec<T> for JsonCodec
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self, records: &[T]) -> CodecResult<String> {
        serde_json::to_string(records).map_err(|e| CodecError::encoding_failed(e.to_string()))
    }

    fn decode(&self, text: &str) -> CodecResult<Vec<T>> {
        serde_json::from_str(text).map_err(|e| CodecError::decoding_failed(e.to_string()))
    }
}
