//! # Cellar Codec
//!
//! Record sequence encoding/decoding for cellar.
//!
//! A store persists a whole ordered sequence of records as a single text
//! value. This crate defines the codec seam the store is generic over, plus
//! the shipped JSON implementation:
//!
//! - A sequence encodes to one JSON array, records in order
//! - Decoding an empty or absent value is the store's concern, not the
//!   codec's - the codec only sees text that claims to be a sequence
//! - Undecodable text is an error, never silently an empty sequence
//!
//! ## Usage
//!
//! ```
//! use cellar_codec::{JsonCodec, SequenceCodec};
//!
//! let codec = JsonCodec;
//! let text = codec.encode(&[1, 2, 3]).unwrap();
//! assert_eq!(text, "[1,2,3]");
//!
//! let records: Vec<i32> = codec.decode(&text).unwrap();
//! assert_eq!(records, vec![1, 2, 3]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod json;

pub use error::{CodecError, CodecResult};
pub use json::JsonCodec;

/// Trait for codecs that serialize an ordered record sequence to text.
///
/// Implementors must round-trip: `decode(encode(records))` yields the same
/// records in the same order. The store stays format-agnostic by taking the
/// codec as an injected capability.
pub trait SequenceCodec<T>: Send + Sync {
    /// Encodes the whole sequence to a single text value.
    ///
    /// # Errors
    ///
    /// Returns an error if any record cannot be serialized.
    fn encode(&self, records: &[T]) -> CodecResult<String>;

    /// Decodes a text value back into the record sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid encoded sequence.
    fn decode(&self, text: &str) -> CodecResult<Vec<T>>;
}
