//! # Request Codec
//!
//! JSON encoding and decoding for API request records.
//!
//! Every request type serializes to a JSON object keyed by its field names.
//! Decoding is strict about shape: the document must be a single JSON object,
//! every required key must be present with a value of the right type, and no
//! record is ever produced with defaulted fields. Unknown keys are ignored.
//!
//! ## Usage
//! ```
//! use blueocean_core::codec::RequestCodec;
//! use blueocean_core::dto::pipeline::GetPipeline;
//!
//! # fn main() -> blueocean_core::Result<()> {
//! let req = GetPipeline::new("cloudbees", "test1");
//! let json = req.encode()?;
//! assert_eq!(json, r#"{"organization":"cloudbees","pipeline":"test1"}"#);
//!
//! let back = GetPipeline::decode(&json)?;
//! assert_eq!(back, req);
//! # Ok(())
//! # }
//! ```

use std::any::type_name;
use std::io::{Read, Write};

use serde::Serialize;
use serde::de::{DeserializeOwned, Error as _, Unexpected};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{CodecError, Result};

/// Conversion between a request record and its JSON text
///
/// All methods are provided; a request type opts in with an empty impl block.
pub trait RequestCodec: Serialize + DeserializeOwned + Sized {
    /// Encode as compact JSON text
    fn encode(&self) -> Result<String> {
        let text = serde_json::to_string(self).map_err(CodecError::from_encode)?;
        trace!(request = type_name::<Self>(), len = text.len(), "encoded request");
        Ok(text)
    }

    /// Encode as indented JSON text, for humans
    fn encode_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(CodecError::from_encode)
    }

    /// Stream the compact JSON document into `writer`
    fn encode_to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, self).map_err(CodecError::from_encode)
    }

    /// Decode from JSON text
    fn decode(text: &str) -> Result<Self> {
        let value = serde_json::from_str(text).map_err(decode_failed::<Self>)?;
        from_object(value)
    }

    /// Decode from raw UTF-8 bytes
    fn decode_slice(bytes: &[u8]) -> Result<Self> {
        let value = serde_json::from_slice(bytes).map_err(decode_failed::<Self>)?;
        from_object(value)
    }

    /// Decode a single document from `reader`
    ///
    /// Trailing content other than whitespace is rejected.
    fn decode_from_reader<R: Read>(reader: R) -> Result<Self> {
        let value = serde_json::from_reader(reader).map_err(decode_failed::<Self>)?;
        from_object(value)
    }
}

/// Encode any request record as compact JSON text
pub fn encode<T: RequestCodec>(request: &T) -> Result<String> {
    request.encode()
}

/// Decode any request record from JSON text
pub fn decode<T: RequestCodec>(text: &str) -> Result<T> {
    T::decode(text)
}

/// Build the record from a parsed document, which must be a JSON object
fn from_object<T: RequestCodec>(value: Value) -> Result<T> {
    let unexpected = match &value {
        Value::Object(_) => None,
        Value::Null => Some(Unexpected::Unit),
        Value::Bool(b) => Some(Unexpected::Bool(*b)),
        Value::Number(_) => Some(Unexpected::Other("number")),
        Value::String(s) => Some(Unexpected::Str(s.as_str())),
        Value::Array(_) => Some(Unexpected::Seq),
    };
    if let Some(unexpected) = unexpected {
        let err = serde_json::Error::invalid_type(unexpected, &"a JSON object");
        return Err(decode_failed::<T>(err));
    }

    let request = serde_json::from_value(value).map_err(decode_failed::<T>)?;
    trace!(request = type_name::<T>(), "decoded request");
    Ok(request)
}

fn decode_failed<T>(err: serde_json::Error) -> CodecError {
    let err = CodecError::from_decode(err);
    debug!(
        request = type_name::<T>(),
        line = err.line(),
        column = err.column(),
        error = %err,
        "request rejected"
    );
    err
}
