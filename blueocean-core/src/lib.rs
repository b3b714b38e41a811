//! Blue Ocean Core
//!
//! Request types and their JSON wire format for the Blue Ocean pipeline API.
//!
//! This crate contains:
//! - DTOs: Immutable request records exchanged with API callers
//! - Codec: Lossless conversion of those records to and from JSON text

pub mod codec;
pub mod dto;
pub mod error;

pub use codec::RequestCodec;
pub use error::{CodecError, Result};
