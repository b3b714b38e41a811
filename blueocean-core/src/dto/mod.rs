//! Data Transfer Objects for API requests
//!
//! This module contains the request records the pipeline API exchanges with its
//! callers. DTOs are plain immutable values; converting them to and from JSON is
//! the job of [`crate::codec`].

pub mod pipeline;
