//! Pipeline request DTOs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::RequestCodec;

/// Request to look up a single pipeline of an organization
///
/// Both fields are set at construction and cannot change afterwards. On the
/// wire it is a JSON object with the keys `organization` and `pipeline`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetPipeline {
    organization: String,
    pipeline: String,
}

impl GetPipeline {
    /// Create a new request
    ///
    /// # Example
    /// ```
    /// use blueocean_core::dto::pipeline::GetPipeline;
    ///
    /// let req = GetPipeline::new("cloudbees", "test1");
    /// assert_eq!(req.organization(), "cloudbees");
    /// assert_eq!(req.pipeline(), "test1");
    /// ```
    pub fn new(organization: impl Into<String>, pipeline: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            pipeline: pipeline.into(),
        }
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn pipeline(&self) -> &str {
        &self.pipeline
    }

    /// Consume the request, returning `(organization, pipeline)`
    pub fn into_parts(self) -> (String, String) {
        (self.organization, self.pipeline)
    }
}

/// Renders the `organization/pipeline` lookup key
impl fmt::Display for GetPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.pipeline)
    }
}

impl RequestCodec for GetPipeline {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let req = GetPipeline::new("cloudbees", "test1");
        assert_eq!(req.organization(), "cloudbees");
        assert_eq!(req.pipeline(), "test1");
    }

    #[test]
    fn test_equality_is_field_wise() {
        let a = GetPipeline::new("cloudbees", "test1");
        let b = GetPipeline::new(String::from("cloudbees"), String::from("test1"));
        assert_eq!(a, b);
        assert_ne!(a, GetPipeline::new("cloudbees", "test2"));
        assert_ne!(a, GetPipeline::new("jenkins", "test1"));
    }

    #[test]
    fn test_display_key() {
        let req = GetPipeline::new("cloudbees", "test1");
        assert_eq!(req.to_string(), "cloudbees/test1");
    }

    #[test]
    fn test_into_parts() {
        let (organization, pipeline) = GetPipeline::new("cloudbees", "test1").into_parts();
        assert_eq!(organization, "cloudbees");
        assert_eq!(pipeline, "test1");
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GetPipeline>();
    }
}
