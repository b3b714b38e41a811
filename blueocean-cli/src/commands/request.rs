//! Request command handlers
//!
//! Encodes pipeline requests from command-line fields and decodes request
//! documents read from a file or stdin.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use blueocean_core::RequestCodec;
use blueocean_core::dto::pipeline::GetPipeline;
use clap::Subcommand;
use colored::*;
use tracing::{debug, info};

use crate::config::Config;
use crate::types::InputSource;

/// Request subcommands
#[derive(Subcommand)]
pub enum RequestCommands {
    /// Encode a pipeline request as JSON
    Encode {
        /// Organization the pipeline belongs to
        #[arg(short, long)]
        organization: String,

        /// Pipeline name
        #[arg(short, long)]
        pipeline: String,

        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Decode a JSON pipeline request and show its fields
    Decode {
        /// Path to the request document (stdin if omitted or "-")
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Verify that a request document survives a decode/encode/decode cycle
    Check {
        /// Path to the request document (stdin if omitted or "-")
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Handle request commands
pub async fn handle_request_command(command: RequestCommands, config: &Config) -> Result<()> {
    debug!(log_filter = %config.log_filter, "handling request command");

    match command {
        RequestCommands::Encode {
            organization,
            pipeline,
            pretty,
        } => encode_request(organization, pipeline, pretty),
        RequestCommands::Decode { file } => {
            let input = InputSource::from_arg(file).read().await?;
            decode_request(&input)
        }
        RequestCommands::Check { file } => {
            let input = InputSource::from_arg(file).read().await?;
            check_request(&input)
        }
    }
}

/// Print the JSON document for a request built from its fields
fn encode_request(organization: String, pipeline: String, pretty: bool) -> Result<()> {
    let request = GetPipeline::new(organization, pipeline);

    let json = if pretty {
        request.encode_pretty()
    } else {
        request.encode()
    }
    .with_context(|| format!("Failed to encode request {}", request))?;

    info!(request = %request, "encoded request");
    println!("{}", json);

    Ok(())
}

/// Decode a request document and print its fields
fn decode_request(input: &[u8]) -> Result<()> {
    let request = GetPipeline::decode_slice(input).context("Invalid pipeline request")?;

    print_request(&request);

    Ok(())
}

/// Decode, re-encode and decode again, failing if the result differs
fn check_request(input: &[u8]) -> Result<()> {
    let request = round_trip(input)?;

    println!("{}", "✓ Request round-trips without loss".green().bold());
    print_request(&request);

    Ok(())
}

fn round_trip(input: &[u8]) -> Result<GetPipeline> {
    let request = GetPipeline::decode_slice(input).context("Invalid pipeline request")?;
    let json = request.encode().context("Failed to re-encode request")?;
    let again = GetPipeline::decode(&json).context("Failed to decode re-encoded request")?;

    if again != request {
        bail!("Request changed after round-trip: {} became {}", request, again);
    }

    debug!(request = %request, json = %json, "round-trip held");
    Ok(request)
}

fn print_request(request: &GetPipeline) {
    println!("  Organization: {}", request.organization().cyan());
    println!("  Pipeline:     {}", request.pipeline().bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_accepts_valid_document() {
        let request = round_trip(br#"{"pipeline":"test1","organization":"cloudbees"}"#).unwrap();
        assert_eq!(request, GetPipeline::new("cloudbees", "test1"));
    }

    #[test]
    fn test_round_trip_rejects_missing_field() {
        let err = round_trip(br#"{"organization":"cloudbees"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Invalid pipeline request");
        let source = err
            .downcast_ref::<blueocean_core::CodecError>()
            .expect("codec error in chain");
        assert!(source.is_decoding());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_request(b"not json at all").is_err());
    }

    #[test]
    fn test_encode_succeeds() {
        assert!(encode_request("cloudbees".to_string(), "test1".to_string(), true).is_ok());
    }
}
