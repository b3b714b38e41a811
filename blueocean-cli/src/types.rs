//! Common types used across CLI modules

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Where a command reads its request document from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Pick the source from an optional `--file` argument
    ///
    /// A missing path or `-` means standard input.
    pub fn from_arg(file: Option<PathBuf>) -> Self {
        match file {
            Some(path) if path.as_os_str() != "-" => Self::File(path),
            _ => Self::Stdin,
        }
    }

    /// Read the whole document
    pub async fn read(&self) -> Result<Vec<u8>> {
        match self {
            Self::Stdin => read_all(tokio::io::stdin())
                .await
                .context("Failed to read request from stdin"),
            Self::File(path) => tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read request file: {}", path.display())),
        }
    }
}

async fn read_all<R: AsyncRead + Unpin>(mut reader: R) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).await?;
    Ok(buf)
}
