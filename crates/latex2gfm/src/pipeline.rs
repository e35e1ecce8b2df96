//! One-request conversion pipeline.
//!
//! Collaborator seams for the surrounding RPC system: a source that yields
//! a decoded token batch, a sink that acknowledges the request, and a sink
//! that persists the document. The converter core stays pure; everything
//! here is boundary plumbing.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use latex2gfm_core::{Conversion, Token};

use crate::service::GfmService;
use crate::{ConvertError, Result};

/// Status reported back over the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertStatus {
    /// The batch converted successfully
    Converted,
    /// The request body could not be interpreted as tokens
    MalformedInput,
}

/// Yields decoded token batches from the transport
pub trait RequestSource {
    /// Pull the next request, or `None` when the transport is closed
    fn next_request(&mut self) -> Result<Option<Vec<Token>>>;
}

/// Receives the status acknowledgment for a request
pub trait ResponseSink {
    fn acknowledge(&mut self, status: ConvertStatus) -> Result<()>;
}

/// Persists the assembled document
pub trait OutputSink {
    fn persist(&mut self, markdown: &str) -> Result<()>;
}

/// File name used when the caller does not provide one
pub const DEFAULT_OUTPUT_FILE: &str = "GMDoutput.md";

/// Writes the document to a file
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Create a sink writing to the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a sink writing to [`DEFAULT_OUTPUT_FILE`]
    pub fn with_default_name() -> Self {
        Self::new(DEFAULT_OUTPUT_FILE)
    }

    /// The path this sink writes to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for FileSink {
    fn persist(&mut self, markdown: &str) -> Result<()> {
        fs::write(&self.path, markdown)?;
        Ok(())
    }
}

/// Handle one request end to end: pull, convert, acknowledge, persist.
///
/// The acknowledgment is sent before the document is written: the reply
/// correlates to receipt and conversion, not to persistence. A malformed
/// request is acknowledged as such and surfaced to the caller; nothing is
/// persisted for it.
pub fn run_once<S, R, O>(
    source: &mut S,
    responder: &mut R,
    sink: &mut O,
    service: &GfmService,
) -> Result<Option<Conversion>>
where
    S: RequestSource,
    R: ResponseSink,
    O: OutputSink,
{
    let tokens = match source.next_request() {
        Ok(Some(tokens)) => tokens,
        Ok(None) => {
            debug!("request source closed without a request");
            return Ok(None);
        }
        Err(ConvertError::MalformedInput(reason)) => {
            warn!("rejecting malformed request: {reason}");
            responder.acknowledge(ConvertStatus::MalformedInput)?;
            return Err(ConvertError::MalformedInput(reason));
        }
        Err(e) => return Err(e),
    };

    let conversion = service.convert_tokens(&tokens);
    responder.acknowledge(ConvertStatus::Converted)?;
    sink.persist(&conversion.markdown)?;
    info!("converted {} tokens", tokens.len());

    Ok(Some(conversion))
}
