//! Sink trait for log output destinations

use super::error::Result;
use std::sync::Arc;

/// A destination for finished log lines.
///
/// The logger only ever calls `write`; opening, flushing and closing the
/// underlying resource is the sink's own business. Implementations that
/// wrap a shared resource serialize their writes so concurrent lines never
/// interleave.
pub trait Sink: Send + Sync {
    fn write(&self, line: &[u8]) -> Result<()>;
    fn name(&self) -> &str;
}

/// A sink that can sit in several configuration lists at once
pub type SharedSink = Arc<dyn Sink>;
