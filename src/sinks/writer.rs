//! Adapter from any `std::io::Write` to a sink

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::io::Write;

/// Wraps a writer such as a socket, a pipe or a `Vec<u8>`.
pub struct WriterSink<W: Write + Send> {
    name: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Take the writer back
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&self, line: &[u8]) -> Result<()> {
        self.writer
            .lock()
            .write_all(line)
            .map_err(|e| LoggerError::sink_write(&self.name, e))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_through() {
        let sink = WriterSink::new("vec", Vec::new());
        sink.write(b"hello\n").unwrap();
        assert_eq!(sink.into_inner(), b"hello\n");
    }

    #[test]
    fn test_failure_names_the_sink() {
        let sink = WriterSink::new("pipe", Broken);
        let err = sink.write(b"x").unwrap_err();
        assert_eq!(err.to_string(), "Write to sink 'pipe' failed: closed");
    }
}
