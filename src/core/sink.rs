//! Output destinations for formatted lines

use parking_lot::Mutex;
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;

/// Shared, append-only byte destination.
///
/// Cloning a `Sink` shares both the writer and the lock guarding it, so
/// every logger holding a clone writes whole lines without interleaving.
#[derive(Clone)]
pub struct Sink {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Sink {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Write `bytes` under the sink lock
    pub fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        self.inner.lock().write_all(bytes)
    }

    pub fn flush(&self) -> io::Result<()> {
        self.inner.lock().flush()
    }

    /// Whether two handles share the same destination
    #[must_use]
    pub fn same_destination(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").finish_non_exhaustive()
    }
}

impl From<SharedBuffer> for Sink {
    fn from(buffer: SharedBuffer) -> Self {
        Sink::new(buffer)
    }
}

impl From<MultiWriter> for Sink {
    fn from(writer: MultiWriter) -> Self {
        Sink::new(writer)
    }
}

impl From<File> for Sink {
    fn from(file: File) -> Self {
        Sink::new(file)
    }
}

impl From<io::Stdout> for Sink {
    fn from(stdout: io::Stdout) -> Self {
        Sink::new(stdout)
    }
}

impl From<io::Stderr> for Sink {
    fn from(stderr: io::Stderr) -> Self {
        Sink::new(stderr)
    }
}

/// In-memory byte accumulator.
///
/// Clones share the same buffer, so one clone can be handed to a logger
/// and another kept to inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Return the contents and clear the buffer
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.bytes.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Duplicates every write to several writers.
///
/// Writers are visited in order; the first failure stops the write and is
/// returned.
#[derive(Default)]
pub struct MultiWriter {
    writers: Vec<Box<dyn Write + Send>>,
}

impl MultiWriter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writers.push(Box::new(writer));
        self
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

impl Write for MultiWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for writer in &mut self.writers {
            writer.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for writer in &mut self.writers {
            writer.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk unplugged"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_shared_buffer_clones_share_bytes() {
        let buffer = SharedBuffer::new();
        let sink = Sink::from(buffer.clone());

        sink.write_all(b"first\n").unwrap();
        sink.write_all(b"second\n").unwrap();

        assert_eq!(buffer.lines(), vec!["first", "second"]);
        assert_eq!(buffer.take(), "first\nsecond\n");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_sink_clones_share_destination() {
        let sink = Sink::from(SharedBuffer::new());
        let other = sink.clone();
        assert!(sink.same_destination(&other));
        assert!(!sink.same_destination(&Sink::from(SharedBuffer::new())));
    }

    #[test]
    fn test_multi_writer_duplicates() {
        let a = SharedBuffer::new();
        let b = SharedBuffer::new();
        let mut writer = MultiWriter::new()
            .with_writer(a.clone())
            .with_writer(b.clone());

        writer.write_all(b"line\n").unwrap();

        assert_eq!(writer.len(), 2);
        assert_eq!(a.contents(), "line\n");
        assert_eq!(b.contents(), "line\n");
    }

    #[test]
    fn test_multi_writer_stops_at_first_error() {
        let before = SharedBuffer::new();
        let after = SharedBuffer::new();
        let mut writer = MultiWriter::new()
            .with_writer(before.clone())
            .with_writer(FailingWriter)
            .with_writer(after.clone());

        let err = writer.write_all(b"line\n").unwrap_err();

        assert_eq!(err.to_string(), "disk unplugged");
        assert_eq!(before.contents(), "line\n");
        assert!(after.is_empty());
    }
}
