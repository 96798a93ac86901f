use crate::normalize::normalize_key_bytes;
use std::io::{self, Write};
use tracing_subscriber::fmt::MakeWriter;

/// Line writer that normalizes JSON keys before handing the line to the
/// real destination.
///
/// Each `write` call is treated as one line, with or without a trailing
/// `\n`:
/// - one trailing newline is stripped;
/// - an empty remainder is dropped (`Ok(0)`, nothing written);
/// - otherwise the keys are rewritten by [`normalize_key_bytes`] and the
///   line is written followed by a single newline. Other bytes, valid
///   UTF-8 or not, pass through untouched.
///
/// On success the reported count is the length of the *input* buffer.
/// Errors from the destination are returned verbatim and never retried.
#[derive(Debug)]
pub struct NormalizingWriter<W> {
    inner: W,
}

impl<W: Write> NormalizingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for NormalizingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let data = buf.strip_suffix(b"\n").unwrap_or(buf);
        if data.is_empty() {
            return Ok(0);
        }

        let mut line = normalize_key_bytes(data);
        line.push(b'\n');
        self.inner.write_all(&line)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// [`MakeWriter`] producing a [`NormalizingWriter`] around each writer
/// made by `M`. Defaults to stdout.
#[derive(Clone, Debug)]
pub struct NormalizingMakeWriter<M = fn() -> io::Stdout> {
    inner: M,
}

impl NormalizingMakeWriter {
    pub fn stdout() -> Self {
        Self {
            inner: io::stdout as fn() -> io::Stdout,
        }
    }
}

impl Default for NormalizingMakeWriter {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<M> NormalizingMakeWriter<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<'a, M: MakeWriter<'a>> MakeWriter<'a> for NormalizingMakeWriter<M> {
    type Writer = NormalizingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        NormalizingWriter::new(self.inner.make_writer())
    }
}
