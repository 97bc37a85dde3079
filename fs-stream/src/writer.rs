use std::io::{self, Write};

/// Decorator over any sink implementing [`Write`].
///
/// Every call is forwarded to the wrapped sink unchanged and the
/// sink's outcome is returned verbatim. The writer buffers nothing,
/// retries nothing, and defines no error kinds of its own. To wrap a
/// sink without taking it over, pass `&mut sink`.
pub struct PassWriter<W> {
    sink: W,
}

impl<W: Write> PassWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Hand the sink back to the caller.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> Write for PassWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}
