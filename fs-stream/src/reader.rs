use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use data_error::{Result, StreamError};

/// Forward-only chunked reader over a file.
///
/// Serves at most `chunk_size` bytes per call, reading at an absolute
/// offset so independent readers over the same file do not disturb
/// each other. End of stream is the usual `Ok(0)`. The file size is
/// queried fresh on every call, so a file grown externally after
/// exhaustion becomes readable again.
pub struct ChunkedReader {
    file: File,
    cursor: u64,
    chunk_size: usize,
    path: String,
}

impl ChunkedReader {
    /// Open `path` for chunked reading, with the cursor at 0.
    ///
    /// `chunk_size` is the upper bound on bytes served per read call
    /// and must be positive.
    pub fn open<P: AsRef<Path>>(path: P, chunk_size: usize) -> Result<Self> {
        assert!(chunk_size > 0, "chunk size must be positive");

        let path = path.as_ref();
        log::debug!(
            "Opening {} with chunk size {}",
            path.display(),
            chunk_size
        );

        let file = File::open(path).map_err(|e| {
            StreamError::Open(path.display().to_string(), e)
        })?;

        Ok(Self {
            file,
            cursor: 0,
            chunk_size,
            path: path.display().to_string(),
        })
    }

    /// Read the next chunk into `buf`, returning the byte count.
    ///
    /// At most `min(chunk_size, buf.len())` bytes are served per call.
    /// `Ok(0)` means the cursor has reached the end of the file. A
    /// read error after partial progress reports the bytes already
    /// copied; the error re-surfaces on the next call.
    pub fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize> {
        let total = self
            .file
            .metadata()
            .map_err(|e| StreamError::Stat(self.path.clone(), e))?
            .len();

        if self.cursor >= total {
            return Ok(0);
        }

        let want = self.chunk_size.min(buf.len());
        let mut filled = 0;
        while filled < want {
            let offset = self.cursor + filled as u64;
            match read_at(&self.file, &mut buf[filled..want], offset) {
                Ok(0) => break,
                Ok(count) => filled += count,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    if filled == 0 {
                        return Err(StreamError::Read(self.cursor, e));
                    }
                    break;
                }
            }
        }

        self.cursor += filled as u64;
        log::trace!(
            "Read {} bytes from {}, cursor now {}",
            filled,
            self.path,
            self.cursor
        );
        Ok(filled)
    }

    /// Byte offset the next read starts at.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Release the file handle.
    ///
    /// Consuming the reader makes further reads and a second close
    /// impossible. Dropping the reader releases the handle as well.
    pub fn close(self) -> Result<()> {
        log::debug!("Closing {}", self.path);
        drop(self.file);
        Ok(())
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_chunk(buf).map_err(io::Error::from)
    }
}

#[cfg(unix)]
fn read_at(file: &File, buf: &mut [u8], offset: u64) -> io::Result<usize> {
    use std::os::unix::fs::FileExt;
    file.read_at(buf, offset)
}

#[cfg(windows)]
fn read_at(file: &File, buf: &mut [u8], offset: u64) -> io::Result<usize> {
    use std::os::windows::fs::FileExt;
    file.seek_read(buf, offset)
}
