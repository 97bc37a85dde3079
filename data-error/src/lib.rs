use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StreamError>;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to open {0}: {1}")]
    Open(String, #[source] io::Error),
    #[error("Failed to query size of {0}: {1}")]
    Stat(String, #[source] io::Error),
    #[error("Read failed at offset {0}: {1}")]
    Read(u64, #[source] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Lets stream types participate in `std::io` traits.
/// The underlying [`io::ErrorKind`] survives the conversion.
impl From<StreamError> for io::Error {
    fn from(err: StreamError) -> Self {
        match err {
            StreamError::Io(e) => e,
            StreamError::Open(_, e)
            | StreamError::Stat(_, e)
            | StreamError::Read(_, e) => {
                let kind = e.kind();
                io::Error::new(kind, e)
            }
            StreamError::Other(e) => {
                io::Error::new(io::ErrorKind::Other, e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_survives_io_conversion() {
        let cause =
            io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = StreamError::Open("some/path".to_string(), cause);

        let io_err = io::Error::from(err);
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_read_error_reports_offset() {
        let cause =
            io::Error::new(io::ErrorKind::Other, "device gone");
        let err = StreamError::Read(42, cause);
        assert_eq!(
            err.to_string(),
            "Read failed at offset 42: device gone"
        );
    }
}
