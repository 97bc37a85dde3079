pub mod reader;
pub mod writer;

// Fallback for callers that do not configure a chunk size
pub const DEFAULT_CHUNK_SIZE: usize = 4096;
