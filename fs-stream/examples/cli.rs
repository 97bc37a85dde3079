use anyhow::{Context, Result};
use fs_stream::reader::ChunkedReader;
use fs_stream::writer::PassWriter;
use std::env;
use std::io::{self, Write};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage:");
        println!(" cargo run --example cli <path> [chunk_size]");
        return Ok(());
    }

    let chunk_size = if args.len() > 2 {
        args[2]
            .parse()
            .context("Chunk size must be a positive integer")?
    } else {
        fs_stream::DEFAULT_CHUNK_SIZE
    };
    if chunk_size == 0 {
        eprintln!("Chunk size must be positive");
        return Ok(());
    }

    let mut reader = ChunkedReader::open(&args[1], chunk_size)
        .context("Failed to open input")?;
    let mut writer = PassWriter::new(io::stdout());

    let mut buf = vec![0u8; chunk_size];
    loop {
        let count = reader.read_chunk(&mut buf)?;
        if count == 0 {
            break;
        }
        writer.write_all(&buf[..count])?;
    }
    writer.flush()?;
    reader.close()?;

    Ok(())
}
