// src/graph/loader.rs
//! Reads `source \t target` edge lists, gzip-compressed or plain.

use super::index::GraphIndex;
use crate::error::{RankError, Result};
use flate2::read::MultiGzDecoder;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Counters collected while reading an edge list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub lines: usize,
    pub edges: usize,
    pub skipped: usize,
}

/// Loads a graph from `path`, decompressing when the file starts with the
/// gzip magic bytes.
///
/// # Errors
/// Returns `RankError::Io` if the file cannot be opened or read.
pub fn load_path(path: &Path) -> Result<(GraphIndex, LoadStats)> {
    let file = File::open(path).map_err(|e| RankError::io(e, path))?;
    let mut reader = BufReader::new(file);

    let compressed = is_gzip(&mut reader).map_err(|e| RankError::io(e, path))?;
    debug!(path = %path.display(), compressed, "opening edge list");

    let result = if compressed {
        load_reader(BufReader::new(MultiGzDecoder::new(reader)))
    } else {
        load_reader(reader)
    };

    let (graph, stats) = result.map_err(|e| match e {
        RankError::Io { source, .. } => RankError::io(source, path),
        other => other,
    })?;

    info!(
        path = %path.display(),
        lines = stats.lines,
        edges = stats.edges,
        skipped = stats.skipped,
        nodes = graph.node_count(),
        "edge list loaded"
    );
    Ok((graph, stats))
}

/// Builds a graph from any line-oriented reader.
///
/// Invalid UTF-8 is decoded lossily; malformed lines are counted and skipped.
///
/// # Errors
/// Returns error if the underlying reader fails.
pub fn load_reader<R: BufRead>(mut reader: R) -> Result<(GraphIndex, LoadStats)> {
    let mut graph = GraphIndex::new();
    let mut stats = LoadStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        stats.lines += 1;

        let decoded = String::from_utf8_lossy(&buf);
        let line = decoded.strip_suffix('\n').unwrap_or(&decoded);
        if graph.add_line(line) {
            stats.edges += 1;
        } else {
            stats.skipped += 1;
        }
    }

    Ok((graph, stats))
}

fn is_gzip<R: BufRead>(reader: &mut R) -> std::io::Result<bool> {
    let head = reader.fill_buf()?;
    Ok(head.starts_with(&GZIP_MAGIC))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::{Cursor, Write};

    #[test]
    fn test_load_reader_counts() {
        let input = "a\tb\nbroken\nb\tc\n\na\tb\tc\nc\ta";
        let (g, stats) = load_reader(Cursor::new(input)).unwrap();
        assert_eq!(stats.lines, 6);
        assert_eq!(stats.edges, 3);
        assert_eq!(stats.skipped, 3);
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn test_crlf_lines() {
        let (g, stats) = load_reader(Cursor::new("a\tb\r\nb\ta\r\n")).unwrap();
        assert_eq!(stats.edges, 2);
        assert_eq!(g.lookup("b"), Some(1));
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let bytes: &[u8] = b"a\xff\tb\n";
        let (g, stats) = load_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(stats.edges, 1);
        assert_eq!(g.url(0), Some("a\u{fffd}"));
    }

    #[test]
    fn test_load_gzip_and_plain_paths() {
        let dir = tempfile::tempdir().unwrap();

        let gz_path = dir.path().join("links.gz");
        let mut enc = GzEncoder::new(File::create(&gz_path).unwrap(), Compression::default());
        enc.write_all(b"x\ty\ny\tz\n").unwrap();
        enc.finish().unwrap();

        let plain_path = dir.path().join("links.txt");
        std::fs::write(&plain_path, "x\ty\ny\tz\n").unwrap();

        let (gz, gz_stats) = load_path(&gz_path).unwrap();
        let (plain, plain_stats) = load_path(&plain_path).unwrap();
        assert_eq!(gz_stats, plain_stats);
        assert_eq!(gz.urls(), plain.urls());
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = load_path(Path::new("/definitely/not/here.gz")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.gz"));
    }
}
