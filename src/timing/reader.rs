//! Word-timing file reader.
//!
//! Timing files are tabular with a required header and one row per token:
//! columns `word`, `start`, `end`, `conf` in any order, floats in seconds.
//! Malformed rows fail fast with the offending record identified; nothing is
//! silently coerced or dropped.

use crate::error::{OrdsporError, Result};
use crate::timing::Token;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// One row of a word-timing file.
#[derive(Debug, Deserialize)]
struct TimingRecord {
    word: String,
    start: f64,
    end: f64,
    conf: f64,
}

/// Read a token stream from word-timing data.
pub fn read_timings<R: Read>(reader: R) -> Result<Vec<Token>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut tokens = Vec::new();

    for (index, result) in csv_reader.deserialize::<TimingRecord>().enumerate() {
        let record = result.map_err(|e| {
            OrdsporError::Timings(format!("record {}: {}", index + 1, e))
        })?;

        if !record.start.is_finite() || !record.end.is_finite() {
            return Err(OrdsporError::Timings(format!(
                "record {} ('{}'): non-finite timestamp",
                index + 1,
                record.word
            )));
        }

        if record.start > record.end {
            return Err(OrdsporError::Timings(format!(
                "record {} ('{}'): start {} is after end {}",
                index + 1,
                record.word,
                record.start,
                record.end
            )));
        }

        tokens.push(Token::new(record.word, record.start, record.end, record.conf));
    }

    Ok(tokens)
}

/// Read a token stream from a word-timing file on disk.
pub fn read_timings_file(path: &Path) -> Result<Vec<Token>> {
    let file = std::fs::File::open(path)?;
    read_timings(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
start,end,conf,word
0.09,0.24,1.0,the
0.24,0.63,1.0,united
0.63,1.17,1.0,states
";

    #[test]
    fn test_read_timings() {
        let tokens = read_timings(SAMPLE.as_bytes()).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "the");
        assert_eq!(tokens[0].start, 0.09);
        assert_eq!(tokens[0].end, 0.24);
        assert_eq!(tokens[2].text, "states");
    }

    #[test]
    fn test_read_timings_column_order_is_flexible() {
        let data = "word,conf,start,end\nhello,0.9,0.0,0.5\n";
        let tokens = read_timings(data.as_bytes()).unwrap();
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].confidence, 0.9);
    }

    #[test]
    fn test_non_numeric_timestamp_fails_fast() {
        let data = "word,start,end,conf\nhello,abc,0.5,1.0\n";
        let err = read_timings(data.as_bytes()).unwrap_err();
        assert!(matches!(err, OrdsporError::Timings(_)));
        assert!(err.to_string().contains("record 1"));
    }

    #[test]
    fn test_missing_field_fails_fast() {
        let data = "word,start,end\nhello,0.0,0.5\n";
        let err = read_timings(data.as_bytes()).unwrap_err();
        assert!(matches!(err, OrdsporError::Timings(_)));
    }

    #[test]
    fn test_start_after_end_fails_fast() {
        let data = "word,start,end,conf\nhello,0.6,0.5,1.0\n";
        let err = read_timings(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("'hello'"));
    }

    #[test]
    fn test_read_timings_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let tokens = read_timings_file(file.path()).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text, "united");
    }

    #[test]
    fn test_empty_body_yields_empty_stream() {
        let data = "word,start,end,conf\n";
        let tokens = read_timings(data.as_bytes()).unwrap();
        assert!(tokens.is_empty());
    }
}
