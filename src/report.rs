//! JSON output structures for --format json

use crate::bigram::PairCount;
use crate::path::Temple;
use serde::{Deserialize, Serialize};

/// Result of a `caesar` or `vigenere` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CipherReport {
    /// Which cipher produced the output
    pub command: String,
    /// The transformed text
    pub output: String,
}

/// Result of an `addition` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditionReport {
    pub command: String,
    /// The sum, most significant digit first, without leading zeros
    pub sum: String,
}

/// Result of a `path` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathReport {
    pub rows: usize,
    pub cols: usize,
    /// Visit numbers per cell; 0 marks an unvisited cell
    pub grid: Vec<Vec<u32>>,
}

/// One counted pair in a `bigram` report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPair {
    pub pair: String,
    pub count: u64,
}

/// Result of a `bigram` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BigramReport {
    /// Number of distinct adjacent pairs
    pub distinct: usize,
    pub pairs: Vec<JsonPair>,
}

impl PathReport {
    pub fn new(rows: usize, cols: usize, temple: &Temple) -> Self {
        Self {
            rows,
            cols,
            grid: temple.grid(),
        }
    }
}

impl BigramReport {
    pub fn new(pairs: &[PairCount]) -> Self {
        Self {
            distinct: pairs.len(),
            pairs: pairs
                .iter()
                .map(|p| JsonPair {
                    pair: p.pair.clone(),
                    count: p.count,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cipher_report_serializes() {
        let report = CipherReport {
            command: "caesar".to_string(),
            output: "Ebiil2".to_string(),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"command\":\"caesar\""));
        assert!(json.contains("\"output\":\"Ebiil2\""));
    }

    #[test]
    fn test_bigram_report_from_counts() {
        let pairs = crate::bigram::count_pairs("a b a b a");
        let report = BigramReport::new(&pairs);
        assert_eq!(report.distinct, 2);
        assert_eq!(report.pairs[0].pair, "a b");
        assert_eq!(report.pairs[0].count, 2);
    }

    #[test]
    fn test_path_report_round_trips_through_json() {
        let temple = crate::path::walk(2, 2, &[crate::path::Direction::Right]).unwrap();
        let report = PathReport::new(2, 2, &temple);
        let json = serde_json::to_string(&report).unwrap();
        let back: PathReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.grid, vec![vec![1, 2], vec![0, 0]]);
    }
}
