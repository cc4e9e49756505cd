//! Two-gram frequency counting
//!
//! Tokenizes free text on a fixed separator set, forms adjacent word pairs,
//! and counts each distinct pair. Output ordering follows first appearance,
//! not frequency.

use std::collections::HashMap;

/// Punctuation treated as word separators, in addition to ASCII whitespace
const SEPARATORS: [char; 4] = [',', '.', ';', '!'];

/// A distinct adjacent word pair with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCount {
    /// The two words joined with a single space
    pub pair: String,
    pub count: u64,
}

/// Split `text` into words on whitespace and the separator punctuation.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_ascii_whitespace() || SEPARATORS.contains(&c))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Count adjacent word pairs in `text`, in first-appearance order.
///
/// Fewer than two words yields no pairs.
pub fn count_pairs(text: &str) -> Vec<PairCount> {
    let words = tokenize(text);

    let mut pairs: Vec<PairCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for window in words.windows(2) {
        let key = format!("{} {}", window[0], window[1]);
        match index.get(&key) {
            Some(&i) => pairs[i].count += 1,
            None => {
                index.insert(key.clone(), pairs.len());
                pairs.push(PairCount { pair: key, count: 1 });
            }
        }
    }

    pairs
}

/// Render pair counts in the line format of the CLI: the number of distinct
/// pairs, then one `pair count` line each.
pub fn render(pairs: &[PairCount]) -> String {
    let mut out = format!("{}\n", pairs.len());
    for entry in pairs {
        out.push_str(&entry.pair);
        out.push(' ');
        out.push_str(&entry.count.to_string());
        out.push('\n');
    }
    out
}
