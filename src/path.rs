//! Temple path reconstruction
//!
//! Decodes a line of move tokens into directions and replays them on an
//! N x M grid starting at the top-left cell, numbering visited cells in
//! visit order. Three token encodings exist, distinguished by the first
//! byte of the token:
//!
//! - `a????` - four raw bytes; the strictly largest picks the direction
//! - `b...dd` - prime/palindrome classification of the token decides
//! - `cLMd...` - circular digit sum over the token's own digits decides

use thiserror::Error;

/// A single step through the temple grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

/// Errors for move decoding and grid replay
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("move token {token:?} is too short for encoding {encoding:?}")]
    TokenTooShort { token: String, encoding: char },

    #[error("move token {token:?} has a non-digit where a digit is required")]
    NonDigit { token: String },

    #[error("move token {token:?} indexes outside its own digits")]
    IndexOutOfRange { token: String },

    #[error("step {step} ({direction:?}) leaves the {rows}x{cols} grid")]
    OutOfBounds {
        step: usize,
        direction: Direction,
        rows: usize,
        cols: usize,
    },

    #[error("grid dimensions must be non-zero")]
    EmptyGrid,
}

/// A replayed path painted onto a grid of visit numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Temple {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

/// Decode a whitespace-separated moves line into directions.
///
/// Tokens starting with anything other than `a`, `b` or `c` are ignored, as
/// are `a` tokens with no strictly dominant byte.
pub fn decode_moves(line: &str) -> Result<Vec<Direction>, PathError> {
    let mut moves = Vec::new();

    for token in line.split_whitespace() {
        let decoded = match token.as_bytes()[0] {
            b'a' => decode_a(token)?,
            b'b' => Some(decode_b(token)?),
            b'c' => Some(decode_c(token)?),
            _ => None,
        };
        if let Some(direction) = decoded {
            moves.push(direction);
        }
    }

    Ok(moves)
}

/// `a` encoding: bytes 1..=4 compared as raw values, strict maximum wins.
fn decode_a(token: &str) -> Result<Option<Direction>, PathError> {
    let bytes = token.as_bytes();
    if bytes.len() < 5 {
        return Err(PathError::TokenTooShort {
            token: token.to_string(),
            encoding: 'a',
        });
    }

    let (x1, x2, x3, x4) = (bytes[1], bytes[2], bytes[3], bytes[4]);

    let direction = if x1 > x2 && x1 > x3 && x1 > x4 {
        Some(Direction::Right)
    } else if x2 > x1 && x2 > x3 && x2 > x4 {
        Some(Direction::Up)
    } else if x3 > x1 && x3 > x2 && x3 > x4 {
        Some(Direction::Left)
    } else if x4 > x1 && x4 > x2 && x4 > x3 {
        Some(Direction::Down)
    } else {
        None // no clear direction
    };

    Ok(direction)
}

/// `b` encoding: the trailing two-digit number and the token's palindromic
/// shape (leading tag byte excluded) pick the direction.
fn decode_b(token: &str) -> Result<Direction, PathError> {
    let bytes = token.as_bytes();
    if bytes.len() < 3 {
        return Err(PathError::TokenTooShort {
            token: token.to_string(),
            encoding: 'b',
        });
    }

    let d1 = digit_value(bytes[bytes.len() - 2], token)?;
    let d2 = digit_value(bytes[bytes.len() - 1], token)?;
    let num = d1 * 10 + d2;

    let prime = is_prime(num);
    let palindrome = is_palindrome(bytes);

    Ok(match (palindrome, prime) {
        (true, true) => Direction::Left,
        (true, false) => Direction::Right,
        (false, true) => Direction::Up,
        (false, false) => Direction::Down,
    })
}

/// `c` encoding: `token[1]` is the digit count, `token[2]` the modulus; a
/// circular sum over the token's digit region selects from L, U, R, D.
fn decode_c(token: &str) -> Result<Direction, PathError> {
    let bytes = token.as_bytes();
    if bytes.len() < 3 {
        return Err(PathError::TokenTooShort {
            token: token.to_string(),
            encoding: 'c',
        });
    }

    let len = digit_value(bytes[1], token)?;
    let modulus = digit_value(bytes[2], token)?;
    if len == 0 {
        return Err(PathError::IndexOutOfRange {
            token: token.to_string(),
        });
    }

    let mut circular_sum = 0u32;
    for i in 0..modulus {
        let idx = ((modulus * i) % len) as usize + 3;
        let byte = *bytes.get(idx).ok_or_else(|| PathError::IndexOutOfRange {
            token: token.to_string(),
        })?;
        circular_sum += digit_value(byte, token)?;
    }

    const MOVES: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];
    Ok(MOVES[(circular_sum % 4) as usize])
}

/// Replay `moves` from the top-left cell of a `rows` x `cols` grid.
///
/// The starting cell is numbered 1 and each step numbers its destination
/// with the next value; revisited cells keep the latest number. Steps that
/// would leave the grid are errors rather than wrap-around.
pub fn walk(rows: usize, cols: usize, moves: &[Direction]) -> Result<Temple, PathError> {
    if rows == 0 || cols == 0 {
        return Err(PathError::EmptyGrid);
    }

    let mut cells = vec![0u32; rows * cols];
    let (mut r, mut c) = (0usize, 0usize);
    cells[0] = 1;

    for (step, &direction) in moves.iter().enumerate() {
        let out_of_bounds = PathError::OutOfBounds {
            step: step + 1,
            direction,
            rows,
            cols,
        };

        match direction {
            Direction::Left if c > 0 => c -= 1,
            Direction::Right if c + 1 < cols => c += 1,
            Direction::Up if r > 0 => r -= 1,
            Direction::Down if r + 1 < rows => r += 1,
            _ => return Err(out_of_bounds),
        }

        cells[r * cols + c] = (step + 2) as u32;
    }

    Ok(Temple { rows, cols, cells })
}

impl Temple {
    /// Render the grid as rows of space-terminated cell values.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.push_str(&self.cells[r * self.cols + c].to_string());
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    /// The grid as row vectors, for structured output.
    pub fn grid(&self) -> Vec<Vec<u32>> {
        self.cells.chunks(self.cols).map(|row| row.to_vec()).collect()
    }
}

fn digit_value(byte: u8, token: &str) -> Result<u32, PathError> {
    if byte.is_ascii_digit() {
        Ok((byte - b'0') as u32)
    } else {
        Err(PathError::NonDigit {
            token: token.to_string(),
        })
    }
}

/// 6k +/- 1 trial division.
fn is_prime(num: u32) -> bool {
    if num <= 1 {
        return false;
    }
    if num <= 3 {
        return true;
    }
    if num % 2 == 0 || num % 3 == 0 {
        return false;
    }
    let mut d = 5;
    while d * d <= num {
        if num % d == 0 || num % (d + 2) == 0 {
            return false;
        }
        d += 6;
    }
    true
}

/// Palindrome over the token body, skipping the leading tag byte.
fn is_palindrome(bytes: &[u8]) -> bool {
    let (mut start, mut end) = (1, bytes.len() - 1);
    while start < end {
        if bytes[start] != bytes[end] {
            return false;
        }
        start += 1;
        end -= 1;
    }
    true
}
