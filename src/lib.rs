//! Temple - command-driven text-transformation toolkit
//!
//! Three unrelated tasks behind one CLI:
//!
//! - **Ciphers**: Caesar and Vigenere shifts over letters and digits, plus
//!   arbitrary-precision decimal addition of Caesar-shifted operands.
//! - **Path reconstruction**: decodes direction tokens and replays the walk
//!   on a grid, numbering visited cells.
//! - **Two-gram counting**: adjacent word pair frequencies over free text.
//!
//! The cipher transforms subtract their offsets (decode direction); encoding
//! is performed by supplying the negated key. These are classical
//! substitution ciphers for puzzle use, not secure encryption.

pub mod alphabet;
pub mod bigram;
pub mod bignum;
pub mod cipher;
pub mod cli;
pub mod path;
pub mod report;
