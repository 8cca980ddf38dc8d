#![warn(missing_docs)]
//! A Rust implementation of Chimera-512, an iterated block-mixing hash with a
//! 512-bit digest.
//!
//! Each 1024-bit block is folded in half into a 512-bit state, which then goes
//! through ten rounds of S-box substitution, a GF(2^8) matrix mix over 8-byte
//! groups, a byte rotation, and a Feistel swap of the two state halves.
//!
//! Chimera-512 is not a standardized construction and has had no
//! cryptanalysis. It offers no protection against length extension.
//!
//! # Example
//! ```
//! use chimerahash::{hash, to_hex};
//!
//! let digest = hash("hello world".as_bytes());
//! assert_eq!(digest.len(), 64);
//! println!("Result: {}", to_hex(&digest));
//! ```
/// `compress` holds the constant tables, round primitives and the compression function.
pub mod compress;
/// `chimera512` pads a message into blocks and drives the compression over them.
pub mod chimera512;

pub use chimera512::{hash, hash_with, to_hex, Output, DIGEST_SIZE};
pub use compress::{Compressor, BLOCK_SIZE};
