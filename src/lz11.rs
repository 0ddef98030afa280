// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! LZ11 compression, the format the reader decompresses before it checks
//! the signature.
//!
//! ```text
//! header   0x11 │ size u24 LE            (size < 2^24)
//!          0x11 │ 0x000000 │ size u32 LE (otherwise)
//! body     flag byte (MSB first, 1 = back-reference) then 8 tokens
//!
//! back-reference, d = displacement - 1 (12 bits):
//!   len 3..=16        [len-1 : 4 │ d : 12]
//!   len 17..=272      [0 : 4 │ len-17 : 8 │ d : 12]
//!   len 273..=65808   [1 : 4 │ len-273 : 16 │ d : 12]
//! ```
//!
//! The compressor is greedy with hash chains over 3-byte prefixes. Matches
//! may overlap the bytes they produce (displacement shorter than length),
//! which the reader supports.

use crate::error::{Error, Result};

const TAG: u8 = 0x11;

/// Sliding window, the farthest a back-reference can reach.
pub const WINDOW: usize = 0x1000;

const MIN_MATCH: usize = 3;
const MAX_SHORT: usize = 0x10;
const MAX_MEDIUM: usize = 0x110;

/// Longest back-reference the format can express.
pub const MAX_MATCH: usize = 0x10110;

const HASH_BITS: u32 = 12;
const CHAIN_DEPTH: usize = 128;
const NONE: usize = usize::MAX;

/// Compression applied to a finalized container before signing.
pub trait Compressor: Send + Sync {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// The LZ11 compressor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lz11;

impl Compressor for Lz11 {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        compress(input)
    }
}

fn hash3(bytes: &[u8]) -> usize {
    let v = u32::from(bytes[0]) << 16 | u32::from(bytes[1]) << 8 | u32::from(bytes[2]);
    (v.wrapping_mul(0x9E37_79B1) >> (32 - HASH_BITS)) as usize
}

struct MatchFinder {
    head: Vec<usize>,
    prev: Vec<usize>,
}

impl MatchFinder {
    fn new(len: usize) -> Self {
        Self {
            head: vec![NONE; 1 << HASH_BITS],
            prev: vec![NONE; len],
        }
    }

    fn insert(&mut self, input: &[u8], pos: usize) {
        if pos + MIN_MATCH <= input.len() {
            let h = hash3(&input[pos..]);
            self.prev[pos] = self.head[h];
            self.head[h] = pos;
        }
    }

    /// Longest match for `pos` as `(length, displacement)`.
    fn longest(&self, input: &[u8], pos: usize) -> Option<(usize, usize)> {
        if pos + MIN_MATCH > input.len() {
            return None;
        }
        let limit = (input.len() - pos).min(MAX_MATCH);
        let mut best: Option<(usize, usize)> = None;
        let mut candidate = self.head[hash3(&input[pos..])];
        let mut depth = 0;

        while candidate != NONE && depth < CHAIN_DEPTH {
            let disp = pos - candidate;
            if disp > WINDOW {
                break;
            }
            let len = input[candidate..]
                .iter()
                .zip(&input[pos..pos + limit])
                .take_while(|(a, b)| a == b)
                .count();
            if len >= MIN_MATCH && best.map_or(true, |(l, _)| len > l) {
                best = Some((len, disp));
                if len == limit {
                    break;
                }
            }
            candidate = self.prev[candidate];
            depth += 1;
        }
        best
    }
}

fn write_header(out: &mut Vec<u8>, size: usize) -> Result<()> {
    let size = u32::try_from(size)
        .map_err(|_| Error::Compression(format!("input of {} bytes is too large", size)))?;
    out.push(TAG);
    if size < 1 << 24 {
        out.extend_from_slice(&size.to_le_bytes()[..3]);
    } else {
        out.extend_from_slice(&[0, 0, 0]);
        out.extend_from_slice(&size.to_le_bytes());
    }
    Ok(())
}

fn write_reference(out: &mut Vec<u8>, len: usize, disp: usize) {
    let d = disp - 1;
    let d_hi = (d >> 8) as u8;
    let d_lo = (d & 0xFF) as u8;
    if len <= MAX_SHORT {
        out.extend_from_slice(&[((len - 1) << 4) as u8 | d_hi, d_lo]);
    } else if len <= MAX_MEDIUM {
        let l = len - (MAX_SHORT + 1);
        out.extend_from_slice(&[(l >> 4) as u8, ((l & 0xF) << 4) as u8 | d_hi, d_lo]);
    } else {
        let l = len - (MAX_MEDIUM + 1);
        out.extend_from_slice(&[
            0x10 | (l >> 12) as u8,
            ((l >> 4) & 0xFF) as u8,
            ((l & 0xF) << 4) as u8 | d_hi,
            d_lo,
        ]);
    }
}

/// Compress `input` into an LZ11 stream.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len() / 2 + 8);
    write_header(&mut out, input.len())?;

    let mut finder = MatchFinder::new(input.len());
    let mut pos = 0;
    let mut flag_at = 0;
    let mut token = 8;

    while pos < input.len() {
        if token == 8 {
            flag_at = out.len();
            out.push(0);
            token = 0;
        }

        match finder.longest(input, pos) {
            Some((len, disp)) => {
                out[flag_at] |= 0x80 >> token;
                write_reference(&mut out, len, disp);
                for p in pos..pos + len {
                    finder.insert(input, p);
                }
                pos += len;
            }
            None => {
                out.push(input[pos]);
                finder.insert(input, pos);
                pos += 1;
            }
        }
        token += 1;
    }

    Ok(out)
}

fn truncated() -> Error {
    Error::Compression("truncated LZ11 stream".into())
}

/// Decompress an LZ11 stream.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < 4 || data[0] != TAG {
        return Err(Error::Compression("missing LZ11 header".into()));
    }
    let mut size = u32::from_le_bytes([data[1], data[2], data[3], 0]) as usize;
    let mut pos = 4;
    if size == 0 && data.len() >= 8 {
        size = u32::from_le_bytes([data[4], data[5], data[6], data[7]]) as usize;
        pos = 8;
    }

    // the declared size is untrusted until the stream backs it up
    let mut out = Vec::with_capacity(size.min(data.len().saturating_mul(8)));
    let next = |pos: &mut usize| -> Result<u8> {
        let b = *data.get(*pos).ok_or_else(truncated)?;
        *pos += 1;
        Ok(b)
    };

    while out.len() < size {
        let flags = next(&mut pos)?;
        for bit in 0..8 {
            if out.len() >= size {
                break;
            }
            if flags & (0x80 >> bit) == 0 {
                out.push(next(&mut pos)?);
                continue;
            }

            let b1 = next(&mut pos)?;
            let (len, disp) = match b1 >> 4 {
                0 => {
                    let b2 = next(&mut pos)?;
                    let b3 = next(&mut pos)?;
                    let len = ((usize::from(b1 & 0xF) << 4) | usize::from(b2 >> 4)) + MAX_SHORT + 1;
                    (len, ((usize::from(b2 & 0xF) << 8) | usize::from(b3)) + 1)
                }
                1 => {
                    let b2 = next(&mut pos)?;
                    let b3 = next(&mut pos)?;
                    let b4 = next(&mut pos)?;
                    let len = ((usize::from(b1 & 0xF) << 12)
                        | (usize::from(b2) << 4)
                        | usize::from(b3 >> 4))
                        + MAX_MEDIUM
                        + 1;
                    (len, ((usize::from(b3 & 0xF) << 8) | usize::from(b4)) + 1)
                }
                n => {
                    let b2 = next(&mut pos)?;
                    (usize::from(n) + 1, ((usize::from(b1 & 0xF) << 8) | usize::from(b2)) + 1)
                }
            };

            if disp > out.len() {
                return Err(Error::Compression(format!(
                    "back-reference {} bytes behind a {}-byte output",
                    disp,
                    out.len()
                )));
            }
            let from = out.len() - disp;
            for i in 0..len.min(size - out.len()) {
                let b = out[from + i];
                out.push(b);
            }
        }
    }

    Ok(out)
}
