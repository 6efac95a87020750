// Stream: format tag, original length (u64 LE), then groups of up to 8 tokens.
// Each group starts with a flag byte; bit `i` set means token `i` is a
// back-reference (u16 LE offset, u8 length - 3), unset means a literal byte.

use std::collections::HashMap;

use crate::CompressionError;

const FORMAT_TAG: u8 = 0x4c;
const HEADER_LEN: usize = 9;
const GROUP_SIZE: usize = 8;
const MIN_MATCH: usize = 3;
const MAX_MATCH: usize = MIN_MATCH + u8::MAX as usize;
const REFERENCE_LEN: usize = 3;

type Chains = HashMap<[u8; MIN_MATCH], Vec<usize>>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Lzss {
    window: usize,
    max_chain: usize,
}

impl Lzss {
    pub(crate) const fn new(window: u16, max_chain: usize) -> Self {
        Lzss {
            window: window as usize,
            max_chain,
        }
    }

    pub(crate) fn encode(&self, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + data.len() / 2);
        out.push(FORMAT_TAG);
        out.extend_from_slice(&(data.len() as u64).to_le_bytes());

        let mut chains = Chains::new();
        let mut flags_at = 0;
        let mut slot = 0;
        let mut pos = 0;
        while pos < data.len() {
            if slot == 0 {
                flags_at = out.len();
                out.push(0);
            }

            let (offset, length) = self.longest_match(data, pos, &chains);
            let step = if length >= MIN_MATCH {
                out[flags_at] |= 1 << slot;
                out.extend_from_slice(&(offset as u16).to_le_bytes());
                out.push((length - MIN_MATCH) as u8);
                length
            } else {
                out.push(data[pos]);
                1
            };
            for indexed in pos..pos + step {
                index_position(&mut chains, data, indexed);
            }
            pos += step;
            slot = (slot + 1) % GROUP_SIZE;
        }
        out
    }

    fn longest_match(&self, data: &[u8], pos: usize, chains: &Chains) -> (usize, usize) {
        let Some(candidates) = key_at(data, pos).and_then(|key| chains.get(&key)) else {
            return (0, 0);
        };
        let limit = (data.len() - pos).min(MAX_MATCH);
        let mut best = (0, 0);
        for &candidate in candidates.iter().rev().take(self.max_chain) {
            let offset = pos - candidate;
            if offset > self.window {
                break;
            }
            let length = data[candidate..]
                .iter()
                .zip(&data[pos..pos + limit])
                .take_while(|(a, b)| a == b)
                .count();
            if length > best.1 {
                best = (offset, length);
                if length == limit {
                    break;
                }
            }
        }
        best
    }
}

pub(crate) fn decode(stream: &[u8]) -> Result<Vec<u8>, CompressionError> {
    if stream.len() < HEADER_LEN {
        return Err(CompressionError::Truncated(HEADER_LEN - stream.len()));
    }
    if stream[0] != FORMAT_TAG {
        return Err(CompressionError::InvalidFormat(stream[0]));
    }
    let mut length = [0; HEADER_LEN - 1];
    length.copy_from_slice(&stream[1..HEADER_LEN]);
    let expected = u64::from_le_bytes(length);

    let body = stream.len() - HEADER_LEN;
    let reachable = body.div_ceil(REFERENCE_LEN).saturating_mul(MAX_MATCH);
    if expected > reachable as u64 {
        let missing = min_body_len(expected).saturating_sub(body as u64);
        return Err(CompressionError::Truncated(
            usize::try_from(missing).unwrap_or(usize::MAX),
        ));
    }
    let expected = expected as usize;

    let mut out = Vec::with_capacity(expected);
    let mut cursor = HEADER_LEN;
    while out.len() < expected {
        let flags = *stream.get(cursor).ok_or(CompressionError::Truncated(1))?;
        cursor += 1;
        for slot in 0..GROUP_SIZE {
            if out.len() >= expected {
                break;
            }
            if flags & (1 << slot) == 0 {
                out.push(*stream.get(cursor).ok_or(CompressionError::Truncated(1))?);
                cursor += 1;
                continue;
            }

            let reference = stream
                .get(cursor..cursor + REFERENCE_LEN)
                .ok_or_else(|| CompressionError::Truncated(cursor + REFERENCE_LEN - stream.len()))?;
            cursor += REFERENCE_LEN;
            let offset = u16::from_le_bytes([reference[0], reference[1]]) as usize;
            let length = reference[2] as usize + MIN_MATCH;
            if offset == 0 || offset > out.len() {
                return Err(CompressionError::InvalidReference {
                    offset,
                    position: out.len(),
                });
            }
            // Byte by byte: the source may overlap what is being written.
            let start = out.len() - offset;
            for i in start..start + length {
                out.push(out[i]);
            }
        }
    }

    if out.len() != expected {
        return Err(CompressionError::LengthMismatch {
            expected,
            actual: out.len(),
        });
    }
    if cursor != stream.len() {
        return Err(CompressionError::TrailingData(stream.len() - cursor));
    }
    Ok(out)
}

// Shortest body able to expand to `expected` bytes: only full-length references.
fn min_body_len(expected: u64) -> u64 {
    let references = expected.div_ceil(MAX_MATCH as u64);
    references * REFERENCE_LEN as u64 + references.div_ceil(GROUP_SIZE as u64)
}

fn key_at(data: &[u8], pos: usize) -> Option<[u8; MIN_MATCH]> {
    data.get(pos..pos + MIN_MATCH)?.try_into().ok()
}

fn index_position(chains: &mut Chains, data: &[u8], pos: usize) {
    if let Some(key) = key_at(data, pos) {
        chains.entry(key).or_default().push(pos);
    }
}
