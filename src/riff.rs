//! RIFF/WAVE container walking: FourCC tags, little-endian reads, chunk scan.

use core::fmt;

use log::trace;

use crate::error::{AudioError, AudioResult};

/// 4-byte ASCII chunk identifier.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    pub const RIFF: FourCC = FourCC(*b"RIFF");
    pub const WAVE: FourCC = FourCC(*b"WAVE");
    pub const FMT: FourCC = FourCC(*b"fmt ");
    pub const DATA: FourCC = FourCC(*b"data");
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.0))
    }
}

// ───────── little-endian readers (None past the end) ─────────
pub fn read_fourcc(buf: &[u8], off: usize) -> Option<FourCC> {
    let b = buf.get(off..off.checked_add(4)?)?;
    Some(FourCC([b[0], b[1], b[2], b[3]]))
}

pub fn read_u16_le(buf: &[u8], off: usize) -> Option<u16> {
    let b = buf.get(off..off.checked_add(2)?)?;
    Some(u16::from_le_bytes([b[0], b[1]]))
}

pub fn read_u32_le(buf: &[u8], off: usize) -> Option<u32> {
    let b = buf.get(off..off.checked_add(4)?)?;
    Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

/// A chunk header found while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub id: FourCC,
    pub size: u32,
    pub payload_offset: usize,
}

/// Raw `fmt ` fields, before any validation of the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmtChunk {
    pub format_code: u16,
    pub num_channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

/// What the scanner needs to hand the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveLayout {
    pub fmt: FmtChunk,
    /// Payload of the first `data` chunk, clamped to the buffer.
    pub data_offset: usize,
    pub data_len: usize,
}

const FMT_MIN_LEN: usize = 16;
const FIRST_CHUNK: usize = 12;

fn parse_fmt(buf: &[u8], chunk: &Chunk) -> AudioResult<FmtChunk> {
    if (chunk.size as usize) < FMT_MIN_LEN {
        return Err(AudioError::BadFmt("fmt chunk shorter than 16 bytes"));
    }
    let end = chunk
        .payload_offset
        .checked_add(chunk.size as usize)
        .ok_or(AudioError::Truncated("fmt chunk runs past end of buffer"))?;
    if end > buf.len() {
        return Err(AudioError::Truncated("fmt chunk runs past end of buffer"));
    }

    let p = chunk.payload_offset;
    // bounds already checked above
    let field16 = |o: usize| read_u16_le(buf, p + o).unwrap_or_default();
    let field32 = |o: usize| read_u32_le(buf, p + o).unwrap_or_default();

    // layout: format(2) channels(2) rate(4) byte-rate(4) block-align(2) bits(2)
    Ok(FmtChunk {
        format_code: field16(0),
        num_channels: field16(2),
        sample_rate: field32(4),
        bits_per_sample: field16(14),
    })
}

/// Verify the RIFF/WAVE signature and locate the `fmt ` and `data` chunks.
///
/// Chunks of any other type are skipped by their size field; an odd size is
/// followed by one pad byte. Only the first `fmt ` and the first `data` chunk
/// are considered, in whatever order they appear.
pub fn scan(buf: &[u8]) -> AudioResult<WaveLayout> {
    if read_fourcc(buf, 0) != Some(FourCC::RIFF) || read_fourcc(buf, 8) != Some(FourCC::WAVE) {
        return Err(AudioError::NotRiffWave);
    }

    let mut fmt: Option<FmtChunk> = None;
    let mut data: Option<(usize, usize)> = None;
    let mut off = FIRST_CHUNK;

    while fmt.is_none() || data.is_none() {
        if buf.len().saturating_sub(off) < 8 {
            break;
        }
        let (Some(id), Some(size)) = (read_fourcc(buf, off), read_u32_le(buf, off + 4)) else {
            break;
        };
        let chunk = Chunk { id, size, payload_offset: off + 8 };

        match id {
            FourCC::FMT if fmt.is_none() => {
                fmt = Some(parse_fmt(buf, &chunk)?);
            }
            FourCC::DATA if data.is_none() => {
                // streamed responses may carry a placeholder size
                let avail = buf.len().saturating_sub(chunk.payload_offset);
                let len = (size as usize).min(avail);
                if len < size as usize {
                    trace!("data chunk declares {size} B, only {len} B present");
                }
                data = Some((chunk.payload_offset, len));
            }
            _ => trace!("skipping chunk {:?} ({} B)", chunk.id, chunk.size),
        }

        let padded = (size as usize).saturating_add(size as usize & 1);
        off = match chunk.payload_offset.checked_add(padded) {
            Some(next) => next,
            None => break,
        };
    }

    let fmt = fmt.ok_or(AudioError::MissingFmt)?;
    let (data_offset, data_len) = data.ok_or(AudioError::MissingData)?;
    Ok(WaveLayout { fmt, data_offset, data_len })
}
