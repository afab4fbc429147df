//! Single-sample conversion to normalized `f32`.

use crate::error::{AudioError, AudioResult};
use crate::wav::AudioFormat;

/// Decode one sample starting at `bytes[0]` into [-1, 1].
///
/// `bytes` must hold at least `bits / 8` bytes; the decoder guarantees it.
pub fn decode_sample(bytes: &[u8], format: AudioFormat, bits: u16) -> AudioResult<f32> {
    let unsupported = AudioError::UnsupportedBitDepth { format_code: format as u16, bits };
    let b = |n: usize| bytes.get(..n).ok_or(AudioError::Truncated("sample past end of data"));

    match (format, bits) {
        (AudioFormat::Pcm, 8) => {
            let v = b(1)?[0];
            Ok((v as f32 - 128.0) / 128.0)
        }
        (AudioFormat::Pcm, 16) => {
            let s = b(2)?;
            let v = i16::from_le_bytes([s[0], s[1]]);
            Ok(if v < 0 { v as f32 / 32768.0 } else { v as f32 / 32767.0 })
        }
        (AudioFormat::Pcm, 24) => {
            let s = b(3)?;
            // low byte zero, then shift back down to sign-extend
            let v = i32::from_le_bytes([0, s[0], s[1], s[2]]) >> 8;
            Ok((v as f32 / 8_388_608.0).clamp(-1.0, 1.0))
        }
        (AudioFormat::IeeeFloat, 32) => {
            let s = b(4)?;
            let v = f32::from_le_bytes([s[0], s[1], s[2], s[3]]);
            Ok(if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) })
        }
        _ => Err(unsupported),
    }
}
