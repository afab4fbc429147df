//! Mono `f32` → canonical 16-bit PCM WAV (44-byte header, no extensions).

/// Quantize one sample; asymmetric so both -1.0 and 1.0 hit the i16 limits.
pub fn to_pcm16(sample: f32) -> i16 {
    let s = sample.clamp(-1.0, 1.0);
    if s < 0.0 {
        (s * 32768.0) as i16
    } else {
        (s * 32767.0) as i16
    }
}

pub fn encode_pcm16_wav(samples: &[f32], sample_rate: u32) -> Vec<u8> {
    let mut wav = Vec::with_capacity(44 + samples.len() * 2);
    // RIFF sizes are u32; saturate rather than wrap on absurd inputs
    let data_len = u32::try_from(samples.len().saturating_mul(2)).unwrap_or(u32::MAX);
    let riff_len = data_len.saturating_add(36);

    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&riff_len.to_le_bytes());
    wav.extend_from_slice(b"WAVEfmt ");           // sub-chunk id
    wav.extend_from_slice(&16u32.to_le_bytes());  // fmt size
    wav.extend_from_slice(&1u16.to_le_bytes());   // PCM
    wav.extend_from_slice(&1u16.to_le_bytes());   // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&sample_rate.saturating_mul(2).to_le_bytes()); // byte-rate
    wav.extend_from_slice(&2u16.to_le_bytes());   // block align
    wav.extend_from_slice(&16u16.to_le_bytes());  // bits/sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&to_pcm16(s).to_le_bytes());
    }
    wav
}
