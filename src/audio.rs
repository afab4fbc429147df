//! Upstream WAV → telephony WAV (mono, 8 kHz, PCM16).

use log::{debug, info};

use crate::config::TELEPHONY_SAMPLE_RATE;
use crate::encode::encode_pcm16_wav;
use crate::error::AudioResult;
use crate::resample::resample_linear;
use crate::wav;

pub fn convert_for_telephony(input: &[u8]) -> AudioResult<Vec<u8>> {
    convert(input, TELEPHONY_SAMPLE_RATE)
}

/// Decode, resample to `out_rate`, re-encode. Any error aborts the whole run.
pub fn convert(input: &[u8], out_rate: u32) -> AudioResult<Vec<u8>> {
    let decoded = wav::decode(input)?;
    let in_len = decoded.samples.len();
    let in_rate = decoded.sample_rate;

    let samples = resample_linear(decoded.samples, in_rate, out_rate);
    debug!("resampled {in_len} @ {in_rate} Hz -> {} @ {out_rate} Hz", samples.len());

    let out = encode_pcm16_wav(&samples, out_rate);
    let ms = (samples.len() as u64 * 1000).checked_div(out_rate as u64).unwrap_or(0);
    info!("converted {} B -> {} B ({ms} ms of audio)", input.len(), out.len());
    Ok(out)
}
