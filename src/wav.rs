//! WAV decoding to mono `f32`.

use log::debug;

use crate::error::{AudioError, AudioResult};
use crate::riff::{self, FmtChunk};
use crate::sample::decode_sample;

// format codes
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Pcm = 0x0001,
    IeeeFloat = 0x0003,
}

impl AudioFormat {
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            0x0001 => Some(Self::Pcm),
            0x0003 => Some(Self::IeeeFloat),
            _ => None,
        }
    }

    fn supports_bits(self, bits: u16) -> bool {
        match self {
            AudioFormat::Pcm => matches!(bits, 8 | 16 | 24),
            AudioFormat::IeeeFloat => bits == 32,
        }
    }
}

/// Validated `fmt ` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveFormat {
    pub audio_format: AudioFormat,
    pub num_channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl TryFrom<FmtChunk> for WaveFormat {
    type Error = AudioError;

    fn try_from(fmt: FmtChunk) -> AudioResult<Self> {
        let audio_format = AudioFormat::from_u16(fmt.format_code)
            .ok_or(AudioError::UnsupportedFormatCode(fmt.format_code))?;
        if !audio_format.supports_bits(fmt.bits_per_sample) {
            return Err(AudioError::UnsupportedBitDepth {
                format_code: fmt.format_code,
                bits: fmt.bits_per_sample,
            });
        }
        if fmt.num_channels == 0 {
            return Err(AudioError::BadFmt("zero channels"));
        }
        if fmt.sample_rate == 0 {
            return Err(AudioError::BadFmt("zero sample rate"));
        }
        Ok(WaveFormat {
            audio_format,
            num_channels: fmt.num_channels,
            sample_rate: fmt.sample_rate,
            bits_per_sample: fmt.bits_per_sample,
        })
    }
}

impl WaveFormat {
    pub fn bytes_per_sample(&self) -> usize {
        self.bits_per_sample as usize / 8
    }

    pub fn frame_size(&self) -> usize {
        self.bytes_per_sample() * self.num_channels as usize
    }
}

/// Mono samples in [-1, 1] at the source rate.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

/// Decode a fully buffered RIFF/WAVE stream, averaging all channels.
///
/// A trailing partial frame is dropped.
pub fn decode(buf: &[u8]) -> AudioResult<DecodedAudio> {
    let layout = riff::scan(buf)?;
    let format = WaveFormat::try_from(layout.fmt)?;
    debug!(
        "wav: {:?} {} ch, {} Hz, {} bit, {} B of data",
        format.audio_format,
        format.num_channels,
        format.sample_rate,
        format.bits_per_sample,
        layout.data_len
    );

    let data = &buf[layout.data_offset..layout.data_offset + layout.data_len];
    let bps = format.bytes_per_sample();
    let frames = data.chunks_exact(format.frame_size());
    let channels = format.num_channels as f32;

    let mut samples = Vec::with_capacity(frames.len());
    for frame in frames {
        let mut sum = 0.0f32;
        for raw in frame.chunks_exact(bps) {
            sum += decode_sample(raw, format.audio_format, format.bits_per_sample)?;
        }
        samples.push(sum / channels);
    }

    Ok(DecodedAudio { samples, sample_rate: format.sample_rate })
}
