//! Text-to-speech bridge for 3CX: OpenAI speech in, mono 8 kHz PCM16 WAV out.
//!
//! The audio core (`riff`, `sample`, `wav`, `resample`, `encode`, `audio`)
//! and the request model (`speech`) build everywhere; the HTTP server,
//! upstream client and Wi-Fi glue only build for ESP-IDF.

pub mod audio;
pub mod config;
pub mod encode;
pub mod error;
pub mod resample;
pub mod riff;
pub mod sample;
pub mod speech;
pub mod wav;

#[cfg(target_os = "espidf")]
pub mod http;
#[cfg(target_os = "espidf")]
pub mod openai;
#[cfg(target_os = "espidf")]
pub mod wifi;

pub use audio::{convert, convert_for_telephony};
pub use encode::encode_pcm16_wav;
pub use error::{AudioError, AudioResult, ErrorKind};
pub use resample::resample_linear;
pub use wav::{decode, AudioFormat, DecodedAudio, WaveFormat};
