//! Build-time configuration. Secrets are injected at compile time, never stored.

// ==== audio ====
/// 3CX plays prompts as mono 16-bit PCM at 8 kHz.
pub const TELEPHONY_SAMPLE_RATE: u32 = 8_000;
pub const CONTENT_DISPOSITION: &str = "attachment; filename=\"tts-3cx.wav\"";

// ==== OpenAI speech ====
pub const TTS_MODEL: &str = match option_env!("TTS_MODEL") {
    Some(model) => model,
    None => "tts-1",
};
pub const SPEECH_URL: &str = match option_env!("TTS_SPEECH_URL") {
    Some(url) => url,
    None => "https://api.openai.com/v1/audio/speech",
};
pub const DEFAULT_VOICE: &str = "alloy";
pub const DEFAULT_SPEED: f32 = 1.0;

// ==== limits ====
pub const MAX_REQUEST_BYTES: usize = 4 * 1024;
/// 24 kHz mono PCM16 from the API is ~48 KB/s; this caps replies around 40 s.
pub const MAX_UPSTREAM_BYTES: usize = 2 * 1024 * 1024;

// ==== firmware secrets (injected at build) ====
#[cfg(target_os = "espidf")]
pub const OPENAI_KEY: &str = env!("OPENAI_API_KEY");
#[cfg(target_os = "espidf")]
pub const WIFI_SSID: &str = env!("WIFI_SSID");
#[cfg(target_os = "espidf")]
pub const WIFI_PASS: &str = env!("WIFI_PASS");
