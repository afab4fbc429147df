//! Inbound `/tts` request and the matching upstream speech request.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::{CONTENT_DISPOSITION, DEFAULT_SPEED, DEFAULT_VOICE, TTS_MODEL};

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Missing 'text'")]
    MissingText,
}

impl RequestError {
    /// Both are the caller's fault.
    pub fn status(&self) -> u16 {
        400
    }
}

fn default_voice() -> String {
    DEFAULT_VOICE.to_owned()
}

fn default_speed() -> f32 {
    DEFAULT_SPEED
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpeechRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default = "default_speed")]
    pub speed: f32,
}

impl SpeechRequest {
    pub fn from_json(body: &[u8]) -> Result<Self, RequestError> {
        let mut req: SpeechRequest = serde_json::from_slice(body)?;
        req.text = req.text.trim().to_owned();
        if req.text.is_empty() {
            return Err(RequestError::MissingText);
        }
        if req.voice.trim().is_empty() {
            req.voice = default_voice();
        }
        Ok(req)
    }

    /// Body for the speech endpoint; WAV so the pipeline can parse it.
    pub fn upstream_body(&self) -> Value {
        serde_json::json!({
            "model": TTS_MODEL,
            "input": self.text,
            "voice": self.voice,
            "speed": self.speed,
            "response_format": "wav"
        })
    }
}

pub const CORS_HEADERS: &[(&str, &str)] = &[
    ("Access-Control-Allow-Origin",  "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

pub const WAV_RESPONSE_HEADERS: &[(&str, &str)] = &[
    ("Content-Type",                "audio/wav"),
    ("Content-Disposition",         CONTENT_DISPOSITION),
    ("Cache-Control",               "no-store"),
    ("Access-Control-Allow-Origin", "*"),
];

pub const TEXT_RESPONSE_HEADERS: &[(&str, &str)] = &[
    ("Content-Type",                "text/plain; charset=utf-8"),
    ("Access-Control-Allow-Origin", "*"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_voice_and_speed() {
        let req = SpeechRequest::from_json(br#"{"text":"  Hello caller  "}"#).unwrap();
        assert_eq!(req.text, "Hello caller");
        assert_eq!(req.voice, "alloy");
        assert_eq!(req.speed, 1.0);
    }

    #[test]
    fn explicit_fields_are_kept() {
        let req =
            SpeechRequest::from_json(br#"{"text":"hi","voice":"nova","speed":1.25}"#).unwrap();
        assert_eq!(req.voice, "nova");
        assert_eq!(req.speed, 1.25);
    }

    #[test]
    fn blank_or_missing_text_is_rejected() {
        let bodies: [&[u8]; 3] = [br#"{}"#, br#"{"text":"   "}"#, br#"{"voice":"echo"}"#];
        for body in bodies {
            let err = SpeechRequest::from_json(body).unwrap_err();
            assert!(matches!(err, RequestError::MissingText));
            assert_eq!(err.status(), 400);
            assert_eq!(err.to_string(), "Missing 'text'");
        }
    }

    #[test]
    fn garbage_is_invalid_json() {
        let err = SpeechRequest::from_json(b"text=hello").unwrap_err();
        assert!(matches!(err, RequestError::InvalidJson(_)));
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn upstream_asks_for_wav() {
        let req = SpeechRequest::from_json(br#"{"text":"hi"}"#).unwrap();
        let body = req.upstream_body();
        assert_eq!(body["response_format"], "wav");
        assert_eq!(body["input"], "hi");
        assert_eq!(body["voice"], "alloy");
        assert_eq!(body["model"], TTS_MODEL);
        assert!(body.to_string().contains(r#""response_format":"wav""#));
    }

    #[test]
    fn wav_is_sent_as_named_attachment() {
        let (_, disposition) = WAV_RESPONSE_HEADERS
            .iter()
            .find(|(k, _)| *k == "Content-Disposition")
            .unwrap();
        assert_eq!(*disposition, "attachment; filename=\"tts-3cx.wav\"");
    }
}
