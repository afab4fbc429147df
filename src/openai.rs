// ===================== openai.rs =====================
use anyhow::{bail, Result};
use thiserror::Error;

// HTTP traits & types (embedded-svc 0.28.1 – see Cargo.toml)
use embedded_svc::http::client::{Client, Request, Response};

// HTTPS connection with the CA bundle
use esp_idf_svc::http::client::{Configuration as HttpCfg, EspHttpConnection};
use esp_idf_svc::sys::esp_crt_bundle_attach;

// ESP I/O traits (write_all)
use esp_idf_svc::io::Write;

use crate::config::{MAX_UPSTREAM_BYTES, OPENAI_KEY, SPEECH_URL};
use crate::speech::SpeechRequest;

/// Non-200 answer from the speech API, passed through to our caller.
#[derive(Debug, Error)]
#[error("speech API HTTP {status}: {body}")]
pub struct UpstreamError {
    pub status: u16,
    pub body: String,
}

// ───────── POST JSON to /v1/audio/speech, WAV back ─────────
pub fn synthesize_wav(speech: &SpeechRequest) -> Result<Vec<u8>> {
    let body = speech.upstream_body().to_string();
    log::debug!("📤 speech request: voice={} speed={} ({} chars)",
        speech.voice, speech.speed, speech.text.chars().count());

    let conn = EspHttpConnection::new(&HttpCfg {
        use_global_ca_store: true,
        crt_bundle_attach: Some(esp_crt_bundle_attach),
        ..Default::default()
    })?;
    let mut client = Client::wrap(conn);

    let auth = format!("Bearer {}", OPENAI_KEY);
    let clen = body.len().to_string();

    let headers = [
        ("Authorization",  auth.as_str()),
        ("Content-Type",   "application/json"),
        ("Content-Length", clen.as_str()),
    ];

    let mut req: Request<_> = client.post(SPEECH_URL, &headers)?;
    req.write_all(body.as_bytes())?;
    log::debug!("⏳ waiting for speech API…");
    let mut resp: Response<_> = req.submit()?;
    let status = resp.status();

    // read the whole answer (WAV or error JSON)
    let mut out = Vec::<u8>::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = resp.read(&mut buf)?;
        if n == 0 { break; }
        if out.len() + n > MAX_UPSTREAM_BYTES {
            bail!("speech API reply larger than {} KB", MAX_UPSTREAM_BYTES / 1024);
        }
        out.extend_from_slice(&buf[..n]);
        log::trace!("🎧 chunk {} B (total {} KB)", n, out.len() / 1024);
    }

    if status != 200 {
        return Err(UpstreamError {
            status,
            body: String::from_utf8_lossy(&out).into_owned(),
        }
        .into());
    }

    log::debug!("✅ HTTP {} – {} KB of WAV", status, out.len() / 1024);
    Ok(out)
}
