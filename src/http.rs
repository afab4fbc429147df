use anyhow::Result;
use embedded_svc::{
    http::Method,
    io::{Read as IoRead, Write as IoWrite},
};
use esp_idf_hal::io::ErrorType;
use esp_idf_svc::http::server::{Connection, EspHttpServer, Request};

use crate::audio::convert_for_telephony;
use crate::config::MAX_REQUEST_BYTES;
use crate::openai::{self, UpstreamError};
use crate::speech::{SpeechRequest, CORS_HEADERS, TEXT_RESPONSE_HEADERS, WAV_RESPONSE_HEADERS};

pub fn register_handlers(srv: &mut EspHttpServer<'static>) -> Result<()> {
    /* -------- CORS preflight --------------------------------------- */
    srv.fn_handler("/tts", Method::Options, |req| -> Result<()> {
        let mut resp = req.into_response(204, None::<&str>, CORS_HEADERS)?;
        resp.flush()?;
        Ok(())
    })?;

    /* -------- text → speech → 8 kHz WAV ---------------------------- */
    srv.fn_handler("/tts", Method::Post, |mut req| -> Result<()> {
        let len = req
            .header("Content-Length")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(0);

        if !(1..=MAX_REQUEST_BYTES).contains(&len) {
            let status = if len == 0 { 411 } else { 413 };
            let mut resp = req.into_status_response(status)?;
            resp.flush()?;
            return Ok(());
        }

        let mut body = vec![0u8; len];
        let mut off = 0;
        while off < len {
            let n = IoRead::read(&mut req, &mut body[off..])?;
            if n == 0 { break; }
            off += n;
        }
        body.truncate(off);

        let speech = match SpeechRequest::from_json(&body) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("📝 bad /tts request: {e}");
                return send_text(req, e.status(), &e.to_string());
            }
        };
        log::info!("📝 /tts: \"{}\" (voice {})", speech.text, speech.voice);

        let upstream = match openai::synthesize_wav(&speech) {
            Ok(wav) => wav,
            Err(e) => {
                if let Some(up) = e.downcast_ref::<UpstreamError>() {
                    log::error!("speech API HTTP {}", up.status);
                    return send_text(req, up.status, &up.body);
                }
                log::error!("speech API: {e:?}");
                return send_text(req, 502, &format!("Upstream request failed: {e}"));
            }
        };

        let wav = match convert_for_telephony(&upstream) {
            Ok(w) => w,
            Err(e) => {
                log::error!("🔊 conversion failed ({:?}): {e}", e.kind());
                return send_text(req, 500, &e.to_string());
            }
        };

        let mut resp = req.into_response(200, None::<&str>, WAV_RESPONSE_HEADERS)?;
        IoWrite::write_all(&mut resp, &wav)?;
        log::info!("🏁 /tts – {} KB sent", wav.len() / 1024);
        Ok(())
    })?;

    Ok(())
}

fn send_text<C>(req: Request<C>, status: u16, msg: &str) -> Result<()>
where
    C: Connection + IoWrite + ErrorType,
    <C as ErrorType>::Error: std::error::Error + Send + Sync + 'static,
{
    let mut resp = req.into_response(status, None::<&str>, TEXT_RESPONSE_HEADERS)?;
    IoWrite::write_all(&mut resp, msg.as_bytes())?;
    Ok(())
}
