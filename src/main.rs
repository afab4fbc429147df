// ===================== main.rs =====================
//  ESP32 firmware:
//   • Wi-Fi STA (credentials injected at build)
//   • HTTP server: POST /tts → OpenAI speech → mono 8 kHz PCM16 WAV for 3CX
//   • Wi-Fi watchdog in the main loop
//
//  Host build: offline converter `tts-3cx <in.wav> <out.wav>` running the
//  same audio pipeline.

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use esp_idf_svc::{
        http::server::{Configuration as HttpCfg, EspHttpServer},
        log::EspLogger,
        sys::link_patches,
    };
    use log::{error, info};
    use std::{thread, time::Duration};
    use tts_3cx::{http, wifi};

    link_patches();
    EspLogger::initialize_default();

    // 1️⃣  Wi-Fi (blocks until we have an IP)
    let wifi: &'static mut _ = Box::leak(wifi::init_sta()?);

    // 2️⃣  HTTP server – retry until it starts
    loop {
        let cfg = HttpCfg {
            max_uri_handlers: 8,
            stack_size: 24 * 1024,            // TLS to the speech API runs on this task
            ..Default::default()
        };

        match EspHttpServer::new(&cfg) {
            Ok(mut server) => {
                if let Err(e) = http::register_handlers(&mut server) {
                    error!("register_handlers error: {e:?}. Retrying in 2 s…");
                    thread::sleep(Duration::from_secs(2));
                    continue;
                }
                info!("HTTP ready – POST /tts");
                Box::leak(Box::new(server));
                break;
            }
            Err(e) => {
                error!("EspHttpServer::new error: {e:?}. Retrying in 2 s…");
                thread::sleep(Duration::from_secs(2));
            }
        }
    }

    // 3️⃣  main loop – Wi-Fi watchdog & idle
    loop {
        wifi::watchdog(wifi);
        thread::sleep(Duration::from_secs(5));
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() -> anyhow::Result<()> {
    use anyhow::{bail, Context};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input, output] = args.as_slice() else {
        bail!("usage: tts-3cx <in.wav> <out.wav>");
    };

    let wav = std::fs::read(input).with_context(|| format!("reading {input}"))?;
    let out = tts_3cx::convert_for_telephony(&wav).with_context(|| format!("converting {input}"))?;
    std::fs::write(output, &out).with_context(|| format!("writing {output}"))?;
    log::info!("wrote {output} ({} B, mono 8 kHz PCM16)", out.len());
    Ok(())
}
