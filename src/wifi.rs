use anyhow::{anyhow, Result};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_svc::{
    eventloop::EspSystemEventLoop,
    nvs::EspDefaultNvsPartition,
    wifi::{BlockingWifi, ClientConfiguration, Configuration, EspWifi},
};
use heapless::String as HString;
use log::info;

use crate::config::{WIFI_PASS, WIFI_SSID};

/* ------------ STA bring-up ------------------------------------------- */
pub fn init_sta() -> Result<Box<BlockingWifi<EspWifi<'static>>>> {
    let per   = Peripherals::take()?;
    let sys   = EspSystemEventLoop::take()?;
    let nvs   = EspDefaultNvsPartition::take()?;
    let modem = per.modem;

    let ssid: HString<32> = HString::try_from(WIFI_SSID)
        .map_err(|_| anyhow!("WIFI_SSID longer than 32 bytes"))?;
    let pass: HString<64> = HString::try_from(WIFI_PASS)
        .map_err(|_| anyhow!("WIFI_PASS longer than 64 bytes"))?;

    let wifi_drv = EspWifi::new(modem, sys.clone(), Some(nvs))?;
    let mut wifi = BlockingWifi::wrap(wifi_drv, sys)?;

    wifi.set_configuration(&Configuration::Client(ClientConfiguration {
        ssid,
        password: pass,
        ..Default::default()
    }))?;

    wifi.start()?;
    wifi.connect()?;
    wifi.wait_netif_up()?;               // DHCP done

    let ip = wifi.wifi().sta_netif().get_ip_info()?.ip;
    info!("IP  : {ip}");
    info!("3CX prompt URL ➜ http://{ip}/tts");

    Ok(Box::new(wifi))
}

/// Reconnect if the AP dropped us. Errors are swallowed, the caller loops.
pub fn watchdog(wifi: &mut BlockingWifi<EspWifi<'static>>) {
    if wifi.is_started().unwrap_or(false) && !wifi.is_connected().unwrap_or(false) {
        log::warn!("Wi-Fi down – reconnecting…");

        for _ in 0..3 {
            let _ = wifi.stop();
            let _ = wifi.start();
            if wifi.connect().is_ok() {
                break;
            }
        }
    }
}
