//! CYW43439 station interface.
//!
//! Joining goes through `cyw43::Control`; the link and address come from
//! the embassy-net stack, which runs DHCP in its own task.

use core::fmt::Write;

use cyberdeck::config::WIFI_JOIN_TIMEOUT_MS;
use cyberdeck::hal::{AddressText, Network, ScanResult, ScanResults};
use cyberdeck::Error;
use cyw43::{Control, JoinOptions, ScanOptions};
use defmt::{debug, info};
use embassy_net::Stack;
use embassy_time::{with_timeout, Duration};
use heapless::String;

pub struct CywNetwork {
    control: Control<'static>,
    stack: Stack<'static>,
    /// SSID of the last successful join.
    joined: Option<String<32>>,
}

impl CywNetwork {
    pub fn new(control: Control<'static>, stack: Stack<'static>) -> Self {
        Self {
            control,
            stack,
            joined: None,
        }
    }
}

impl Network for CywNetwork {
    fn is_connected(&self) -> bool {
        self.stack.is_link_up() && self.stack.config_v4().is_some()
    }

    async fn connect(&mut self, ssid: &str, password: &str) -> Result<(), Error> {
        let join = self
            .control
            .join(ssid, JoinOptions::new(password.as_bytes()));

        match with_timeout(Duration::from_millis(WIFI_JOIN_TIMEOUT_MS), join).await {
            Ok(Ok(())) => {
                info!("wifi: associated with {}", ssid);
                let mut name = String::new();
                for c in ssid.chars() {
                    if name.push(c).is_err() {
                        break;
                    }
                }
                self.joined = Some(name);
                Ok(())
            }
            Ok(Err(e)) => Err(Error::WifiJoin(e.status)),
            Err(_) => Err(Error::Timeout),
        }
    }

    fn local_address(&self) -> Option<AddressText> {
        let config = self.stack.config_v4()?;
        let mut text = AddressText::new();
        write!(text, "{}", config.address.address()).ok()?;
        Some(text)
    }

    fn current_network_name(&self) -> Option<&str> {
        if self.is_connected() {
            self.joined.as_deref()
        } else {
            None
        }
    }

    async fn scan(&mut self) -> Result<ScanResults, Error> {
        let mut results = ScanResults::new();
        let mut scanner = self.control.scan(ScanOptions::default()).await;

        while let Some(bss) = scanner.next().await {
            let len = usize::from(bss.ssid_len).min(bss.ssid.len());
            // Hidden networks advertise an empty SSID.
            if len == 0 {
                continue;
            }
            let result = ScanResult::from_ssid_bytes(&bss.ssid[..len], bss.rssi);
            if results.push(result).is_err() {
                break;
            }
        }

        debug!("wifi: scan saw {} networks", results.len());
        Ok(results)
    }
}
