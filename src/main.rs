//! cyberdeck firmware entry point (Pico W).
//!
//! Brings up the LCD, joystick and CYW43 radio, makes one bounded attempt
//! to join the configured network, then hands everything to the menu loop.

#![no_std]
#![no_main]

mod drivers;

use cyberdeck::config::{LCD_I2C_ADDRESS, LCD_I2C_FREQUENCY_HZ, WIFI_PASSWORD, WIFI_SSID};
use cyberdeck::{join_network, Context, MenuController};
use cyw43_pio::{PioSpi, DEFAULT_CLOCK_DIVIDER};
use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_net::StackResources;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{DMA_CH0, I2C1, PIO0};
use embassy_rp::pio::{self, Pio};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use drivers::joystick::AnalogJoystick;
use drivers::lcd::Lcd1602;
use drivers::system::{EmbassyClock, StackProbe};
use drivers::wifi::CywNetwork;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => pio::InterruptHandler<PIO0>;
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

/// embassy-net wants a random seed; nothing here depends on it being secret.
const NET_SEED: u64 = 0x7c8f_3a2e_9d14_6b5a;

static CYW43_STATE: StaticCell<cyw43::State> = StaticCell::new();
static NET_RESOURCES: StaticCell<StackResources<3>> = StaticCell::new();

#[embassy_executor::task]
async fn cyw43_task(
    runner: cyw43::Runner<'static, Output<'static>, PioSpi<'static, PIO0, 0, DMA_CH0>>,
) -> ! {
    runner.run().await
}

#[embassy_executor::task]
async fn net_task(mut runner: embassy_net::Runner<'static, cyw43::NetDriver<'static>>) -> ! {
    runner.run().await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("cyberdeck starting");
    let p = embassy_rp::init(Default::default());

    // LCD (GP6 = SDA, GP7 = SCL)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = LCD_I2C_FREQUENCY_HZ;
    let i2c = I2c::new_async(p.I2C1, p.PIN_7, p.PIN_6, Irqs, i2c_config);
    let mut lcd = Lcd1602::new(i2c, LCD_I2C_ADDRESS);
    if let Err(e) = lcd.init().await {
        warn!("lcd: init failed: {}", e);
    }

    // Joystick (GP27 = Y axis, GP22 = button)
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let axis = Channel::new_pin(p.PIN_27, Pull::None);
    let button = Input::new(p.PIN_22, Pull::Up);
    let joystick = AnalogJoystick::new(adc, axis, button);

    // WiFi radio over PIO SPI
    let fw = cyw43_firmware::CYW43_43439A0;
    let clm = cyw43_firmware::CYW43_43439A0_CLM;

    let pwr = Output::new(p.PIN_23, Level::Low);
    let cs = Output::new(p.PIN_25, Level::High);
    let mut pio = Pio::new(p.PIO0, Irqs);
    let spi = PioSpi::new(
        &mut pio.common,
        pio.sm0,
        DEFAULT_CLOCK_DIVIDER,
        pio.irq0,
        cs,
        p.PIN_24,
        p.PIN_29,
        p.DMA_CH0,
    );

    let state = CYW43_STATE.init(cyw43::State::new());
    let (net_device, mut control, runner) = cyw43::new(state, pwr, spi, fw).await;
    unwrap!(spawner.spawn(cyw43_task(runner)));

    control.init(clm).await;
    control
        .set_power_management(cyw43::PowerManagementMode::PowerSave)
        .await;

    let (stack, net_runner) = embassy_net::new(
        net_device,
        embassy_net::Config::dhcpv4(Default::default()),
        NET_RESOURCES.init(StackResources::new()),
        NET_SEED,
    );
    unwrap!(spawner.spawn(net_task(net_runner)));

    let network = CywNetwork::new(control, stack);
    let mut ctx = Context::new(lcd, network, joystick, EmbassyClock, StackProbe);

    let outcome = join_network(&mut ctx, WIFI_SSID, WIFI_PASSWORD).await;
    info!("wifi: startup join {}", outcome);

    let mut menu = MenuController::new(ctx);
    menu.run().await
}
