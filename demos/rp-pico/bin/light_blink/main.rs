#![no_std]
#![no_main]

use panic_halt as _;
use pin_animator::{BlinkConfig, LightBlinker};
use rp_pico::entry;
use rp_pico::hal::adc::AdcPin;
use rp_pico_demos::photocell::Photocell;
use rtt_target::{rprintln, rtt_init_print};

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Light Blink Demo ===");

    let board = rp_pico_demos::board::init();
    let pins = board.pins;

    let adc_pin = AdcPin::new(pins.gpio26.into_floating_input()).unwrap();
    let photocell = Photocell::new(board.adc, adc_pin);
    let led = pins.led.into_push_pull_output();

    let config = BlinkConfig::default();
    let mut blinker = LightBlinker::new(config, photocell, led, board.timer);

    rprintln!(
        "Blinking {}ms in the dark down to {}ms in bright light",
        config.slowest_ms,
        config.fastest_ms
    );

    let Err(err) = blinker.run();
    rprintln!("Stopped: {}", err);
    loop {
        cortex_m::asm::wfi();
    }
}
