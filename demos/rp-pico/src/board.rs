//! Shared Raspberry Pi Pico bring-up for the demos.

use rp_pico::hal::{self, Adc, Sio, Timer, clocks::init_clocks_and_plls, pac, watchdog::Watchdog};
use rtt_target::rprintln;

/// Peripherals the demos need after clock setup.
pub struct Board {
    pub pins: rp_pico::Pins,
    pub timer: Timer,
    pub adc: Adc,
}

/// Configure clocks (125 MHz), GPIO banks, the microsecond timer and the ADC.
pub fn init() -> Board {
    let mut pac = pac::Peripherals::take().unwrap();
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let timer = hal::Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let adc = Adc::new(pac.ADC, &mut pac.RESETS);

    rprintln!("Clocks, timer and ADC configured");

    Board { pins, timer, adc }
}
