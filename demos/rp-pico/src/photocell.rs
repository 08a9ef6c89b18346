//! Light sensor on ADC0 (GPIO26) as an [`AnalogSensor`].

use embedded_hal_0_2::adc::OneShot;
use pin_animator::{AnalogSensor, SensorResolution};
use rp_pico::hal::Adc;
use rp_pico::hal::adc::AdcPin;
use rp_pico::hal::gpio::{FunctionSioInput, Pin, PullNone, bank0::Gpio26};

/// The RP2040 converter is 12 bits wide.
const RESOLUTION: SensorResolution = match SensorResolution::new(12) {
    Ok(resolution) => resolution,
    Err(_) => panic!("12-bit resolution is valid"),
};

pub type Adc0Pin = AdcPin<Pin<Gpio26, FunctionSioInput, PullNone>>;

/// Photoresistor divider read through the on-chip ADC.
pub struct Photocell {
    adc: Adc,
    pin: Adc0Pin,
}

impl Photocell {
    pub fn new(adc: Adc, pin: Adc0Pin) -> Self {
        Self { adc, pin }
    }
}

impl AnalogSensor for Photocell {
    type Error = ();

    fn sample(&mut self) -> Result<u16, Self::Error> {
        nb::block!(self.adc.read(&mut self.pin))
    }

    fn resolution(&self) -> SensorResolution {
        RESOLUTION
    }
}
