#![no_std]
#![no_main]

use panic_halt as _;
use pin_animator::{AnimationConfig, Animator, InputLineSet, OutputLineSequence, PatternController};
use rp_pico::entry;
use rtt_target::{rprintln, rtt_init_print};

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Switch Patterns Demo ===");

    let board = rp_pico_demos::board::init();
    let pins = board.pins;

    // DIP switch positions 1, 2, 3 to GPIO2-4, pulled down; closed reads high.
    let inputs = InputLineSet::new([
        pins.gpio2.into_pull_down_input().into_dyn_pin(),
        pins.gpio3.into_pull_down_input().into_dyn_pin(),
        pins.gpio4.into_pull_down_input().into_dyn_pin(),
    ])
    .unwrap();

    // LED row on GPIO10-16, animated in this order.
    let outputs = OutputLineSequence::new([
        pins.gpio10.into_push_pull_output().into_dyn_pin(),
        pins.gpio11.into_push_pull_output().into_dyn_pin(),
        pins.gpio12.into_push_pull_output().into_dyn_pin(),
        pins.gpio13.into_push_pull_output().into_dyn_pin(),
        pins.gpio14.into_push_pull_output().into_dyn_pin(),
        pins.gpio15.into_push_pull_output().into_dyn_pin(),
        pins.gpio16.into_push_pull_output().into_dyn_pin(),
    ]);

    let config = AnimationConfig::default();
    let animator = Animator::new(outputs, board.timer, config.step);
    let mut controller = PatternController::new(config, inputs, animator).unwrap();

    rprintln!("Set the DIP switches to choose how many LEDs animate (0-7)");
    rprintln!("Pattern changes every {} loops", config.mode_cadence);

    let Err(err) = controller.run();
    rprintln!("Stopped: {}", err);
    loop {
        cortex_m::asm::wfi();
    }
}
