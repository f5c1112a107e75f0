//! Pin table demo
//!
//! Builds a binder of named output pins and a grow buffer of queued pulse
//! widths, the way device configuration code would at start-up.

use anyhow::Result;
use ember_store::{Bind, Binder, GrowBuf};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let led_ring = 5u8;
    let servo_pan = 9u8;
    let servo_tilt = 10u8;
    let entries = [
        Bind::new("led_ring", &led_ring),
        Bind::new("servo_pan", &servo_pan),
        Bind::new("servo_tilt", &servo_tilt),
    ];
    let pins = Binder::new(&entries);
    tracing::info!(count = pins.len(), "pin table ready");

    for name in ["servo_pan", "servo_tilt", "missing"] {
        match pins.get(name) {
            Some(pin) => println!("{name} -> GPIO {pin}"),
            None => println!("{name} -> unbound"),
        }
    }

    let mut pulse_queue = GrowBuf::new()?;
    for width in [1500u16, 1520, 1480, 1510, 1490] {
        pulse_queue.push(width)?;
    }
    println!(
        "queued {} pulses, capacity {}",
        pulse_queue.len(),
        pulse_queue.capacity()
    );

    Ok(())
}
