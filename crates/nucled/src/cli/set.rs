//! `set` subcommand — apply one LED command string.

use super::{Result, open_transport, surface};

pub(super) fn cmd_set(command: &str) -> Result<()> {
    let wmi = open_transport()?;
    let outcome = surface::write_command(&wmi, command)?;

    // Firmware-reported statuses were already logged as warnings by the
    // surface; echo what was applied.
    let req = &outcome.request;
    println!(
        "{} LED set: {}% {} {}",
        req.led().label(),
        req.brightness().percent(),
        req.blink().token(),
        req.color().token()
    );
    Ok(())
}
