//! `off` subcommand — the shutdown-time "turn everything off" hook.

use super::{Result, open_transport, shutdown};

pub(super) fn cmd_off() -> Result<()> {
    let wmi = open_transport()?;
    // Best effort: failures are logged inside the sequence, not raised.
    shutdown::power_off_all(&wmi);
    println!("LEDs turned off (best effort)");
    Ok(())
}
