//! Shutdown sequence — turn both LEDs dark before the machine goes down.
//!
//! Best effort by design: at shutdown there is nothing useful to do
//! about a failure, so everything is logged at warn and swallowed.

use crate::codec;
use crate::state::{
    Brightness, BlinkMode, ColorState, GetStateResult, LedIdentity, SetStateRequest,
};
use crate::wmi::WmiTransport;

/// Turn off both LEDs, power first, then ring.
pub fn power_off_all(wmi: &impl WmiTransport) {
    for led in LedIdentity::ALL {
        power_off(wmi, led);
    }
}

/// Turn off one LED.
///
/// Reads the current state first so brightness can be zeroed while the
/// configured blink/color survive the next boot. If the state cannot be
/// read, falls back to a fully-off request (always-on, color disabled)
/// — if reading failed, writing is unlikely to fare better, but the
/// attempt costs nothing.
fn power_off(wmi: &impl WmiTransport, led: LedIdentity) {
    let request = match codec::get_state(wmi, led) {
        Ok(GetStateResult::State(state)) => {
            SetStateRequest::new(led, Brightness::OFF, state.blink, state.color)
        }
        Ok(_) | Err(_) => {
            log::warn!("unable to get {led} LED state before shutdown");
            SetStateRequest::new(
                led,
                Brightness::OFF,
                BlinkMode::AlwaysOn,
                ColorState::off(led),
            )
        }
    };

    // The color either came from this LED's own state or from
    // ColorState::off(led), so the constructor cannot refuse it.
    let Some(request) = request else {
        return;
    };

    if let Err(e) = codec::set_state(wmi, &request) {
        log::warn!("unable to turn off {led} LED: {e}");
    }
}
