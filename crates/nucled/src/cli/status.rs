//! `status` subcommand — show the state of both LEDs.

use super::{
    AcpiCallWmi, GetStateResult, LedIdentity, LedStatusJson, Result, StatusOutput, codec,
    open_transport, surface,
};

/// Collect one LED's state for JSON output. Transport failures are
/// folded into the `call_failed` status — same downgrade as the text
/// report.
fn led_json(wmi: &AcpiCallWmi, led: LedIdentity) -> LedStatusJson {
    let absent = |status| LedStatusJson {
        status,
        brightness: None,
        blink_fade: None,
        color: None,
    };
    match codec::get_state(wmi, led) {
        Ok(GetStateResult::State(state)) => LedStatusJson {
            status: "ok",
            brightness: Some(state.brightness.percent()),
            blink_fade: Some(state.blink.token()),
            color: Some(state.color.token()),
        },
        Ok(GetStateResult::NotSoftwareControlled) => absent("not_software_controlled"),
        Ok(GetStateResult::Error(_)) => absent("error"),
        Err(e) => {
            log::warn!("unable to get {led} LED state: {e}");
            absent("call_failed")
        }
    }
}

pub(super) fn cmd_status(json: bool) -> Result<()> {
    let wmi = open_transport()?;

    if json {
        let output = StatusOutput {
            power: led_json(&wmi, LedIdentity::Power),
            ring: led_json(&wmi, LedIdentity::Ring),
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        print!("{}", surface::read_report(&wmi));
    }
    Ok(())
}
