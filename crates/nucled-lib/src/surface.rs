//! Control surface — the write and read pipelines behind the entry point.
//!
//! `write_command` runs text → parser → codec → diagnostics;
//! `read_report` runs codec → presenter for both LEDs. Binaries stay
//! thin adapters over these two calls.

use crate::codec;
use crate::command;
use crate::error::Result;
use crate::presenter::{self, ReportBuffer, SetDiagnostic};
use crate::state::{LedIdentity, SetStateRequest};
use crate::wmi::WmiTransport;

/// A write that reached the firmware: the request that was applied and
/// any warnings the firmware's per-field statuses produced.
#[derive(Debug)]
pub struct WriteOutcome {
    pub request: SetStateRequest,
    pub diagnostics: Vec<SetDiagnostic>,
}

/// Handle one raw command write.
///
/// A single trailing newline is stripped (terminal-style input), then
/// the command is parsed and, only if valid, sent to the firmware.
/// Input errors and transport failures are both surfaced as errors —
/// neither changes any LED state. Firmware-reported statuses are
/// warnings in the outcome, not errors.
pub fn write_command(wmi: &impl WmiTransport, line: &str) -> Result<WriteOutcome> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let request = command::parse_set_command(line)?;

    let result = codec::set_state(wmi, &request)?;
    let diagnostics = presenter::diagnose_set_result(request.led(), &result);
    for diag in &diagnostics {
        log::warn!("{diag}");
    }

    Ok(WriteOutcome {
        request,
        diagnostics,
    })
}

/// Render the state report for both LEDs, power first, then ring.
///
/// The read path never fails as a whole: a transport failure on either
/// LED is logged and rendered as a "could not be determined" block in
/// its place.
pub fn read_report(wmi: &impl WmiTransport) -> String {
    let mut buf = ReportBuffer::new();
    for led in LedIdentity::ALL {
        match codec::get_state(wmi, led) {
            Ok(result) => presenter::render_state(&mut buf, led, &result),
            Err(e) => {
                log::warn!("unable to get {led} LED state: {e}");
                presenter::render_call_failed(&mut buf, led);
            }
        }
    }
    buf.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ParseError;
    use crate::error::NucLedError;
    use crate::protocol::*;
    use crate::state::{BlinkMode, ColorState, RingColor};
    use crate::wmi::mock::MockWmi;

    // ── write_command ──

    #[test]
    fn valid_write_reaches_firmware() {
        let wmi = MockWmi::new();
        let outcome = write_command(&wmi, "ring,0,blink_medium,red").unwrap();

        assert_eq!(outcome.request.led(), LedIdentity::Ring);
        assert_eq!(outcome.request.blink(), BlinkMode::BlinkMedium);
        assert_eq!(outcome.request.color(), ColorState::Ring(RingColor::Red));
        assert!(outcome.diagnostics.is_empty());

        let calls = wmi.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method_id, METHODID_SETSTATE);
    }

    #[test]
    fn trailing_newline_is_stripped() {
        let wmi = MockWmi::new();
        assert!(write_command(&wmi, "power,50,none,blue\n").is_ok());
    }

    #[test]
    fn invalid_brightness_never_calls_firmware() {
        let wmi = MockWmi::new();
        let err = write_command(&wmi, "power,150,none,blue").unwrap_err();
        assert!(matches!(
            err,
            NucLedError::Parse(ParseError::InvalidBrightness(_))
        ));
        assert_eq!(wmi.call_count(), 0);
    }

    #[test]
    fn invalid_led_never_calls_firmware() {
        let wmi = MockWmi::new();
        let err = write_command(&wmi, "desk,50,none,blue").unwrap_err();
        assert!(matches!(err, NucLedError::Parse(ParseError::InvalidLed(_))));
        assert_eq!(wmi.call_count(), 0);
    }

    #[test]
    fn firmware_statuses_become_diagnostics_not_errors() {
        let wmi = MockWmi::new();
        wmi.add_response(
            METHODID_SETSTATE,
            vec![RETURN_UNDEFINED, RETURN_SUCCESS, RETURN_SUCCESS],
        );
        let outcome = write_command(&wmi, "power,50,none,blue").unwrap();
        assert_eq!(
            outcome.diagnostics,
            vec![SetDiagnostic::NotSoftwareControlled(LedIdentity::Power)]
        );
    }

    #[test]
    fn transport_failure_is_an_error() {
        let wmi = MockWmi::new();
        wmi.fail_calls.set(true);
        let err = write_command(&wmi, "power,50,none,blue").unwrap_err();
        assert!(matches!(err, NucLedError::Wmi(_)));
    }

    // ── read_report ──

    #[test]
    fn report_is_power_then_ring() {
        let wmi = MockWmi::new();
        wmi.add_response(METHODID_GETSTATE, vec![RETURN_SUCCESS, 50, BLINK_1HZ, 0x01]);
        wmi.add_response(METHODID_GETSTATE, vec![RETURN_SUCCESS, 80, BLINK_ALWAYS_ON, 0x01]);

        let report = read_report(&wmi);
        assert_eq!(
            report,
            "Power LED Brightness: 50%\n\
             Power LED Blink/Fade: blink_fast (0x01)\n\
             Power LED Color: blue (0x01)\n\n\
             Ring LED Brightness: 80%\n\
             Ring LED Blink/Fade: none (0x00)\n\
             Ring LED Color: cyan (0x01)\n\n"
        );

        // One GetState per LED, power first.
        let calls = wmi.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].input[0], POWER_LED_ID);
        assert_eq!(calls[1].input[0], RING_LED_ID);
    }

    #[test]
    fn per_led_call_failure_renders_inline() {
        let wmi = MockWmi::new();
        wmi.fail_calls.set(true);
        let report = read_report(&wmi);
        assert_eq!(
            report,
            "Power LED state could not be determined: WMI call failed\n\n\
             Ring LED state could not be determined: WMI call failed\n\n"
        );
    }

    #[test]
    fn mixed_statuses_render_per_led() {
        let wmi = MockWmi::new();
        wmi.add_response(METHODID_GETSTATE, vec![RETURN_UNDEFINED, 0, 0, 0]);
        wmi.add_response(METHODID_GETSTATE, vec![RETURN_NOSUPPORT, 0, 0, 0]);

        let report = read_report(&wmi);
        assert_eq!(
            report,
            "Power LED not set for software control\n\n\
             Ring LED state could not be determined: WMI call returned error\n\n"
        );
    }
}
