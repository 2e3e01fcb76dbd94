//! State codec — typed LED requests/results to and from firmware buffers.
//!
//! Each operation is a pure translation plus exactly one transport call
//! at instance 0; there are no retries. A transport failure propagates
//! as [`WmiError`] so the caller can never mistake it for a firmware
//! status, and the decoded result owns its bytes — the response buffer
//! is dropped here.

use crate::protocol::*;
use crate::state::{
    Brightness, BlinkMode, ColorState, GetStateResult, LedIdentity, LedState, SetStateRequest,
    SetStateResult, StatusCode,
};
use crate::wmi::{Result, WmiError, WmiTransport};

/// Read one LED's state from the firmware.
pub fn get_state(wmi: &impl WmiTransport, led: LedIdentity) -> Result<GetStateResult> {
    let mut input = [0u8; GETSTATE_INPUT_LEN];
    input[0..4].copy_from_slice(&u32::from(led.code()).to_le_bytes());

    let output = wmi.evaluate(WMI_MGMT_GUID, WMI_INSTANCE, METHODID_GETSTATE, &input)?;
    decode_get_response(led, &output)
}

/// Write one LED's state and return the per-field firmware statuses.
pub fn set_state(wmi: &impl WmiTransport, request: &SetStateRequest) -> Result<SetStateResult> {
    let output = wmi.evaluate(
        WMI_MGMT_GUID,
        WMI_INSTANCE,
        METHODID_SETSTATE,
        &request.to_wire(),
    )?;

    SetStateResult::from_wire(&output).ok_or(WmiError::ShortResponse {
        expected: SETSTATE_OUTPUT_LEN,
        actual: output.len(),
    })
}

/// Decode a GetState output buffer: [0]=status [1]=brightness
/// [2]=blink/fade [3]=color. The state bytes are only interpreted for a
/// `Success` status; out-of-table values there mean the response cannot
/// be trusted and count as a failed call.
fn decode_get_response(led: LedIdentity, output: &[u8]) -> Result<GetStateResult> {
    if output.len() < GETSTATE_OUTPUT_LEN {
        return Err(WmiError::ShortResponse {
            expected: GETSTATE_OUTPUT_LEN,
            actual: output.len(),
        });
    }

    match StatusCode::from_byte(output[0]) {
        StatusCode::Success => {
            let brightness = Brightness::new(output[1]).ok_or_else(|| {
                WmiError::BadResponse(format!("brightness {} out of range", output[1]))
            })?;
            let blink = BlinkMode::from_code(output[2]).ok_or_else(|| {
                WmiError::BadResponse(format!("unknown blink/fade code {:#04x}", output[2]))
            })?;
            let color = ColorState::from_code(led, output[3]).ok_or_else(|| {
                WmiError::BadResponse(format!(
                    "unknown {} color code {:#04x}",
                    led.token(),
                    output[3]
                ))
            })?;
            Ok(GetStateResult::State(LedState {
                brightness,
                blink,
                color,
            }))
        }
        StatusCode::Undefined => Ok(GetStateResult::NotSoftwareControlled),
        status => Ok(GetStateResult::Error(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PowerColor, RingColor};
    use crate::wmi::mock::MockWmi;

    fn power_request() -> SetStateRequest {
        SetStateRequest::new(
            LedIdentity::Power,
            Brightness::new(50).unwrap(),
            BlinkMode::AlwaysOn,
            ColorState::Power(PowerColor::Blue),
        )
        .unwrap()
    }

    // ── get_state ──

    #[test]
    fn get_state_sends_identity_tagged_request() {
        let wmi = MockWmi::new();
        get_state(&wmi, LedIdentity::Ring).unwrap();

        let calls = wmi.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].interface, WMI_MGMT_GUID);
        assert_eq!(calls[0].instance, WMI_INSTANCE);
        assert_eq!(calls[0].method_id, METHODID_GETSTATE);
        assert_eq!(calls[0].input, vec![RING_LED_ID, 0, 0, 0]);
    }

    #[test]
    fn get_state_decodes_success() {
        let wmi = MockWmi::new();
        wmi.add_response(
            METHODID_GETSTATE,
            vec![RETURN_SUCCESS, 44, BLINK_0_5HZ, RING_COLOR_RED],
        );

        let result = get_state(&wmi, LedIdentity::Ring).unwrap();
        assert_eq!(
            result,
            GetStateResult::State(LedState {
                brightness: Brightness::new(44).unwrap(),
                blink: BlinkMode::BlinkMedium,
                color: ColorState::Ring(RingColor::Red),
            })
        );
    }

    #[test]
    fn get_state_color_byte_follows_identity() {
        // The same response byte decodes to a different color per LED.
        let wmi = MockWmi::new();
        wmi.add_response(METHODID_GETSTATE, vec![RETURN_SUCCESS, 10, 0x00, 0x01]);
        wmi.add_response(METHODID_GETSTATE, vec![RETURN_SUCCESS, 10, 0x00, 0x01]);

        let GetStateResult::State(power) = get_state(&wmi, LedIdentity::Power).unwrap() else {
            panic!("expected state");
        };
        let GetStateResult::State(ring) = get_state(&wmi, LedIdentity::Ring).unwrap() else {
            panic!("expected state");
        };
        assert_eq!(power.color, ColorState::Power(PowerColor::Blue));
        assert_eq!(ring.color, ColorState::Ring(RingColor::Cyan));
    }

    #[test]
    fn get_state_undefined_status() {
        let wmi = MockWmi::new();
        wmi.add_response(METHODID_GETSTATE, vec![RETURN_UNDEFINED, 0, 0, 0]);
        assert_eq!(
            get_state(&wmi, LedIdentity::Power).unwrap(),
            GetStateResult::NotSoftwareControlled
        );
    }

    #[test]
    fn get_state_error_status_keeps_code() {
        let wmi = MockWmi::new();
        wmi.add_response(METHODID_GETSTATE, vec![RETURN_NORESPONSE, 0, 0, 0]);
        assert_eq!(
            get_state(&wmi, LedIdentity::Power).unwrap(),
            GetStateResult::Error(StatusCode::Other(RETURN_NORESPONSE))
        );
    }

    #[test]
    fn get_state_transport_failure_is_not_a_result() {
        let wmi = MockWmi::new();
        wmi.fail_calls.set(true);
        assert!(get_state(&wmi, LedIdentity::Power).is_err());
    }

    #[test]
    fn get_state_short_response_fails() {
        let wmi = MockWmi::new();
        wmi.add_response(METHODID_GETSTATE, vec![RETURN_SUCCESS, 50]);
        let err = get_state(&wmi, LedIdentity::Power).unwrap_err();
        assert!(matches!(
            err,
            WmiError::ShortResponse {
                expected: 4,
                actual: 2
            }
        ));
    }

    #[test]
    fn get_state_garbage_state_bytes_fail() {
        let wmi = MockWmi::new();
        // Success status but brightness 200.
        wmi.add_response(METHODID_GETSTATE, vec![RETURN_SUCCESS, 200, 0, 0]);
        assert!(matches!(
            get_state(&wmi, LedIdentity::Power),
            Err(WmiError::BadResponse(_))
        ));

        // Success status but color 0x05 on the power LED (table has 3).
        wmi.add_response(METHODID_GETSTATE, vec![RETURN_SUCCESS, 10, 0, 0x05]);
        assert!(matches!(
            get_state(&wmi, LedIdentity::Power),
            Err(WmiError::BadResponse(_))
        ));
    }

    #[test]
    fn get_state_garbage_bytes_ignored_for_undefined() {
        // Non-success statuses carry no state; junk bytes must not fail.
        let wmi = MockWmi::new();
        wmi.add_response(METHODID_GETSTATE, vec![RETURN_UNDEFINED, 0xFF, 0xFF, 0xFF]);
        assert_eq!(
            get_state(&wmi, LedIdentity::Ring).unwrap(),
            GetStateResult::NotSoftwareControlled
        );
    }

    // ── set_state ──

    #[test]
    fn set_state_sends_full_request_buffer() {
        let wmi = MockWmi::new();
        let req = power_request();
        set_state(&wmi, &req).unwrap();

        let calls = wmi.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].method_id, METHODID_SETSTATE);
        assert_eq!(calls[0].input, req.to_wire().to_vec());
    }

    #[test]
    fn set_state_decodes_per_field_statuses() {
        let wmi = MockWmi::new();
        wmi.add_response(
            METHODID_SETSTATE,
            vec![RETURN_UNDEFINED, RETURN_SUCCESS, RETURN_BADPARAM],
        );

        let result = set_state(&wmi, &power_request()).unwrap();
        assert_eq!(result.brightness, StatusCode::Undefined);
        assert_eq!(result.blink_fade, StatusCode::Success);
        assert_eq!(result.color, StatusCode::BadParam);
    }

    #[test]
    fn set_state_short_response_fails() {
        let wmi = MockWmi::new();
        wmi.add_response(METHODID_SETSTATE, vec![RETURN_SUCCESS]);
        let err = set_state(&wmi, &power_request()).unwrap_err();
        assert!(matches!(
            err,
            WmiError::ShortResponse {
                expected: 3,
                actual: 1
            }
        ));
    }

    #[test]
    fn set_state_transport_failure_propagates() {
        let wmi = MockWmi::new();
        wmi.fail_calls.set(true);
        assert!(set_state(&wmi, &power_request()).is_err());
    }
}
