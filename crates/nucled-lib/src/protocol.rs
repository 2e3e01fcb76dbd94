//! Protocol constants for the Intel NUC LED WMI management interface.
//!
//! All values follow Intel Article ID 000023426 ("NUC LED color change
//! with BIOS or Windows"). The firmware exposes two methods on a single
//! WMI interface: GetState (read one LED) and SetState (write one LED).
//! Both take and return small fixed-layout byte buffers.

// ── WMI interface ──

/// WMI management interface GUID for NUC LED control.
pub const WMI_MGMT_GUID: &str = "8C5DA44C-CDC3-46B3-8619-4E26D34390B7";

/// WMI instance index. Per Intel docs, the first instance is used
/// (instances are indexed from 0).
pub const WMI_INSTANCE: u8 = 0;

// ── Method IDs ──

/// Read one LED's state. Input: [`GETSTATE_INPUT_LEN`] bytes (LED ID).
/// Output: [`GETSTATE_OUTPUT_LEN`] bytes (status, brightness, blink, color).
pub const METHODID_GETSTATE: u32 = 0x01;

/// Write one LED's state. Input: [`SETSTATE_INPUT_LEN`] bytes.
/// Output: [`SETSTATE_OUTPUT_LEN`] bytes (per-field status).
pub const METHODID_SETSTATE: u32 = 0x02;

// ── LED IDs ──

/// Power button LED.
pub const POWER_LED_ID: u8 = 0x01;

/// Front-panel ring LED.
pub const RING_LED_ID: u8 = 0x02;

// ── Blink/fade codes ──

pub const BLINK_ALWAYS_ON: u8 = 0x00;
pub const BLINK_1HZ: u8 = 0x01;
pub const BLINK_0_25HZ: u8 = 0x02;
pub const FADE_1HZ: u8 = 0x03;
pub const BLINK_0_5HZ: u8 = 0x04;
pub const FADE_0_25HZ: u8 = 0x05;
pub const FADE_0_5HZ: u8 = 0x06;

// ── Color codes ──
//
// The two LEDs use separate color tables. The code 0x01 means blue on
// the power LED but cyan on the ring LED, and "blue" itself encodes as
// 0x01 or 0x04 depending on the LED.

pub const POWER_COLOR_DISABLE: u8 = 0x00;
pub const POWER_COLOR_BLUE: u8 = 0x01;
pub const POWER_COLOR_AMBER: u8 = 0x02;

pub const RING_COLOR_DISABLE: u8 = 0x00;
pub const RING_COLOR_CYAN: u8 = 0x01;
pub const RING_COLOR_PINK: u8 = 0x02;
pub const RING_COLOR_YELLOW: u8 = 0x03;
pub const RING_COLOR_BLUE: u8 = 0x04;
pub const RING_COLOR_RED: u8 = 0x05;
pub const RING_COLOR_GREEN: u8 = 0x06;
pub const RING_COLOR_WHITE: u8 = 0x07;

// ── Firmware status codes ──
//
// Returned per logical field inside a successful WMI call, independent
// of whether the call itself succeeded.

pub const RETURN_SUCCESS: u8 = 0x00;
pub const RETURN_NOSUPPORT: u8 = 0xE1;
pub const RETURN_UNDEFINED: u8 = 0xE2;
pub const RETURN_NORESPONSE: u8 = 0xE3;
pub const RETURN_BADPARAM: u8 = 0xE4;
pub const RETURN_UNEXPECTED: u8 = 0xEF;

// ── Buffer sizes ──

/// GetState input: one little-endian u32 carrying the LED ID.
pub const GETSTATE_INPUT_LEN: usize = 4;

/// GetState output: [0]=status [1]=brightness [2]=blink/fade [3]=color.
pub const GETSTATE_OUTPUT_LEN: usize = 4;

/// SetState input: four little-endian u32s
/// (LED ID, brightness, blink/fade, color).
pub const SETSTATE_INPUT_LEN: usize = 16;

/// SetState output: [0]=brightness status [1]=blink/fade status
/// [2]=color status.
pub const SETSTATE_OUTPUT_LEN: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_ids_distinct() {
        assert_ne!(METHODID_GETSTATE, METHODID_SETSTATE);
    }

    #[test]
    fn led_ids_distinct() {
        assert_ne!(POWER_LED_ID, RING_LED_ID);
    }

    #[test]
    fn blink_codes_distinct() {
        let codes = [
            BLINK_ALWAYS_ON,
            BLINK_1HZ,
            BLINK_0_25HZ,
            FADE_1HZ,
            BLINK_0_5HZ,
            FADE_0_25HZ,
            FADE_0_5HZ,
        ];
        for i in 0..codes.len() {
            for j in (i + 1)..codes.len() {
                assert_ne!(codes[i], codes[j], "blink codes {i} and {j} collide");
            }
        }
    }

    #[test]
    fn ring_color_codes_distinct() {
        let codes = [
            RING_COLOR_DISABLE,
            RING_COLOR_CYAN,
            RING_COLOR_PINK,
            RING_COLOR_YELLOW,
            RING_COLOR_BLUE,
            RING_COLOR_RED,
            RING_COLOR_GREEN,
            RING_COLOR_WHITE,
        ];
        for i in 0..codes.len() {
            for j in (i + 1)..codes.len() {
                assert_ne!(codes[i], codes[j], "ring colors {i} and {j} collide");
            }
        }
    }

    #[test]
    fn power_color_codes_distinct() {
        assert_ne!(POWER_COLOR_DISABLE, POWER_COLOR_BLUE);
        assert_ne!(POWER_COLOR_DISABLE, POWER_COLOR_AMBER);
        assert_ne!(POWER_COLOR_BLUE, POWER_COLOR_AMBER);
    }

    #[test]
    fn status_codes_distinct() {
        let codes = [
            RETURN_SUCCESS,
            RETURN_NOSUPPORT,
            RETURN_UNDEFINED,
            RETURN_NORESPONSE,
            RETURN_BADPARAM,
            RETURN_UNEXPECTED,
        ];
        for i in 0..codes.len() {
            for j in (i + 1)..codes.len() {
                assert_ne!(codes[i], codes[j], "status codes {i} and {j} collide");
            }
        }
    }

    #[test]
    fn setstate_input_holds_four_u32() {
        assert_eq!(SETSTATE_INPUT_LEN, 4 * size_of::<u32>());
        assert_eq!(GETSTATE_INPUT_LEN, size_of::<u32>());
    }

    #[test]
    fn blue_encodes_differently_per_led() {
        // Same spelling, different wire value — the hazard the typed
        // color model exists to contain.
        assert_ne!(POWER_COLOR_BLUE, RING_COLOR_BLUE);
    }
}
