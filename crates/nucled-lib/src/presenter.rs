//! Presenter — LED state as human-readable text, set results as warnings.
//!
//! Read reports accumulate in a [`ReportBuffer`] with a fixed capacity;
//! an append that would exceed it truncates and warns instead of growing
//! or overflowing. Callers clear the buffer between read cycles.

use std::fmt;

use crate::state::{GetStateResult, LedIdentity, SetStateResult, StatusCode};

/// Hard bound on a rendered report. Sized for the worst case of both
/// LED blocks (longest mode and color literals at 100% brightness) with
/// room to spare.
pub const REPORT_CAPACITY: usize = 256;

// ── Output buffer ──

/// Fixed-capacity text buffer for rendered LED state.
///
/// Appends land at the write cursor; [`clear`](Self::clear) resets it
/// for the next read cycle. The buffer is owned by a single invocation
/// — it is never shared across concurrent reads.
#[derive(Debug)]
pub struct ReportBuffer {
    buf: String,
}

impl Default for ReportBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuffer {
    pub fn new() -> Self {
        ReportBuffer {
            buf: String::with_capacity(REPORT_CAPACITY),
        }
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    /// Append text, truncating at capacity rather than overflowing.
    fn push(&mut self, text: &str) {
        let free = REPORT_CAPACITY - self.buf.len();
        if text.len() > free {
            log::warn!("LED report truncated at {REPORT_CAPACITY} bytes");
            if let Some(fit) = text.get(..free) {
                self.buf.push_str(fit);
            }
        } else {
            self.buf.push_str(text);
        }
    }
}

// ── Read-path rendering ──

/// Render one LED's state block into the buffer.
///
/// A successful read produces three lines (brightness, blink/fade,
/// color — each mode/color shown as its command literal plus wire
/// code); other firmware statuses produce a single explanatory line.
/// Every block ends with a blank line.
pub fn render_state(buf: &mut ReportBuffer, led: LedIdentity, result: &GetStateResult) {
    let name = led.label();
    match result {
        GetStateResult::State(state) => {
            buf.push(&format!(
                "{name} LED Brightness: {}%\n{name} LED Blink/Fade: {} (0x{:02x})\n{name} LED Color: {} (0x{:02x})\n\n",
                state.brightness.percent(),
                state.blink.token(),
                state.blink.code(),
                state.color.token(),
                state.color.code(),
            ));
        }
        GetStateResult::NotSoftwareControlled => {
            buf.push(&format!("{name} LED not set for software control\n\n"));
        }
        GetStateResult::Error(_) => {
            buf.push(&format!(
                "{name} LED state could not be determined: WMI call returned error\n\n"
            ));
        }
    }
}

/// Render the block for an LED whose WMI call itself failed.
pub fn render_call_failed(buf: &mut ReportBuffer, led: LedIdentity) {
    buf.push(&format!(
        "{} LED state could not be determined: WMI call failed\n\n",
        led.label()
    ));
}

// ── Write-path diagnostics ──

/// Human-readable warning derived from a SetState result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetDiagnostic {
    /// Brightness status was `Undefined` — the LED is not under
    /// software control.
    NotSoftwareControlled(LedIdentity),
    /// Some field status was `BadParam`.
    InvalidParameter,
    /// Brightness status was a non-success code other than the above.
    CallReturnedError,
}

impl fmt::Display for SetDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetDiagnostic::NotSoftwareControlled(led) => write!(
                f,
                "unable to set {} LED state: not set for software control",
                led.token()
            ),
            SetDiagnostic::InvalidParameter => {
                write!(f, "unable to set LED state: invalid parameter")
            }
            SetDiagnostic::CallReturnedError => {
                write!(f, "unable to set LED state: WMI call returned error")
            }
        }
    }
}

/// Map a SetState result to warnings.
///
/// Precedence: `Undefined` brightness first, then `BadParam` on any of
/// the three fields, then any other non-success brightness status.
/// Blink/fade and color statuses are consulted only for the `BadParam`
/// case — a lone error code there is never reported on its own.
pub fn diagnose_set_result(led: LedIdentity, result: &SetStateResult) -> Vec<SetDiagnostic> {
    if result.brightness == StatusCode::Undefined {
        return vec![SetDiagnostic::NotSoftwareControlled(led)];
    }
    if result.brightness == StatusCode::BadParam
        || result.blink_fade == StatusCode::BadParam
        || result.color == StatusCode::BadParam
    {
        return vec![SetDiagnostic::InvalidParameter];
    }
    if !result.brightness.is_success() {
        return vec![SetDiagnostic::CallReturnedError];
    }
    Vec::new()
}
