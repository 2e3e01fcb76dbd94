//! WMI transport — trait, `acpi_call` backend, and test mock.
//!
//! The firmware call is a synchronous binary-buffer-in/binary-buffer-out
//! method evaluation on a WMI interface. [`WmiTransport`] abstracts that
//! single operation so the codec and its tests can substitute scripted
//! buffers and failures; [`AcpiCallWmi`] is the production backend, which
//! routes the evaluation through the `acpi_call` kernel module's
//! `/proc/acpi/call` entry.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::protocol;

// ── Error type ──

/// Transport-level failures: the call itself did not produce a usable
/// output buffer. Firmware-reported status codes are *not* errors at
/// this layer — they travel inside a successful response.
#[derive(Debug)]
pub enum WmiError {
    /// The requested interface is not bound on this transport.
    NotPresent(String),
    /// The call could not be issued or reported an evaluation error.
    CallFailed(String),
    /// The call did not complete within the configured deadline (ms).
    Timeout(u64),
    /// The reply could not be parsed into an output buffer.
    BadResponse(String),
    /// The output buffer is shorter than the method's fixed layout.
    ShortResponse { expected: usize, actual: usize },
}

impl fmt::Display for WmiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WmiError::NotPresent(what) => write!(f, "WMI interface not present: {what}"),
            WmiError::CallFailed(e) => write!(f, "WMI call failed: {e}"),
            WmiError::Timeout(ms) => write!(f, "WMI call timed out after {ms} ms"),
            WmiError::BadResponse(e) => write!(f, "WMI call returned malformed data: {e}"),
            WmiError::ShortResponse { expected, actual } => {
                write!(f, "WMI response too short: expected {expected} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for WmiError {}

pub type Result<T> = std::result::Result<T, WmiError>;

// ── Trait ──

/// One synchronous firmware method evaluation.
pub trait WmiTransport {
    /// Evaluate `method_id` on `interface` at the given instance index,
    /// passing `input` and returning the raw output buffer.
    fn evaluate(&self, interface: &str, instance: u8, method_id: u32, input: &[u8])
    -> Result<Vec<u8>>;
}

// ── acpi_call backend ──

/// Transport backed by the `acpi_call` kernel module.
///
/// A request is formatted as `<method> <instance> <method_id> b<hex>` and
/// written to the `/proc/acpi/call` entry; the reply is read back from
/// the same entry. Each call runs on a worker thread and is abandoned
/// after the configured timeout — the kernel finishes the evaluation on
/// its own time, but the caller sees a failed call.
pub struct AcpiCallWmi {
    call_path: PathBuf,
    method: String,
    timeout: Duration,
}

impl AcpiCallWmi {
    pub fn new(call_path: impl Into<PathBuf>, method: impl Into<String>, timeout: Duration) -> Self {
        AcpiCallWmi {
            call_path: call_path.into(),
            method: method.into(),
            timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        AcpiCallWmi::new(
            &config.acpi_call_path,
            &config.wmi_method,
            Duration::from_millis(config.timeout_ms),
        )
    }
}

impl WmiTransport for AcpiCallWmi {
    fn evaluate(
        &self,
        interface: &str,
        instance: u8,
        method_id: u32,
        input: &[u8],
    ) -> Result<Vec<u8>> {
        // Single-interface transport: the configured ACPI method stands
        // in for exactly the NUC LED management GUID.
        if interface != protocol::WMI_MGMT_GUID {
            return Err(WmiError::NotPresent(format!(
                "no ACPI method bound for interface {interface}"
            )));
        }

        let command = format!(
            "{} {:#x} {:#x} b{}",
            self.method,
            instance,
            method_id,
            hex_encode(input)
        );
        log::debug!("acpi_call: {command}");

        let call_path = self.call_path.clone();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(exchange(&call_path, &command));
        });

        let reply = match rx.recv_timeout(self.timeout) {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => {
                return Err(WmiError::CallFailed(format!(
                    "{}: {e}",
                    self.call_path.display()
                )));
            }
            Err(_) => return Err(WmiError::Timeout(self.timeout.as_millis() as u64)),
        };

        parse_reply(&reply)
    }
}

/// Write the call command, then read the reply from the same entry.
fn exchange(path: &Path, command: &str) -> std::io::Result<String> {
    let mut entry = OpenOptions::new().write(true).open(path)?;
    entry.write_all(command.as_bytes())?;
    drop(entry);

    let mut entry = OpenOptions::new().read(true).open(path)?;
    let mut reply = String::new();
    entry.read_to_string(&mut reply)?;
    Ok(reply)
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Parse an `acpi_call` reply into an output buffer.
///
/// Buffers come back as `{0x01, 0x2c, 0x00, 0x01}`; a bare integer reply
/// (`0x1234`) is returned as its four little-endian low bytes. `Error:`
/// replies and `not called` map to [`WmiError::CallFailed`].
fn parse_reply(reply: &str) -> Result<Vec<u8>> {
    let reply = reply.trim_end_matches('\0').trim();

    if reply.is_empty() || reply == "not called" {
        return Err(WmiError::CallFailed("no result available".into()));
    }
    if let Some(msg) = reply.strip_prefix("Error:") {
        return Err(WmiError::CallFailed(msg.trim().to_string()));
    }

    if let Some(body) = reply.strip_prefix('{').and_then(|r| r.strip_suffix('}')) {
        return body
            .split(',')
            .map(|tok| {
                let tok = tok.trim();
                tok.strip_prefix("0x")
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                    .ok_or_else(|| {
                        WmiError::BadResponse(format!("unexpected buffer element `{tok}`"))
                    })
            })
            .collect();
    }

    if let Some(hex) = reply.strip_prefix("0x") {
        let val = u64::from_str_radix(hex, 16)
            .map_err(|_| WmiError::BadResponse(format!("unparseable integer reply `{reply}`")))?;
        return Ok(val.to_le_bytes()[..4].to_vec());
    }

    Err(WmiError::BadResponse(format!("unrecognized reply `{reply}`")))
}

// ── Mock ──

pub mod mock {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use super::{Result, WmiError, WmiTransport};
    use crate::protocol;

    /// One `evaluate` invocation as seen by [`MockWmi`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedCall {
        pub interface: String,
        pub instance: u8,
        pub method_id: u32,
        pub input: Vec<u8>,
    }

    /// In-memory transport for unit tests. Responses are scripted per
    /// method ID and consumed in FIFO order; every call is recorded.
    /// Unscripted GetState/SetState calls succeed with all-success
    /// buffers so tests only script what they care about.
    pub struct MockWmi {
        /// Scripted responses: method ID → FIFO of output buffers.
        pub responses: RefCell<HashMap<u32, Vec<Vec<u8>>>>,
        /// Every evaluate() call, in order.
        pub calls: RefCell<Vec<RecordedCall>>,
        /// If true, evaluate() fails with `CallFailed`.
        pub fail_calls: Cell<bool>,
    }

    impl Default for MockWmi {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockWmi {
        pub fn new() -> Self {
            MockWmi {
                responses: RefCell::new(HashMap::new()),
                calls: RefCell::new(Vec::new()),
                fail_calls: Cell::new(false),
            }
        }

        /// Queue an output buffer for the given method ID.
        pub fn add_response(&self, method_id: u32, response: Vec<u8>) {
            self.responses
                .borrow_mut()
                .entry(method_id)
                .or_default()
                .push(response);
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl WmiTransport for MockWmi {
        fn evaluate(
            &self,
            interface: &str,
            instance: u8,
            method_id: u32,
            input: &[u8],
        ) -> Result<Vec<u8>> {
            self.calls.borrow_mut().push(RecordedCall {
                interface: interface.to_string(),
                instance,
                method_id,
                input: input.to_vec(),
            });

            if self.fail_calls.get() {
                return Err(WmiError::CallFailed("mock: failure injected".into()));
            }

            let mut responses = self.responses.borrow_mut();
            if let Some(queue) = responses.get_mut(&method_id) {
                if !queue.is_empty() {
                    return Ok(queue.remove(0));
                }
            }

            match method_id {
                protocol::METHODID_GETSTATE => Ok(vec![protocol::RETURN_SUCCESS, 0, 0, 0]),
                protocol::METHODID_SETSTATE => Ok(vec![protocol::RETURN_SUCCESS; 3]),
                _ => Err(WmiError::CallFailed(format!(
                    "mock: no response scripted for method {method_id:#x}"
                ))),
            }
        }
    }
}
