//! Command parsing — comma-separated set commands into typed requests.
//!
//! Grammar: exactly four positional fields, `led,brightness,blink,color`,
//! e.g. `ring,80,fade_medium,cyan`. Tokens are case-sensitive and carry
//! no surrounding whitespace. The color field is validated against the
//! LED named in the first field, so `power,50,none,cyan` fails even
//! though `cyan` is a perfectly good ring color.

use std::fmt;

use crate::state::{BlinkMode, Brightness, ColorState, LedIdentity, SetStateRequest};

/// Command rejection reasons. None of these reach the firmware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    InvalidLed(String),
    InvalidBrightness(String),
    InvalidBlinkMode(String),
    InvalidColor(String),
    TooFewArguments(usize),
    TooManyArguments(usize),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidLed(tok) => {
                write!(f, "invalid LED `{tok}` (expected `power` or `ring`)")
            }
            ParseError::InvalidBrightness(tok) => {
                write!(f, "invalid brightness `{tok}` (expected 0-100)")
            }
            ParseError::InvalidBlinkMode(tok) => {
                write!(f, "invalid blink/fade mode `{tok}`")
            }
            ParseError::InvalidColor(tok) => {
                write!(f, "invalid color `{tok}` for this LED")
            }
            ParseError::TooFewArguments(n) => {
                write!(f, "too few arguments ({n} of 4)")
            }
            ParseError::TooManyArguments(n) => {
                write!(f, "too many arguments ({n}, expected 4)")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse an integer literal in the style of the kernel's `kstrtol` with
/// base 0: plain decimal, or `0x`/`0o`/`0b` prefixed.
fn parse_int(token: &str) -> Option<i64> {
    let (digits, radix) = if let Some(hex) = token.strip_prefix("0x").or(token.strip_prefix("0X")) {
        (hex, 16)
    } else if let Some(oct) = token.strip_prefix("0o").or(token.strip_prefix("0O")) {
        (oct, 8)
    } else if let Some(bin) = token.strip_prefix("0b").or(token.strip_prefix("0B")) {
        (bin, 2)
    } else {
        (token, 10)
    };
    i64::from_str_radix(digits, radix).ok()
}

/// Parse a set command into a validated [`SetStateRequest`].
///
/// Field scanning stops at the first empty field, and the field count is
/// settled before any per-field error is reported: more than four fields
/// is always `TooManyArguments` and fewer is always `TooFewArguments`,
/// regardless of whether the present fields would have validated.
/// With exactly four fields, the first invalid one wins.
pub fn parse_set_command(line: &str) -> Result<SetStateRequest, ParseError> {
    let fields: Vec<&str> = line.split(',').take_while(|f| !f.is_empty()).collect();

    if fields.len() > 4 {
        return Err(ParseError::TooManyArguments(fields.len()));
    }
    if fields.len() < 4 {
        return Err(ParseError::TooFewArguments(fields.len()));
    }

    let led = LedIdentity::parse(fields[0])
        .ok_or_else(|| ParseError::InvalidLed(fields[0].to_string()))?;

    let brightness = parse_int(fields[1])
        .and_then(|v| u8::try_from(v).ok())
        .and_then(Brightness::new)
        .ok_or_else(|| ParseError::InvalidBrightness(fields[1].to_string()))?;

    let blink = BlinkMode::parse(fields[2])
        .ok_or_else(|| ParseError::InvalidBlinkMode(fields[2].to_string()))?;

    let color = ColorState::parse(led, fields[3])
        .ok_or_else(|| ParseError::InvalidColor(fields[3].to_string()))?;

    // Color was parsed against `led`, so the constructor cannot fail.
    SetStateRequest::new(led, brightness, blink, color)
        .ok_or_else(|| ParseError::InvalidColor(fields[3].to_string()))
}
