//! Typed LED state model — identities, modes, colors, and wire layouts.
//!
//! Color validity depends on the LED identity: the power LED and the ring
//! LED have separate color tables, and a spelling like `blue` maps to a
//! different wire code on each. [`ColorState`] is therefore a tagged union
//! — a color value carries the identity that produced it, and
//! [`SetStateRequest::new`] refuses a color that belongs to the other LED.

use crate::protocol::*;

// ── LED identity ──

/// Which of the two fixed indicator LEDs a command addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedIdentity {
    Power,
    Ring,
}

impl LedIdentity {
    /// Both LEDs in presentation order (power first, then ring).
    pub const ALL: [LedIdentity; 2] = [LedIdentity::Power, LedIdentity::Ring];

    /// Wire ID used in WMI request buffers.
    pub fn code(self) -> u8 {
        match self {
            LedIdentity::Power => POWER_LED_ID,
            LedIdentity::Ring => RING_LED_ID,
        }
    }

    /// Command-line token (`power` / `ring`). Case-sensitive on parse.
    pub fn token(self) -> &'static str {
        match self {
            LedIdentity::Power => "power",
            LedIdentity::Ring => "ring",
        }
    }

    /// Human-readable name used in report and diagnostic text.
    pub fn label(self) -> &'static str {
        match self {
            LedIdentity::Power => "Power",
            LedIdentity::Ring => "Ring",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "power" => Some(LedIdentity::Power),
            "ring" => Some(LedIdentity::Ring),
            _ => None,
        }
    }
}

impl std::fmt::Display for LedIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Brightness ──

/// LED brightness as a percentage, range 0–100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brightness(u8);

impl Brightness {
    pub const MAX: u8 = 100;

    /// Fully dark. Used by the shutdown sequence.
    pub const OFF: Brightness = Brightness(0);

    pub fn new(percent: u8) -> Option<Self> {
        (percent <= Self::MAX).then_some(Brightness(percent))
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

// ── Blink/fade mode ──

/// Temporal behavior of a lit LED.
///
/// Fast is 1 Hz, medium 0.5 Hz, slow 0.25 Hz — for blinking and fading
/// alike. The wire codes do not follow that order; see `protocol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkMode {
    AlwaysOn,
    BlinkFast,
    BlinkMedium,
    BlinkSlow,
    FadeFast,
    FadeMedium,
    FadeSlow,
}

impl BlinkMode {
    pub const ALL: [BlinkMode; 7] = [
        BlinkMode::AlwaysOn,
        BlinkMode::BlinkFast,
        BlinkMode::BlinkMedium,
        BlinkMode::BlinkSlow,
        BlinkMode::FadeFast,
        BlinkMode::FadeMedium,
        BlinkMode::FadeSlow,
    ];

    pub fn code(self) -> u8 {
        match self {
            BlinkMode::AlwaysOn => BLINK_ALWAYS_ON,
            BlinkMode::BlinkFast => BLINK_1HZ,
            BlinkMode::BlinkMedium => BLINK_0_5HZ,
            BlinkMode::BlinkSlow => BLINK_0_25HZ,
            BlinkMode::FadeFast => FADE_1HZ,
            BlinkMode::FadeMedium => FADE_0_5HZ,
            BlinkMode::FadeSlow => FADE_0_25HZ,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }

    /// Command-line token, also used when rendering state.
    pub fn token(self) -> &'static str {
        match self {
            BlinkMode::AlwaysOn => "none",
            BlinkMode::BlinkFast => "blink_fast",
            BlinkMode::BlinkMedium => "blink_medium",
            BlinkMode::BlinkSlow => "blink_slow",
            BlinkMode::FadeFast => "fade_fast",
            BlinkMode::FadeMedium => "fade_medium",
            BlinkMode::FadeSlow => "fade_slow",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.token() == token)
    }
}

// ── Color state ──

/// Colors the power LED supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerColor {
    Off,
    Blue,
    Amber,
}

/// Colors the ring LED supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingColor {
    Off,
    Cyan,
    Pink,
    Yellow,
    Blue,
    Red,
    Green,
    White,
}

impl PowerColor {
    pub const ALL: [PowerColor; 3] = [PowerColor::Off, PowerColor::Blue, PowerColor::Amber];

    pub fn code(self) -> u8 {
        match self {
            PowerColor::Off => POWER_COLOR_DISABLE,
            PowerColor::Blue => POWER_COLOR_BLUE,
            PowerColor::Amber => POWER_COLOR_AMBER,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            PowerColor::Off => "off",
            PowerColor::Blue => "blue",
            PowerColor::Amber => "amber",
        }
    }
}

impl RingColor {
    pub const ALL: [RingColor; 8] = [
        RingColor::Off,
        RingColor::Cyan,
        RingColor::Pink,
        RingColor::Yellow,
        RingColor::Blue,
        RingColor::Red,
        RingColor::Green,
        RingColor::White,
    ];

    pub fn code(self) -> u8 {
        match self {
            RingColor::Off => RING_COLOR_DISABLE,
            RingColor::Cyan => RING_COLOR_CYAN,
            RingColor::Pink => RING_COLOR_PINK,
            RingColor::Yellow => RING_COLOR_YELLOW,
            RingColor::Blue => RING_COLOR_BLUE,
            RingColor::Red => RING_COLOR_RED,
            RingColor::Green => RING_COLOR_GREEN,
            RingColor::White => RING_COLOR_WHITE,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            RingColor::Off => "off",
            RingColor::Cyan => "cyan",
            RingColor::Pink => "pink",
            RingColor::Yellow => "yellow",
            RingColor::Blue => "blue",
            RingColor::Red => "red",
            RingColor::Green => "green",
            RingColor::White => "white",
        }
    }
}

/// A color paired with the LED identity it is valid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorState {
    Power(PowerColor),
    Ring(RingColor),
}

impl ColorState {
    /// The identity this color belongs to.
    pub fn identity(self) -> LedIdentity {
        match self {
            ColorState::Power(_) => LedIdentity::Power,
            ColorState::Ring(_) => LedIdentity::Ring,
        }
    }

    /// The disabled/off color for the given LED.
    pub fn off(identity: LedIdentity) -> Self {
        match identity {
            LedIdentity::Power => ColorState::Power(PowerColor::Off),
            LedIdentity::Ring => ColorState::Ring(RingColor::Off),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ColorState::Power(c) => c.code(),
            ColorState::Ring(c) => c.code(),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            ColorState::Power(c) => c.token(),
            ColorState::Ring(c) => c.token(),
        }
    }

    /// Parse a color token against the identity's color table.
    pub fn parse(identity: LedIdentity, token: &str) -> Option<Self> {
        match identity {
            LedIdentity::Power => PowerColor::ALL
                .into_iter()
                .find(|c| c.token() == token)
                .map(ColorState::Power),
            LedIdentity::Ring => RingColor::ALL
                .into_iter()
                .find(|c| c.token() == token)
                .map(ColorState::Ring),
        }
    }

    /// Decode a wire code against the identity's color table.
    pub fn from_code(identity: LedIdentity, code: u8) -> Option<Self> {
        match identity {
            LedIdentity::Power => PowerColor::ALL
                .into_iter()
                .find(|c| c.code() == code)
                .map(ColorState::Power),
            LedIdentity::Ring => RingColor::ALL
                .into_iter()
                .find(|c| c.code() == code)
                .map(ColorState::Ring),
        }
    }
}

// ── Firmware status ──

/// Per-field status code echoed by the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Success,
    /// LED is not set for software control in BIOS.
    Undefined,
    /// Firmware rejected a parameter value.
    BadParam,
    /// Any other firmware-defined code (0xE1, 0xE3, 0xEF, ...).
    Other(u8),
}

impl StatusCode {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            RETURN_SUCCESS => StatusCode::Success,
            RETURN_UNDEFINED => StatusCode::Undefined,
            RETURN_BADPARAM => StatusCode::BadParam,
            other => StatusCode::Other(other),
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, StatusCode::Success)
    }
}

// ── Requests and results ──

/// A fully-validated request to change one LED's state.
///
/// Constructed by the command parser or internally (shutdown sequence);
/// the constructor guarantees the color belongs to the addressed LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetStateRequest {
    led: LedIdentity,
    brightness: Brightness,
    blink: BlinkMode,
    color: ColorState,
}

impl SetStateRequest {
    /// Returns `None` if `color` belongs to the other LED.
    pub fn new(
        led: LedIdentity,
        brightness: Brightness,
        blink: BlinkMode,
        color: ColorState,
    ) -> Option<Self> {
        (color.identity() == led).then_some(SetStateRequest {
            led,
            brightness,
            blink,
            color,
        })
    }

    pub fn led(&self) -> LedIdentity {
        self.led
    }

    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    pub fn blink(&self) -> BlinkMode {
        self.blink
    }

    pub fn color(&self) -> ColorState {
        self.color
    }

    /// Encode as the firmware's SetState input layout: four
    /// little-endian u32s (LED ID, brightness, blink/fade, color).
    pub fn to_wire(&self) -> [u8; SETSTATE_INPUT_LEN] {
        let mut buf = [0u8; SETSTATE_INPUT_LEN];
        buf[0..4].copy_from_slice(&u32::from(self.led.code()).to_le_bytes());
        buf[4..8].copy_from_slice(&u32::from(self.brightness.percent()).to_le_bytes());
        buf[8..12].copy_from_slice(&u32::from(self.blink.code()).to_le_bytes());
        buf[12..16].copy_from_slice(&u32::from(self.color.code()).to_le_bytes());
        buf
    }

    /// Decode the SetState input layout back into a request.
    ///
    /// Returns `None` on a short buffer or any field outside its table —
    /// the inverse of [`to_wire`](Self::to_wire).
    pub fn from_wire(buf: &[u8]) -> Option<Self> {
        if buf.len() < SETSTATE_INPUT_LEN {
            return None;
        }
        let field = |i: usize| -> Option<u8> {
            let raw = u32::from_le_bytes(buf[i * 4..i * 4 + 4].try_into().ok()?);
            u8::try_from(raw).ok()
        };
        let led = match field(0)? {
            POWER_LED_ID => LedIdentity::Power,
            RING_LED_ID => LedIdentity::Ring,
            _ => return None,
        };
        let brightness = Brightness::new(field(1)?)?;
        let blink = BlinkMode::from_code(field(2)?)?;
        let color = ColorState::from_code(led, field(3)?)?;
        SetStateRequest::new(led, brightness, blink, color)
    }
}

/// Decoded state of one LED, valid only for a `Success` status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedState {
    pub brightness: Brightness,
    pub blink: BlinkMode,
    pub color: ColorState,
}

/// Outcome of a GetState call that reached the firmware.
///
/// A transport failure is *not* represented here — the codec returns an
/// error instead, so no status can be misread from a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetStateResult {
    /// Firmware reported success; the state fields are meaningful.
    State(LedState),
    /// LED is not set for software control.
    NotSoftwareControlled,
    /// Firmware reported an error status for the read.
    Error(StatusCode),
}

/// Per-field statuses echoed back from a SetState call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetStateResult {
    pub brightness: StatusCode,
    pub blink_fade: StatusCode,
    pub color: StatusCode,
}

impl SetStateResult {
    /// Decode the 3-byte SetState output buffer.
    pub fn from_wire(buf: &[u8]) -> Option<Self> {
        if buf.len() < SETSTATE_OUTPUT_LEN {
            return None;
        }
        Some(SetStateResult {
            brightness: StatusCode::from_byte(buf[0]),
            blink_fade: StatusCode::from_byte(buf[1]),
            color: StatusCode::from_byte(buf[2]),
        })
    }
}
