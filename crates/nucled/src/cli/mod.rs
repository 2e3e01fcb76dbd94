//! CLI subcommands — LED status, set, and shutdown-time off.

mod off;
mod set;
mod status;

use clap::Subcommand;
use serde::Serialize;

pub(super) use nucled_lib::codec;
pub(super) use nucled_lib::config::Config;
pub(super) use nucled_lib::error::Result;
pub(super) use nucled_lib::shutdown;
pub(super) use nucled_lib::state::{GetStateResult, LedIdentity};
pub(super) use nucled_lib::surface;
pub(super) use nucled_lib::wmi::AcpiCallWmi;

// ── JSON output structs ──

#[derive(Serialize)]
pub(super) struct StatusOutput {
    pub power: LedStatusJson,
    pub ring: LedStatusJson,
}

#[derive(Serialize)]
pub(super) struct LedStatusJson {
    /// `ok`, `not_software_controlled`, `error`, or `call_failed`.
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blink_fade: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the state of both LEDs
    Status,

    /// Set one LED's state from a command string
    Set {
        /// `led,brightness,blink,color` — e.g. `ring,80,fade_medium,cyan`
        command: String,
    },

    /// Turn both LEDs off (intended for a shutdown hook; best effort)
    Off,
}

/// Warn if `--json` was passed to a command that doesn't support it.
fn warn_json_unsupported(cmd_name: &str) {
    log::warn!("--json is not supported for `{cmd_name}` (ignored)");
}

pub fn run(cmd: Command, json: bool) -> Result<()> {
    match cmd {
        Command::Status => status::cmd_status(json),
        Command::Set { command } => {
            if json {
                warn_json_unsupported("set");
            }
            set::cmd_set(&command)
        }
        Command::Off => {
            if json {
                warn_json_unsupported("off");
            }
            off::cmd_off()
        }
    }
}

/// Build the production transport from the on-disk configuration.
pub(super) fn open_transport() -> Result<AcpiCallWmi> {
    let config = Config::load()?;
    Ok(AcpiCallWmi::from_config(&config))
}
