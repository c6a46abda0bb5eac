//! Transition tags attached to trace events.
//!
//! The wire format is the upper-snake tag string emitted by the trace
//! producers; serde and `FromStr`/`Display` round-trip it unchanged.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of system transition a trace tag marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransitionType {
    Rotation,
    PipEnter,
    PipResize,
    PipExit,
    AppLaunch,
    AppClose,
    ImeAppear,
    ImeDisappear,
}

impl TransitionType {
    /// All known transition types, in wire order.
    pub const ALL: [TransitionType; 8] = [
        Self::Rotation,
        Self::PipEnter,
        Self::PipResize,
        Self::PipExit,
        Self::AppLaunch,
        Self::AppClose,
        Self::ImeAppear,
        Self::ImeDisappear,
    ];

    /// Returns the wire name of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rotation => "ROTATION",
            Self::PipEnter => "PIP_ENTER",
            Self::PipResize => "PIP_RESIZE",
            Self::PipExit => "PIP_EXIT",
            Self::AppLaunch => "APP_LAUNCH",
            Self::AppClose => "APP_CLOSE",
            Self::ImeAppear => "IME_APPEAR",
            Self::ImeDisappear => "IME_DISAPPEAR",
        }
    }
}

impl fmt::Display for TransitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransitionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROTATION" => Ok(Self::Rotation),
            "PIP_ENTER" => Ok(Self::PipEnter),
            "PIP_RESIZE" => Ok(Self::PipResize),
            "PIP_EXIT" => Ok(Self::PipExit),
            "APP_LAUNCH" => Ok(Self::AppLaunch),
            "APP_CLOSE" => Ok(Self::AppClose),
            "IME_APPEAR" => Ok(Self::ImeAppear),
            "IME_DISAPPEAR" => Ok(Self::ImeDisappear),
            other => Err(Error::UnknownTransitionType(other.to_string())),
        }
    }
}
