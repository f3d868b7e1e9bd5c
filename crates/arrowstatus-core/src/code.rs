//! Error-kind enumeration and its display labels.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Category of an operation outcome.
///
/// The byte values are stable: they are what the packed record stores at
/// offset 4. Byte 8 is unassigned.
#[non_exhaustive]
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatusCode {
    /// Success. Never stored inside an error status.
    #[default]
    Ok = 0,
    /// An allocation or reservation failed.
    OutOfMemory = 1,
    /// A lookup key was not present.
    KeyError = 2,
    /// A value had the wrong type.
    TypeError = 3,
    /// A value was out of its accepted domain.
    ValueError = 4,
    /// An I/O operation failed; the auxiliary code usually holds errno.
    IoError = 5,
    /// The requested feature is not implemented.
    NotImplemented = 6,
    /// The underlying Arrow C++ engine reported a failure.
    ArrowError = 7,
    /// Anything else.
    UnknownError = 9,
}

/// Which label table to render codes with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelStyle {
    /// Historical labels. `TypeError` renders as "Value error", and existing
    /// consumers match on that text.
    #[default]
    Compat,
    /// `TypeError` renders as "Type error". Every other label is unchanged.
    Corrected,
}

impl StatusCode {
    /// Every code, in byte order.
    pub const ALL: [Self; 9] = [
        Self::Ok,
        Self::OutOfMemory,
        Self::KeyError,
        Self::TypeError,
        Self::ValueError,
        Self::IoError,
        Self::NotImplemented,
        Self::ArrowError,
        Self::UnknownError,
    ];

    /// The stored byte value.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode a stored byte, or `None` if no code uses it.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Ok),
            1 => Some(Self::OutOfMemory),
            2 => Some(Self::KeyError),
            3 => Some(Self::TypeError),
            4 => Some(Self::ValueError),
            5 => Some(Self::IoError),
            6 => Some(Self::NotImplemented),
            7 => Some(Self::ArrowError),
            9 => Some(Self::UnknownError),
            _ => None,
        }
    }

    /// Decode a stored byte, mapping unassigned values to `UnknownError`.
    #[must_use]
    pub const fn from_u8_lossy(value: u8) -> Self {
        match Self::from_u8(value) {
            Some(code) => code,
            None => Self::UnknownError,
        }
    }

    /// Human-readable label in the [`LabelStyle::Compat`] table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.label_for(LabelStyle::Compat)
    }

    /// Human-readable label in the given table.
    #[must_use]
    pub const fn label_for(self, style: LabelStyle) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::OutOfMemory => "Out of memory",
            Self::KeyError => "Key error",
            Self::TypeError => match style {
                LabelStyle::Compat => "Value error",
                LabelStyle::Corrected => "Type error",
            },
            Self::ValueError => "Value error",
            Self::IoError => "IO error",
            Self::NotImplemented => "Not implemented",
            Self::ArrowError => "Arrow C++ error",
            Self::UnknownError => "Unknown error",
        }
    }

    /// Stable machine name (`"io_error"`, `"not_implemented"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::OutOfMemory => "out_of_memory",
            Self::KeyError => "key_error",
            Self::TypeError => "type_error",
            Self::ValueError => "value_error",
            Self::IoError => "io_error",
            Self::NotImplemented => "not_implemented",
            Self::ArrowError => "arrow_error",
            Self::UnknownError => "unknown_error",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no [`StatusCode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status code '{0}'")]
pub struct ParseStatusCodeError(pub String);

impl FromStr for StatusCode {
    type Err = ParseStatusCodeError;

    /// Accepts machine names (`io_error`) and CamelCase names (`IOError`),
    /// ignoring ASCII case, `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let code = match folded.as_str() {
            "ok" => Self::Ok,
            "outofmemory" | "oom" => Self::OutOfMemory,
            "keyerror" => Self::KeyError,
            "typeerror" => Self::TypeError,
            "valueerror" => Self::ValueError,
            "ioerror" | "io" => Self::IoError,
            "notimplemented" => Self::NotImplemented,
            "arrowerror" | "arrow" => Self::ArrowError,
            "unknownerror" | "unknown" => Self::UnknownError,
            _ => return Err(ParseStatusCodeError(s.to_string())),
        };
        Ok(code)
    }
}

impl LabelStyle {
    /// Parse from string (case-insensitive). Unrecognized input is `Compat`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "corrected" | "fixed" => Self::Corrected,
            _ => Self::Compat,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compat => "compat",
            Self::Corrected => "corrected",
        }
    }
}
