//! Packed record wire form of an error status.
//!
//! Layout (native byte order, no padding):
//!
//! | offset | size | field |
//! |---|---|---|
//! | 0 | 4 | message length `L` (`u32`) |
//! | 4 | 1 | [`StatusCode`] byte |
//! | 5 | 2 | auxiliary code (`i16`) |
//! | 7 | `L` | message bytes, not NUL-terminated |
//!
//! An ok status has no packed form. A record is always exactly `L + 7` bytes.

use std::fmt;

use thiserror::Error;

use crate::code::{LabelStyle, StatusCode};
use crate::status::Status;

/// Bytes before the message.
pub const PACKED_HEADER_SIZE: usize = 7;

const LEN_OFFSET: usize = 0;
const CODE_OFFSET: usize = 4;
const AUX_OFFSET: usize = 5;

/// Structural problems with a packed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PackedError {
    #[error("packed status is {len} bytes, shorter than the 7-byte header")]
    Truncated { len: usize },
    #[error("packed status declares a {declared}-byte message but holds {actual} bytes")]
    LengthMismatch { declared: u32, actual: usize },
    #[error("packed status stores the OK code")]
    OkCodeStored,
    #[error("message of {len} bytes does not fit the 32-bit length field")]
    MessageTooLong { len: usize },
}

/// Validated, borrowed view of a packed record.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PackedStatus<'a> {
    bytes: &'a [u8],
}

impl fmt::Debug for PackedStatus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackedStatus")
            .field("message_len", &self.message_len())
            .field("code_byte", &self.code_byte())
            .field("auxiliary_code", &self.auxiliary_code())
            .finish_non_exhaustive()
    }
}

impl<'a> PackedStatus<'a> {
    /// Validate `bytes` as one complete record.
    ///
    /// Unassigned code bytes are accepted here; they decode as
    /// [`StatusCode::UnknownError`].
    pub fn parse(bytes: &'a [u8]) -> Result<Self, PackedError> {
        if bytes.len() < PACKED_HEADER_SIZE {
            return Err(PackedError::Truncated { len: bytes.len() });
        }
        let declared = read_u32(bytes, LEN_OFFSET);
        let expected = usize::try_from(declared)
            .ok()
            .and_then(|l| l.checked_add(PACKED_HEADER_SIZE));
        if expected != Some(bytes.len()) {
            return Err(PackedError::LengthMismatch {
                declared,
                actual: bytes.len() - PACKED_HEADER_SIZE,
            });
        }
        if bytes[CODE_OFFSET] == StatusCode::Ok.as_u8() {
            return Err(PackedError::OkCodeStored);
        }
        Ok(Self { bytes })
    }

    /// The whole record.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    #[must_use]
    pub fn message_len(&self) -> u32 {
        read_u32(self.bytes, LEN_OFFSET)
    }

    /// The code byte exactly as stored.
    #[must_use]
    pub fn code_byte(&self) -> u8 {
        self.bytes[CODE_OFFSET]
    }

    /// The decoded code; unassigned bytes become `UnknownError`.
    #[must_use]
    pub fn code(&self) -> StatusCode {
        StatusCode::from_u8_lossy(self.code_byte())
    }

    #[must_use]
    pub fn auxiliary_code(&self) -> i16 {
        i16::from_ne_bytes([self.bytes[AUX_OFFSET], self.bytes[AUX_OFFSET + 1]])
    }

    #[must_use]
    pub fn message(&self) -> &'a [u8] {
        &self.bytes[PACKED_HEADER_SIZE..]
    }

    /// Same text [`Status::to_display_string`] would produce. Never fails.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.display_with(LabelStyle::Compat)
    }

    #[must_use]
    pub fn display_with(&self, style: LabelStyle) -> String {
        format!(
            "{}: {}",
            self.code().label_for(style),
            String::from_utf8_lossy(self.message())
        )
    }

    /// Copy into an owned [`Status`].
    #[must_use]
    pub fn to_status(&self) -> Status {
        Status::new(self.code(), self.message(), self.auxiliary_code())
    }
}

impl Status {
    /// Encode as a packed record; `None` for ok.
    pub fn to_packed(&self) -> Result<Option<Vec<u8>>, PackedError> {
        if self.is_ok() {
            return Ok(None);
        }
        let message = self.message();
        let len = u32::try_from(message.len()).map_err(|_| PackedError::MessageTooLong {
            len: message.len(),
        })?;
        let mut out = Vec::with_capacity(PACKED_HEADER_SIZE + message.len());
        out.extend_from_slice(&len.to_ne_bytes());
        out.push(self.code().as_u8());
        out.extend_from_slice(&self.auxiliary_code().to_ne_bytes());
        out.extend_from_slice(message);
        debug_assert_eq!(out.len(), PACKED_HEADER_SIZE + message.len());
        Ok(Some(out))
    }

    /// Decode a packed record into an owned status.
    pub fn from_packed(bytes: &[u8]) -> Result<Self, PackedError> {
        PackedStatus::parse(bytes).map(|view| view.to_status())
    }
}

fn read_u32(buf: &[u8], off: usize) -> u32 {
    u32::from_ne_bytes([buf[off], buf[off + 1], buf[off + 2], buf[off + 3]])
}
