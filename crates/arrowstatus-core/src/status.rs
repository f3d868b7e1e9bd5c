//! The `Status` result value.

use std::borrow::Cow;
use std::collections::TryReserveError;
use std::fmt;

use crate::code::{LabelStyle, StatusCode};
use crate::errno;

/// Auxiliary code reported by an ok status.
pub const NO_AUXILIARY_CODE: i16 = -1;

/// Outcome of a fallible operation: ok, or an error with a code, message and
/// auxiliary code.
///
/// The ok state is a null pointer, so `Status` is one word wide and the
/// success path never allocates. An error owns a single boxed record.
/// Cloning deep-copies that record; two live statuses never share one.
///
/// `&self` methods only read, so one instance may be read from several
/// threads at once. In-place mutation (`clone_from`, [`Status::take`],
/// assignment) needs `&mut`; a status shared between threads and mutated
/// must sit behind a lock the caller provides.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Status {
    state: Option<Box<ErrorState>>,
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct ErrorState {
    code: StatusCode,
    auxiliary_code: i16,
    message: Box<[u8]>,
}

impl Status {
    /// The success value.
    pub const OK: Self = Self { state: None };

    /// Returns the success value. Does not allocate.
    #[must_use]
    pub const fn ok() -> Self {
        Self::OK
    }

    /// Build an error status.
    ///
    /// `code` must not be [`StatusCode::Ok`] and `message` must fit a `u32`
    /// length. Both are checked in debug builds; a release build that is
    /// handed `Ok` stores `UnknownError` instead.
    #[must_use]
    pub fn new(code: StatusCode, message: impl Into<Vec<u8>>, auxiliary_code: i16) -> Self {
        debug_assert!(
            code != StatusCode::Ok,
            "error status constructed with StatusCode::Ok"
        );
        let message = message.into();
        debug_assert!(
            u32::try_from(message.len()).is_ok(),
            "status message of {} bytes exceeds the u32 length field",
            message.len()
        );
        let code = if code == StatusCode::Ok {
            StatusCode::UnknownError
        } else {
            code
        };
        Self {
            state: Some(Box::new(ErrorState {
                code,
                auxiliary_code,
                message: message.into_boxed_slice(),
            })),
        }
    }

    /// Build an error status with auxiliary code 0.
    #[must_use]
    pub fn with_message(code: StatusCode, message: impl Into<Vec<u8>>) -> Self {
        Self::new(code, message, 0)
    }

    /// Allocation failure.
    #[must_use]
    pub fn out_of_memory(message: impl Into<Vec<u8>>) -> Self {
        Self::with_message(StatusCode::OutOfMemory, message)
    }

    /// Missing key or lookup failure.
    #[must_use]
    pub fn key_error(message: impl Into<Vec<u8>>) -> Self {
        Self::with_message(StatusCode::KeyError, message)
    }

    /// Wrong type. Renders as "Value error" under the compat labels.
    #[must_use]
    pub fn type_error(message: impl Into<Vec<u8>>) -> Self {
        Self::with_message(StatusCode::TypeError, message)
    }

    /// Invalid value.
    #[must_use]
    pub fn value_error(message: impl Into<Vec<u8>>) -> Self {
        Self::with_message(StatusCode::ValueError, message)
    }

    /// IO failure with no errno attached.
    #[must_use]
    pub fn io_error(message: impl Into<Vec<u8>>) -> Self {
        Self::with_message(StatusCode::IoError, message)
    }

    /// IO error carrying a platform errno in the auxiliary code.
    #[must_use]
    pub fn io_error_with_errno(message: impl Into<Vec<u8>>, errno: i16) -> Self {
        Self::new(StatusCode::IoError, message, errno)
    }

    /// Requested feature is not implemented.
    #[must_use]
    pub fn not_implemented(message: impl Into<Vec<u8>>) -> Self {
        Self::with_message(StatusCode::NotImplemented, message)
    }

    /// Failure reported by the Arrow C++ library.
    #[must_use]
    pub fn arrow_error(message: impl Into<Vec<u8>>) -> Self {
        Self::with_message(StatusCode::ArrowError, message)
    }

    /// Failure that fits no other code.
    #[must_use]
    pub fn unknown_error(message: impl Into<Vec<u8>>) -> Self {
        Self::with_message(StatusCode::UnknownError, message)
    }

    /// True iff this is the success value. A single null check.
    #[inline]
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.state.is_none()
    }

    /// The error kind, or [`StatusCode::Ok`].
    #[inline]
    #[must_use]
    pub fn code(&self) -> StatusCode {
        self.state.as_ref().map_or(StatusCode::Ok, |s| s.code)
    }

    /// The auxiliary code, or [`NO_AUXILIARY_CODE`] when ok.
    #[inline]
    #[must_use]
    pub fn auxiliary_code(&self) -> i16 {
        self.state
            .as_ref()
            .map_or(NO_AUXILIARY_CODE, |s| s.auxiliary_code)
    }

    /// Raw message bytes; empty when ok.
    #[must_use]
    pub fn message(&self) -> &[u8] {
        match &self.state {
            Some(s) => &s.message,
            None => &[],
        }
    }

    /// Message decoded as UTF-8 with invalid sequences replaced.
    #[must_use]
    pub fn message_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.message())
    }

    /// True iff the code is [`StatusCode::OutOfMemory`].
    #[must_use]
    pub fn is_out_of_memory(&self) -> bool {
        self.code() == StatusCode::OutOfMemory
    }

    /// True iff the code is [`StatusCode::KeyError`].
    #[must_use]
    pub fn is_key_error(&self) -> bool {
        self.code() == StatusCode::KeyError
    }

    /// True iff the code is [`StatusCode::TypeError`].
    #[must_use]
    pub fn is_type_error(&self) -> bool {
        self.code() == StatusCode::TypeError
    }

    /// True iff the code is [`StatusCode::ValueError`].
    #[must_use]
    pub fn is_value_error(&self) -> bool {
        self.code() == StatusCode::ValueError
    }

    /// True iff the code is [`StatusCode::IoError`].
    #[must_use]
    pub fn is_io_error(&self) -> bool {
        self.code() == StatusCode::IoError
    }

    /// True iff the code is [`StatusCode::NotImplemented`].
    #[must_use]
    pub fn is_not_implemented(&self) -> bool {
        self.code() == StatusCode::NotImplemented
    }

    /// True iff the code is [`StatusCode::ArrowError`].
    #[must_use]
    pub fn is_arrow_error(&self) -> bool {
        self.code() == StatusCode::ArrowError
    }

    /// True iff the code is [`StatusCode::UnknownError`].
    #[must_use]
    pub fn is_unknown_error(&self) -> bool {
        self.code() == StatusCode::UnknownError
    }

    /// Label of [`Status::code`], without the message.
    #[must_use]
    pub fn code_as_display_string(&self) -> String {
        self.code().label().to_string()
    }

    /// `"OK"`, or `"<label>: <message>"`.
    ///
    /// An empty message still gets the `": "` separator. Never truncates.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.display_with(LabelStyle::Compat)
    }

    /// Like [`Status::to_display_string`] with an explicit label table.
    #[must_use]
    pub fn display_with(&self, style: LabelStyle) -> String {
        match &self.state {
            None => StatusCode::Ok.label_for(style).to_string(),
            Some(s) => {
                let label = s.code.label_for(style);
                let message = String::from_utf8_lossy(&s.message);
                let mut out = String::with_capacity(label.len() + 2 + message.len());
                out.push_str(label);
                out.push_str(": ");
                out.push_str(&message);
                out
            }
        }
    }

    /// The display text as exact bytes, message included verbatim.
    #[must_use]
    pub fn to_display_bytes(&self) -> Vec<u8> {
        let label = self.code().label().as_bytes();
        match &self.state {
            None => label.to_vec(),
            Some(s) => {
                let mut out = Vec::with_capacity(label.len() + 2 + s.message.len());
                out.extend_from_slice(label);
                out.extend_from_slice(b": ");
                out.extend_from_slice(&s.message);
                out
            }
        }
    }

    /// Move the value out, leaving `self` ok. Does not allocate.
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// `Ok(())` when ok, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_ok() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            None => f.write_str("Status::OK"),
            Some(s) => f
                .debug_struct("Status")
                .field("code", &s.code)
                .field("auxiliary_code", &s.auxiliary_code)
                .field("message", &String::from_utf8_lossy(&s.message))
                .finish(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            None => f.write_str(StatusCode::Ok.label()),
            Some(s) => write!(
                f,
                "{}: {}",
                s.code.label(),
                String::from_utf8_lossy(&s.message)
            ),
        }
    }
}

impl std::error::Error for Status {}

impl From<std::io::Error> for Status {
    fn from(err: std::io::Error) -> Self {
        let errno = err.raw_os_error().map_or(0, errno::narrow_os_error);
        Self::io_error_with_errno(err.to_string(), errno)
    }
}

impl From<TryReserveError> for Status {
    fn from(err: TryReserveError) -> Self {
        Self::out_of_memory(err.to_string())
    }
}

impl From<Result<(), Status>> for Status {
    fn from(result: Result<(), Status>) -> Self {
        match result {
            Ok(()) => Self::OK,
            Err(status) => status,
        }
    }
}
