//! Early-return helpers for `Status`-based call chains.

/// Evaluate a [`Status`](crate::Status) and return it from the enclosing
/// function if it is not ok.
///
/// # Usage
///
/// ```
/// use arrowstatus_core::{Status, return_not_ok};
///
/// fn open(path: &str) -> Status {
///     if path.is_empty() {
///         return Status::value_error("empty path");
///     }
///     Status::OK
/// }
///
/// fn open_both(a: &str, b: &str) -> Status {
///     return_not_ok!(open(a));
///     return_not_ok!(open(b));
///     Status::OK
/// }
///
/// assert!(open_both("x", "y").is_ok());
/// assert!(open_both("x", "").is_value_error());
/// ```
#[macro_export]
macro_rules! return_not_ok {
    ($expr:expr $(,)?) => {{
        let status: $crate::Status = $expr;
        if !status.is_ok() {
            return status;
        }
    }};
}

/// Evaluate a [`Status`](crate::Status) and return `Err(status.into())` from
/// the enclosing function if it is not ok.
///
/// The enclosing function's error type must implement `From<Status>`.
///
/// # Usage
///
/// ```
/// use arrowstatus_core::{Status, try_status};
///
/// fn check(n: i32) -> Status {
///     if n < 0 { Status::value_error("negative") } else { Status::OK }
/// }
///
/// fn double(n: i32) -> Result<i32, Status> {
///     try_status!(check(n));
///     Ok(n * 2)
/// }
///
/// assert_eq!(double(4), Ok(8));
/// assert!(double(-1).unwrap_err().is_value_error());
/// ```
#[macro_export]
macro_rules! try_status {
    ($expr:expr $(,)?) => {{
        let status: $crate::Status = $expr;
        if !status.is_ok() {
            return ::core::result::Result::Err(::core::convert::From::from(status));
        }
    }};
}
