//! Platform error numbers carried in a status's auxiliary code.
//!
//! Values follow Linux `<errno.h>`. They are `i16` because that is the width
//! of the auxiliary field.

/// Well-known errno constants.
pub const EPERM: i16 = 1;
pub const ENOENT: i16 = 2;
pub const ESRCH: i16 = 3;
pub const EINTR: i16 = 4;
pub const EIO: i16 = 5;
pub const ENXIO: i16 = 6;
pub const E2BIG: i16 = 7;
pub const ENOEXEC: i16 = 8;
pub const EBADF: i16 = 9;
pub const ECHILD: i16 = 10;
pub const EAGAIN: i16 = 11;
pub const ENOMEM: i16 = 12;
pub const EACCES: i16 = 13;
pub const EFAULT: i16 = 14;
pub const ENOTBLK: i16 = 15;
pub const EBUSY: i16 = 16;
pub const EEXIST: i16 = 17;
pub const EXDEV: i16 = 18;
pub const ENODEV: i16 = 19;
pub const ENOTDIR: i16 = 20;
pub const EISDIR: i16 = 21;
pub const EINVAL: i16 = 22;
pub const ENFILE: i16 = 23;
pub const EMFILE: i16 = 24;
pub const ENOTTY: i16 = 25;
pub const ETXTBSY: i16 = 26;
pub const EFBIG: i16 = 27;
pub const ENOSPC: i16 = 28;
pub const ESPIPE: i16 = 29;
pub const EROFS: i16 = 30;
pub const EMLINK: i16 = 31;
pub const EPIPE: i16 = 32;
pub const EDOM: i16 = 33;
pub const ERANGE: i16 = 34;
pub const ENAMETOOLONG: i16 = 36;
pub const ENOSYS: i16 = 38;
pub const ENOTEMPTY: i16 = 39;
pub const ELOOP: i16 = 40;
pub const EOVERFLOW: i16 = 75;
pub const EAFNOSUPPORT: i16 = 97;
pub const EADDRINUSE: i16 = 98;
pub const EADDRNOTAVAIL: i16 = 99;
pub const ENETUNREACH: i16 = 101;
pub const ECONNABORTED: i16 = 103;
pub const ECONNRESET: i16 = 104;
pub const ENOBUFS: i16 = 105;
pub const EISCONN: i16 = 106;
pub const ENOTCONN: i16 = 107;
pub const ETIMEDOUT: i16 = 110;
pub const ECONNREFUSED: i16 = 111;
pub const EALREADY: i16 = 114;
pub const EINPROGRESS: i16 = 115;

/// Symbolic name of a well-known errno value (`28` -> `"ENOSPC"`).
#[must_use]
pub const fn errno_name(value: i16) -> Option<&'static str> {
    let name = match value {
        EPERM => "EPERM",
        ENOENT => "ENOENT",
        ESRCH => "ESRCH",
        EINTR => "EINTR",
        EIO => "EIO",
        ENXIO => "ENXIO",
        E2BIG => "E2BIG",
        ENOEXEC => "ENOEXEC",
        EBADF => "EBADF",
        ECHILD => "ECHILD",
        EAGAIN => "EAGAIN",
        ENOMEM => "ENOMEM",
        EACCES => "EACCES",
        EFAULT => "EFAULT",
        ENOTBLK => "ENOTBLK",
        EBUSY => "EBUSY",
        EEXIST => "EEXIST",
        EXDEV => "EXDEV",
        ENODEV => "ENODEV",
        ENOTDIR => "ENOTDIR",
        EISDIR => "EISDIR",
        EINVAL => "EINVAL",
        ENFILE => "ENFILE",
        EMFILE => "EMFILE",
        ENOTTY => "ENOTTY",
        ETXTBSY => "ETXTBSY",
        EFBIG => "EFBIG",
        ENOSPC => "ENOSPC",
        ESPIPE => "ESPIPE",
        EROFS => "EROFS",
        EMLINK => "EMLINK",
        EPIPE => "EPIPE",
        EDOM => "EDOM",
        ERANGE => "ERANGE",
        ENAMETOOLONG => "ENAMETOOLONG",
        ENOSYS => "ENOSYS",
        ENOTEMPTY => "ENOTEMPTY",
        ELOOP => "ELOOP",
        EOVERFLOW => "EOVERFLOW",
        EAFNOSUPPORT => "EAFNOSUPPORT",
        EADDRINUSE => "EADDRINUSE",
        EADDRNOTAVAIL => "EADDRNOTAVAIL",
        ENETUNREACH => "ENETUNREACH",
        ECONNABORTED => "ECONNABORTED",
        ECONNRESET => "ECONNRESET",
        ENOBUFS => "ENOBUFS",
        EISCONN => "EISCONN",
        ENOTCONN => "ENOTCONN",
        ETIMEDOUT => "ETIMEDOUT",
        ECONNREFUSED => "ECONNREFUSED",
        EALREADY => "EALREADY",
        EINPROGRESS => "EINPROGRESS",
        _ => return None,
    };
    Some(name)
}

/// Narrow a raw OS error to the auxiliary field width.
///
/// Values that do not fit `i16` become 0 ("not applicable") rather than
/// wrapping into an unrelated errno.
#[must_use]
pub fn narrow_os_error(raw: i32) -> i16 {
    i16::try_from(raw).unwrap_or(0)
}
