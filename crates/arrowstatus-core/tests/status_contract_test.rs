//! Contract tests for the `Status` value: rendering, copies, packed records.

use arrowstatus_core::{PACKED_HEADER_SIZE, PackedStatus, Status, StatusCode, errno};

const ERROR_CODES: [StatusCode; 8] = [
    StatusCode::OutOfMemory,
    StatusCode::KeyError,
    StatusCode::TypeError,
    StatusCode::ValueError,
    StatusCode::IoError,
    StatusCode::NotImplemented,
    StatusCode::ArrowError,
    StatusCode::UnknownError,
];

#[test]
fn every_error_code_reports_its_fields() {
    for code in ERROR_CODES {
        for aux in [i16::MIN, -1, 0, 28, i16::MAX] {
            let message = format!("failure in {code:?}");
            let status = Status::new(code, message.clone(), aux);
            assert!(!status.is_ok());
            assert_eq!(status.code(), code);
            assert_eq!(status.auxiliary_code(), aux);
            assert_eq!(
                status.to_display_string(),
                format!("{}: {message}", code.label())
            );
        }
    }
}

#[test]
fn scenario_ok() {
    let status = Status::ok();
    assert!(status.is_ok());
    assert_eq!(status.code(), StatusCode::Ok);
    assert_eq!(status.to_display_string(), "OK");
    assert_eq!(status.to_string(), "OK");
}

#[test]
fn scenario_io_error_with_errno() {
    let status = Status::new(StatusCode::IoError, "disk full", 28);
    assert_eq!(status.code(), StatusCode::IoError);
    assert_eq!(status.auxiliary_code(), 28);
    assert_eq!(status.to_display_string(), "IO error: disk full");
}

#[test]
fn scenario_empty_message_keeps_separator() {
    let status = Status::new(StatusCode::KeyError, "", 0);
    assert_eq!(status.to_display_string(), "Key error: ");
}

#[test]
fn scenario_copy_is_equal_and_independent() {
    let original = Status::new(StatusCode::IoError, "disk full", 28);
    let copy = original.clone();
    assert_eq!(copy, original);
    assert_ne!(copy.message().as_ptr(), original.message().as_ptr());

    drop(original);
    assert_eq!(copy.to_display_string(), "IO error: disk full");
    assert_eq!(copy.auxiliary_code(), 28);
}

#[test]
fn scenario_not_implemented_with_negative_aux() {
    let status = Status::new(StatusCode::NotImplemented, "feature X", -1);
    assert_eq!(status.to_display_string(), "Not implemented: feature X");
    assert_eq!(status.auxiliary_code(), -1);
}

#[test]
fn type_error_and_value_error_render_the_same_label() {
    let type_error = Status::type_error("x");
    let value_error = Status::value_error("x");
    assert_eq!(type_error.to_display_string(), "Value error: x");
    assert_eq!(
        type_error.to_display_string(),
        value_error.to_display_string()
    );
    assert_eq!(type_error.code_as_display_string(), "Value error");
    // Same text, different kinds.
    assert_ne!(type_error, value_error);
}

#[test]
fn equality_is_field_wise() {
    let base = Status::new(StatusCode::ValueError, "m", 1);
    assert_eq!(base, Status::new(StatusCode::ValueError, "m", 1));
    assert_ne!(base, Status::new(StatusCode::ValueError, "m", 2));
    assert_ne!(base, Status::new(StatusCode::ValueError, "n", 1));
    assert_ne!(base, Status::new(StatusCode::KeyError, "m", 1));
    assert_ne!(base, Status::OK);
    assert_eq!(Status::OK, Status::ok());
    assert_eq!(Status::OK.clone(), Status::OK);
}

#[test]
fn overwriting_a_copy_leaves_the_source_alone() {
    let source = Status::arrow_error("engine");
    let mut copy = source.clone();
    assert_eq!(copy, source);
    copy = Status::key_error("replaced");
    assert!(copy.is_key_error());
    assert_eq!(source.to_display_string(), "Arrow C++ error: engine");

    let mut moved_from = source.clone();
    let moved = moved_from.take();
    assert!(moved_from.is_ok());
    assert_eq!(moved, source);
}

#[test]
fn packed_round_trip_preserves_triples() {
    let mut long = vec![b'z'; 10_000];
    long[17] = 0;
    long[9_999] = 0;
    let messages: [Vec<u8>; 4] = [Vec::new(), b"a".to_vec(), long, b"nul\0inside\0".to_vec()];

    for code in ERROR_CODES {
        for message in &messages {
            let status = Status::new(code, message.clone(), -7);
            let packed = status
                .to_packed()
                .expect("message fits")
                .expect("error status has a packed form");
            assert_eq!(packed.len(), message.len() + PACKED_HEADER_SIZE);

            let view = PackedStatus::parse(&packed).expect("valid record");
            assert_eq!(view.code(), code);
            assert_eq!(view.auxiliary_code(), -7);
            assert_eq!(view.message(), message.as_slice());

            let decoded = Status::from_packed(&packed).expect("valid record");
            assert_eq!(decoded, status);
            assert_eq!(decoded.to_display_bytes(), status.to_display_bytes());
        }
    }
}

#[test]
fn embedded_nul_is_rendered_verbatim() {
    let status = Status::io_error("a\0b");
    assert_eq!(status.to_display_string(), "IO error: a\0b");
    assert_eq!(status.to_display_string().len(), "IO error: ".len() + 3);
}

#[test]
fn errno_constants_match_the_host() {
    assert_eq!(i32::from(errno::ENOENT), libc::ENOENT);
    assert_eq!(i32::from(errno::EIO), libc::EIO);
    assert_eq!(i32::from(errno::ENOMEM), libc::ENOMEM);
    assert_eq!(i32::from(errno::EINVAL), libc::EINVAL);
    assert_eq!(i32::from(errno::ENOSPC), libc::ENOSPC);
    assert_eq!(i32::from(errno::EPIPE), libc::EPIPE);
}

#[test]
fn io_error_from_os_error_carries_errno() {
    let err = std::io::Error::from_raw_os_error(libc::ENOSPC);
    let status: Status = err.into();
    assert!(status.is_io_error());
    assert_eq!(status.auxiliary_code(), errno::ENOSPC);
    assert!(status.to_display_string().starts_with("IO error: "));
}
