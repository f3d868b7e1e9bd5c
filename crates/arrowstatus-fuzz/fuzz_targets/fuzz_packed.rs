#![no_main]
use arrowstatus_core::{PackedStatus, Status, StatusCode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either decode or be rejected, never panic.
    let Ok(view) = PackedStatus::parse(data) else {
        assert!(Status::from_packed(data).is_err());
        return;
    };

    let rendered = view.to_display_string();
    assert!(rendered.starts_with(view.code().label()));

    let status = view.to_status();
    assert!(!status.is_ok());
    assert_eq!(status.message(), view.message());
    assert_eq!(status.auxiliary_code(), view.auxiliary_code());
    assert_eq!(status.to_display_string(), rendered);

    // Assigned codes re-encode byte for byte.
    if StatusCode::from_u8(view.code_byte()).is_some() {
        let repacked = status.to_packed().ok().flatten();
        assert_eq!(repacked.as_deref(), Some(data));
    }
});
