//! Label-style configuration.
//!
//! The label style is set via the `ARROWSTATUS_LABELS` environment variable:
//! - `compat` (default): historical labels, `TypeError` renders as "Value error".
//! - `corrected`: `TypeError` renders as "Type error".
//!
//! Unrecognized values fall back to `compat`. A `--labels` flag on the
//! command line takes precedence over the environment.

use std::sync::atomic::{AtomicU8, Ordering};

use arrowstatus_core::LabelStyle;

/// Environment variable consulted by [`label_style`].
pub const LABELS_ENV: &str = "ARROWSTATUS_LABELS";

// 0=unresolved, 1=Compat, 2=Corrected.
static CACHED_STYLE: AtomicU8 = AtomicU8::new(0);

const STYLE_UNRESOLVED: u8 = 0;
const STYLE_COMPAT: u8 = 1;
const STYLE_CORRECTED: u8 = 2;

fn style_to_u8(style: LabelStyle) -> u8 {
    match style {
        LabelStyle::Compat => STYLE_COMPAT,
        LabelStyle::Corrected => STYLE_CORRECTED,
    }
}

fn u8_to_style(v: u8) -> LabelStyle {
    match v {
        STYLE_CORRECTED => LabelStyle::Corrected,
        _ => LabelStyle::Compat,
    }
}

/// Parse a raw environment value.
#[must_use]
pub fn parse_label_style_env(raw: &str) -> LabelStyle {
    LabelStyle::from_str_loose(raw.trim())
}

/// The configured label style (reads the environment on first call, caches
/// thereafter).
#[must_use]
pub fn label_style() -> LabelStyle {
    let cached = CACHED_STYLE.load(Ordering::Relaxed);
    if cached != STYLE_UNRESOLVED {
        return u8_to_style(cached);
    }

    let resolved = std::env::var(LABELS_ENV)
        .map(|raw| parse_label_style_env(&raw))
        .unwrap_or_default();
    // Racing first callers read the same environment, so whichever store
    // lands first is equivalent.
    let _ = CACHED_STYLE.compare_exchange(
        STYLE_UNRESOLVED,
        style_to_u8(resolved),
        Ordering::SeqCst,
        Ordering::Relaxed,
    );
    u8_to_style(CACHED_STYLE.load(Ordering::Relaxed))
}

/// Apply a command-line override on top of [`label_style`].
#[must_use]
pub fn resolve_label_style(cli_override: Option<&str>) -> LabelStyle {
    match cli_override {
        Some(raw) => LabelStyle::from_str_loose(raw),
        None => label_style(),
    }
}
