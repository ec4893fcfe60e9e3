//! Snapshot helpers for frame-based render tests.

use crate::render::RenderFrame;

/// Assert a stable text snapshot for a whole frame.
///
/// `expected` may carry a trailing newline from a raw string literal;
/// it is trimmed before comparison.
pub fn assert_frame_snapshot(label: &str, frame: &RenderFrame, expected: &str) {
    let expected = expected.trim_end_matches('\n');
    let got = frame.snapshot();
    assert_eq!(
        got, expected,
        "frame snapshot mismatch ({label})\n--- expected\n{expected}\n--- got\n{got}",
    );
}

/// Assert the text content of a single frame row.
pub fn assert_frame_row(label: &str, frame: &RenderFrame, y: usize, expected: &str) {
    let got = frame.row_text(y);
    assert_eq!(
        got, expected,
        "frame row {y} mismatch ({label})\n--- expected\n{expected}\n--- got\n{got}",
    );
}
