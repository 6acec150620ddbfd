//! The built-in demo catalog.
//!
//! Three short sequences showing an AI coding agent working a repository.
//! All text is literal; nothing here is executed.

use super::{LineStyle, OutputLine, Sequence};

/// Build the default catalog.
pub(super) fn sequences() -> Vec<Sequence> {
    vec![
        Sequence {
            command: r#"agent "fix the flaky checkout test""#.to_string(),
            outputs: vec![
                OutputLine::styled("Reading test output...", 300, LineStyle::Info),
                OutputLine::styled("Found race in cart fixture setup", 500, LineStyle::Info),
                OutputLine::plain("Patching tests/checkout_test.ts"),
                OutputLine::styled("✓ 12/12 tests passing", 700, LineStyle::Success),
                OutputLine::styled("✓ Done in 41s", 300, LineStyle::Success),
            ],
        },
        Sequence {
            command: r#"agent "add rate limiting to /api/login""#.to_string(),
            outputs: vec![
                OutputLine::styled("Scanning route handlers...", 300, LineStyle::Info),
                OutputLine::plain("Writing middleware/rate_limit.ts"),
                OutputLine::plain("Wiring limiter into auth router"),
                OutputLine::styled("✓ 30 req/min per IP enforced", 600, LineStyle::Success),
                OutputLine::styled("✓ Integration tests added", 400, LineStyle::Success),
            ],
        },
        Sequence {
            command: "agent review --staged".to_string(),
            outputs: vec![
                OutputLine::styled("Reviewing 4 staged files...", 300, LineStyle::Info),
                OutputLine::plain("api/session.ts: token never expires"),
                OutputLine::plain("db/pool.ts: connection leak on error path"),
                OutputLine::styled("✓ 2 findings, patches suggested", 600, LineStyle::Success),
            ],
        },
    ]
}
