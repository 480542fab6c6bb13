//! Plain-text rendering of the daily report page.

use std::fmt::Write;

use crate::coordinator::{ReportState, ReportView};

/// Status card, then the report (or the inline error), then its sources.
#[must_use]
pub fn render_view(view: &ReportView) -> String {
    let mut out = String::new();
    let local = view.reference_time.local();
    let glyph = if view.activity.is_night() { '☾' } else { '☀' };

    let _ = writeln!(out, "{glyph} Punch right now");
    let _ = writeln!(
        out,
        "  Japan time:       {} ({})",
        view.language.short_time(&local),
        view.language.long_date(&local)
    );
    let _ = writeln!(out, "  Current activity: {}", view.activity);
    out.push('\n');

    match &view.state {
        ReportState::Pending => out.push_str("Loading today's report...\n"),
        ReportState::Failed(message) => {
            let _ = writeln!(out, "! {message}");
        }
        ReportState::Ready(report) => {
            let _ = writeln!(out, "Daily report, {}", report.date_key);
            out.push('\n');
            out.push_str(report.text.trim_end());
            out.push('\n');

            if !report.sources.is_empty() {
                out.push_str("\nSources\n");
                for source in &report.sources {
                    let _ = writeln!(out, "  • {} <{}>", source.display_title(), source.uri);
                }
            }
        }
    }

    out
}
