//! Plain text rendering of a progress row.

/// Number of cells of the progress bar.
pub const BAR_WIDTH: usize = 50;

/// Percentage of `total` reached by `downloaded`, `None` when the total is unknown.
pub fn percentage(downloaded: u64, total: u64) -> Option<f64> {
    (total > 0).then(|| downloaded as f64 / total as f64 * 100.0)
}

/// Render one progress row.
///
/// ```rust
/// use canvas_dl::progress::render_line;
///
/// let line = render_line(1, 4, "L1.pdf").unwrap();
/// assert_eq!(
///     line,
///     format!("[{}{}] 25.00% - L1.pdf", "#".repeat(12), "-".repeat(38))
/// );
/// assert_eq!(render_line(10, 0, "unknown.pdf"), None);
/// ```
pub fn render_line(downloaded: u64, total: u64, label: &str) -> Option<String> {
    let percent = percentage(downloaded, total)?;
    let filled = ((percent / 2.0) as usize).min(BAR_WIDTH);
    Some(format!(
        "[{}{}] {:.2}% - {}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        percent,
        label
    ))
}
