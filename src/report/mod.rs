use std::fmt::Write;
use std::time::Duration;

use crate::http_probe::result::HostStats;

fn secs(d: Duration) -> f64 {
    d.as_secs_f64()
}

/// Render the summary block for one host, including the trailing blank line.
///
/// Pure function of its input: rendering the same stats twice yields the
/// same text.
pub fn render(host: &str, stats: &HostStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Host: {host}");
    let _ = writeln!(out, "  Success:  {}", stats.success_count);
    let _ = writeln!(out, "  Failed:   {}", stats.failed_count);
    let _ = writeln!(out, "  Errors:   {}", stats.error_count);
    let _ = writeln!(out, "  Min:      {:.3}s", secs(stats.min()));
    let _ = writeln!(out, "  Max:      {:.3}s", secs(stats.max()));
    let _ = writeln!(out, "  Avg:      {:.3}s", secs(stats.avg()));
    out.push('\n');
    out
}

pub fn print_summary(host: &str, stats: &HostStats) {
    print!("{}", render(host, stats));
}
