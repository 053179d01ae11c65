use std::io::{self, Write};

use crate::{analytics::AnalysisResult, invariants::Hour};

/// Prints the summary: image share and top browser when there is anything to
/// say, then one line per hour of the day, then the URL that was analysed.
pub fn write_report<W: Write>(out: &mut W, result: &AnalysisResult, url: &str) -> io::Result<()> {
    if let Some(percentage) = result.image_percentage() {
        writeln!(
            out,
            "Image requests account for {percentage:.1}% of all requests"
        )?;
    }
    if let Some((browser, hits)) = result.most_popular_browser() {
        writeln!(out, "The most popular browser is {browser} with {hits} hits")?;
    }
    for hour in Hour::all() {
        writeln!(out, "Hour {hour} has {} hits", result.hits_at(hour))?;
    }
    writeln!(out, "Running main with URL = {url}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{analytics::analyze, worker::rows};

    fn render(body: &str, url: &str) -> String {
        let mut out = Vec::new();
        write_report(&mut out, &analyze(rows(body)).unwrap(), url).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_report_layout() {
        let body = "\
a.jpg,01/01/2024 10:00:00,Mozilla Firefox 1.0,200,512
b.html,01/01/2024 10:30:00,Mozilla Firefox 1.0,200,512
c.html,01/01/2024 23:00:00,Safari,200,512
";
        let report = render(body, "http://example.com/log.csv");
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 2 + 24 + 1);
        assert_eq!(lines[0], "Image requests account for 33.3% of all requests");
        assert_eq!(lines[1], "The most popular browser is Firefox with 2 hits");
        assert_eq!(lines[2], "Hour 00 has 0 hits");
        assert_eq!(lines[12], "Hour 10 has 2 hits");
        assert_eq!(lines[25], "Hour 23 has 1 hits");
        assert_eq!(lines[26], "Running main with URL = http://example.com/log.csv...");
    }

    #[test]
    fn empty_log_prints_only_hours_and_url() {
        let report = render("", "http://h/x");
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 25);
        assert_eq!(lines[0], "Hour 00 has 0 hits");
        assert_eq!(lines[23], "Hour 23 has 0 hits");
        assert_eq!(lines[24], "Running main with URL = http://h/x...");
    }

    #[test]
    fn browser_line_omitted_without_matches() {
        let report = render("/x,bad,Opera/9.0,200,1", "u");
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "Image requests account for 0.0% of all requests");
        assert_eq!(lines[1], "Hour 00 has 0 hits");
        assert_eq!(lines.len(), 1 + 24 + 1);
    }
}
