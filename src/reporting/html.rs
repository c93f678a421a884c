use chrono::{DateTime, Local};

use crate::models::{ScanResult, Severity};
use crate::pipeline::aggregate;

/// Renders the static HTML vulnerability report: a severity summary followed
/// by one section per scanned target listing every remaining finding.
pub fn render_report(results: &[ScanResult], generated_at: DateTime<Local>) -> String {
    let timestamp = generated_at.format("%Y-%m-%d_%H-%M-%S");

    let mut html = String::new();
    html.push_str("<html>\n<head><title>Container Vulnerability Report</title></head>\n<body>\n");
    html.push_str(&format!(
        "<h2>Container Vulnerability Report - {timestamp}</h2>\n"
    ));

    let counts = aggregate(results.iter());
    html.push_str("<h3>Summary</h3>\n<ul>\n");
    for severity in Severity::ALL {
        html.push_str(&format!(
            "<li>{}: {}</li>\n",
            severity.as_str(),
            counts.get(severity)
        ));
    }
    html.push_str("</ul>\n");

    for result in results {
        html.push_str(&format!(
            "<h3>Image: {}</h3>\n<ul>\n",
            escape(&result.artifact_name)
        ));
        for section in &result.results {
            for finding in &section.vulnerabilities {
                html.push_str(&format!(
                    "<li>[{}] {} - {} ({})</li>\n",
                    escape(finding.severity.as_deref().unwrap_or("UNCATEGORIZED")),
                    escape(&finding.vulnerability_id),
                    escape(&finding.pkg_name),
                    escape(&finding.installed_version),
                ));
            }
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Minimal HTML escaping for text content from scanner output.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
