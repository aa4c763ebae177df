use super::summary::CensusReport;
use chrono::NaiveDate;
use std::fmt::Write;

const SAMPLE_TITLES: usize = 5;
const TITLE_WIDTH: usize = 70;
const BANNER_WIDTH: usize = 60;

/// Ranked table, per-name sample titles and unknown candidates, as printed
/// to the console.
pub fn render_console(report: &CensusReport) -> String {
    let mut out = String::new();
    let tally = report.tally();
    let ranked = tally.ranked();

    banner(&mut out, "PHILOSOPHERS FOUND");

    if ranked.is_empty() {
        out.push_str("No philosophers found in titles.\n");
    } else {
        let _ = writeln!(out, "{:<25} {:>10}", "PHILOSOPHER", "TITLES");
        let _ = writeln!(out, "{}", "-".repeat(37));
        for (name, count) in &ranked {
            let _ = writeln!(out, "{name:<25} {count:>10}");
        }
    }

    let _ = writeln!(out, "\n{:<25} {:>10}", "UNIQUE PHILOSOPHERS:", tally.unique_names());
    let _ = writeln!(out, "{:<25} {:>10}", "TOTAL VIDEOS:", report.total_titles());

    if !ranked.is_empty() {
        out.push('\n');
        banner(&mut out, "DETAILS - TITLES PER PHILOSOPHER");

        for (name, count) in &ranked {
            let _ = writeln!(out, "\n### {name} ({count} videos)");
            for title in tally.titles(name).iter().take(SAMPLE_TITLES) {
                let _ = writeln!(out, "  - {}", truncate_title(title));
            }
            if *count > SAMPLE_TITLES {
                let _ = writeln!(out, "  ... and {} more videos", count - SAMPLE_TITLES);
            }
        }
    }

    let candidates = report.unknown_candidates();
    if !candidates.is_empty() {
        out.push('\n');
        banner(&mut out, "POSSIBLE UNLISTED PHILOSOPHERS");
        for candidate in candidates {
            let _ = writeln!(
                out,
                "  {}: {} occurrences",
                candidate.token, candidate.count
            );
        }
    }

    out
}

/// The flat text report written to disk: names in alphabetical order
/// followed by the totals.
pub fn render_artifact(report: &CensusReport, generated_on: NaiveDate) -> String {
    let mut out = String::new();
    let tally = report.tally();

    out.push_str("PHILOSOPHERS IN CASA PALEOLOGU VIDEOS\n");
    let _ = writeln!(out, "{}", "=".repeat(50));
    let _ = writeln!(out, "Generated on {}\n", generated_on.format("%Y-%m-%d"));

    out.push_str("ALPHABETICAL LIST:\n");
    let _ = writeln!(out, "{}", "-".repeat(30));
    for (name, count) in tally.alphabetical() {
        let _ = writeln!(out, "- {name} ({count} videos)");
    }

    let _ = writeln!(out, "\n\nTOTAL: {} unique philosophers", tally.unique_names());
    let _ = writeln!(out, "From {} videos analysed", report.total_titles());
    out
}

fn banner(out: &mut String, heading: &str) {
    let rule = "=".repeat(BANNER_WIDTH);
    let _ = writeln!(out, "{rule}\n{heading}\n{rule}\n");
}

fn truncate_title(title: &str) -> String {
    match title.char_indices().nth(TITLE_WIDTH) {
        Some((cut, _)) => format!("{}...", &title[..cut]),
        None => title.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::census::run_census;

    fn generated_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
    }

    #[test]
    fn console_lists_ranked_names_and_samples() {
        let report = run_census(&["Despre Cioran și Noica", "Interviu cu Noica"]);
        let text = render_console(&report);

        let noica = text
            .find(&format!("{:<25} {:>10}", "Noica", 2))
            .expect("noica row");
        let cioran = text
            .find(&format!("{:<25} {:>10}", "Cioran", 1))
            .expect("cioran row");
        assert!(noica < cioran);
        assert!(text.contains(
            "### Noica (2 videos)\n  - Despre Cioran și Noica\n  - Interviu cu Noica\n"
        ));
        assert!(!text.contains("more videos"));
    }

    #[test]
    fn console_truncates_long_lists_and_titles() {
        let long_title = format!("Kant {}", "ă".repeat(80));
        let mut titles: Vec<String> = (1..=7)
            .map(|index| format!("Kant, partea {index}"))
            .collect();
        titles.insert(0, long_title);
        let report = run_census(titles.as_slice());
        let text = render_console(&report);

        assert!(text.contains(&format!("  - Kant {}...\n", "ă".repeat(65))));
        assert!(text.contains("  ... and 3 more videos\n"));
        assert!(!text.contains("Kant, partea 5"));
    }

    #[test]
    fn console_reports_empty_runs() {
        let report = run_census::<&str>(&[]);
        let text = render_console(&report);

        assert!(text.contains("No philosophers found in titles."));
        assert!(text.contains(&format!("{:<25} {:>10}", "UNIQUE PHILOSOPHERS:", 0)));
        assert!(text.contains(&format!("{:<25} {:>10}", "TOTAL VIDEOS:", 0)));
        assert!(!text.contains("POSSIBLE UNLISTED"));
    }

    #[test]
    fn console_lists_unknown_candidates() {
        let report = run_census(&["Cioran la Paris", "Amintiri din Paris"]);
        let text = render_console(&report);
        assert!(text.contains("POSSIBLE UNLISTED PHILOSOPHERS"));
        assert!(text.contains("  Paris: 2 occurrences\n"));
    }

    #[test]
    fn artifact_lists_names_alphabetically_with_totals() {
        let report = run_census(&["Seneca", "Aristotel", "Seneca și Kant"]);
        let text = render_artifact(&report, generated_on());

        assert!(text.contains("Generated on 2025-03-14"));
        assert!(text.contains(
            "- Aristotel (1 videos)\n- Kant (1 videos)\n- Seneca (2 videos)\n"
        ));
        assert!(text.ends_with("TOTAL: 3 unique philosophers\nFrom 3 videos analysed\n"));
    }

    #[test]
    fn artifact_for_empty_run_states_zero_totals() {
        let report = run_census::<&str>(&[]);
        let text = render_artifact(&report, generated_on());
        assert!(text.contains("TOTAL: 0 unique philosophers"));
        assert!(text.contains("From 0 videos analysed"));
    }
}
