use chrono::NaiveDate;
use philo_census::census::{
    match_title, render_artifact, render_console, run_census, AliasTable, UnknownCandidate,
};
use philo_census::sources::parse_title_lines;

fn fixture_titles() -> Vec<String> {
    parse_title_lines(include_str!("casa_paleologu_titles.txt"))
}

#[test]
fn scenario_two_titles_count_cioran_once_and_noica_twice() {
    let report = run_census(&["Despre Cioran și Noica", "Interviu cu Noica"]);
    let tally = report.tally();

    assert_eq!(tally.count("Cioran"), 1);
    assert_eq!(tally.count("Noica"), 2);
    assert_eq!(
        tally.titles("Noica"),
        ["Despre Cioran și Noica", "Interviu cu Noica"]
    );
}

#[test]
fn scenario_full_name_normalizes_to_short_form() {
    let report = run_census(&["Emil Cioran la Paris"]);
    assert_eq!(report.tally().ranked(), vec![("Cioran", 1)]);
}

#[test]
fn scenario_empty_input_reports_zero_totals() {
    let report = run_census::<String>(&[]);

    assert!(report.tally().is_empty());
    assert!(report.unknown_candidates().is_empty());
    assert_eq!(report.total_titles(), 0);

    let generated_on = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
    let artifact = render_artifact(&report, generated_on);
    assert!(artifact.contains("TOTAL: 0 unique philosophers"));
    assert!(artifact.contains("From 0 videos analysed"));
    assert!(render_console(&report).contains("No philosophers found in titles."));
}

#[test]
fn scenario_repeated_unlisted_word_becomes_candidate() {
    let report = run_census(&["Cioran la Paris", "Amintiri din Paris"]);
    assert_eq!(
        report.unknown_candidates(),
        [UnknownCandidate {
            token: "Paris".to_string(),
            count: 2,
        }]
    );
}

#[test]
fn fixture_parses_without_blank_lines() {
    let titles = fixture_titles();
    assert_eq!(titles.len(), 20);
    assert!(titles.contains(&"Casa Paleologu LIVE".to_string()));
}

#[test]
fn fixture_ranking_orders_by_count_then_name() {
    let titles = fixture_titles();
    let report = run_census(&titles);
    let ranked = report.tally().ranked();

    assert_eq!(report.total_titles(), 20);
    assert_eq!(report.tally().unique_names(), 15);
    assert_eq!(
        &ranked[..5],
        [
            ("Cioran", 3),
            ("Eliade", 3),
            ("Noica", 3),
            ("Paleologu", 3),
            ("Aristotel", 1),
        ]
    );
    assert_eq!(ranked.last(), Some(&("Țuțea", 1)));
    assert_eq!(
        report.tally().titles("Paleologu"),
        [
            "Alexandru Paleologu despre Montaigne",
            "Casa Paleologu LIVE",
            "Alexandru Paleologu, Bunul simț ca paradox",
        ]
    );
}

#[test]
fn fixture_counts_match_title_lists_and_bound_matched_titles() {
    let titles = fixture_titles();
    let report = run_census(&titles);
    let tally = report.tally();

    for (name, count) in tally.ranked() {
        assert_eq!(count, tally.titles(name).len(), "{name}");
    }

    let matched_titles = titles
        .iter()
        .filter(|title| !match_title(AliasTable::standard(), title).is_empty())
        .count();
    assert!(tally.total_matches() >= matched_titles);
    assert!(tally.total_matches() > matched_titles);
}

#[test]
fn fixture_unknown_candidates_follow_first_appearance_on_ties() {
    let titles = fixture_titles();
    let report = run_census(&titles);
    let tokens: Vec<(&str, usize)> = report
        .unknown_candidates()
        .iter()
        .map(|candidate| (candidate.token.as_str(), candidate.count))
        .collect();

    assert_eq!(
        tokens,
        vec![
            ("Păltiniș", 2),
            ("Paris", 2),
            ("Sibiu", 2),
            ("Alexandru", 2),
            ("Montaigne", 2),
            ("Mircea", 2),
        ]
    );

    let found = report.tally().names();
    for candidate in report.unknown_candidates() {
        assert!(!found.contains(candidate.token.as_str()));
    }
}

#[test]
fn fixture_runs_are_deterministic() {
    let titles = fixture_titles();
    let first = run_census(&titles);
    let second = run_census(&titles);

    assert_eq!(first.tally(), second.tally());
    assert_eq!(first.unknown_candidates(), second.unknown_candidates());
    assert_eq!(first.summary(), second.summary());
}

#[test]
fn fixture_artifact_lists_every_name_alphabetically() {
    let titles = fixture_titles();
    let report = run_census(&titles);
    let generated_on = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
    let artifact = render_artifact(&report, generated_on);

    let listed: Vec<&str> = artifact
        .lines()
        .filter_map(|line| line.strip_prefix("- "))
        .collect();
    assert_eq!(listed.len(), 15);
    assert_eq!(listed[0], "Aristotel (1 videos)");
    assert_eq!(listed[14], "Țuțea (1 videos)");
    assert!(artifact.contains("TOTAL: 15 unique philosophers\nFrom 20 videos analysed\n"));
}
