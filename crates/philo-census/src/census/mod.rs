//! Philosopher census over video titles: alias matching, per-name tallies
//! and detection of frequent capitalized words that may be unlisted names.

mod aliases;
mod matcher;
pub mod report;
mod tally;
mod unknown;

pub use aliases::AliasTable;
pub use matcher::match_title;
pub use report::{render_artifact, render_console, CensusReport};
pub use tally::NameTally;
pub use unknown::{
    candidate_tokens, detect_unknown_names, is_stop_word, UnknownCandidate, MAX_CANDIDATES,
    MIN_OCCURRENCES,
};

use tracing::debug;

/// Runs the census with the standard alias table.
pub fn run_census<S: AsRef<str>>(titles: &[S]) -> CensusReport {
    run_census_with(AliasTable::standard(), titles)
}

pub fn run_census_with<S: AsRef<str>>(table: &AliasTable, titles: &[S]) -> CensusReport {
    let tally = NameTally::collect(table, titles);
    let unknown = detect_unknown_names(titles, &tally.names());

    debug!(
        titles = titles.len(),
        unique_names = tally.unique_names(),
        matches = tally.total_matches(),
        unknown_candidates = unknown.len(),
        "census complete"
    );

    CensusReport::new(titles.len(), tally, unknown)
}
