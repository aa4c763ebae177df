use super::super::tally::NameTally;
use super::super::unknown::UnknownCandidate;
use super::views::{CensusSummary, RankedNameEntry, UnknownCandidateEntry};

/// Everything one census run produced.
#[derive(Debug, Default, Clone)]
pub struct CensusReport {
    total_titles: usize,
    tally: NameTally,
    unknown_candidates: Vec<UnknownCandidate>,
}

impl CensusReport {
    pub(crate) fn new(
        total_titles: usize,
        tally: NameTally,
        unknown_candidates: Vec<UnknownCandidate>,
    ) -> Self {
        Self {
            total_titles,
            tally,
            unknown_candidates,
        }
    }

    pub fn total_titles(&self) -> usize {
        self.total_titles
    }

    pub fn tally(&self) -> &NameTally {
        &self.tally
    }

    pub fn unknown_candidates(&self) -> &[UnknownCandidate] {
        &self.unknown_candidates
    }

    pub fn summary(&self) -> CensusSummary {
        let ranked = self
            .tally
            .ranked()
            .into_iter()
            .map(|(name, count)| RankedNameEntry {
                name: name.to_string(),
                count,
                titles: self.tally.titles(name).to_vec(),
            })
            .collect();

        let unknown_candidates = self
            .unknown_candidates
            .iter()
            .map(UnknownCandidate::to_view)
            .collect();

        CensusSummary {
            total_titles: self.total_titles,
            unique_names: self.tally.unique_names(),
            ranked,
            unknown_candidates,
        }
    }
}

impl UnknownCandidate {
    pub fn to_view(&self) -> UnknownCandidateEntry {
        UnknownCandidateEntry {
            token: self.token.clone(),
            count: self.count,
        }
    }
}
