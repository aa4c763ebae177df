use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedNameEntry {
    pub name: String,
    pub count: usize,
    pub titles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownCandidateEntry {
    pub token: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CensusSummary {
    pub total_titles: usize,
    pub unique_names: usize,
    pub ranked: Vec<RankedNameEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown_candidates: Vec<UnknownCandidateEntry>,
}
