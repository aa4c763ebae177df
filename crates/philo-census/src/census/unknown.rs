use regex::Regex;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::OnceLock;

pub const MIN_OCCURRENCES: usize = 2;
pub const MAX_CANDIDATES: usize = 20;
const MIN_TOKEN_CHARS: usize = 4;

/// One capital (ASCII or Romanian, comma-below and cedilla forms) followed by
/// lowercase letters, as a whole word.
const TOKEN_PATTERN: &str = r"\b[A-ZĂÂÎȘȚŞŢ][a-zăâîșțşţ]+\b";

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Uppercased connectors, channel boilerplate and filler words.
const STOP_WORDS_LIST: &[&str] = &[
    "DESPRE", "CU", "LA", "DE", "DIN", "PE", "SI", "SAU", "DAR", "CA", "CARE", "CE", "CUM",
    "UNDE", "CAND", "PENTRU", "PRIN", "SPRE", "ROMANIA", "ROMANIAN", "EUROPA", "AMERICA",
    "FRANTA", "GERMANIA", "CASA", "PALEOLOGU", "INTERVIEW", "PARTEA", "PART", "VOL", "EP",
    "VIDEO", "LIVE", "NEW", "THE", "AND", "WITH", "YOUTUBE",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCandidate {
    pub token: String,
    pub count: usize,
}

fn token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern compiles"))
}

fn stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| STOP_WORDS_LIST.iter().copied().collect())
}

pub fn is_stop_word(token: &str) -> bool {
    stop_words().contains(token.to_uppercase().as_str())
}

/// Capitalized words of a title that could be proper names.
pub fn candidate_tokens(title: &str) -> impl Iterator<Item = &str> {
    token_regex()
        .find_iter(title)
        .map(|found| found.as_str())
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .filter(|token| !is_stop_word(token))
}

/// Frequent capitalized tokens that are not among the `known` canonical
/// names. Keeps tokens seen at least [`MIN_OCCURRENCES`] times, most frequent
/// first with ties in order of first appearance, capped at
/// [`MAX_CANDIDATES`].
pub fn detect_unknown_names<S: AsRef<str>>(
    titles: &[S],
    known: &BTreeSet<&str>,
) -> Vec<UnknownCandidate> {
    let mut first_seen: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for title in titles {
        for token in candidate_tokens(title.as_ref()) {
            if known.contains(token) {
                continue;
            }
            match counts.get_mut(token) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.to_string(), 1);
                    first_seen.push(token.to_string());
                }
            }
        }
    }

    let mut candidates: Vec<UnknownCandidate> = first_seen
        .into_iter()
        .filter_map(|token| {
            let count = counts.get(&token).copied().unwrap_or_default();
            (count >= MIN_OCCURRENCES).then_some(UnknownCandidate { token, count })
        })
        .collect();

    candidates.sort_by(|a, b| b.count.cmp(&a.count));
    candidates.truncate(MAX_CANDIDATES);
    candidates
}
