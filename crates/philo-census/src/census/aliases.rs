use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

static STANDARD_TABLE: OnceLock<AliasTable> = OnceLock::new();

const KNOWN_NAMES: &[&str] = &[
    // Ancient
    "Socrate",
    "Platon",
    "Aristotel",
    "Epicur",
    "Zenon",
    "Seneca",
    "Marc Aureliu",
    "Marcus Aurelius",
    "Epictet",
    "Heraclit",
    "Parmenide",
    "Democrit",
    "Pitagora",
    "Diogene",
    "Plotin",
    "Cicero",
    // Medieval
    "Augustin",
    "Toma d'Aquino",
    "Toma de Aquino",
    "Aquino",
    "Boethius",
    "Anselm",
    "Abelard",
    "Ockham",
    // Modern
    "Descartes",
    "Spinoza",
    "Leibniz",
    "Locke",
    "Hume",
    "Berkeley",
    "Kant",
    "Hegel",
    "Schopenhauer",
    "Nietzsche",
    "Kierkegaard",
    "Marx",
    "Mill",
    "Bentham",
    "Rousseau",
    "Voltaire",
    "Montesquieu",
    "Pascal",
    "Hobbes",
    "Bacon",
    "Machiavelli",
    // Contemporary
    "Husserl",
    "Heidegger",
    "Sartre",
    "Camus",
    "Beauvoir",
    "Wittgenstein",
    "Russell",
    "Popper",
    "Kuhn",
    "Foucault",
    "Derrida",
    "Deleuze",
    "Levinas",
    "Arendt",
    "Habermas",
    "Rawls",
    "Nozick",
    "Rorty",
    "Quine",
    "Gadamer",
    // Romanian
    "Blaga",
    "Lucian Blaga",
    "Cioran",
    "Emil Cioran",
    "Eliade",
    "Mircea Eliade",
    "Noica",
    "Constantin Noica",
    "Nae Ionescu",
    "Vulcănescu",
    "Mircea Vulcănescu",
    "Petre Țuțea",
    "Țuțea",
    "Steinhardt",
    "Liiceanu",
    "Gabriel Liiceanu",
    "Pleșu",
    "Andrei Pleșu",
    "Patapievici",
    "Paleologu",
    "Alexandru Paleologu",
    // Others
    "Confucius",
    "Lao Tzu",
    "Buddha",
    "Freud",
    "Jung",
    "Dostoievski",
    "Tolstoi",
    "Goethe",
    "Emerson",
    "Thoreau",
];

/// Full names folded onto the short form used for counting.
const NORMALIZATIONS: &[(&str, &str)] = &[
    ("Lucian Blaga", "Blaga"),
    ("Emil Cioran", "Cioran"),
    ("Mircea Eliade", "Eliade"),
    ("Constantin Noica", "Noica"),
    ("Mircea Vulcănescu", "Vulcănescu"),
    ("Petre Țuțea", "Țuțea"),
    ("Gabriel Liiceanu", "Liiceanu"),
    ("Andrei Pleșu", "Pleșu"),
    ("Alexandru Paleologu", "Paleologu"),
    ("Marcus Aurelius", "Marc Aureliu"),
    ("Toma d'Aquino", "Toma de Aquino"),
];

#[derive(Debug, Clone)]
pub(crate) struct AliasEntry {
    pub(crate) surface: String,
    /// Uppercased surface form, precomputed for case-insensitive containment.
    pub(crate) folded: String,
    pub(crate) canonical: String,
}

/// Surface forms in lookup order, each resolved to its canonical name.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
    normalizations: HashMap<String, String>,
}

impl AliasTable {
    /// The curated philosopher table, built on first use.
    pub fn standard() -> &'static AliasTable {
        STANDARD_TABLE.get_or_init(|| Self::new(KNOWN_NAMES, NORMALIZATIONS))
    }

    pub fn new<S: AsRef<str>>(known: &[S], normalizations: &[(S, S)]) -> Self {
        let normalizations: HashMap<String, String> = normalizations
            .iter()
            .map(|(surface, canonical)| {
                (
                    surface.as_ref().to_string(),
                    canonical.as_ref().to_string(),
                )
            })
            .collect();

        let entries = known
            .iter()
            .map(|surface| {
                let surface = surface.as_ref();
                let canonical = normalizations
                    .get(surface)
                    .cloned()
                    .unwrap_or_else(|| surface.to_string());
                AliasEntry {
                    surface: surface.to_string(),
                    folded: surface.to_uppercase(),
                    canonical,
                }
            })
            .collect();

        Self {
            entries,
            normalizations,
        }
    }

    /// Resolves a surface form to its canonical name. Names without a
    /// normalization are already canonical, so this is idempotent.
    pub fn normalize<'a>(&'a self, surface: &'a str) -> &'a str {
        self.normalizations
            .get(surface)
            .map(String::as_str)
            .unwrap_or(surface)
    }

    pub fn canonical_names(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .map(|entry| entry.canonical.as_str())
            .collect()
    }

    pub fn surface_forms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.surface.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }
}
