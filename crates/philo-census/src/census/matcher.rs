use super::aliases::AliasTable;

/// Canonical names whose surface forms occur anywhere in `title`, compared
/// after Unicode uppercasing. Containment ignores word boundaries, so a short
/// alias can hit inside a longer word ("Kant" in "Kantian").
///
/// Each canonical name appears once, in alias table order.
pub fn match_title<'t>(table: &'t AliasTable, title: &str) -> Vec<&'t str> {
    let folded = title.to_uppercase();
    let mut matched: Vec<&'t str> = Vec::new();

    for entry in table.entries() {
        if !folded.contains(entry.folded.as_str()) {
            continue;
        }

        let canonical = entry.canonical.as_str();
        if !matched.contains(&canonical) {
            matched.push(canonical);
        }
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(title: &str) -> Vec<&'static str> {
        match_title(AliasTable::standard(), title)
    }

    #[test]
    fn matches_case_insensitively() {
        assert_eq!(standard("despre NIETZSCHE"), ["Nietzsche"]);
        assert_eq!(standard("pleșu și liiceanu"), ["Liiceanu", "Pleșu"]);
    }

    #[test]
    fn collapses_full_and_short_forms_into_one_match() {
        assert_eq!(standard("Emil Cioran la Paris"), ["Cioran"]);
        assert_eq!(standard("Andrei Pleșu despre Noica"), ["Noica", "Pleșu"]);
    }

    #[test]
    fn records_every_distinct_name() {
        let matched = standard("Kant, Hegel și Schopenhauer");
        assert_eq!(matched, ["Kant", "Hegel", "Schopenhauer"]);
    }

    #[test]
    fn substring_hits_inside_longer_words() {
        assert_eq!(standard("Etica kantiană"), ["Kant"]);
    }

    #[test]
    fn alias_variants_resolve_to_canonical() {
        assert_eq!(standard("Meditațiile lui Marcus Aurelius"), ["Marc Aureliu"]);
        let matched = standard("Toma d'Aquino");
        assert_eq!(matched, ["Toma de Aquino", "Aquino"]);
    }

    #[test]
    fn no_match_yields_empty_set() {
        assert!(standard("Concert de pian").is_empty());
        assert!(standard("").is_empty());
    }

    #[test]
    fn every_contained_alias_reports_its_canonical_name() {
        let table = AliasTable::standard();
        let title = "Interviu: Mircea Eliade, Nae Ionescu și Lao Tzu";
        let matched = match_title(table, title);
        for surface in table.surface_forms() {
            if title.to_uppercase().contains(&surface.to_uppercase()) {
                assert!(matched.contains(&table.normalize(surface)), "{surface}");
            }
        }
    }
}
