//! Query variant expansion.
//!
//! The bio search index matches literally, so one domain term is widened
//! into casing and spacing variants before querying. Order is deterministic
//! (insertion order, duplicates dropped) because variant order decides which
//! pages are fetched first under an early-termination budget.

/// Synonym tokens appended when the term mentions machine learning.
const ML_SYNONYMS: [&str; 3] = ["ml", "ML", "Ml"];

/// Expand a domain term into deduplicated search variants.
///
/// Produces the original, lowercase, uppercase, and title-case forms, then
/// the space-stripped form of each. Always non-empty.
pub fn generate_variants(term: &str) -> Vec<String> {
    let mut variants = Vec::new();

    let cased = [
        term.to_string(),
        term.to_lowercase(),
        term.to_uppercase(),
        title_case(term),
    ];

    for variant in &cased {
        push_unique(&mut variants, variant.clone());
    }
    for variant in &cased {
        push_unique(&mut variants, variant.replace(' ', ""));
    }

    if term.to_lowercase().contains("machine") {
        for synonym in ML_SYNONYMS {
            push_unique(&mut variants, synonym.to_string());
        }
    }

    variants
}

/// Capitalize the first letter of each word, lowercasing the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;

    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }

    out
}

fn push_unique(variants: &mut Vec<String>, candidate: String) {
    if !variants.contains(&candidate) {
        variants.push(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_all_casings_and_stripped_forms() {
        let variants = generate_variants("Machine Learning");

        for expected in [
            "Machine Learning",
            "machine learning",
            "MACHINE LEARNING",
            "MachineLearning",
            "machinelearning",
            "MACHINELEARNING",
        ] {
            assert!(variants.iter().any(|v| v == expected), "missing {expected}");
        }
    }

    #[test]
    fn no_duplicates() {
        let variants = generate_variants("Machine Learning");
        let mut sorted = variants.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), variants.len());
    }

    #[test]
    fn machine_terms_get_ml_synonyms() {
        let variants = generate_variants("Machine Learning");
        for synonym in ["ml", "ML", "Ml"] {
            assert!(variants.iter().any(|v| v == synonym), "missing {synonym}");
        }
    }

    #[test]
    fn non_machine_terms_get_no_synonyms() {
        let variants = generate_variants("Cybersecurity");
        assert!(!variants.iter().any(|v| v == "ml" || v == "ML" || v == "Ml"));
    }

    #[test]
    fn original_term_comes_first() {
        let variants = generate_variants("Embedded Systems");
        assert_eq!(variants[0], "Embedded Systems");
    }

    #[test]
    fn single_word_term_collapses_heavily() {
        // "rust": original == lower, stripped forms equal the cased forms.
        let variants = generate_variants("rust");
        assert_eq!(variants, vec!["rust", "RUST", "Rust"]);
    }

    #[test]
    fn title_case_matches_per_word_capitalization() {
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("MACHINE LEARNING"), "Machine Learning");
        assert_eq!(title_case("deep-learning ops"), "Deep-Learning Ops");
    }
}
