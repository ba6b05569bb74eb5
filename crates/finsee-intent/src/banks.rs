//! Fuzzy bank-name matching against a closed vocabulary.
//!
//! Speech engines routinely mangle proper nouns ("chays", "welsh fargo"), so
//! the bank captured from an utterance is resolved with an approximate
//! string-similarity search. Below-threshold captures resolve to no match,
//! which forces the caller to reprompt.

use strsim::jaro_winkler;

/// The banks a transfer can target.
pub const BANKS: &[&str] = &["Bank of America", "Chase", "Wells Fargo"];

/// Resolve an utterance fragment to a known bank name.
///
/// A fragment containing a bank name verbatim (case-insensitive) always
/// matches. Otherwise the fragment is scored against each bank with
/// Jaro-Winkler similarity and the best candidate wins, provided it clears
/// `threshold`. Returns the canonical bank name.
pub fn match_bank(fragment: &str, threshold: f64) -> Option<&'static str> {
    let fragment = fragment.trim().to_lowercase();
    if fragment.is_empty() {
        return None;
    }

    // Verbatim containment, e.g. "chase bank" or "the chase".
    for bank in BANKS {
        if fragment.contains(&bank.to_lowercase()) {
            return Some(bank);
        }
    }

    let mut best: Option<(&'static str, f64)> = None;
    for bank in BANKS {
        let score = jaro_winkler(&fragment, &bank.to_lowercase());
        tracing::trace!(bank, score, fragment = %fragment, "Bank similarity");
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((bank, score));
        }
    }

    best.filter(|(_, score)| *score >= threshold).map(|(b, _)| b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 0.84;

    #[test]
    fn test_exact_match() {
        assert_eq!(match_bank("chase", THRESHOLD), Some("Chase"));
        assert_eq!(match_bank("wells fargo", THRESHOLD), Some("Wells Fargo"));
        assert_eq!(
            match_bank("bank of america", THRESHOLD),
            Some("Bank of America")
        );
    }

    #[test]
    fn test_containment_match() {
        assert_eq!(match_bank("chase bank", THRESHOLD), Some("Chase"));
        assert_eq!(match_bank("the wells fargo", THRESHOLD), Some("Wells Fargo"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(match_bank("CHASE", THRESHOLD), Some("Chase"));
        assert_eq!(match_bank("Wells FARGO", THRESHOLD), Some("Wells Fargo"));
    }

    #[test]
    fn test_misrecognized_variants() {
        // Common speech-engine mishearings still resolve.
        assert_eq!(match_bank("chays", THRESHOLD), Some("Chase"));
        assert_eq!(match_bank("welsh fargo", THRESHOLD), Some("Wells Fargo"));
    }

    #[test]
    fn test_below_threshold_is_no_match() {
        assert_eq!(match_bank("hdfc", THRESHOLD), None);
        assert_eq!(match_bank("state bank of india", THRESHOLD), None);
    }

    #[test]
    fn test_empty_fragment() {
        assert_eq!(match_bank("", THRESHOLD), None);
        assert_eq!(match_bank("   ", THRESHOLD), None);
    }

    #[test]
    fn test_strict_threshold_rejects_fuzz() {
        // With a maximal threshold only verbatim text survives.
        assert_eq!(match_bank("chays", 1.0), None);
        assert_eq!(match_bank("chase", 1.0), Some("Chase"));
    }
}
