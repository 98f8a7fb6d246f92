
use test_utils::airline_reference_list;
use ticker_match::types::ReferenceList;
use ticker_match::{
    match_company_names, match_company_names_with_custom_abbreviations, KnownAbbreviations,
    MatchTier,
};

#[cfg(test)]
mod match_engine_tests {
    use super::*;

    fn to_reference_list(pairs: &[(&str, &str)]) -> ReferenceList {
        pairs
            .iter()
            .map(|(ticker, name)| (ticker.to_string(), name.to_string()))
            .collect()
    }

    #[test]
    fn test_exact_match_end_to_end() {
        let reference_list = to_reference_list(&[
            ("FNMA", "Fannie Mae"),
            ("AIG", "American International Group"),
        ]);
        let query_names = vec!["Fannie Mae Inc".to_string()];

        let records = match_company_names(&reference_list, &query_names);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].original_name, "Fannie Mae Inc");
        assert_eq!(records[0].normalized_key, "fannie mae");
        assert_eq!(records[0].matched_name.as_deref(), Some("Fannie Mae"));
        assert_eq!(records[0].matched_ticker.as_deref(), Some("FNMA"));
        assert_eq!(records[0].tier, Some(MatchTier::Exact));
    }

    #[test]
    fn test_exact_match_wins_over_abbreviation() {
        // "fannie mae" is also a default abbreviation key mapping to FNMA; a
        // reference entry with the same key must win with its own ticker.
        let reference_list = to_reference_list(&[("XXXX", "Fannie Mae")]);
        let query_names = vec!["Fannie Mae".to_string()];

        let records = match_company_names(&reference_list, &query_names);

        assert_eq!(records[0].tier, Some(MatchTier::Exact));
        assert_eq!(records[0].matched_ticker.as_deref(), Some("XXXX"));
        assert_eq!(records[0].matched_name.as_deref(), Some("Fannie Mae"));
    }

    #[test]
    fn test_abbreviation_match_end_to_end() {
        // No reference entry normalizes to "ibm", so only the abbreviation
        // table can resolve this query.
        let query_names = vec!["IBM".to_string()];

        let records = match_company_names(&airline_reference_list(), &query_names);

        assert_eq!(records[0].normalized_key, "ibm");
        assert_eq!(records[0].matched_name.as_deref(), Some("ibm"));
        assert_eq!(records[0].matched_ticker.as_deref(), Some("IBM"));
        assert_eq!(records[0].tier, Some(MatchTier::Abbreviation));
    }

    #[test]
    fn test_custom_abbreviation_table() {
        let known_abbreviations = KnownAbbreviations::from_pairs([("gm", "GM")]);
        let query_names = vec!["G.M.".to_string(), "IBM".to_string()];

        let records = match_company_names_with_custom_abbreviations(
            &airline_reference_list(),
            &query_names,
            &known_abbreviations,
        );

        assert_eq!(records[0].tier, Some(MatchTier::Abbreviation));
        assert_eq!(records[0].matched_ticker.as_deref(), Some("GM"));

        // The default table is not consulted when a custom one is supplied
        assert_eq!(records[1].tier, Some(MatchTier::NoMatch));
    }

    #[test]
    fn test_fuzzy_match_selects_best_weighted_overlap() {
        // "american air lines" matches no key exactly. Against the airline
        // corpus (top count 2, "airlines" weighs 0.0, the rest 0.5):
        //   "american airlines":  +0.5 - 0.5 - 0.5 = -0.5
        //   "delta air lines":    -0.5 + 0.5 + 0.5 = +0.5
        let query_names = vec!["American Air Lines".to_string()];

        let records = match_company_names(&airline_reference_list(), &query_names);

        assert_eq!(records[0].tier, Some(MatchTier::FuzzyGuess));
        assert_eq!(records[0].matched_name.as_deref(), Some("Delta Air Lines"));
        assert_eq!(records[0].matched_ticker.as_deref(), Some("DAL"));
    }

    #[test]
    fn test_fuzzy_requires_strictly_positive_score() {
        // From the two-entry directory, every query token either weighs 0.0
        // (all corpus tokens appear once) or subtracts a full 1.0, so the
        // best score never exceeds zero and the query must stay unmatched.
        let reference_list = to_reference_list(&[
            ("FNMA", "Fannie Mae"),
            ("AIG", "American International Group"),
        ]);
        let query_names = vec!["American Intl Group".to_string()];

        let records = match_company_names(&reference_list, &query_names);

        assert_eq!(records[0].tier, Some(MatchTier::NoMatch));
        assert_eq!(records[0].matched_name, None);
        assert_eq!(records[0].matched_ticker, None);
    }

    #[test]
    fn test_fuzzy_tie_break_is_first_candidate() {
        // "vertex" weighs 1/3 (count 2, top count 3 from "global") and scores
        // identically against both vertex entries; the earlier one must win.
        let pairs = [
            ("C1", "Vertex Mining"),
            ("C2", "Vertex Metals"),
            ("C3", "Global Mining"),
            ("C4", "Global Metals"),
            ("C5", "Global Shipping"),
        ];
        let query_names = vec!["Vertex".to_string()];

        let records = match_company_names(&to_reference_list(&pairs), &query_names);
        assert_eq!(records[0].tier, Some(MatchTier::FuzzyGuess));
        assert_eq!(records[0].matched_ticker.as_deref(), Some("C1"));

        // Swapping the two vertex entries flips the winner, proving the
        // tie-break follows directory order rather than anything else.
        let mut swapped = pairs;
        swapped.swap(0, 1);

        let records = match_company_names(&to_reference_list(&swapped), &query_names);
        assert_eq!(records[0].matched_ticker.as_deref(), Some("C2"));
    }

    #[test]
    fn test_empty_key_query_never_fuzzy_matches() {
        // All tokens are stop words, so the key is empty and scores 0.0
        // against everything.
        let query_names = vec!["The Inc".to_string()];

        let records = match_company_names(&airline_reference_list(), &query_names);

        assert_eq!(records[0].normalized_key, "");
        assert_eq!(records[0].tier, Some(MatchTier::NoMatch));
    }

    #[test]
    fn test_empty_key_query_exact_matches_empty_key_entry() {
        let reference_list = to_reference_list(&[("EMP", "The Corp Inc")]);
        let query_names = vec!["Ltd".to_string()];

        let records = match_company_names(&reference_list, &query_names);

        assert_eq!(records[0].tier, Some(MatchTier::Exact));
        assert_eq!(records[0].matched_ticker.as_deref(), Some("EMP"));
    }

    #[test]
    fn test_duplicate_reference_keys_are_last_write_wins() {
        let reference_list = to_reference_list(&[("OLD", "Acme Inc"), ("NEW", "Acme Corp")]);
        let query_names = vec!["Acme Ltd".to_string()];

        let records = match_company_names(&reference_list, &query_names);

        assert_eq!(records[0].tier, Some(MatchTier::Exact));
        assert_eq!(records[0].matched_name.as_deref(), Some("Acme Corp"));
        assert_eq!(records[0].matched_ticker.as_deref(), Some("NEW"));
    }

    #[test]
    fn test_output_preserves_query_order_and_resolves_every_record() {
        let query_names = vec![
            "Apple Inc".to_string(),
            "IBM".to_string(),
            "American Air Lines".to_string(),
            "Zzz Qqq".to_string(),
        ];

        let records = match_company_names(&airline_reference_list(), &query_names);

        let tiers: Vec<_> = records.iter().map(|record| record.tier).collect();
        assert_eq!(
            tiers,
            vec![
                Some(MatchTier::Exact),
                Some(MatchTier::Abbreviation),
                Some(MatchTier::FuzzyGuess),
                Some(MatchTier::NoMatch),
            ]
        );

        let original_names: Vec<_> = records
            .iter()
            .map(|record| record.original_name.as_str())
            .collect();
        assert_eq!(
            original_names,
            vec!["Apple Inc", "IBM", "American Air Lines", "Zzz Qqq"]
        );
    }
}
