//! Integration tests for the normalization pipeline

#[cfg(test)]
mod tests {
    use crate::{DatesNormalizer, NormalizerConfig};
    use tempora_domain::{parse_canonical, MatchId, SanitizeOperation};

    fn date_property(input: &str) -> Option<String> {
        DatesNormalizer::default_config()
            .normalize_date_property(input)
            .edtf()
    }

    fn generic_property(input: &str) -> Option<String> {
        DatesNormalizer::default_config()
            .normalize_generic_property(input)
            .edtf()
    }

    fn assert_table(cases: &[(&str, &str)]) {
        for (input, expected) in cases {
            assert_eq!(date_property(input).as_deref(), Some(*expected), "{}", input);
        }
    }

    #[test]
    fn test_dcmi_periods_keep_their_label() {
        let normalizer = DatesNormalizer::default_config();

        let result =
            normalizer.normalize_date_property("name=The Great Depression; start=1929; end=1939;");
        assert_eq!(result.edtf().as_deref(), Some("1929/1939"));
        assert_eq!(result.label(), Some("The Great Depression"));
        assert_eq!(result.match_id(), MatchId::DcmiPeriod);

        let result = normalizer.normalize_date_property("Byzantine Period; start=0395; end=0641");
        assert_eq!(result.edtf().as_deref(), Some("0395/0641"));
        assert_eq!(result.label(), Some("Byzantine Period"));
    }

    #[test]
    fn test_brief_ranges_and_centuries() {
        assert_table(&[
            ("2014/15", "2014/2015"),
            ("1989/90", "1989/1990"),
            ("18..", "18XX"),
            ("19th century", "18XX"),
            ("XIV", "13XX"),
            ("s. XVI", "15XX"),
            ("S. XVI-XX", "15XX/19XX"),
            ("XVI?-XIX", "15XX?/18XX?"),
            ("180x", "180X"),
        ]);
        assert_eq!(
            DatesNormalizer::default_config()
                .normalize_date_property("S. XVI-XX")
                .match_id(),
            MatchId::CenturyRangeRoman
        );
    }

    #[test]
    fn test_open_ranges() {
        assert_table(&[
            ("1907/?", "1907/.."),
            ("?/1907", "../1907"),
            ("?/1807", "../1807"),
            ("1907/", "1907/.."),
            ("/1907", "../1907"),
            ("1907/..", "1907/.."),
            ("1907 - ?", "1907/.."),
        ]);
    }

    #[test]
    fn test_numeric_ranges() {
        assert_table(&[
            ("1989-11-01/1989-12-31", "1989-11-01/1989-12-31"),
            ("1989.11/1990.01", "1989-11/1990-01"),
            ("1942-1943", "1942/1943"),
            ("1650? - 1700?", "1650?/1700?"),
            ("1851-01-01  - 1851-12-31", "1851-01-01/1851-12-31"),
            ("1916-09-26 1916-09-28", "1916-09-26/1916-09-28"),
            ("01.02.1942-03.04.1943", "1942-02-01/1943-04-03"),
            ("18XX/19XX", "18XX/19XX"),
        ]);
    }

    #[test]
    fn test_numeric_dates() {
        assert_table(&[
            ("21.1.1921", "1921-01-21"),
            ("1/11/1989", "1989-11-01"),
            ("1937-10-??", "1937-10"),
            ("20/09/18XX", "18XX-09-20"),
            ("1905 09 01", "1905-09-01"),
            ("0 2 1980", "1980-02"),
            ("-2100/-1550", "-2100/-1550"),
            ("-0043-12-07", "-0043-12-07"),
            ("-0549-01-01T00:00:00Z", "-0549-01-01"),
            ("-1234", "-1234"),
        ]);
    }

    #[test]
    fn test_named_and_formatted_dates() {
        assert_table(&[
            ("18 September 1914", "1914-09-18"),
            ("November 6, 1902", "1902-11-06"),
            ("3. März 1871", "1871-03-03"),
            ("Sat Jan 01 01:00:00 CET 1701", "1701-01-01"),
            ("2013-03-21 18:45:36 UTC", "2013-03-21"),
        ]);
    }

    #[test]
    fn test_bc_ad_and_long_years() {
        assert_table(&[
            ("44 BC", "-0043"),
            ("1990 BC-1 BC", "-1989/0000"),
            ("337 BC - 283 BC", "-0336/-0282"),
            ("-12345", "Y-12345"),
            ("-123456/-12345", "Y-123456/Y-12345"),
        ]);
    }

    #[test]
    fn test_sanitized_values() {
        let normalizer = DatesNormalizer::default_config();
        for (input, expected, operation) in [
            ("[1712?]", "1712?", SanitizeOperation::CaptureValueInSquareBrackets),
            ("1651?]", "1651?", SanitizeOperation::EndingClosingSquareBracket),
            ("(1942)", "1942", SanitizeOperation::CaptureValueInParentheses),
            ("(17--?)", "17XX?", SanitizeOperation::CaptureValueInParentheses),
            ("23.02.[18--]", "18XX-02-23", SanitizeOperation::CaptureValueInSquareBrackets),
            ("1939 [1942?]", "1939/1942?", SanitizeOperation::CaptureValueInSquareBrackets),
            ("1989.", "1989", SanitizeOperation::EndingDot),
            ("Date: 1989-11-01", "1989-11-01", SanitizeOperation::StartingTextUntilFirstColon),
            (
                "1997-07-18T00:00:00 [text in brackets]",
                "1997-07-18",
                SanitizeOperation::EndingSquareBrackets,
            ),
        ] {
            let result = normalizer.normalize_date_property(input);
            assert_eq!(result.edtf().as_deref(), Some(expected), "{}", input);
            assert_eq!(result.sanitize_operation(), Some(operation), "{}", input);
        }
    }

    #[test]
    fn test_edtf_found_after_cleanup_is_relabelled() {
        let normalizer = DatesNormalizer::default_config();
        for (input, expected) in [
            ("[1712?]", "1712?"),
            ("(1942)", "1942"),
            ("1989.", "1989"),
            ("circa 1712", "1712~"),
            ("((note)) 1989", "1989"),
            ("(textA)(textB) 1989-11", "1989-11"),
        ] {
            let result = normalizer.normalize_date_property(input);
            assert_eq!(result.edtf().as_deref(), Some(expected), "{}", input);
            assert_eq!(result.match_id(), MatchId::EdtfCleaned, "{}", input);
        }

        let raw = normalizer.normalize_date_property("1989-11-01");
        assert_eq!(raw.match_id(), MatchId::Edtf);

        // Only the EDTF grammar is relabelled
        let cleaned = normalizer.normalize_date_property("[ca. 1920-1930]");
        assert_eq!(cleaned.match_id(), MatchId::NumericRangeAllVariants);

        let generic = normalizer.normalize_generic_property("[1989-11-01]");
        assert_eq!(generic.match_id(), MatchId::EdtfCleaned);
    }

    #[test]
    fn test_time_without_date_is_no_match() {
        let normalizer = DatesNormalizer::default_config();
        for input in ["T12:00:00", "12:00:00", "T10:30"] {
            let result = normalizer.normalize_date_property(input);
            assert!(!result.is_match(), "{} matched {:?}", input, result.edtf());
            assert_eq!(result.match_id(), MatchId::NoMatch, "{}", input);
        }
    }

    #[test]
    fn test_circa_values_are_approximate() {
        assert_table(&[
            ("circa 1712", "1712~"),
            ("ca. 1920", "1920~"),
            ("c.6 Nov 1902", "1902-11-06~"),
            ("[ca. 1920-1930]", "1920~/1930~"),
            ("[ca. 16??]", "16XX~"),
            ("1651 [ca. 1656]", "1651~/1656~"),
        ]);
    }

    #[test]
    fn test_presanitized_characters() {
        assert_table(&[
            ("1920\u{2013}1930", "1920/1930"),
            ("\u{a0}1989\u{a0}", "1989"),
        ]);
    }

    #[test]
    fn test_interval_ends_are_swapped() {
        assert_table(&[
            ("1910/05/31 | 1910/05/01", "1910-05-01/1910-05-31"),
            ("1943-1942", "1942/1943"),
        ]);
    }

    #[test]
    fn test_no_match() {
        let normalizer = DatesNormalizer::default_config();
        for input in [
            "",
            "   ",
            "textA",
            "1989 textB",
            "198?",
            "?/?",
            "1907--",
            "19960216-19960619",
            "18720601/18720630",
            "1989-11-01/1989/12/31",
            "192?-1958",
            "circa2000",
        ] {
            let result = normalizer.normalize_date_property(input);
            assert!(!result.is_match(), "{} matched {:?}", input, result.edtf());
            assert_eq!(result.match_id(), MatchId::NoMatch, "{}", input);
        }
    }

    #[test]
    fn test_overlong_input() {
        let input = format!("{} 1989", "x".repeat(300));
        assert!(!DatesNormalizer::default_config()
            .normalize_date_property(&input)
            .is_match());
    }

    #[test]
    fn test_strict_calendar_repairs() {
        let normalizer = DatesNormalizer::new(NormalizerConfig::strict()).unwrap();

        let result = normalizer.normalize_date_property("1941-22-06");
        assert_eq!(result.edtf().as_deref(), Some("1941-06-22"));
        assert_eq!(result.match_id(), MatchId::NumericAllVariants);

        let result = normalizer.normalize_date_property("1947-19-50/1950-19-53");
        assert!(!result.is_match());
        assert_eq!(result.match_id(), MatchId::Invalid);
        assert_eq!(result.edtf(), None);
    }

    #[test]
    fn test_default_config_keeps_calendar_leniency() {
        assert_eq!(date_property("1941-22-06").as_deref(), Some("1941-22-06"));
        assert_eq!(date_property("32.13.1989").as_deref(), Some("1989-13-32"));
    }

    #[test]
    fn test_raw_config_skips_sanitizing() {
        let normalizer = DatesNormalizer::new(NormalizerConfig::raw()).unwrap();
        assert!(!normalizer.normalize_date_property("circa 1712").is_match());
        assert!(normalizer.normalize_date_property("1712").is_match());
    }

    #[test]
    fn test_generic_property_keeps_complete_dates() {
        for (input, expected) in [
            ("1989-11-01", "1989-11-01"),
            ("[1989-11-01]", "1989-11-01"),
            ("circa 1989-11-01", "1989-11-01~"),
            ("1989-11-01 - 1989-12-31 (text)", "1989-11-01/1989-12-31"),
            ("18 September 1914", "1914-09-18"),
            ("1907-03-01/..", "1907-03-01/.."),
        ] {
            assert_eq!(generic_property(input).as_deref(), Some(expected), "{}", input);
        }
    }

    #[test]
    fn test_generic_property_rejects_partial_dates() {
        for input in ["1989", "1989-11", "XIV", "2014/15", "180x", "1989/1990", "textA"] {
            assert_eq!(generic_property(input), None, "{}", input);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn numeric_dates_normalize_to_canonical_form(
                year in 1000i64..=2999,
                month in 1u8..=12,
                day in 1u8..=28,
                delimiter in prop::sample::select(vec!['-', '.', '/']),
                year_first in any::<bool>(),
            ) {
                let input = if year_first {
                    format!("{year}{delimiter}{month:02}{delimiter}{day:02}")
                } else {
                    format!("{day:02}{delimiter}{month:02}{delimiter}{year}")
                };
                let result = DatesNormalizer::default_config().normalize_date_property(&input);
                let edtf = result.edtf();
                let expected = format!("{year:04}-{month:02}-{day:02}");
                prop_assert_eq!(edtf.as_deref(), Some(expected.as_str()));
                let date = result.date().cloned();
                prop_assert_eq!(edtf.as_deref().and_then(parse_canonical), date);
            }
        }
    }
}
