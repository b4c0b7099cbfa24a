//! Per-country grammar of the number body (everything after the prefix).

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::CountryCode;

/// Anchored format rule for one country's number body.
#[derive(Debug)]
pub struct FormatRule {
    country: CountryCode,
    pattern: &'static str,
    regex: Regex,
}

impl FormatRule {
    /// The country this rule applies to.
    pub fn country(&self) -> CountryCode {
        self.country
    }

    /// The unanchored grammar, as listed in the pattern table.
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Whether `body` matches the whole grammar.
    pub fn is_match(&self, body: &str) -> bool {
        self.regex.is_match(body)
    }
}

const GB_PATTERN: &str = "([0-9]{9}|[0-9]{12}|(GD|HA)[0-9]{3})";

/// Grammar source for each prefix. `[0-9]` rather than `\d`, which would
/// also match non-ASCII digits.
fn pattern_source(country: CountryCode) -> &'static str {
    use CountryCode::*;
    match country {
        AT => "U[A-Z0-9]{8}",
        // Always 10 digits; the older 9-digit form without the leading 0 is rejected.
        BE => "[0-9]{10}",
        BG => "[0-9]{9,10}",
        CY => "[0-9]{8}[A-Z]",
        CZ => "[0-9]{8,10}",
        DE => "[0-9]{9}",
        DK => "([0-9]{2} ?){3}[0-9]{2}",
        EE => "[0-9]{9}",
        EL => "[0-9]{9}",
        ES => "([A-Z][0-9]{7}[A-Z]|[0-9]{8}[A-Z]|[A-Z][0-9]{8})",
        FI => "[0-9]{8}",
        FR => "[A-Z0-9]{2}[0-9]{9}",
        GB => GB_PATTERN,
        HR => "[0-9]{11}",
        HU => "[0-9]{8}",
        IE => "([A-Z0-9]{8}|[A-Z0-9]{9})",
        IT => "[0-9]{11}",
        LT => "([0-9]{9}|[0-9]{12})",
        LU => "[0-9]{8}",
        LV => "[0-9]{11}",
        MT => "[0-9]{8}",
        NL => "[0-9]{9}B[0-9]{2}",
        PL => "[0-9]{10}",
        PT => "[0-9]{9}",
        RO => "[0-9]{2,10}",
        SE => "[0-9]{12}",
        SI => "[0-9]{8}",
        SK => "[0-9]{10}",
        XI => GB_PATTERN,
    }
}

static PATTERN_TABLE: LazyLock<HashMap<CountryCode, FormatRule>> = LazyLock::new(|| {
    CountryCode::ALL
        .into_iter()
        .map(|country| {
            let pattern = pattern_source(country);
            let regex = Regex::new(&format!("^(?:{pattern})$"))
                .expect("pattern table entries are valid regular expressions");
            (
                country,
                FormatRule {
                    country,
                    pattern,
                    regex,
                },
            )
        })
        .collect()
});

/// Look up the format rule for a country.
///
/// Every [`CountryCode`] has a rule, so this only returns `None` via
/// [`lookup_code`] for strings outside the closed set.
pub fn lookup(country: CountryCode) -> Option<&'static FormatRule> {
    PATTERN_TABLE.get(&country)
}

/// Look up the format rule for a raw, already-uppercased prefix.
pub fn lookup_code(code: &str) -> Option<&'static FormatRule> {
    code.parse().ok().and_then(lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_country_has_a_rule() {
        for country in CountryCode::ALL {
            let rule = lookup(country).unwrap();
            assert_eq!(rule.country(), country);
        }
    }

    #[test]
    fn unknown_code_has_no_rule() {
        assert!(lookup_code("XX").is_none());
        assert!(lookup_code("GR").is_none());
        assert!(lookup_code("de").is_none());
        assert!(lookup_code("").is_none());
    }

    #[test]
    fn xi_shares_gb_grammar() {
        assert_eq!(
            lookup(CountryCode::XI).unwrap().pattern(),
            lookup(CountryCode::GB).unwrap().pattern()
        );
    }

    #[test]
    fn match_is_anchored() {
        let de = lookup(CountryCode::DE).unwrap();
        assert!(de.is_match("123456789"));
        assert!(!de.is_match("1234567890"));
        assert!(!de.is_match("x123456789"));
        assert!(!de.is_match("123456789 "));
    }

    #[test]
    fn alternation_is_anchored_as_a_whole() {
        let gb = lookup(CountryCode::GB).unwrap();
        assert!(gb.is_match("GD123"));
        assert!(!gb.is_match("GD1234"));
        assert!(!gb.is_match("123456789GD123"));
    }

    #[test]
    fn be_requires_ten_digits() {
        let be = lookup(CountryCode::BE).unwrap();
        assert!(be.is_match("0403032921"));
        assert!(be.is_match("1234567890"));
        assert!(!be.is_match("403032921"));
    }

    #[test]
    fn non_ascii_digits_rejected() {
        let de = lookup(CountryCode::DE).unwrap();
        // Arabic-Indic digits are `\d` in Unicode mode.
        assert!(!de.is_match("١٢٣٤٥٦٧٨٩"));
    }
}
