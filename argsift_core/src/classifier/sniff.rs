use std::str::FromStr;

use crate::constant::DASH;

/// Strip every leading dash from `token`.
/// A token made only of dashes is left as is, so that `-` and `--` keep a non-empty name.
pub(crate) fn trim_leading_dashes(token: &str) -> &str {
    let trimmed = token.trim_start_matches(DASH);

    if trimmed.is_empty() {
        token
    } else {
        trimmed
    }
}

/// Check whether the entire token reads as a (possibly signed) floating point number.
// Rust also accepts 'inf' & 'nan' spellings, which on the command line are far more likely options.
// Out of range text (ex: '-1e999') reads as infinite, so is rejected too.
pub(crate) fn is_number(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_digit())
        && f64::from_str(token).map_or(false, f64::is_finite)
}

/// Check whether the token is an option (dash led, but not a negative number).
pub(crate) fn is_option(token: &str) -> bool {
    !is_number(token) && token.starts_with(DASH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("a", "a")]
    #[case("-a", "a")]
    #[case("--a", "a")]
    #[case("---abc", "abc")]
    #[case("--a-b", "a-b")]
    #[case("--a=-b", "a=-b")]
    #[case("-", "-")]
    #[case("--", "--")]
    #[case("---", "---")]
    fn trim(#[case] token: &str, #[case] expected: &str) {
        assert_eq!(trim_leading_dashes(token), expected);
    }

    #[rstest]
    #[case("0", true)]
    #[case("3", true)]
    #[case("-3", true)]
    #[case("-3.5", true)]
    #[case("-.5", true)]
    #[case("-5.", true)]
    #[case("-1e5", true)]
    #[case("-1E-5", true)]
    #[case("+7", true)]
    #[case("", false)]
    #[case("-", false)]
    #[case("--", false)]
    #[case("-1a", false)]
    #[case("-a1", false)]
    #[case("--5", false)]
    #[case("-1e", false)]
    #[case("-0x10", false)]
    #[case("-inf", false)]
    #[case("-infinity", false)]
    #[case("-nan", false)]
    #[case("-1e999", false)]
    #[case("1e999", false)]
    #[case("-1e308", true)]
    #[case("abc", false)]
    fn number(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(is_number(token), expected);
    }

    #[rstest]
    #[case("", false)]
    #[case("abc", false)]
    #[case("a-b", false)]
    #[case("-3.14", false)]
    #[case("-0", false)]
    #[case("-", true)]
    #[case("--", true)]
    #[case("-a", true)]
    #[case("--abc", true)]
    #[case("-1a", true)]
    #[case("-inf", true)]
    #[case("-1e999", true)]
    #[case("--5", true)]
    fn option(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(is_option(token), expected);
    }
}
