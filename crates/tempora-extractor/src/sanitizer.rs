//! Input cleanup between pipeline passes
//!
//! Catalogue values wrap dates in brackets, notes and circa markers. A
//! sanitize pass tries its operations in order; the first whose pattern
//! matches decides the outcome, and an empty result fails the pass.

use std::sync::LazyLock;

use regex::Regex;
use tempora_domain::SanitizeOperation;

/// `circa `, `ca `, `c `, `ca.`, `ca. `, `c.`, `c. ` (case-insensitive)
const CIRCA: &str = r"(?:circa |ca |c |ca\. ?|c\. ?)";

/// How an operation's pattern produces the cleaned value
enum Rewrite {
    /// Fully anchored; the `value` group is kept
    Anchored(Regex),
    /// Every occurrence is replaced by its `value` group
    ReplaceAll(Regex),
}

impl Rewrite {
    fn apply(&self, input: &str) -> Option<String> {
        match self {
            Rewrite::Anchored(regex) => {
                let caps = regex.captures(input)?;
                Some(caps.name("value").map_or("", |m| m.as_str()).to_string())
            }
            Rewrite::ReplaceAll(regex) => regex
                .is_match(input)
                .then(|| regex.replace_all(input, "${value}").into_owned()),
        }
    }
}

fn anchored(pattern: &str) -> Rewrite {
    Rewrite::Anchored(Regex::new(pattern).expect("Invalid sanitize regex"))
}

fn replace_all(pattern: &str) -> Rewrite {
    Rewrite::ReplaceAll(Regex::new(pattern).expect("Invalid sanitize regex"))
}

static STARTING_TEXT_UNTIL_FIRST_COLON: LazyLock<Rewrite> =
    LazyLock::new(|| anchored(r"(?s)^[^:]*:(?P<value>.*)$"));
static STARTING_PARENTHESES: LazyLock<Rewrite> =
    LazyLock::new(|| anchored(r"(?s)^\(.*\)(?P<value>[^)]*)$"));
static ENDING_PARENTHESES: LazyLock<Rewrite> =
    LazyLock::new(|| anchored(r"(?s)^(?P<value>[^(]*)\(.*\)$"));
static CAPTURE_VALUE_IN_SQUARE_BRACKETS_WITH_CIRCA: LazyLock<Rewrite> =
    LazyLock::new(|| replace_all(&format!(r"(?is)\[{CIRCA}(?P<value>.*?)\]")));
static CAPTURE_VALUE_IN_SQUARE_BRACKETS: LazyLock<Rewrite> =
    LazyLock::new(|| replace_all(r"(?s)\[(?P<value>.*?)\]"));
static STARTING_CIRCA: LazyLock<Rewrite> =
    LazyLock::new(|| anchored(&format!(r"(?is)^{CIRCA}(?P<value>.*)$")));
static ENDING_CLOSING_SQUARE_BRACKET: LazyLock<Rewrite> =
    LazyLock::new(|| anchored(r"(?s)^(?P<value>.*)\]$"));
static ENDING_DOT: LazyLock<Rewrite> = LazyLock::new(|| anchored(r"(?s)^(?P<value>.*)\.$"));
static ENDING_SQUARE_BRACKETS: LazyLock<Rewrite> =
    LazyLock::new(|| anchored(r"(?s)^(?P<value>[^\[]*)\[.*\]$"));
static CAPTURE_VALUE_IN_PARENTHESES_WITH_CIRCA: LazyLock<Rewrite> =
    LazyLock::new(|| anchored(&format!(r"(?is)^\({CIRCA}(?P<value>.*)\)$")));
static CAPTURE_VALUE_IN_PARENTHESES: LazyLock<Rewrite> =
    LazyLock::new(|| anchored(r"(?s)^\((?P<value>.*)\)$"));

fn rewrite(operation: SanitizeOperation) -> &'static Rewrite {
    match operation {
        SanitizeOperation::StartingTextUntilFirstColon => &STARTING_TEXT_UNTIL_FIRST_COLON,
        SanitizeOperation::StartingParentheses => &STARTING_PARENTHESES,
        SanitizeOperation::EndingParentheses => &ENDING_PARENTHESES,
        SanitizeOperation::CaptureValueInSquareBracketsWithCirca => {
            &CAPTURE_VALUE_IN_SQUARE_BRACKETS_WITH_CIRCA
        }
        SanitizeOperation::CaptureValueInSquareBrackets => &CAPTURE_VALUE_IN_SQUARE_BRACKETS,
        SanitizeOperation::StartingCirca => &STARTING_CIRCA,
        SanitizeOperation::EndingClosingSquareBracket => &ENDING_CLOSING_SQUARE_BRACKET,
        SanitizeOperation::EndingDot => &ENDING_DOT,
        SanitizeOperation::EndingSquareBrackets => &ENDING_SQUARE_BRACKETS,
        SanitizeOperation::CaptureValueInParenthesesWithCirca => {
            &CAPTURE_VALUE_IN_PARENTHESES_WITH_CIRCA
        }
        SanitizeOperation::CaptureValueInParentheses => &CAPTURE_VALUE_IN_PARENTHESES,
    }
}

/// Which list of operations a pass applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizePass {
    /// First cleanup of a date property
    First,
    /// Second cleanup of a date property, applied to the raw value
    Second,
    /// Cleanup of a generic property
    Generic,
}

impl SanitizePass {
    /// Operations of this pass, in the order they are tried
    pub fn operations(&self) -> &'static [SanitizeOperation] {
        match self {
            SanitizePass::First => &[
                SanitizeOperation::StartingTextUntilFirstColon,
                SanitizeOperation::StartingParentheses,
                SanitizeOperation::EndingParentheses,
                SanitizeOperation::CaptureValueInSquareBracketsWithCirca,
                SanitizeOperation::CaptureValueInSquareBrackets,
                SanitizeOperation::StartingCirca,
                SanitizeOperation::EndingClosingSquareBracket,
                SanitizeOperation::EndingDot,
            ],
            SanitizePass::Second => &[
                SanitizeOperation::EndingSquareBrackets,
                SanitizeOperation::CaptureValueInParenthesesWithCirca,
                SanitizeOperation::CaptureValueInParentheses,
            ],
            SanitizePass::Generic => &[
                SanitizeOperation::CaptureValueInSquareBracketsWithCirca,
                SanitizeOperation::CaptureValueInSquareBrackets,
                SanitizeOperation::StartingCirca,
                SanitizeOperation::EndingParentheses,
            ],
        }
    }
}

/// A cleaned value and the operation that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedValue {
    /// Operation that matched
    pub operation: SanitizeOperation,
    /// Trimmed, non-empty result
    pub value: String,
}

/// Apply a single operation; `None` when its pattern does not match
pub fn apply_operation(operation: SanitizeOperation, input: &str) -> Option<String> {
    rewrite(operation)
        .apply(input.trim())
        .map(|value| value.trim().to_string())
}

/// Run a sanitize pass over `input`
///
/// Returns `None` when no operation matches or the first matching one leaves
/// nothing behind.
pub fn sanitize(input: &str, pass: SanitizePass) -> Option<SanitizedValue> {
    let (operation, value) = pass
        .operations()
        .iter()
        .find_map(|&operation| apply_operation(operation, input).map(|value| (operation, value)))?;
    if value.is_empty() {
        return None;
    }
    Some(SanitizedValue { operation, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use SanitizeOperation::*;

    fn apply(operation: SanitizeOperation, input: &str) -> Option<String> {
        apply_operation(operation, input).filter(|v| !v.is_empty())
    }

    #[test]
    fn test_starting_text_until_first_colon() {
        assert_eq!(apply(StartingTextUntilFirstColon, "textA:textB").as_deref(), Some("textB"));
        assert_eq!(apply(StartingTextUntilFirstColon, "   :textB").as_deref(), Some("textB"));
        assert_eq!(apply(StartingTextUntilFirstColon, "a:b:c").as_deref(), Some("b:c"));
        assert_eq!(apply(StartingTextUntilFirstColon, "textA:"), None);
        assert_eq!(apply(StartingTextUntilFirstColon, "textA: "), None);
        assert_eq!(apply(StartingTextUntilFirstColon, "textA"), None);
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(apply(StartingParentheses, "(textA)textB").as_deref(), Some("textB"));
        assert_eq!(apply(StartingParentheses, "(textA)(textB)textC").as_deref(), Some("textC"));
        assert_eq!(apply(StartingParentheses, "( textA ) textB").as_deref(), Some("textB"));
        assert_eq!(apply(StartingParentheses, "(textA)(textB)"), None);
        assert_eq!(apply(StartingParentheses, "((1942-1943))text").as_deref(), Some("text"));
        assert_eq!(apply(StartingParentheses, "(((1942-1943))text").as_deref(), Some("text"));
        assert_eq!(apply(StartingParentheses, "((1942-1943)))text").as_deref(), Some("text"));
        assert_eq!(apply(StartingParentheses, "((1942-1943)))textA)textB").as_deref(), Some("textB"));
        assert_eq!(apply(StartingParentheses, "1942-1943)"), None);
        assert_eq!(apply(EndingParentheses, "text(1942-1943 ) (1928)").as_deref(), Some("text"));
        assert_eq!(apply(EndingParentheses, "1749 (text (text))").as_deref(), Some("1749"));
        assert_eq!(apply(EndingParentheses, "(1942-1943)"), None);
        assert_eq!(apply(CaptureValueInParentheses, " (textA)( textB )").as_deref(), Some("textA)( textB"));
        assert_eq!(apply(CaptureValueInParentheses, "(1942-1943)").as_deref(), Some("1942-1943"));
        assert_eq!(
            apply(CaptureValueInParenthesesWithCirca, "(circa ad)(c. 123)").as_deref(),
            Some("ad)(c. 123")
        );
        assert_eq!(apply(CaptureValueInParenthesesWithCirca, "(1942)"), None);
    }

    #[test]
    fn test_square_brackets() {
        assert_eq!(
            apply(CaptureValueInSquareBracketsWithCirca, "[circa ad][c. 123]").as_deref(),
            Some("ad123")
        );
        assert_eq!(apply(CaptureValueInSquareBracketsWithCirca, "1651 [ca. 1656]").as_deref(), Some("1651 1656"));
        assert_eq!(apply(CaptureValueInSquareBracketsWithCirca, "[circa2000"), None);
        assert_eq!(apply(CaptureValueInSquareBracketsWithCirca, "[2000]"), None);
        assert_eq!(apply(CaptureValueInSquareBrackets, "text[[1942-1943]]").as_deref(), Some("text[1942-1943]"));
        assert_eq!(apply(CaptureValueInSquareBrackets, " [textA][ [textB] ]").as_deref(), Some("textA [textB ]"));
        assert_eq!(apply(CaptureValueInSquareBrackets, "text[ 1942-1943 ]").as_deref(), Some("text 1942-1943"));
        assert_eq!(apply(EndingClosingSquareBracket, "textA]textB ]").as_deref(), Some("textA]textB"));
        assert_eq!(apply(EndingSquareBrackets, "textA[[textB]]]").as_deref(), Some("textA"));
        assert_eq!(apply(EndingSquareBrackets, "2700[info]2000[textC]").as_deref(), Some("2700"));
        assert_eq!(apply(EndingSquareBrackets, "text[1942-1943textB"), None);
    }

    #[test]
    fn test_circa_and_dot() {
        for input in ["circa 2000", "ca 2000", "c 2000", "ca.2000", "ca. 2000", "c.2000", "c. 2000", "CIRCA 2000"] {
            assert_eq!(apply(StartingCirca, input).as_deref(), Some("2000"), "{}", input);
        }
        assert_eq!(apply(StartingCirca, "circa2000"), None);
        assert_eq!(apply(StartingCirca, "ca2000"), None);
        assert_eq!(apply(EndingDot, "text...").as_deref(), Some("text.."));
        assert_eq!(apply(EndingDot, "."), None);
    }

    #[test]
    fn test_first_matching_operation_decides() {
        let sanitized = sanitize("textA:1500[textB]", SanitizePass::First).unwrap();
        assert_eq!(sanitized.operation, StartingTextUntilFirstColon);
        assert_eq!(sanitized.value, "1500[textB]");

        // Starting parentheses match and leave nothing: ending parentheses are not tried
        assert_eq!(sanitize("(1942-1943)", SanitizePass::First), None);
        let second = sanitize("(1942-1943)", SanitizePass::Second).unwrap();
        assert_eq!(second.operation, CaptureValueInParentheses);
        assert_eq!(second.value, "1942-1943");
    }

    #[test]
    fn test_passes() {
        let first = sanitize("[ca. 1920-1930]", SanitizePass::First).unwrap();
        assert_eq!(first.operation, CaptureValueInSquareBracketsWithCirca);
        assert_eq!(first.value, "1920-1930");
        assert!(first.operation.is_circa());

        let second = sanitize("1205/1215 [text in brackets]", SanitizePass::Second).unwrap();
        assert_eq!(second.operation, EndingSquareBrackets);
        assert_eq!(second.value, "1205/1215");

        let generic = sanitize("1989-11-01 - 1989-12-31 (text)", SanitizePass::Generic).unwrap();
        assert_eq!(generic.operation, EndingParentheses);
        assert_eq!(generic.value, "1989-11-01 - 1989-12-31");

        assert_eq!(sanitize("1989", SanitizePass::First), None);
    }
}
