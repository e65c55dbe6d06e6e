//! BC/AD era markers in several languages

/// Era of a year written with an explicit marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Era {
    /// Before the common era
    Bc,
    /// Common era
    Ad,
}

/// Era markers, as written (matching is case-insensitive)
pub(crate) const ERA_TOKENS: &[(&str, Era)] = &[
    ("BC", Era::Bc),
    ("B.C.", Era::Bc),
    ("BCE", Era::Bc),
    ("π.Χ.", Era::Bc),
    ("vC", Era::Bc),
    ("v.C.", Era::Bc),
    ("v.Chr.", Era::Bc),
    ("aC", Era::Bc),
    ("a.C.", Era::Bc),
    ("AD", Era::Ad),
    ("A.D.", Era::Ad),
    ("CE", Era::Ad),
    ("μ.Χ.", Era::Ad),
    ("nC", Era::Ad),
    ("n.C.", Era::Ad),
    ("n.Chr.", Era::Ad),
    ("dC", Era::Ad),
    ("d.C.", Era::Ad),
];

/// Regex alternation of every marker of `era`, longest first
pub(crate) fn era_alternation(era: Era) -> String {
    super::alternation(
        ERA_TOKENS
            .iter()
            .filter(|(_, e)| *e == era)
            .map(|(token, _)| *token),
    )
}

/// Astronomical year number: `1 BC` is year 0, `2 BC` is -1
///
/// Year zero does not exist in either era and yields `None`.
pub(crate) fn to_astronomical(year: i64, era: Era) -> Option<i64> {
    if year <= 0 {
        return None;
    }
    Some(match era {
        Era::Bc => 1 - year,
        Era::Ad => year,
    })
}
