//! Placeholder token grammar and single-pass substitution.
//!
//! Tokens are fixed literal markers of the form `###__NAME__###` drawn from a
//! closed enumeration. A [`PlaceholderSet`] is resolved once per run; the
//! same set is applied to every path and every file body, so the whole
//! generated tree sees identical values (including `TODAY`).
//!
//! Substitution is one left-to-right pass and replacement text is never
//! rescanned, which makes the operation idempotent as long as resolved
//! values do not themselves contain marker text. That property is a contract
//! on the caller, not something enforced here.

use crate::metadata::ProjectMetadata;

const MARKER_OPEN: &str = "###__";
const MARKER_CLOSE: &str = "__###";

/// The closed set of recognized token names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    ProjName,
    ProjOrg,
    ProjAuthor,
    Today,
}

impl Token {
    /// The bare token name as it appears between the marker delimiters.
    pub fn name(self) -> &'static str {
        match self {
            Self::ProjName => "PROJ_NAME",
            Self::ProjOrg => "PROJ_ORG",
            Self::ProjAuthor => "PROJ_AUTHOR",
            Self::Today => "TODAY",
        }
    }

    /// The full literal marker, e.g. `###__PROJ_NAME__###`.
    pub fn marker(self) -> &'static str {
        match self {
            Self::ProjName => "###__PROJ_NAME__###",
            Self::ProjOrg => "###__PROJ_ORG__###",
            Self::ProjAuthor => "###__PROJ_AUTHOR__###",
            Self::Today => "###__TODAY__###",
        }
    }
}

/// A resolved name→value mapping, fixed for the duration of one run.
#[derive(Debug, Clone)]
pub struct PlaceholderSet {
    entries: Vec<(Token, String)>,
}

impl PlaceholderSet {
    /// Resolve the full token set from metadata, computing `TODAY` now.
    pub fn resolve(meta: &ProjectMetadata) -> Self {
        let today = chrono::Local::now().format("%m/%d/%Y").to_string();
        Self::with_today(meta, today)
    }

    /// Resolve the full token set with an explicit `TODAY` value.
    pub fn with_today(meta: &ProjectMetadata, today: impl Into<String>) -> Self {
        Self {
            entries: vec![
                (Token::ProjName, meta.name.clone()),
                (Token::ProjOrg, meta.organization.clone()),
                (Token::ProjAuthor, meta.author.clone()),
                (Token::Today, today.into()),
            ],
        }
    }

    /// The narrow set applied to the CI descriptor: only `PROJ_ORG` and
    /// `PROJ_NAME`. Markers outside this set pass through verbatim.
    pub fn for_ci(meta: &ProjectMetadata) -> Self {
        Self {
            entries: vec![
                (Token::ProjOrg, meta.organization.clone()),
                (Token::ProjName, meta.name.clone()),
            ],
        }
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(token, _)| token.name() == name)
            .map(|(_, value)| value.as_str())
    }

    /// Replace every occurrence of every active token in one pass.
    ///
    /// Substrings that match the marker grammar but name a token outside the
    /// active set are copied through unchanged — never an error.
    pub fn substitute(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(start) = rest.find(MARKER_OPEN) {
            let after_open = &rest[start + MARKER_OPEN.len()..];
            let Some(end) = after_open.find(MARKER_CLOSE) else {
                // Unterminated opener; nothing after this can be a token.
                break;
            };

            match self.lookup(&after_open[..end]) {
                Some(value) => {
                    out.push_str(&rest[..start]);
                    out.push_str(value);
                    rest = &after_open[end + MARKER_CLOSE.len()..];
                }
                None => {
                    // Not an active token. Emit the opener literally and
                    // resume scanning right after it, so an overlapping
                    // genuine token is still found.
                    out.push_str(&rest[..start + MARKER_OPEN.len()]);
                    rest = after_open;
                }
            }
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> ProjectMetadata {
        ProjectMetadata {
            name: "demo".into(),
            organization: "acme".into(),
            author: "Jane".into(),
            docker_tag: "acme/demo".into(),
            path: "./demo".into(),
            drone_enabled: false,
        }
    }

    fn set() -> PlaceholderSet {
        PlaceholderSet::with_today(&meta(), "01/02/2026")
    }

    #[test]
    fn replaces_every_token() {
        let input = "###__PROJ_NAME__### by ###__PROJ_AUTHOR__### \
                     (###__PROJ_ORG__###) on ###__TODAY__###";
        assert_eq!(set().substitute(input), "demo by Jane (acme) on 01/02/2026");
    }

    #[test]
    fn repeated_occurrences_all_replaced() {
        let out = set().substitute("###__PROJ_NAME__###/###__PROJ_NAME__###");
        assert_eq!(out, "demo/demo");
    }

    #[test]
    fn unknown_token_passes_through_verbatim() {
        let input = "keep ###__UNKNOWN__### as-is";
        assert_eq!(set().substitute(input), input);
    }

    #[test]
    fn unterminated_marker_passes_through() {
        let input = "dangling ###__PROJ_NAME";
        assert_eq!(set().substitute(input), input);
    }

    #[test]
    fn unknown_token_does_not_swallow_following_token() {
        let out = set().substitute("###__NOPE__### then ###__PROJ_ORG__###");
        assert_eq!(out, "###__NOPE__### then acme");
    }

    #[test]
    fn substitution_is_idempotent() {
        let once = set().substitute("name=###__PROJ_NAME__###, date=###__TODAY__###");
        let twice = set().substitute(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn ci_set_leaves_author_and_today_untouched() {
        let ci = PlaceholderSet::for_ci(&meta());
        let out = ci.substitute("###__PROJ_ORG__###::###__PROJ_NAME__### ###__TODAY__###");
        assert_eq!(out, "acme::demo ###__TODAY__###");
    }

    #[test]
    fn no_residual_markers_after_full_substitution() {
        let input = "###__PROJ_NAME__### ###__PROJ_ORG__### \
                     ###__PROJ_AUTHOR__### ###__TODAY__###";
        let out = set().substitute(input);
        for token in [
            Token::ProjName,
            Token::ProjOrg,
            Token::ProjAuthor,
            Token::Today,
        ] {
            assert!(!out.contains(token.marker()), "residual {}", token.name());
        }
    }

    #[test]
    fn marker_constants_match_grammar() {
        assert_eq!(Token::ProjName.marker(), "###__PROJ_NAME__###");
        assert_eq!(Token::Today.marker(), "###__TODAY__###");
    }
}
