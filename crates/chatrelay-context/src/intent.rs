use std::sync::OnceLock;

use regex::Regex;

/// Structured intent recognized in free-form user text. At most one directive
/// per message; patterns are tried in priority order and the first match
/// wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    TokenList { tokens: Vec<String> },
    InvestmentAdvice { tokens: Vec<String> },
    None,
}

impl Directive {
    pub fn tokens(&self) -> Option<&[String]> {
        match self {
            Directive::TokenList { tokens } | Directive::InvestmentAdvice { tokens } => {
                Some(tokens)
            }
            Directive::None => None,
        }
    }
}

fn token_list_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"I want information for the following tokens:\s*(.+)").unwrap())
}

fn investment_advice_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)investment advice for the following tokens:\s*(.+)").unwrap()
    })
}

/// Pure text matching; an unrecognized message is `Directive::None`, not an
/// error.
///
/// The two patterns deliberately keep different splitting tolerance: the
/// token-list form splits on the exact `", "` delimiter, the advice form
/// splits on `","` and trims. Callers at each boundary were recorded with
/// these distinct expectations.
pub fn extract(message: &str) -> Directive {
    if let Some(caps) = token_list_re().captures(message) {
        let tokens = caps[1].split(", ").map(str::to_string).collect();
        return Directive::TokenList { tokens };
    }

    if let Some(caps) = investment_advice_re().captures(message) {
        let tokens = caps[1]
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        return Directive::InvestmentAdvice { tokens };
    }

    Directive::None
}

/// Whether the message matches the token-list form at all, used by the
/// registry fallback branch of the composer.
pub fn matches_token_list(message: &str) -> bool {
    token_list_re().is_match(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_list_splits_on_comma_space_in_order() {
        let directive = extract("I want information for the following tokens: BTC, ETH, SOL");
        assert_eq!(
            directive,
            Directive::TokenList {
                tokens: vec!["BTC".into(), "ETH".into(), "SOL".into()]
            }
        );
    }

    #[test]
    fn token_list_pattern_is_case_sensitive() {
        let directive = extract("i want information for the following tokens: BTC");
        assert_eq!(directive, Directive::None);
    }

    #[test]
    fn investment_advice_trims_around_bare_commas() {
        let directive = extract("Give me investment advice for the following tokens: BTC ,ETH,  SOL");
        assert_eq!(
            directive,
            Directive::InvestmentAdvice {
                tokens: vec!["BTC".into(), "ETH".into(), "SOL".into()]
            }
        );
    }

    #[test]
    fn investment_advice_is_case_insensitive() {
        let directive = extract("INVESTMENT ADVICE for the following tokens: BTC");
        assert_eq!(
            directive,
            Directive::InvestmentAdvice {
                tokens: vec!["BTC".into()]
            }
        );
    }

    #[test]
    fn token_list_has_priority_over_investment_advice() {
        let directive = extract(
            "I want information for the following tokens: BTC and investment advice for the following tokens: ETH",
        );
        assert!(matches!(directive, Directive::TokenList { .. }));
    }

    #[test]
    fn plain_question_is_none() {
        assert_eq!(extract("What is the capital of France?"), Directive::None);
    }
}
