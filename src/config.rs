//! Environment-driven configuration.
//!
//! | Variable       | Default        | Meaning                                  |
//! |----------------|----------------|------------------------------------------|
//! | `RELIC_ADDR`   | `0.0.0.0:3000` | Listen address                           |
//! | `RELIC_TOKENS` | *(empty)*      | Accepted tokens, `token:subject,` pairs  |
//!
//! `RELIC_TOKENS=s3cret:alice,hunter2:bob` accepts two bearer tokens. A
//! bare entry without `:` uses the token itself as the subject. With no
//! tokens configured, every authenticated route answers 401.

/// Startup configuration for the shipped binary.
pub struct Config {
    pub addr: String,
    pub tokens: Vec<(String, String)>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            addr: std::env::var("RELIC_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned()),
            tokens: std::env::var("RELIC_TOKENS")
                .map(|raw| parse_tokens(&raw))
                .unwrap_or_default(),
        }
    }
}

fn parse_tokens(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(':') {
            Some((token, subject)) => (token.to_owned(), subject.to_owned()),
            None => (entry.to_owned(), entry.to_owned()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token_subject_pairs() {
        assert_eq!(
            parse_tokens("s3cret:alice,hunter2:bob"),
            vec![
                ("s3cret".to_owned(), "alice".to_owned()),
                ("hunter2".to_owned(), "bob".to_owned()),
            ]
        );
    }

    #[test]
    fn bare_token_uses_itself_as_subject() {
        assert_eq!(parse_tokens("s3cret"), vec![("s3cret".to_owned(), "s3cret".to_owned())]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(parse_tokens("").is_empty());
    }
}
