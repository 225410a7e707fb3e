//! Environment-driven bot configuration.

use std::{env, time::Duration};

use anyhow::Context as _;
use paginator_core::config::DEFAULT_TIMEOUT;

/// Items shown per page by the demo commands unless overridden.
pub const DEFAULT_PER_PAGE: usize = 5;

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    pub timeout: Duration,
    pub per_page: usize,
}

impl BotConfig {
    /// Read `DISCORD_TOKEN`, `PAGINATOR_TIMEOUT_SECS` and `PAGINATOR_PER_PAGE`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let token = lookup("DISCORD_TOKEN").context("DISCORD_TOKEN is not set")?;

        let timeout = match lookup("PAGINATOR_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("invalid PAGINATOR_TIMEOUT_SECS: {raw}"))?,
            ),
            None => DEFAULT_TIMEOUT,
        };

        let per_page = match lookup("PAGINATOR_PER_PAGE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|per_page| *per_page > 0)
                .with_context(|| format!("invalid PAGINATOR_PER_PAGE: {raw}"))?,
            None => DEFAULT_PER_PAGE,
        };

        Ok(Self {
            token,
            timeout,
            per_page,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_optional_vars_missing() {
        let config = BotConfig::from_lookup(lookup(&[("DISCORD_TOKEN", "abc")])).unwrap();

        assert_eq!(config.token, "abc");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.per_page, DEFAULT_PER_PAGE);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = BotConfig::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("PAGINATOR_TIMEOUT_SECS", "60"),
            ("PAGINATOR_PER_PAGE", " 8 "),
        ]))
        .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.per_page, 8);
    }

    #[test]
    fn missing_token_and_bad_numbers_fail() {
        assert!(BotConfig::from_lookup(lookup(&[])).is_err());
        assert!(
            BotConfig::from_lookup(lookup(&[
                ("DISCORD_TOKEN", "abc"),
                ("PAGINATOR_PER_PAGE", "0"),
            ]))
            .is_err()
        );
    }
}
