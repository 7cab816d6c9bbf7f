//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a config value.
///
/// Bare `$VAR` is left untouched. An unset variable without a default is
/// reported against `field`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let escaped = escape_bare_dollars(value);
    shellexpand::env_with_context(&escaped, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.0),
    })
}

/// Double every `$` that does not open a `${` so shellexpand keeps it literal.
fn escape_bare_dollars(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$' && chars.peek() != Some(&'{') {
            escaped.push_str("$$");
        } else {
            escaped.push(c);
        }
    }
    escaped
}

/// Name of a variable that could not be resolved.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_set_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("FOLIO_EXPAND_SET", "fr");
        }
        let result = expand_env("${FOLIO_EXPAND_SET}", "content.language").unwrap();
        assert_eq!(result, "fr");
        unsafe {
            std::env::remove_var("FOLIO_EXPAND_SET");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        let result = expand_env("${FOLIO_EXPAND_NEVER_SET:-en}", "content.language").unwrap();
        assert_eq!(result, "en");
    }

    #[test]
    fn test_expand_unset_without_default() {
        let err = expand_env("${FOLIO_EXPAND_NEVER_SET}", "content.language").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("FOLIO_EXPAND_NEVER_SET"));
        assert!(err.to_string().contains("content.language"));
    }

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("en-US", "content.language").unwrap(), "en-US");
    }

    #[test]
    fn test_bare_dollar_kept_next_to_braced_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("FOLIO_EXPAND_BARE", "XX");
        }
        let result = expand_env(
            "${FOLIO_EXPAND_NEVER_SET:-en}-$FOLIO_EXPAND_BARE",
            "content.language",
        )
        .unwrap();
        assert_eq!(result, "en-$FOLIO_EXPAND_BARE");
        unsafe {
            std::env::remove_var("FOLIO_EXPAND_BARE");
        }
    }

    #[test]
    fn test_trailing_dollar_kept() {
        let result = expand_env("${FOLIO_EXPAND_NEVER_SET:-en}$", "content.language").unwrap();
        assert_eq!(result, "en$");
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        assert_eq!(expand_env("$LANG", "content.language").unwrap(), "$LANG");
    }
}
