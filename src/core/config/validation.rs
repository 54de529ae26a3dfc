use super::TlintConfig;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration rules
    pub fn validate(config: &TlintConfig) -> Result<(), AppError> {
        Self::validate_ignore_list("hadolint.ignore", &config.hadolint.ignore)?;
        Self::validate_ignore_list("shellcheck.ignore", &config.shellcheck.ignore)?;
        Ok(())
    }

    fn validate_ignore_list(key: &str, rules: &[String]) -> Result<(), AppError> {
        for rule in rules {
            if rule.trim().is_empty() {
                return Err(AppError::new(
                    ErrorCategory::ValidationError,
                    format!("{} cannot contain empty entries", key),
                ));
            }

            // The rule is passed as the value of an option; a leading dash
            // would be parsed by the linter as another option.
            if rule.starts_with('-') {
                return Err(AppError::new(
                    ErrorCategory::ValidationError,
                    format!("{} entry '{}' must be a rule identifier, not an option", key, rule),
                ));
            }
        }
        Ok(())
    }
}
