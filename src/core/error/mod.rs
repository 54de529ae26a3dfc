use crate::core::types::ErrorCategory;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct AppError {
    pub category: ErrorCategory,
    pub code: String,
    pub message: String,
    pub context: BTreeMap<String, String>,
    pub recovery_suggestions: Vec<String>,
    pub source: Option<anyhow::Error>,
}

impl AppError {
    pub fn new<T: Into<String>>(category: ErrorCategory, message: T) -> Self {
        AppError {
            category,
            code: default_code(category).to_string(),
            message: message.into(),
            context: BTreeMap::new(),
            recovery_suggestions: vec![],
            source: None,
        }
    }

    pub fn with_source<T: Into<String>>(
        category: ErrorCategory,
        message: T,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        let mut error = AppError::new(category, message);
        error.source = Some(anyhow::anyhow!(source));
        error
    }

    pub fn with_suggestion<T: Into<String>>(mut self, suggestion: T) -> Self {
        self.recovery_suggestions.push(suggestion.into());
        self
    }

    pub fn add_context(&mut self, key: &str, value: &str) {
        self.context.insert(key.to_string(), value.to_string());
    }
}

fn default_code(category: ErrorCategory) -> &'static str {
    match category {
        ErrorCategory::ConfigError => "CFG-001",
        ErrorCategory::ValidationError => "CFG-002",
        ErrorCategory::DiscoveryError => "WALK-001",
        ErrorCategory::IoError => "IO-001",
        ErrorCategory::InternalError => "INTERNAL",
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.category, self.message)?;
        if !self.context.is_empty() {
            write!(f, " (Context: {:?})", self.context)?;
        }
        if let Some(ref source) = self.source {
            write!(f, "\nCaused by: {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        match e.downcast::<AppError>() {
            Ok(app_error) => app_error,
            Err(e) => AppError {
                category: ErrorCategory::InternalError,
                code: "ANYHOW_ERROR".to_string(),
                message: e.to_string(),
                context: BTreeMap::new(),
                recovery_suggestions: vec!["Check the error details".to_string()],
                source: Some(e),
            },
        }
    }
}

pub trait ErrorReporter {
    fn report_error(&self, error: &AppError);
}

/// Reports through the tracing subscriber installed by `logging::init`.
pub struct DefaultErrorReporter;

impl DefaultErrorReporter {
    pub fn new() -> Self {
        DefaultErrorReporter
    }
}

impl Default for DefaultErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorReporter for DefaultErrorReporter {
    fn report_error(&self, error: &AppError) {
        tracing::error!(code = %error.code, category = %error.category, "{}", error.message);
        for (key, value) in &error.context {
            tracing::error!("  {}: {}", key, value);
        }
        if let Some(ref source) = error.source {
            tracing::error!("  Caused by: {}", source);
        }
        for suggestion in &error.recovery_suggestions {
            tracing::info!("  Hint: {}", suggestion);
        }
    }
}
