use std::collections::BTreeMap;
use std::fmt;
use tracing::Span;

/// Context information attached to a unit of work (one build, one change event)
#[derive(Debug, Clone)]
pub struct LogContext {
    /// Component that is generating the log
    pub component: String,
    /// Operation or action being performed
    pub operation: Option<String>,
    /// Additional contextual fields
    pub fields: BTreeMap<String, String>,
}

impl LogContext {
    /// Create a new log context with just the component name
    pub fn new<S: Into<String>>(component: S) -> Self {
        LogContext {
            component: component.into(),
            operation: None,
            fields: BTreeMap::new(),
        }
    }

    /// Create a new log context with component and operation
    pub fn with_operation<S: Into<String>, T: Into<String>>(component: S, operation: T) -> Self {
        LogContext {
            component: component.into(),
            operation: Some(operation.into()),
            fields: BTreeMap::new(),
        }
    }

    /// Add a field to the context
    pub fn with_field<S: Into<String>, T: Into<String>>(mut self, key: S, value: T) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Info-level span carrying this context; extra fields are rendered into `ctx`.
    pub fn span(&self) -> Span {
        tracing::info_span!(
            "vmconnect",
            component = %self.component,
            operation = self.operation.as_deref().unwrap_or(""),
            ctx = %self
        )
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.component)?;

        if let Some(op) = &self.operation {
            write!(f, "[{}]", op)?;
        }

        for (key, value) in &self.fields {
            write!(f, "[{}={}]", key, value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_orders_fields() {
        let ctx = LogContext::with_operation("flow-core", "build")
            .with_field("queue", "BasicQueue")
            .with_field("instance", "abc");
        assert_eq!(ctx.to_string(), "[flow-core][build][instance=abc][queue=BasicQueue]");
    }

    #[test]
    fn test_component_only_context() {
        let ctx = LogContext::new("voicemail-core");
        assert_eq!(ctx.operation, None);
        assert_eq!(ctx.to_string(), "[voicemail-core]");
        assert_eq!(ctx.with_field("contact", "c-1").to_string(), "[voicemail-core][contact=c-1]");
    }
}
