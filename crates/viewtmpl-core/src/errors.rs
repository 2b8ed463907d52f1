use viewtmpl_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using TemplateError
pub type Result<T> = std::result::Result<T, TemplateError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Comparison and report generation never fail; every kind here belongs to
/// the layers around them (snapshot loading, template selection, file I/O).
/// Each kind maps to a stable error code for programmatic handling and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Selection/Validation
    InvalidInput,
    NotFound,
    AmbiguousSelection,
    SameTemplate,

    // Snapshot parsing
    /// Snapshot text is not valid YAML/JSON or violates a structural rule
    InvalidSnapshot,
    /// Snapshot `schema_version` is not one this build understands
    UnsupportedSchema,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AmbiguousSelection => "ERR_AMBIGUOUS_SELECTION",
            ExErrorKind::SameTemplate => "ERR_SAME_TEMPLATE",
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::UnsupportedSchema => "ERR_UNSUPPORTED_SCHEMA",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context
/// (operation, offending entity, correlation ids) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (template name, element id, file path)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the trace ID context, if any
    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity: {})", entity_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Host-level failures around a comparison
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    /// No template with this name exists in the document
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// Several templates share the requested name
    #[error("Template name '{name}' is ambiguous: {count} templates match")]
    AmbiguousTemplateName { name: String, count: usize },

    /// Both selections resolve to the same template
    #[error("Cannot compare template '{name}' with itself")]
    SameTemplate { name: String },

    /// Two templates in one document share an id
    #[error("Duplicate template id: {id}")]
    DuplicateTemplateId { id: i64 },

    /// A template references a category the document does not define
    #[error("Template '{template}' references unknown category {category_id}")]
    UnknownCategory { template: String, category_id: i64 },
}

impl From<TemplateError> for ExError {
    fn from(err: TemplateError) -> Self {
        let message = err.to_string();
        match err {
            TemplateError::TemplateNotFound { name } => ExError::new(ExErrorKind::NotFound)
                .with_op("select_template")
                .with_entity_id(name)
                .with_message(message),
            TemplateError::AmbiguousTemplateName { name, .. } => {
                ExError::new(ExErrorKind::AmbiguousSelection)
                    .with_op("select_template")
                    .with_entity_id(name)
                    .with_message(message)
            }
            TemplateError::SameTemplate { name } => ExError::new(ExErrorKind::SameTemplate)
                .with_op("select_template")
                .with_entity_id(name)
                .with_message(message),
            TemplateError::DuplicateTemplateId { id } => {
                ExError::new(ExErrorKind::InvalidSnapshot)
                    .with_op("validate_snapshot")
                    .with_entity_id(id.to_string())
                    .with_message(message)
            }
            TemplateError::UnknownCategory { template, .. } => {
                ExError::new(ExErrorKind::InvalidSnapshot)
                    .with_op("validate_snapshot")
                    .with_entity_id(template)
                    .with_message(message)
            }
        }
    }
}
