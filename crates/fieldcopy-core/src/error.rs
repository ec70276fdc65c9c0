use crate::value::Value;
use thiserror::Error as ThisError;

///
/// CopyError
///
/// Every failure the public operations surface.
///
/// `InvalidArgument` and `AccessorNotFound` are usage errors and always
/// propagate. `FieldAccess` is the normalized per-field failure raised by
/// the introspector; the copy engine wraps it into `FieldCopy` unless the
/// caller asked for errors to be tolerated.
///

#[derive(Debug, ThisError)]
pub enum CopyError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("no accessor '{accessor}' for field '{field}' on '{bean}' or any of its parents")]
    AccessorNotFound {
        bean: &'static str,
        field: &'static str,
        accessor: String,
    },

    #[error("field access failed: {0}")]
    FieldAccess(#[from] AccessError),

    #[error(
        "Can not copy the value of the field named '{source_field}' to the field '{target_field}'."
    )]
    FieldCopy {
        source_field: String,
        target_field: String,
        #[source]
        cause: AccessError,
    },
}

impl CopyError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn field_copy(
        source_field: impl Into<String>,
        target_field: impl Into<String>,
        cause: AccessError,
    ) -> Self {
        Self::FieldCopy {
            source_field: source_field.into(),
            target_field: target_field.into(),
            cause,
        }
    }

    /// The underlying per-field failure, if this error carries one.
    #[must_use]
    pub const fn access_error(&self) -> Option<&AccessError> {
        match self {
            Self::FieldAccess(cause) | Self::FieldCopy { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

///
/// AccessError
///
/// A single field read/write or accessor invocation failed on an instance.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AccessError {
    #[error("'{bean}' has no field '{field}'")]
    NoSuchField { bean: &'static str, field: String },

    #[error("'{bean}' has no accessor '{accessor}'")]
    NoSuchAccessor { bean: &'static str, accessor: String },

    #[error("field '{field}' on '{bean}' is read-only")]
    ReadOnly { bean: &'static str, field: String },

    #[error("'{member}' on '{bean}' expects {expected}, found {found}")]
    TypeMismatch {
        bean: &'static str,
        member: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("accessor '{accessor}' on '{bean}' failed: {message}")]
    Invocation {
        bean: &'static str,
        accessor: String,
        message: String,
    },
}

impl AccessError {
    pub fn no_such_field(bean: &'static str, field: impl Into<String>) -> Self {
        Self::NoSuchField {
            bean,
            field: field.into(),
        }
    }

    pub fn no_such_accessor(bean: &'static str, accessor: impl Into<String>) -> Self {
        Self::NoSuchAccessor {
            bean,
            accessor: accessor.into(),
        }
    }

    pub fn read_only(bean: &'static str, field: impl Into<String>) -> Self {
        Self::ReadOnly {
            bean,
            field: field.into(),
        }
    }

    /// `member` is the field or accessor that refused `value`.
    pub fn type_mismatch(
        bean: &'static str,
        member: impl Into<String>,
        expected: &'static str,
        value: &Value,
    ) -> Self {
        Self::TypeMismatch {
            bean,
            member: member.into(),
            expected,
            found: value.kind_name(),
        }
    }

    pub fn invocation(
        bean: &'static str,
        accessor: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Invocation {
            bean,
            accessor: accessor.into(),
            message: message.into(),
        }
    }
}
