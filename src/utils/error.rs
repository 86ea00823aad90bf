use thiserror::Error;

/// 啟動階段的致命錯誤，任何一個都代表服務不應開始接收請求
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid model artifact: {message}")]
    InvalidModelError { message: String },

    #[error("Invalid config value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// 單一請求的錯誤類別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidBody,
    MissingField,
    NotNumeric,
    NonFinite,
    Model,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("invalid JSON body: {message}")]
    InvalidBody { message: String },

    #[error("request body could not be read: {message}")]
    UnreadableBody { message: String },

    #[error("missing field: {field}")]
    MissingField { field: &'static str },

    #[error("field {field} is not a number: {value}")]
    NotNumeric { field: &'static str, value: String },

    #[error("field {field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("model error: {message}")]
    Model { message: String },
}

impl ClassifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClassifyError::InvalidBody { .. } | ClassifyError::UnreadableBody { .. } => {
                ErrorKind::InvalidBody
            }
            ClassifyError::MissingField { .. } => ErrorKind::MissingField,
            ClassifyError::NotNumeric { .. } => ErrorKind::NotNumeric,
            ClassifyError::NonFinite { .. } => ErrorKind::NonFinite,
            ClassifyError::Model { .. } => ErrorKind::Model,
        }
    }

    /// 發生問題的欄位名稱（如果有）
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ClassifyError::MissingField { field }
            | ClassifyError::NotNumeric { field, .. }
            | ClassifyError::NonFinite { field } => Some(field),
            ClassifyError::InvalidBody { .. }
            | ClassifyError::UnreadableBody { .. }
            | ClassifyError::Model { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ClassifyError {
    fn from(err: serde_json::Error) -> Self {
        ClassifyError::InvalidBody {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = ClassifyError::MissingField { field: "ph" };
        assert_eq!(err.to_string(), "missing field: ph");
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.field(), Some("ph"));

        let err = ClassifyError::NotNumeric {
            field: "ec",
            value: "\"abc\"".to_string(),
        };
        assert_eq!(err.to_string(), "field ec is not a number: \"abc\"");
        assert_eq!(err.field(), Some("ec"));
    }

    #[test]
    fn test_serde_error_becomes_invalid_body() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = ClassifyError::from(parse_err);
        assert_eq!(err.kind(), ErrorKind::InvalidBody);
        assert!(err.field().is_none());
        assert!(err.to_string().starts_with("invalid JSON body: "));
    }
}
