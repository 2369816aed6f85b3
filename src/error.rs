use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("FileError: {0}")]
    File(#[from] FileError),
    #[error("RecordError: {0}")]
    Record(#[from] RecordError),
    #[error("HttpError: {0}")]
    Http(#[from] HttpError),
}

#[derive(Error, Debug)]
pub enum FileError {
    #[error("File I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Field '{field}' holds non-numeric value {value} (record {index})")]
    NonNumericField {
        field: String,
        value: String,
        index: usize,
    },
    #[error("Cannot compute {operation} of field '{field}': no record has the field")]
    EmptyAggregation { operation: String, field: String },
}

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Failed to create HTTP client: {0}")]
    ClientInit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_error_display() {
        let err = FileError::Io {
            path: "data.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(format!("{}", err), "File I/O error at data.txt: denied");
    }

    #[test]
    fn test_record_error_display() {
        let err = RecordError::NonNumericField {
            field: "score".to_string(),
            value: "\"high\"".to_string(),
            index: 2,
        };
        assert_eq!(
            format!("{}", err),
            "Field 'score' holds non-numeric value \"high\" (record 2)"
        );

        let err = RecordError::EmptyAggregation {
            operation: "average".to_string(),
            field: "score".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Cannot compute average of field 'score': no record has the field"
        );
    }

    #[test]
    fn test_app_error_lifts_domain_errors() {
        let app_err: AppError = RecordError::EmptyAggregation {
            operation: "average".to_string(),
            field: "score".to_string(),
        }
        .into();
        assert!(matches!(app_err, AppError::Record(_)));
        assert_eq!(
            format!("{}", app_err),
            "RecordError: Cannot compute average of field 'score': no record has the field"
        );

        let app_err: AppError = HttpError::ClientInit("tls backend unavailable".to_string()).into();
        assert!(matches!(app_err, AppError::Http(_)));
    }
}
