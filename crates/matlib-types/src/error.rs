use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatLibError {
    #[error("Shape mismatch in {op}: {detail}")]
    ShapeMismatch { op: &'static str, detail: String },

    #[error("Singular system: zero pivot in column {column}")]
    SingularSystem { column: usize },

    #[error("Transform length {len} is not a power of two")]
    InvalidTransformLength { len: usize },

    #[error("Row index out of bounds: index={index}, rows={len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Matrix is not symmetric at ({row}, {col})")]
    NotSymmetric { row: usize, col: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Cannot parse line {line} as a number: {value:?}")]
    Parse { line: usize, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MatLibError {
    /// Shape error for two operands, formatted as `RxC vs RxC`.
    pub fn shapes(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        MatLibError::ShapeMismatch {
            op,
            detail: format!("{}x{} vs {}x{}", left.0, left.1, right.0, right.1),
        }
    }

    /// Shape error for an operation that needs a square operand.
    pub fn not_square(op: &'static str, shape: (usize, usize)) -> Self {
        MatLibError::ShapeMismatch {
            op,
            detail: format!("expected a square matrix, got {}x{}", shape.0, shape.1),
        }
    }
}

pub type MatLibResult<T> = Result<T, MatLibError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_message_lists_both_operands() {
        let err = MatLibError::shapes("add", (2, 2), (1, 1));
        assert_eq!(err.to_string(), "Shape mismatch in add: 2x2 vs 1x1");
    }

    #[test]
    fn test_not_square_message() {
        let err = MatLibError::not_square("trace", (2, 3));
        assert!(err.to_string().contains("2x3"));
    }

    #[test]
    fn test_io_error_converts() {
        fn open() -> MatLibResult<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.txt")?)
        }
        assert!(matches!(open(), Err(MatLibError::Io(_))));
    }
}
