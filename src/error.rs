use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgoError {
    #[error("{op}: {msg}")]
    InvalidArgument { op: &'static str, msg: String },
    #[error("{op}: inner dimensions differ: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        op: &'static str,
        lhs: [usize; 2],
        rhs: [usize; 2],
    },
    #[error("{op}: i64 overflow accumulating entry ({row}, {col})")]
    Overflow {
        op: &'static str,
        row: usize,
        col: usize,
    },
}

pub type Result<T> = std::result::Result<T, AlgoError>;
