//! Error types for input parsing and process-level failures.

/// Reason an input line could not be turned into a command.
///
/// Every variant is recoverable: the interactive session renders it and
/// prompts again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// Blank line.
    #[error("nenhuma entrada informada")]
    Empty,

    /// Token is neither an integer nor a date in a supported format.
    #[error("data inválida '{0}'")]
    MalformedDate(String),

    /// Integer day count that is zero or negative, as typed.
    #[error("o número de dias deve ser maior ou igual a 1 (recebido {0})")]
    NonPositiveDayCount(String),

    /// Day count, as typed, that leaves the representable calendar range.
    #[error("o número de dias {0} está fora do intervalo suportado")]
    DayCountOutOfRange(String),

    /// More than two tokens.
    #[error("esperado 1 ou 2 valores, recebido {0}")]
    WrongTokenCount(usize),
}

/// Process-level error reported by `main`.
#[derive(Debug, thiserror::Error)]
pub enum DiffDateError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("entrada inválida: {0}")]
    Rejected(#[from] InputError),
}

impl DiffDateError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Rejected(_) => 2,
        }
    }
}
