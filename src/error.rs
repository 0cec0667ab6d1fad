use thiserror::Error;

/// Errores al cargar o validar el catálogo embebido
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("quiz `{0}` has no questions")]
    EmptyQuiz(String),
    #[error("question `{question}` points at option {index} but only has {options} options")]
    CorrectAnswerOutOfRange {
        question: String,
        index: usize,
        options: usize,
    },
    #[error("quiz `{quiz}` references unknown video `{video}`")]
    UnknownVideo { quiz: String, video: String },
    #[error("duplicate id `{0}` in catalog")]
    DuplicateId(String),
    #[error("video `{video}` has more than one quiz (`{first}` and `{second}`)")]
    DuplicateQuizForVideo {
        video: String,
        first: String,
        second: String,
    },
    #[error("badge definition with empty id")]
    EmptyBadgeId,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("browser storage unavailable")]
    Unavailable,
    #[error("could not serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("option {index} is out of range ({options} options)")]
    OptionOutOfRange { index: usize, options: usize },
    #[error("the current question has no answer yet")]
    Unanswered,
    #[error("the quiz is already completed")]
    AlreadyCompleted,
}

/// Errores de validación: bloquean la acción y se enseñan al usuario
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please pick who is learning first.")]
    MissingAgeGroup,
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your age.")]
    MissingAge,
    #[error("Age must be a whole number.")]
    InvalidAge,
    #[error("Age must be between {min} and {max}.")]
    AgeOutOfRange { min: u32, max: u32 },
    #[error("Please upload an image smaller than {limit_mb}MB.")]
    AvatarTooLarge { limit_mb: usize },
}
