use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("question index {index} is out of range for '{assessment}' ({count} questions)")]
    QuestionOutOfRange {
        assessment: String,
        index: usize,
        count: usize,
    },

    #[error("answer {value} is not on the response scale for question {index} of '{assessment}'")]
    AnswerOutOfRange {
        assessment: String,
        index: usize,
        value: i32,
    },

    #[error("total {total} matched no severity band for '{assessment}'")]
    BandNotFound { assessment: String, total: i32 },
}
