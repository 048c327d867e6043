pub mod quiz;
pub mod report;

pub use quiz::{
    letter_to_position, AnswerEntry, AnswerOption, AnswerSet, ControlRef, Question, QuizSnapshot,
};
pub use report::{ApplyOutcome, ApplyOutcomeKind, ApplyReport};
