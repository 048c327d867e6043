pub mod applier;
pub mod extractor;
pub mod resolver;

pub use applier::apply;
pub use extractor::{decode_to_plain_text, extract};
pub use resolver::{parse_answer_set, AnswerResolver, HttpResolver};
