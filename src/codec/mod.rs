//! Compact, URL-safe encoding of a completed quiz.
//!
//! Both directions are total: encoding never fails and decoding falls back to
//! well-formed defaults instead of returning an error.

mod answers;
mod token;

use std::collections::BTreeMap;

pub use answers::{decode_answers, encode_answers};
pub use token::{decode_quiz_data, encode_quiz_data, QuizData, DELIMITER};

/// Question id to chosen option value.
pub type AnswerSet = BTreeMap<String, String>;
