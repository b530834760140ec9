use crate::catalog::Path;

use super::AnswerSet;

/// Encodes the answers for `path` as one digit per question, in catalog order.
///
/// A missing answer, or one that matches no option, is written as `0`.
pub fn encode_answers(path: Path, answers: &AnswerSet) -> String {
    path.questions()
        .iter()
        .map(|q| {
            let index = answers
                .get(q.id)
                .and_then(|value| q.option_index(value))
                .unwrap_or(0);
            char::from_digit(index as u32, 10).unwrap_or('0')
        })
        .collect()
}

/// Decodes a digit string produced by [`encode_answers`].
///
/// Positions that are not digits, or that point past the question's options,
/// are left unanswered. A short string leaves the trailing questions
/// unanswered and extra digits are ignored.
pub fn decode_answers(path: Path, encoded: &str) -> AnswerSet {
    path.questions()
        .iter()
        .zip(encoded.chars())
        .filter_map(|(q, digit)| {
            let option = digit
                .to_digit(10)
                .and_then(|index| q.option(index as usize))?;
            Some((q.id.to_string(), option.value.to_string()))
        })
        .collect()
}
