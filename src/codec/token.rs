use base64::{
    alphabet,
    engine::{general_purpose::URL_SAFE_NO_PAD, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use color_eyre::{eyre::WrapErr, Result};
use serde::Serialize;

use crate::{catalog::Path, names};

use super::{decode_answers, encode_answers, AnswerSet};

/// Separates the fields of a token before it is base64 encoded.
pub const DELIMITER: &str = ".";

/// Standard alphabet decoder that tolerates missing padding and non-zero
/// trailing bits, so any well-formed base64 body is accepted.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Everything a results page knows about a visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizData {
    pub name: String,
    pub path: Path,
    pub answers: AnswerSet,
    pub email: String,
}

impl Default for QuizData {
    fn default() -> Self {
        Self {
            name: names::DEFAULT_NAME.to_string(),
            path: Path::default(),
            answers: AnswerSet::new(),
            email: String::new(),
        }
    }
}

/// Packs a completed quiz into a URL-safe token.
///
/// Layout before encoding is `name.path.digits.email`, with an empty email
/// field when none was given.
pub fn encode_quiz_data(name: &str, path: Path, answers: &AnswerSet, email: Option<&str>) -> String {
    let digits = encode_answers(path, answers);
    let data = [name, path.as_str(), digits.as_str(), email.unwrap_or_default()].join(DELIMITER);
    URL_SAFE_NO_PAD.encode(data.as_bytes())
}

/// Unpacks a token produced by [`encode_quiz_data`].
///
/// Never fails: an empty or undecodable token yields [`QuizData::default`], an
/// unknown path becomes [`Path::A`] and an empty name becomes the default name.
pub fn decode_quiz_data(token: &str) -> QuizData {
    if token.is_empty() {
        return QuizData::default();
    }

    match unpack(token) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("failed to decode quiz data: {e:#}");
            QuizData::default()
        }
    }
}

fn unpack(token: &str) -> Result<QuizData> {
    let mut standard: String = token
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while standard.len() % 4 != 0 {
        standard.push('=');
    }

    let bytes = LENIENT_STANDARD
        .decode(standard.as_bytes())
        .wrap_err("invalid base64")?;
    let data = String::from_utf8(bytes).wrap_err("invalid utf-8")?;

    let mut fields = data.split(DELIMITER);
    let name = fields.next().unwrap_or_default();
    let path_raw = fields.next().unwrap_or_default();
    let digits = fields.next().unwrap_or_default();
    // an email holding the delimiter spans every remaining field
    let email = fields.collect::<Vec<_>>().join(DELIMITER);

    let path = path_raw.parse::<Path>().unwrap_or_default();
    let answers = decode_answers(path, digits);

    Ok(QuizData {
        name: if name.is_empty() {
            names::DEFAULT_NAME.to_string()
        } else {
            name.to_string()
        },
        path,
        answers,
        email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> AnswerSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn raw_token(data: &str) -> String {
        URL_SAFE_NO_PAD.encode(data.as_bytes())
    }

    #[test]
    fn empty_token_yields_defaults() {
        let data = decode_quiz_data("");
        assert_eq!(data.name, "Friend");
        assert_eq!(data.path, Path::A);
        assert!(data.answers.is_empty());
        assert_eq!(data.email, "");
    }

    #[test]
    fn garbage_token_yields_defaults() {
        assert_eq!(decode_quiz_data("not-valid-base64url-$$$"), QuizData::default());
        assert_eq!(decode_quiz_data("a"), QuizData::default());
    }

    #[test]
    fn invalid_utf8_yields_defaults() {
        let token = URL_SAFE_NO_PAD.encode([0xff, 0xfe, b'.', b'A']);
        assert_eq!(decode_quiz_data(&token), QuizData::default());
    }

    #[test]
    fn decode_failures_name_the_broken_layer() {
        let err = unpack("not-valid-base64url-$$$").unwrap_err();
        assert_eq!(err.to_string(), "invalid base64");

        let token = URL_SAFE_NO_PAD.encode([0xff, 0xfe, b'.', b'A']);
        let err = unpack(&token).unwrap_err();
        assert_eq!(err.to_string(), "invalid utf-8");
        assert!(format!("{err:#}").starts_with("invalid utf-8: "));
    }

    #[test]
    fn token_is_url_safe_without_padding() {
        let set = answers(&[("Q1C", "ai_unusable")]);
        for name in ["Al", "Ana", "Anna", "Zoë", "José María", "李小龙"] {
            let token = encode_quiz_data(name, Path::C, &set, Some("someone+tag@example.com"));
            assert!(
                token
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                "{token} is not url safe"
            );
        }
    }

    #[test]
    fn full_session_round_trips() {
        let set = answers(&[
            ("Q1A", "unsure_growth"),
            ("Q2A", "no_focus"),
            ("Q3A", "second_guess"),
        ]);
        let token = encode_quiz_data("Zoë", Path::A, &set, Some("zoe@example"));
        let data = decode_quiz_data(&token);
        assert_eq!(data.name, "Zoë");
        assert_eq!(data.path, Path::A);
        assert_eq!(data.answers, set);
        assert_eq!(data.email, "zoe@example");
    }

    #[test]
    fn email_with_delimiters_round_trips() {
        let set = answers(&[("Q1B", "idea_only")]);
        let token = encode_quiz_data("Sam", Path::B, &set, Some("sam.smith@mail.example.co.uk"));
        assert_eq!(decode_quiz_data(&token).email, "sam.smith@mail.example.co.uk");
    }

    #[test]
    fn missing_email_decodes_empty() {
        let token = encode_quiz_data("Sam", Path::C, &AnswerSet::new(), None);
        let data = decode_quiz_data(&token);
        assert_eq!(data.email, "");
        assert_eq!(data.name, "Sam");
        assert_eq!(data.path, Path::C);
    }

    #[test]
    fn path_b_digits_decode_against_path_b_catalog() {
        let data = decode_quiz_data(&raw_token("Kim.B.120."));
        assert_eq!(
            data.answers,
            answers(&[
                ("Q1B", "amateur_brand"),
                ("Q2B", "need_premium"),
                ("Q3B", "brand_identity"),
            ])
        );
    }

    #[test]
    fn unknown_path_falls_back_to_a() {
        let data = decode_quiz_data(&raw_token("Kim.Z.2"));
        assert_eq!(data.path, Path::A);
        assert_eq!(data.answers, answers(&[("Q1A", "unsure_growth")]));
    }

    #[test]
    fn short_tokens_still_decode() {
        let data = decode_quiz_data(&raw_token("Kim"));
        assert_eq!(data.name, "Kim");
        assert_eq!(data.path, Path::A);
        assert!(data.answers.is_empty());
        assert_eq!(data.email, "");

        let data = decode_quiz_data(&raw_token("Kim.C"));
        assert_eq!(data.path, Path::C);
        assert!(data.answers.is_empty());
    }

    #[test]
    fn empty_name_becomes_default() {
        let data = decode_quiz_data(&raw_token(".B.000.x@y.z"));
        assert_eq!(data.name, "Friend");
        assert_eq!(data.path, Path::B);
        assert_eq!(data.email, "x@y.z");
    }

    #[test]
    fn padded_and_standard_alphabet_tokens_are_accepted() {
        let padded = base64::engine::general_purpose::STANDARD.encode("Jo.C.21.j@o.io");
        let data = decode_quiz_data(&padded);
        assert_eq!(data.name, "Jo");
        assert_eq!(data.path, Path::C);
        assert_eq!(data.email, "j@o.io");
    }
}
