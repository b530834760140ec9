//! Quiz progression.
//!
//! The session lives with the visitor: every step form carries a
//! [`SessionSnapshot`] back, the server restores a [`QuizSession`] from it,
//! applies a single event and renders whatever step the session is now in.

mod progress;

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{Path, Question, TOTAL_PATH_QUESTIONS},
    codec::{decode_answers, encode_answers, encode_quiz_data, AnswerSet},
};

pub use progress::Progress;

/// Name and segmentation come before the path questions.
const LEADING_STEPS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizStep {
    #[default]
    Name,
    Segment,
    Questions,
    Loading,
}

impl QuizStep {
    pub fn as_str(self) -> &'static str {
        match self {
            QuizStep::Name => "name",
            QuizStep::Segment => "segment",
            QuizStep::Questions => "questions",
            QuizStep::Loading => "loading",
        }
    }
}

/// A lead forwarded to the intake webhook once a visitor picks a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub email: String,
    pub name: String,
    pub answer: String,
}

/// Intake segment label for a path.
pub fn intake_answer(path: Path) -> &'static str {
    match path {
        Path::A => "beginner",
        Path::B => "solo operator",
        Path::C => "experience designer",
    }
}

/// What an event did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Moved on to the next step or question.
    Advanced,
    /// A path was chosen. The lead, when there is one, is to be sent without
    /// waiting for the outcome.
    Segmented { lead: Option<Lead> },
    /// The last answer was recorded and the results identifier computed.
    Completed { results_id: String },
    /// The event did not apply to the current step or lacked input; nothing
    /// changed.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizSession {
    step: QuizStep,
    first_name: String,
    email: String,
    referral: String,
    selected_path: Option<Path>,
    current_question_index: usize,
    answers: AnswerSet,
    results_id: Option<String>,
}

impl QuizSession {
    /// A fresh session, pre-filled from the inbound link.
    pub fn new(email: Option<String>, referral: Option<String>) -> Self {
        Self {
            email: email.unwrap_or_default(),
            referral: referral.unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn step(&self) -> QuizStep {
        self.step
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn referral(&self) -> &str {
        &self.referral
    }

    pub fn selected_path(&self) -> Option<Path> {
        self.selected_path
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Identifier handed to the results page, set once the last question is
    /// answered.
    pub fn results_id(&self) -> Option<&str> {
        self.results_id.as_deref()
    }

    /// The question currently asked, if the session is on a path question.
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.step != QuizStep::Questions {
            return None;
        }
        self.selected_path?
            .questions()
            .get(self.current_question_index)
    }

    pub fn progress(&self) -> Progress {
        let total = LEADING_STEPS + TOTAL_PATH_QUESTIONS;
        let current = match self.step {
            QuizStep::Name => 0,
            QuizStep::Segment => 1,
            QuizStep::Questions => LEADING_STEPS + self.current_question_index,
            QuizStep::Loading => total,
        };
        Progress { current, total }
    }

    /// Records the visitor's name and email. Both are trimmed and required.
    pub fn submit_name(&mut self, name: &str, email: &str) -> Transition {
        let (name, email) = (name.trim(), email.trim());
        if self.step != QuizStep::Name || name.is_empty() || email.is_empty() {
            return Transition::Ignored;
        }

        self.first_name = name.to_string();
        self.email = email.to_string();
        self.step = QuizStep::Segment;
        Transition::Advanced
    }

    /// Assigns the visitor to a path and starts its questions.
    pub fn select_path(&mut self, path: Path) -> Transition {
        if self.step != QuizStep::Segment {
            return Transition::Ignored;
        }

        self.selected_path = Some(path);
        self.current_question_index = 0;
        self.step = QuizStep::Questions;

        let lead = (!self.email.is_empty() && !self.first_name.is_empty()).then(|| Lead {
            email: self.email.clone(),
            name: self.first_name.clone(),
            answer: intake_answer(path).to_string(),
        });
        Transition::Segmented { lead }
    }

    /// Records the answer to the current question.
    ///
    /// Answering the last question computes the results identifier exactly
    /// once and moves the session to [`QuizStep::Loading`]; later answers are
    /// ignored.
    pub fn answer(&mut self, question_id: &str, value: &str) -> Transition {
        let (Some(path), Some(question)) = (self.selected_path, self.current_question()) else {
            return Transition::Ignored;
        };
        if question.id != question_id || question.option_index(value).is_none() {
            return Transition::Ignored;
        }

        self.answers
            .insert(question_id.to_string(), value.to_string());
        self.current_question_index += 1;

        if self.current_question_index < TOTAL_PATH_QUESTIONS {
            return Transition::Advanced;
        }

        let email = (!self.email.is_empty()).then_some(self.email.as_str());
        let results_id = encode_quiz_data(&self.first_name, path, &self.answers, email);
        self.results_id = Some(results_id.clone());
        self.step = QuizStep::Loading;
        Transition::Completed { results_id }
    }

    /// Hidden-field form of the session.
    pub fn snapshot(&self) -> SessionSnapshot {
        let answers = self
            .selected_path
            .map(|path| {
                encode_answers(path, &self.answers)
                    .chars()
                    .take(self.current_question_index)
                    .collect()
            })
            .unwrap_or_default();

        SessionSnapshot {
            step: self.step,
            first_name: self.first_name.clone(),
            email: self.email.clone(),
            referral: self.referral.clone(),
            path: self.selected_path,
            index: self.current_question_index,
            answers,
        }
    }

    /// Rebuilds a session from a snapshot sent back by the browser.
    ///
    /// A snapshot claiming to be past segmentation without a path drops back
    /// to segmentation, and the question index is clamped to the path.
    pub fn restore(snapshot: SessionSnapshot) -> Self {
        let SessionSnapshot {
            mut step,
            first_name,
            email,
            referral,
            path,
            index,
            answers,
        } = snapshot;

        if matches!(step, QuizStep::Questions | QuizStep::Loading) {
            if path.is_none() {
                step = QuizStep::Segment;
            } else if step == QuizStep::Loading {
                // a finished session is never posted back; replay the last question
                step = QuizStep::Questions;
            }
        }

        let (selected_path, current_question_index, answers) = match (step, path) {
            (QuizStep::Questions, Some(path)) => {
                let index = index.min(TOTAL_PATH_QUESTIONS - 1);
                let digits: String = answers.chars().take(index).collect();
                (Some(path), index, decode_answers(path, &digits))
            }
            _ => (None, 0, AnswerSet::new()),
        };

        Self {
            step,
            first_name,
            email,
            referral,
            selected_path,
            current_question_index,
            answers,
            results_id: None,
        }
    }
}

/// The session as carried between steps in hidden form fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub step: QuizStep,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub referral: String,
    #[serde(default, deserialize_with = "lenient_path")]
    pub path: Option<Path>,
    #[serde(default, deserialize_with = "deserialize_string_or_usize")]
    pub index: usize,
    /// Answer digits for the questions already answered.
    #[serde(default)]
    pub answers: String,
}

/// Hidden inputs always arrive as strings, and flattened form bodies keep
/// them that way.
fn deserialize_string_or_usize<'de, D: serde::Deserializer<'de>>(d: D) -> Result<usize, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = usize;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("number or numeric string")
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<usize, E> {
            usize::try_from(v).map_err(E::custom)
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<usize, E> {
            usize::try_from(v).map_err(E::custom)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<usize, E> {
            if v.is_empty() {
                return Ok(0);
            }
            v.parse().map_err(E::custom)
        }
    }
    d.deserialize_any(Vis)
}

fn lenient_path<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Option<Path>, D::Error> {
    let raw = Option::<String>::deserialize(d)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}
