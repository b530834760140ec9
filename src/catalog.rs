//! Static question catalog.
//!
//! The position of an option inside its question is its encoded form, so
//! options must never be reordered once tokens have been handed out, and no
//! question may carry ten or more options.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Every path asks exactly this many questions.
pub const TOTAL_PATH_QUESTIONS: usize = 3;

/// One of the three mutually exclusive quiz tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Path {
    #[default]
    A,
    B,
    C,
}

impl Path {
    pub const ALL: [Path; 3] = [Path::A, Path::B, Path::C];

    pub fn as_str(self) -> &'static str {
        match self {
            Path::A => "A",
            Path::B => "B",
            Path::C => "C",
        }
    }

    /// Ordered questions asked on this path.
    pub fn questions(self) -> &'static [Question; TOTAL_PATH_QUESTIONS] {
        match self {
            Path::A => &PATH_A_QUESTIONS,
            Path::B => &PATH_B_QUESTIONS,
            Path::C => &PATH_C_QUESTIONS,
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPath(pub String);

impl fmt::Display for UnknownPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown path '{}'", self.0)
    }
}

impl std::error::Error for UnknownPath {}

impl FromStr for Path {
    type Err = UnknownPath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Path::A),
            "B" => Ok(Path::B),
            "C" => Ok(Path::C),
            other => Err(UnknownPath(other.to_string())),
        }
    }
}

/// Which track a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Path(Path),
    Global,
}

#[derive(Debug, PartialEq, Eq)]
pub struct QuizOption {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub scope: Scope,
    pub prompt: &'static str,
    pub options: &'static [QuizOption],
}

impl Question {
    /// Ordinal of the option carrying `value`.
    pub fn option_index(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }

    pub fn option(&self, index: usize) -> Option<&'static QuizOption> {
        self.options.get(index)
    }
}

/// The path-agnostic question that assigns a visitor to a [`Path`].
/// `{name}` in the prompt is replaced with the visitor's first name.
pub static SEGMENT_QUESTION: Question = Question {
    id: "segment",
    scope: Scope::Global,
    prompt: "Nice to meet you, {name}! Which of these sounds most like you?",
    options: &[
        QuizOption {
            label: "I'm new to web design and want to start earning with it",
            value: "A",
        },
        QuizOption {
            label: "I'm a founder who needs a brand and website that match my ambition",
            value: "B",
        },
        QuizOption {
            label: "I'm a designer who wants a faster way to produce visual assets",
            value: "C",
        },
    ],
};

static PATH_A_QUESTIONS: [Question; TOTAL_PATH_QUESTIONS] = [
    Question {
        id: "Q1A",
        scope: Scope::Path(Path::A),
        prompt: "Where are you with your design income right now?",
        options: &[
            QuizOption {
                label: "Just starting ($0-$1k/mo)",
                value: "just_starting",
            },
            QuizOption {
                label: "Some traction ($1k-$3k/mo)",
                value: "some_traction",
            },
            QuizOption {
                label: "Earning but unsure how to grow ($3k-$8k/mo)",
                value: "unsure_growth",
            },
        ],
    },
    Question {
        id: "Q2A",
        scope: Scope::Path(Path::A),
        prompt: "What holds you back the most?",
        options: &[
            QuizOption {
                label: "I'm not confident in my skills",
                value: "not_confident",
            },
            QuizOption {
                label: "I don't know what to focus on",
                value: "no_focus",
            },
            QuizOption {
                label: "I'm overwhelmed by conflicting advice",
                value: "overwhelmed",
            },
        ],
    },
    Question {
        id: "Q3A",
        scope: Scope::Path(Path::A),
        prompt: "How do you usually learn?",
        options: &[
            QuizOption {
                label: "I jump between tutorials",
                value: "scattered",
            },
            QuizOption {
                label: "I consume a lot but rarely apply it",
                value: "consume_no_apply",
            },
            QuizOption {
                label: "I build, then second-guess everything",
                value: "second_guess",
            },
        ],
    },
];

static PATH_B_QUESTIONS: [Question; TOTAL_PATH_QUESTIONS] = [
    Question {
        id: "Q1B",
        scope: Scope::Path(Path::B),
        prompt: "Where is your company today?",
        options: &[
            QuizOption {
                label: "I have an idea, nothing built yet",
                value: "idea_only",
            },
            QuizOption {
                label: "I have a product or MVP, but the brand feels amateur",
                value: "amateur_brand",
            },
            QuizOption {
                label: "I'm preparing for fundraising or launch",
                value: "preparing_launch",
            },
        ],
    },
    Question {
        id: "Q2B",
        scope: Scope::Path(Path::B),
        prompt: "What frustrates you most about your brand?",
        options: &[
            QuizOption {
                label: "I don't know where to start",
                value: "dont_know_start",
            },
            QuizOption {
                label: "It doesn't match my ambition",
                value: "brand_mismatch",
            },
            QuizOption {
                label: "I need a premium presence for investors",
                value: "need_premium",
            },
        ],
    },
    Question {
        id: "Q3B",
        scope: Scope::Path(Path::B),
        prompt: "What would move the needle right now?",
        options: &[
            QuizOption {
                label: "A complete brand identity",
                value: "brand_identity",
            },
            QuizOption {
                label: "A website that converts",
                value: "converting_website",
            },
            QuizOption {
                label: "The full package: strategy, brand, product and website",
                value: "full_package",
            },
        ],
    },
];

static PATH_C_QUESTIONS: [Question; TOTAL_PATH_QUESTIONS] = [
    Question {
        id: "Q1C",
        scope: Scope::Path(Path::C),
        prompt: "Where does most of your asset time go?",
        options: &[
            QuizOption {
                label: "Hunting for stock images, icons and illustrations",
                value: "hunting_assets",
            },
            QuizOption {
                label: "Fighting AI tools that produce unusable results",
                value: "ai_unusable",
            },
            QuizOption {
                label: "Keeping visuals consistent",
                value: "inconsistent_visuals",
            },
        ],
    },
    Question {
        id: "Q2C",
        scope: Scope::Path(Path::C),
        prompt: "Which of these sounds like your week?",
        options: &[
            QuizOption {
                label: "Searching across multiple platforms",
                value: "platform_hopping",
            },
            QuizOption {
                label: "Tweaking generic AI outputs",
                value: "tweaking_ai",
            },
            QuizOption {
                label: "Re-doing assets that don't match the brand",
                value: "redoing_assets",
            },
        ],
    },
    Question {
        id: "Q3C",
        scope: Scope::Path(Path::C),
        prompt: "What would help you most?",
        options: &[
            QuizOption {
                label: "One place for all my assets",
                value: "one_place",
            },
            QuizOption {
                label: "AI that is designed for web design",
                value: "web_design_ai",
            },
            QuizOption {
                label: "A faster path to production-ready visuals",
                value: "faster_path",
            },
        ],
    },
];

/// Segmentation labels sent to the newsletter platform, keyed by
/// (question id, option value). Independent of the on-screen labels.
static NEWSLETTER_LABELS: &[(&str, &str, &str)] = &[
    ("Q1A", "just_starting", "Just starting ($0-$1k/mo)"),
    ("Q1A", "some_traction", "Some traction ($1k-$3k/mo)"),
    ("Q1A", "unsure_growth", "Earning but unsure how to grow ($3k-$8k/mo)"),
    ("Q2A", "not_confident", "Not confident in skills"),
    ("Q2A", "no_focus", "Don't know what to focus on"),
    ("Q2A", "overwhelmed", "Overwhelmed by conflicting advice"),
    ("Q3A", "scattered", "Scattered - jumps between tutorials"),
    ("Q3A", "consume_no_apply", "Consumes but doesn't apply"),
    ("Q3A", "second_guess", "Second guesses work constantly"),
    ("Q1B", "idea_only", "Has idea, nothing built yet"),
    ("Q1B", "amateur_brand", "Has product/MVP, brand feels amateur"),
    ("Q1B", "preparing_launch", "Preparing for fundraising or launch"),
    ("Q2B", "dont_know_start", "Doesn't know where to start with branding"),
    ("Q2B", "brand_mismatch", "Brand doesn't match ambition"),
    ("Q2B", "need_premium", "Needs premium presence for investors"),
    ("Q3B", "brand_identity", "Needs complete brand identity"),
    ("Q3B", "converting_website", "Needs converting website"),
    ("Q3B", "full_package", "Needs full package (strategy, brand, product, website)"),
    ("Q1C", "hunting_assets", "Hunting for stock images/icons/illustrations"),
    ("Q1C", "ai_unusable", "AI tools produce unusable results"),
    ("Q1C", "inconsistent_visuals", "Maintaining visual consistency"),
    ("Q2C", "platform_hopping", "Searching across multiple platforms"),
    ("Q2C", "tweaking_ai", "Tweaking generic AI outputs"),
    ("Q2C", "redoing_assets", "Re-doing assets that don't match brand"),
    ("Q3C", "one_place", "Wants one place for all assets"),
    ("Q3C", "web_design_ai", "Wants AI designed for web design"),
    ("Q3C", "faster_path", "Wants faster path to production-ready visuals"),
];

/// Segmentation label for a recorded answer, falling back to the raw value.
pub fn newsletter_label<'a>(question_id: &str, value: &'a str) -> &'a str {
    NEWSLETTER_LABELS
        .iter()
        .find(|(id, option, _)| *id == question_id && *option == value)
        .map_or(value, |(_, _, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_path_has_three_questions_with_single_digit_options() {
        for path in Path::ALL {
            let questions = path.questions();
            assert_eq!(questions.len(), TOTAL_PATH_QUESTIONS);
            for q in questions {
                assert_eq!(q.scope, Scope::Path(path));
                assert!(!q.options.is_empty());
                assert!(q.options.len() <= 9, "{} has too many options", q.id);
            }
        }
    }

    #[test]
    fn option_values_are_unique_within_a_question() {
        for q in Path::ALL.iter().flat_map(|p| p.questions().iter()) {
            for (i, opt) in q.options.iter().enumerate() {
                assert_eq!(q.option_index(opt.value), Some(i));
            }
        }
    }

    #[test]
    fn segment_options_name_the_paths() {
        let parsed: Vec<Path> = SEGMENT_QUESTION
            .options
            .iter()
            .map(|o| o.value.parse().unwrap())
            .collect();
        assert_eq!(parsed, Path::ALL);
    }

    #[test]
    fn path_parse_rejects_lowercase_and_unknown() {
        assert_eq!("B".parse::<Path>(), Ok(Path::B));
        assert!("b".parse::<Path>().is_err());
        assert!("D".parse::<Path>().is_err());
        assert!("".parse::<Path>().is_err());
    }

    #[test]
    fn newsletter_labels_are_short_segments() {
        assert_eq!(newsletter_label("Q1A", "just_starting"), "Just starting ($0-$1k/mo)");
        assert_eq!(newsletter_label("Q1B", "idea_only"), "Has idea, nothing built yet");
        assert_eq!(newsletter_label("Q1B", "mystery"), "mystery");
        assert_eq!(newsletter_label("Q9Z", "x"), "x");
    }

    #[test]
    fn every_path_option_has_a_newsletter_label() {
        for q in Path::ALL.iter().flat_map(|p| p.questions().iter()) {
            for opt in q.options {
                assert!(
                    NEWSLETTER_LABELS
                        .iter()
                        .any(|(id, value, _)| *id == q.id && *value == opt.value),
                    "{}/{} has no newsletter label",
                    q.id,
                    opt.value
                );
            }
        }
        assert_eq!(NEWSLETTER_LABELS.len(), 27);
    }
}
