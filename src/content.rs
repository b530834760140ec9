//! Per-path results and learning-path content, and the answer-driven
//! personalization built on top of it.

use crate::{catalog::Path, codec::AnswerSet};

pub struct PathResult {
    pub path: Path,
    /// Bottleneck type shown as the headline of the results page.
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub insights: &'static [&'static str],
}

pub struct LearningPath {
    pub headline: &'static str,
    /// `{name}` is replaced with the visitor's first name.
    pub description: &'static str,
    pub focus: &'static str,
    pub goal: &'static str,
    pub course_url: &'static str,
}

impl LearningPath {
    pub fn description_for(&self, name: &str) -> String {
        self.description.replace("{name}", name)
    }
}

static PATH_A_RESULT: PathResult = PathResult {
    path: Path::A,
    title: "The Emerging Builder",
    subtitle: "You have the drive, you need a clear system",
    description: "You're early in your web design journey. Skills are growing, but without a focused plan every tutorial pulls you in a new direction.",
    tags: &["Beginner", "Self-taught", "Ready to focus"],
    insights: &[
        "A single, structured curriculum will beat a dozen scattered tutorials",
        "Shipping small real projects builds confidence faster than more theory",
        "Your first paying clients come from a portfolio, not from certificates",
    ],
};

static PATH_B_RESULT: PathResult = PathResult {
    path: Path::B,
    title: "The Scaling Founder",
    subtitle: "Your product is ahead of your brand",
    description: "You're building something real, but the way it looks and reads online doesn't yet match where you're taking it.",
    tags: &["Founder", "Brand gap", "Growth stage"],
    insights: &[
        "Investors and customers judge credibility in seconds",
        "A coherent identity makes every later design decision cheaper",
        "Your website should do the selling while you build",
    ],
};

static PATH_C_RESULT: PathResult = PathResult {
    path: Path::C,
    title: "The Visual Creator",
    subtitle: "Your craft is slowed down by your asset workflow",
    description: "You know what good looks like. The hours go into finding, fixing and re-making the visuals around your designs.",
    tags: &["Designer", "Asset heavy", "Speed seeker"],
    insights: &[
        "Consolidating your sources removes hours of weekly searching",
        "Purpose-built AI beats generic generators for web visuals",
        "A consistent visual library keeps every project on brand",
    ],
};

pub fn path_result(path: Path) -> &'static PathResult {
    match path {
        Path::A => &PATH_A_RESULT,
        Path::B => &PATH_B_RESULT,
        Path::C => &PATH_C_RESULT,
    }
}

static PATH_A_LEARNING: LearningPath = LearningPath {
    headline: "Your learning path is ready",
    description: "{name}, here's the step-by-step route from scattered learning to your first confident client projects.",
    focus: "Core skills with real projects",
    goal: "Your first steady design income",
    course_url: "https://logiaweb.net/#pricing",
};

static PATH_B_LEARNING: LearningPath = LearningPath {
    headline: "Your brand roadmap is ready",
    description: "{name}, here's how to close the gap between what you're building and how the world sees it.",
    focus: "Identity, website and positioning",
    goal: "A brand that matches your ambition",
    course_url: "https://cal.com/adrien-ninet/founder-qualification-call",
};

static PATH_C_LEARNING: LearningPath = LearningPath {
    headline: "Your creative workflow is ready",
    description: "{name}, here's how to spend your time designing instead of hunting for assets.",
    focus: "One workflow for every visual",
    goal: "Production-ready visuals, faster",
    course_url: "https://limora.ai/",
};

pub fn learning_path(path: Path) -> &'static LearningPath {
    match path {
        Path::A => &PATH_A_LEARNING,
        Path::B => &PATH_B_LEARNING,
        Path::C => &PATH_C_LEARNING,
    }
}

/// Insight keyed by (question id, answer value).
static ANSWER_INSIGHTS: &[(&str, &str, &str)] = &[
    ("Q1A", "just_starting", "At the very start, one clear skill stack matters more than anything else"),
    ("Q1A", "some_traction", "You've proven people will pay you; now it's about repeatable results"),
    ("Q1A", "unsure_growth", "Growth from here comes from positioning, not from more hours"),
    ("Q2A", "not_confident", "Confidence follows evidence: a few finished projects will change how you see your work"),
    ("Q2A", "no_focus", "Picking one niche will cut your learning list in half"),
    ("Q2A", "overwhelmed", "You need one trusted source instead of ten competing ones"),
    ("Q3A", "scattered", "A linear curriculum stops the tutorial hopping"),
    ("Q3A", "consume_no_apply", "Build-along projects turn what you watch into what you can do"),
    ("Q3A", "second_guess", "Feedback loops with real reviewers end the second-guessing"),
    ("Q1B", "idea_only", "Starting brand work before you build saves a costly redo later"),
    ("Q1B", "amateur_brand", "Your product deserves a brand that signals its quality"),
    ("Q1B", "preparing_launch", "A launch-ready presence multiplies the impact of your announcement"),
    ("Q2B", "dont_know_start", "A short strategy sprint gives you the starting point you're missing"),
    ("Q2B", "brand_mismatch", "Closing the ambition gap starts with a sharper story"),
    ("Q2B", "need_premium", "Investors read polish as execution ability"),
    ("Q3B", "brand_identity", "A full identity system keeps every touchpoint consistent"),
    ("Q3B", "converting_website", "Your site should be built around one conversion goal"),
    ("Q3B", "full_package", "One team across strategy, brand and product avoids mixed messages"),
    ("Q1C", "hunting_assets", "A single asset source gives you back hours every week"),
    ("Q1C", "ai_unusable", "AI trained for web visuals produces usable results the first time"),
    ("Q1C", "inconsistent_visuals", "Style presets make consistency automatic"),
    ("Q2C", "platform_hopping", "Fewer tools means less context switching"),
    ("Q2C", "tweaking_ai", "Better starting outputs remove most of the tweaking"),
    ("Q2C", "redoing_assets", "Brand-aware generation stops the redo cycle"),
    ("Q3C", "one_place", "A unified library is the fastest win for your workflow"),
    ("Q3C", "web_design_ai", "Web-first AI fits straight into your design process"),
    ("Q3C", "faster_path", "Shortening the path to production visuals compounds on every project"),
];

const MIN_INSIGHTS: usize = 3;
const MAX_INSIGHTS: usize = 4;

/// Answer-specific insights in question order, padded with the path's default
/// insights up to three and capped at four.
pub fn personalized_insights(path: Path, answers: &AnswerSet) -> Vec<&'static str> {
    let mut insights: Vec<&'static str> = path
        .questions()
        .iter()
        .filter_map(|q| {
            let answer = answers.get(q.id)?;
            ANSWER_INSIGHTS
                .iter()
                .find(|(id, value, _)| *id == q.id && *value == answer.as_str())
                .map(|(_, _, insight)| *insight)
        })
        .collect();

    for default in path_result(path).insights {
        if insights.len() >= MIN_INSIGHTS {
            break;
        }
        if !insights.contains(default) {
            insights.push(default);
        }
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    pub subject: &'static str,
    pub value: u8,
}

fn answer_of<'a>(answers: &'a AnswerSet, id: &str) -> &'a str {
    answers.get(id).map(String::as_str).unwrap_or_default()
}

/// Score of the recorded answer in `table`, or `otherwise`.
fn score(answers: &AnswerSet, id: &str, table: &[(&str, u8)], otherwise: u8) -> u8 {
    let answer = answer_of(answers, id);
    table
        .iter()
        .find(|(value, _)| *value == answer)
        .map_or(otherwise, |(_, score)| *score)
}

/// Six-axis capability profile derived from the answers.
pub fn capability_profile(path: Path, answers: &AnswerSet) -> [Capability; 6] {
    let answer = |id| answer_of(answers, id);
    let pick = |id, table: &[(&str, u8)], otherwise| score(answers, id, table, otherwise);

    let [technical, motivation, time, experience, focus, tools] = match path {
        Path::A => [
            pick("Q1A", &[("just_starting", 40), ("some_traction", 60)], 70),
            pick("Q2A", &[("not_confident", 50), ("overwhelmed", 55)], 65),
            60,
            pick("Q1A", &[("just_starting", 30), ("some_traction", 50)], 65),
            if answer("Q2A") == "no_focus" {
                40
            } else if answer("Q3A") == "scattered" {
                45
            } else {
                70
            },
            pick("Q3A", &[("scattered", 40), ("consume_no_apply", 55)], 65),
        ],
        Path::B => [
            65,
            75,
            60,
            pick("Q1B", &[("idea_only", 40), ("amateur_brand", 60)], 75),
            pick("Q2B", &[("dont_know_start", 45)], 70),
            pick("Q1B", &[("idea_only", 35), ("amateur_brand", 55)], 70),
        ],
        Path::C => [
            75,
            70,
            if answer("Q1C") == "hunting_assets" {
                50
            } else if answer("Q2C") == "platform_hopping" {
                55
            } else {
                65
            },
            75,
            pick("Q1C", &[("inconsistent_visuals", 55)], 70),
            if answer("Q1C") == "ai_unusable" {
                50
            } else if answer("Q2C") == "tweaking_ai" {
                55
            } else {
                70
            },
        ],
    };

    [
        Capability { subject: "Technical", value: technical },
        Capability { subject: "Motivation", value: motivation },
        Capability { subject: "Time", value: time },
        Capability { subject: "Experience", value: experience },
        Capability { subject: "Focus", value: focus },
        Capability { subject: "Tools", value: tools },
    ]
}
