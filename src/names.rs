use std::time::Duration;

pub const QUIZ_URL: &str = "/";
pub const SUBMIT_NAME_URL: &str = "/quiz/name";
pub const SELECT_PATH_URL: &str = "/quiz/segment";
pub const SUBMIT_ANSWER_URL: &str = "/quiz/answer";
pub const RESULTS_URL: &str = "/results";
pub const RESULTS_SUBSCRIBE_URL: &str = "/results/subscribe";
pub const RESULTS_NEWSLETTER_URL: &str = "/results/newsletter";
pub const LEARNING_PATH_URL: &str = "/learning-path";
pub const API_INTAKE_URL: &str = "/api/intake";
pub const API_SUBSCRIBE_URL: &str = "/api/subscribe";

pub fn results_url(id: &str) -> String {
    format!("{RESULTS_URL}?{ID_PARAM}={id}")
}

pub fn learning_path_url(id: &str) -> String {
    format!("{LEARNING_PATH_URL}?{ID_PARAM}={id}")
}

// Query parameters
pub const ID_PARAM: &str = "id";

// Quiz defaults
pub const DEFAULT_NAME: &str = "Friend";
pub const LOADING_DELAY: Duration = Duration::from_secs(3);

// Learning path countdown
pub const COUNTDOWN_START_COOKIE_NAME: &str = "_lp_ts";
pub const COUNTDOWN_DURATION_COOKIE_NAME: &str = "_lp_td";
pub const COUNTDOWN_DURATION_SECS: u64 = 299;

// Outbound collaborators
pub const BEEHIIV_API_BASE: &str = "https://api.beehiiv.com/v2";
/// Where newsletter-only signups land.
pub const WELCOME_URL: &str = "https://akarisocial.com/welcome";
pub const MAX_EMAIL_LENGTH: usize = 254;
