use once_cell::sync::Lazy;
use regex::Regex;
use shared_types::JobState;
use url::Url;

static TRAILING_DIGITS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+$").expect("trailing digits regex"));

/// Parses `text` as an absolute URL. Any scheme the URL grammar accepts is allowed.
pub fn parse_absolute_url(text: &str) -> Option<Url> {
    Url::parse(text).ok()
}

pub fn is_url(text: &str) -> bool {
    parse_absolute_url(text).is_some()
}

pub fn is_linkedin_host(url: &Url) -> bool {
    url.host_str()
        .map(|host| host.to_ascii_lowercase().contains("linkedin.com"))
        .unwrap_or(false)
}

pub fn is_linkedin_profile(url: &Url) -> bool {
    is_linkedin_host(url) && url.path().contains("/in/")
}

/// Matches a whole line against the job state tokens, ignoring case.
pub fn match_job_state(text: &str) -> Option<JobState> {
    text.parse().ok()
}

/// Turns a profile URL such as `.../in/jane-doe-42/` into `Jane Doe`.
pub fn linkedin_display_name(url: &Url) -> Option<String> {
    let (_, rest) = url.path().split_once("/in/")?;
    let slug = rest.split('/').next()?;
    let slug = TRAILING_DIGITS_RE.replace(slug, "");

    let name = slug
        .split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keeps ASCII letters, digits and spaces, then trims.
pub fn strip_to_alphanumeric(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string()
}
