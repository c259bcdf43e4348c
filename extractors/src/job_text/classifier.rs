use shared_types::JobState;
use tracing::debug;

use super::helpers::{
    is_linkedin_profile, linkedin_display_name, match_job_state, parse_absolute_url,
    strip_to_alphanumeric,
};

/// Category assigned to a non-blank input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTag {
    Email,
    JobUrl,
    LinkedinProfileUrl,
    StateKeyword,
    FreeText,
}

/// What a rule decided about a line, with the data its handler needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Any line containing `@`; only syntactically plausible addresses are kept.
    Email { accepted: bool },
    JobUrl,
    LinkedinProfile { contact_name: Option<String> },
    State(JobState),
    JobTitle,
    /// Multi-word text after stripping to letters, digits and spaces. May be empty.
    CompanyPhrase(String),
    /// Single token, kept verbatim.
    CompanyToken,
}

impl LineKind {
    pub fn tag(&self) -> LineTag {
        match self {
            LineKind::Email { .. } => LineTag::Email,
            LineKind::JobUrl => LineTag::JobUrl,
            LineKind::LinkedinProfile { .. } => LineTag::LinkedinProfileUrl,
            LineKind::State(_) => LineTag::StateKeyword,
            LineKind::JobTitle | LineKind::CompanyPhrase(_) | LineKind::CompanyToken => {
                LineTag::FreeText
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub text: String,
    pub kind: LineKind,
}

impl ClassifiedLine {
    pub fn tag(&self) -> LineTag {
        self.kind.tag()
    }
}

/// A rule inspects a trimmed line and claims it or passes.
pub type Rule = fn(&str, &[String]) -> Option<LineKind>;

/// Rules in precedence order; the first one that claims a line wins.
pub const RULES: [(&str, Rule); 4] = [
    ("email", email_rule as Rule),
    ("url", url_rule as Rule),
    ("job-state", job_state_rule as Rule),
    ("free-text", free_text_rule as Rule),
];

pub fn email_rule(line: &str, _keywords: &[String]) -> Option<LineKind> {
    if !line.contains('@') {
        return None;
    }
    let parts: Vec<&str> = line.split('@').collect();
    let accepted = parts.len() == 2 && parts[1].contains('.');
    Some(LineKind::Email { accepted })
}

pub fn url_rule(line: &str, _keywords: &[String]) -> Option<LineKind> {
    let url = parse_absolute_url(line)?;
    if is_linkedin_profile(&url) {
        Some(LineKind::LinkedinProfile {
            contact_name: linkedin_display_name(&url),
        })
    } else {
        Some(LineKind::JobUrl)
    }
}

pub fn job_state_rule(line: &str, _keywords: &[String]) -> Option<LineKind> {
    match_job_state(line).map(LineKind::State)
}

/// Keywords are expected lowercase.
pub fn free_text_rule(line: &str, keywords: &[String]) -> Option<LineKind> {
    if !line.contains(' ') {
        return Some(LineKind::CompanyToken);
    }
    let lowered = line.to_lowercase();
    if keywords.iter().any(|keyword| lowered.contains(keyword.as_str())) {
        Some(LineKind::JobTitle)
    } else {
        Some(LineKind::CompanyPhrase(strip_to_alphanumeric(line)))
    }
}

/// Classifies one raw line. Blank lines carry no tag.
pub fn classify_line(line: &str, keywords: &[String]) -> Option<ClassifiedLine> {
    let text = line.trim();
    if text.is_empty() {
        return None;
    }

    RULES.iter().find_map(|(name, rule)| {
        let kind = rule(text, keywords)?;
        debug!("Line {:?} matched rule {}", text, name);
        Some(ClassifiedLine {
            text: text.to_string(),
            kind,
        })
    })
}

/// Everything the resolver needs, built up one line at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineAccumulator {
    pub job_url: Option<String>,
    pub contact_linkedin: Option<String>,
    pub contact_name: Option<String>,
    pub job_state: JobState,
    pub contact_email: Option<String>,
    pub job_title: Option<String>,
    pub potential_company_names: Vec<String>,
    pub lines: Vec<ClassifiedLine>,
}

impl LineAccumulator {
    /// Folds one classified line in. Repeated fields keep the last value seen.
    pub fn absorb(mut self, line: ClassifiedLine) -> Self {
        match &line.kind {
            LineKind::Email { accepted: true } => {
                self.contact_email = Some(line.text.clone());
            }
            LineKind::Email { accepted: false } => {}
            LineKind::JobUrl => {
                self.job_url = Some(line.text.clone());
            }
            LineKind::LinkedinProfile { contact_name } => {
                self.contact_linkedin = Some(line.text.clone());
                self.contact_name = contact_name.clone();
            }
            LineKind::State(state) => {
                self.job_state = *state;
            }
            LineKind::JobTitle => {
                self.job_title = Some(line.text.clone());
            }
            LineKind::CompanyPhrase(stripped) => {
                let candidate = if stripped.is_empty() {
                    self.contact_name.clone()
                } else {
                    Some(stripped.clone())
                };
                if let Some(candidate) = candidate.filter(|c| !c.is_empty()) {
                    self.potential_company_names.push(candidate);
                }
            }
            LineKind::CompanyToken => {
                self.potential_company_names.push(line.text.clone());
            }
        }
        self.lines.push(line);
        self
    }
}

pub fn classify(text: &str, keywords: &[String]) -> LineAccumulator {
    text.lines()
        .filter_map(|line| classify_line(line, keywords))
        .fold(LineAccumulator::default(), LineAccumulator::absorb)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Vec<String> {
        vec!["senior".to_string(), "engineer".to_string()]
    }

    fn kind_of(line: &str) -> LineKind {
        classify_line(line, &keywords()).unwrap().kind
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert!(classify_line("   ", &keywords()).is_none());
        let acc = classify("\n\n  \n", &keywords());
        assert!(acc.lines.is_empty());
    }

    #[test]
    fn test_email_rule() {
        assert_eq!(kind_of("dana@acme.io"), LineKind::Email { accepted: true });
        assert_eq!(kind_of("dana@localhost"), LineKind::Email { accepted: false });
        assert_eq!(kind_of("a@b@c.com"), LineKind::Email { accepted: false });
    }

    #[test]
    fn test_email_takes_precedence_over_url() {
        let kind = kind_of("https://medium.com/@someone.writes/post");
        assert_eq!(kind.tag(), LineTag::Email);

        let acc = classify("https://medium.com/@someone/post", &keywords());
        assert!(acc.job_url.is_none());
        assert!(acc.contact_email.is_none());
    }

    #[test]
    fn test_url_rule() {
        assert_eq!(
            kind_of("https://www.linkedin.com/jobs/view/4324949336"),
            LineKind::JobUrl
        );
        assert_eq!(kind_of("https://jobs.lever.co/acme"), LineKind::JobUrl);
        assert_eq!(
            kind_of("https://www.linkedin.com/in/jane-doe-7/"),
            LineKind::LinkedinProfile {
                contact_name: Some("Jane Doe".to_string())
            }
        );
    }

    #[test]
    fn test_state_rule() {
        assert_eq!(kind_of("APPLIED"), LineKind::State(JobState::Applied));
        assert_eq!(
            kind_of("connection_requested"),
            LineKind::State(JobState::ConnectionRequested)
        );
    }

    #[test]
    fn test_free_text_rule() {
        assert_eq!(kind_of("Senior Data Engineer"), LineKind::JobTitle);
        assert_eq!(kind_of("Acme-Labs"), LineKind::CompanyToken);
        assert_eq!(
            kind_of("Acme Labs, Ltd."),
            LineKind::CompanyPhrase("Acme Labs Ltd".to_string())
        );
    }

    #[test]
    fn test_every_line_gets_one_tag() {
        let text = "x@y.com\nhttps://a.io/j\napplied\nsenior dev\nacme\nAcme Labs";
        let acc = classify(text, &keywords());
        let tags: Vec<LineTag> = acc.lines.iter().map(|l| l.tag()).collect();
        assert_eq!(
            tags,
            vec![
                LineTag::Email,
                LineTag::JobUrl,
                LineTag::StateKeyword,
                LineTag::FreeText,
                LineTag::FreeText,
                LineTag::FreeText,
            ]
        );
    }

    #[test]
    fn test_last_match_wins() {
        let text = "https://a.io/one\nhttps://b.io/two\napplied\nmessage_sent\na@x.com\nb@y.com";
        let acc = classify(text, &keywords());
        assert_eq!(acc.job_url.as_deref(), Some("https://b.io/two"));
        assert_eq!(acc.job_state, JobState::MessageSent);
        assert_eq!(acc.contact_email.as_deref(), Some("b@y.com"));
    }

    #[test]
    fn test_last_title_and_profile_win() {
        let text = "senior dev one
https://www.linkedin.com/in/jane-doe
senior dev two
https://www.linkedin.com/in/john-roe-9";
        let acc = classify(text, &keywords());
        assert_eq!(acc.job_title.as_deref(), Some("senior dev two"));
        assert_eq!(
            acc.contact_linkedin.as_deref(),
            Some("https://www.linkedin.com/in/john-roe-9")
        );
        assert_eq!(acc.contact_name.as_deref(), Some("John Roe"));
    }

    #[test]
    fn test_profile_with_explicit_port_keeps_name() {
        assert_eq!(
            kind_of("https://www.linkedin.com:443/in/jane-doe"),
            LineKind::LinkedinProfile {
                contact_name: Some("Jane Doe".to_string())
            }
        );
    }

    #[test]
    fn test_symbol_only_phrase_falls_back_to_contact_name() {
        let text = "https://www.linkedin.com/in/jane-doe\n*** ###";
        let acc = classify(text, &keywords());
        assert_eq!(acc.potential_company_names, vec!["Jane Doe"]);

        let acc = classify("*** ###", &keywords());
        assert!(acc.potential_company_names.is_empty());
    }

    #[test]
    fn test_company_candidates_keep_order() {
        let acc = classify("first\nSecond Co\nthird", &keywords());
        assert_eq!(acc.potential_company_names, vec!["first", "Second Co", "third"]);
    }
}
