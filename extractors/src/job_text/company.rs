use once_cell::sync::Lazy;
use regex::Regex;
use shared_types::UNKNOWN_COMPANY;
use tracing::debug;
use url::Url;

use super::helpers::capitalize_first;

/// A job board hosting convention that carries the company in the URL.
pub struct AtsPattern {
    pub name: &'static str,
    /// Lowercase substring that must appear in the URL before any regex is tried.
    pub url_hint: &'static str,
    /// Tried in order; capture group 1 is the company slug.
    pub regexes: Vec<Regex>,
}

impl AtsPattern {
    fn company_slug<'a>(&self, url: &'a str) -> Option<&'a str> {
        if !url.to_lowercase().contains(self.url_hint) {
            return None;
        }
        self.regexes
            .iter()
            .find_map(|regex| regex.captures(url)?.get(1))
            .map(|m| m.as_str())
    }
}

static ATS_PATTERNS: Lazy<Vec<AtsPattern>> = Lazy::new(create_ats_patterns);

pub fn create_ats_patterns() -> Vec<AtsPattern> {
    vec![
        AtsPattern {
            name: "comeet",
            url_hint: "comeet.com",
            regexes: vec![Regex::new(r"(?i)comeet\.com/jobs/([^/?]+)").unwrap()],
        },
        AtsPattern {
            name: "smartrecruiters",
            url_hint: "smartrecruiters.com",
            regexes: vec![Regex::new(r"(?i)jobs\.smartrecruiters\.com/([^/?]+)").unwrap()],
        },
        AtsPattern {
            name: "greenhouse_job_boards",
            url_hint: "job-boards.greenhouse.io",
            regexes: vec![Regex::new(r"(?i)job-boards\.greenhouse\.io/([^/?]+)").unwrap()],
        },
        // Greenhouse embedded on the company's own site
        AtsPattern {
            name: "greenhouse_embedded",
            url_hint: "gh_jid=",
            regexes: vec![
                Regex::new(r"(?i)www\.([^.]+)\.").unwrap(),
                Regex::new(r"(?i)https?://([^.]+)\.").unwrap(),
            ],
        },
        AtsPattern {
            name: "lever",
            url_hint: "jobs.lever.co",
            regexes: vec![Regex::new(r"(?i)jobs\.lever\.co/([^/?]+)").unwrap()],
        },
    ]
}

/// Derives a company name from a non-LinkedIn job URL.
pub fn company_from_job_url(job_url: &str) -> String {
    if let Some(company) = company_from_ats(job_url) {
        return company;
    }

    let Ok(url) = Url::parse(job_url) else {
        return UNKNOWN_COMPANY.to_string();
    };
    let Some(host) = url.host_str() else {
        return UNKNOWN_COMPANY.to_string();
    };

    let host = host.strip_prefix("www.").unwrap_or(host);
    match host.split('.').next() {
        Some(label) if !label.is_empty() => capitalize_first(label),
        _ => UNKNOWN_COMPANY.to_string(),
    }
}

fn company_from_ats(job_url: &str) -> Option<String> {
    ATS_PATTERNS.iter().find_map(|pattern| {
        let slug = pattern.company_slug(job_url)?;
        debug!("Matched {} job board pattern with slug {}", pattern.name, slug);
        Some(capitalize_first(slug))
    })
}
