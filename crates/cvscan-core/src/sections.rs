//! CV section extraction
//!
//! Pulls the summary, skills, work experience and education blocks out of
//! plain CV text, for the applicant detail view. Works line by line on the
//! raw (not case-folded) text: a line that is exactly one of the known
//! headings opens a section, and the next heading of any kind closes it.

use regex::Regex;
use serde::{Deserialize, Serialize};

const MISC_HEADINGS: &[&str] = &[
    "Accomplishment",
    "Accomplishments",
    "Activities and Honors",
    "Personal Information",
    "Languages",
    "Credentials",
    "Certifications",
    "Professional Affiliations",
    "Presentation",
];

const SUMMARY_HEADINGS: &[&str] = &[
    "Summary",
    "Overview",
    "Executive Profile",
    "Professional Summary",
    "Career Focus",
    "Career Overview",
    "Objective",
    "Profile",
    "Executive Summary",
    "ABOUT",
    "Professional Profile",
    "Professional Overview",
    "Career Objective",
    "Interest",
];

const EXPERIENCE_HEADINGS: &[&str] = &[
    "Experience",
    "Professional Experience",
    "Work Experience",
    "Work History",
    "Corporate Experience",
];

const SKILL_HEADINGS: &[&str] = &[
    "Skills",
    "Skills:",
    "Software Skills",
    "Highlights",
    "Skill Areas",
    "Skill Highlights",
    "Core Competencies",
    "Technical Skills",
    "Key Skills",
    "Expertise",
    "Summary of Skills",
    "Core Qualifications",
];

const EDUCATION_HEADINGS: &[&str] = &[
    "Education",
    "Educations",
    "Education and Training",
    "Educational Background",
    "Specialized Training",
    "Professional Courses and Certifications",
];

/// Capitalised words, short connectives and separators only
const TITLE_PATTERN: &str = r"^(?:\b[A-Z][a-zA-Z]*\b|\b(?:at|to|in|of|for)\b|[/,&–／\-]|\s+)+$";

const YEAR_PATTERN: &str = r"\b(?:19\d{2}|20\d{2})\b";

/// Sections found in one CV
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvSections {
    /// Summary paragraph, lines joined by single spaces
    pub summary: String,
    pub skills: Vec<String>,
    /// Job title and date lines from the experience section
    pub experience: Vec<String>,
    pub education: Vec<String>,
}

/// Compiled heading and line classifiers.
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    summary: Regex,
    experience: Regex,
    skills: Regex,
    education: Regex,
    any_heading: Regex,
    title: Regex,
    year: Regex,
}

/// `^(?:h1|h2|...)$` over escaped headings
fn heading_regex<'a>(headings: impl IntoIterator<Item = &'a &'a str>) -> Result<Regex, regex::Error> {
    let alternatives: Vec<String> = headings.into_iter().map(|h| regex::escape(h)).collect();
    Regex::new(&format!("^(?:{})$", alternatives.join("|")))
}

impl SectionExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        let all = MISC_HEADINGS
            .iter()
            .chain(SUMMARY_HEADINGS)
            .chain(EXPERIENCE_HEADINGS)
            .chain(SKILL_HEADINGS)
            .chain(EDUCATION_HEADINGS);

        Ok(Self {
            summary: heading_regex(SUMMARY_HEADINGS)?,
            experience: heading_regex(EXPERIENCE_HEADINGS)?,
            skills: heading_regex(SKILL_HEADINGS)?,
            education: heading_regex(EDUCATION_HEADINGS)?,
            any_heading: heading_regex(all)?,
            title: Regex::new(TITLE_PATTERN)?,
            year: Regex::new(YEAR_PATTERN)?,
        })
    }

    /// Extract every section from raw CV text.
    pub fn extract(&self, text: &str) -> CvSections {
        let lines: Vec<&str> = text
            .lines()
            .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '\u{200b}'))
            .filter(|line| !line.is_empty())
            .collect();

        CvSections {
            summary: self.section(&lines, &self.summary).join(" "),
            skills: owned(self.section(&lines, &self.skills)),
            experience: owned(
                self.section(&lines, &self.experience)
                    .into_iter()
                    .filter(|line| self.title.is_match(line) || self.year.is_match(line)),
            ),
            education: owned(self.section(&lines, &self.education)),
        }
    }

    /// Lines after the first `heading` match, up to the next heading.
    fn section<'t>(&self, lines: &[&'t str], heading: &Regex) -> Vec<&'t str> {
        let Some(start) = lines.iter().position(|line| heading.is_match(line)) else {
            return Vec::new();
        };
        lines[start + 1..]
            .iter()
            .take_while(|line| !self.any_heading.is_match(line))
            .copied()
            .collect()
    }
}

fn owned<'t>(lines: impl IntoIterator<Item = &'t str>) -> Vec<String> {
    lines.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE_CV: &str = "\
Jane Doe
Summary
Backend engineer with eight years
of distributed systems work.

Skills
Rust, Go
\u{200b}PostgreSQL\u{200b}
Experience
Senior Engineer at Acme
Built the billing pipeline in Rust
Jan 2019 - Present
Software Developer
Education
University of Somewhere
B.Sc. Computer Science
";

    fn extractor() -> SectionExtractor {
        SectionExtractor::new().unwrap()
    }

    #[test]
    fn test_summary_joined() {
        let sections = extractor().extract(SAMPLE_CV);
        assert_eq!(
            sections.summary,
            "Backend engineer with eight years of distributed systems work."
        );
    }

    #[test]
    fn test_skills_cleaned() {
        let sections = extractor().extract(SAMPLE_CV);
        assert_eq!(sections.skills, vec!["Rust, Go", "PostgreSQL"]);
    }

    #[test]
    fn test_experience_titles_and_dates() {
        let sections = extractor().extract(SAMPLE_CV);
        assert_eq!(
            sections.experience,
            vec!["Senior Engineer at Acme", "Jan 2019 - Present", "Software Developer"]
        );
    }

    #[test]
    fn test_education_runs_to_end() {
        let sections = extractor().extract(SAMPLE_CV);
        assert_eq!(
            sections.education,
            vec!["University of Somewhere", "B.Sc. Computer Science"]
        );
    }

    #[test]
    fn test_missing_sections() {
        let sections = extractor().extract("Just a name\nand a phone number");
        assert_eq!(sections, CvSections::default());
    }

    #[test]
    fn test_heading_must_be_whole_line() {
        let sections = extractor().extract("My Skills include\nRust\nSkills\nGo");
        assert_eq!(sections.skills, vec!["Go"]);
    }
}
