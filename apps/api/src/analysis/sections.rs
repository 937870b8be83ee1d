//! Section Segmenter — splits raw résumé text into the fixed set of named sections.
//!
//! Single pass over the lines with a current-section pointer. A line containing any
//! heading keyword switches the pointer and is dropped; every other non-empty line is
//! appended (trimmed, original case) to the active section. Lines seen before the
//! first heading belong to no section and are discarded.

use crate::analysis::text::split_lines;

/// The closed set of résumé sections the segmenter recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Skills,
    Experience,
    Education,
}

/// Heading keywords, evaluated in this order. The first section with a keyword
/// contained in the lowered line wins, so "skills and experience" is a skills heading.
pub const SECTION_KEYWORDS: &[(Section, &[&str])] = &[
    (Section::Skills, &["skills", "technical skills"]),
    (
        Section::Experience,
        &["experience", "work experience", "professional experience"],
    ),
    (Section::Education, &["education", "academic background"]),
];

/// Segmented résumé text. Every section is always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    pub skills: String,
    pub experience: String,
    pub education: String,
}

impl SectionMap {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::Skills => &self.skills,
            Section::Experience => &self.experience,
            Section::Education => &self.education,
        }
    }
}

/// Returns the section a line introduces, if it is a heading line.
pub fn detect_heading(line: &str) -> Option<Section> {
    let lower = line.trim().to_lowercase();
    SECTION_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(section, _)| *section)
}

/// Splits `text` into skills / experience / education. Never fails.
pub fn segment(text: &str) -> SectionMap {
    let mut skills: Vec<&str> = Vec::new();
    let mut experience: Vec<&str> = Vec::new();
    let mut education: Vec<&str> = Vec::new();

    let mut current: Option<Section> = None;

    for line in split_lines(text) {
        let stripped = line.trim();

        if let Some(section) = detect_heading(stripped) {
            current = Some(section);
            continue;
        }

        if stripped.is_empty() {
            continue;
        }

        match current {
            Some(Section::Skills) => skills.push(stripped),
            Some(Section::Experience) => experience.push(stripped),
            Some(Section::Education) => education.push(stripped),
            None => {}
        }
    }

    SectionMap {
        skills: skills.join("\n").trim().to_string(),
        experience: experience.join("\n").trim().to_string(),
        education: education.join("\n").trim().to_string(),
    }
}
