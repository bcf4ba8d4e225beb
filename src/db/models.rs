//! Domain models for the portfolio content store.
//!
//! These models are storage-agnostic. Each entity kind has a stored form
//! (with an `id`) and an insert form (`New*`) without one; the store is the
//! only place ids are assigned.

use serde::{Deserialize, Serialize};

/// Opaque UUID string assigned by the store.
pub type Id = String;

// =============================================================================
// Project
// =============================================================================

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    /// Higher values are listed first.
    pub featured: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: i32,
}

impl Project {
    pub fn from_new(id: Id, new: NewProject) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            technologies: new.technologies,
            live_url: new.live_url,
            github_url: new.github_url,
            image_url: new.image_url,
            featured: new.featured,
        }
    }
}

// =============================================================================
// Education
// =============================================================================

/// A degree or other formal education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Id,
    pub institution: String,
    pub degree: String,
    pub field: Option<String>,
    /// Free text, usually a four-digit year.
    pub start_year: String,
    pub end_year: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewEducation {
    pub institution: String,
    pub degree: String,
    pub field: Option<String>,
    pub start_year: String,
    pub end_year: Option<String>,
    pub description: Option<String>,
}

impl Education {
    pub fn from_new(id: Id, new: NewEducation) -> Self {
        Self {
            id,
            institution: new.institution,
            degree: new.degree,
            field: new.field,
            start_year: new.start_year,
            end_year: new.end_year,
            description: new.description,
        }
    }

    /// Numeric value of `start_year` used for ordering.
    pub fn start_year_value(&self) -> i64 {
        leading_integer(&self.start_year)
    }
}

/// Parse the integer prefix of `s` the lenient way: leading whitespace is
/// skipped, an optional sign is accepted, and parsing stops at the first
/// non-digit. Anything without digits yields 0.
pub fn leading_integer(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return 0;
    }

    let value = rest[..digits_len]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));

    if negative { -value } else { value }
}

// =============================================================================
// Course
// =============================================================================

/// A completed online course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Id,
    pub name: String,
    pub platform: String,
    pub completion_date: String,
    pub certificate_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewCourse {
    pub name: String,
    pub platform: String,
    pub completion_date: String,
    pub certificate_url: Option<String>,
    pub description: Option<String>,
}

impl Course {
    pub fn from_new(id: Id, new: NewCourse) -> Self {
        Self {
            id,
            name: new.name,
            platform: new.platform,
            completion_date: new.completion_date,
            certificate_url: new.certificate_url,
            description: new.description,
        }
    }
}

// =============================================================================
// Skill
// =============================================================================

/// A skill shown in the skills grid, grouped by `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Id,
    pub name: String,
    pub category: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewSkill {
    pub name: String,
    pub category: String,
    pub icon: String,
}

impl Skill {
    pub fn from_new(id: Id, new: NewSkill) -> Self {
        Self {
            id,
            name: new.name,
            category: new.category,
            icon: new.icon,
        }
    }
}
