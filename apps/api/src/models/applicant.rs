use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Trimmed value when present and not blank.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Contact fields shown in document headers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
}

impl PersonalInfo {
    pub fn name(&self) -> &str {
        present(&self.full_name).unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        present(&self.email).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationInput {
    pub school: Option<String>,
    pub location: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub graduation_year: Option<String>,
    pub gpa: Option<String>,
    pub achievements: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceInput {
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub responsibilities: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobTarget {
    pub target_role: Option<String>,
    pub target_company: Option<String>,
    pub industry: Option<String>,
    pub experience_level: Option<String>,
    pub skills: Option<String>,
    pub job_description: Option<String>,
}

/// Request body for document generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicantData {
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationInput>,
    pub experience: Vec<ExperienceInput>,
    pub job_target: JobTarget,
}

impl ApplicantData {
    /// Name and email are required; the email must look like an address.
    pub fn validate(&self) -> Result<(), AppError> {
        let info = &self.personal_info;
        if info.name().is_empty() || info.email().is_empty() {
            return Err(AppError::Validation(
                "Missing required personal information: fullName and email".to_string(),
            ));
        }
        if !EMAIL.is_match(info.email()) {
            return Err(AppError::Validation(format!(
                "Invalid email address: {}",
                info.email()
            )));
        }
        Ok(())
    }

    /// Entries the form would have kept: education needs school, degree and
    /// field; experience needs company and job title.
    pub fn complete_education(&self) -> impl Iterator<Item = &EducationInput> {
        self.education.iter().filter(|e| {
            present(&e.school).is_some() && present(&e.degree).is_some() && present(&e.field).is_some()
        })
    }

    pub fn complete_experience(&self) -> impl Iterator<Item = &ExperienceInput> {
        self.experience
            .iter()
            .filter(|e| present(&e.company).is_some() && present(&e.job_title).is_some())
    }
}
