//! Static portfolio content.
//!
//! Everything here is compiled in; the UI only reads it.

mod profile;
mod projects;

pub use profile::{
    ContactInfo, Education, SkillGroup, CERTIFICATIONS, CONTACT, EDUCATION, HEADLINE, PROFILE,
    SKILL_GROUPS, SOFT_SKILLS, VOLUNTEERING,
};
pub use projects::{filter_projects, Project, ProjectCategory, ProjectFilter, PROJECTS};
