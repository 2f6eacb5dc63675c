//! Static project catalog shown by the capstone totem.
//!
//! The catalog is built once and handed out by reference. Nothing in the kiosk mutates it.

use std::{collections::BTreeSet, sync::OnceLock};

mod builtin;
pub mod domain;

pub use domain::{Award, Category, Media, Project, ProjectId, Semester, Student, StudentId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
    partners: Vec<String>,
    tags: Vec<String>,
    years: Vec<i32>,
}

impl Catalog {
    /// Builds a catalog and derives its tag and year universes.
    ///
    /// The partner directory is kept alphabetically sorted and deduplicated. It is maintained
    /// independently of the projects and may name partners without any project.
    pub fn new(projects: Vec<Project>, partners: impl IntoIterator<Item = String>) -> Self {
        let partners: Vec<String> = partners
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let tags: Vec<String> = projects
            .iter()
            .flat_map(|p| p.tags.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut years: Vec<i32> = projects
            .iter()
            .map(|p| p.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        years.reverse();

        Self {
            projects,
            partners,
            tags,
            years,
        }
    }

    /// The dataset compiled into the kiosk.
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog::new(builtin::projects(), builtin::partners()))
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn partners(&self) -> &[String] {
        &self.partners
    }

    /// Distinct tags, sorted lexicographically.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Distinct years, newest first.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_derives_sorted_universes() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());

        let mut sorted_tags = catalog.tags().to_vec();
        sorted_tags.sort();
        sorted_tags.dedup();
        assert_eq!(catalog.tags(), sorted_tags.as_slice());

        assert!(catalog.years().windows(2).all(|w| w[0] > w[1]));
        assert_eq!(catalog.years().first(), Some(&2024));
        assert_eq!(catalog.years().last(), Some(&2022));
    }

    #[test]
    fn builtin_partner_directory_is_sorted_and_includes_partners_without_projects() {
        let catalog = Catalog::builtin();
        let partners = catalog.partners();
        assert!(partners.windows(2).all(|w| w[0] < w[1]));
        assert!(partners.iter().any(|p| p == "Petrobras"));
        assert!(!catalog
            .projects()
            .iter()
            .any(|p| p.partner.as_deref() == Some("Petrobras")));
    }

    #[test]
    fn builtin_is_shared_by_reference() {
        assert!(std::ptr::eq(Catalog::builtin(), Catalog::builtin()));
    }

    #[test]
    fn looks_up_project_by_id() {
        let catalog = Catalog::builtin();
        let project = catalog
            .project(&ProjectId::new("2"))
            .expect("project 2 exists");
        assert_eq!(project.title, "EcoTrack AI");
        assert_eq!(project.semester_label(), "2024.1");
        assert!(catalog.project(&ProjectId::new("missing")).is_none());
    }

    #[test]
    fn project_serializes_with_snake_case_enums() {
        let project = Catalog::builtin()
            .project(&ProjectId::new("1"))
            .expect("project 1 exists");
        let json = serde_json::to_value(project).expect("serialize");
        assert_eq!(json["category"], "hardware_iot");
        assert_eq!(json["award"], "excellence");
        assert_eq!(json["id"], "1");
    }

    #[test]
    fn new_deduplicates_partner_directory() {
        let catalog = Catalog::new(
            Vec::new(),
            ["WEG", "Dell", "WEG"].into_iter().map(String::from),
        );
        assert_eq!(catalog.partners(), ["Dell".to_string(), "WEG".to_string()]);
        assert!(catalog.tags().is_empty());
        assert!(catalog.years().is_empty());
    }
}
