//! Filter selection and the derivations the dashboard renders from it.

use catalog::{Catalog, Project};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> FilterValue<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    /// `All` matches everything, `Only(v)` matches exactly `v`.
    pub fn matches(&self, value: &T) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Only(expected) => expected == value,
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            FilterValue::All => None,
            FilterValue::Only(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for FilterValue<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(FilterValue::All, FilterValue::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardFilter {
    #[default]
    All,
    Awarded,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub partner: FilterValue<String>,
    pub tag: FilterValue<String>,
    pub year: FilterValue<i32>,
    pub award: AwardFilter,
}

impl FilterSelection {
    pub fn is_unfiltered(&self) -> bool {
        self.partner.is_all()
            && self.tag.is_all()
            && self.year.is_all()
            && self.award == AwardFilter::All
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, project: &Project) -> bool {
        let partner_ok = match &self.partner {
            FilterValue::All => true,
            FilterValue::Only(partner) => project.partner.as_deref() == Some(partner.as_str()),
        };
        let tag_ok = match &self.tag {
            FilterValue::All => true,
            FilterValue::Only(tag) => project.has_tag(tag),
        };
        let award_ok = match self.award {
            AwardFilter::All => true,
            AwardFilter::Awarded => project.is_awarded(),
        };

        partner_ok && self.year.matches(&project.year) && tag_ok && award_ok
    }
}

/// Projects passing every active filter, in catalog order.
pub fn visible_projects<'a>(catalog: &'a Catalog, selection: &FilterSelection) -> Vec<&'a Project> {
    catalog
        .projects()
        .iter()
        .filter(|p| selection.matches(p))
        .collect()
}

/// Wall of Fame listing. Independent of the dashboard filters.
pub fn awarded_projects(catalog: &Catalog) -> Vec<&Project> {
    catalog
        .projects()
        .iter()
        .filter(|p| p.is_awarded())
        .collect()
}

pub fn search_partners<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();
    catalog
        .partners()
        .iter()
        .map(String::as_str)
        .filter(|p| needle.is_empty() || p.to_lowercase().contains(&needle))
        .collect()
}

pub fn partner_project_count(catalog: &Catalog, partner: &str) -> usize {
    catalog
        .projects()
        .iter()
        .filter(|p| p.partner.as_deref() == Some(partner))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::ProjectId;

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.to_string()).collect()
    }

    fn is_in_catalog_order(catalog: &Catalog, projects: &[&Project]) -> bool {
        let positions: Vec<usize> = projects
            .iter()
            .map(|p| {
                catalog
                    .projects()
                    .iter()
                    .position(|c| c.id == p.id)
                    .expect("project comes from catalog")
            })
            .collect();
        positions.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn unfiltered_selection_yields_full_catalog() {
        let catalog = Catalog::builtin();
        let selection = FilterSelection::default();
        assert!(selection.is_unfiltered());
        assert_eq!(visible_projects(catalog, &selection).len(), catalog.len());
    }

    #[test]
    fn every_combination_is_an_ordered_subset() {
        let catalog = Catalog::builtin();
        let partners: Vec<FilterValue<String>> = std::iter::once(FilterValue::All)
            .chain(catalog.partners().iter().cloned().map(FilterValue::Only))
            .collect();
        let tags: Vec<FilterValue<String>> = std::iter::once(FilterValue::All)
            .chain(catalog.tags().iter().cloned().map(FilterValue::Only))
            .collect();
        let years: Vec<FilterValue<i32>> = std::iter::once(FilterValue::All)
            .chain(catalog.years().iter().copied().map(FilterValue::Only))
            .collect();

        for partner in &partners {
            for tag in &tags {
                for year in &years {
                    for award in [AwardFilter::All, AwardFilter::Awarded] {
                        let selection = FilterSelection {
                            partner: partner.clone(),
                            tag: tag.clone(),
                            year: year.clone(),
                            award,
                        };
                        let visible = visible_projects(catalog, &selection);
                        assert!(is_in_catalog_order(catalog, &visible));
                        assert!(visible.iter().all(|p| selection.matches(p)));
                    }
                }
            }
        }
    }

    #[test]
    fn combines_tag_and_year_filters() {
        let catalog = Catalog::builtin();
        let selection = FilterSelection {
            tag: FilterValue::Only("IoT".into()),
            year: FilterValue::Only(2024),
            ..Default::default()
        };
        assert_eq!(ids(&visible_projects(catalog, &selection)), vec!["3"]);
    }

    #[test]
    fn award_filter_is_a_binary_switch() {
        let catalog = Catalog::builtin();
        let selection = FilterSelection {
            award: AwardFilter::Awarded,
            ..Default::default()
        };
        assert_eq!(
            ids(&visible_projects(catalog, &selection)),
            vec!["1", "2", "5", "6", "8"]
        );
    }

    #[test]
    fn partner_filter_uses_exact_equality() {
        let catalog = Catalog::builtin();
        let selection = FilterSelection {
            partner: FilterValue::Only("dell".into()),
            ..Default::default()
        };
        assert!(visible_projects(catalog, &selection).is_empty());

        let selection = FilterSelection {
            partner: FilterValue::Only("Dell".into()),
            ..Default::default()
        };
        assert_eq!(ids(&visible_projects(catalog, &selection)), vec!["2"]);
    }

    #[test]
    fn awarded_listing_ignores_dashboard_filters() {
        let catalog = Catalog::builtin();
        let awarded = awarded_projects(catalog);
        let expected: Vec<&Project> = catalog.projects().iter().filter(|p| p.is_awarded()).collect();
        assert_eq!(awarded, expected);
        assert!(awarded
            .iter()
            .all(|p| p.id != ProjectId::new("3") && p.id != ProjectId::new("4")));
    }

    #[test]
    fn partner_search_is_case_insensitive_substring() {
        let catalog = Catalog::builtin();
        assert_eq!(
            search_partners(catalog, "ELECTRIC"),
            vec!["General Electric", "Schneider Electric"]
        );
        assert_eq!(search_partners(catalog, "  ").len(), catalog.partners().len());
        assert!(search_partners(catalog, "zzz").is_empty());
    }

    #[test]
    fn counts_projects_per_partner() {
        let catalog = Catalog::builtin();
        assert_eq!(partner_project_count(catalog, "Natura"), 1);
        assert_eq!(partner_project_count(catalog, "Petrobras"), 0);
    }

    #[test]
    fn reset_clears_every_filter() {
        let mut selection = FilterSelection {
            partner: FilterValue::Only("WEG".into()),
            tag: FilterValue::Only("IoT".into()),
            year: FilterValue::Only(2024),
            award: AwardFilter::Awarded,
        };
        assert!(!selection.is_unfiltered());
        selection.reset();
        assert!(selection.is_unfiltered());
    }
}
