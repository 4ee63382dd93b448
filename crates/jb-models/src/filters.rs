//! Server-side job search filters.

use serde::{Deserialize, Serialize};

/// Filter configuration for the job list query.
///
/// Empty strings and `None` mean "not set". When every field is unset the
/// client issues the bare unfiltered query instead of a filtered one with
/// empty params.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilters {
    #[serde(default)]
    pub keyword: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub category: String,

    #[serde(rename = "type", default)]
    pub job_type: String,

    #[serde(default)]
    pub min_salary: Option<u32>,

    #[serde(default)]
    pub max_salary: Option<u32>,
}

impl JobFilters {
    /// True if no field is set, selecting the unfiltered "get all" path.
    pub fn is_empty(&self) -> bool {
        self.keyword.is_empty()
            && self.location.is_empty()
            && self.category.is_empty()
            && self.job_type.is_empty()
            && self.min_salary.is_none()
            && self.max_salary.is_none()
    }

    /// Reset every field, as the "clear all filters" action does.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Query parameters for `GET /jobs`, set fields only.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.keyword.is_empty() {
            params.push(("keyword", self.keyword.clone()));
        }
        if !self.location.is_empty() {
            params.push(("location", self.location.clone()));
        }
        if let Some(min) = self.min_salary {
            params.push(("minSalary", min.to_string()));
        }
        if let Some(max) = self.max_salary {
            params.push(("maxSalary", max.to_string()));
        }
        if !self.job_type.is_empty() {
            params.push(("type", self.job_type.clone()));
        }
        if !self.category.is_empty() {
            params.push(("category", self.category.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_are_empty() {
        assert!(JobFilters::default().is_empty());
        assert!(JobFilters::default().query_params().is_empty());
    }

    #[test]
    fn test_any_set_field_makes_filters_non_empty() {
        let keyword = JobFilters {
            keyword: "rust".into(),
            ..Default::default()
        };
        assert!(!keyword.is_empty());

        let salary = JobFilters {
            min_salary: Some(50_000),
            ..Default::default()
        };
        assert!(!salary.is_empty());
    }

    #[test]
    fn test_query_params_skip_unset_fields() {
        let filters = JobFilters {
            keyword: "rust".into(),
            category: "Engineering".into(),
            min_salary: Some(50_000),
            ..Default::default()
        };
        let params = filters.query_params();
        assert_eq!(
            params,
            vec![
                ("keyword", "rust".to_string()),
                ("minSalary", "50000".to_string()),
                ("category", "Engineering".to_string()),
            ]
        );
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let mut filters = JobFilters {
            keyword: "rust".into(),
            location: "Berlin".into(),
            max_salary: Some(90_000),
            ..Default::default()
        };
        filters.clear();
        assert!(filters.is_empty());
    }
}
