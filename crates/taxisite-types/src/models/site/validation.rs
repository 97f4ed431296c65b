//! Non-blocking validation report.
//!
//! Nothing here rejects input: edits and publishes go through regardless. The
//! report only tells the operator what will render badly (no contact links,
//! out-of-range ratings, duplicated ids).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use super::edit::Identified;
use super::SiteConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted path to the offending field (e.g. `reviews[1].rating`)
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn mentions(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field.contains(field))
    }
}

impl SiteConfig {
    pub fn validation_report(&self) -> ValidationReport {
        let mut issues = Vec::new();

        if let Err(errors) = self.validate() {
            flatten_errors("", &errors, &mut issues);
        }

        check_unique_ids("stats", &self.stats, &mut issues);
        check_unique_ids("vehicles", &self.vehicles, &mut issues);
        check_unique_ids("socialLinks", &self.social_links, &mut issues);
        check_unique_ids("reviews", &self.reviews, &mut issues);
        check_unique_ids("faqs", &self.faqs, &mut issues);

        issues.sort_by(|a, b| a.field.cmp(&b.field));
        ValidationReport { issues }
    }
}

fn flatten_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<ValidationIssue>) {
    for (field, kind) in errors.errors() {
        let path =
            if prefix.is_empty() { field.to_string() } else { format!("{prefix}.{field}") };
        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push(ValidationIssue { field: path.clone(), message });
                }
            }
            ValidationErrorsKind::Struct(inner) => flatten_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    flatten_errors(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}

fn check_unique_ids<T: Identified>(collection: &str, items: &[T], out: &mut Vec<ValidationIssue>) {
    let mut seen = HashSet::new();
    for (index, item) in items.iter().enumerate() {
        if !seen.insert(item.id()) {
            out.push(ValidationIssue {
                field: format!("{collection}[{index}].id"),
                message: format!("duplicate id {:?}", item.id()),
            });
        }
    }
}
