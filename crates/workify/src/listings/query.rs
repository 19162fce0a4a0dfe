use std::fmt;

use super::domain::JobListing;
use super::dto::JobSearchCriteria;

type ListingPredicate = Box<dyn Fn(&JobListing) -> bool + Send + Sync>;

/// Lazily composed filter over listings: an ordered set of predicates that a
/// repository applies conjunctively when the query executes. An empty query
/// matches everything.
pub struct ListingQuery {
    predicates: Vec<ListingPredicate>,
}

impl ListingQuery {
    pub fn unrestricted() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Adds one more condition; all conditions must hold for a listing to
    /// match.
    pub fn narrow<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&JobListing) -> bool + Send + Sync + 'static,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    pub fn matches(&self, listing: &JobListing) -> bool {
        self.predicates.iter().all(|predicate| predicate(listing))
    }

    pub fn is_unrestricted(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Composes a query from search criteria, narrowing only on the fields
    /// that carry a usable value:
    ///
    /// - `skills`: comma-split, trimmed, empty tokens dropped; a listing
    ///   matches when its skills text contains at least one token as a
    ///   case-sensitive substring.
    /// - `min_salary`: applied as `salary >= min_salary` only when positive.
    /// - `job_type`: exact, case-sensitive string equality.
    ///
    /// `location` is carried on the criteria but is not part of the active
    /// filter.
    pub fn from_criteria(criteria: &JobSearchCriteria) -> Self {
        let mut query = Self::unrestricted();

        if let Some(raw) = criteria.skills.as_deref() {
            let tokens: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_owned)
                .collect();
            if !tokens.is_empty() {
                query = query.narrow(move |listing| {
                    tokens.iter().any(|token| listing.skills.contains(token.as_str()))
                });
            }
        }

        if criteria.min_salary > 0.0 {
            let min_salary = criteria.min_salary;
            query = query.narrow(move |listing| listing.salary >= min_salary);
        }

        if let Some(job_type) = criteria.job_type.as_deref().filter(|value| !value.is_empty()) {
            let job_type = job_type.to_owned();
            query = query.narrow(move |listing| listing.job_type == job_type);
        }

        query
    }
}

impl fmt::Debug for ListingQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListingQuery")
            .field("predicates", &self.predicates.len())
            .finish()
    }
}
