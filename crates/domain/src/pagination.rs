//! List payload normalisation.
//!
//! Endpoints answer either with a bare JSON array (pagination disabled on the
//! backend) or with a page `{count, next, previous, results}`.

use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Total number of items across all pages.
    #[serde(default)]
    pub count: u64,
    /// URL of the next page.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page.
    #[serde(default)]
    pub previous: Option<String>,
    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }
}

impl<T> Paginated<T> {
    /// Wraps a complete list as a single page.
    #[must_use]
    pub fn single_page(results: Vec<T>) -> Self {
        Self {
            count: results.len() as u64,
            next: None,
            previous: None,
            results,
        }
    }

    /// Returns true if another page follows.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Any shape a list endpoint may answer with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    /// A bare array.
    Items(Vec<T>),
    /// A paginated page.
    Page(Paginated<T>),
}

/// Extracts the items of a list payload.
#[must_use]
pub fn unwrap_list<T>(payload: Option<ListPayload<T>>) -> Vec<T> {
    match payload {
        None => Vec::new(),
        Some(ListPayload::Items(items)) => items,
        Some(ListPayload::Page(page)) => page.results,
    }
}

/// Normalises a list payload into a page; bare arrays become a single page.
#[must_use]
pub fn ensure_paginated<T>(payload: Option<ListPayload<T>>) -> Paginated<T> {
    match payload {
        None => Paginated::default(),
        Some(ListPayload::Items(items)) => Paginated::single_page(items),
        Some(ListPayload::Page(page)) => page,
    }
}
