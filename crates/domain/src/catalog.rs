//! Catalog reference data: trades, categories and the location hierarchy.
//!
//! Locations form a tree: region → department → city → district. The
//! helpers below back the cascading region/department/district filters.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

/// A trade a professional can register under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Identifier.
    pub id: u64,
    /// Label.
    pub name: String,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Sub-category identifier.
    pub category: u64,
    /// Whether the trade is promoted on the home page.
    #[serde(default)]
    pub is_featured: bool,
}

/// A node of the category tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    /// Identifier.
    pub id: u64,
    /// Label.
    pub name: String,
    /// URL slug.
    #[serde(default)]
    pub slug: String,
    /// Parent category.
    #[serde(default)]
    pub parent: Option<u64>,
    /// Child categories.
    #[serde(default)]
    pub subcategories: Vec<CategoryNode>,
}

/// Level of a location in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LocationType {
    /// Country.
    Country,
    /// Region.
    Region,
    /// Department.
    Department,
    /// City.
    City,
    /// District.
    District,
    /// A level this client does not know about.
    #[serde(other)]
    Unknown,
}

/// A node of the location tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationNode {
    /// Identifier.
    pub id: u64,
    /// Label.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// URL slug.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    /// Level in the hierarchy.
    #[serde(rename = "type")]
    pub kind: LocationType,
    /// Child locations.
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<LocationNode>,
    /// Parent location.
    #[serde(default)]
    pub parent: Option<u64>,
    /// Localised label of the level.
    #[serde(default)]
    pub type_display: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl LocationNode {
    fn children_of_kind(&self, kind: LocationType) -> impl Iterator<Item = &Self> {
        self.children.iter().filter(move |child| child.kind == kind)
    }
}

/// Filter of `GET /api/catalog/locations/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocationQuery {
    /// Restrict to one level.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<LocationType>,
    /// Restrict to children of a location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
    /// Page size.
    pub page_size: u32,
}

impl Default for LocationQuery {
    fn default() -> Self {
        Self {
            kind: None,
            parent: None,
            page_size: 1000,
        }
    }
}

/// The location tree endpoint answers with either a root object or an array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LocationTreePayload {
    /// Several roots.
    Many(Vec<LocationNode>),
    /// A single root.
    One(Box<LocationNode>),
}

impl LocationTreePayload {
    /// Returns the roots of the tree.
    #[must_use]
    pub fn into_roots(self) -> Vec<LocationNode> {
        match self {
            Self::Many(nodes) => nodes,
            Self::One(node) => vec![*node],
        }
    }
}

/// Collects every region found anywhere in `roots`, with its full subtree.
///
/// Regions are deduplicated by id and sorted by name, ignoring case and
/// French diacritics.
#[must_use]
pub fn extract_regions(roots: Vec<LocationNode>) -> Vec<LocationNode> {
    let mut regions = Vec::new();
    let mut seen = HashSet::new();
    let mut stack: Vec<LocationNode> = roots.into_iter().rev().collect();

    while let Some(node) = stack.pop() {
        if node.kind == LocationType::Region {
            if seen.insert(node.id) {
                stack.extend(node.children.iter().rev().cloned());
                regions.push(node);
            }
            continue;
        }
        stack.extend(node.children.into_iter().rev());
    }

    regions.sort_by(|a, b| compare_names(&a.name, &b.name));
    regions
}

fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'à' | 'â' | 'ä' | 'À' | 'Â' | 'Ä' => 'a',
            'ç' | 'Ç' => 'c',
            'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'e',
            'î' | 'ï' | 'Î' | 'Ï' => 'i',
            'ô' | 'ö' | 'Ô' | 'Ö' => 'o',
            'ù' | 'û' | 'ü' | 'Ù' | 'Û' | 'Ü' => 'u',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Finds a region among the top-level nodes.
#[must_use]
pub fn find_region(tree: &[LocationNode], region_id: u64) -> Option<&LocationNode> {
    tree.iter().find(|region| region.id == region_id)
}

/// Finds a department directly under `region`.
#[must_use]
pub fn find_department_in_region(
    region: &LocationNode,
    department_id: u64,
) -> Option<&LocationNode> {
    region
        .children_of_kind(LocationType::Department)
        .find(|department| department.id == department_id)
}

/// Lists the departments of a region.
#[must_use]
pub fn departments_of(region: &LocationNode) -> Vec<&LocationNode> {
    region.children_of_kind(LocationType::Department).collect()
}

/// Lists the districts of a department; districts sit under its cities.
#[must_use]
pub fn districts_of(department: &LocationNode) -> Vec<&LocationNode> {
    department
        .children_of_kind(LocationType::City)
        .flat_map(|city| city.children_of_kind(LocationType::District))
        .collect()
}

/// Returns true if any city of the department has children.
#[must_use]
pub fn department_has_districts(department: &LocationNode) -> bool {
    department
        .children_of_kind(LocationType::City)
        .any(|city| !city.children.is_empty())
}

/// Counts the districts across every department of a region.
#[must_use]
pub fn count_districts_in_region(region: &LocationNode) -> usize {
    region
        .children_of_kind(LocationType::Department)
        .map(|department| districts_of(department).len())
        .sum()
}

/// Finds a location anywhere in the tree, depth first.
#[must_use]
pub fn find_location(tree: &[LocationNode], location_id: u64) -> Option<&LocationNode> {
    tree.iter().find_map(|node| {
        if node.id == location_id {
            Some(node)
        } else {
            find_location(&node.children, location_id)
        }
    })
}

/// Returns the breadcrumb from a root down to the location, inclusive.
///
/// Empty when the location is not in the tree.
#[must_use]
pub fn location_path(tree: &[LocationNode], location_id: u64) -> Vec<&LocationNode> {
    for node in tree {
        if node.id == location_id {
            return vec![node];
        }
        let mut path = location_path(&node.children, location_id);
        if !path.is_empty() {
            path.insert(0, node);
            return path;
        }
    }
    Vec::new()
}
