//! Categories and the user-editable label lists behind the wheel.
//!
//! Each category persists as a JSON array of strings under a fixed key in the
//! shell's key-value store. Lists are ordered, labels are unique within a
//! category (case-sensitive, exact match), and every mutation rewrites the
//! whole list for its key.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::MAX_LABEL_LENGTH;

const DEFAULT_HOME_FOODS: &[&str] = &[
    "Pizza",
    "Pasta",
    "Salad",
    "Sandwich",
    "Soup",
    "Rice Bowl",
    "Stir Fry",
    "Tacos",
    "Burger",
    "Sushi",
    "Curry",
    "Omelet",
    "Grilled Chicken",
    "Fish",
    "Steak",
    "Vegetables",
];

const DEFAULT_RESTAURANTS: &[&str] = &[
    "McDonald's",
    "Pizza Hut",
    "KFC",
    "Subway",
    "Burger King",
    "Taco Bell",
    "Domino's",
    "Starbucks",
    "Chinese Restaurant",
    "Italian Restaurant",
    "Mexican Restaurant",
    "Thai Restaurant",
    "Indian Restaurant",
    "Sushi Bar",
    "Steakhouse",
    "Local Diner",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HomeFoods,
    Restaurants,
}

impl Category {
    pub const ALL: [Self; 2] = [Self::HomeFoods, Self::Restaurants];

    /// Key under which the category's list is persisted.
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::HomeFoods => "home_foods",
            Self::Restaurants => "restaurants",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HomeFoods => "Home Foods",
            Self::Restaurants => "Restaurants",
        }
    }

    #[must_use]
    pub const fn screen_title(self) -> &'static str {
        match self {
            Self::HomeFoods => "🏠 Home Food Casino",
            Self::Restaurants => "🍽️ Restaurant Casino",
        }
    }

    #[must_use]
    pub const fn screen_subtitle(self) -> &'static str {
        match self {
            Self::HomeFoods => "Spin the wheel to decide what to cook at home!",
            Self::Restaurants => "Spin the wheel to decide where to eat out!",
        }
    }

    #[must_use]
    pub const fn default_labels(self) -> &'static [&'static str] {
        match self {
            Self::HomeFoods => DEFAULT_HOME_FOODS,
            Self::Restaurants => DEFAULT_RESTAURANTS,
        }
    }

    #[must_use]
    pub fn from_storage_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.storage_key() == key)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("label is empty")]
    Empty,
    #[error("label is too long ({len} > {max})")]
    TooLong { len: usize, max: usize },
}

/// Trims surrounding whitespace and enforces the label bounds.
pub fn validate_label(raw: &str) -> Result<String, LabelError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LabelError::Empty);
    }
    let len = trimmed.chars().count();
    if len > MAX_LABEL_LENGTH {
        return Err(LabelError::TooLong {
            len,
            max: MAX_LABEL_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

/// Whether an `add` actually grew the list. A duplicate is a distinct,
/// non-error outcome: the list is already in the requested state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuList {
    labels: Vec<String>,
}

impl MenuList {
    /// Builds a list from raw labels, dropping duplicates while preserving
    /// first-occurrence order. Stored values pass through here so a corrupted
    /// store can never violate the uniqueness invariant in memory.
    #[must_use]
    pub fn from_labels(labels: impl IntoIterator<Item = String>) -> Self {
        let mut out: Vec<String> = Vec::new();
        for label in labels {
            if !out.contains(&label) {
                out.push(label);
            }
        }
        Self { labels: out }
    }

    #[must_use]
    pub fn defaults(category: Category) -> Self {
        Self {
            labels: category
                .default_labels()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Trims and validates `raw`, then appends it unless an identical label
    /// is already present.
    pub fn add(&mut self, raw: &str) -> Result<AddOutcome, LabelError> {
        let label = validate_label(raw)?;
        if self.contains(&label) {
            return Ok(AddOutcome::Duplicate);
        }
        self.labels.push(label);
        Ok(AddOutcome::Added)
    }

    /// Removes every entry exactly matching `label`. Returns whether anything
    /// was removed; removing an absent label is a successful no-op.
    pub fn remove(&mut self, label: &str) -> bool {
        let before = self.labels.len();
        self.labels.retain(|l| l != label);
        self.labels.len() != before
    }

    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.labels)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let labels: Vec<String> = serde_json::from_slice(bytes)?;
        Ok(Self::from_labels(labels))
    }
}

/// Both category lists, as the core currently believes the store holds them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menus {
    home_foods: MenuList,
    restaurants: MenuList,
}

impl Menus {
    #[must_use]
    pub fn get(&self, category: Category) -> &MenuList {
        match category {
            Category::HomeFoods => &self.home_foods,
            Category::Restaurants => &self.restaurants,
        }
    }

    #[must_use]
    pub fn get_mut(&mut self, category: Category) -> &mut MenuList {
        match category {
            Category::HomeFoods => &mut self.home_foods,
            Category::Restaurants => &mut self.restaurants,
        }
    }

    pub fn replace(&mut self, category: Category, list: MenuList) {
        *self.get_mut(category) = list;
    }

    pub fn reset_to_defaults(&mut self) {
        self.home_foods = MenuList::defaults(Category::HomeFoods);
        self.restaurants = MenuList::defaults(Category::Restaurants);
    }
}

impl Default for Menus {
    /// Defaults mirror the read-failure fallback: until the store answers,
    /// the core behaves as if the seed lists were stored.
    fn default() -> Self {
        Self {
            home_foods: MenuList::defaults(Category::HomeFoods),
            restaurants: MenuList::defaults(Category::Restaurants),
        }
    }
}
