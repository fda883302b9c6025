use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while building filter criteria.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown time bucket '{0}', expected one of: quick, medium, long")]
    UnknownTimeBucket(String),
}

/// Free-text search across title, ingredients and cuisine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        SearchQuery(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SearchQuery {
    fn from(text: &str) -> Self {
        SearchQuery::new(text)
    }
}

impl From<String> for SearchQuery {
    fn from(text: String) -> Self {
        SearchQuery(text)
    }
}

/// Fixed cooking-time ranges, in minutes, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBucket {
    Quick,
    Medium,
    Long,
}

impl TimeBucket {
    pub const ALL: [TimeBucket; 3] = [TimeBucket::Quick, TimeBucket::Medium, TimeBucket::Long];

    /// Inclusive `(min, max)` minutes.
    pub fn range(self) -> (u32, u32) {
        match self {
            TimeBucket::Quick => (0, 30),
            TimeBucket::Medium => (30, 60),
            TimeBucket::Long => (60, 999),
        }
    }

    pub fn contains(self, minutes: u32) -> bool {
        let (min, max) = self.range();
        (min..=max).contains(&minutes)
    }

    pub fn key(self) -> &'static str {
        match self {
            TimeBucket::Quick => "quick",
            TimeBucket::Medium => "medium",
            TimeBucket::Long => "long",
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TimeBucket {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeBucket::ALL
            .into_iter()
            .find(|bucket| bucket.key() == s)
            .ok_or_else(|| FilterError::UnknownTimeBucket(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for TimeBucket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

/// Narrowing constraints over the catalog. Every `None` axis is unconstrained.
///
/// Empty strings deserialize as `None`, so a filter panel can send its
/// "any" option as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub cuisine: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub diet: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub difficulty: Option<String>,
    #[serde(default, deserialize_with = "time_bucket_or_none")]
    pub time: Option<TimeBucket>,
}

impl FilterCriteria {
    /// Builds criteria from raw filter-panel values, treating empty strings as
    /// unconstrained.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownTimeBucket`] if `time` is neither empty
    /// nor one of `quick`, `medium` or `long`.
    pub fn from_raw(
        cuisine: Option<&str>,
        diet: Option<&str>,
        difficulty: Option<&str>,
        time: Option<&str>,
    ) -> Result<Self, FilterError> {
        let time = match non_empty(time) {
            Some(key) => Some(key.parse()?),
            None => None,
        };

        Ok(FilterCriteria {
            cuisine: non_empty(cuisine).map(str::to_string),
            diet: non_empty(diet).map(str::to_string),
            difficulty: non_empty(difficulty).map(str::to_string),
            time,
        })
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = non_empty_owned(cuisine.into());
        self
    }

    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = non_empty_owned(diet.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = non_empty_owned(difficulty.into());
        self
    }

    pub fn with_time(mut self, time: TimeBucket) -> Self {
        self.time = Some(time);
        self
    }

    /// Returns true if no axis is constrained.
    pub fn is_empty(&self) -> bool {
        [&self.cuisine, &self.diet, &self.difficulty]
            .into_iter()
            .all(|axis| axis.as_deref().map_or(true, str::is_empty))
            && self.time.is_none()
    }
}

fn non_empty_owned(value: String) -> Option<String> {
    Some(value).filter(|v| !v.is_empty())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}

fn time_bucket_or_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<TimeBucket>, D::Error> {
    match empty_as_none(deserializer)? {
        Some(key) => key.parse().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
