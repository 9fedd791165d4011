//! Search data model
//!
//! Categories, raw and ranked results, the search key that identifies a
//! request and the tokens used to tell stale responses apart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::SearchError;

/// Which result kinds the endpoint should return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Hotel,
    Place,
    Restaurant,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Hotel,
        Category::Place,
        Category::Restaurant,
    ];

    /// Wire value used in the `category` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Hotel => "hotel",
            Category::Place => "place",
            Category::Restaurant => "restaurant",
        }
    }

    /// Tab label shown in the category bar
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "Search All",
            Category::Hotel => "Hotels",
            Category::Place => "Things To Do",
            Category::Restaurant => "Restaurants",
        }
    }

    /// Next category in tab order, wrapping around
    pub fn next(&self) -> Category {
        match self {
            Category::All => Category::Hotel,
            Category::Hotel => Category::Place,
            Category::Place => Category::Restaurant,
            Category::Restaurant => Category::All,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Category::All),
            "hotel" => Ok(Category::Hotel),
            "place" => Ok(Category::Place),
            "restaurant" => Ok(Category::Restaurant),
            other => Err(format!(
                "unknown category '{}' (expected all, hotel, place or restaurant)",
                other
            )),
        }
    }
}

/// Kind of a search result as reported by the endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ResultKind {
    Place,
    Hotel,
    Restaurant,
    Attraction,
    #[serde(other)]
    Other,
}

impl ResultKind {
    /// Wire name, also used as the `type` parameter of the detail route
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Place => "Place",
            ResultKind::Hotel => "Hotel",
            ResultKind::Restaurant => "Restaurant",
            ResultKind::Attraction => "Attraction",
            ResultKind::Other => "Other",
        }
    }

    /// Label shown next to a suggestion
    pub fn label(&self) -> &'static str {
        match self {
            ResultKind::Place => "Destination",
            ResultKind::Hotel => "Accommodation",
            ResultKind::Restaurant => "Dining",
            ResultKind::Attraction => "Attraction",
            ResultKind::Other => "Location",
        }
    }
}

/// A candidate as returned by the search endpoint, in server order
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawResult {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResultKind,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub location: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl RawResult {
    pub fn new(name: impl Into<String>, kind: ResultKind) -> Self {
        Self {
            name: name.into(),
            kind,
            location: None,
            rating: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Response body of `GET /api/search`
#[derive(Debug, Deserialize)]
pub struct SearchResponseBody {
    #[serde(default)]
    pub results: Vec<RawResult>,
}

/// A raw result together with its client-side relevance score
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub item: RawResult,
    pub score: u32,
}

impl RankedResult {
    /// Score above which a suggestion is flagged as popular
    pub const POPULAR_THRESHOLD: u32 = 80;

    pub fn is_popular(&self) -> bool {
        self.score > Self::POPULAR_THRESHOLD
    }
}

/// Query and category coupled into the key a request is issued for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    pub query: String,
    pub category: Category,
}

impl SearchKey {
    pub fn new(query: impl Into<String>, category: Category) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }
}

/// Identifier minted per issued search, strictly increasing per controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Request sent to the search worker
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub token: RequestToken,
    pub key: SearchKey,
}

/// Response received from the search worker
#[derive(Debug, Clone)]
pub struct SearchResponse {
    pub token: RequestToken,
    pub outcome: Result<Vec<RawResult>, SearchError>,
}
