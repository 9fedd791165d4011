//! Type-ahead search for places, hotels and restaurants
//!
//! The library holds the search-interaction controller: debounced querying
//! with stale-response protection, relevance ranking, keyboard selection,
//! optional voice input, overlay dismissal and navigation requests. The
//! `app` module hosts it in a terminal UI.

pub mod app;
pub mod config;
pub mod error;
pub mod navigation;
pub mod notification;
pub mod overlay;
pub mod search;
pub mod search_box;
pub mod selection;
pub mod voice;
pub mod widgets;


pub use error::{RecognitionError, SearchError, TripsearchError};
pub use search_box::{PointerOutcome, SearchBox, SearchBoxEvent};
