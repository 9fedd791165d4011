pub mod controller;
pub mod debouncer;
pub mod ranker;
pub mod types;
pub mod worker;

// Re-export public types
pub use controller::{QueryController, ResponseDisposition};
pub use debouncer::Debouncer;
pub use types::{
    Category, RankedResult, RawResult, RequestToken, ResultKind, SearchKey, SearchRequest,
    SearchResponse,
};
pub use worker::{HttpBackend, SearchBackend, SearchWorker, spawn_worker};
