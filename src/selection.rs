mod state;

pub use state::{CommitTarget, SelectionState};
