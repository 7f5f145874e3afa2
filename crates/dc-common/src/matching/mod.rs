pub mod criteria;
pub mod filters;
pub mod pipeline;
pub mod relevance;
pub mod sorting;
pub mod weights;

pub use criteria::{BudgetRange, DatePosted, FilterCriteria, BUDGET_SLIDER_CEILING};
pub use pipeline::{JobMatch, JobMatchEngine, MatchEngineConfig};
pub use sorting::SortMode;
