pub mod dependency_filter;
pub mod progress_sink;

pub use dependency_filter::{DependencyFilter, DEFAULT_INTERNAL_PATTERN};
pub use progress_sink::{NullSink, ProgressSink};
