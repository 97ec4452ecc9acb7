//! Clean-up of raw Ibex results dumps into an analysis-ready table.

pub mod clean;
pub mod export;
pub mod filter;
pub mod outlier;

pub use clean::{clean_results, CleanSummary, CleanedResults, ResultsOptions};
pub use export::{read_results, write_results};
pub use filter::{
    filter_results, parse_results, project_row, FilterSummary, FilteredResults, ResultRow,
    ResultTable, TableEntry, JUDGMENT_MARKER, RESULT_ARITY,
};
pub use outlier::{parse_response_time, remove_outliers, OutlierWindow};
