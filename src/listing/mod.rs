//! The listing pipeline: filter -> favorites scope -> pagination.
//!
//! Each stage is a pure computation over the latest committed catalog
//! snapshot and the current criteria. Recomputation is memoized on input
//! identity so per-keystroke updates stay proportional to collection
//! size and never run more than once per visible change.

mod carousel;
mod filter;
mod pagination;
mod pipeline;

pub use carousel::Carousel;
pub use filter::{filter_records, FilterCriteria, FilterEngine};
pub use pagination::{PageWindow, PAGE_SIZE};
pub use pipeline::{ListingPipeline, ListingView};
