//! Process table model: filtering, sorting and per-frame aggregates.
//!
//! Everything in here is plain data so it can be tested without a terminal
//! or a live process table.

pub mod filter;
pub mod frame;
pub mod sample;
pub mod sort;

pub use filter::FilterQuery;
pub use frame::FrameView;
pub use sample::ProcessSample;
pub use sort::SortMode;
