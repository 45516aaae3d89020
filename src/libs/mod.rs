//! Core library modules for taskmaster.
//!
//! ## Features
//!
//! - **Task model**: records, drafts, status lifecycle and validation
//! - **Engines**: filtering, workflow sort and calendar bucketing, all pure
//!   functions over a task snapshot
//! - **Storage**: the repository contract and the configured store
//! - **Infrastructure**: configuration, data directory, user messages
//! - **Output**: console tables and JSON/CSV export
//!
//! ## Usage
//!
//! ```rust
//! use taskmaster::libs::filter::{filter, FilterCriteria};
//! use taskmaster::libs::sort::sort;
//!
//! let visible = sort(&filter(&[], &FilterCriteria::default()));
//! assert!(visible.is_empty());
//! ```

pub mod calendar;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod filter;
pub mod messages;
pub mod repository;
pub mod sort;
pub mod task;
pub mod view;
