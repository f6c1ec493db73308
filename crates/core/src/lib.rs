//! Core business logic for Venturebook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Storage is reached only through the collaborator traits in [`directory`].
//!
//! # Modules
//!
//! - `period` - Quarter-granular reporting periods
//! - `reports` - Quarterly reports, complete-year partitioning and taxes
//! - `directory` - Companies, activity fields and collaborator contracts
//! - `rating` - Most profitable company, consolidated reports and user rating

pub mod directory;
pub mod period;
pub mod rating;
pub mod reports;
