//! Entrepreneur rating.
//!
//! The rating combines how favorable a user's best company's activity field is
//! with the profit margin across all companies the user owns:
//!
//! ```text
//! rating = (cost / max_cost + profit / revenue) / 2
//! ```
//!
//! [`RatingService`] also exposes the two aggregation operations the rating is
//! built from: the most profitable company over a period and the consolidated,
//! taxed financial report of a user.

pub mod calculator;
pub mod error;
pub mod service;
pub mod types;

pub use calculator::calc_rating;
pub use error::RatingError;
pub use service::{RatingService, consolidate, most_profitable_index};
pub use types::{RatingSettings, UserRating};
