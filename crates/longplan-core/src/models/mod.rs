//! Data models for plans, phases and items.
//!
//! A [`Plan`] exclusively owns its [`Phase`]s, and each phase exclusively
//! owns its [`Item`]s. Items refer back to their phase only by id. Display
//! implementations for these models live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use longplan_core::models::{Duration, ItemStatus};
//!
//! assert_eq!(Duration::SixMonths.weeks(), 26);
//! assert_eq!(Duration::SixMonths.code(), "6months");
//! assert_eq!(ItemStatus::Pending.as_str(), "pending");
//! ```

pub mod category;
pub mod duration;
pub mod item;
pub mod plan;
pub mod progress;
pub mod status;


pub use category::Category;
pub use duration::Duration;
pub use item::Item;
pub use plan::{Phase, Plan};
pub use progress::Progress;
pub use status::ItemStatus;
