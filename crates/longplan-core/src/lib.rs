//! Core library for the longplan goal planner.
//!
//! This crate turns a free-text goal, a [`Duration`] and a weekly time budget
//! into a [`Plan`] of ordered phases and items, then tracks progress through
//! that plan one current item at a time.
//!
//! - [`generator`]: classification, templates, scaling and assembly
//! - [`progression`]: current item, complete, skip and progress
//! - [`record`] / [`store`]: the persisted JSON record and its file store
//! - [`display`]: markdown formatting for the CLI
//!
//! # Quick Start
//!
//! ```rust
//! use longplan_core::{generator, models::Duration};
//!
//! let mut plan = generator::generate("영어 공부", Duration::ThreeMonths, 5);
//!
//! let first = plan.current_item().map(|item| item.name.clone());
//! assert_eq!(first.as_deref(), Some("학습 목표 정리하기"));
//!
//! assert!(plan.skip_current());
//! assert!(plan.complete_current());
//!
//! let progress = plan.progress();
//! assert_eq!((progress.completed, progress.total), (1, 17));
//! ```

pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod progression;
pub mod record;
pub mod store;

// Re-export commonly used types
pub use display::{ActionResult, CreateResult, Focus, OperationStatus};
pub use error::{LongPlanError, Result};
pub use generator::{classify, generate, generate_plan};
pub use models::{Category, Duration, Item, ItemStatus, Phase, Plan, Progress};
pub use params::GeneratePlan;
pub use progression::PlanAction;
pub use record::Decoded;
pub use store::{PlanStore, PlanStoreBuilder};
