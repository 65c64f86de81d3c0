//! Display formatting for plans and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! wrapper types in this module format them for a specific context:
//!
//! - [`Focus`]: the one-item-at-a-time view shown after every action
//! - [`CreateResult`] / [`ActionResult`]: outcome of generation, complete and
//!   skip
//! - [`OperationStatus`]: one-line notice of whether the stored plan changed
//!
//! All output is markdown so the CLI can render it with termimad or print it
//! as plain text.
//!
//! ```rust
//! use longplan_core::{display::Focus, generator, models::Duration};
//!
//! let plan = generator::generate("영어 공부", Duration::ThreeMonths, 5);
//! let output = Focus(&plan).to_string();
//! assert!(output.contains("# 영어 공부"));
//! assert!(output.contains("학습 목표 정리하기"));
//! ```

pub mod focus;
pub mod models;
pub mod results;
pub mod status;

pub use focus::{Focus, ProgressBar};
pub use results::{ActionResult, CreateResult};
pub use status::OperationStatus;
