//! # schemadoc
//!
//! Generates cross-referenced documentation of a relational schema from the
//! database's own metadata catalog.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │            Catalog Reader (sqlite / snapshot)            │
//! │   (table list, columns, foreign keys, indexes, triggers) │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [registry]
//! ┌─────────────────────────────────────────────────────────┐
//! │        Admitted tables (ignore list / regex applied)     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [resolver + annotator]
//! ┌─────────────────────────────────────────────────────────┐
//! │   SchemaModel (explicit FKs, inferred FKs, indexes,      │
//! │   triggers, display types / lengths / badges)            │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [emitter]
//! ┌─────────────────────────────────────────────────────────┐
//! │    DocumentSet (summary, table list, per-table pages)    │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [renderer]
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Static HTML pages                     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! A run is one atomic pipeline: it produces a fully-formed model or
//! nothing. Foreign keys come from explicit catalog constraints where
//! declared, and from a `*_id` naming-convention heuristic otherwise.

pub mod catalog;
pub mod config;
pub mod emit;
pub mod error;
pub mod inflect;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod render;

pub use error::{DocError, DocResult};
pub use pipeline::{run, RunOptions};
