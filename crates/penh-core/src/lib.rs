//! # penh-core - Core Table Model
//!
//! Foundation crate for Permissions Enhancer. Provides the abstract table
//! shapes, the pure row classifier, the single-pass table parser, the
//! decorated module model, and error handling.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Table Shapes (`table`)
//! - [`TableRow`], [`TableCell`] - Adapter-independent row/cell sequence
//! - [`RowId`] - Document index of a row
//! - [`classify()`] - Shape classification into [`RowKind`]
//!
//! ### Parser (`parser`)
//! - [`TableParser`] - Row-at-a-time state machine
//! - [`FeedResult`] - Result of feeding a row to the parser
//! - [`parse_table()`] - Parse a whole row sequence
//!
//! ### Model (`model`)
//! - [`ParsedModule`], [`PermissionRow`] - Parser output
//! - [`ModuleGroup`] - Decorated group with frozen [`GroupCounts`] and [`CountStyle`]
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]

pub mod error;
pub mod logging;
pub mod model;
pub mod parser;
pub mod prelude;
pub mod table;

pub use error::{Error, Result, ResultExt};
pub use model::{CountStyle, GroupCounts, GroupId, ModuleGroup, ParsedModule, PermissionRow};
pub use parser::{parse_table, FeedResult, TableParser};
pub use table::{classify, RowId, RowKind, TableCell, TableRow};
