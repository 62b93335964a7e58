//! penh-app - Group controller for Permissions Enhancer
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! module-group state machine: [`Message`]s go through [`update`], which
//! mutates the [`EnhancerState`] and returns [`ViewPatch`]es. The
//! [`Enhancer`] owns one table's view and applies those patches through the
//! [`TableView`] seam. Configuration loading lives in [`config`].

pub mod config;
pub mod enhancer;
pub mod handler;
pub mod message;
pub mod state;
pub mod view;

// Re-export primary types
pub use config::Settings;
pub use enhancer::{Enhancer, GroupIndicators};
pub use handler::{update, UpdateResult};
pub use message::{BulkAction, Message};
pub use state::EnhancerState;
pub use view::{IndicatorPosition, MemoryIndicator, MemoryRow, MemoryView, TableView, ViewPatch};
