//! LatentScope crate root: re-exports and module wiring.
//!
//! This crate provides an interactive latent-space explorer built on
//! egui/eframe: a 2D scatter projection of latent points next to a companion
//! series plot derived from the selected dataset rows.
//!
//! The implementation is split into cohesive modules:
//! - `data`: pure core — generation, selection resolution, series shaping,
//!   scatter projection
//! - `events`: event subscription for embedding callers
//! - `config`: shared configuration
//! - `persistence`: JSON save/load of view settings
//! - `panels` / `app`: the explorer UI and run helpers

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod panels;
pub mod persistence;

// Public re-exports for a compact external API
pub use app::{run_explorer, ExplorerApp};
pub use config::{ExplorerConfig, FeatureFlags};
pub use data::dataset::{Dataset, LatentPoint, LatentPointSet, Snapshot, DATASET_ROWS, SAMPLES_PER_ROW};
pub use data::generate::{generate_dataset, generate_latent_points, regenerate};
pub use data::group_look::GroupLook;
pub use data::projection::{project, GroupBy, NameMap, PointGroup, ScatterFilter, UNLABELED};
pub use data::selection::{resolve, SelectionEvent, Subset};
pub use data::series::{shape, DisplayMode, SeriesData};
pub use error::ExplorerError;
pub use events::{EventController, EventFilter, EventKind, ExplorerEvent};
pub use panels::ExplorerPanel;
