pub mod explorer_ui;
pub mod scatter_ui;
pub mod series_ui;

pub use explorer_ui::ExplorerPanel;
pub use scatter_ui::ScatterPanel;
pub use series_ui::SeriesPanel;
