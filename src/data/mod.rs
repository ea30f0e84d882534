pub mod dataset;
pub mod generate;
pub mod group_look;
pub mod projection;
pub mod selection;
pub mod series;
