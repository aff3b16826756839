pub mod build_chart;
pub mod load_price_series;

pub use build_chart::*;
pub use load_price_series::*;
