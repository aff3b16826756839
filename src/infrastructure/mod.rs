pub mod dataset;
pub mod rendering;
pub mod services;

pub use dataset::CsvPriceRepository;
pub use rendering::VegaEmbedBackend;
pub use services::{BrowserTimeProvider, ConsoleLogger, load_page_config};
