//! Chart backends. `vega_lite` is pure and testable natively; `vega_embed`
//! needs the browser.

pub mod vega_embed;
pub mod vega_lite;

pub use vega_embed::VegaEmbedBackend;
pub use vega_lite::{PAN_ZOOM_PARAM, VEGA_LITE_SCHEMA, to_vega_lite};
