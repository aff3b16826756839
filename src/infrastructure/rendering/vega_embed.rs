use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};

use super::vega_lite::to_vega_lite;
use crate::{log_error, log_trace};
use crate::domain::{
    chart::{ChartBackend, LayeredChart},
    errors::{AppError, DashboardResult},
    logging::LogComponent,
};

#[wasm_bindgen]
extern "C" {
    /// `vegaEmbed(el, spec, opts)` from the vega-embed bundle loaded by the page.
    #[wasm_bindgen(js_name = vegaEmbed, catch)]
    fn vega_embed(el: &web_sys::Element, spec: &JsValue, opts: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

/// Renders through the page's `vegaEmbed` global.
#[derive(Debug, Clone, Default)]
pub struct VegaEmbedBackend {
    /// Show vega-embed's export/source menu.
    pub actions: bool,
}

impl VegaEmbedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn options(&self) -> DashboardResult<JsValue> {
        let raw = serde_json::json!({ "actions": self.actions }).to_string();
        js_sys::JSON::parse(&raw).map_err(|e| AppError::Rendering(format!("{:?}", e)))
    }
}

impl ChartBackend for VegaEmbedBackend {
    fn name(&self) -> &'static str {
        "vega-embed"
    }

    fn render(&self, container_id: &str, chart: &LayeredChart) -> DashboardResult<()> {
        let element = gloo::utils::document()
            .get_element_by_id(container_id)
            .ok_or_else(|| AppError::Rendering(format!("no element with id '{}'", container_id)))?;

        let spec = to_vega_lite(chart)?.to_string();
        let spec = js_sys::JSON::parse(&spec).map_err(|e| AppError::Rendering(format!("{:?}", e)))?;
        let promise = vega_embed(&element, &spec, &self.options()?)
            .map_err(|e| AppError::Rendering(format!("vegaEmbed unavailable: {:?}", e)))?;

        let container = container_id.to_string();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {
                    log_trace!(LogComponent::Infrastructure("VegaEmbed"), "chart drawn into #{}", container);
                }
                Err(e) => {
                    log_error!(LogComponent::Infrastructure("VegaEmbed"), "vegaEmbed rejected for #{}: {:?}", container, e);
                }
            }
        });
        Ok(())
    }
}
