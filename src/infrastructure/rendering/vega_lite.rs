//! Vega-Lite v5 rendering of [`LayeredChart`].
//!
//! Object keys are emitted in alphabetical order so the output is stable
//! whether or not `serde_json` preserves insertion order.

use serde_json::{Map, Value, json};
use std::collections::HashMap;

use crate::domain::{
    chart::{ConditionalValue, Encoding, FieldEncoding, Filter, Layer, LayeredChart, Mark, Selection},
    errors::{AppError, DashboardResult},
};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Name of the interval param that binds pan/zoom to the scales.
pub const PAN_ZOOM_PARAM: &str = "pan_zoom";

/// Whole-chart document, ready for `vegaEmbed`.
pub fn to_vega_lite(chart: &LayeredChart) -> DashboardResult<Value> {
    chart.validate()?;

    let empty_policy: HashMap<&str, bool> = chart
        .layers
        .iter()
        .flat_map(|layer| layer.selections.iter())
        .map(|s| (s.name.as_str(), s.empty_selects_all))
        .collect();

    let mut spec = Map::new();
    spec.insert("$schema".into(), json!(VEGA_LITE_SCHEMA));
    if chart.full_width {
        spec.insert("autosize".into(), json!({ "contains": "padding", "type": "fit-x" }));
    }

    let mut datasets = Map::new();
    for (name, dataset) in &chart.datasets {
        let rows = serde_json::to_value(dataset).map_err(|e| AppError::Rendering(e.to_string()))?;
        datasets.insert(name.clone(), rows);
    }
    spec.insert("datasets".into(), Value::Object(datasets));

    if let Some(height) = chart.height {
        spec.insert("height".into(), json!(height));
    }

    let layers = chart
        .layers
        .iter()
        .enumerate()
        .map(|(idx, layer)| layer_spec(layer, idx == 0 && chart.interactive, &empty_policy))
        .collect::<Vec<_>>();
    spec.insert("layer".into(), Value::Array(layers));

    if let Some(title) = &chart.title {
        spec.insert("title".into(), json!(title));
    }
    if chart.full_width {
        spec.insert("width".into(), json!("container"));
    }

    Ok(Value::Object(spec))
}

fn layer_spec(layer: &Layer, pan_zoom: bool, empty_policy: &HashMap<&str, bool>) -> Value {
    let mut obj = Map::new();
    obj.insert("data".into(), json!({ "name": layer.dataset }));
    obj.insert("encoding".into(), encoding_spec(&layer.encoding, empty_policy));
    obj.insert("mark".into(), mark_spec(&layer.mark));

    let mut params: Vec<Value> = layer.selections.iter().map(selection_spec).collect();
    if pan_zoom {
        params.push(json!({
            "bind": "scales",
            "name": PAN_ZOOM_PARAM,
            "select": { "encodings": ["x", "y"], "type": "interval" }
        }));
    }
    if !params.is_empty() {
        obj.insert("params".into(), Value::Array(params));
    }

    if !layer.filters.is_empty() {
        let transforms = layer
            .filters
            .iter()
            .map(|Filter::InSelection(name)| {
                let empty = empty_policy.get(name.as_str()).copied().unwrap_or(true);
                json!({ "filter": { "empty": empty, "param": name } })
            })
            .collect();
        obj.insert("transform".into(), Value::Array(transforms));
    }
    Value::Object(obj)
}

fn mark_spec(mark: &Mark) -> Value {
    let mut obj = Map::new();
    if let Some(align) = mark.align {
        obj.insert("align".into(), json!(align.as_ref()));
    }
    if let Some(dx) = mark.dx {
        obj.insert("dx".into(), json!(dx.value()));
    }
    if let Some(dy) = mark.dy {
        obj.insert("dy".into(), json!(dy.value()));
    }
    if let Some(size) = mark.size {
        obj.insert("size".into(), json!(size));
    }
    if let Some(text) = &mark.text {
        obj.insert("text".into(), json!(text));
    }
    obj.insert("type".into(), json!(mark.kind.as_ref()));
    Value::Object(obj)
}

fn encoding_spec(encoding: &Encoding, empty_policy: &HashMap<&str, bool>) -> Value {
    let mut obj = Map::new();
    if let Some(color) = &encoding.color {
        obj.insert("color".into(), field_spec(color));
    }
    if let Some(opacity) = &encoding.opacity {
        obj.insert("opacity".into(), condition_spec(opacity, empty_policy));
    }
    if !encoding.tooltip.is_empty() {
        obj.insert("tooltip".into(), Value::Array(encoding.tooltip.iter().map(field_spec).collect()));
    }
    if let Some(x) = &encoding.x {
        obj.insert("x".into(), field_spec(x));
    }
    if let Some(y) = &encoding.y {
        obj.insert("y".into(), field_spec(y));
    }
    Value::Object(obj)
}

fn field_spec(field: &FieldEncoding) -> Value {
    let mut obj = Map::new();
    obj.insert("field".into(), json!(field.field));
    if let Some(unit) = field.time_unit {
        obj.insert("timeUnit".into(), json!(unit.as_ref()));
    }
    if let Some(title) = &field.title {
        obj.insert("title".into(), json!(title));
    }
    obj.insert("type".into(), json!(field.field_type.as_ref()));
    Value::Object(obj)
}

fn condition_spec(cond: &ConditionalValue, empty_policy: &HashMap<&str, bool>) -> Value {
    let empty = empty_policy.get(cond.selection.as_str()).copied().unwrap_or(true);
    json!({
        "condition": { "empty": empty, "param": cond.selection, "value": cond.when_selected },
        "value": cond.otherwise
    })
}

fn selection_spec(selection: &Selection) -> Value {
    json!({
        "name": selection.name,
        "select": {
            "fields": selection.fields,
            "nearest": selection.nearest,
            "on": selection.on.as_ref(),
            "type": "point"
        }
    })
}
