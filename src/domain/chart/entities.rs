use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use super::annotations::AnnotationRow;
use super::value_objects::{ConditionalValue, FieldEncoding, Filter, Mark, Selection};
use crate::domain::errors::{AppError, DashboardResult};
use crate::domain::market_data::PriceSeries;

/// Rows a layer reads from. Shared, never copied per layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    Prices(Arc<PriceSeries>),
    Annotations(Arc<Vec<AnnotationRow>>),
}

impl Dataset {
    pub fn len(&self) -> usize {
        match self {
            Dataset::Prices(series) => series.len(),
            Dataset::Annotations(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dataset::Prices(series) => series.points().serialize(serializer),
            Dataset::Annotations(rows) => rows.serialize(serializer),
        }
    }
}

/// Channel bindings of a layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Encoding {
    pub x: Option<FieldEncoding>,
    pub y: Option<FieldEncoding>,
    pub color: Option<FieldEncoding>,
    pub opacity: Option<ConditionalValue>,
    pub tooltip: Vec<FieldEncoding>,
}

impl Encoding {
    pub fn xy(x: FieldEncoding, y: FieldEncoding) -> Self {
        Self { x: Some(x), y: Some(y), ..Default::default() }
    }

    pub fn with_color(mut self, color: FieldEncoding) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_opacity(mut self, opacity: ConditionalValue) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_tooltip(mut self, tooltip: Vec<FieldEncoding>) -> Self {
        self.tooltip = tooltip;
        self
    }
}

/// One drawing pass over a named dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub dataset: String,
    pub mark: Mark,
    pub encoding: Encoding,
    pub selections: Vec<Selection>,
    pub filters: Vec<Filter>,
}

impl Layer {
    pub fn new(dataset: impl Into<String>, mark: Mark, encoding: Encoding) -> Self {
        Self {
            dataset: dataset.into(),
            mark,
            encoding,
            selections: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Same data and encoding drawn with a different mark.
    pub fn remark(&self, mark: Mark) -> Self {
        Self {
            mark,
            selections: Vec::new(),
            ..self.clone()
        }
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selections.push(selection);
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }
}

/// Backend-agnostic chart description: datasets plus ordered layers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayeredChart {
    pub title: Option<String>,
    pub height: Option<u32>,
    /// Stretch to the container width instead of a fixed width.
    pub full_width: bool,
    /// Pan/zoom bound to the scales.
    pub interactive: bool,
    pub datasets: BTreeMap<String, Dataset>,
    pub layers: Vec<Layer>,
}

impl LayeredChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_dataset(mut self, name: impl Into<String>, dataset: Dataset) -> Self {
        self.datasets.insert(name.into(), dataset);
        self
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Stack `other` on top of `self`. Chart-level properties of `self` win
    /// when both are set; datasets with the same name are taken from `other`.
    pub fn overlay(mut self, other: LayeredChart) -> Self {
        self.title = self.title.or(other.title);
        self.height = self.height.or(other.height);
        self.full_width |= other.full_width;
        self.interactive |= other.interactive;
        self.datasets.extend(other.datasets);
        self.layers.extend(other.layers);
        self
    }

    pub fn dataset(&self, name: &str) -> Option<&Dataset> {
        self.datasets.get(name)
    }

    pub fn selection_names(&self) -> Vec<&str> {
        self.layers
            .iter()
            .flat_map(|layer| layer.selections.iter().map(|s| s.name.as_str()))
            .collect()
    }

    /// Structural checks every backend relies on: layers point at known
    /// datasets, selection names are unique, and every filter or condition
    /// refers to a declared selection.
    pub fn validate(&self) -> DashboardResult<()> {
        if self.layers.is_empty() {
            return Err(AppError::Rendering("chart has no layers".to_string()));
        }

        let mut declared = HashSet::new();
        for name in self.selection_names() {
            if !declared.insert(name) {
                return Err(AppError::Rendering(format!("selection '{}' declared twice", name)));
            }
        }

        for (idx, layer) in self.layers.iter().enumerate() {
            if !self.datasets.contains_key(&layer.dataset) {
                return Err(AppError::Rendering(format!(
                    "layer {} reads unknown dataset '{}'",
                    idx, layer.dataset
                )));
            }
            let referenced = layer
                .filters
                .iter()
                .map(|Filter::InSelection(name)| name.as_str())
                .chain(layer.encoding.opacity.iter().map(|c| c.selection.as_str()));
            for name in referenced {
                if !declared.contains(name) {
                    return Err(AppError::Rendering(format!(
                        "layer {} refers to undeclared selection '{}'",
                        idx, name
                    )));
                }
            }
        }
        Ok(())
    }
}
