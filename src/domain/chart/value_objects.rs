use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// Value Object - mark drawn by a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum MarkType {
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    Line,
    #[display(fmt = "Circle")]
    #[strum(serialize = "circle")]
    Circle,
    #[display(fmt = "Rule")]
    #[strum(serialize = "rule")]
    Rule,
    #[display(fmt = "Text")]
    #[strum(serialize = "text")]
    Text,
}

/// Value Object - how a field is interpreted on an axis or channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum FieldType {
    #[display(fmt = "Temporal")]
    #[strum(serialize = "temporal")]
    Temporal,
    #[display(fmt = "Quantitative")]
    #[strum(serialize = "quantitative")]
    Quantitative,
    #[display(fmt = "Nominal")]
    #[strum(serialize = "nominal")]
    Nominal,
}

/// Value Object - temporal binning applied before encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum TimeUnit {
    #[strum(serialize = "yearmonthdate")]
    YearMonthDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Center,
}

/// Pointer events a selection can listen to
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum PointerEvent {
    #[strum(serialize = "mouseover")]
    MouseOver,
}

/// Value Object - pixel nudge for text marks, clamped to the slider range
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize, Deserialize)]
#[display(fmt = "{}px", _0)]
#[serde(transparent)]
pub struct PixelOffset(i32);

impl PixelOffset {
    pub const MIN: i32 = -30;
    pub const MAX: i32 = 30;

    /// Out-of-range input is clamped rather than rejected, mirroring the slider.
    pub fn new(px: i32) -> Self {
        Self(px.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for PixelOffset {
    fn from(px: i32) -> Self {
        Self::new(px)
    }
}

/// Value Object - live inputs of the chart page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartControls {
    pub ticker: String,
    pub dx: PixelOffset,
    pub dy: PixelOffset,
}

impl ChartControls {
    pub const DEFAULT_TICKER: &'static str = "⬇";

    pub fn new(ticker: impl Into<String>, dx: i32, dy: i32) -> Self {
        Self { ticker: ticker.into(), dx: PixelOffset::new(dx), dy: PixelOffset::new(dy) }
    }
}

impl Default for ChartControls {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TICKER, 0, -10)
    }
}

/// Value Object - mark with its static properties
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub kind: MarkType,
    pub size: Option<f64>,
    pub text: Option<String>,
    pub dx: Option<PixelOffset>,
    pub dy: Option<PixelOffset>,
    pub align: Option<TextAlign>,
}

impl Mark {
    pub fn new(kind: MarkType) -> Self {
        Self { kind, size: None, text: None, dx: None, dy: None, align: None }
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn text(text: impl Into<String>, dx: PixelOffset, dy: PixelOffset) -> Self {
        Self {
            text: Some(text.into()),
            dx: Some(dx),
            dy: Some(dy),
            align: Some(TextAlign::Center),
            ..Self::new(MarkType::Text)
        }
    }
}

/// Value Object - one field bound to a channel
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEncoding {
    pub field: String,
    pub field_type: FieldType,
    pub title: Option<String>,
    pub time_unit: Option<TimeUnit>,
}

impl FieldEncoding {
    pub fn new(field: impl Into<String>, field_type: FieldType) -> Self {
        Self { field: field.into(), field_type, title: None, time_unit: None }
    }

    pub fn temporal(field: impl Into<String>) -> Self {
        Self::new(field, FieldType::Temporal)
    }

    pub fn quantitative(field: impl Into<String>) -> Self {
        Self::new(field, FieldType::Quantitative)
    }

    pub fn nominal(field: impl Into<String>) -> Self {
        Self::new(field, FieldType::Nominal)
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn binned(mut self, unit: TimeUnit) -> Self {
        self.time_unit = Some(unit);
        self
    }
}

/// Value Object - channel value switched by selection membership
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalValue {
    pub selection: String,
    pub when_selected: f64,
    pub otherwise: f64,
}

/// Value Object - interaction rule binding pointer proximity to fields
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub name: String,
    pub fields: Vec<String>,
    pub nearest: bool,
    pub on: PointerEvent,
    /// Whether an empty selection counts as "everything selected".
    pub empty_selects_all: bool,
}

impl Selection {
    /// Nearest-point hover over `field`; nothing is selected until the
    /// pointer is over the plot.
    pub fn nearest_hover(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: vec![field.into()],
            nearest: true,
            on: PointerEvent::MouseOver,
            empty_selects_all: false,
        }
    }
}

/// Value Object - row filter applied before a layer draws
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Keep rows inside the named selection; empty selection keeps nothing.
    InSelection(String),
}
