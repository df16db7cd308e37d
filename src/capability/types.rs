//! Parameter descriptors and derived geometry.
//!
//! All types derive `Serialize + Deserialize` so the same types work for
//! both Rust API construction and the JSON model catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// PARAMETER CLASSIFICATION
// ============================================================================

/// Value type of a driver parameter.
///
/// The discriminants are the numeric codes written to the `*StpStp`
/// metadata line, so they must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterType {
    StringList = 0,
    Int = 1,
    Boolean = 2,
    Double = 3,
    Curve = 4,
    File = 5,
    Raw = 6,
    Array = 7,
    Dimension = 8,
    Invalid = 9,
}

impl ParameterType {
    /// Numeric code used in the metadata tuple.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Which dialog tab a parameter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterClass {
    Feature = 0,
    Output = 1,
    Core = 2,
}

impl ParameterClass {
    /// Classes that get option groups, in emission order.
    pub const GROUPED: [ParameterClass; 2] = [ParameterClass::Feature, ParameterClass::Output];

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Untranslated group title for this class.
    pub fn title(self) -> &'static str {
        match self {
            Self::Feature => "Printer Features",
            Self::Output => "Output Control",
            Self::Core => "Core Parameter",
        }
    }
}

/// How deep in the UI a parameter is buried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterLevel {
    Basic = 0,
    Advanced = 1,
    Advanced1 = 2,
    Advanced2 = 3,
    Advanced3 = 4,
    Advanced4 = 5,
    Internal = 6,
    External = 7,
}

impl ParameterLevel {
    /// User-visible levels, in emission order.
    pub const VISIBLE: [ParameterLevel; 6] = [
        ParameterLevel::Basic,
        ParameterLevel::Advanced,
        ParameterLevel::Advanced1,
        ParameterLevel::Advanced2,
        ParameterLevel::Advanced3,
        ParameterLevel::Advanced4,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Untranslated group suffix for this level.
    pub fn title(self) -> &'static str {
        match self {
            Self::Basic => "Common",
            Self::Advanced => "Extra 1",
            Self::Advanced1 => "Extra 2",
            Self::Advanced2 => "Extra 3",
            Self::Advanced3 => "Extra 4",
            Self::Advanced4 => "Extra 5",
            Self::Internal => "Internal",
            Self::External => "External",
        }
    }
}

// ============================================================================
// BOUNDS
// ============================================================================

/// One entry of a string-list parameter: internal name plus display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamString {
    pub name: String,
    pub text: String,
}

impl ParamString {
    pub fn new(name: &str, text: &str) -> Self {
        Self {
            name: name.to_string(),
            text: text.to_string(),
        }
    }
}

/// Legal values of a parameter together with its default.
///
/// Tagged by `type` in JSON, e.g.
/// `{"type": "int", "lower": 0, "upper": 3, "default": 1}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Bounds {
    StringList {
        choices: Vec<ParamString>,
        default: String,
    },
    Int {
        lower: i32,
        upper: i32,
        default: i32,
    },
    Boolean {
        default: bool,
    },
    Double {
        lower: f64,
        upper: f64,
        default: f64,
    },
    Curve,
    File,
    Raw,
    Array,
    /// Lengths in points (1/72 inch).
    Dimension {
        lower: i32,
        upper: i32,
        default: i32,
    },
}

impl Bounds {
    pub fn parameter_type(&self) -> ParameterType {
        match self {
            Self::StringList { .. } => ParameterType::StringList,
            Self::Int { .. } => ParameterType::Int,
            Self::Boolean { .. } => ParameterType::Boolean,
            Self::Double { .. } => ParameterType::Double,
            Self::Curve => ParameterType::Curve,
            Self::File => ParameterType::File,
            Self::Raw => ParameterType::Raw,
            Self::Array => ParameterType::Array,
            Self::Dimension { .. } => ParameterType::Dimension,
        }
    }
}

// ============================================================================
// PARAMETER DESCRIPTOR
// ============================================================================

fn default_true() -> bool {
    true
}

fn default_channel() -> i32 {
    -1
}

/// Snapshot of one driver parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    /// Untranslated display label.
    pub text: String,
    pub class: ParameterClass,
    pub level: ParameterLevel,
    #[serde(default = "default_true")]
    pub mandatory: bool,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default = "default_channel")]
    pub channel: i32,
    /// Category tags such as `"Color": "Yes"`.
    #[serde(default)]
    pub categories: BTreeMap<String, String>,
    #[serde(flatten)]
    pub bounds: Bounds,
}

impl ParameterDescriptor {
    pub fn parameter_type(&self) -> ParameterType {
        self.bounds.parameter_type()
    }

    /// Whether the parameter carries the given category tag value.
    pub fn has_category(&self, category: &str, value: &str) -> bool {
        self.categories.get(category).is_some_and(|v| v == value)
    }

    /// Color-only options are hidden from the no-color-options variant.
    pub fn is_color_option(&self) -> bool {
        self.has_category("Color", "Yes")
    }

    /// Choices of a string-list parameter, empty for other types.
    pub fn choices(&self) -> &[ParamString] {
        match &self.bounds {
            Bounds::StringList { choices, .. } => choices,
            _ => &[],
        }
    }

    /// Default of a string-list parameter.
    pub fn default_str(&self) -> Option<&str> {
        match &self.bounds {
            Bounds::StringList { default, .. } => Some(default),
            _ => None,
        }
    }

    /// Active string list with at least one choice.
    pub fn is_usable_list(&self) -> bool {
        self.active && matches!(&self.bounds, Bounds::StringList { choices, .. } if !choices.is_empty())
    }
}

// ============================================================================
// DERIVED QUANTITIES
// ============================================================================

/// Device resolution in dots per inch.
///
/// Serialized as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct ResolutionPair {
    pub x: i32,
    pub y: i32,
}

impl ResolutionPair {
    /// Marker returned for values without a physical resolution.
    pub const NONE: Self = Self { x: -1, y: -1 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Placeholder values (`None` resolutions) carry `-1` on either axis.
    pub fn is_placeholder(&self) -> bool {
        self.x == -1 || self.y == -1
    }
}

impl From<[i32; 2]> for ResolutionPair {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<ResolutionPair> for [i32; 2] {
    fn from(pair: ResolutionPair) -> Self {
        [pair.x, pair.y]
    }
}

/// Printable area of a medium, in points, measured from the top-left
/// corner of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageableArea {
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
    pub top: i32,
}

/// Size and printable area of a medium for one page-size choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaGeometry {
    pub width: i32,
    pub height: i32,
    pub area: ImageableArea,
}

/// Custom page size limits, in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeLimits {
    pub min_width: i32,
    pub min_height: i32,
    pub max_width: i32,
    pub max_height: i32,
}
