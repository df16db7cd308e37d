//! # IR Opcodes
//!
//! This module defines the intermediate representation (IR) for PPD
//! documents. The IR is a sequence of directives that can be inspected,
//! compared in tests, and compiled to document text.
//!
//! ## Design Philosophy
//!
//! The IR sits between the section emitters and the written file:
//!
//! ```text
//! Emitters → IR (inspectable) → Codegen → Bytes
//! ```
//!
//! Each opcode is one directive of the PPD grammar. Whether a declaration
//! is normal or conditionally ignorable is a field, never a string prefix.

use crate::capability::{ParameterDescriptor, ParameterType};

/// How a consumer must treat a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disposition {
    /// Regular declaration.
    #[default]
    Normal,
    /// Conditionally ignorable (`*?Keyword`); consumers may drop it
    /// without reporting an error.
    Ignorable,
}

/// Outcome of deciding whether one entry is declared.
///
/// Fatal conditions are not represented here; they surface as `Err` from
/// the emitter.
#[derive(Debug, Clone, PartialEq)]
pub enum Declared<T> {
    Emit(T),
    Ignorable(T),
    /// Not declared at all.
    Skip,
}

impl<T> Declared<T> {
    /// The entry and its disposition, `None` when skipped.
    pub fn into_parts(self) -> Option<(T, Disposition)> {
        match self {
            Self::Emit(item) => Some((item, Disposition::Normal)),
            Self::Ignorable(item) => Some((item, Disposition::Ignorable)),
            Self::Skip => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Declared<U> {
        match self {
            Self::Emit(item) => Declared::Emit(f(item)),
            Self::Ignorable(item) => Declared::Ignorable(f(item)),
            Self::Skip => Declared::Skip,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip)
    }
}

/// Right-hand side of an option declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// `: ""`
    #[default]
    Empty,
    /// PostScript code, tab separated: `:\t"<code>"`
    Code(String),
    /// Quoted string, space separated: `: "<text>"`
    Quoted(String),
    /// Unquoted value: `: <text>`
    Bare(String),
}

/// One option of a UI block: `*Keyword Option/Label: Value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub keyword: String,
    pub option: String,
    pub label: String,
    pub value: Value,
    pub disposition: Disposition,
}

impl Choice {
    pub fn new(keyword: &str, option: &str, label: &str, value: Value) -> Self {
        Self {
            keyword: keyword.to_string(),
            option: option.to_string(),
            label: label.to_string(),
            value,
            disposition: Disposition::Normal,
        }
    }

    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = disposition;
        self
    }
}

/// Option metadata tuple written as `*StpStp<name>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metadata {
    pub p_type: ParameterType,
    pub mandatory: bool,
    pub class: i32,
    pub level: i32,
    pub channel: i32,
    pub lower: f64,
    pub upper: f64,
    pub default: f64,
}

impl Metadata {
    /// Metadata of a driver parameter.
    pub fn of(desc: &ParameterDescriptor) -> Self {
        use crate::capability::Bounds;

        let (lower, upper, default) = match &desc.bounds {
            Bounds::Boolean { default } => (0.0, 0.0, if *default { 1.0 } else { 0.0 }),
            Bounds::Double {
                lower,
                upper,
                default,
            } => (*lower, *upper, *default),
            Bounds::Int {
                lower,
                upper,
                default,
            }
            | Bounds::Dimension {
                lower,
                upper,
                default,
            } => (f64::from(*lower), f64::from(*upper), f64::from(*default)),
            _ => (0.0, 0.0, 0.0),
        };
        Self {
            p_type: desc.parameter_type(),
            mandatory: desc.mandatory,
            class: desc.class.code(),
            level: desc.level.code(),
            channel: desc.channel,
            lower,
            upper,
            default,
        }
    }

    /// Metadata of synthesized options that no driver parameter backs.
    pub fn synthetic() -> Self {
        Self {
            p_type: ParameterType::Invalid,
            mandatory: false,
            class: 0,
            level: 0,
            channel: -1,
            lower: 0.0,
            upper: 0.0,
            default: 0.0,
        }
    }
}

/// IR opcodes, one per document directive.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    // ========== Structure ==========
    /// `*%<text>` comment line.
    Comment(String),

    /// Empty line.
    Blank,

    /// `*Keyword: value`, value written verbatim.
    Attribute { keyword: String, value: String },

    // ========== UI Blocks ==========
    /// `*OpenUI *Keyword/Label: PickOne`
    OpenUi { keyword: String, label: String },

    /// `*CloseUI: *Keyword`, followed by an empty line.
    CloseUi(String),

    /// `*ColorKeyWords: "Keyword"`
    ColorKeyword(String),

    /// `*OPOptionHints Keyword: "hints"`
    OptionHints { keyword: String, hints: String },

    /// `*OrderDependency: N AnySetup *Keyword`
    OrderDependency { order: u32, keyword: String },

    /// `*StpStp<name>: type mandatory class level channel lower upper default`
    Metadata { name: String, meta: Metadata },

    /// `*DefaultKeyword: value` paired with `*StpDefaultKeyword: value`.
    Default { keyword: String, value: String },

    /// One option declaration.
    Choice(Choice),

    /// Translation of a declaration: `*<lang>.Keyword Option/Label: Value`.
    Localized { lang: String, choice: Choice },

    // ========== Groups ==========
    /// `*OpenGroup: C<c>L<l>/<label>`, followed by an empty line.
    OpenGroup { class: i32, level: i32, label: String },

    /// `*CloseGroup: C<c>L<l>/<label>`, followed by an empty line.
    CloseGroup { class: i32, level: i32, label: String },

    // ========== Driver Attributes ==========
    /// `*StpResolutionMap: presentable internal`
    ResolutionMap { presentable: String, internal: String },

    /// `*Keyword: first second` UI constraint.
    Constraint {
        keyword: String,
        first: String,
        second: String,
    },
}

impl Op {
    /// `*Keyword: value`
    pub fn attr(keyword: &str, value: impl Into<String>) -> Self {
        Op::Attribute {
            keyword: keyword.to_string(),
            value: value.into(),
        }
    }

    /// `*Keyword: "value"`
    pub fn quoted(keyword: &str, value: &str) -> Self {
        Op::Attribute {
            keyword: keyword.to_string(),
            value: format!("\"{}\"", value),
        }
    }

    pub fn comment(text: &str) -> Self {
        Op::Comment(text.to_string())
    }

    pub fn default(keyword: &str, value: &str) -> Self {
        Op::Default {
            keyword: keyword.to_string(),
            value: value.to_string(),
        }
    }
}

/// A compiled document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Add multiple ops to the program.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = Op>) {
        self.ops.extend(ops);
    }

    /// Push a declaration unless it was skipped.
    pub fn declare(&mut self, declared: Declared<Choice>) {
        if let Some((choice, disposition)) = declared.into_parts() {
            self.push(Op::Choice(choice.with_disposition(disposition)));
        }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }

    /// Option declarations for one keyword, in order.
    pub fn choices<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = &'a Choice> + 'a {
        self.ops.iter().filter_map(move |op| match op {
            Op::Choice(choice) if choice.keyword == keyword => Some(choice),
            _ => None,
        })
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Program {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
