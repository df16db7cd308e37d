//! Page sizes: the PageSize and PageRegion menus, the imageable area and
//! paper dimension tables, and custom page size parameters.

use super::Emitter;
use super::localize::Label;
use crate::capability::papers::{self, CUSTOM};
use crate::capability::{MediaGeometry, ParamString, ParameterDescriptor};
use crate::ir::{Choice, Declared, Op, Value};

/// Page size menus with at least this many entries drop the extended
/// paper families in simplified documents.
pub const SIMPLIFIED_SIZE_THRESHOLD: usize = 10;

/// One declared page size, in points with a bottom-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperSizeEntry {
    pub name: String,
    pub text: String,
    pub width: i32,
    pub height: i32,
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
    pub top: i32,
}

impl PaperSizeEntry {
    /// Clip the printable area to the sheet and flip it to a bottom-left
    /// origin.
    pub fn new(name: &str, text: &str, geometry: &MediaGeometry) -> Self {
        let MediaGeometry {
            width,
            height,
            area,
        } = *geometry;
        let left = area.left.max(0);
        let right = area.right.min(width);
        let bottom = area.bottom.min(height);
        let top = area.top.max(0);

        Self {
            name: name.to_string(),
            text: text.to_string(),
            width,
            height,
            left,
            right,
            bottom: height - bottom,
            top: height - top,
        }
    }

    fn page_device(&self) -> Value {
        Value::Code(format!(
            "<</PageSize[{} {}]/ImagingBBox null>>setpagedevice",
            self.width, self.height
        ))
    }
}

impl Emitter<'_> {
    /// Decide whether one page size choice is declared.
    fn declare_paper(&self, choice: &ParamString, count: usize) -> Declared<PaperSizeEntry> {
        let Some(paper) = papers::by_name(&choice.name) else {
            log::warn!("Unable to lookup size {}", choice.name);
            return Declared::Skip;
        };
        if self.variant().is_simplified()
            && count >= SIMPLIFIED_SIZE_THRESHOLD
            && paper.unit.is_extended()
        {
            return Declared::Skip;
        }
        if paper.width <= 0 || paper.height <= 0 {
            return Declared::Skip;
        }
        match self.source.media_geometry(&choice.name) {
            Some(geometry) => Declared::Emit(PaperSizeEntry::new(&choice.name, &choice.text, &geometry)),
            None => {
                log::warn!("No media geometry for size {}", choice.name);
                Declared::Skip
            }
        }
    }

    pub(super) fn emit_page_sizes(&mut self) {
        let Some(desc) = self.source.describe("PageSize") else {
            log::warn!("Driver {} has no page sizes", self.source.info().driver);
            return;
        };
        let choices = desc.choices();
        let custom_listed = choices.iter().any(|c| c.name == CUSTOM);
        let entries: Vec<PaperSizeEntry> = choices
            .iter()
            .filter(|c| c.name != CUSTOM)
            .filter_map(|c| self.declare_paper(c, choices.len()).into_parts())
            .map(|(entry, _)| entry)
            .collect();
        let custom = if custom_listed {
            let limits = self.source.size_limits();
            if limits.is_none() {
                log::warn!("Custom size listed without size limits");
            }
            limits
        } else {
            None
        };
        let default = desc.default_str().unwrap_or_default().to_string();

        let variable = if custom.is_some() { "true" } else { "false" };
        self.push(Op::attr("VariablePaperSize", variable));
        self.push(Op::Blank);

        for keyword in ["PageSize", "PageRegion"] {
            self.emit_size_menu(keyword, &desc, &entries, &default, custom.is_some());
        }

        self.push(Op::default("ImageableArea", &default));
        for entry in &entries {
            let area = format!("{} {} {} {}", entry.left, entry.bottom, entry.right, entry.top);
            self.push(Op::Choice(Choice::new(
                "ImageableArea",
                &entry.name,
                self.tr.tr(&entry.text),
                Value::Code(area),
            )));
        }
        self.push(Op::Blank);

        self.push(Op::default("PaperDimension", &default));
        for entry in &entries {
            let dimension = format!("{} {}", entry.width, entry.height);
            self.push(Op::Choice(Choice::new(
                "PaperDimension",
                &entry.name,
                self.tr.tr(&entry.text),
                Value::Code(dimension),
            )));
        }
        self.push(Op::Blank);

        if let Some(limits) = custom {
            self.emit_custom_size(limits);
        }
    }

    fn emit_size_menu(
        &mut self,
        keyword: &str,
        desc: &ParameterDescriptor,
        entries: &[PaperSizeEntry],
        default: &str,
        custom: bool,
    ) {
        if desc.is_color_option() {
            self.push(Op::ColorKeyword(keyword.to_string()));
        }
        self.begin_ui(keyword, Label::message("Media Size"), Some("dropdown"), 10);
        if keyword == "PageSize" {
            self.metadata(desc);
        }
        self.push(Op::default(keyword, default));
        for entry in entries {
            self.option(keyword, &entry.name, Label::message(&entry.text), entry.page_device());
        }
        if custom {
            // Only the label is declared; the size itself is CustomPageSize
            let text = desc
                .choices()
                .iter()
                .find(|c| c.name == CUSTOM)
                .map_or(CUSTOM, |c| c.text.as_str());
            self.keys.record(keyword, CUSTOM, Label::message(text), Value::Empty);
        }
        self.close_ui(keyword);
    }

    fn emit_custom_size(&mut self, limits: crate::capability::SizeLimits) {
        let Some(geometry) = self.source.media_geometry(CUSTOM) else {
            log::warn!("No media geometry for custom sizes");
            return;
        };
        let MediaGeometry {
            width,
            height,
            area,
        } = geometry;
        let left = area.left.max(0);
        let top = area.top.max(0);
        let bottom = area.bottom.min(height);
        let right = area.right.min(width);

        self.push(Op::quoted("MaxMediaWidth", &limits.max_width.to_string()));
        self.push(Op::quoted("MaxMediaHeight", &limits.max_height.to_string()));
        self.push(Op::attr(
            "HWMargins",
            format!("{} {} {} {}", left, height - bottom, width - right, top),
        ));
        self.push(Op::quoted(
            "CustomPageSize True",
            "pop pop pop <</PageSize[5 -2 roll]/ImagingBBox null>>setpagedevice",
        ));
        self.push(Op::attr(
            "ParamCustomPageSize Width",
            format!("1 points {} {}", limits.min_width, limits.max_width),
        ));
        self.push(Op::attr(
            "ParamCustomPageSize Height",
            format!("2 points {} {}", limits.min_height, limits.max_height),
        ));
        self.push(Op::attr("ParamCustomPageSize WidthOffset", "3 points 0 0"));
        self.push(Op::attr("ParamCustomPageSize HeightOffset", "4 points 0 0"));
        self.push(Op::attr("ParamCustomPageSize Orientation", "5 int 0 0"));
        self.push(Op::Blank);
    }
}
