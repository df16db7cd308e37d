//! # Paper Sizes
//!
//! Static reference table of named media sizes.
//!
//! All dimensions are in points (1/72 inch). Entries with a zero size
//! (`Custom`) are placeholders that only signal custom size support.

/// Measurement family a size belongs to.
///
/// Simplified documents drop the `*Extended` families when a printer offers
/// many sizes, keeping the page size menu short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperUnit {
    English,
    Metric,
    EnglishExtended,
    MetricExtended,
}

impl PaperUnit {
    pub fn is_extended(self) -> bool {
        matches!(self, Self::EnglishExtended | Self::MetricExtended)
    }
}

/// A named media size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaperSize {
    pub name: &'static str,
    pub text: &'static str,
    pub width: i32,
    pub height: i32,
    pub unit: PaperUnit,
}

/// Name of the placeholder size that enables custom page sizes.
pub const CUSTOM: &str = "Custom";

const fn paper(name: &'static str, text: &'static str, width: i32, height: i32, unit: PaperUnit) -> PaperSize {
    PaperSize {
        name,
        text,
        width,
        height,
        unit,
    }
}

use PaperUnit::*;

/// Known paper sizes.
pub const PAPERS: &[PaperSize] = &[
    paper("Letter", "Letter", 612, 792, English),
    paper("Legal", "Legal", 612, 1008, English),
    paper("Executive", "Executive", 522, 756, English),
    paper("Tabloid", "11x17", 792, 1224, English),
    paper("Statement", "Manual", 396, 612, English),
    paper("w288h432", "4x6", 288, 432, English),
    paper("w360h504", "5x7", 360, 504, English),
    paper("w576h720", "8x10", 576, 720, English),
    paper("COM10", "Envelope #10", 297, 684, English),
    paper("A3", "A3", 842, 1191, Metric),
    paper("A4", "A4", 595, 842, Metric),
    paper("A5", "A5", 420, 595, Metric),
    paper("A6", "A6", 297, 420, Metric),
    paper("B5", "B5 JIS", 516, 729, Metric),
    paper("Postcard", "Postcard", 283, 420, Metric),
    paper("DL", "Envelope DL", 312, 624, Metric),
    paper("C5", "Envelope C5", 459, 649, Metric),
    paper("w936h1368", "Super B 13x19", 936, 1368, EnglishExtended),
    paper("ARCHC", "Arch C", 1296, 1728, EnglishExtended),
    paper("w612h935", "Executive (Brazil)", 612, 935, EnglishExtended),
    paper("A2", "A2", 1191, 1684, MetricExtended),
    paper("SuperA3", "Super A3/B", 932, 1369, MetricExtended),
    paper("A4Extra", "A4 Extra", 667, 914, MetricExtended),
    paper(CUSTOM, "Custom", 0, 0, English),
];

/// Look up a paper size by its exact name.
pub fn by_name(name: &str) -> Option<&'static PaperSize> {
    PAPERS.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        let a4 = by_name("A4").unwrap();
        assert_eq!((a4.width, a4.height), (595, 842));
        assert!(by_name("a4").is_none());
        assert!(by_name("Nonexistent").is_none());
    }

    #[test]
    fn test_custom_is_placeholder() {
        let custom = by_name(CUSTOM).unwrap();
        assert_eq!(custom.width, 0);
        assert_eq!(custom.height, 0);
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in PAPERS.iter().enumerate() {
            assert!(PAPERS[i + 1..].iter().all(|b| b.name != a.name), "duplicate {}", a.name);
        }
    }

    #[test]
    fn test_extended_families() {
        assert!(by_name("A2").unwrap().unit.is_extended());
        assert!(!by_name("Letter").unwrap().unit.is_extended());
    }
}
