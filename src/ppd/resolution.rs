//! # Resolution Naming
//!
//! Maps raw device resolutions to short, unique names that are safe to
//! show to PPD consumers.
//!
//! Some applications misbehave when a PPD advertises very high
//! resolutions, so every axis is first halved until it fits under a fixed
//! ceiling. Different raw pairs can then clamp to the same name; collisions
//! are resolved by nudging the pair until a free name is found:
//!
//! 1. grow `y` by one while `y > x` and `y` is below its ceiling,
//! 2. otherwise grow `x` by one while `x` is below its ceiling,
//! 3. otherwise halve `x`.
//!
//! Consumers that need the real resolution read the `*StpResolutionMap`
//! line written for every renamed entry.
//!
//! ```
//! use genppd::capability::ResolutionPair;
//! use genppd::ppd::resolution::{resolve, UsedNameSet};
//!
//! let mut used = UsedNameSet::default();
//! let first = resolve(ResolutionPair::new(2880, 720), "2880x720dpi", &mut used, false).unwrap();
//! let second = resolve(ResolutionPair::new(1440, 720), "1440x720dpi", &mut used, false).unwrap();
//! assert_eq!(first.name, "1440x720dpi");
//! assert_eq!(second.name, "1441x720dpi");
//! ```

use std::collections::HashSet;

use crate::capability::ResolutionPair;
use crate::error::{GenppdError, Result};

/// Highest horizontal resolution advertised to consumers.
pub const MAX_SAFE_X: i32 = 1500;

/// Highest vertical resolution advertised to consumers.
pub const MAX_SAFE_Y: i32 = 720;

/// Presentable names already taken in one document.
///
/// Grows monotonically; dropped with the document.
#[derive(Debug, Clone, Default)]
pub struct UsedNameSet {
    names: HashSet<String>,
}

impl UsedNameSet {
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns `false` if the name was already taken.
    pub fn insert(&mut self, name: &str) -> bool {
        self.names.insert(name.to_string())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A name accepted by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub name: String,
    /// Pair the name was built from, after clamping and disambiguation.
    pub declared: ResolutionPair,
}

impl ResolvedName {
    /// Whether a `*StpResolutionMap` line is needed for this entry.
    pub fn needs_map(&self, internal: &str) -> bool {
        self.name != internal
    }
}

/// Halve each axis until it fits under its ceiling.
pub fn clamp(raw: ResolutionPair) -> ResolutionPair {
    let mut x = raw.x;
    let mut y = raw.y;
    while x > MAX_SAFE_X {
        x /= 2;
    }
    while y > MAX_SAFE_Y {
        y /= 2;
    }
    ResolutionPair::new(x, y)
}

/// `"{x}dpi"` for square resolutions, `"{x}x{y}dpi"` otherwise.
pub fn presentable_name(pair: ResolutionPair) -> String {
    if pair.x == pair.y {
        format!("{}dpi", pair.x)
    } else {
        format!("{}x{}dpi", pair.x, pair.y)
    }
}

/// Find a free presentable name for a raw resolution and register it.
///
/// `reuse_allowed` lets the default resolution take the name it was seeded
/// with. Placeholder pairs must be filtered out by the caller.
///
/// Fails with [`GenppdError::ResolutionSpaceExhausted`] once the search
/// revisits a pair or runs out of horizontal resolution.
pub fn resolve(
    raw: ResolutionPair,
    internal: &str,
    used: &mut UsedNameSet,
    reuse_allowed: bool,
) -> Result<ResolvedName> {
    let ResolutionPair { mut x, mut y } = clamp(raw);
    let mut tried = HashSet::new();

    loop {
        if x <= 0 || !tried.insert((x, y)) {
            return Err(GenppdError::ResolutionSpaceExhausted {
                x: raw.x,
                y: raw.y,
                internal: internal.to_string(),
            });
        }

        let declared = ResolutionPair::new(x, y);
        let name = presentable_name(declared);
        if reuse_allowed || !used.contains(&name) {
            used.insert(&name);
            return Ok(ResolvedName { name, declared });
        }

        // Tie-break order matters to consumers: grow the larger axis first
        if y > x && y < MAX_SAFE_Y {
            y += 1;
        } else if x < MAX_SAFE_X {
            x += 1;
        } else {
            x /= 2;
        }
    }
}

/// Name of the single "Automatic" resolution offered when a printer
/// selects resolutions through a quality setting.
///
/// Declared as `(m+1)x(m)dpi` where `m` is the smaller clamped axis, so
/// applications that pick the lower dimension do not over-request.
pub fn automatic(raw: ResolutionPair) -> ResolvedName {
    let clamped = clamp(raw);
    let m = clamped.x.min(clamped.y);
    let declared = ResolutionPair::new(m + 1, m);
    ResolvedName {
        name: presentable_name(declared),
        declared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(x: i32, y: i32) -> ResolutionPair {
        ResolutionPair::new(x, y)
    }

    #[test]
    fn test_clamp_boundary() {
        assert_eq!(clamp(pair(3000, 1500)), pair(1500, 375));
        assert_eq!(clamp(pair(1500, 720)), pair(1500, 720));
        assert_eq!(clamp(pair(5760, 1440)), pair(1440, 720));
    }

    #[test]
    fn test_presentable_name() {
        assert_eq!(presentable_name(pair(300, 300)), "300dpi");
        assert_eq!(presentable_name(pair(600, 300)), "600x300dpi");
    }

    #[test]
    fn test_resolve_canonical_name() {
        let mut used = UsedNameSet::default();
        let r = resolve(pair(600, 300), "600x300dpi", &mut used, false).unwrap();
        assert_eq!(r.name, "600x300dpi");
        assert!(!r.needs_map("600x300dpi"));
        assert!(used.contains("600x300dpi"));
    }

    #[test]
    fn test_collision_grows_x() {
        let mut used = UsedNameSet::default();
        resolve(pair(2880, 720), "2880x720dpi", &mut used, false).unwrap();
        let r = resolve(pair(1440, 720), "1440x720dpi", &mut used, false).unwrap();
        assert_eq!(r.name, "1441x720dpi");
        assert!(r.needs_map("1440x720dpi"));
    }

    #[test]
    fn test_collision_grows_larger_y_first() {
        let mut used = UsedNameSet::default();
        used.insert("360x700dpi");
        let r = resolve(pair(360, 700), "360x700dpi", &mut used, false).unwrap();
        assert_eq!(r.name, "360x701dpi");
    }

    #[test]
    fn test_collision_at_x_ceiling_halves() {
        let mut used = UsedNameSet::default();
        used.insert("1500x720dpi");
        let r = resolve(pair(3000, 720), "3000x720dpi", &mut used, false).unwrap();
        assert_eq!(r.name, "750x720dpi");
    }

    #[test]
    fn test_square_collision() {
        let mut used = UsedNameSet::default();
        used.insert("720dpi");
        let r = resolve(pair(720, 1440), "720x1440dpi", &mut used, false).unwrap();
        assert_eq!(r.name, "721x720dpi");
    }

    #[test]
    fn test_reuse_allowed_for_default() {
        let mut used = UsedNameSet::default();
        used.insert("360dpi");
        let r = resolve(pair(360, 360), "360dpi", &mut used, true).unwrap();
        assert_eq!(r.name, "360dpi");
    }

    #[test]
    fn test_names_stay_unique() {
        let mut used = UsedNameSet::default();
        let raw = [(2880, 720), (1440, 720), (5760, 720), (1440, 1440), (720, 720), (2880, 1440)];
        let names: Vec<String> = raw
            .iter()
            .map(|&(x, y)| resolve(pair(x, y), "x", &mut used, false).unwrap().name)
            .collect();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "{:?}", names);
    }

    #[test]
    fn test_exhausted_search_space() {
        let mut used = UsedNameSet::default();
        // Fill every name the search for (1500, 720) can reach
        for x in [1500, 750, 751] {
            used.insert(&presentable_name(pair(x, 720)));
        }
        for x in 752..=1500 {
            used.insert(&presentable_name(pair(x, 720)));
        }
        let err = resolve(pair(1500, 720), "1500x720dpi", &mut used, false).unwrap_err();
        assert!(matches!(err, GenppdError::ResolutionSpaceExhausted { x: 1500, y: 720, .. }));
    }

    #[test]
    fn test_automatic_name() {
        let auto = automatic(pair(720, 360));
        assert_eq!(auto.name, "361x360dpi");
        assert_eq!(auto.declared, pair(361, 360));

        let auto = automatic(pair(2880, 1440));
        assert_eq!(auto.name, "721x720dpi");
    }
}
