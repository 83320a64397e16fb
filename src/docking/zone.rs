use egui::{Pos2, Rect, Vec2, pos2};

/// Host edge a zone is anchored to.
///
/// There is deliberately no `None`/`Fill` variant: "not docked" is a property
/// of the window, not of a zone, and fill-style re-parenting belongs to the
/// host container backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// One configured drop region along a host edge.
///
/// A zone occupies `fraction` of the host's width (for [`Side::Left`] /
/// [`Side::Right`]) or height (for [`Side::Top`] / [`Side::Bottom`]),
/// measured from that edge, and spans the full opposite dimension. Its pixel
/// rectangle is a pure function of the host client size and is recomputed on
/// every query, since the host can resize between events without the zone
/// observing it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DockZone {
    pub side: Side,
    /// Portion of the relevant host dimension this zone covers, in `(0, 1]`.
    #[cfg_attr(feature = "serde", serde(default = "default_fraction"))]
    pub fraction: f32,
}

#[cfg(feature = "serde")]
fn default_fraction() -> f32 {
    DockZone::DEFAULT_FRACTION
}

impl DockZone {
    pub const DEFAULT_FRACTION: f32 = 0.25;

    /// Zone on `side` covering [`Self::DEFAULT_FRACTION`] of the host.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            fraction: Self::DEFAULT_FRACTION,
        }
    }

    pub fn with_fraction(side: Side, fraction: f32) -> Self {
        Self { side, fraction }
    }

    /// Pixel bounds of this zone for the given host client size.
    ///
    /// The occupied extent is truncated to whole pixels (`⌊dimension · fraction⌋`)
    /// so a `0.25` zone on an 801-wide host is 200 pixels, matching the host's
    /// own integer layout. `min`/`max` are absolute corner coordinates, which
    /// is what the inclusive hit-test in [`Self::contains`] relies on.
    pub fn rect(&self, host_size: Vec2) -> Rect {
        let fraction = self.fraction.clamp(0.0, 1.0);
        match self.side {
            Side::Left => {
                let w = (host_size.x * fraction).floor();
                Rect::from_min_max(Pos2::ZERO, pos2(w, host_size.y))
            }
            Side::Right => {
                let w = (host_size.x * fraction).floor();
                Rect::from_min_max(pos2(host_size.x - w, 0.0), pos2(host_size.x, host_size.y))
            }
            Side::Top => {
                let h = (host_size.y * fraction).floor();
                Rect::from_min_max(Pos2::ZERO, pos2(host_size.x, h))
            }
            Side::Bottom => {
                let h = (host_size.y * fraction).floor();
                Rect::from_min_max(pos2(0.0, host_size.y - h), pos2(host_size.x, host_size.y))
            }
        }
    }

    /// Whether `point` (in host client coordinates) falls inside this zone,
    /// bounds inclusive.
    pub fn contains(&self, point: Pos2, host_size: Vec2) -> bool {
        self.rect(host_size).contains(point)
    }
}

impl std::fmt::Display for DockZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} {}", self.side, self.fraction)
    }
}

/// A zone hit-test result: the matched side plus the rectangle it was
/// computed against.
///
/// Two resolved zones compare equal iff their rectangles coincide; that
/// geometric identity (not the declared side) is what highlight tracking
/// uses, so re-resolving the same zone across host resizes reads as a change
/// exactly when the on-screen rectangle moved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedZone {
    pub side: Side,
    pub rect: Rect,
}

/// Ordered collection of the dock zones configured for one host window.
///
/// Declaration order is priority order: when zones overlap, [`Self::resolve`]
/// returns the first containing zone. The set is never reordered at runtime.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DockZoneSet {
    zones: Vec<DockZone>,
}

impl DockZoneSet {
    pub fn new(zones: Vec<DockZone>) -> Self {
        Self { zones }
    }

    pub fn push(&mut self, zone: DockZone) {
        self.zones.push(zone);
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DockZone> {
        self.zones.iter()
    }

    /// First declared zone containing `point`, with its freshly computed
    /// rectangle, or `None` if the point is outside every zone.
    pub fn resolve(&self, point: Pos2, host_size: Vec2) -> Option<ResolvedZone> {
        self.zones.iter().find_map(|zone| {
            let rect = zone.rect(host_size);
            rect.contains(point).then_some(ResolvedZone {
                side: zone.side,
                rect,
            })
        })
    }
}

impl FromIterator<DockZone> for DockZoneSet {
    fn from_iter<I: IntoIterator<Item = DockZone>>(iter: I) -> Self {
        Self {
            zones: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DockZoneSet {
    type Item = &'a DockZone;
    type IntoIter = std::slice::Iter<'a, DockZone>;

    fn into_iter(self) -> Self::IntoIter {
        self.zones.iter()
    }
}
