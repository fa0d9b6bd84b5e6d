use crate::constants::{MAGNET_PULL, MAGNET_RADIUS};
use crate::geometry::{ElementId, Rect};
use fnv::FnvHashSet;
use glam::Vec2;
use smallvec::SmallVec;

/// Resolves the current bounding box of a host element.
///
/// Returning `None` (or an empty rect) means the element is gone or not laid
/// out; it is skipped rather than treated as an error.
pub trait GeometrySource {
    fn bounding_rect(&self, id: ElementId) -> Option<Rect>;
}

impl<F> GeometrySource for F
where
    F: Fn(ElementId) -> Option<Rect>,
{
    #[inline]
    fn bounding_rect(&self, id: ElementId) -> Option<Rect> {
        self(id)
    }
}

/// Current capture: the nearest magnetic element within the radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnetState {
    pub element: ElementId,
    pub rect: Rect,
    pub strength: f32,
}

impl MagnetState {
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }
}

/// Deduplicated set of magnetic elements.
///
/// Iteration follows first-insertion order so nearest-element ties resolve
/// deterministically.
#[derive(Clone, Debug, Default)]
pub struct MagneticSet {
    order: SmallVec<[ElementId; 16]>,
    members: FnvHashSet<ElementId>,
}

impl MagneticSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole membership; duplicates keep their first position.
    pub fn rebuild<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ElementId>,
    {
        self.order.clear();
        self.members.clear();
        for id in ids {
            if self.members.insert(id) {
                self.order.push(id);
            }
        }
    }

    #[inline]
    pub fn contains(&self, id: ElementId) -> bool {
        self.members.contains(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.order.iter().copied()
    }
}

/// Attraction strength for a pointer `distance` away from a magnet center:
/// 1 at the center, falling linearly to 0 at `radius`.
#[inline]
pub fn strength_for_distance(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / radius).clamp(0.0, 1.0)
}

/// Strictly nearest candidate whose center lies within `radius` of `pointer`.
/// Ties keep the first candidate encountered.
pub fn nearest_magnet<I>(pointer: Vec2, candidates: I, radius: f32) -> Option<MagnetState>
where
    I: IntoIterator<Item = (ElementId, Rect)>,
{
    let mut best: Option<(MagnetState, f32)> = None;
    for (element, rect) in candidates {
        if rect.is_empty() {
            continue;
        }
        let distance = pointer.distance(rect.center());
        if distance.is_nan() || distance >= radius {
            continue;
        }
        match best {
            Some((_, bd)) if distance >= bd => {}
            _ => {
                best = Some((
                    MagnetState {
                        element,
                        rect,
                        strength: strength_for_distance(distance, radius),
                    },
                    distance,
                ))
            }
        }
    }
    best.map(|(state, _)| state)
}

/// Pulls the smoothed cursor toward nearby magnetic elements.
#[derive(Clone, Debug)]
pub struct MagnetAttractor {
    set: MagneticSet,
    active: Option<MagnetState>,
    pub radius: f32,
    pub pull: f32,
}

impl Default for MagnetAttractor {
    fn default() -> Self {
        Self::new(MAGNET_RADIUS, MAGNET_PULL)
    }
}

impl MagnetAttractor {
    pub fn new(radius: f32, pull: f32) -> Self {
        Self {
            set: MagneticSet::new(),
            active: None,
            radius,
            pull,
        }
    }

    #[inline]
    pub fn candidates(&self) -> &MagneticSet {
        &self.set
    }

    #[inline]
    pub fn active(&self) -> Option<&MagnetState> {
        self.active.as_ref()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Rebuild the candidate set. Drops the active capture if its element is
    /// no longer present; returns `true` when that happened.
    pub fn refresh<I>(&mut self, ids: I) -> bool
    where
        I: IntoIterator<Item = ElementId>,
    {
        self.set.rebuild(ids);
        let dropped = match self.active {
            Some(m) if !self.set.contains(m.element) => {
                self.active = None;
                true
            }
            _ => false,
        };
        log::debug!(
            "[magnet] refreshed candidates={} dropped_active={}",
            self.set.len(),
            dropped
        );
        dropped
    }

    /// Recompute the capture for a raw pointer position.
    pub fn capture<G>(&mut self, pointer: Vec2, geometry: &G) -> Option<MagnetState>
    where
        G: GeometrySource,
    {
        let candidates = self
            .set
            .iter()
            .filter_map(|id| geometry.bounding_rect(id).map(|rect| (id, rect)));
        self.active = nearest_magnet(pointer, candidates, self.radius);
        self.active
    }

    #[inline]
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Per-frame target while captured: a strength-weighted step from the
    /// smoothed position toward the magnet center.
    pub fn pull_target(&self, smoothed: Vec2) -> Option<Vec2> {
        self.active.map(|m| {
            let k = m.strength * self.pull;
            smoothed + (m.center() - smoothed) * k
        })
    }
}
