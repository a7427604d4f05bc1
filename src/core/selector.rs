use crate::core::light::LightId;

/// Maximum lights the mesh lighting path consumes per object in one pass
pub const MAX_SELECTED_LIGHTS: usize = 32;

/// One entry in the selection list: a light handle and its ranking distance
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    pub light: LightId,
    pub dist: f32,
}

/// Bounded, distance-ordered list of the closest lights seen so far.
///
/// Holds at most `capacity` candidates, sorted ascending by distance. Once
/// full, a new candidate only enters by being strictly closer than the current
/// worst entry, which it evicts. Equal-distance candidates never displace an
/// existing entry, so the ranking is stable against enumeration order and
/// lights do not swap in and out between frames.
///
/// One instance per concurrent lighting task; the list is scratch state that
/// gets cleared and repopulated once per lit object per frame.
#[derive(Clone, Debug)]
pub struct NearbyLights {
    slots: Vec<Candidate>,
    capacity: usize,
}

impl NearbyLights {
    /// Selection list with the full per-object light budget
    pub fn new() -> Self {
        Self::with_capacity(MAX_SELECTED_LIGHTS)
    }

    /// Selection list with a smaller budget, e.g. for cheap shading tiers
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "selection list needs room for at least one light");
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Start a fresh selection pass. Idempotent.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Offer a candidate. Returns true if it entered the list.
    ///
    /// Invalid handles and negative or non-finite distances are dropped
    /// without touching the list. A handle already present keeps a single
    /// slot: the closer of the two distances wins.
    pub fn insert(&mut self, light: LightId, dist: f32) -> bool {
        if !light.is_valid() {
            return false;
        }
        if !dist.is_finite() || dist < 0.0 {
            log::debug!("rejected light candidate with bad distance {dist}");
            return false;
        }

        if let Some(existing) = self.slots.iter().position(|c| c.light == light) {
            if dist >= self.slots[existing].dist {
                return false;
            }
            self.slots.remove(existing);
        } else if self.slots.len() == self.capacity {
            // full: only a strictly closer candidate earns the worst slot
            match self.slots.last() {
                Some(worst) if dist < worst.dist => {
                    self.slots.pop();
                }
                _ => return false,
            }
        }

        // linear scan keeps equal-distance entries in arrival order
        let at = self
            .slots
            .iter()
            .position(|c| dist < c.dist)
            .unwrap_or(self.slots.len());
        self.slots.insert(at, Candidate { light, dist });
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.slots.iter()
    }

    /// Ordered view for the lighting evaluator; closest light first
    pub fn as_slice(&self) -> &[Candidate] {
        &self.slots
    }

    pub fn lights(&self) -> impl Iterator<Item = LightId> + '_ {
        self.slots.iter().map(|c| c.light)
    }
}

impl Default for NearbyLights {
    fn default() -> Self {
        Self::new()
    }
}
