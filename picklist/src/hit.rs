use crate::layout::Rect;

/// A clickable area registered while rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitRegion {
    pub rect: Rect,
    /// Target ID delivered with click and hover events.
    pub id: String,
    /// Focusable element that receives focus when this region is pressed.
    pub owner: String,
}

/// Regions collected during one frame, in paint order.
///
/// Later regions are painted over earlier ones, so lookups walk the list
/// backwards and the last matching region wins.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<HitRegion>,
    focusable: Vec<String>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
        self.focusable.clear();
    }

    /// Register a focusable element. Registration order is Tab order.
    pub fn register_focusable(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.focusable.contains(&id) {
            self.focusable.push(id);
        }
    }

    /// Register a clickable region owned by a focusable element.
    pub fn register(&mut self, rect: Rect, id: impl Into<String>, owner: impl Into<String>) {
        if rect.is_empty() {
            return;
        }
        self.regions.push(HitRegion {
            rect,
            id: id.into(),
            owner: owner.into(),
        });
    }

    /// Focusable IDs in Tab order.
    pub fn focusable(&self) -> &[String] {
        &self.focusable
    }

    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    /// Find the topmost region containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<&HitRegion> {
        self.regions.iter().rev().find(|region| region.rect.contains(x, y))
    }

    /// Target ID of the topmost region at the point.
    pub fn target_at(&self, x: u16, y: u16) -> Option<String> {
        self.hit_test(x, y).map(|region| region.id.clone())
    }

    /// Focusable owner of the topmost region at the point.
    pub fn focusable_at(&self, x: u16, y: u16) -> Option<String> {
        self.hit_test(x, y).map(|region| region.owner.clone())
    }
}
