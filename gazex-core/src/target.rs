use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Snapshot of an on-screen element's bounding box, captured at trial load.
/// Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRect {
    pub selector: String,
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl TargetRect {
    pub fn new(selector: impl Into<String>, top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            selector: selector.into(),
            top,
            bottom,
            left,
            right,
        }
    }
}

/// Resolves element selectors to their current bounding boxes.
///
/// The host supplies an implementation backed by whatever surface it renders
/// to; selectors that match nothing resolve to `None`.
pub trait TargetResolver: Send + Sync {
    fn bounding_rect(&self, selector: &str) -> Option<TargetRect>;
}

/// Fixed selector-to-rect mapping. Doubles as the default resolver (empty,
/// resolves nothing) and as a test layout.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    rects: HashMap<String, TargetRect>,
}

impl StaticLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rect(mut self, rect: TargetRect) -> Self {
        self.insert(rect);
        self
    }

    pub fn insert(&mut self, rect: TargetRect) {
        self.rects.insert(rect.selector.clone(), rect);
    }
}

impl TargetResolver for StaticLayout {
    fn bounding_rect(&self, selector: &str) -> Option<TargetRect> {
        self.rects.get(selector).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_layout_resolves_known_selector() {
        let layout = StaticLayout::new().with_rect(TargetRect::new("#fix", 0.0, 10.0, 0.0, 10.0));
        let rect = layout.bounding_rect("#fix").unwrap();
        assert_eq!(rect.selector, "#fix");
        assert_eq!(rect.bottom, 10.0);
    }

    #[test]
    fn static_layout_skips_unknown_selector() {
        let layout = StaticLayout::new();
        assert!(layout.bounding_rect("#missing").is_none());
    }
}
