use crate::foundation::math::{clamp01, smoothstep};

/// Fade/scale-in gate for one element, keyed on a shared global progress value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AppearTimeline {
    /// Progress at which the element starts appearing.
    pub start: f64,
    /// Progress span over which it reaches full value.
    #[serde(default = "default_appear_duration")]
    pub duration: f64,
}

pub(crate) fn default_appear_duration() -> f64 {
    0.18
}

impl AppearTimeline {
    /// Gate starting at `start` and lasting `duration`.
    pub fn new(start: f64, duration: f64) -> Self {
        Self { start, duration }
    }

    /// Eased value in `[0, 1]` at `progress`.
    ///
    /// A non-positive duration is a hard step at `start`.
    pub fn value(&self, progress: f64) -> f64 {
        if self.duration.is_nan() || self.duration <= 0.0 {
            return if progress >= self.start { 1.0 } else { 0.0 };
        }
        smoothstep(clamp01((progress - self.start) / self.duration))
    }
}

/// Smoothstep between two progress marks: 0 before `a`, 1 after `b`.
///
/// `a == b` degenerates to a step at `b`.
pub fn between(t: f64, a: f64, b: f64) -> f64 {
    if a == b {
        return if t >= b { 1.0 } else { 0.0 };
    }
    smoothstep(clamp01((t - a) / (b - a)))
}

/// Named appear gates sampled together from one progress value.
///
/// Elements never read each other's state, so any subset may be sampled in any order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AppearSet {
    elements: Vec<AppearElement>,
}

/// One named entry of an [`AppearSet`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AppearElement {
    /// Element identifier.
    pub id: String,
    /// Gate timing.
    #[serde(flatten)]
    pub timing: AppearTimeline,
}

impl AppearSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element gate.
    pub fn with(mut self, id: impl Into<String>, start: f64, duration: f64) -> Self {
        self.elements.push(AppearElement {
            id: id.into(),
            timing: AppearTimeline::new(start, duration),
        });
        self
    }

    /// Elements in insertion order.
    pub fn elements(&self) -> &[AppearElement] {
        &self.elements
    }

    /// Value of element `id`, or `None` when unknown.
    pub fn value_of(&self, id: &str, progress: f64) -> Option<f64> {
        self.elements
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.timing.value(progress))
    }

    /// Every element's value at `progress`, in insertion order.
    pub fn sample(&self, progress: f64) -> Vec<(String, f64)> {
        self.elements
            .iter()
            .map(|e| (e.id.clone(), e.timing.value(progress)))
            .collect()
    }
}

impl From<Vec<AppearElement>> for AppearSet {
    fn from(elements: Vec<AppearElement>) -> Self {
        Self { elements }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/appear.rs"]
mod tests;
