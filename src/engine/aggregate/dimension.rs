use serde::Serialize;

/// A value a metric can be sliced by, rendered as a series label.
pub trait Dimension {
    fn label(&self) -> String;
}

impl Dimension for String {
    fn label(&self) -> String {
        self.clone()
    }
}

impl Dimension for &str {
    fn label(&self) -> String {
        (*self).to_string()
    }
}

/// Whether a story's model score met its project's minimum confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ThresholdStatus {
    Above,
    Below,
}

impl ThresholdStatus {
    pub const ALL: [ThresholdStatus; 2] = [ThresholdStatus::Above, ThresholdStatus::Below];

    pub fn from_flag(above_threshold: bool) -> Self {
        if above_threshold {
            ThresholdStatus::Above
        } else {
            ThresholdStatus::Below
        }
    }

    pub fn as_flag(&self) -> bool {
        matches!(self, ThresholdStatus::Above)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdStatus::Above => "Above",
            ThresholdStatus::Below => "Below",
        }
    }
}

impl Dimension for ThresholdStatus {
    fn label(&self) -> String {
        self.as_str().to_string()
    }
}
