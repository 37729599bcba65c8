/// A labelled percentage rendered as a progress bar in the overview.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressMetric {
    pub label: String,
    percent: f32,
}

impl ProgressMetric {
    /// Out of range or NaN widths are clamped into 0..=100.
    pub fn new(label: impl Into<String>, percent: f32) -> Self {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };
        Self {
            label: label.into(),
            percent,
        }
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    /// Fill fraction for `egui::ProgressBar` (0.0..=1.0).
    pub fn fraction(&self) -> f32 {
        self.percent / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_are_clamped() {
        assert_eq!(ProgressMetric::new("over", 140.0).percent(), 100.0);
        assert_eq!(ProgressMetric::new("under", -5.0).percent(), 0.0);
        assert_eq!(ProgressMetric::new("nan", f32::NAN).percent(), 0.0);
    }

    #[test]
    fn fraction_scales_percent() {
        let metric = ProgressMetric::new("setup", 75.0);
        assert!((metric.fraction() - 0.75).abs() < f32::EPSILON);
    }
}
