//! Calibration marks drawn beside the track.

use std::borrow::Cow;

use thiserror::Error;

use crate::math;

/// Highest value accepted on the legacy amplitude scale.
pub const MARK_VALUE_MAX: u16 = 1023;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkError {
    #[error("mark value {0} is outside the 0-1023 scale")]
    ValueOutOfRange(u16),
}

/// A labelled reference line at a fixed position on the track.
///
/// `value` is on the 0–1023 legacy amplitude scale, 1023 being the top of
/// the track.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMark"))]
pub struct CalibrationMark {
    value: u16,
    label: Cow<'static, str>,
}

impl CalibrationMark {
    pub fn new(value: u16, label: impl Into<Cow<'static, str>>) -> Result<Self, MarkError> {
        if value > MARK_VALUE_MAX {
            return Err(MarkError::ValueOutOfRange(value));
        }
        Ok(Self {
            value,
            label: label.into(),
        })
    }

    const fn fixed(value: u16, label: &'static str) -> Self {
        Self {
            value,
            label: Cow::Borrowed(label),
        }
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Distance from the top of the track as a fraction of its height.
    pub fn offset_fraction(&self) -> f64 {
        math::mark_offset_fraction(self.value)
    }
}

/// The five reference levels shown by default, loudest first.
pub const DEFAULT_MARKS: [CalibrationMark; 5] = [
    CalibrationMark::fixed(895, "-6"),
    CalibrationMark::fixed(780, "-12"),
    CalibrationMark::fixed(673, "-18"),
    CalibrationMark::fixed(480, "-30"),
    CalibrationMark::fixed(251, "-48"),
];

pub fn default_marks() -> Vec<CalibrationMark> {
    DEFAULT_MARKS.to_vec()
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMark {
    value: u16,
    label: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMark> for CalibrationMark {
    type Error = MarkError;

    fn try_from(raw: RawMark) -> Result<Self, Self::Error> {
        CalibrationMark::new(raw.value, raw.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_values_past_scale() {
        assert_eq!(
            CalibrationMark::new(1024, "hot"),
            Err(MarkError::ValueOutOfRange(1024))
        );
        assert!(CalibrationMark::new(1023, "0").is_ok());
        assert!(CalibrationMark::new(0, "-inf").is_ok());
    }

    #[test]
    fn error_message_names_the_value() {
        let err = CalibrationMark::new(2000, "x").unwrap_err();
        assert_eq!(err.to_string(), "mark value 2000 is outside the 0-1023 scale");
    }

    #[test]
    fn default_marks_descend_down_the_track() {
        let marks = default_marks();
        let labels: Vec<&str> = marks.iter().map(|m| m.label()).collect();
        assert_eq!(labels, ["-6", "-12", "-18", "-30", "-48"]);
        for pair in marks.windows(2) {
            assert!(pair[0].offset_fraction() < pair[1].offset_fraction());
        }
        assert!((marks[0].offset_fraction() - 0.1252).abs() < 1e-3);
        assert!((marks[4].offset_fraction() - 0.7546).abs() < 1e-3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_marks_from_json() {
        let marks: Vec<CalibrationMark> =
            serde_json::from_str(r#"[{"value": 780, "label": "-12"}]"#).unwrap();
        assert_eq!(marks, vec![CalibrationMark::new(780, "-12").unwrap()]);

        let bad = serde_json::from_str::<CalibrationMark>(r#"{"value": 4000, "label": "x"}"#);
        assert!(bad.is_err());
    }
}
