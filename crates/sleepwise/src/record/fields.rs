//! Attribute names used by the rule table and the prediction seam.
//!
//! Names follow the column headers of the sleep health and lifestyle dataset.

use once_cell::sync::Lazy;
use regex::Regex;

/// Hours slept per night.
pub const SLEEP_DURATION: &str = "Sleep Duration";
/// Self-reported stress on a 1-10 scale.
pub const STRESS_LEVEL: &str = "Stress Level";
/// Physical activity, in the unit set by `ActivityThreshold`.
pub const PHYSICAL_ACTIVITY: &str = "Physical Activity Level";
/// Steps per day.
pub const DAILY_STEPS: &str = "Daily Steps";
/// BMI category code or label.
pub const BMI_CATEGORY: &str = "BMI Category";
/// Resting heart rate in beats per minute.
pub const HEART_RATE: &str = "Heart Rate";
/// Systolic blood pressure in mmHg.
pub const SYSTOLIC_BP: &str = "Systolic_BP";
/// Diastolic blood pressure in mmHg.
pub const DIASTOLIC_BP: &str = "Diastolic_BP";
/// Combined blood pressure as `"<systolic>/<diastolic>"`.
pub const BLOOD_PRESSURE: &str = "Blood Pressure";
/// Observed sleep disorder code or label.
pub const SLEEP_DISORDER: &str = "Sleep Disorder";
/// Sleep quality on a 1-10 scale.
pub const QUALITY_OF_SLEEP: &str = "Quality of Sleep";
/// Derived sleep quality class label.
pub const SLEEP_QUALITY_CLASS: &str = "SleepQuality_Class";

static BLOOD_PRESSURE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*/\s*(\d+(?:\.\d+)?)\s*$").expect("valid regex")
});

/// Split a combined `"126/83"` reading into systolic and diastolic values.
pub fn parse_blood_pressure(raw: &str) -> Option<(f64, f64)> {
    let caps = BLOOD_PRESSURE_PATTERN.captures(raw)?;
    let systolic = caps.get(1)?.as_str().parse().ok()?;
    let diastolic = caps.get(2)?.as_str().parse().ok()?;
    Some((systolic, diastolic))
}
