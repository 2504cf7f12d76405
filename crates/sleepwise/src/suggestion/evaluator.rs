//! Single-pass evaluation of the rule table over one record.
//!
//! Each rule reads its own fields. A field that is absent or cannot be read
//! as the expected kind makes that one rule not fire; the rest of the table
//! is still evaluated. The fallback fires exactly when nothing else did, so
//! the output is never empty.

use tracing::{debug, trace};

use crate::config::SuggestionConfig;
use crate::record::fields;
use crate::record::{BmiCategory, FieldFault, FieldLookup, SleepDisorder};

use super::{RuleId, Suggestion};

/// Evaluates the fixed rule table against health records.
#[derive(Debug, Clone, Default)]
pub struct SuggestionEvaluator {
    config: SuggestionConfig,
}

impl SuggestionEvaluator {
    /// Create an evaluator with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator with custom thresholds.
    pub fn with_config(config: SuggestionConfig) -> Self {
        Self { config }
    }

    /// The thresholds in use.
    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Suggestion messages for a record, in rule-table order.
    pub fn evaluate<R: FieldLookup>(&self, record: &R) -> Vec<String> {
        self.evaluate_detailed(record)
            .into_iter()
            .map(|s| s.message)
            .collect()
    }

    /// Suggestions for a record, tagged with the rule that produced each one.
    pub fn evaluate_detailed<R: FieldLookup>(&self, record: &R) -> Vec<Suggestion> {
        let fired = self.fired_rules(record);
        debug!(
            fired = fired.len(),
            fallback = fired == [RuleId::Fallback],
            "evaluated rule table"
        );
        fired.into_iter().map(Suggestion::from).collect()
    }

    /// Rules that fire for a record, in table order.
    pub fn fired_rules<R: FieldLookup>(&self, record: &R) -> Vec<RuleId> {
        let t = &self.config.thresholds;
        let mut fired = Vec::new();

        if read_number(record, RuleId::ShortSleep, fields::SLEEP_DURATION)
            .is_some_and(|hours| hours < t.min_sleep_hours)
        {
            fired.push(RuleId::ShortSleep);
        }

        if read_number(record, RuleId::HighStress, fields::STRESS_LEVEL)
            .is_some_and(|level| level > t.max_stress_level)
        {
            fired.push(RuleId::HighStress);
        }

        let activity_minimum = t.physical_activity.effective_minimum();
        if read_number(record, RuleId::LowActivity, fields::PHYSICAL_ACTIVITY)
            .is_some_and(|activity| activity < activity_minimum)
        {
            fired.push(RuleId::LowActivity);
        }

        if read_number(record, RuleId::LowSteps, fields::DAILY_STEPS)
            .is_some_and(|steps| steps < t.min_daily_steps)
        {
            fired.push(RuleId::LowSteps);
        }

        if read_category::<_, BmiCategory>(record, RuleId::Obesity, fields::BMI_CATEGORY)
            == Some(BmiCategory::Obese)
        {
            fired.push(RuleId::Obesity);
        }

        if read_number(record, RuleId::ElevatedHeartRate, fields::HEART_RATE)
            .is_some_and(|bpm| bpm > t.max_resting_heart_rate)
        {
            fired.push(RuleId::ElevatedHeartRate);
        }

        let (systolic, diastolic) = read_blood_pressure(record);
        if systolic.is_some_and(|s| s > t.max_systolic_bp)
            || diastolic.is_some_and(|d| d > t.max_diastolic_bp)
        {
            fired.push(RuleId::HighBloodPressure);
        }

        match read_category::<_, SleepDisorder>(record, RuleId::Insomnia, fields::SLEEP_DISORDER) {
            Some(SleepDisorder::Insomnia) => fired.push(RuleId::Insomnia),
            Some(SleepDisorder::SleepApnea) => fired.push(RuleId::SleepApnea),
            Some(SleepDisorder::None) | None => {}
        }

        if fired.is_empty() {
            fired.push(RuleId::Fallback);
        }

        fired
    }
}

fn skipped(rule: RuleId, field: &str, fault: FieldFault) {
    trace!(rule = rule.label(), field, %fault, "rule skipped");
}

fn read_number<R: FieldLookup>(record: &R, rule: RuleId, field: &str) -> Option<f64> {
    record
        .number(field)
        .map_err(|fault| skipped(rule, field, fault))
        .ok()
}

fn read_category<R: FieldLookup, C: crate::record::CategoricalCode>(
    record: &R,
    rule: RuleId,
    field: &str,
) -> Option<C> {
    record
        .category::<C>(field)
        .map_err(|fault| skipped(rule, field, fault))
        .ok()
}

/// Systolic and diastolic readings, each falling back to the combined field.
fn read_blood_pressure<R: FieldLookup>(record: &R) -> (Option<f64>, Option<f64>) {
    let combined = record
        .field(fields::BLOOD_PRESSURE)
        .and_then(|v| v.as_text())
        .and_then(fields::parse_blood_pressure);

    let half = |field: &str, from_combined: Option<f64>| match record.number(field) {
        Ok(value) => Some(value),
        Err(FieldFault::MissingField) if from_combined.is_some() => from_combined,
        Err(fault) => {
            skipped(RuleId::HighBloodPressure, field, fault);
            None
        }
    };

    (
        half(fields::SYSTOLIC_BP, combined.map(|(s, _)| s)),
        half(fields::DIASTOLIC_BP, combined.map(|(_, d)| d)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActivityThreshold;
    use crate::record::Record;

    fn healthy() -> Record {
        Record::new()
            .with_field(fields::SLEEP_DURATION, 8.0)
            .with_field(fields::STRESS_LEVEL, 2)
            .with_field(fields::PHYSICAL_ACTIVITY, 8)
            .with_field(fields::DAILY_STEPS, 9000)
            .with_field(fields::BMI_CATEGORY, 0)
            .with_field(fields::HEART_RATE, 60)
            .with_field(fields::SYSTOLIC_BP, 110)
            .with_field(fields::DIASTOLIC_BP, 70)
            .with_field(fields::SLEEP_DISORDER, 0)
    }

    #[test]
    fn test_healthy_record_gets_fallback_only() {
        let evaluator = SuggestionEvaluator::new();
        assert_eq!(evaluator.fired_rules(&healthy()), vec![RuleId::Fallback]);
    }

    #[test]
    fn test_empty_record_gets_fallback() {
        let evaluator = SuggestionEvaluator::new();
        let out = evaluator.evaluate(&Record::new());
        assert_eq!(out, vec![RuleId::Fallback.message().to_string()]);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let evaluator = SuggestionEvaluator::new();
        let record = healthy()
            .with_field(fields::SLEEP_DURATION, 6.0)
            .with_field(fields::STRESS_LEVEL, 7)
            .with_field(fields::PHYSICAL_ACTIVITY, 3)
            .with_field(fields::DAILY_STEPS, 5000)
            .with_field(fields::HEART_RATE, 85)
            .with_field(fields::SYSTOLIC_BP, 130)
            .with_field(fields::DIASTOLIC_BP, 85);

        assert_eq!(evaluator.fired_rules(&record), vec![RuleId::Fallback]);
    }

    #[test]
    fn test_blood_pressure_either_half() {
        let evaluator = SuggestionEvaluator::new();

        let systolic_only = healthy().with_field(fields::SYSTOLIC_BP, 131);
        assert_eq!(
            evaluator.fired_rules(&systolic_only),
            vec![RuleId::HighBloodPressure]
        );

        let diastolic_only = healthy().with_field(fields::DIASTOLIC_BP, 86);
        assert_eq!(
            evaluator.fired_rules(&diastolic_only),
            vec![RuleId::HighBloodPressure]
        );
    }

    #[test]
    fn test_blood_pressure_one_half_missing() {
        let evaluator = SuggestionEvaluator::new();
        let record = Record::new().with_field(fields::DIASTOLIC_BP, 95);
        assert_eq!(evaluator.fired_rules(&record), vec![RuleId::HighBloodPressure]);
    }

    #[test]
    fn test_combined_blood_pressure_field() {
        let evaluator = SuggestionEvaluator::new();
        let high = Record::new().with_field(fields::BLOOD_PRESSURE, "140/90");
        assert_eq!(evaluator.fired_rules(&high), vec![RuleId::HighBloodPressure]);

        let normal = Record::new().with_field(fields::BLOOD_PRESSURE, "120/80");
        assert_eq!(evaluator.fired_rules(&normal), vec![RuleId::Fallback]);
    }

    #[test]
    fn test_split_fields_take_precedence_over_combined() {
        let evaluator = SuggestionEvaluator::new();
        let record = Record::new()
            .with_field(fields::SYSTOLIC_BP, 118)
            .with_field(fields::DIASTOLIC_BP, 76)
            .with_field(fields::BLOOD_PRESSURE, "150/95");
        assert_eq!(evaluator.fired_rules(&record), vec![RuleId::Fallback]);
    }

    #[test]
    fn test_mistyped_blood_pressure_does_not_use_combined() {
        let evaluator = SuggestionEvaluator::new();
        let record = Record::new()
            .with_field(fields::SYSTOLIC_BP, "unknown")
            .with_field(fields::BLOOD_PRESSURE, "150/80");
        assert_eq!(evaluator.fired_rules(&record), vec![RuleId::Fallback]);
    }

    #[test]
    fn test_sleep_disorder_branches() {
        let evaluator = SuggestionEvaluator::new();

        let insomnia = healthy().with_field(fields::SLEEP_DISORDER, "Insomnia");
        assert_eq!(evaluator.fired_rules(&insomnia), vec![RuleId::Insomnia]);

        let apnea = healthy().with_field(fields::SLEEP_DISORDER, 2);
        assert_eq!(evaluator.fired_rules(&apnea), vec![RuleId::SleepApnea]);

        let unknown = healthy().with_field(fields::SLEEP_DISORDER, 7);
        assert_eq!(evaluator.fired_rules(&unknown), vec![RuleId::Fallback]);
    }

    #[test]
    fn test_obesity_label_and_code() {
        let evaluator = SuggestionEvaluator::new();
        let by_code = healthy().with_field(fields::BMI_CATEGORY, 2);
        let by_label = healthy().with_field(fields::BMI_CATEGORY, "Obese");
        let overweight = healthy().with_field(fields::BMI_CATEGORY, "Overweight");

        assert_eq!(evaluator.fired_rules(&by_code), vec![RuleId::Obesity]);
        assert_eq!(evaluator.fired_rules(&by_label), vec![RuleId::Obesity]);
        assert_eq!(evaluator.fired_rules(&overweight), vec![RuleId::Fallback]);
    }

    #[test]
    fn test_minutes_activity_convention() {
        let config = SuggestionConfig::default().with_activity(ActivityThreshold::minutes(30.0));
        let evaluator = SuggestionEvaluator::with_config(config);

        let low = healthy().with_field(fields::PHYSICAL_ACTIVITY, 25);
        let ok = healthy().with_field(fields::PHYSICAL_ACTIVITY, 45);

        assert_eq!(evaluator.fired_rules(&low), vec![RuleId::LowActivity]);
        assert_eq!(evaluator.fired_rules(&ok), vec![RuleId::Fallback]);
    }

    #[test]
    fn test_text_numbers_are_read() {
        let evaluator = SuggestionEvaluator::new();
        let record = healthy().with_field(fields::HEART_RATE, "92");
        assert_eq!(evaluator.fired_rules(&record), vec![RuleId::ElevatedHeartRate]);
    }

    #[test]
    fn test_detailed_carries_rule_ids() {
        let evaluator = SuggestionEvaluator::new();
        let record = healthy()
            .with_field(fields::STRESS_LEVEL, 9)
            .with_field(fields::DAILY_STEPS, 3000);

        let detailed = evaluator.evaluate_detailed(&record);
        let rules: Vec<RuleId> = detailed.iter().map(|s| s.rule).collect();
        assert_eq!(rules, vec![RuleId::HighStress, RuleId::LowSteps]);
        assert_eq!(detailed[0].message, RuleId::HighStress.message());
    }
}
