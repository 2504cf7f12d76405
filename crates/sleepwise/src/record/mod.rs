//! Health record model: values, field names, and categorical codes.

mod codes;
pub mod fields;
mod value;

pub use codes::{BmiCategory, CategoricalCode, SleepDisorder};
pub use value::{FieldFault, FieldLookup, FieldValue, Record};
