mod field;
mod matcher;
mod time_template;

pub use field::{FieldMatch, FieldPattern};
pub use matcher::{FieldMatcher, TokenMatcher};
pub use time_template::{DEFAULT_TIME_TEMPLATE, TimeTemplate};
