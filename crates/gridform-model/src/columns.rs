//! Fixed column conventions shared by every reshape operation.
//!
//! Tables in this system always start with a fixed prefix of identifying
//! columns; everything after the prefix is transform-specific. The teacher
//! list operations additionally locate two columns by exact header text.

/// Number of leading "base" columns copied verbatim by every transform.
pub const BASE_COLUMNS: usize = 7;

/// Long-form output: encoded item identifier.
pub const ITEM_ID: &str = "item_id";
/// Long-form output: decoded item display name.
pub const ITEM_NAME: &str = "item_name";
/// Long-form output: weighting value for one (entity, item) pair.
pub const WEIGHT: &str = "weight";

/// Schedule code column, located by exact header text.
pub const SCHEDULE_CODE: &str = "schedule_code";
/// Comma-separated teacher list column, located by exact header text.
pub const ASSIGNED_TEACHERS: &str = "assigned_teachers";

/// Flattened output: teacher code segment of an encoded entry.
pub const TEACHER_CODE: &str = "teacher_code";
/// Flattened output: teacher display name.
pub const TEACHER_NAME: &str = "teacher_name";
