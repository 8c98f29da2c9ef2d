pub mod enums;
pub mod property;

pub use enums::{without_excluded, PropertyEnum};
pub use property::{PropertyFilter, PropertyOption, PropertySummary};
