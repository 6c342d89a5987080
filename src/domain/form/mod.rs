pub mod entity;
pub mod invariants;

pub use entity::FormFields;
pub use invariants::check_fields;
