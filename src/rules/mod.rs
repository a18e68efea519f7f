//! Rule implementations for tolk.
//!
//! Pure functions that compare catalogs against the default language's
//! catalog. Each takes only the inputs it needs and returns its own issue
//! type, sorted by file, line and key.
//!
//! ## Module Structure
//!
//! - `helpers`: issue context construction and sorting
//! - `missing`: default keys absent from other catalogs
//! - `orphan`: keys in other catalogs absent from the default
//! - `untranslated`: values identical to the default language's
//! - `placeholder`: `{{name}}` placeholder sets that differ
//! - `type_mismatch`: text in one catalog, structured in the other

pub mod helpers;
pub mod missing;
pub mod orphan;
pub mod placeholder;
pub mod type_mismatch;
pub mod untranslated;

pub use missing::check_missing_translations;
pub use orphan::check_orphan_keys;
pub use placeholder::check_placeholders;
pub use type_mismatch::check_type_mismatches;
pub use untranslated::check_untranslated;
