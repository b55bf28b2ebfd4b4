//! # ngsmith-core - Parsing and Patching Core
//!
//! Foundation crate for angular-smith. Provides the settings-DSL parser,
//! the idempotent source patchers, naming helpers and snippet builders,
//! plus error handling and the logging bootstrap.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, serde_json, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Settings DSL (`settings`)
//! - [`parse_settings()`] - One raw input line to ordered field descriptors
//! - [`FieldDescriptor`] - One parsed field (title, key, widget, options)
//! - [`FieldOption`], [`OptionValue`] - Enumerated choices and their values
//!
//! ### Source Patchers (`patch`)
//! - [`add_import_members()`] - Ensure members on a named import
//! - [`add_constructor_parameter()`] - Append a constructor parameter
//! - [`add_field_after_constructor()`] - Insert a field after an empty constructor
//! - [`register_in_declarations()`] - Splice a component into an NgModule
//! - [`Patched`] - Result text plus an applied/no-op flag
//!
//! ### Snippet Builders (`schema`)
//! - [`form_schema()`] - delon `SFSchema` literal from descriptors
//! - [`table_columns()`] - delon `STColumn[]` literal from descriptors
//!
//! ### Naming (`naming`)
//! - [`class_name()`] / [`dash_case()`] - Identifier shape conversions
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum for the collaborator layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use ngsmith_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod naming;
pub mod patch;
pub mod schema;
pub mod settings;

/// Prelude for common imports used throughout the angular-smith crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used items at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use naming::{class_name, dash_case};
pub use patch::{
    add_constructor_parameter, add_field_after_constructor, add_import_members,
    register_in_declarations, Patched,
};
pub use schema::{form_schema, strip_key_quotes, table_columns, TableOptions};
pub use settings::{parse_settings, FieldDescriptor, FieldOption, OptionValue};
