//! Short-name resolution for oneM2M resource attributes.
//!
//! Resource representations on the wire use short codes (`ri`, `pi`,
//! `cni`, ...). The resource tree viewer shows them either as-is or as
//! their long names, and groups them by category.

pub mod attribute;
mod builtin;
pub mod config;
pub mod document;
pub mod error;
pub mod loader;
pub mod suggest;
pub mod table;

pub use attribute::{AttributeCategory, AttributeEntry};
pub use config::ResolverConfig;
pub use document::translate_document;
pub use error::{ResolverError, Result};
pub use loader::{build_table, load_from_file, load_from_json};
pub use suggest::suggest;
pub use table::{classify, translate, AttributeTable, BUILTIN_TABLE};
