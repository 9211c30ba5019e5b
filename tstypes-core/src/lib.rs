//! # tstypes Core
//!
//! Building blocks shared by the grammar loader and the code generator.
//!
//! This crate provides:
//! - String-literal rendering for generated TypeScript
//! - Ordered, deduplicated symbol tables
//! - Declaration naming per vocabulary category

pub mod error;
pub mod literal;
pub mod names;
pub mod symbols;

pub use error::{Error, Result};
pub use literal::render_literal;
pub use names::{Category, DeclarationNames, format_language_name};
pub use symbols::{FIELD_NAME_FALLBACK, NODE_KIND_FALLBACK, SymbolTable};
