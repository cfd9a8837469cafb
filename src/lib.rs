//! # prisma-typegen — TypeScript types from your Prisma schema
//!
//! > **One schema. Zero hand-written interfaces.**
//!
//! prisma-typegen parses a Prisma schema and emits a TypeScript file with
//! one enum per schema enum and one interface (or type alias) per model.
//!
//! ## Quick Example
//!
//! ```
//! use prisma_typegen::{GenerateOptions, generate};
//!
//! let ts = generate(
//!     "model User {\n  id Int @id @default(autoincrement())\n  name String?\n}",
//!     &GenerateOptions::default(),
//! )
//! .unwrap();
//! assert!(ts.contains("export interface User {"));
//! assert!(ts.contains("    name?: string,"));
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Function | Does |
//! |----------|-----------------------|--------------------------------------|
//! | Parse    | [`parser::parse_schema`] | schema text → [`ast::Datamodel`]  |
//! | Distill  | [`distill::distill`]  | datamodel → minimal [`TypeTransfer`] |
//! | Map      | [`typemap::map_types`] | Prisma type names → TypeScript ones |
//! | Render   | [`render::render`]    | declarations text blob               |
//! | Write    | [`writer::write_output`] | blob → `index.ts` / `index.d.ts`  |
//!
//! [`TypeTransfer`]: distill::TypeTransfer

pub mod ast;
pub mod config;
pub mod distill;
pub mod error;
pub mod parser;
pub mod render;
pub mod typemap;
pub mod writer;

pub mod prelude {
    pub use crate::GenerateOptions;
    pub use crate::ast::*;
    pub use crate::config::Config;
    pub use crate::distill::distill;
    pub use crate::error::*;
    pub use crate::parser::parse_schema;
    pub use crate::render::render;
    pub use crate::typemap::map_types;
    pub use crate::{generate, generate_source, generate_types};
}

use crate::error::TypegenResult;

/// Flags threaded through the pipeline. A single set of options keeps the
/// distiller, type mapper, and renderer consistent with each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Emit `index.d.ts` instead of `index.ts` when the output path is a
    /// directory.
    pub declarations_only: bool,
    /// Generate insertion types: shapes for data being written to the
    /// database rather than read from it.
    pub insertion_types: bool,
    /// Render `type Name = { ... }` instead of `interface Name { ... }`.
    pub use_type: bool,
}

/// Parse a Prisma schema string into a datamodel.
///
/// # Example
///
/// ```
/// let datamodel = prisma_typegen::parse("model User { id Int @id }").unwrap();
/// assert_eq!(datamodel.models[0].name, "User");
/// ```
pub fn parse(input: &str) -> TypegenResult<ast::Datamodel> {
    parser::parse_schema(input)
}

/// Run the pure pipeline stages over an already-parsed datamodel.
pub fn generate_source(datamodel: &ast::Datamodel, options: &GenerateOptions) -> String {
    let transfer = distill::distill(datamodel, options.insertion_types);
    let transfer = typemap::map_types(transfer, options.insertion_types);
    render::render(&transfer, options.use_type, options.insertion_types)
}

/// Generate the output file contents from schema text.
pub fn generate(schema: &str, options: &GenerateOptions) -> TypegenResult<String> {
    Ok(generate_source(&parse(schema)?, options))
}

/// Read a schema file, generate, and write the output file.
///
/// Read and parse failures propagate; a write failure is reported inside
/// the writer and leaves the generation incomplete without returning an
/// error.
pub async fn generate_types(
    schema_path: &str,
    output_path: &str,
    options: &GenerateOptions,
) -> TypegenResult<()> {
    let schema = tokio::fs::read_to_string(schema_path).await?;
    let contents = generate(&schema, options)?;
    writer::write_output(&contents, output_path, options.declarations_only).await;
    Ok(())
}
