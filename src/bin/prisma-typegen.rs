//! prisma-typegen — generate TypeScript types from a Prisma schema.
//!
//! # Usage
//!
//! ```bash
//! # Write ./types/index.ts from an auto-discovered schema
//! prisma-typegen ./types
//!
//! # Declarations only, explicit schema
//! prisma-typegen ./types ./prisma/schema.prisma --declarations-only
//!
//! # Insertion types, rendered as type aliases
//! prisma-typegen ./types --insertion-types --use-type
//! ```

use anyhow::Context;
use clap::Parser;
use colored::*;
use prisma_typegen::config::{self, Config};
use prisma_typegen::error::TypegenError;
use prisma_typegen::{GenerateOptions, generate_source, writer};
use std::path::Path;
use std::process;

#[derive(Parser)]
#[command(name = "prisma-typegen")]
#[command(version)]
#[command(about = "Generate TypeScript types straight from your Prisma schema", long_about = None)]
#[command(after_help = "EXAMPLES:
    prisma-typegen ./types
    prisma-typegen ./types ./prisma/schema.prisma --declarations-only
    prisma-typegen ./src/generated/types.ts --insertion-types --use-type")]
struct Cli {
    /// Output directory, or an exact .ts file path
    output_path: Option<String>,

    /// Prisma schema file (defaults to ./schema.prisma, then
    /// ./prisma/schema.prisma)
    #[arg(env = "PRISMA_TYPEGEN_SCHEMA")]
    schema_path: Option<String>,

    /// Output type declarations only (index.d.ts)
    #[arg(long)]
    declarations_only: bool,

    /// Generate types for data to be inserted into the database
    #[arg(long)]
    insertion_types: bool,

    /// Use type aliases instead of interfaces
    #[arg(long)]
    use_type: bool,

    /// Print the generated source to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Print the parsed schema document as JSON and exit
    #[arg(long)]
    dmmf: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load()?;

    let output_path = cli
        .output_path
        .or(config.generate.output)
        .context("Output path is required")?;

    let schema_path = match cli.schema_path.or(config.generate.schema) {
        Some(path) => path,
        None => {
            println!("{}", "Looking for schema.prisma".dimmed());
            config::discover_schema(Path::new("."))
                .ok_or(TypegenError::SchemaNotFound)?
                .to_string_lossy()
                .into_owned()
        }
    };

    let options = GenerateOptions {
        declarations_only: cli.declarations_only
            || config.generate.declarations_only.unwrap_or(false),
        insertion_types: cli.insertion_types || config.generate.insertion_types.unwrap_or(false),
        use_type: cli.use_type || config.generate.use_type.unwrap_or(false),
    };

    let schema = tokio::fs::read_to_string(&schema_path)
        .await
        .with_context(|| format!("Failed to read schema file '{schema_path}'"))?;
    let datamodel = prisma_typegen::parse(&schema)?;

    if cli.dmmf {
        println!("{}", serde_json::to_string_pretty(&datamodel)?);
        return Ok(());
    }

    if cli.verbose {
        let field_count: usize = datamodel.models.iter().map(|m| m.fields.len()).sum();
        println!("{} {}", "Schema:".cyan().bold(), schema_path.yellow());
        println!("  Models: {}", datamodel.models.len());
        println!("  Fields: {field_count}");
        println!("  Enums: {}", datamodel.enums.len());
    }

    println!("{}", "Generating types...".cyan());
    let contents = generate_source(&datamodel, &options);

    if cli.dry_run {
        println!("{contents}");
        return Ok(());
    }

    writer::write_output(&contents, &output_path, options.declarations_only).await;
    println!("{} Done!", "✓".green());

    Ok(())
}
