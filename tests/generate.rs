//! End-to-end generation tests: schema file in, TypeScript file out.

use prisma_typegen::{GenerateOptions, generate_types};
use tempfile::tempdir;

const SCHEMA: &str = r#"
datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

enum Role {
  ADMIN
  USER
}

model User {
  id        Int      @id @default(autoincrement())
  email     String   @unique
  name      String?
  role      Role     @default(USER)
  createdAt DateTime @default(now())
  posts     Post[]
}

model Post {
  id       Int    @id @default(autoincrement())
  title    String
  author   User   @relation(fields: [authorId], references: [id])
  authorId Int
}
"#;

fn write_schema(dir: &std::path::Path) -> String {
    let path = dir.join("schema.prisma");
    std::fs::write(&path, SCHEMA).unwrap();
    path.to_string_lossy().into_owned()
}

#[tokio::test]
async fn writes_index_ts_into_directory() {
    let tmp = tempdir().unwrap();
    let schema_path = write_schema(tmp.path());
    let out_dir = tmp.path().join("out");

    generate_types(
        &schema_path,
        out_dir.to_str().unwrap(),
        &GenerateOptions::default(),
    )
    .await
    .unwrap();

    let written = std::fs::read_to_string(out_dir.join("index.ts")).unwrap();
    assert!(written.starts_with("// AUTO GENERATED FILE BY prisma-typegen\n// DO NOT EDIT\n"));
    assert!(written.contains("export enum Role {"));
    assert!(written.contains("export interface User {"));
    assert!(written.contains("    name?: string,"));
    assert!(written.contains("    posts: Post[],"));
}

#[tokio::test]
async fn writes_declarations_file_when_requested() {
    let tmp = tempdir().unwrap();
    let schema_path = write_schema(tmp.path());
    let out_dir = tmp.path().join("out");

    let options = GenerateOptions {
        declarations_only: true,
        ..Default::default()
    };
    generate_types(&schema_path, out_dir.to_str().unwrap(), &options)
        .await
        .unwrap();

    assert!(out_dir.join("index.d.ts").exists());
    assert!(!out_dir.join("index.ts").exists());
}

#[tokio::test]
async fn exact_file_path_creates_parent_directory() {
    let tmp = tempdir().unwrap();
    let schema_path = write_schema(tmp.path());
    let out_file = tmp.path().join("generated/types.ts");

    generate_types(
        &schema_path,
        out_file.to_str().unwrap(),
        &GenerateOptions::default(),
    )
    .await
    .unwrap();

    assert!(out_file.exists());
}

#[tokio::test]
async fn insertion_types_drop_relations_and_relax_defaults() {
    let tmp = tempdir().unwrap();
    let schema_path = write_schema(tmp.path());
    let out_dir = tmp.path().join("out");

    let options = GenerateOptions {
        insertion_types: true,
        ..Default::default()
    };
    generate_types(&schema_path, out_dir.to_str().unwrap(), &options)
        .await
        .unwrap();

    let written = std::fs::read_to_string(out_dir.join("index.ts")).unwrap();
    assert!(!written.contains("posts"));
    assert!(!written.contains("author:"));
    assert!(written.contains("    createdAt?: (Date | string),"));
    assert!(written.contains("    name?: string | null,"));
    assert!(written.contains("    title: string,"));
}

#[tokio::test]
async fn regeneration_is_byte_identical() {
    let tmp = tempdir().unwrap();
    let schema_path = write_schema(tmp.path());
    let out_dir = tmp.path().join("out");
    let options = GenerateOptions::default();

    generate_types(&schema_path, out_dir.to_str().unwrap(), &options)
        .await
        .unwrap();
    let first = std::fs::read(out_dir.join("index.ts")).unwrap();

    generate_types(&schema_path, out_dir.to_str().unwrap(), &options)
        .await
        .unwrap();
    let second = std::fs::read(out_dir.join("index.ts")).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_schema_file_is_an_error() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope.prisma");
    let result = generate_types(
        missing.to_str().unwrap(),
        tmp.path().join("out").to_str().unwrap(),
        &GenerateOptions::default(),
    )
    .await;
    assert!(result.is_err());
}
