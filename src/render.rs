//! TypeScript declaration renderer.
//!
//! Serializes a mapped [`TypeTransfer`] into the output source text: a
//! generated-file header, one enum block per schema enum, and one
//! interface/type block per schema model, in schema declaration order.
//!
//! [`TypeTransfer`]: crate::distill::TypeTransfer

use crate::distill::{Enum, Field, Model, TypeTransfer};

const HEADER: &str = "// AUTO GENERATED FILE BY prisma-typegen\n// DO NOT EDIT\n";

/// Render the full output file contents. Deterministic: identical input
/// produces byte-identical output.
pub fn render(transfer: &TypeTransfer, use_type: bool, insertion_types: bool) -> String {
    let enums: Vec<String> = transfer.enums.iter().map(render_enum).collect();
    let models: Vec<String> = transfer
        .models
        .iter()
        .map(|m| render_model(m, use_type, insertion_types))
        .collect();

    let mut out = String::from(HEADER);
    out.push('\n');
    out.push_str(&enums.join("\n"));
    out.push_str("\n\n");
    out.push_str(&models.join("\n"));
    out.push('\n');
    out
}

/// Render one enum block. The value's identifier doubles as its string
/// value: `ADMIN = 'ADMIN',`.
fn render_enum(decl: &Enum) -> String {
    let values: Vec<String> = decl
        .values
        .iter()
        .map(|v| format!("    {v} = '{v}',"))
        .collect();
    format!("\nexport enum {} {{\n{}\n}}", decl.name, values.join("\n"))
}

/// Render one model as an `interface Name { ... }` or `type Name = { ... }`
/// block.
fn render_model(model: &Model, use_type: bool, insertion_types: bool) -> String {
    let fields: Vec<String> = model
        .fields
        .iter()
        .map(|f| field_line(f, insertion_types))
        .collect();
    let keyword = if use_type { "type" } else { "interface" };
    let equals = if use_type { "= " } else { "" };
    format!(
        "\nexport {keyword} {} {equals}{{\n{}\n}}",
        model.name,
        fields.join("\n")
    )
}

/// Render one field line.
///
/// Read mode: optional iff the field is not required.
/// Insertion mode: optional iff not required or it has a default (a field
/// with a default may be omitted on insert even though it is required on
/// read), and ` | null` iff not required (a field nullable on read must
/// also accept null on insert).
fn field_line(field: &Field, insertion_types: bool) -> String {
    let array = if field.is_array { "[]" } else { "" };
    if insertion_types {
        let optional = if field.required && !field.has_default {
            ""
        } else {
            "?"
        };
        let nullable = if field.required { "" } else { " | null" };
        format!(
            "    {}{optional}: {}{array}{nullable},",
            field.name, field.type_annotation
        )
    } else {
        let optional = if field.required { "" } else { "?" };
        format!(
            "    {}{optional}: {}{array},",
            field.name, field.type_annotation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distill::distill;
    use crate::parser::parse_schema;
    use crate::typemap::map_types;
    use pretty_assertions::assert_eq;

    fn render_schema(schema: &str, use_type: bool, insertion_types: bool) -> String {
        let datamodel = parse_schema(schema).unwrap();
        let transfer = map_types(distill(&datamodel, insertion_types), insertion_types);
        render(&transfer, use_type, insertion_types)
    }

    fn line(schema_field: &str, insertion_types: bool) -> String {
        let schema = format!("model M {{\n  {schema_field}\n}}");
        let datamodel = parse_schema(&schema).unwrap();
        let transfer = map_types(distill(&datamodel, insertion_types), insertion_types);
        field_line(&transfer.models[0].fields[0], insertion_types)
    }

    #[test]
    fn test_enum_block() {
        let decl = Enum {
            name: "Role".to_string(),
            values: vec!["ADMIN".to_string(), "USER".to_string()],
        };
        assert_eq!(
            render_enum(&decl),
            "\nexport enum Role {\n    ADMIN = 'ADMIN',\n    USER = 'USER',\n}"
        );
    }

    #[test]
    fn test_read_mode_optional_field() {
        assert_eq!(line("age Int?", false), "    age?: number,");
    }

    #[test]
    fn test_insertion_mode_optional_field_accepts_null() {
        assert_eq!(line("age Int?", true), "    age?: number | null,");
    }

    #[test]
    fn test_insertion_mode_default_is_optional_but_not_null() {
        assert_eq!(
            line("createdAt DateTime @default(now())", true),
            "    createdAt?: (Date | string),"
        );
    }

    #[test]
    fn test_read_mode_default_stays_required() {
        assert_eq!(
            line("createdAt DateTime @default(now())", false),
            "    createdAt: Date,"
        );
    }

    #[test]
    fn test_required_field_without_default() {
        assert_eq!(line("email String", true), "    email: string,");
        assert_eq!(line("email String", false), "    email: string,");
    }

    #[test]
    fn test_array_suffix_in_both_modes() {
        assert_eq!(line("tags String[]", false), "    tags: string[],");
        assert_eq!(line("tags String[]", true), "    tags: string[],");
    }

    #[test]
    fn test_type_alias_form() {
        let out = render_schema("model User {\n  id Int\n}", true, false);
        assert!(out.contains("export type User = {\n    id: number,\n}"));
    }

    #[test]
    fn test_full_file_read_mode() {
        let out = render_schema(
            "enum Role {\n  ADMIN\n  USER\n}\nmodel User {\n  id Int @id @default(autoincrement())\n  role Role @default(USER)\n}",
            false,
            false,
        );
        assert_eq!(
            out,
            "// AUTO GENERATED FILE BY prisma-typegen\n// DO NOT EDIT\n\n\nexport enum Role {\n    ADMIN = 'ADMIN',\n    USER = 'USER',\n}\n\n\nexport interface User {\n    id: number,\n    role: Role,\n}\n"
        );
    }

    #[test]
    fn test_full_file_insertion_mode_drops_relations() {
        let out = render_schema(
            "model User {\n  id Int @id @default(autoincrement())\n  posts Post[]\n}\nmodel Post {\n  id Int @id\n  author User @relation(fields: [authorId], references: [id])\n  authorId Int\n}",
            false,
            true,
        );
        assert!(!out.contains("posts"));
        assert!(!out.contains("author:"));
        assert!(out.contains("    id?: number,\n"));
        assert!(out.contains("    authorId: number,\n"));
    }

    #[test]
    fn test_blocks_emitted_in_declaration_order() {
        let out = render_schema(
            "model B { id Int }\nmodel A { id Int }\nenum Z { X }\nenum Y { X }",
            false,
            false,
        );
        let b = out.find("export interface B").unwrap();
        let a = out.find("export interface A").unwrap();
        let z = out.find("export enum Z").unwrap();
        let y = out.find("export enum Y").unwrap();
        assert!(b < a);
        assert!(z < y);
        // Enums render before models regardless of interleaving.
        assert!(y < b);
    }

    #[test]
    fn test_render_is_deterministic() {
        let schema = "enum Role { ADMIN }\nmodel User {\n  id Int @id\n  role Role\n}";
        assert_eq!(
            render_schema(schema, false, false),
            render_schema(schema, false, false)
        );
    }
}
