//! Prisma-to-TypeScript type mapping.

use crate::distill::TypeTransfer;

/// Look up the TypeScript name for a Prisma scalar. Returns `None` for
/// anything outside the fixed scalar table (enum names, model names), which
/// pass through unchanged.
fn map_scalar(native: &str, insertion_types: bool) -> Option<&'static str> {
    Some(match native {
        "String" => "string",
        "Boolean" => "boolean",
        "Int" | "BigInt" | "Float" | "Decimal" => "number",
        "Json" => "any",
        "Bytes" => "Buffer",
        // Insertion callers may supply either a date object or an ISO string.
        "DateTime" => {
            if insertion_types {
                "(Date | string)"
            } else {
                "Date"
            }
        }
        _ => return None,
    })
}

/// Rewrite every field's type annotation from the Prisma type name to the
/// TypeScript one. Pure and order-preserving; model and enum identity are
/// untouched.
pub fn map_types(mut transfer: TypeTransfer, insertion_types: bool) -> TypeTransfer {
    for model in &mut transfer.models {
        for field in &mut model.fields {
            if let Some(mapped) = map_scalar(&field.type_annotation, insertion_types) {
                field.type_annotation = mapped.to_string();
            }
        }
    }
    transfer
}
