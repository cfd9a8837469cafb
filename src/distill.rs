//! Distiller: reduces a parsed [`Datamodel`] to the minimal representation
//! the rest of the pipeline works on.
//!
//! [`Datamodel`]: crate::ast::Datamodel

use crate::ast;

/// The pipeline's working representation: just enough of the schema to
/// render type declarations from.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeTransfer {
    /// Models in schema declaration order.
    pub models: Vec<Model>,
    /// Enums in schema declaration order.
    pub enums: Vec<Enum>,
}

/// A model reduced to its renderable parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub name: String,
    pub fields: Vec<Field>,
}

/// A field reduced to its renderable parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    /// Starts as the schema's native type name; rewritten to a TypeScript
    /// type name by the type mapper.
    pub type_annotation: String,
    /// Whether the field is mandatory on read.
    pub required: bool,
    /// Whether the field is a list.
    pub is_array: bool,
    /// Whether the schema declares a default value for the field.
    pub has_default: bool,
}

/// An enum reduced to its renderable parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Enum {
    pub name: String,
    pub values: Vec<String>,
}

/// Build a [`TypeTransfer`] from a parsed datamodel.
///
/// Enums and models are copied in declaration order. When
/// `insertion_types` is true, relation fields are excluded: insertion
/// payloads must not include relation data.
pub fn distill(datamodel: &ast::Datamodel, insertion_types: bool) -> TypeTransfer {
    let enums = datamodel
        .enums
        .iter()
        .map(|decl| Enum {
            name: decl.name.clone(),
            values: decl.values.iter().map(|v| v.name.clone()).collect(),
        })
        .collect();

    let models = datamodel
        .models
        .iter()
        .map(|model| Model {
            name: model.name.clone(),
            fields: model
                .fields
                .iter()
                .filter(|f| !(f.is_relation() && insertion_types))
                .map(|f| Field {
                    name: f.name.clone(),
                    type_annotation: f.field_type.clone(),
                    required: f.is_required,
                    is_array: f.is_list,
                    has_default: f.has_default_value,
                })
                .collect(),
        })
        .collect();

    TypeTransfer { models, enums }
}
