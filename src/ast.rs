//! Schema document produced by parsing a Prisma schema.
//!
//! This module defines the data structures that represent
//! a parsed datamodel: models, fields, and enums, in declaration order.

use serde::{Deserialize, Serialize};

/// A parsed Prisma datamodel.
///
/// Models and enums appear in the order they were declared in the schema
/// file; the generator never reorders them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Datamodel {
    /// Model declarations, in declaration order.
    pub models: Vec<Model>,
    /// Enum declarations, in declaration order.
    pub enums: Vec<Enum>,
}

/// A `model` block: a named record type with an ordered set of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Model name, unique within a schema.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

/// A single field of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name, unique within its model.
    pub name: String,
    /// The declared type: a Prisma scalar (`String`, `Int`, ...), an enum
    /// name, or another model's name for relation fields.
    pub field_type: String,
    /// Whether the field is mandatory (no `?` modifier).
    pub is_required: bool,
    /// Whether the field is a list (`[]` modifier).
    pub is_list: bool,
    /// Whether the field carries an `@default(...)` attribute.
    pub has_default_value: bool,
    /// Set when the field's type refers to another model. Taken from an
    /// explicit `@relation` name argument when present, otherwise the two
    /// model names joined with `To`, alphabetically.
    pub relation_name: Option<String>,
}

impl Field {
    /// Whether this field is a relation to another model.
    pub fn is_relation(&self) -> bool {
        self.relation_name.is_some()
    }
}

/// An `enum` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enum {
    /// Enum name, unique within a schema.
    pub name: String,
    /// Values in declaration order.
    pub values: Vec<EnumValue>,
}

/// A single enum value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    /// The value's identifier.
    pub name: String,
}
