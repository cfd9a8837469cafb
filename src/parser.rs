//! Prisma schema parser using nom.
//!
//! Parses the Prisma schema language into a [`Datamodel`].
//!
//! # Grammar Overview
//!
//! ```text
//! datasource db { ... }          // consumed and ignored
//! generator client { ... }       // consumed and ignored
//!
//! enum Role {
//!     ADMIN
//!     USER
//! }
//!
//! model User {
//!     id    Int     @id @default(autoincrement())
//!     email String  @unique
//!     name  String?
//!     role  Role    @default(USER)
//!     posts Post[]
//! }
//! ```
//!
//! Field attributes are scanned for `@default` and `@relation`; everything
//! else after a field's type (including dotted attributes like
//! `@db.VarChar(255)`) is skipped. Relation fields are resolved in a second
//! pass: a field whose type names another model in the same schema is a
//! relation.
//!
//! [`Datamodel`]: crate::ast::Datamodel

use nom::{
    IResult,
    bytes::complete::{tag, take_while1},
    character::complete::{char, space0, space1},
    combinator::{opt, recognize},
    error::{Error, ErrorKind},
    multi::many0,
    sequence::pair,
};
use std::collections::HashSet;

use crate::ast::{Datamodel, Enum, EnumValue, Field, Model};
use crate::error::{TypegenError, TypegenResult};

/// Parse a complete Prisma schema string.
pub fn parse_schema(input: &str) -> TypegenResult<Datamodel> {
    match parse_datamodel(input) {
        Ok((_, mut datamodel)) => {
            link_relations(&mut datamodel);
            Ok(datamodel)
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(TypegenError::parse(
            input.len() - e.input.len(),
            format!("unexpected input near '{}'", snippet(e.input)),
        )),
        Err(nom::Err::Incomplete(_)) => {
            Err(TypegenError::parse(input.len(), "unexpected end of schema"))
        }
    }
}

/// Parse every top-level declaration until the input is exhausted.
fn parse_datamodel(input: &str) -> IResult<&str, Datamodel> {
    let mut datamodel = Datamodel::default();
    let mut rest = input;
    loop {
        let (after, _) = ws(rest)?;
        if after.is_empty() {
            return Ok((after, datamodel));
        }
        let at_decl = after;
        let (after, keyword) = parse_identifier(after)?;
        match keyword {
            "model" => {
                let (after, model) = model_decl(after)?;
                datamodel.models.push(model);
                rest = after;
            }
            "enum" => {
                let (after, decl) = enum_decl(after)?;
                datamodel.enums.push(decl);
                rest = after;
            }
            "datasource" | "generator" => {
                let (after, _) = ws(after)?;
                let (after, _) = parse_identifier(after)?;
                let (after, _) = ws(after)?;
                let (after, _) = skip_block(after)?;
                rest = after;
            }
            _ => return Err(nom::Err::Error(Error::new(at_decl, ErrorKind::Tag))),
        }
    }
}

/// Parse a `model` block (keyword already consumed).
fn model_decl(input: &str) -> IResult<&str, Model> {
    let (input, _) = space1(input)?;
    let (input, name) = parse_identifier(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char('{')(input)?;

    let mut fields = Vec::new();
    let mut rest = input;
    loop {
        let (after, _) = ws(rest)?;
        if let Some(after) = after.strip_prefix('}') {
            return Ok((
                after,
                Model {
                    name: name.to_string(),
                    fields,
                },
            ));
        }
        if after.starts_with("@@") {
            let (after, _) = skip_block_attribute(after)?;
            rest = after;
            continue;
        }
        let (after, field) = parse_field(after)?;
        fields.push(field);
        rest = after;
    }
}

/// Parse an `enum` block (keyword already consumed).
fn enum_decl(input: &str) -> IResult<&str, Enum> {
    let (input, _) = space1(input)?;
    let (input, name) = parse_identifier(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char('{')(input)?;

    let mut values = Vec::new();
    let mut rest = input;
    loop {
        let (after, _) = ws(rest)?;
        if let Some(after) = after.strip_prefix('}') {
            return Ok((
                after,
                Enum {
                    name: name.to_string(),
                    values,
                },
            ));
        }
        if after.starts_with("@@") {
            let (after, _) = skip_block_attribute(after)?;
            rest = after;
            continue;
        }
        let (after, value) = parse_identifier(after)?;
        // Per-value attributes, e.g. `ADMIN @map("admin")`.
        let (after, _) = skip_inline_attributes(after)?;
        values.push(EnumValue {
            name: value.to_string(),
        });
        rest = after;
    }
}

/// Parse a model field: `name Type` with optional `[]`/`?` modifiers and
/// trailing attributes.
fn parse_field(input: &str) -> IResult<&str, Field> {
    let (input, name) = parse_identifier(input)?;
    let (input, _) = space1(input)?;
    let (input, field_type) = parse_identifier(input)?;
    let (input, list) = opt(tag("[]"))(input)?;
    let (input, optional) = opt(char('?'))(input)?;

    let mut has_default = false;
    let mut relation_name = None;
    let mut rest = input;
    loop {
        let (after, _) = space0(rest)?;
        if after.starts_with("@@") {
            rest = after;
            break;
        }
        let Some(after_at) = after.strip_prefix('@') else {
            rest = after;
            break;
        };
        let (after, attr_name) = dotted_identifier(after_at)?;
        let (after, args) = opt(parens_args)(after)?;
        match attr_name {
            "default" => has_default = true,
            "relation" => relation_name = args.and_then(relation_name_arg),
            _ => {}
        }
        rest = after;
    }

    Ok((
        rest,
        Field {
            name: name.to_string(),
            field_type: field_type.to_string(),
            is_required: optional.is_none(),
            is_list: list.is_some(),
            has_default_value: has_default,
            relation_name,
        },
    ))
}

/// Consume whitespace and line comments (`//` and `///`).
fn ws(input: &str) -> IResult<&str, ()> {
    let mut rest = input;
    loop {
        let trimmed = rest.trim_start();
        if let Some(comment) = trimmed.strip_prefix("//") {
            rest = match comment.find('\n') {
                Some(i) => &comment[i + 1..],
                None => "",
            };
        } else {
            return Ok((trimmed, ()));
        }
    }
}

/// Parse an identifier (model, field, enum, or attribute name).
fn parse_identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)
}

/// Parse a possibly dotted attribute name, e.g. `db.VarChar`.
fn dotted_identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        parse_identifier,
        many0(pair(char('.'), parse_identifier)),
    ))(input)
}

/// Skip `@attr` / `@attr(...)` attributes on the current line.
fn skip_inline_attributes(input: &str) -> IResult<&str, ()> {
    let mut rest = input;
    loop {
        let (after, _) = space0(rest)?;
        let Some(after_at) = after.strip_prefix('@') else {
            return Ok((after, ()));
        };
        let (after, _) = dotted_identifier(after_at)?;
        let (after, _) = opt(parens_args)(after)?;
        rest = after;
    }
}

/// Skip a `@@attr` / `@@attr(...)` block attribute.
fn skip_block_attribute(input: &str) -> IResult<&str, ()> {
    let (input, _) = tag("@@")(input)?;
    let (input, _) = dotted_identifier(input)?;
    let (input, _) = opt(parens_args)(input)?;
    Ok((input, ()))
}

/// Consume a parenthesized argument list, returning the raw inner text.
/// Handles nested parentheses and string literals, e.g.
/// `@default(dbgenerated("gen_random_uuid()"))`.
fn parens_args(input: &str) -> IResult<&str, &str> {
    let (input, _) = char('(')(input)?;
    let mut depth = 1usize;
    let mut in_string = false;
    let mut iter = input.char_indices();
    while let Some((i, c)) = iter.next() {
        match c {
            '\\' if in_string => {
                iter.next();
            }
            '"' => in_string = !in_string,
            '(' if !in_string => depth += 1,
            ')' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&input[i + 1..], &input[..i]));
                }
            }
            _ => {}
        }
    }
    Err(nom::Err::Failure(Error::new(input, ErrorKind::Char)))
}

/// Consume a brace-delimited block without interpreting it, tracking nesting
/// and string literals. Used for `datasource` and `generator` bodies.
fn skip_block(input: &str) -> IResult<&str, ()> {
    let (input, _) = char('{')(input)?;
    let mut depth = 1usize;
    let mut in_string = false;
    let mut iter = input.char_indices();
    while let Some((i, c)) = iter.next() {
        match c {
            '\\' if in_string => {
                iter.next();
            }
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&input[i + 1..], ()));
                }
            }
            _ => {}
        }
    }
    Err(nom::Err::Failure(Error::new(input, ErrorKind::Char)))
}

/// Extract the relation name from `@relation` arguments: either the first
/// positional string literal or a `name: "..."` argument.
fn relation_name_arg(args: &str) -> Option<String> {
    let trimmed = args.trim_start();
    if let Some(rest) = trimmed.strip_prefix('"') {
        return rest.split('"').next().map(str::to_string);
    }
    args.split(',').find_map(|part| {
        part.trim()
            .strip_prefix("name")
            .map(str::trim_start)
            .and_then(|r| r.strip_prefix(':'))
            .map(str::trim_start)
            .and_then(|r| r.strip_prefix('"'))
            .and_then(|r| r.split('"').next())
            .map(str::to_string)
    })
}

/// Mark relation fields: a field whose type names another model is a
/// relation. An explicit `@relation` name wins; otherwise the name is the
/// two model names joined with `To`, alphabetically (Prisma's convention).
fn link_relations(datamodel: &mut Datamodel) {
    let model_names: HashSet<String> =
        datamodel.models.iter().map(|m| m.name.clone()).collect();
    for model in &mut datamodel.models {
        let owner = model.name.clone();
        for field in &mut model.fields {
            if model_names.contains(&field.field_type) {
                if field.relation_name.is_none() {
                    field.relation_name =
                        Some(synthesized_relation_name(&owner, &field.field_type));
                }
            } else {
                // An @relation attribute on a scalar carries FK metadata,
                // not a relation type.
                field.relation_name = None;
            }
        }
    }
}

fn synthesized_relation_name(a: &str, b: &str) -> String {
    if a <= b {
        format!("{a}To{b}")
    } else {
        format!("{b}To{a}")
    }
}

/// First line of the failing input, truncated, for error messages.
fn snippet(input: &str) -> &str {
    let line = input.lines().next().unwrap_or("");
    match line.char_indices().nth(32) {
        Some((i, _)) => &line[..i],
        None => line,
    }
}
