// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Typed value descriptors (C1) extracted from a processor's declared shape.
//!
//! A reflection-driven runtime would enumerate a struct's fields at call time;
//! this crate has no reflection, so processors declare their field shapes
//! explicitly via [`FieldSpec`]/[`OutputFieldSpec`] and the functions here do the
//! prefixing, rename-mapping and validation work that the reflective version
//! would otherwise do as a side effect of walking declared fields.

use std::fmt;

/// A type tag carried by a descriptor. Equality is by name except for the
/// wildcard `Any` tag, which is assignable to and from everything — used for
/// the ambient well-known attributes whose concrete type is owned by the
/// surrounding, out-of-scope system.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Any,
    Named(String),
}

impl TypeTag {
    pub fn named(name: impl Into<String>) -> Self {
        TypeTag::Named(name.into())
    }

    /// Is a value of type `other` assignable to a slot declared as `self`?
    pub fn is_assignable_from(&self, other: &TypeTag) -> bool {
        match (self, other) {
            (TypeTag::Any, _) | (_, TypeTag::Any) => true,
            (TypeTag::Named(a), TypeTag::Named(b)) => a == b,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Any => write!(f, "Any"),
            TypeTag::Named(name) => write!(f, "{name}"),
        }
    }
}

/// The reserved wildcard input name: a processor declaring an input with this
/// external name consumes the whole values bag rather than a single value.
pub const WILDCARD_INPUT: &str = "VALUES";

/// A bijective external<->internal name map, built from explicit pairs rather
/// than reflected. Storage order is `(first, second)`; callers decide which
/// side plays "key" depending on whether they're building an input mapper
/// (external -> internal) or an output mapper (internal -> external).
#[derive(Debug, Clone, Default)]
pub struct NameMap(Vec<(String, String)>);

impl NameMap {
    pub fn new(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self(pairs.into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the first element of each pair.
    pub fn firsts(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(a, _)| a.as_str())
    }

    /// Look up by first element, returning the second.
    pub fn get(&self, first: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(a, _)| a == first)
            .map(|(_, b)| b.as_str())
    }

    /// Look up by second element, returning the first.
    pub fn get_reverse(&self, second: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, b)| b == second)
            .map(|(a, _)| a.as_str())
    }

    /// Iterate the raw `(first, second)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = &(String, String)> {
        self.0.iter()
    }
}

/// A single declared input field of a processor's input shape. This stands in
/// for a reflected struct field: `field_name` is the internal name the
/// processor binds the value to.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub field_name: String,
    pub type_tag: TypeTag,
    /// Input has a default value and may be left unsatisfied.
    pub has_default: bool,
    /// The "input-is-also-output" marker: after the graph records this
    /// processor's outputs, it additionally becomes the producer of this
    /// input's external name (pass-through).
    pub is_also_output: bool,
}

impl FieldSpec {
    pub fn new(field_name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            field_name: field_name.into(),
            type_tag,
            has_default: false,
            is_also_output: false,
        }
    }

    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    pub fn pass_through(mut self) -> Self {
        self.is_also_output = true;
        self
    }
}

/// A single declared output field of a processor's output shape.
#[derive(Debug, Clone)]
pub struct OutputFieldSpec {
    pub field_name: String,
    pub type_tag: TypeTag,
    /// The "internal-value" marker: this output's external name may be
    /// suffixed with a fresh unique token to resolve a collision.
    pub renameable: bool,
}

impl OutputFieldSpec {
    pub fn new(field_name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            field_name: field_name.into(),
            type_tag,
            renameable: false,
        }
    }

    pub fn renameable(mut self) -> Self {
        self.renameable = true;
        self
    }
}

/// A resolved input descriptor: external name is what the graph builder keys
/// dependency resolution on, internal name is what the processor binds to.
#[derive(Debug, Clone)]
pub struct InputDescriptor {
    pub external_name: String,
    pub internal_name: String,
    pub type_tag: TypeTag,
    pub has_default: bool,
    pub is_also_output: bool,
}

impl PartialEq for InputDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.external_name == other.external_name
    }
}
impl Eq for InputDescriptor {}

/// A resolved output descriptor.
#[derive(Debug, Clone)]
pub struct OutputDescriptor {
    pub external_name: String,
    pub internal_name: String,
    pub type_tag: TypeTag,
    pub renameable: bool,
}

impl PartialEq for OutputDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.external_name == other.external_name
    }
}
impl Eq for OutputDescriptor {}

/// An unmapped alias: a mapper entry whose validated side names no field the
/// processor actually declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedAlias {
    pub alias: String,
    pub target: String,
}

fn apply_prefix(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(p) if !p.is_empty() => format!("{p}{name}"),
        _ => name.to_string(),
    }
}

/// Build input descriptors from a processor's declared field shape.
///
/// Validates that every *value* of `input_mapper` (external -> internal pairs)
/// names an actual declared field before computing any external names. On
/// validation failure, returns every offending mapping together with the
/// legal field names in one error.
pub fn build_input_descriptors(
    fields: &[FieldSpec],
    input_prefix: Option<&str>,
    input_mapper: &NameMap,
) -> Result<Vec<InputDescriptor>, (Vec<UnmappedAlias>, Vec<String>)> {
    let legal_fields: Vec<String> = fields.iter().map(|f| f.field_name.clone()).collect();

    let offending: Vec<UnmappedAlias> = input_mapper
        .pairs()
        .filter(|(_, internal)| !legal_fields.contains(internal))
        .map(|(external, internal)| UnmappedAlias {
            alias: external.clone(),
            target: internal.clone(),
        })
        .collect();

    if !offending.is_empty() {
        return Err((offending, legal_fields));
    }

    Ok(fields
        .iter()
        .map(|field| {
            let external_name = apply_prefix(
                input_prefix,
                input_mapper
                    .get_reverse(&field.field_name)
                    .unwrap_or(&field.field_name),
            );
            InputDescriptor {
                external_name,
                internal_name: field.field_name.clone(),
                type_tag: field.type_tag.clone(),
                has_default: field.has_default,
                is_also_output: field.is_also_output,
            }
        })
        .collect())
}

/// Build output descriptors from a processor's declared output shape.
///
/// Validates that every *key* of `output_mapper` (internal -> external pairs)
/// names an actual declared field.
pub fn build_output_descriptors(
    fields: &[OutputFieldSpec],
    output_prefix: Option<&str>,
    output_mapper: &NameMap,
) -> Result<Vec<OutputDescriptor>, (Vec<UnmappedAlias>, Vec<String>)> {
    let legal_fields: Vec<String> = fields.iter().map(|f| f.field_name.clone()).collect();

    let offending: Vec<UnmappedAlias> = output_mapper
        .pairs()
        .filter(|(internal, _)| !legal_fields.contains(internal))
        .map(|(internal, external)| UnmappedAlias {
            alias: internal.clone(),
            target: external.clone(),
        })
        .collect();

    if !offending.is_empty() {
        return Err((offending, legal_fields));
    }

    Ok(fields
        .iter()
        .map(|field| {
            let external_name = apply_prefix(
                output_prefix,
                output_mapper.get(&field.field_name).unwrap_or(&field.field_name),
            );
            OutputDescriptor {
                external_name,
                internal_name: field.field_name.clone(),
                type_tag: field.type_tag.clone(),
                renameable: field.renameable,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_descriptors_apply_prefix_and_mapping() {
        let fields = vec![
            FieldSpec::new("map", TypeTag::named("Map")),
            FieldSpec::new("legend", TypeTag::named("Legend")).with_default(),
        ];
        let mapper = NameMap::new([("mapData".to_string(), "map".to_string())]);
        let descriptors = build_input_descriptors(&fields, Some("in_"), &mapper).unwrap();

        assert_eq!(descriptors[0].external_name, "in_mapData");
        assert_eq!(descriptors[0].internal_name, "map");
        assert!(!descriptors[0].has_default);

        assert_eq!(descriptors[1].external_name, "in_legend");
        assert!(descriptors[1].has_default);
    }

    #[test]
    fn input_mapper_with_unmapped_value_is_rejected() {
        let fields = vec![FieldSpec::new("map", TypeTag::named("Map"))];
        let mapper = NameMap::new([("mapData".to_string(), "does_not_exist".to_string())]);
        let err = build_input_descriptors(&fields, None, &mapper).unwrap_err();
        assert_eq!(err.0.len(), 1);
        assert_eq!(err.0[0].alias, "mapData");
        assert_eq!(err.1, vec!["map".to_string()]);
    }

    #[test]
    fn output_descriptors_apply_prefix_and_mapping() {
        let fields = vec![
            OutputFieldSpec::new("legend", TypeTag::named("Legend")).renameable(),
            OutputFieldSpec::new("map", TypeTag::named("Map")),
        ];
        let mapper = NameMap::new([("legend".to_string(), "legendData".to_string())]);
        let descriptors = build_output_descriptors(&fields, Some("out_"), &mapper).unwrap();

        assert_eq!(descriptors[0].external_name, "out_legendData");
        assert!(descriptors[0].renameable);
        assert_eq!(descriptors[1].external_name, "out_map");
        assert!(!descriptors[1].renameable);
    }

    #[test]
    fn output_mapper_with_unmapped_key_is_rejected() {
        let fields = vec![OutputFieldSpec::new("map", TypeTag::named("Map"))];
        let mapper = NameMap::new([("not_a_field".to_string(), "mapOut".to_string())]);
        let err = build_output_descriptors(&fields, None, &mapper).unwrap_err();
        assert_eq!(err.0.len(), 1);
        assert_eq!(err.0[0].alias, "not_a_field");
        assert_eq!(err.1, vec!["map".to_string()]);
    }

    #[test]
    fn type_tag_any_is_universally_assignable() {
        assert!(TypeTag::Any.is_assignable_from(&TypeTag::named("Map")));
        assert!(TypeTag::named("Map").is_assignable_from(&TypeTag::Any));
        assert!(!TypeTag::named("Map").is_assignable_from(&TypeTag::named("Legend")));
    }
}
