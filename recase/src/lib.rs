//! Pure-function utilities for converting free-form strings between
//! naming conventions: camelCase, kebab-case and dot.case.
//!
//! Every conversion is a deterministic function of its input with no
//! shared state, so the functions are safe to call from anywhere:
//!
//! ```
//! assert_eq!(recase::camel_case("first name"), "firstName");
//! assert_eq!(recase::kebab_case("userID"), "user-id");
//! assert_eq!(recase::dot_case("Example   Test!"), "example.test");
//! ```
//!
//! Inputs of unknown type (e.g. values pulled out of JSON) go through
//! [`transform_value`], which converts strings and maps everything else
//! to the empty string.

#[macro_use]
extern crate lazy_static;

mod casing;
mod tokenize;

pub use crate::casing::{camel_case, dot_case, kebab_case, simple_camel_case};

use serde_json::Value;

/// The naming convention to produce.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Transform {
    /// camelCase over any non-alphanumeric boundary
    Camel,
    /// camelCase over whitespace/hyphen boundaries only
    SimpleCamel,
    /// kebab-case by boundary substitution
    Kebab,
    /// dot.case over any non-alphanumeric boundary
    Dot,
}

impl Transform {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "camel" | "camelcase" | "camelCase" => Some(Transform::Camel),
            "simple-camel" | "simplecamel" => Some(Transform::SimpleCamel),
            "kebab" | "kebabcase" | "kebab-case" => Some(Transform::Kebab),
            "dot" | "dotcase" | "dot.case" => Some(Transform::Dot),
            _ => None,
        }
    }

    pub fn apply(&self, input: &str) -> String {
        match self {
            Transform::Camel => camel_case(input),
            Transform::SimpleCamel => simple_camel_case(input),
            Transform::Kebab => kebab_case(input),
            Transform::Dot => dot_case(input),
        }
    }
}

/// Apply a transform to a dynamically typed value.
///
/// Only JSON strings are converted; every other value (null, numbers,
/// booleans, arrays, objects) yields the empty string. Never panics.
pub fn transform_value(value: &Value, transform: Transform) -> String {
    match value.as_str() {
        Some(s) => transform.apply(s),
        None => String::new(),
    }
}
