//! Cross-module acceptance and property tests.

mod flatten_properties;
