//! The fixture catalogue: named test cases in emission order.

mod failure;
mod success;

use std::collections::HashMap;

use serde::Serialize;

use crate::diagnostics::FixtureError;
use crate::encode::{self, Expected};

/// One conformance scenario: a source snippet and what the analyzer must print for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub name: String,
    pub source: String,
    #[serde(flatten)]
    pub expected: Expected,
}

impl TestCase {
    /// Contents of `<name>.in`.
    pub fn input_text(&self) -> &str {
        encode::normalize_source(&self.source)
    }

    /// Contents of `<name>.out`.
    pub fn output_text(&self) -> String {
        encode::normalize_output(&self.expected.render())
    }
}

/// Insertion-ordered set of test cases. Insertion order is the emission order.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    cases: Vec<TestCase>,
    index: HashMap<String, usize>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a test case. Fails if `name` is already taken; the existing entry is
    /// left untouched.
    pub fn define(
        &mut self,
        name: &str,
        source: &str,
        expected: impl Into<Expected>,
    ) -> Result<(), FixtureError> {
        if self.index.contains_key(name) {
            return Err(FixtureError::duplicate(name));
        }
        self.index.insert(name.to_string(), self.cases.len());
        self.cases.push(TestCase {
            name: name.to_string(),
            source: source.to_string(),
            expected: expected.into(),
        });
        Ok(())
    }

    /// Test cases in insertion order. Borrowing, so it can be restarted at will.
    pub fn enumerate(&self) -> impl Iterator<Item = &TestCase> + '_ {
        self.cases.iter()
    }

    pub fn get(&self, name: &str) -> Option<&TestCase> {
        self.index.get(name).map(|&i| &self.cases[i])
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// The whole catalogue as a pretty-printed JSON array, in emission order.
    pub fn to_json(&self) -> Result<String, FixtureError> {
        serde_json::to_string_pretty(&self.cases).map_err(|source| FixtureError::Serialize { source })
    }
}

/// The built-in conformance catalogue: passing programs first, then failing ones.
pub fn standard() -> Result<Catalogue, FixtureError> {
    let mut catalogue = Catalogue::new();
    success::register(&mut catalogue)?;
    failure::register(&mut catalogue)?;
    Ok(catalogue)
}
