//! Fixture loading from YAML files

use serde::Deserialize;
use std::path::Path;

/// A single test case from a fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub id: String,
    #[serde(default)]
    pub desc: String,
    pub json: String,
    pub expect: Expectation,
    /// Expected numeric payload, only meaningful with `expect: number`
    #[serde(default)]
    pub number: Option<f64>,
}

/// Expected outcome of a parse: the value kind on success, or the
/// error code on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Expectation {
    Null,
    True,
    False,
    Number,
    ExpectValue,
    InvalidValue,
    RootNotSingular,
    NumberTooBig,
}

impl Expectation {
    /// Whether this outcome is a successful parse.
    pub fn is_ok(self) -> bool {
        matches!(
            self,
            Expectation::Null | Expectation::True | Expectation::False | Expectation::Number
        )
    }
}

/// Load all test cases from a YAML fixture file
pub fn load_fixtures(path: &Path) -> Vec<TestCase> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read fixture file {:?}: {}", path, e));
    serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("malformed fixture file {:?}: {}", path, e))
}

/// Load fixtures from the standard fixtures directory
pub fn load_fixtures_by_name(name: &str) -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.yaml", name));
    load_fixtures(&path)
}
