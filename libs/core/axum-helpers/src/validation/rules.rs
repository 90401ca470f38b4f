use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Where a validated field lives in the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

/// One failed constraint on one request field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldError {
    /// The offending value, when the field was present at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub msg: String,
    pub path: String,
    pub location: Location,
}

/// Per-request collector of validation failures.
///
/// Threaded explicitly through rule evaluation so rule sets can be tested
/// without a live request. Errors keep rule/check declaration order.
#[derive(Debug, Default)]
pub struct ErrorAccumulator {
    errors: Vec<FieldError>,
}

impl ErrorAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

/// Snapshot of the request parts rules evaluate against.
pub struct RequestInput<'a> {
    /// Raw path parameters as matched by the router.
    pub params: &'a HashMap<String, String>,
    /// Parsed JSON body; `Value::Null` when the request carried none.
    pub body: &'a Value,
}

impl RequestInput<'_> {
    fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }
}

/// A single constraint a rule can apply to its field.
enum Check {
    /// Path segment must parse as an integer id.
    Int,
    /// Field must be a non-empty JSON string.
    NonEmptyString,
    /// Field must be present: missing, null, and `""` fail.
    NotEmpty,
    /// Field must be a JSON number.
    Numeric,
    /// Field must be a JSON boolean.
    Boolean,
    /// Custom predicate; a missing field evaluates as `Value::Null`.
    Custom(fn(&Value) -> bool),
}

impl Check {
    fn passes_param(&self, raw: Option<&str>) -> bool {
        match self {
            Check::Int => raw.is_some_and(|s| s.parse::<i32>().is_ok()),
            // Remaining checks are body-only; a param rule never declares them.
            _ => true,
        }
    }

    fn passes_body(&self, value: Option<&Value>) -> bool {
        match self {
            // Int is param-only; a body rule never declares it.
            Check::Int => true,
            Check::NonEmptyString => {
                value.is_some_and(|v| matches!(v, Value::String(s) if !s.is_empty()))
            }
            Check::NotEmpty => match value {
                None | Some(Value::Null) => false,
                Some(Value::String(s)) => !s.is_empty(),
                Some(_) => true,
            },
            Check::Numeric => value.is_some_and(Value::is_number),
            Check::Boolean => value.is_some_and(Value::is_boolean),
            Check::Custom(predicate) => predicate(value.unwrap_or(&Value::Null)),
        }
    }
}

/// An ordered chain of checks over one request field.
///
/// Built with [`param`] or [`body`] plus chained check methods; each failed
/// check appends exactly one [`FieldError`], so one field can surface
/// several errors from a single rule.
pub struct Rule {
    location: Location,
    path: String,
    checks: Vec<(Check, String)>,
}

/// Start a rule over a path parameter.
pub fn param(path: impl Into<String>) -> Rule {
    Rule {
        location: Location::Params,
        path: path.into(),
        checks: Vec::new(),
    }
}

/// Start a rule over a JSON body field.
pub fn body(path: impl Into<String>) -> Rule {
    Rule {
        location: Location::Body,
        path: path.into(),
        checks: Vec::new(),
    }
}

impl Rule {
    fn check(mut self, check: Check, msg: impl Into<String>) -> Self {
        self.checks.push((check, msg.into()));
        self
    }

    /// The value must parse as an integer id.
    pub fn int(self, msg: impl Into<String>) -> Self {
        self.check(Check::Int, msg)
    }

    /// The value must be a non-empty JSON string.
    pub fn non_empty_string(self, msg: impl Into<String>) -> Self {
        self.check(Check::NonEmptyString, msg)
    }

    /// The value must be present (not missing, null, or `""`).
    pub fn not_empty(self, msg: impl Into<String>) -> Self {
        self.check(Check::NotEmpty, msg)
    }

    /// The value must be a JSON number.
    pub fn numeric(self, msg: impl Into<String>) -> Self {
        self.check(Check::Numeric, msg)
    }

    /// The value must be a JSON boolean.
    pub fn boolean(self, msg: impl Into<String>) -> Self {
        self.check(Check::Boolean, msg)
    }

    /// The value must satisfy a custom predicate. Missing fields are
    /// presented to the predicate as `Value::Null`.
    pub fn custom(self, predicate: fn(&Value) -> bool, msg: impl Into<String>) -> Self {
        self.check(Check::Custom(predicate), msg)
    }

    /// Run every check in declaration order, appending one error per failure.
    pub fn evaluate(&self, input: &RequestInput<'_>, acc: &mut ErrorAccumulator) {
        for (check, msg) in &self.checks {
            let (failed, value) = match self.location {
                Location::Params => {
                    let raw = input.param(&self.path);
                    (
                        !check.passes_param(raw),
                        raw.map(|s| Value::String(s.to_string())),
                    )
                }
                Location::Body => {
                    let field = input.field(&self.path);
                    (!check.passes_body(field), field.cloned())
                }
            };

            if failed {
                acc.push(FieldError {
                    value,
                    msg: msg.clone(),
                    path: self.path.clone(),
                    location: self.location,
                });
            }
        }
    }
}

/// The ordered validation rules declared by one route.
#[derive(Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Evaluate every rule in declaration order against the input.
    pub fn evaluate(&self, input: &RequestInput<'_>, acc: &mut ErrorAccumulator) {
        for rule in &self.rules {
            rule.evaluate(input, acc);
        }
    }
}
