//! Declarative request validation.
//!
//! Routes declare an ordered [`RuleSet`] over path parameters and JSON body
//! fields. The set is attached to the route as a middleware layer: rules run
//! before the handler, append their failures to an [`ErrorAccumulator`], and
//! the aggregation step converts a non-empty accumulator into a single
//! 400 response carrying every failure in declaration order. Handlers behind
//! the layer never observe invalid input.
//!
//! ```ignore
//! use std::sync::LazyLock;
//! use axum_helpers::validation::{RuleSet, body, param};
//!
//! static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
//!     RuleSet::new()
//!         .rule(param("id").int("ID not valid"))
//!         .rule(body("name").non_empty_string("Name not empty"))
//! });
//!
//! // .put(handler.layer(axum::middleware::from_fn(|req, next| RULES.enforce(req, next))))
//! ```

pub mod middleware;
pub mod rules;

pub use rules::{ErrorAccumulator, FieldError, Location, RequestInput, Rule, RuleSet, body, param};
