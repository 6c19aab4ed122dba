//! Brick render contract.
//!
//! A brick is anything that can be rendered to markup: it names itself,
//! declares falsifiable assertions about its state, carries a time budget,
//! and produces deterministic HTML and CSS. Every [`Widget`](crate::Widget)
//! is a brick.

use std::time::{Duration, Instant};
use thiserror::Error;

/// Assertion about a brick's state, checked before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrickAssertion {
    /// Text content must be non-empty
    TextVisible,
    /// Element matching the selector must be present in the output
    ElementPresent(String),
    /// Maximum render latency in milliseconds
    MaxLatencyMs(u32),
}

impl BrickAssertion {
    /// Create an element presence assertion.
    #[must_use]
    pub fn element_present(selector: impl Into<String>) -> Self {
        Self::ElementPresent(selector.into())
    }
}

/// Time budget for rendering a brick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickBudget {
    /// Total budget in milliseconds
    pub total_ms: u32,
}

impl BrickBudget {
    /// Budget with the given total.
    #[must_use]
    pub const fn uniform(total_ms: u32) -> Self {
        Self { total_ms }
    }

    /// Convert to Duration.
    #[must_use]
    pub const fn as_duration(&self) -> Duration {
        Duration::from_millis(self.total_ms as u64)
    }
}

impl Default for BrickBudget {
    fn default() -> Self {
        // One frame at 60fps.
        Self::uniform(16)
    }
}

/// Result of verifying brick assertions.
#[derive(Debug, Clone, Default)]
pub struct BrickVerification {
    /// Assertions that passed
    pub passed: Vec<BrickAssertion>,
    /// Assertions that failed, with reasons
    pub failed: Vec<(BrickAssertion, String)>,
}

impl BrickVerification {
    /// Every assertion passes.
    #[must_use]
    pub fn all_passed(assertions: &[BrickAssertion]) -> Self {
        Self {
            passed: assertions.to_vec(),
            failed: Vec::new(),
        }
    }

    /// Check if all assertions passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Render contract shared by all widgets.
pub trait Brick: Send + Sync {
    /// Get the brick's type name.
    fn brick_name(&self) -> &'static str;

    /// Get all assertions for this brick.
    fn assertions(&self) -> &[BrickAssertion];

    /// Get the render budget.
    fn budget(&self) -> BrickBudget {
        BrickBudget::default()
    }

    /// Verify assertions against the current state.
    fn verify(&self) -> BrickVerification {
        BrickVerification::all_passed(self.assertions())
    }

    /// Generate HTML for this brick. Same state gives the same output.
    fn to_html(&self) -> String;

    /// Generate the CSS rules this brick needs, scoped by class.
    fn to_css(&self) -> String;

    /// Check if this brick can be rendered.
    fn can_render(&self) -> bool {
        self.verify().is_valid()
    }
}

/// Errors from rendering a brick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrickError {
    /// Assertion failed during verification
    #[error("{brick}: assertion {assertion:?} failed: {reason}")]
    AssertionFailed {
        /// Brick that failed
        brick: &'static str,
        /// The assertion that failed
        assertion: BrickAssertion,
        /// Reason for failure
        reason: String,
    },
}

/// Verify a brick, then render its HTML.
///
/// Exceeding the budget is logged, not treated as an error.
pub fn render_html(brick: &dyn Brick) -> Result<String, BrickError> {
    let started = Instant::now();

    let verification = brick.verify();
    if let Some((assertion, reason)) = verification.failed.into_iter().next() {
        return Err(BrickError::AssertionFailed {
            brick: brick.brick_name(),
            assertion,
            reason,
        });
    }

    let html = brick.to_html();

    let elapsed = started.elapsed();
    let budget = brick.budget();
    if elapsed > budget.as_duration() {
        tracing::warn!(
            brick = brick.brick_name(),
            elapsed_us = elapsed.as_micros() as u64,
            budget_ms = budget.total_ms,
            "render exceeded budget"
        );
    } else {
        tracing::trace!(
            brick = brick.brick_name(),
            elapsed_us = elapsed.as_micros() as u64,
            "rendered"
        );
    }

    Ok(html)
}
