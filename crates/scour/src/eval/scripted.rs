//! Scripted evaluation service for testing.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::{Result, ScourError};
use crate::table::Table;

use super::service::{EvaluationService, Metrics};

/// Evaluation service returning pre-scripted metrics in call order.
///
/// Each `evaluate` call pops the next scripted response; running out of
/// script is an error, as is hitting a scripted failure slot.
pub struct ScriptedEvaluator {
    script: RefCell<VecDeque<Option<Metrics>>>,
}

impl ScriptedEvaluator {
    /// Script a sequence of successful responses.
    pub fn new(responses: Vec<Metrics>) -> Self {
        Self {
            script: RefCell::new(responses.into_iter().map(Some).collect()),
        }
    }

    /// Script a mixed sequence; `None` slots fail when reached.
    pub fn with_failures(responses: Vec<Option<Metrics>>) -> Self {
        Self {
            script: RefCell::new(responses.into_iter().collect()),
        }
    }

    /// Convenience: metrics where only `rmse` matters.
    pub fn metrics(rmse: f64) -> Metrics {
        Metrics {
            rmse,
            mae: rmse / 2.0,
            r2: 1.0 - rmse,
            runtime_seconds: 0.0,
        }
    }
}

impl EvaluationService for ScriptedEvaluator {
    fn evaluate(&self, _table: &Table, _target: &str) -> Result<Metrics> {
        match self.script.borrow_mut().pop_front() {
            Some(Some(metrics)) => Ok(metrics),
            Some(None) => Err(ScourError::Model("scripted evaluation failure".to_string())),
            None => Err(ScourError::Model("evaluation script exhausted".to_string())),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
