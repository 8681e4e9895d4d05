use async_trait::async_trait;
use parking_lot::Mutex;

use crate::engine::errors::StoreError;
use crate::engine::store::{ParamValue, QueryKey, QuerySpec, Record, RowSource};

struct Rule {
    metric: &'static str,
    param: Option<(&'static str, ParamValue)>,
    outcome: Outcome,
}

enum Outcome {
    Rows(Vec<Record>),
    FailOnce(Option<String>),
}

impl Rule {
    fn matches(&self, key: &QueryKey) -> bool {
        if key.metric != self.metric {
            return false;
        }
        match &self.param {
            Some((name, value)) => key.param(name) == Some(value),
            None => true,
        }
    }
}

/// In-memory `RowSource` with canned rows per metric. The first matching rule wins;
/// queries nothing matches return no rows. Every fetched key is recorded.
pub struct FakeRowSource {
    rules: Mutex<Vec<Rule>>,
    calls: Mutex<Vec<QueryKey>>,
}

impl FakeRowSource {
    pub fn new() -> Self {
        Self {
            rules: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(self, metric: &'static str, rows: Vec<Record>) -> Self {
        self.push(metric, None, Outcome::Rows(rows))
    }

    /// Rows for `metric` only when the key carries `name == value`.
    pub fn respond_when(
        self,
        metric: &'static str,
        name: &'static str,
        value: impl Into<ParamValue>,
        rows: Vec<Record>,
    ) -> Self {
        self.push(metric, Some((name, value.into())), Outcome::Rows(rows))
    }

    /// The next fetch of `metric` fails with `StoreError::Unavailable(message)`.
    pub fn fail_once(self, metric: &'static str, message: &str) -> Self {
        self.push(metric, None, Outcome::FailOnce(Some(message.to_string())))
    }

    pub fn fail_when(
        self,
        metric: &'static str,
        name: &'static str,
        value: impl Into<ParamValue>,
        message: &str,
    ) -> Self {
        self.push(
            metric,
            Some((name, value.into())),
            Outcome::FailOnce(Some(message.to_string())),
        )
    }

    pub fn calls(&self) -> Vec<QueryKey> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn push(
        self,
        metric: &'static str,
        param: Option<(&'static str, ParamValue)>,
        outcome: Outcome,
    ) -> Self {
        self.rules.lock().push(Rule {
            metric,
            param,
            outcome,
        });
        self
    }
}

#[async_trait]
impl RowSource for FakeRowSource {
    async fn fetch(&self, query: &QuerySpec) -> Result<Vec<Record>, StoreError> {
        self.calls.lock().push(query.key.clone());

        let mut rules = self.rules.lock();
        for rule in rules.iter_mut() {
            if !rule.matches(&query.key) {
                continue;
            }
            match &mut rule.outcome {
                Outcome::Rows(rows) => return Ok(rows.clone()),
                Outcome::FailOnce(message) => {
                    if let Some(message) = message.take() {
                        return Err(StoreError::Unavailable(message));
                    }
                }
            }
        }
        Ok(Vec::new())
    }
}
