use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Database {
    /// Per-story classification results
    Processor,
    /// Stories forwarded to email alert subscribers
    Alerts,
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Database::Processor => write!(f, "processor"),
            Database::Alerts => write!(f, "alerts"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamValue {
    Int(i64),
    Bool(bool),
    Text(String),
    Date(NaiveDate),
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

impl From<NaiveDate> for ParamValue {
    fn from(v: NaiveDate) -> Self {
        ParamValue::Date(v)
    }
}

/// Cache identity of a query: which metric, on which database, with which parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub database: Database,
    pub metric: &'static str,
    pub params: Vec<(&'static str, ParamValue)>,
}

impl QueryKey {
    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }
}

/// A ready-to-run statement. `sql` only ever references values through `$n` placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    pub key: QueryKey,
    pub sql: String,
    pub binds: Vec<ParamValue>,
}

impl QuerySpec {
    pub fn builder(database: Database, metric: &'static str) -> QuerySpecBuilder {
        QuerySpecBuilder {
            database,
            metric,
            params: Vec::new(),
            binds: Vec::new(),
        }
    }
}

pub struct QuerySpecBuilder {
    database: Database,
    metric: &'static str,
    params: Vec<(&'static str, ParamValue)>,
    binds: Vec<ParamValue>,
}

impl QuerySpecBuilder {
    /// Binds a value and returns its placeholder. The value also joins the cache key.
    pub fn bind(&mut self, name: &'static str, value: impl Into<ParamValue>) -> String {
        let value = value.into();
        self.params.push((name, value.clone()));
        self.binds.push(value);
        format!("${}", self.binds.len())
    }

    /// Records a parameter that shapes the SQL text without being bound.
    pub fn tag(&mut self, name: &'static str, value: impl Into<ParamValue>) {
        self.params.push((name, value.into()));
    }

    /// Wraps `inner` so every row comes back as one JSON object.
    pub fn finish(self, inner: &str) -> QuerySpec {
        QuerySpec {
            key: QueryKey {
                database: self.database,
                metric: self.metric,
                params: self.params,
            },
            sql: format!("SELECT row_to_json(q) FROM ({}) q", inner.trim()),
            binds: self.binds,
        }
    }
}
