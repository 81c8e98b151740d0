//! Construction of dbt argument vectors.
//!
//! A [`CommandBuilder`] turns one tool invocation into a [`CommandSpec`]:
//! the ordered argument vector plus the execution policy (timeout,
//! selector-narrowing hint). Building is pure; nothing here touches the
//! process table.

use std::time::Duration;

/// Commands whose output is verbose enough to warrant `--quiet`.
const QUIET_COMMANDS: &[&str] = &[
    "build", "compile", "docs", "parse", "run", "test", "list",
];

/// A fully constructed dbt invocation.
///
/// Immutable once built; consumed exactly once by the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Ordered arguments passed to the dbt executable.
    pub args: Vec<String>,
    /// Wall-clock bound for the invocation, if any.
    pub timeout: Option<Duration>,
    /// Whether the operation supports narrowing with a selector. Used to
    /// tailor the timeout message.
    pub selectable: bool,
}

/// Builds the argument vector for a single dbt invocation.
#[derive(Debug, Default)]
pub struct CommandBuilder {
    base: Vec<String>,
    selector: Option<String>,
    resource_types: Option<Vec<String>>,
    inline_sql: Option<String>,
    row_limit: Option<i64>,
    output_json: bool,
    timeout: Option<Duration>,
    selectable: bool,
}

impl CommandBuilder {
    /// Start from the operation's base arguments, e.g. `["run"]` or
    /// `["show", "--favor-state"]`.
    pub fn new<I, S>(base: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base: base.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// dbt node selector. Split on whitespace and passed via `--select`.
    ///
    /// An empty or all-whitespace selector is equivalent to absence for
    /// every operation: no `--select` is emitted.
    pub fn selector(mut self, selector: Option<&str>) -> Self {
        self.selector = selector
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string);
        self
    }

    /// Resource-type filter, passed via `--resource-type`.
    pub fn resource_types(mut self, types: Option<&[String]>) -> Self {
        self.resource_types = types.filter(|t| !t.is_empty()).map(<[_]>::to_vec);
        self
    }

    /// Raw SQL passed as a single token via `--inline`.
    pub fn inline_sql(mut self, sql: Option<&str>) -> Self {
        self.inline_sql = sql.map(str::to_string);
        self
    }

    /// Row limit, appended verbatim via `--limit`. Reconciling an explicit
    /// limit against a LIMIT clause in the inline SQL is the show tool's
    /// concern; the builder appends whatever it is handed.
    pub fn row_limit(mut self, limit: Option<i64>) -> Self {
        self.row_limit = limit;
        self
    }

    /// Request JSON output (`--output json`, appended last).
    pub fn output_json(mut self) -> Self {
        self.output_json = true;
        self
    }

    /// Bound the invocation's wall-clock time.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Mark the operation as narrowable with a selector.
    pub fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    /// Assemble the final argument vector.
    pub fn build(self) -> CommandSpec {
        let mut args = self.base;

        // Insert --quiet right after the command word to reduce context
        // window usage.
        if let Some(word) = args.first()
            && QUIET_COMMANDS.contains(&word.as_str())
        {
            args.insert(1, "--quiet".to_string());
        }

        if let Some(selector) = &self.selector {
            args.push("--select".to_string());
            args.extend(selector.split_whitespace().map(str::to_string));
        }

        if let Some(types) = &self.resource_types {
            args.push("--resource-type".to_string());
            args.extend(types.iter().cloned());
        }

        if let Some(sql) = &self.inline_sql {
            args.push("--inline".to_string());
            args.push(sql.clone());
        }

        if let Some(limit) = self.row_limit {
            args.push("--limit".to_string());
            args.push(limit.to_string());
        }

        if self.output_json {
            args.push("--output".to_string());
            args.push("json".to_string());
        }

        CommandSpec {
            args,
            timeout: self.timeout,
            selectable: self.selectable,
        }
    }
}
