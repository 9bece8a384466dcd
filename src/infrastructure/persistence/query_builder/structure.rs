use thiserror::Error;

use crate::domain::value_objects::SortDirection;

use super::render::{self, Dialect, SqlStatement};

/// A value bound to one `?` placeholder
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BindValue {
    Text(String),
    Int(i64),
}

impl From<&str> for BindValue {
    fn from(value: &str) -> Self {
        BindValue::Text(value.to_string())
    }
}

impl From<String> for BindValue {
    fn from(value: String) -> Self {
        BindValue::Text(value)
    }
}

impl From<i64> for BindValue {
    fn from(value: i64) -> Self {
        BindValue::Int(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{sql}` has {placeholders} placeholders but {binds} bound values")]
pub struct PredicateError {
    pub sql: String,
    pub placeholders: usize,
    pub binds: usize,
}

/// SQL condition with `?` placeholders and the values bound to them, in
/// placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    sql: String,
    binds: Vec<BindValue>,
}

impl Predicate {
    pub fn new(sql: impl Into<String>, binds: Vec<BindValue>) -> Result<Self, PredicateError> {
        let sql = sql.into();
        let placeholders = count_placeholders(&sql);
        if placeholders != binds.len() {
            return Err(PredicateError {
                sql,
                placeholders,
                binds: binds.len(),
            });
        }
        Ok(Self { sql, binds })
    }

    /// Condition without bound values. `sql` must not contain `?`.
    pub fn raw(sql: impl Into<String>) -> Self {
        let sql = sql.into();
        debug_assert_eq!(count_placeholders(&sql), 0, "raw predicate with placeholder");
        Self {
            sql,
            binds: Vec::new(),
        }
    }

    fn compare(expr: &str, op: &str, value: BindValue) -> Self {
        Self {
            sql: format!("{} {} ?", expr, op),
            binds: vec![value],
        }
    }

    pub fn eq(expr: &str, value: impl Into<BindValue>) -> Self {
        Self::compare(expr, "=", value.into())
    }

    pub fn gte(expr: &str, value: impl Into<BindValue>) -> Self {
        Self::compare(expr, ">=", value.into())
    }

    pub fn lte(expr: &str, value: impl Into<BindValue>) -> Self {
        Self::compare(expr, "<=", value.into())
    }

    /// `expr IN (?, ...)`. An empty list matches nothing.
    pub fn in_list<I, V>(expr: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<BindValue>,
    {
        let binds: Vec<BindValue> = values.into_iter().map(Into::into).collect();
        if binds.is_empty() {
            return Self::raw("1 = 0");
        }
        let placeholders = vec!["?"; binds.len()].join(", ");
        Self {
            sql: format!("{} IN ({})", expr, placeholders),
            binds,
        }
    }

    /// `expr IN (<subquery>)`; the subquery's binds take the position of
    /// its placeholders.
    pub fn in_subquery(expr: &str, subquery: &QueryStructure) -> Self {
        let rendered = subquery.render(Dialect::Generic);
        Self {
            sql: format!("{} IN ({})", expr, rendered.sql),
            binds: rendered.binds,
        }
    }

    /// `COUNT(DISTINCT expr) = ?`
    pub fn count_distinct_eq(expr: &str, count: usize) -> Self {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        Self::compare(&format!("COUNT(DISTINCT {})", expr), "=", BindValue::Int(count))
    }

    /// Parenthesized conjunction
    pub fn all_of(predicates: Vec<Predicate>) -> Self {
        Self::combine(predicates, " AND ")
    }

    /// Parenthesized disjunction
    pub fn any_of(predicates: Vec<Predicate>) -> Self {
        Self::combine(predicates, " OR ")
    }

    fn combine(predicates: Vec<Predicate>, separator: &str) -> Self {
        let mut parts = Vec::with_capacity(predicates.len());
        let mut binds = Vec::new();
        for predicate in predicates {
            parts.push(predicate.sql);
            binds.extend(predicate.binds);
        }
        Self {
            sql: format!("({})", parts.join(separator)),
            binds,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn binds(&self) -> &[BindValue] {
        &self.binds
    }
}

pub(crate) fn count_placeholders(sql: &str) -> usize {
    sql.matches('?').count()
}

/// Equality join `JOIN table ON left = right`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    pub table: String,
    pub left: String,
    pub right: String,
}

impl Join {
    pub fn new(table: impl Into<String>, left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            left: left.into(),
            right: right.into(),
        }
    }
}

/// Joins keyed by target table, in insertion order. The first join for a
/// table wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinSet {
    joins: Vec<Join>,
}

impl JoinSet {
    /// Returns `false` when the table is already joined.
    pub fn insert(&mut self, join: Join) -> bool {
        if self.contains(&join.table) {
            return false;
        }
        self.joins.push(join);
        true
    }

    pub fn contains(&self, table: &str) -> bool {
        self.joins.iter().any(|j| j.table == table)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Join> {
        self.joins.iter()
    }

    pub fn len(&self) -> usize {
        self.joins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joins.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub expr: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub offset: i64,
    pub row_count: i64,
}

impl Limit {
    pub fn new(offset: i64, row_count: i64) -> Self {
        Self { offset, row_count }
    }
}

/// Structural form of a SELECT statement.
///
/// Filters build small fragments that are merged into one base structure,
/// which is rendered to text only at the end (see [`QueryStructure::render`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryStructure {
    table: String,
    selects: Vec<String>,
    joins: JoinSet,
    predicates: Vec<Predicate>,
    groups: Vec<String>,
    having: Vec<Predicate>,
    order_by: Vec<OrderBy>,
    limit: Option<Limit>,
}

impl QueryStructure {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            selects: Vec::new(),
            joins: JoinSet::default(),
            predicates: Vec::new(),
            groups: Vec::new(),
            having: Vec::new(),
            order_by: Vec::new(),
            limit: None,
        }
    }

    pub fn select(&mut self, expr: impl Into<String>) -> &mut Self {
        let expr = expr.into();
        if !self.selects.contains(&expr) {
            self.selects.push(expr);
        }
        self
    }

    pub fn join(&mut self, join: Join) -> &mut Self {
        self.joins.insert(join);
        self
    }

    pub fn filter(&mut self, predicate: Predicate) -> &mut Self {
        self.predicates.push(predicate);
        self
    }

    pub fn group_by(&mut self, expr: impl Into<String>) -> &mut Self {
        let expr = expr.into();
        if !self.groups.contains(&expr) {
            self.groups.push(expr);
        }
        self
    }

    pub fn having(&mut self, predicate: Predicate) -> &mut Self {
        self.having.push(predicate);
        self
    }

    pub fn order_by(&mut self, expr: impl Into<String>, direction: SortDirection) -> &mut Self {
        self.order_by.push(OrderBy {
            expr: expr.into(),
            direction,
        });
        self
    }

    pub fn limit(&mut self, limit: Limit) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    /// Append another structure's clauses to this one. Joins and groups
    /// already present are skipped; a limit on `other` replaces ours.
    pub fn merge(&mut self, other: QueryStructure) -> &mut Self {
        for expr in other.selects {
            self.select(expr);
        }
        for join in other.joins.joins {
            self.joins.insert(join);
        }
        self.predicates.extend(other.predicates);
        for expr in other.groups {
            self.group_by(expr);
        }
        self.having.extend(other.having);
        self.order_by.extend(other.order_by);
        if other.limit.is_some() {
            self.limit = other.limit;
        }
        self
    }

    pub fn has_join(&self, table: &str) -> bool {
        self.joins.contains(table)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn selects(&self) -> &[String] {
        &self.selects
    }

    pub fn joins(&self) -> &JoinSet {
        &self.joins
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn having_predicates(&self) -> &[Predicate] {
        &self.having
    }

    pub fn orderings(&self) -> &[OrderBy] {
        &self.order_by
    }

    pub fn limit_clause(&self) -> Option<Limit> {
        self.limit
    }

    pub fn render(&self, dialect: Dialect) -> SqlStatement {
        render::render(self, dialect)
    }

    /// `SELECT COUNT(*)` over this structure with any limit removed
    pub fn render_count(&self, dialect: Dialect) -> SqlStatement {
        render::render_count(self, dialect)
    }
}
