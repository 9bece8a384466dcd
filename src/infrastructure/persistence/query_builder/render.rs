//! Text rendering of a [`QueryStructure`]
//!
//! Clause order is fixed: SELECT/FROM, JOIN, WHERE, GROUP BY, HAVING,
//! ORDER BY, LIMIT. Bound values are collected while the clauses are
//! written, so the n-th value always belongs to the n-th placeholder.

use std::fmt::Write as _;

use super::structure::{BindValue, Predicate, QueryStructure};

/// Placeholder and LIMIT syntax of the rendered statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// `?` placeholders, `LIMIT offset, row_count`
    #[default]
    Generic,
    /// `$1..$n` placeholders, `LIMIT row_count OFFSET offset`
    Postgres,
}

/// Rendered statement text together with its bound values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

struct Writer {
    dialect: Dialect,
    sql: String,
    binds: Vec<BindValue>,
}

impl Writer {
    fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            sql: String::new(),
            binds: Vec::new(),
        }
    }

    fn push(&mut self, text: &str) {
        self.sql.push_str(text);
    }

    fn placeholder(&mut self) {
        match self.dialect {
            Dialect::Generic => self.sql.push('?'),
            Dialect::Postgres => {
                // Numbered by position: the value for `$n` is binds[n - 1]
                let n = self.binds.len() + 1;
                let _ = write!(self.sql, "${}", n);
            }
        }
    }

    fn bind(&mut self, value: BindValue) {
        self.placeholder();
        self.binds.push(value);
    }

    fn predicate(&mut self, predicate: &Predicate) {
        let mut values = predicate.binds().iter();
        for ch in predicate.sql().chars() {
            if ch == '?' {
                // Predicate::new guarantees one value per placeholder
                if let Some(value) = values.next() {
                    self.bind(value.clone());
                }
            } else {
                self.sql.push(ch);
            }
        }
    }

    fn predicates(&mut self, keyword: &str, predicates: &[Predicate]) {
        if predicates.is_empty() {
            return;
        }
        self.push(keyword);
        for (i, predicate) in predicates.iter().enumerate() {
            if i > 0 {
                self.push(" AND ");
            }
            self.predicate(predicate);
        }
    }

    fn structure(&mut self, query: &QueryStructure, with_limit: bool) {
        self.push("SELECT ");
        if query.selects().is_empty() {
            self.push("*");
        } else {
            self.push(&query.selects().join(", "));
        }
        self.push(" FROM ");
        self.push(query.table());

        for join in query.joins().iter() {
            let _ = write!(
                self.sql,
                " JOIN {} ON {} = {}",
                join.table, join.left, join.right
            );
        }

        self.predicates(" WHERE ", query.predicates());

        if !query.groups().is_empty() {
            self.push(" GROUP BY ");
            self.push(&query.groups().join(", "));
        }

        self.predicates(" HAVING ", query.having_predicates());

        if !query.orderings().is_empty() {
            self.push(" ORDER BY ");
            let orderings: Vec<String> = query
                .orderings()
                .iter()
                .map(|o| format!("{} {}", o.expr, o.direction.as_sql()))
                .collect();
            self.push(&orderings.join(", "));
        }

        if let Some(limit) = query.limit_clause().filter(|_| with_limit) {
            self.push(" LIMIT ");
            match self.dialect {
                Dialect::Generic => {
                    self.bind(BindValue::Int(limit.offset));
                    self.push(", ");
                    self.bind(BindValue::Int(limit.row_count));
                }
                Dialect::Postgres => {
                    self.bind(BindValue::Int(limit.row_count));
                    self.push(" OFFSET ");
                    self.bind(BindValue::Int(limit.offset));
                }
            }
        }
    }

    fn finish(self) -> SqlStatement {
        SqlStatement {
            sql: self.sql,
            binds: self.binds,
        }
    }
}

pub(super) fn render(query: &QueryStructure, dialect: Dialect) -> SqlStatement {
    let mut writer = Writer::new(dialect);
    writer.structure(query, true);
    writer.finish()
}

pub(super) fn render_count(query: &QueryStructure, dialect: Dialect) -> SqlStatement {
    let mut writer = Writer::new(dialect);
    writer.push("SELECT COUNT(*) AS count FROM (");
    writer.structure(query, false);
    writer.push(") AS matched");
    writer.finish()
}
