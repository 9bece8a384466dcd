//! Typed SQL builder for the product search.
//!
//! [`QueryStructure`] holds the clauses of a statement; rendering to text
//! happens once, in [`render`], for a chosen [`Dialect`].

mod product_search;
mod render;
mod structure;

pub use product_search::{compile_product_search, schema, search_structure, CompiledSearch};
pub use render::{Dialect, SqlStatement};
pub use structure::{
    BindValue, Join, JoinSet, Limit, OrderBy, Predicate, PredicateError, QueryStructure,
};
