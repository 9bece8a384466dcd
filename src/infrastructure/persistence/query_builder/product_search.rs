//! Compiles a [`ProductFilter`] into the product search statement and, when
//! paging, the matching count statement.

use crate::domain::value_objects::{PriceRange, Sku, Sort, SortDirection, SortField};
use crate::domain::ProductFilter;

use super::render::{Dialect, SqlStatement};
use super::structure::{Join, Limit, Predicate, QueryStructure};

/// Table and column names of the catalog schema
pub mod schema {
    pub const PRODUCTS: &str = "products";
    pub const PRICES: &str = "prices";
    pub const CATEGORIES: &str = "categories";
    pub const PRODUCT_CATEGORY: &str = "product_category";
    pub const ATTRIBUTES: &str = "attributes";
    pub const PRODUCT_ATTRIBUTE: &str = "product_attribute";
}

use schema::*;

/// Statements produced for one search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSearch {
    pub query: SqlStatement,
    /// Present only when the filter is paged
    pub count_query: Option<SqlStatement>,
}

/// Build the unpaged search structure for `filter`.
pub fn search_structure(filter: &ProductFilter) -> QueryStructure {
    let mut query = QueryStructure::new(PRODUCTS);
    query
        .select("products.*")
        .filter(Predicate::raw("products.deleted_at IS NULL"))
        // Pivot joins multiply rows; one row per product
        .group_by("products.id");

    if let Some(sku) = filter.sku() {
        query.merge(sku_filter(sku));
    }

    if let Some(range) = filter.price() {
        query.merge(price_filter(range));
    }

    if !filter.categories().is_empty() {
        query.merge(category_filter(filter.categories()));
    }

    if !filter.attributes().is_empty() {
        query.merge(attribute_filter(
            filter.attributes().iter().map(|(k, v)| (k.as_str(), v.as_str())),
        ));
    }

    if let Some(sort) = filter.sort() {
        apply_sort(&mut query, sort);
    }

    query
}

pub fn compile_product_search(filter: &ProductFilter, dialect: Dialect) -> CompiledSearch {
    let mut query = search_structure(filter);

    match filter.pagination() {
        Some(page) => {
            let count_query = query.render_count(dialect);
            query.limit(Limit::new(page.offset(), page.page_size()));
            CompiledSearch {
                query: query.render(dialect),
                count_query: Some(count_query),
            }
        }
        None => CompiledSearch {
            query: query.render(dialect),
            count_query: None,
        },
    }
}

fn price_join() -> Join {
    Join::new(PRICES, "prices.product_id", "products.id")
}

fn category_joins() -> [Join; 2] {
    [
        Join::new(PRODUCT_CATEGORY, "product_category.product_id", "products.id"),
        Join::new(CATEGORIES, "categories.id", "product_category.category_id"),
    ]
}

fn attribute_pivot_join() -> Join {
    Join::new(PRODUCT_ATTRIBUTE, "product_attribute.product_id", "products.id")
}

fn attribute_join() -> Join {
    Join::new(ATTRIBUTES, "attributes.id", "product_attribute.attribute_id")
}

fn sku_filter(sku: &Sku) -> QueryStructure {
    let mut fragment = QueryStructure::new(PRODUCTS);
    fragment.filter(Predicate::eq("products.sku", sku.as_str()));
    fragment
}

fn price_filter(range: &PriceRange) -> QueryStructure {
    let mut fragment = QueryStructure::new(PRODUCTS);
    fragment.join(price_join());
    if let Some(min) = range.min() {
        fragment.filter(Predicate::gte("prices.cents", min));
    }
    if let Some(max) = range.max() {
        fragment.filter(Predicate::lte("prices.cents", max));
    }
    fragment
}

/// "Linked to all N members" over a pivot: restrict the joined rows to the
/// wanted members, then require `COUNT(DISTINCT counted) = N` per product.
/// `counted` must name the member itself, not the pivot row, so duplicate
/// pivot rows for one member count once.
fn set_containment<I>(joins: I, members: Predicate, counted: &str, required: usize) -> QueryStructure
where
    I: IntoIterator<Item = Join>,
{
    let mut fragment = QueryStructure::new(PRODUCTS);
    for join in joins {
        fragment.join(join);
    }
    fragment
        .filter(members)
        .having(Predicate::count_distinct_eq(counted, required));
    fragment
}

fn category_filter(names: &[String]) -> QueryStructure {
    set_containment(
        category_joins(),
        Predicate::in_list("categories.name", names.iter().map(String::as_str)),
        "categories.name",
        names.len(),
    )
}

fn attribute_filter<'a, I>(pairs: I) -> QueryStructure
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let matches: Vec<Predicate> = pairs
        .into_iter()
        .map(|(name, value)| {
            Predicate::all_of(vec![
                Predicate::eq("attributes.name", name),
                Predicate::eq("product_attribute.value", value),
            ])
        })
        .collect();
    let required = matches.len();

    // Pivot rows matching any requested pair
    let mut matching_rows = QueryStructure::new(PRODUCT_ATTRIBUTE);
    matching_rows
        .select("product_attribute.id")
        .join(attribute_join())
        .filter(Predicate::any_of(matches))
        .group_by("product_attribute.id");

    set_containment(
        [attribute_pivot_join(), attribute_join()],
        Predicate::in_subquery("product_attribute.id", &matching_rows),
        // Keys are unique per filter, so one distinct name is one satisfied pair
        "attributes.name",
        required,
    )
}

/// Joined sort keys are aggregated so grouping stays per product.
fn apply_sort(query: &mut QueryStructure, sort: &Sort) {
    let expr = match sort.field {
        SortField::Name => "products.name",
        SortField::Price => {
            if !query.has_join(PRICES) {
                query.join(price_join());
            }
            "MIN(prices.cents)"
        }
        SortField::Category => {
            for join in category_joins() {
                if !query.has_join(&join.table) {
                    query.join(join);
                }
            }
            "MIN(categories.name)"
        }
    };

    query
        .order_by(expr, sort.direction)
        .order_by("products.id", SortDirection::Asc);
}
