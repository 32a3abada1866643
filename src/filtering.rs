//! Filter specifications for list operations.
//!
//! ReportPortal list endpoints accept filtering, paging, and sorting as
//! query parameters. A [`FilterOption`] collects criteria and renders them
//! into key/value pairs; each criterion contributes exactly one pair:
//!
//! - a [`Filter`] renders as `filter.{operation}.{field}={values}` with
//!   multiple values joined by commas (e.g. `filter.cnt.name=smoke`),
//! - [`Paging`] renders as `page.page={page}` and `page.size={size}`
//!   (pages are 1-indexed),
//! - [`Sorting`] renders as `page.sort={field},{asc|desc}`.
//!
//! The launch operations treat a `FilterOption` as opaque: whatever pairs
//! [`FilterOption::to_query_pairs`] yields are appended to the request.
//!
//! # Example
//!
//! ```
//! use reportportal_client::{Filter, FilterOperation, FilterOption, Paging};
//!
//! let filter = FilterOption::new()
//!     .with_filter(Filter::new(FilterOperation::Contains, "name", "smoke"))
//!     .with_paging(Paging::new(1, 20));
//!
//! let pairs = filter.to_query_pairs();
//! assert_eq!(pairs[0], ("filter.cnt.name".to_string(), "smoke".to_string()));
//! ```

use std::fmt;

/// Comparison operation applied by a [`Filter`] criterion.
///
/// The wire code of each operation becomes part of the query parameter key,
/// e.g. [`FilterOperation::Contains`] yields `filter.cnt.{field}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperation {
    /// Field equals the value (`eq`).
    Equals,
    /// Field does not equal the value (`ne`).
    NotEquals,
    /// Field contains the value as a substring (`cnt`).
    Contains,
    /// Field exists / does not exist (`ex`).
    Exists,
    /// Field equals one of the values (`in`).
    In,
    /// Field is greater than the value (`gt`).
    GreaterThan,
    /// Field is greater than or equal to the value (`gte`).
    GreaterThanOrEquals,
    /// Field is less than the value (`lt`).
    LessThan,
    /// Field is less than or equal to the value (`lte`).
    LessThanOrEquals,
    /// Field is between the two values (`btw`).
    Between,
}

impl FilterOperation {
    /// The wire code used in query parameter keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperation::Equals => "eq",
            FilterOperation::NotEquals => "ne",
            FilterOperation::Contains => "cnt",
            FilterOperation::Exists => "ex",
            FilterOperation::In => "in",
            FilterOperation::GreaterThan => "gt",
            FilterOperation::GreaterThanOrEquals => "gte",
            FilterOperation::LessThan => "lt",
            FilterOperation::LessThanOrEquals => "lte",
            FilterOperation::Between => "btw",
        }
    }
}

impl fmt::Display for FilterOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single filter criterion over an entity field.
#[derive(Debug, Clone)]
pub struct Filter {
    /// Comparison operation.
    pub operation: FilterOperation,
    /// Entity field the criterion applies to (e.g. `name`, `start_time`).
    pub field: String,
    /// Values compared against; joined with commas on the wire.
    pub values: Vec<String>,
}

impl Filter {
    /// Create a single-value criterion.
    pub fn new(
        operation: FilterOperation,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            field: field.into(),
            values: vec![value.into()],
        }
    }

    /// Create a multi-value criterion (for operations like `in` or `btw`).
    pub fn with_values(
        operation: FilterOperation,
        field: impl Into<String>,
        values: Vec<String>,
    ) -> Self {
        Self {
            operation,
            field: field.into(),
            values,
        }
    }

    /// Render the criterion as its query parameter pair.
    pub fn to_query_pair(&self) -> (String, String) {
        (
            format!("filter.{}.{}", self.operation, self.field),
            self.values.join(","),
        )
    }
}

/// Page selection for list requests.
#[derive(Debug, Clone, Copy)]
pub struct Paging {
    /// Page number, 1-indexed.
    pub page: u32,
    /// Number of items per page.
    pub size: u32,
}

impl Paging {
    /// Create a page selection.
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }
}

/// Sort direction for [`Sorting`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (`asc`).
    Ascending,
    /// Descending order (`desc`).
    Descending,
}

impl SortDirection {
    /// The wire code used in the `page.sort` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Sort order for list requests.
#[derive(Debug, Clone)]
pub struct Sorting {
    /// Entity field to sort by.
    pub field: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl Sorting {
    /// Create a sort order.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// A set of criteria applied to a list operation.
///
/// Criteria are rendered in a stable order: filters as added, then paging,
/// then sorting. An empty `FilterOption` contributes no parameters.
#[derive(Debug, Clone, Default)]
pub struct FilterOption {
    /// Filter criteria, each contributing one query parameter.
    pub filters: Vec<Filter>,
    /// Optional page selection.
    pub paging: Option<Paging>,
    /// Optional sort order.
    pub sorting: Option<Sorting>,
}

impl FilterOption {
    /// Create an empty filter specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter criterion.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the page selection.
    pub fn with_paging(mut self, paging: Paging) -> Self {
        self.paging = Some(paging);
        self
    }

    /// Set the sort order.
    pub fn with_sorting(mut self, sorting: Sorting) -> Self {
        self.sorting = Some(sorting);
        self
    }

    /// Render all criteria as query parameter pairs.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> =
            self.filters.iter().map(Filter::to_query_pair).collect();

        if let Some(paging) = &self.paging {
            pairs.push(("page.page".to_string(), paging.page.to_string()));
            pairs.push(("page.size".to_string(), paging.size.to_string()));
        }

        if let Some(sorting) = &self.sorting {
            pairs.push((
                "page.sort".to_string(),
                format!("{},{}", sorting.field, sorting.direction.as_str()),
            ));
        }

        pairs
    }
}
