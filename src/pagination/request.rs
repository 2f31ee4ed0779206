use lazy_static::lazy_static;
use regex::Regex;
use sea_query::Order;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

lazy_static! {
    static ref RE_SORT_FIELD: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").unwrap();
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl From<SortOrder> for Order {
    fn from(value: SortOrder) -> Self {
        match value {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

/// Raw pagination request as sent by a client. Every field is optional.
///
/// The range checks only run when the request passes through
/// [`Validate`]; the normalizer itself accepts whatever it is given.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Validate, utoipa::IntoParams)]
#[serde(default, rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationInput {
    /// 1-based page number
    #[validate(range(min = 1))]
    #[param(minimum = 1, example = 1, default = 1)]
    pub page: Option<u32>,

    /// Number of records per page
    #[validate(range(min = 1, max = 100))]
    #[param(minimum = 1, maximum = 100, example = 10, default = 10)]
    pub size: Option<u32>,

    /// Field to order the page by
    #[validate(regex(path = *RE_SORT_FIELD))]
    #[param(example = "createdAt")]
    pub sort_by: Option<String>,

    #[param(inline)]
    pub sort_order: Option<SortOrder>,
}

impl PaginationInput {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn sorted_by(mut self, field: &str, order: SortOrder) -> Self {
        self.sort_by = Some(field.to_string());
        self.sort_order = Some(order);
        self
    }
}
