use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether another page may follow this one
    pub has_next_page: bool,
    /// Whether this is not the first page
    pub has_previous_page: bool,
}

/// Page result envelope.
///
/// With [`CountMode::Window`](super::CountMode::Window) the counts describe
/// the returned window only, not the whole filtered collection.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub nodes: Vec<T>,
    pub total_count: u64,
    pub total_pages: u64,
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    /// Metadata derived from the fetched window alone. A full page is taken
    /// as a sign that more records follow.
    pub(crate) fn from_window(nodes: Vec<T>, page: u64, limit: u64) -> Self {
        let total_count = nodes.len() as u64;
        Self {
            page_info: PageInfo {
                has_next_page: total_count == limit,
                has_previous_page: page > 1,
            },
            total_pages: pages(total_count, limit),
            total_count,
            nodes,
        }
    }

    /// Metadata derived from a separate count of every matching record.
    pub(crate) fn from_total(nodes: Vec<T>, page: u64, offset: u64, limit: u64, total: u64) -> Self {
        Self {
            page_info: PageInfo {
                has_next_page: offset + (nodes.len() as u64) < total,
                has_previous_page: page > 1,
            },
            total_pages: pages(total, limit),
            total_count: total,
            nodes,
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            nodes: self.nodes.into_iter().map(f).collect(),
            total_count: self.total_count,
            total_pages: self.total_pages,
            page_info: self.page_info,
        }
    }
}

fn pages(count: u64, limit: u64) -> u64 {
    if limit == 0 {
        0
    } else {
        count.div_ceil(limit)
    }
}
