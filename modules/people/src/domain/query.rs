//! Listing query model: typed request parameters plus the pagination math
//! for search/sort/paginate over the people collection.

/// Record field a listing can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Age,
    City,
}

impl SortField {
    /// Empty or unrecognized values fall back to `Name`.
    pub fn parse(s: &str) -> Self {
        match s {
            "age" => Self::Age,
            "city" => Self::City,
            _ => Self::Name,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::City => "city",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// `asc` sorts ascending; anything else sorts descending.
    pub fn parse(s: &str) -> Self {
        if s == "asc" {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Typed listing request, decoded from the raw query string at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u64,
    pub search: String,
    pub sort_by: SortField,
    pub order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            sort_by: SortField::Name,
            order: SortOrder::Asc,
        }
    }
}

impl ListQuery {
    /// Build a query from raw request parameters. Absent or malformed
    /// values take their documented defaults.
    pub fn from_params(
        page: Option<String>,
        search: Option<String>,
        sort_by: Option<String>,
        order: Option<String>,
    ) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<u64>().ok())
            .filter(|&p| p >= 1)
            .unwrap_or(1);
        let search = search.unwrap_or_default();
        let sort_by = SortField::parse(sort_by.as_deref().unwrap_or(""));
        let order = SortOrder::parse(order.as_deref().unwrap_or("asc"));

        Self {
            page,
            search,
            sort_by,
            order,
        }
    }
}

/// Offsets for one fetched page, with the requested page clamped into the
/// valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub total_pages: u64,
    pub offset: u64,
    pub limit: u64,
}

impl Pagination {
    /// Clamp `requested_page` into `[1, total_pages]` (page 1 when there
    /// are no results) and derive skip/limit for the fetch.
    pub fn clamp(requested_page: u64, total: u64, page_size: u64) -> Self {
        let total_pages = total.div_ceil(page_size);
        let page = if total_pages == 0 {
            1
        } else {
            requested_page.clamp(1, total_pages)
        };

        Self {
            page,
            total_pages,
            offset: (page - 1) * page_size,
            limit: page_size,
        }
    }
}
