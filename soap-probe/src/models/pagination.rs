use std::fmt;

/// Sort direction understood by the user service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortDirection {
    #[default]
    #[value(name = "ASC", alias = "asc")]
    Ascending,
    #[value(name = "DESC", alias = "desc")]
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ASC"),
            SortDirection::Descending => f.write_str("DESC"),
        }
    }
}

/// Paging parameters of a LIST request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub sort_dir: SortDirection,
}

impl Default for Pagination {
    /// First page of 100 users sorted by username, the values the probe always sends.
    fn default() -> Self {
        Self {
            page: 0,
            size: 100,
            sort_by: "username".to_string(),
            sort_dir: SortDirection::Ascending,
        }
    }
}
