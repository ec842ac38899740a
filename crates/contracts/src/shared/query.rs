use serde::Serialize;

/// Optional `limit` parameter of the aggregate endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LimitQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Optional `year` parameter of the trend endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct YearQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Date range filter, serialized as `dateFrom`/`dateTo` in `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<chrono::NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<chrono::NaiveDate>,
}

impl DateRange {
    /// A range is usable when both ends are open or ordered
    pub fn is_valid(&self) -> bool {
        match (self.date_from, self.date_to) {
            (Some(from), Some(to)) => from <= to,
            _ => true,
        }
    }
}
