use crate::HolidayType;

pub const REGULAR_HOLIDAYS_HEADING: &str = "Regular Holidays";
pub const SPECIAL_HOLIDAYS_HEADING: &str = "Special (Non-Working) Holidays";

/// Which section heading each holiday table on the page belongs to.
///
/// The gazette pages carry no label on the tables themselves, so the
/// section is inferred from the table's position: `headings[i]` for the
/// `i`-th table, `fallback` for every table past the end of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    headings: Vec<String>,
    fallback: String,
}

impl TableLayout {
    pub fn new(headings: Vec<String>, fallback: impl Into<String>) -> Self {
        Self {
            headings,
            fallback: fallback.into(),
        }
    }

    pub fn heading_for(&self, table_index: usize) -> &str {
        self.headings
            .get(table_index)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    pub fn holiday_type_for(&self, table_index: usize) -> HolidayType {
        HolidayType::from_heading(self.heading_for(table_index))
    }
}

impl Default for TableLayout {
    /// First table holds regular holidays, the rest special non-working ones.
    fn default() -> Self {
        Self::new(
            vec![REGULAR_HOLIDAYS_HEADING.to_string()],
            SPECIAL_HOLIDAYS_HEADING,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_regular_then_special() {
        let layout = TableLayout::default();
        assert_eq!(layout.holiday_type_for(0), HolidayType::RegularHoliday);
        assert_eq!(layout.holiday_type_for(1), HolidayType::SpecialNonWorkingHoliday);
        assert_eq!(layout.holiday_type_for(7), HolidayType::SpecialNonWorkingHoliday);
    }

    #[test]
    fn custom_layout_can_yield_unknown() {
        let layout = TableLayout::new(
            vec![SPECIAL_HOLIDAYS_HEADING.to_string(), REGULAR_HOLIDAYS_HEADING.to_string()],
            "Additional Special Days",
        );
        assert_eq!(layout.holiday_type_for(0), HolidayType::SpecialNonWorkingHoliday);
        assert_eq!(layout.holiday_type_for(1), HolidayType::RegularHoliday);
        assert_eq!(layout.heading_for(2), "Additional Special Days");
        assert_eq!(layout.holiday_type_for(2), HolidayType::Unknown);
    }
}
