//! Human-readable duration phrases: "2 years", "1 year 9 months",
//! "Less than a month".

pub const LESS_THAN_A_MONTH: &str = "Less than a month";

fn pluralize(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

pub fn format_duration(total_duration_months: u32, is_sub_month: bool) -> String {
    if is_sub_month {
        return LESS_THAN_A_MONTH.to_string();
    }

    let years = total_duration_months / 12;
    let months = total_duration_months % 12;

    match (years, months) {
        (0, months) => pluralize(months, "month"),
        (years, 0) => pluralize(years, "year"),
        (years, months) => format!("{} {}", pluralize(years, "year"), pluralize(months, "month")),
    }
}
