//! Formatting utilities for dashboard figures.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format an ISO date string as "Jan 20, 2024".
///
/// Returns the input unchanged if it is not a `YYYY-MM-DD` date.
pub fn format_date_human(date_str: &str) -> String {
    let parts: Vec<&str> = date_str.splitn(3, '-').collect();
    let [year, month, day] = parts.as_slice() else {
        return date_str.to_string();
    };
    let day = day.get(..2).unwrap_or(*day);

    match (parse_month(month), day.parse::<u32>()) {
        (Some(m), Ok(day_num)) if year.len() == 4 => {
            format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year)
        }
        _ => date_str.to_string(),
    }
}

/// Group digits with commas: 50000 becomes "50,000".
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a headline figure that is a lower bound, e.g. "50,000+".
pub fn format_at_least(n: u64) -> String {
    format!("{}+", format_count(n))
}
