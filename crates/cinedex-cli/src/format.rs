//! Display formatting helpers

/// Year portion of an ISO date, or "----" when unknown
pub fn format_year(date: Option<&str>) -> String {
    date.and_then(|d| d.get(0..4))
        .filter(|y| !y.is_empty())
        .unwrap_or("----")
        .to_string()
}

/// Runtime in minutes as "2h 28m"
pub fn format_runtime(minutes: Option<u32>) -> String {
    match minutes {
        Some(0) | None => "N/A".to_string(),
        Some(m) if m < 60 => format!("{m}m"),
        Some(m) => format!("{}h {}m", m / 60, m % 60),
    }
}

/// Vote average with one decimal, "N/A" for unrated titles
pub fn format_rating(vote_average: f64) -> String {
    if vote_average <= 0.0 {
        "N/A".to_string()
    } else {
        format!("{vote_average:.1}")
    }
}

/// Dollar amount with thousands separators, "N/A" for zero
pub fn format_money(amount: u64) -> String {
    if amount == 0 {
        return "N/A".to_string();
    }
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("${out}")
}
