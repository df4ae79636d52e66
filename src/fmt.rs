use chrono::NaiveDate;

/// Format an amount in birr with thousands separators: Br 1,234.56
pub fn money(val: f64) -> String {
    let negative = val < 0.0;
    let cents = format!("{:.2}", val.abs());
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((&cents, "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-Br {with_commas}.{dec_part}")
    } else {
        format!("Br {with_commas}.{dec_part}")
    }
}

/// Format a count with thousands separators: 12,450
pub fn number(val: i64) -> String {
    let negative = val < 0;
    let digits = val.abs().to_string();
    let mut with_commas = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();
    if negative {
        format!("-{with_commas}")
    } else {
        with_commas
    }
}

/// Display form of a record date: "Feb 9, 2026". Presentation only —
/// comparisons always run on the NaiveDate itself.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(1234.56), "Br 1,234.56");
        assert_eq!(money(-500.00), "-Br 500.00");
        assert_eq!(money(0.0), "Br 0.00");
        assert_eq!(money(1000000.99), "Br 1,000,000.99");
        assert_eq!(money(42.10), "Br 42.10");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(number(0), "0");
        assert_eq!(number(999), "999");
        assert_eq!(number(12450), "12,450");
        assert_eq!(number(-1234567), "-1,234,567");
    }

    #[test]
    fn test_display_date() {
        let d = NaiveDate::from_ymd_opt(2026, 2, 9).unwrap();
        assert_eq!(display_date(d), "Feb 9, 2026");
        let d = NaiveDate::from_ymd_opt(2026, 1, 28).unwrap();
        assert_eq!(display_date(d), "Jan 28, 2026");
    }
}
