/// Format an amount as Mexican pesos: `$1,234.56`, `-$500.00`
///
/// Missing or non-finite values render as `$0.00`.
pub fn format_currency(value: Option<f64>) -> String {
    let val = value.filter(|v| v.is_finite()).unwrap_or(0.0);
    let cents = format!("{:.2}", val.abs());
    let negative = val < 0.0 && cents != "0.00";
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${grouped}.{dec_part}")
    } else {
        format!("${grouped}.{dec_part}")
    }
}

/// Axis tick label used by the budget chart: `$1500.00`
pub fn format_axis_amount(value: f64) -> String {
    format!("${:.2}", value)
}
