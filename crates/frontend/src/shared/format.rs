//! Display formatting in Indonesian conventions.

/// Rupiah without minor units, dot as thousands separator
/// Example: 1500000.0 -> "Rp 1.500.000"
pub fn format_rupiah(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// ISO date or datetime to DD/MM/YYYY
/// Example: "2025-03-15T14:02:26.123Z" -> "15/03/2025"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Quantity with its unit, "12 kg"
pub fn format_qty(jumlah: u32, satuan: &str) -> String {
    format!("{} {}", jumlah, satuan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(15000.0), "Rp 15.000");
        assert_eq!(format_rupiah(1500000.4), "Rp 1.500.000");
        assert_eq!(format_rupiah(-2500.0), "-Rp 2.500");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-15"), "15/03/2025");
        assert_eq!(format_date("2025-03-15T14:02:26.123Z"), "15/03/2025");
        assert_eq!(format_date("kemarin"), "kemarin");
    }
}
