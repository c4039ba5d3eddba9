//! Input masks applied to national ids and phone numbers as they are entered

/// Maximum number of digits kept by either mask
const MAX_DIGITS: usize = 11;

fn digits(value: &str) -> Vec<char> {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_DIGITS)
        .collect()
}

/// Mask a national id (CPF) as `000.000.000-00`
///
/// Partial input is masked partially, so `1234` becomes `123.4`.
pub fn format_national_id(value: &str) -> String {
    let mut out = String::with_capacity(14);
    for (i, c) in digits(value).into_iter().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Mask a phone number as `(00) 00000-0000`
///
/// The dash only appears once at least eight digits have been typed.
pub fn format_phone(value: &str) -> String {
    let digits = digits(value);
    if digits.len() < 3 {
        return digits.into_iter().collect();
    }

    let area: String = digits[..2].iter().collect();
    let rest = &digits[2..];

    let mut out = format!("({}) ", area);
    if rest.len() > 5 {
        out.extend(&rest[..5]);
        out.push('-');
        out.extend(&rest[5..]);
    } else {
        out.extend(rest);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_national_id_full() {
        assert_eq!(format_national_id("11111111111"), "111.111.111-11");
        assert_eq!(format_national_id("123.456.789-01"), "123.456.789-01");
    }

    #[test]
    fn test_national_id_partial() {
        assert_eq!(format_national_id(""), "");
        assert_eq!(format_national_id("123"), "123");
        assert_eq!(format_national_id("1234"), "123.4");
        assert_eq!(format_national_id("1234567"), "123.456.7");
        assert_eq!(format_national_id("123456789"), "123.456.789");
        assert_eq!(format_national_id("1234567890"), "123.456.789-0");
    }

    #[test]
    fn test_national_id_drops_extra_and_non_digits() {
        assert_eq!(format_national_id("abc"), "");
        assert_eq!(format_national_id("1234567890123"), "123.456.789-01");
    }

    #[test]
    fn test_phone_mobile() {
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone("(11) 98765-4321"), "(11) 98765-4321");
    }

    #[test]
    fn test_phone_partial() {
        assert_eq!(format_phone("1"), "1");
        assert_eq!(format_phone("11"), "11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("1134567"), "(11) 34567");
        assert_eq!(format_phone("11345678"), "(11) 34567-8");
        assert_eq!(format_phone("1198765432"), "(11) 98765-432");
    }
}
