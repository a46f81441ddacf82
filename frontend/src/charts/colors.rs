/// Colour channels parsed from a CSS colour string, alpha in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

/// Fallback for category colours the server sends in a form we can't read
pub const DEFAULT_COLOR: Rgba = Rgba { r: 0x3B, g: 0x82, b: 0xF6, a: 1.0 };

/// Parse `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)` or `rgba(r, g, b, a)`
pub fn parse_css_color(input: &str) -> Option<Rgba> {
    let input = input.trim();
    if let Some(hex) = input.strip_prefix('#') {
        parse_hex(hex)
    } else if let Some(args) = input.strip_prefix("rgba(").and_then(|s| s.strip_suffix(')')) {
        parse_functional(args, true)
    } else if let Some(args) = input.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        parse_functional(args, false)
    } else {
        None
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some(Rgba {
                r: digits.next()??,
                g: digits.next()??,
                b: digits.next()??,
                a: 1.0,
            })
        }
        6 | 8 => {
            let alpha = if hex.len() == 8 {
                f64::from(channel(&hex[6..8])?) / 255.0
            } else {
                1.0
            };
            Some(Rgba {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
                a: alpha,
            })
        }
        _ => None,
    }
}

fn parse_functional(args: &str, with_alpha: bool) -> Option<Rgba> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }
    let channel = |s: &str| s.parse::<u8>().ok();
    let alpha = if with_alpha {
        parts[3].parse::<f64>().ok().filter(|a| (0.0..=1.0).contains(a))?
    } else {
        1.0
    };
    Some(Rgba {
        r: channel(parts[0])?,
        g: channel(parts[1])?,
        b: channel(parts[2])?,
        a: alpha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors() {
        assert_eq!(
            parse_css_color("#10B981"),
            Some(Rgba { r: 0x10, g: 0xB9, b: 0x81, a: 1.0 })
        );
        assert_eq!(parse_css_color("#fff"), Some(Rgba { r: 255, g: 255, b: 255, a: 1.0 }));

        let with_alpha = parse_css_color("#10B981CC").unwrap();
        assert_eq!((with_alpha.r, with_alpha.g, with_alpha.b), (0x10, 0xB9, 0x81));
        assert!((with_alpha.a - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_functional_colors() {
        assert_eq!(
            parse_css_color("rgba(209, 213, 219, 0.5)"),
            Some(Rgba { r: 209, g: 213, b: 219, a: 0.5 })
        );
        assert_eq!(
            parse_css_color("rgb(156,163,175)"),
            Some(Rgba { r: 156, g: 163, b: 175, a: 1.0 })
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_css_color(""), None);
        assert_eq!(parse_css_color("blue"), None);
        assert_eq!(parse_css_color("#12345"), None);
        assert_eq!(parse_css_color("#GGGGGG"), None);
        assert_eq!(parse_css_color("#ñañ"), None);
        assert_eq!(parse_css_color("rgba(1, 2, 3)"), None);
        assert_eq!(parse_css_color("rgba(1, 2, 3, 7)"), None);
        assert_eq!(parse_css_color("rgb(300, 0, 0)"), None);
    }
}
