//! Text budgeting and number formatting without allocation.

use core::fmt::Write;

use heapless::String;

use crate::config::{TEXT_BYTES, TEXT_CAPACITY};

/// A line of display text.
///
/// Backed by [`TEXT_BYTES`] so that [`TEXT_CAPACITY`] characters fit whatever
/// their UTF-8 width.
pub type Line = String<TEXT_BYTES>;

/// First `budget` characters of `s`.
///
/// Cuts on a char boundary, so multi-byte input never panics. Strings at or
/// under budget come back unchanged.
pub fn truncate(
    s: &str,
    budget: usize,
) -> &str {
    match s.char_indices().nth(budget) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Append the first `budget` characters of `s` to `dst`, stopping early at
/// the last whole character that fits its byte capacity.
///
/// Returns the number of characters appended.
pub fn push_fitting<const N: usize>(
    dst: &mut String<N>,
    s: &str,
    budget: usize,
) -> usize {
    let mut pushed = 0;
    for c in s.chars().take(budget) {
        if dst.push(c).is_err() {
            break;
        }
        pushed += 1;
    }
    pushed
}

/// [`Write`] sink over a [`Line`] that keeps every character up to
/// [`TEXT_CAPACITY`] and cuts the rest.
struct Fitting<'a> {
    out: &'a mut Line,
    chars: usize,
}

impl Write for Fitting<'_> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> core::fmt::Result {
        let room = TEXT_CAPACITY - self.chars;
        let pushed = push_fitting(&mut *self.out, s, room);
        self.chars += pushed;
        if pushed < s.chars().count() { Err(core::fmt::Error) } else { Ok(()) }
    }
}

/// Format into a fresh [`Line`].
///
/// Output past [`TEXT_CAPACITY`] characters is cut, never dropped as a whole.
pub fn line(args: core::fmt::Arguments<'_>) -> Line {
    let mut out = Line::new();
    let mut sink = Fitting { out: &mut out, chars: 0 };
    // Err only means the line is full; what fit is kept
    if sink.write_fmt(args).is_err() {
        debug_assert_eq!(sink.chars, TEXT_CAPACITY);
    }
    out
}

/// `"{label}{value}"`, with `value` cut to `budget` first.
pub fn labelled(
    label: &str,
    value: &str,
    budget: usize,
) -> Line {
    line(format_args!("{label}{}", truncate(value, budget)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("Connecting to Wi-Fi network", 21), "Connecting to Wi-Fi n");
    }

    #[test]
    fn test_truncate_at_or_under_budget_is_noop() {
        assert_eq!(truncate("Ready", 21), "Ready");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("", 10), "");
    }

    #[test]
    fn test_truncate_is_idempotent() {
        let once = truncate("Cuentatron Pro Max", 10);
        assert_eq!(truncate(once, 10), once);
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'ñ' and 'ó' are two bytes each; slicing by bytes would panic
        assert_eq!(truncate("Señal débil", 4), "Seña");
        assert_eq!(truncate("Configuración", 12), "Configuració");
    }

    #[test]
    fn test_truncate_zero_budget() {
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_line_formats_numbers() {
        assert_eq!(line(format_args!("V:{:.1}", 229.96_f32)).as_str(), "V:230.0");
        assert_eq!(line(format_args!("A:{:.2}", 4.349_f32)).as_str(), "A:4.35");
        assert_eq!(line(format_args!("{:.0}", 1499.6_f32)).as_str(), "1500");
    }

    #[test]
    fn test_line_keeps_multibyte_prefix() {
        // 30 characters, 36 bytes
        let out = line(format_args!("{}", "Año: señal débil, sí, está ahí"));
        assert_eq!(out.as_str(), "Año: señal débil, sí, es", "cut at the character capacity");
        assert_eq!(out.chars().count(), TEXT_CAPACITY);
    }

    #[test]
    fn test_line_cuts_across_arguments() {
        let long = "x".repeat(20);
        let out = line(format_args!("{long}{}", "ñandú"));
        assert_eq!(out.as_str(), format!("{long}ñand"), "partial argument kept up to capacity");
    }

    #[test]
    fn test_push_fitting_stops_at_byte_capacity() {
        let mut s: String<5> = String::new();
        // 'é' is 2 bytes: "aé" = 3, "aéé" would be 5, "aééé" 7
        assert_eq!(push_fitting(&mut s, "aééé", 10), 3);
        assert_eq!(s.as_str(), "aéé");
    }

    #[test]
    fn test_push_fitting_respects_budget() {
        let mut s: String<32> = String::new();
        assert_eq!(push_fitting(&mut s, "Configuración", 12), 12);
        assert_eq!(s.as_str(), "Configuració");
    }

    #[test]
    fn test_labelled_cuts_value_only() {
        assert_eq!(labelled("Net:", "MyVeryLongHomeNetworkName", 17).as_str(), "Net:MyVeryLongHomeNet");
    }
}
