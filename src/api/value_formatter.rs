/// Formats entry values for value labels.
pub trait ValueFormatter {
    fn format_value(&self, value: f64) -> String;
}

/// Fixed decimals with `,` thousands grouping, e.g. `1,234.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultValueFormatter {
    digits: u8,
}

impl DefaultValueFormatter {
    /// Upper bound on `digits`; larger requests are clamped.
    pub const MAX_DIGITS: u8 = 12;

    #[must_use]
    pub fn new(digits: u8) -> Self {
        Self {
            digits: digits.min(Self::MAX_DIGITS),
        }
    }

    #[must_use]
    pub fn digits(self) -> u8 {
        self.digits
    }
}

impl Default for DefaultValueFormatter {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ValueFormatter for DefaultValueFormatter {
    fn format_value(&self, value: f64) -> String {
        if !value.is_finite() {
            return "nan".to_owned();
        }

        let precision = usize::from(self.digits);
        let text = format!("{:.precision$}", value.abs());
        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text.as_str(), None),
        };

        let mut out = String::with_capacity(text.len() + integer.len() / 3 + 1);
        let negative = value < 0.0 && text.bytes().any(|b| b.is_ascii_digit() && b != b'0');
        if negative {
            out.push('-');
        }
        for (idx, ch) in integer.chars().enumerate() {
            if idx > 0 && (integer.len() - idx) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

impl<F> ValueFormatter for F
where
    F: Fn(f64) -> String,
{
    fn format_value(&self, value: f64) -> String {
        self(value)
    }
}
