//! Currency formatting, lenient parsing and the focus-tracked edit state
//!
//! The canonical field value stays numeric; what the user sees is a transient
//! display string. While a currency field is unfocused the display is the
//! locale-formatted string; while focused it is the raw numeric text so
//! typing and backspacing behave naturally.

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Norwegian: space grouping, comma decimal, symbol suffix
    #[default]
    NbNo,
    /// US English: comma grouping, period decimal, symbol prefix
    EnUs,
}

impl Locale {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "nb-NO" => Some(Locale::NbNo),
            "en-US" => Some(Locale::EnUs),
            _ => None,
        }
    }

    fn group_separator(self) -> char {
        match self {
            Locale::NbNo => ' ',
            Locale::EnUs => ',',
        }
    }

    fn decimal_separator(self) -> char {
        match self {
            Locale::NbNo => ',',
            Locale::EnUs => '.',
        }
    }
}

/// Currency code plus locale; both caller-overridable, defaults NOK / nb-NO
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyStyle {
    pub currency: String,
    pub locale: Locale,
}

impl Default for CurrencyStyle {
    fn default() -> Self {
        Self {
            currency: "NOK".to_string(),
            locale: Locale::NbNo,
        }
    }
}

impl CurrencyStyle {
    pub fn new(currency: impl Into<String>, locale: Locale) -> Self {
        Self {
            currency: currency.into(),
            locale,
        }
    }

    /// Format a canonical value as a currency string with two fraction
    /// digits. NaN (the unset value) formats to the empty string.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return String::new();
        }

        let negative = value < 0.0;
        let cents = (value.abs() * 100.0).round() as u128;
        let whole = cents / 100;
        let fraction = cents % 100;

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.locale.group_separator());
            }
            grouped.push(c);
        }

        let sign = if negative { "-" } else { "" };
        let number = format!(
            "{sign}{grouped}{}{fraction:02}",
            self.locale.decimal_separator()
        );

        match (self.locale, self.currency.as_str()) {
            (Locale::NbNo, "NOK") => format!("{number} kr"),
            (Locale::EnUs, "USD") => format!("${number}"),
            (Locale::NbNo, code) => format!("{number} {code}"),
            (Locale::EnUs, code) => format!("{number} {code}"),
        }
    }

    /// Raw numeric text shown while the field is focused
    pub fn raw_edit_string(&self, value: f64) -> String {
        if value.is_nan() {
            String::new()
        } else {
            format!("{value}")
        }
    }
}

/// Parse raw keyed-in text to a canonical amount.
///
/// Everything except digits, separators and a sign is stripped. The last `.`
/// or `,` is taken as the decimal separator and earlier separators dropped as
/// grouping, so `1,234.56`, `1234.56` and `1 234,56` all parse to 1234.56.
/// An empty or malformed result parses to 0; that leniency is deliberate,
/// there is no parse-error signal.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();
    if cleaned.is_empty() {
        return 0.0;
    }

    let decimal_pos = cleaned.rfind(['.', ',']);
    let mut normalized = String::with_capacity(cleaned.len());
    for (i, c) in cleaned.char_indices() {
        match c {
            '.' | ',' => {
                if Some(i) == decimal_pos {
                    normalized.push('.');
                }
            }
            _ => normalized.push(c),
        }
    }

    normalized.parse().unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditState {
    /// Display shows the formatted string derived from the canonical value
    Formatted,
    /// Display shows raw numeric text while the user types
    Editing,
}

/// Per-field display state machine for a currency input.
///
/// Transitions: Formatted --focus--> Editing --blur--> Formatted. An external
/// change to the canonical value is not applied immediately; it schedules a
/// resync that runs on the next frame, and only when the field is not
/// capturing input, so it never clobbers an in-progress edit.
#[derive(Debug, Clone)]
pub struct CurrencyEditor {
    style: CurrencyStyle,
    state: EditState,
    display: String,
    pending_resync: bool,
}

impl CurrencyEditor {
    pub fn new(style: CurrencyStyle, initial: f64) -> Self {
        let display = style.format(initial);
        Self {
            style,
            state: EditState::Formatted,
            display,
            pending_resync: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_editing(&self) -> bool {
        self.state == EditState::Editing
    }

    /// Focus gained: switch to raw text derived from the canonical value
    pub fn focus(&mut self, canonical: f64) {
        self.state = EditState::Editing;
        self.display = self.style.raw_edit_string(canonical);
    }

    /// Focus lost: finalize and reformat from the canonical value
    pub fn blur(&mut self, canonical: f64) {
        self.state = EditState::Formatted;
        self.display = self.style.format(canonical);
        self.pending_resync = false;
    }

    /// Keystroke while editing; returns the re-parsed canonical value when
    /// the character was accepted
    pub fn push_char(&mut self, c: char) -> Option<f64> {
        if self.state != EditState::Editing {
            return None;
        }
        if c.is_ascii_digit() || matches!(c, '.' | ',' | '-') {
            self.display.push(c);
            Some(parse_amount(&self.display))
        } else {
            None
        }
    }

    /// Backspace while editing; returns the re-parsed canonical value
    pub fn backspace(&mut self) -> Option<f64> {
        if self.state != EditState::Editing {
            return None;
        }
        self.display.pop();
        Some(parse_amount(&self.display))
    }

    /// The canonical value changed outside the input cycle (form reset,
    /// record load); schedule a display resync for the next frame
    pub fn notify_external_change(&mut self) {
        self.pending_resync = true;
    }

    /// Per-frame hook applying a scheduled resync once no edit is in progress
    pub fn on_frame(&mut self, canonical: f64) {
        if self.pending_resync && self.state == EditState::Formatted {
            self.display = self.style.format(canonical);
            self.pending_resync = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nok() -> CurrencyStyle {
        CurrencyStyle::default()
    }

    fn usd() -> CurrencyStyle {
        CurrencyStyle::new("USD", Locale::EnUs)
    }

    #[test]
    fn test_format_nok() {
        assert_eq!(nok().format(25_000_000.0), "25 000 000,00 kr");
        assert_eq!(nok().format(1234.56), "1 234,56 kr");
        assert_eq!(nok().format(0.0), "0,00 kr");
        assert_eq!(nok().format(-1234.5), "-1 234,50 kr");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(usd().format(1234.56), "$1,234.56");
        assert_eq!(usd().format(999.0), "$999.00");
    }

    #[test]
    fn test_format_other_code_falls_back_to_suffix() {
        let eur = CurrencyStyle::new("EUR", Locale::NbNo);
        assert_eq!(eur.format(10.0), "10,00 EUR");
    }

    #[test]
    fn test_format_nan_is_empty() {
        assert_eq!(nok().format(f64::NAN), "");
        assert_eq!(usd().format(f64::NAN), "");
    }

    #[test]
    fn test_parse_empty_is_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("kr"), 0.0);
    }

    #[test]
    fn test_parse_grouping_and_decimal_disambiguation() {
        assert_eq!(parse_amount("1,234.56"), 1234.56);
        assert_eq!(parse_amount("1234.56"), 1234.56);
        assert_eq!(parse_amount("1 234,56"), 1234.56);
        assert_eq!(parse_amount("1.234.567,89"), 1_234_567.89);
    }

    #[test]
    fn test_parse_lone_comma_is_decimal() {
        assert_eq!(parse_amount("12,5"), 12.5);
    }

    #[test]
    fn test_parse_malformed_is_zero() {
        assert_eq!(parse_amount("--"), 0.0);
        assert_eq!(parse_amount("."), 0.0);
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(parse_amount("-1 200 000"), -1_200_000.0);
    }

    #[test]
    fn test_round_trip_stability() {
        for s in ["1,234.56", "0", "999,99", "25 000 000", "-42.50"] {
            let canonical = parse_amount(s);
            assert_eq!(
                parse_amount(&nok().format(canonical)),
                canonical,
                "round trip failed for {s:?}"
            );
            assert_eq!(parse_amount(&usd().format(canonical)), canonical);
        }
    }

    #[test]
    fn test_editor_starts_formatted() {
        let editor = CurrencyEditor::new(nok(), 1234.56);
        assert!(!editor.is_editing());
        assert_eq!(editor.display(), "1 234,56 kr");
    }

    #[test]
    fn test_focus_switches_to_raw_text() {
        let mut editor = CurrencyEditor::new(nok(), 1234.56);
        editor.focus(1234.56);
        assert!(editor.is_editing());
        assert_eq!(editor.display(), "1234.56");
    }

    #[test]
    fn test_focus_with_nan_shows_empty() {
        let mut editor = CurrencyEditor::new(nok(), f64::NAN);
        assert_eq!(editor.display(), "");
        editor.focus(f64::NAN);
        assert_eq!(editor.display(), "");
    }

    #[test]
    fn test_keystrokes_update_canonical_but_display_stays_raw() {
        let mut editor = CurrencyEditor::new(nok(), f64::NAN);
        editor.focus(f64::NAN);
        assert_eq!(editor.push_char('1'), Some(1.0));
        assert_eq!(editor.push_char('2'), Some(12.0));
        assert_eq!(editor.push_char(','), Some(12.0));
        assert_eq!(editor.push_char('5'), Some(12.5));
        assert_eq!(editor.display(), "12,5");
    }

    #[test]
    fn test_non_numeric_keystroke_ignored() {
        let mut editor = CurrencyEditor::new(nok(), 0.0);
        editor.focus(0.0);
        assert_eq!(editor.push_char('x'), None);
    }

    #[test]
    fn test_push_char_inert_when_not_editing() {
        let mut editor = CurrencyEditor::new(nok(), 0.0);
        assert_eq!(editor.push_char('1'), None);
        assert_eq!(editor.backspace(), None);
    }

    #[test]
    fn test_blur_reformats_from_canonical() {
        let mut editor = CurrencyEditor::new(nok(), f64::NAN);
        editor.focus(f64::NAN);
        editor.push_char('9');
        editor.push_char('9');
        editor.blur(99.0);
        assert!(!editor.is_editing());
        assert_eq!(editor.display(), "99,00 kr");
    }

    #[test]
    fn test_backspace_to_empty_parses_to_zero() {
        let mut editor = CurrencyEditor::new(nok(), 5.0);
        editor.focus(5.0);
        assert_eq!(editor.backspace(), Some(0.0));
        assert_eq!(editor.display(), "");
    }

    #[test]
    fn test_external_change_deferred_one_frame() {
        let mut editor = CurrencyEditor::new(nok(), 1.0);
        editor.notify_external_change();
        // display untouched until the next frame
        assert_eq!(editor.display(), "1,00 kr");
        editor.on_frame(2.0);
        assert_eq!(editor.display(), "2,00 kr");
    }

    #[test]
    fn test_external_change_never_clobbers_active_edit() {
        let mut editor = CurrencyEditor::new(nok(), 1.0);
        editor.focus(1.0);
        editor.push_char('7');
        editor.notify_external_change();
        editor.on_frame(2.0);
        // still showing the in-progress raw edit
        assert_eq!(editor.display(), "17");
        // blur finalizes and drops the stale resync
        editor.blur(17.0);
        assert_eq!(editor.display(), "17,00 kr");
        editor.on_frame(2.0);
        assert_eq!(editor.display(), "17,00 kr");
    }
}
