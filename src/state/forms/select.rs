//! Single-selection option list for choice fields

/// A selectable label/value pair, supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Closed option set with an optional clear affordance.
///
/// When not required, a "(none)" entry with an empty-string value is
/// prepended; selecting it resets the bound value to `""`. Values outside the
/// set are not prevented here, upstream validation handles them.
#[derive(Debug, Clone)]
pub struct SelectList {
    options: Vec<SelectOption>,
    required: bool,
}

impl SelectList {
    pub fn new(options: Vec<SelectOption>, required: bool) -> Self {
        let options = if required {
            options
        } else {
            let mut all = Vec::with_capacity(options.len() + 1);
            all.push(SelectOption::new("(none)", ""));
            all.extend(options);
            all
        };
        Self {
            options,
            required,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn required(&self) -> bool {
        self.required
    }

    /// Display label for the current value; a value outside the set shows as
    /// its raw string
    pub fn label_for<'a>(&'a self, value: &'a str) -> &'a str {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.label.as_str())
            .unwrap_or(value)
    }

    /// Value after the current one, wrapping; an unknown current value lands
    /// on the first option
    pub fn next(&self, current: &str) -> &str {
        if self.options.is_empty() {
            return "";
        }
        let index = self.position(current).map_or(0, |i| (i + 1) % self.options.len());
        &self.options[index].value
    }

    /// Value before the current one, wrapping
    pub fn prev(&self, current: &str) -> &str {
        if self.options.is_empty() {
            return "";
        }
        let index = self
            .position(current)
            .map_or(0, |i| (i + self.options.len() - 1) % self.options.len());
        &self.options[index].value
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|option| option.value == value)
    }
}
