//! Top-level application state

use crate::state::forms::PropertyFormView;
use crate::state::models::{Portfolio, Property};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    PropertyList,
    PropertyForm,
}

/// Everything the UI renders from
#[derive(Default)]
pub struct AppState {
    pub current_view: View,
    pub properties: Vec<Property>,
    pub portfolios: Vec<Portfolio>,
    pub selected_index: usize,
    /// Active portfolio filter for the list view
    pub portfolio_filter: Option<i64>,
    pub form: Option<PropertyFormView>,
    /// Input buffer for the new-portfolio prompt
    pub portfolio_prompt: Option<String>,
    pub error_dialog: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_property(&self) -> Option<&Property> {
        self.properties.get(self.selected_index)
    }

    pub fn select_next(&mut self) {
        if !self.properties.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.properties.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.properties.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.properties.len() - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    /// Cycle the list filter: all portfolios, then each in turn
    pub fn cycle_portfolio_filter(&mut self) {
        self.portfolio_filter = match self.portfolio_filter {
            None => self.portfolios.first().map(|p| p.id),
            Some(current) => {
                let next = self
                    .portfolios
                    .iter()
                    .position(|p| p.id == current)
                    .map(|i| i + 1)
                    .unwrap_or(0);
                self.portfolios.get(next).map(|p| p.id)
            }
        };
        self.selected_index = 0;
    }

    pub fn portfolio_name(&self, id: i64) -> Option<&str> {
        self.portfolios
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
    }
}
