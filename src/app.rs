//! Application state and key handling

use crate::api::{ApiClient, PropertyFilter};
use crate::config::TuiConfig;
use crate::state::forms::{FormMode, PropertyFormView};
use crate::state::{AppState, View};
use crate::ui::components::SubmitPresentation;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

pub struct App {
    pub state: AppState,
    pub config: TuiConfig,
    pub status_message: Option<String>,
    api: Box<dyn ApiClient>,
    should_quit: bool,
}

impl App {
    /// Build the app against the configured backend and load initial data
    pub async fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_default();
        let api = Box::new(crate::api::HttpApiClient::new(config.api_base_url()));
        let mut app = Self::with_client(api, config);
        app.refresh().await;
        Ok(app)
    }

    /// Test seam: inject any API client
    pub fn with_client(api: Box<dyn ApiClient>, config: TuiConfig) -> Self {
        Self {
            state: AppState::new(),
            config,
            status_message: None,
            api,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Per-frame upkeep delegated to the open form (flag subscription,
    /// deferred currency resync)
    pub fn on_frame(&mut self) {
        if let Some(form) = self.state.form.as_mut() {
            form.on_frame();
        }
    }

    /// Reload portfolios and the (possibly filtered) property list
    pub async fn refresh(&mut self) {
        match self.api.list_portfolios().await {
            Ok(portfolios) => self.state.portfolios = portfolios,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load portfolios");
                self.state.error_dialog = Some(format!("Could not load portfolios: {err}"));
                return;
            }
        }

        let filter = PropertyFilter {
            portfolio: self.state.portfolio_filter,
            bbox: None,
        };
        match self.api.list_properties(&filter).await {
            Ok(properties) => {
                self.state.properties = properties;
                if self.state.selected_index >= self.state.properties.len() {
                    self.state.selected_index = 0;
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load properties");
                self.state.error_dialog = Some(format!("Could not load properties: {err}"));
            }
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // an open dialog swallows input until dismissed
        if self.state.error_dialog.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.error_dialog = None;
            }
            return Ok(());
        }

        if self.state.portfolio_prompt.is_some() {
            return self.handle_prompt_key(key).await;
        }

        match self.state.current_view {
            View::PropertyList => self.handle_list_key(key).await,
            View::PropertyForm => self.handle_form_key(key).await,
        }
    }

    async fn handle_list_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('r') => {
                self.status_message = None;
                self.refresh().await;
            }
            KeyCode::Char('n') => self.open_create_form(),
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit_form().await,
            KeyCode::Char('d') => self.delete_selected().await,
            KeyCode::Char('c') => {
                self.state.portfolio_prompt = Some(String::new());
                self.status_message = None;
            }
            KeyCode::Char('p') => {
                self.state.cycle_portfolio_filter();
                self.refresh().await;
            }
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev(),
            _ => {}
        }
        Ok(())
    }

    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(form) = self.state.form.as_mut() else {
            self.state.current_view = View::PropertyList;
            return Ok(());
        };

        match key.code {
            KeyCode::Esc => self.close_form(),
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Enter => {
                if form.is_actions_row_active() {
                    if form.selected_button == 1 {
                        self.close_form();
                    } else if !SubmitPresentation::derive(form.flags, false).disabled {
                        self.submit_form().await;
                    }
                } else {
                    form.next_field();
                }
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Left => {
                form.cycle_select(false);
                form.nudge_marker(-1, 0);
            }
            KeyCode::Right => {
                form.cycle_select(true);
                form.nudge_marker(1, 0);
            }
            KeyCode::Up => {
                if form.is_actions_row_active() {
                    form.prev_button();
                } else {
                    form.nudge_marker(0, 1);
                }
            }
            KeyCode::Down => {
                if form.is_actions_row_active() {
                    form.next_button();
                } else {
                    form.nudge_marker(0, -1);
                }
            }
            KeyCode::Char(c) => form.handle_char(c),
            _ => {}
        }
        Ok(())
    }

    async fn handle_prompt_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(input) = self.state.portfolio_prompt.as_mut() else {
            return Ok(());
        };
        match key.code {
            KeyCode::Esc => self.state.portfolio_prompt = None,
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => input.push(c),
            KeyCode::Enter => {
                let name = input.trim().to_string();
                if name.is_empty() {
                    return Ok(());
                }
                match self.api.create_portfolio(&name).await {
                    Ok(portfolio) => {
                        self.state.portfolio_prompt = None;
                        self.status_message = Some(format!("Created {}", portfolio.name));
                        self.refresh().await;
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "failed to create portfolio");
                        self.state.portfolio_prompt = None;
                        self.state.error_dialog =
                            Some(format!("Could not create portfolio: {err}"));
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn open_create_form(&mut self) {
        self.state.form = Some(PropertyFormView::create(
            &self.state.portfolios,
            self.config.currency_style(),
            self.config.map_zoom,
            self.config.map_center(),
        ));
        self.state.current_view = View::PropertyForm;
        self.status_message = None;
    }

    async fn open_edit_form(&mut self) {
        let Some(id) = self.state.selected_property().and_then(|p| p.id) else {
            return;
        };
        // re-fetch so the form starts from the stored record, not a stale row
        let property = match self.api.get_property(id).await {
            Ok(property) => property,
            Err(err) => {
                tracing::warn!(error = %err, id, "failed to load property");
                self.state.error_dialog = Some(format!("Could not load property: {err}"));
                return;
            }
        };
        self.state.form = Some(PropertyFormView::edit(
            &property,
            &self.state.portfolios,
            self.config.currency_style(),
            self.config.map_zoom,
        ));
        self.state.current_view = View::PropertyForm;
        self.status_message = None;
    }

    fn close_form(&mut self) {
        self.state.form = None;
        self.state.current_view = View::PropertyList;
    }

    async fn submit_form(&mut self) {
        let Some(form) = self.state.form.as_mut() else {
            return;
        };

        if !form.validate() {
            form.on_frame();
            self.status_message = Some("Fix the highlighted fields".to_string());
            return;
        }
        let Some(property) = form.to_property() else {
            return;
        };

        form.engine.set_submitting(true);
        form.on_frame();
        let mode = form.mode;

        let result = match mode {
            FormMode::Create => self.api.create_property(&property).await,
            FormMode::Edit(_) => self.api.update_property(&property).await,
        };

        if let Some(form) = self.state.form.as_mut() {
            form.engine.set_submitting(false);
            form.on_frame();
        }

        match result {
            Ok(saved) => {
                self.close_form();
                self.status_message = Some(format!("Saved {}", saved.name));
                self.refresh().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to save property");
                self.state.error_dialog = Some(format!("Could not save property: {err}"));
            }
        }
    }

    async fn delete_selected(&mut self) {
        let Some(id) = self.state.selected_property().and_then(|p| p.id) else {
            return;
        };
        match self.api.delete_property(id).await {
            Ok(()) => {
                self.status_message = Some("Property deleted".to_string());
                self.refresh().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, id, "failed to delete property");
                self.state.error_dialog = Some(format!("Could not delete property: {err}"));
            }
        }
    }
}
