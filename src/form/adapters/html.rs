//! HTML rendering of task cards and the task list.
//!
//! Produces the markup the task page shows, with every text value
//! HTML-escaped.

use minijinja::{Environment, context};
use thiserror::Error;

use crate::form::{domain::CardModel, services::ListPresenter};

const CARD_TEMPLATE: &str = "task_card.html";
const LIST_TEMPLATE: &str = "task_list.html";

/// Error raised while rendering markup.
#[derive(Debug, Error)]
#[error("failed to render task markup: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// Renders [`CardModel`] values and the task list to HTML fragments.
#[derive(Debug)]
pub struct HtmlCardRenderer {
    environment: Environment<'static>,
}

impl HtmlCardRenderer {
    /// Creates a renderer with the bundled templates loaded.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a bundled template fails to parse.
    pub fn new() -> Result<Self, RenderError> {
        let mut environment = Environment::new();
        environment.add_template(CARD_TEMPLATE, include_str!("templates/task_card.html"))?;
        environment.add_template(LIST_TEMPLATE, include_str!("templates/task_list.html"))?;
        Ok(Self { environment })
    }

    /// Renders one card.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if rendering fails.
    pub fn render_card(&self, card: &CardModel) -> Result<String, RenderError> {
        let template = self.environment.get_template(CARD_TEMPLATE)?;
        Ok(template.render(context! { card => card })?)
    }

    /// Renders the counter, the empty-state placeholder when shown, and every
    /// card newest first.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if rendering fails.
    pub fn render_list(&self, list: &ListPresenter) -> Result<String, RenderError> {
        let template = self.environment.get_template(LIST_TEMPLATE)?;
        let cards: Vec<&CardModel> = list.cards().collect();
        Ok(template.render(context! {
            count_label => list.count_label(),
            empty_state_visible => list.is_empty_state_visible(),
            cards => cards,
        })?)
    }
}
