use std::sync::Arc;

use crossterm::event::KeyCode;
use ratatui::Frame;

use super::recipe_states::RecipeSearch;
use crate::config::ServingBounds;
use crate::models::{PriceDatabase, Recipe};

pub enum AppAction {
    Continue, // Keep running
    Exit,     // Esc pressed
}

/// Which screen the browser is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Search,
    Detail,
}

pub struct BrowserApp {
    state: Box<dyn BrowserState>,
    context: BrowserContext,
}

pub struct BrowserContext {
    pub recipes: Vec<Recipe>,
    pub price_db: Arc<PriceDatabase>,
    pub bounds: ServingBounds,
}

pub(crate) trait BrowserState {
    fn render(&self, context: &BrowserContext, frame: &mut Frame);
    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut BrowserContext,
    ) -> Option<Box<dyn BrowserState>>;
    fn screen(&self) -> Screen;

    /// Serving count on screens that have a stepper
    fn servings(&self) -> Option<u32> {
        None
    }
}

impl BrowserApp {
    pub fn new(recipes: Vec<Recipe>, price_db: Arc<PriceDatabase>, bounds: ServingBounds) -> Self {
        Self {
            state: Box::<RecipeSearch>::default(),
            context: BrowserContext {
                recipes,
                price_db,
                bounds,
            },
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        self.state.render(&self.context, frame);
    }

    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        // global exit behavior
        if key == KeyCode::Esc {
            return AppAction::Exit;
        }

        // otherwise let the state handle it
        if let Some(next_state) = self.state.handle_key(key, &mut self.context) {
            self.state = next_state
        }

        AppAction::Continue
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    pub fn servings(&self) -> Option<u32> {
        self.state.servings()
    }
}
