use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{BrowserContext, BrowserState, Screen};
use super::stepper::ServingStepper;
use crate::controllers::{quick_search, scale_recipe};
use crate::models::Recipe;

/// Indices into `recipes` of the quick-search hits for `query`.
fn matching_indices(recipes: &[Recipe], query: &str) -> Vec<usize> {
    quick_search(recipes, query)
        .into_iter()
        .filter_map(|hit| recipes.iter().position(|r| std::ptr::eq(r, hit)))
        .collect()
}

#[derive(Default)]
pub(crate) struct RecipeSearch {
    query: String,
    selected: usize,
}

impl RecipeSearch {
    fn with_query(query: String) -> Self {
        Self { query, selected: 0 }
    }
}

impl BrowserState for RecipeSearch {
    fn render(&self, context: &BrowserContext, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(frame.area());

        let input = Paragraph::new(self.query.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Search recipes (Enter to open, Esc to quit)"),
        );
        frame.render_widget(input, chunks[0]);

        let hits = matching_indices(&context.recipes, &self.query);
        let lines: Vec<Line> = hits
            .iter()
            .enumerate()
            .map(|(row, &index)| {
                let recipe = &context.recipes[index];
                let text = match &recipe.region {
                    Some(region) => format!("{} ({})", recipe.title, region),
                    None => recipe.title.clone(),
                };

                if row == self.selected {
                    Line::from(Span::styled(
                        text,
                        Style::default().add_modifier(Modifier::REVERSED),
                    ))
                } else {
                    Line::from(text)
                }
            })
            .collect();

        let plural = if hits.len() == 1 { "" } else { "s" };
        let list = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} receta{}", hits.len(), plural)),
        );
        frame.render_widget(list, chunks[1]);
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        context: &mut BrowserContext,
    ) -> Option<Box<dyn BrowserState>> {
        match key {
            KeyCode::Char(c) => {
                self.query.push(c);
                self.selected = 0;
                None
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.selected = 0;
                None
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                let hits = matching_indices(&context.recipes, &self.query).len();
                if self.selected + 1 < hits {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Enter => {
                let hits = matching_indices(&context.recipes, &self.query);
                let index = *hits.get(self.selected)?;
                let recipe = &context.recipes[index];
                let start = recipe.base_servings().unwrap_or(1);

                Some(Box::new(RecipeDetail {
                    index,
                    stepper: ServingStepper::new(start, context.bounds),
                    query: std::mem::take(&mut self.query),
                }))
            }
            _ => None,
        }
    }

    fn screen(&self) -> Screen {
        Screen::Search
    }
}

pub(crate) struct RecipeDetail {
    index: usize,
    stepper: ServingStepper,
    // Restored when going back to the search screen
    query: String,
}

impl BrowserState for RecipeDetail {
    fn render(&self, context: &BrowserContext, frame: &mut Frame) {
        let recipe = &context.recipes[self.index];
        let servings = self.stepper.current();

        let block = Block::default().borders(Borders::ALL).title(format!(
            "{} - {} porciones (+/- to adjust, Backspace to go back)",
            recipe.title, servings
        ));

        let lines: Vec<Line> = match scale_recipe(recipe, servings, &context.price_db) {
            Ok(scaled) => scaled
                .rows
                .iter()
                .flat_map(|row| {
                    let mut spans = vec![Span::raw(format!("• {}", row.scaled))];
                    if let Some(store) = row.store {
                        spans.push(Span::styled(
                            format!(" [{}]", store),
                            Style::default().add_modifier(Modifier::BOLD),
                        ));
                    }

                    let mut lines = vec![Line::from(spans)];
                    let prices = row.price_line();
                    if !prices.is_empty() {
                        lines.push(Line::from(Span::styled(
                            format!("    {}", prices),
                            Style::default().add_modifier(Modifier::ITALIC),
                        )));
                    }
                    lines
                })
                .collect(),
            Err(e) => vec![Line::from(format!("ERROR: {}", e))],
        };

        frame.render_widget(Paragraph::new(lines).block(block), frame.area());
    }

    fn handle_key(
        &mut self,
        key: KeyCode,
        _context: &mut BrowserContext,
    ) -> Option<Box<dyn BrowserState>> {
        match key {
            KeyCode::Char('+') | KeyCode::Right | KeyCode::Up => {
                self.stepper.increment();
                None
            }
            KeyCode::Char('-') | KeyCode::Left | KeyCode::Down => {
                self.stepper.decrement();
                None
            }
            KeyCode::Backspace => Some(Box::new(RecipeSearch::with_query(std::mem::take(
                &mut self.query,
            )))),
            _ => None,
        }
    }

    fn screen(&self) -> Screen {
        Screen::Detail
    }

    fn servings(&self) -> Option<u32> {
        Some(self.stepper.current())
    }
}
