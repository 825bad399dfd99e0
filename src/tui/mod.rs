pub mod app;
mod recipe_states;
mod stepper;

pub use stepper::ServingStepper;
