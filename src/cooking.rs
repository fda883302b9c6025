//! Step-by-step walk through one recipe's instructions.

use crate::model::Recipe;

/// Cooking mode for a single recipe.
///
/// The current step is zero-based and always clamped to the instruction list,
/// so moving past either end stays put.
#[derive(Debug, Clone, PartialEq)]
pub struct CookingSession {
    recipe: Recipe,
    step: usize,
}

impl CookingSession {
    pub fn new(recipe: Recipe) -> Self {
        CookingSession { recipe, step: 0 }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// Zero-based index of the current step.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        self.recipe.instructions.len()
    }

    /// The instruction for the current step, or `None` if the recipe has none.
    pub fn current_instruction(&self) -> Option<&str> {
        self.recipe.instructions.get(self.step).map(String::as_str)
    }

    /// Advances one step. Returns false if already on the last step.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.step += 1;
        true
    }

    /// Goes back one step. Returns false if already on the first step.
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.step -= 1;
        true
    }

    pub fn is_first(&self) -> bool {
        self.step == 0
    }

    pub fn is_last(&self) -> bool {
        self.step + 1 >= self.total_steps()
    }

    /// Fraction of steps reached, including the current one.
    pub fn progress(&self) -> f64 {
        match self.total_steps() {
            0 => 0.0,
            total => (self.step + 1) as f64 / total as f64,
        }
    }
}
