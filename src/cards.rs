use crate::matcher::{find_matches, highlight, render_escaped, Match, Segment};
use crate::model::Recipe;
use serde::Serialize;

/// A recipe annotated with the pantry ingredients it uses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeCard {
    pub recipe: Recipe,
    pub matches: Vec<Match>,
    pub segments: Vec<Segment>,
}

impl RecipeCard {
    pub fn new<S: AsRef<str>>(recipe: Recipe, pantry_names: &[S]) -> Self {
        let matches = find_matches(&recipe.description, pantry_names);
        let segments = highlight(&recipe.description, pantry_names);
        Self {
            recipe,
            matches,
            segments,
        }
    }

    /// Number of pantry ingredients the recipe uses, counting duplicates
    pub fn used_count(&self) -> usize {
        self.matches.len()
    }

    /// Ingredient list as escaped HTML with matches wrapped in `<mark>`
    pub fn description_html(&self) -> String {
        render_escaped(&self.segments)
    }

    /// Ingredient list for terminals, matches in brackets
    pub fn description_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Annotate every recipe against the same pantry
pub fn annotate<S: AsRef<str>>(recipes: Vec<Recipe>, pantry_names: &[S]) -> Vec<RecipeCard> {
    recipes
        .into_iter()
        .map(|recipe| RecipeCard::new(recipe, pantry_names))
        .collect()
}
