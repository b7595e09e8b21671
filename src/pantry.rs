use crate::error::{Error, Result};
use crate::model::{default_quantity, PantryIngredient};

/// The ingredients a user has on hand, in the order they were added
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pantry {
    items: Vec<PantryIngredient>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pantry from the `fridge` names of a recommendation response.
    /// Each ingredient gets a quantity of 1.
    pub fn from_fridge<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pantry = Self::new();
        for name in names {
            // Blank and repeated names are dropped
            let _ = pantry.add(name, default_quantity());
        }
        pantry
    }

    /// Add an ingredient. The name is trimmed; blank names and names already
    /// present are rejected.
    pub fn add(&mut self, name: impl Into<String>, quantity: f64) -> Result<&PantryIngredient> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput("ingredient name is empty".to_string()));
        }
        if self.contains(name) {
            return Err(Error::Duplicate(name.to_string()));
        }
        self.items.push(PantryIngredient {
            name: name.to_string(),
            quantity,
        });
        Ok(&self.items[self.items.len() - 1])
    }

    /// Remove the ingredient with exactly this name. Returns whether one was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.name != name);
        self.items.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    /// Ingredient names in pantry order, as consumed by the matcher
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }

    pub fn items(&self) -> &[PantryIngredient] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<PantryIngredient>> for Pantry {
    /// Items go through [`Pantry::add`]: names are trimmed, blank names are
    /// dropped and only the first of repeated names is kept.
    fn from(items: Vec<PantryIngredient>) -> Self {
        let mut pantry = Self::new();
        for item in items {
            let _ = pantry.add(item.name, item.quantity);
        }
        pantry
    }
}
