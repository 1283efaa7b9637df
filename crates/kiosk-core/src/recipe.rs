//! # Standard Recipes
//!
//! Static recipe data offered on the "standard recipe" menu.

use crate::error::{CoreError, CoreResult};

/// A named, ordered list of ingredient identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub name: &'static str,
    pub ingredients: &'static [&'static str],
}

/// Recipes in menu order.
pub const STANDARD_RECIPES: &[Recipe] = &[
    Recipe {
        name: "Classic",
        ingredients: &["bun", "sausage", "ketchup", "mustard"],
    },
    Recipe {
        name: "Spicy",
        ingredients: &["bun", "sausage", "chili", "jalapeno"],
    },
    Recipe {
        name: "Sweet",
        ingredients: &["bun", "sausage", "sweet_onion", "ketchup"],
    },
];

/// Finds a standard recipe by exact name.
pub fn find_recipe(name: &str) -> CoreResult<&'static Recipe> {
    STANDARD_RECIPES
        .iter()
        .find(|recipe| recipe.name == name)
        .ok_or_else(|| CoreError::UnknownRecipe(name.to_string()))
}
