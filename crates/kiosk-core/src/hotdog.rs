//! # Hot Dogs
//!
//! The assembled product and the builder that consumes stock to make it.
//!
//! ## Build Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HotDogBuilder::new(&inventory)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  add_ingredient("bun") ──► lookup ──► consume 1 ──► append             │
//! │  add_ingredient("sausage") ...                                          │
//! │       │                                                                 │
//! │       ├── error? ──► builder dropped ──► every consumed unit released   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  build() ──► HotDog (stock stays consumed)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed build leaves the inventory exactly as it was. A built [`HotDog`]
//! owns the units it consumed: dropping it on its own does not return them.
//! Stock is only released by an unfinished builder or an unpaid `Order`.

use std::fmt;
use std::mem;
use std::rc::Rc;

use crate::error::CoreResult;
use crate::inventory::{Ingredient, Inventory};
use crate::money::Money;
use crate::recipe::find_recipe;
use crate::CUSTOM_HOTDOG_NAME;

// =============================================================================
// HotDog
// =============================================================================

/// An assembled hot dog.
///
/// Holds shared handles to the inventory's ingredients, so [`HotDog::price`]
/// always reflects the current unit prices.
#[derive(Debug)]
pub struct HotDog {
    name: String,
    ingredients: Vec<Rc<Ingredient>>,
}

impl HotDog {
    fn unnamed() -> Self {
        HotDog {
            name: String::new(),
            ingredients: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the hot dog, e.g. after a recipe.
    pub fn relabel(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Ingredients in the order they were added.
    pub fn ingredients(&self) -> &[Rc<Ingredient>] {
        &self.ingredients
    }

    pub fn ingredient_names(&self) -> Vec<&str> {
        self.ingredients.iter().map(|i| i.name()).collect()
    }

    /// Sum of the unit prices of every ingredient.
    pub fn price(&self) -> Money {
        self.ingredients.iter().map(|i| i.unit_price()).sum()
    }

    /// `"<name>: <ingredients>. Price: <price>"`
    pub fn describe(&self) -> String {
        format!(
            "{}: {}. Price: {}",
            self.name,
            self.ingredient_names().join(", "),
            self.price()
        )
    }

    /// Returns one unit of every ingredient to stock.
    pub(crate) fn release_stock(&mut self) {
        for ingredient in self.ingredients.drain(..) {
            ingredient.release(1);
        }
    }
}

impl fmt::Display for HotDog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// =============================================================================
// HotDogBuilder
// =============================================================================

/// Assembles one hot dog from an inventory.
///
/// Single-use: [`build`](HotDogBuilder::build) consumes the builder, and a
/// builder dropped before `build` releases the stock it took.
#[derive(Debug)]
pub struct HotDogBuilder<'a> {
    inventory: &'a Inventory,
    hotdog: HotDog,
}

impl<'a> HotDogBuilder<'a> {
    pub fn new(inventory: &'a Inventory) -> Self {
        HotDogBuilder {
            inventory,
            hotdog: HotDog {
                name: CUSTOM_HOTDOG_NAME.to_string(),
                ..HotDog::unnamed()
            },
        }
    }

    /// Takes one unit of `id` from stock and adds it to the hot dog.
    ///
    /// ## Errors
    /// - `UnknownIngredient` if `id` is not stocked
    /// - `OutOfStock` if no unit is left
    ///
    /// Units consumed by earlier calls stay reserved by this builder.
    pub fn add_ingredient(&mut self, id: &str) -> CoreResult<&mut Self> {
        let ingredient = self.inventory.lookup(id)?;
        ingredient.consume_one()?;
        self.hotdog.ingredients.push(Rc::clone(ingredient));
        Ok(self)
    }

    /// Number of ingredients added so far.
    pub fn len(&self) -> usize {
        self.hotdog.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotdog.ingredients.is_empty()
    }

    /// Finishes the hot dog; consumed stock is kept.
    pub fn build(mut self) -> HotDog {
        // the builder's Drop then sees an empty hot dog and releases nothing
        mem::replace(&mut self.hotdog, HotDog::unnamed())
    }

    /// Builds the named standard recipe and labels the hot dog after it.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::{HotDogBuilder, Inventory, Money};
    ///
    /// let inventory = Inventory::with_default_stock();
    /// let classic = HotDogBuilder::from_recipe(&inventory, "Classic").unwrap();
    ///
    /// assert_eq!(classic.name(), "Classic");
    /// assert_eq!(classic.price(), Money::from_major(170));
    /// ```
    pub fn from_recipe(inventory: &'a Inventory, recipe_name: &str) -> CoreResult<HotDog> {
        let recipe = find_recipe(recipe_name)?;
        let mut hotdog = Self::custom(inventory, recipe.ingredients)?;
        hotdog.relabel(recipe.name);
        Ok(hotdog)
    }

    /// Builds a hot dog from a free-form ingredient list.
    pub fn custom<S: AsRef<str>>(inventory: &'a Inventory, ids: &[S]) -> CoreResult<HotDog> {
        let mut builder = HotDogBuilder::new(inventory);
        for id in ids {
            builder.add_ingredient(id.as_ref())?;
        }
        Ok(builder.build())
    }
}

impl Drop for HotDogBuilder<'_> {
    fn drop(&mut self) {
        self.hotdog.release_stock();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::DEFAULT_STOCK;

    fn quantity(inventory: &Inventory, id: &str) -> u32 {
        inventory.lookup(id).unwrap().quantity()
    }

    #[test]
    fn test_second_bun_is_out_of_stock() {
        let inventory = Inventory::new(vec![Ingredient::new(
            "bun",
            "Bun",
            Money::from_major(50),
            1,
        )])
        .unwrap();
        let mut builder = HotDogBuilder::new(&inventory);

        builder.add_ingredient("bun").unwrap();
        assert_eq!(quantity(&inventory, "bun"), 0);

        let err = builder.add_ingredient("bun").unwrap_err();
        assert_eq!(
            err,
            CoreError::OutOfStock {
                ingredient: "bun".to_string(),
                available: 0,
                requested: 1,
            }
        );
        assert_eq!(quantity(&inventory, "bun"), 0);
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_classic_recipe() {
        let inventory = Inventory::with_default_stock();

        let hotdog = HotDogBuilder::from_recipe(&inventory, "Classic").unwrap();

        assert_eq!(hotdog.name(), "Classic");
        assert_eq!(
            hotdog.ingredient_names(),
            vec!["Bun", "Sausage", "Ketchup", "Mustard"]
        );
        // 50 + 50 + 50 + 20
        assert_eq!(hotdog.price(), Money::from_major(170));
        for id in ["bun", "sausage", "ketchup", "mustard"] {
            assert_eq!(quantity(&inventory, id), DEFAULT_STOCK - 1);
        }
        assert_eq!(quantity(&inventory, "pickle"), DEFAULT_STOCK);
    }

    #[test]
    fn test_dropped_builder_releases_stock() {
        let inventory = Inventory::with_default_stock();
        {
            let mut builder = HotDogBuilder::new(&inventory);
            builder
                .add_ingredient("bun")
                .unwrap()
                .add_ingredient("pickle")
                .unwrap();
            assert_eq!(quantity(&inventory, "bun"), DEFAULT_STOCK - 1);
        }
        assert_eq!(quantity(&inventory, "bun"), DEFAULT_STOCK);
        assert_eq!(quantity(&inventory, "pickle"), DEFAULT_STOCK);
    }

    #[test]
    fn test_built_hotdog_keeps_its_stock() {
        let inventory = Inventory::with_default_stock();
        let hotdog = HotDogBuilder::from_recipe(&inventory, "Classic").unwrap();
        assert_eq!(quantity(&inventory, "bun"), DEFAULT_STOCK - 1);

        drop(hotdog);
        assert_eq!(quantity(&inventory, "bun"), DEFAULT_STOCK - 1);
        assert_eq!(quantity(&inventory, "mustard"), DEFAULT_STOCK - 1);
    }

    #[test]
    fn test_failed_recipe_leaves_inventory_untouched() {
        let inventory = Inventory::with_default_stock();
        inventory
            .lookup("jalapeno")
            .unwrap()
            .consume(DEFAULT_STOCK)
            .unwrap();

        let err = HotDogBuilder::from_recipe(&inventory, "Spicy").unwrap_err();

        assert!(matches!(err, CoreError::OutOfStock { ref ingredient, .. } if ingredient == "jalapeno"));
        for id in ["bun", "sausage", "chili"] {
            assert_eq!(quantity(&inventory, id), DEFAULT_STOCK);
        }
    }

    #[test]
    fn test_custom_with_unknown_ingredient() {
        let inventory = Inventory::with_default_stock();

        let err = HotDogBuilder::custom(&inventory, &["bun", "anchovy"]).unwrap_err();

        assert_eq!(err, CoreError::UnknownIngredient("anchovy".to_string()));
        assert_eq!(quantity(&inventory, "bun"), DEFAULT_STOCK);
    }

    #[test]
    fn test_custom_hotdog() {
        let inventory = Inventory::with_default_stock();

        let hotdog =
            HotDogBuilder::custom(&inventory, &["bun", "sausage", "pickle", "pickle"]).unwrap();

        assert_eq!(hotdog.name(), CUSTOM_HOTDOG_NAME);
        assert_eq!(hotdog.price(), Money::from_major(140));
        assert_eq!(quantity(&inventory, "pickle"), DEFAULT_STOCK - 2);
    }

    #[test]
    fn test_unknown_recipe() {
        let inventory = Inventory::with_default_stock();
        assert_eq!(
            HotDogBuilder::from_recipe(&inventory, "Deluxe").unwrap_err(),
            CoreError::UnknownRecipe("Deluxe".to_string())
        );
    }

    #[test]
    fn test_describe_and_relabel() {
        let inventory = Inventory::with_default_stock();
        let mut hotdog = HotDogBuilder::from_recipe(&inventory, "Sweet").unwrap();
        assert_eq!(
            hotdog.describe(),
            "Sweet: Bun, Sausage, Sweet onion, Ketchup. Price: 160.00₽"
        );

        hotdog.relabel("House special");
        assert_eq!(hotdog.name(), "House special");
        assert_eq!(hotdog.to_string(), hotdog.describe());
    }

    #[test]
    fn test_hotdog_shares_ingredient_with_inventory() {
        let inventory = Inventory::with_default_stock();
        let hotdog = HotDogBuilder::from_recipe(&inventory, "Classic").unwrap();
        assert!(Rc::ptr_eq(
            &hotdog.ingredients()[0],
            inventory.lookup("bun").unwrap()
        ));
    }
}
