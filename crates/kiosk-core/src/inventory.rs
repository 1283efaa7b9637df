//! # Inventory
//!
//! The fixed stock table of the kiosk.
//!
//! ## Shared Ingredient Handles
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Inventory                                                              │
//! │  ┌──────────────────────────────┐                                       │
//! │  │ "bun"     ──► Rc<Ingredient> ◄──┬── HotDog "Classic"                 │
//! │  │ "sausage" ──► Rc<Ingredient> ◄──┤                                    │
//! │  │ "ketchup" ──► Rc<Ingredient> ◄──┘                                    │
//! │  │  ...                         │                                       │
//! │  └──────────────────────────────┘                                       │
//! │                                                                         │
//! │  HotDogs read the same Ingredient the Inventory owns: prices are live,  │
//! │  and quantities change only through `consume` / `release`.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The kiosk is single-threaded, so the handles are `Rc` and the stock
//! counter is a `Cell`. The identifier set never changes after
//! construction.

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_ingredient_id, validate_unit_price};
use crate::DEFAULT_STOCK;

/// Default stock table: (id, display name, unit price in whole ₽).
const DEFAULT_INGREDIENTS: &[(&str, &str, i64)] = &[
    ("bun", "Bun", 50),
    ("sausage", "Sausage", 50),
    ("ketchup", "Ketchup", 50),
    ("mustard", "Mustard", 20),
    ("mayonnaise", "Mayonnaise", 20),
    ("sweet_onion", "Sweet onion", 10),
    ("jalapeno", "Jalapeño", 5),
    ("chili", "Chili", 20),
    ("pickle", "Pickle", 20),
];

// =============================================================================
// Ingredient
// =============================================================================

/// A stock-keeping unit: one ingredient with a unit price and a remaining
/// quantity.
#[derive(Debug)]
pub struct Ingredient {
    id: String,
    name: String,
    unit_price: Money,
    quantity: Cell<u32>,
}

impl Ingredient {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Self {
        Ingredient {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity: Cell::new(quantity),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Units left in stock.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// True once the last unit has been used.
    pub fn is_missing(&self) -> bool {
        self.quantity.get() == 0
    }

    /// Takes `amount` units out of stock.
    ///
    /// Fails with [`CoreError::OutOfStock`] when fewer than `amount` units
    /// remain; the quantity is left unchanged in that case.
    pub fn consume(&self, amount: u32) -> CoreResult<()> {
        let available = self.quantity.get();
        if amount > available {
            return Err(CoreError::OutOfStock {
                ingredient: self.id.clone(),
                available,
                requested: amount,
            });
        }
        self.quantity.set(available - amount);
        Ok(())
    }

    /// Takes a single unit out of stock.
    #[inline]
    pub fn consume_one(&self) -> CoreResult<()> {
        self.consume(1)
    }

    /// Puts back units that were consumed for a hot dog that was never sold.
    pub(crate) fn release(&self, amount: u32) {
        self.quantity.set(self.quantity.get().saturating_add(amount));
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} pcs.", self.name, self.quantity())
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// Fixed set of ingredients keyed by identifier.
///
/// ## Invariants
/// - Identifiers are unique and fixed at construction
/// - Listing order is construction order
/// - Only quantities change afterwards
#[derive(Debug)]
pub struct Inventory {
    ingredients: Vec<Rc<Ingredient>>,
    index: HashMap<String, usize>,
}

impl Inventory {
    /// Builds an inventory from an explicit ingredient set.
    ///
    /// ## Errors
    /// - `Validation(Duplicate)` if an identifier appears twice
    /// - `Validation(..)` for malformed identifiers or negative prices
    pub fn new<I>(ingredients: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = Ingredient>,
    {
        let mut inventory = Inventory {
            ingredients: Vec::new(),
            index: HashMap::new(),
        };

        for ingredient in ingredients {
            validate_ingredient_id(ingredient.id())?;
            validate_unit_price(ingredient.unit_price())?;

            if inventory.index.contains_key(ingredient.id()) {
                return Err(ValidationError::Duplicate {
                    field: "ingredient id".to_string(),
                    value: ingredient.id().to_string(),
                }
                .into());
            }
            inventory.push(ingredient);
        }

        Ok(inventory)
    }

    /// The kiosk's stock at opening: nine ingredients, 50 units each.
    pub fn with_default_stock() -> Self {
        let mut inventory = Inventory {
            ingredients: Vec::with_capacity(DEFAULT_INGREDIENTS.len()),
            index: HashMap::with_capacity(DEFAULT_INGREDIENTS.len()),
        };
        for (id, name, price) in DEFAULT_INGREDIENTS {
            inventory.push(Ingredient::new(
                *id,
                *name,
                Money::from_major(*price),
                DEFAULT_STOCK,
            ));
        }
        inventory
    }

    fn push(&mut self, ingredient: Ingredient) {
        self.index
            .insert(ingredient.id().to_string(), self.ingredients.len());
        self.ingredients.push(Rc::new(ingredient));
    }

    /// Looks up an ingredient by identifier.
    ///
    /// Fails with [`CoreError::UnknownIngredient`]; never creates entries.
    pub fn lookup(&self, id: &str) -> CoreResult<&Rc<Ingredient>> {
        self.index
            .get(id)
            .map(|&i| &self.ingredients[i])
            .ok_or_else(|| CoreError::UnknownIngredient(id.to_string()))
    }

    /// All ingredients in construction order.
    pub fn list_all(&self) -> &[Rc<Ingredient>] {
        &self.ingredients
    }

    /// Identifiers of the ingredients that have run out.
    pub fn missing(&self) -> Vec<&str> {
        self.ingredients
            .iter()
            .filter(|ingredient| ingredient.is_missing())
            .map(|ingredient| ingredient.id())
            .collect()
    }

    /// Number of ingredient types.
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn single_bun() -> Inventory {
        Inventory::new(vec![Ingredient::new("bun", "Bun", Money::from_major(50), 1)]).unwrap()
    }

    #[test]
    fn test_consume_decrements() {
        let bun = Ingredient::new("bun", "Bun", Money::from_major(50), 3);
        bun.consume(2).unwrap();
        assert_eq!(bun.quantity(), 1);
        bun.consume_one().unwrap();
        assert_eq!(bun.quantity(), 0);
        assert!(bun.is_missing());
    }

    #[test]
    fn test_consume_more_than_available_leaves_quantity_unchanged() {
        let bun = Ingredient::new("bun", "Bun", Money::from_major(50), 2);

        let err = bun.consume(3).unwrap_err();

        assert_eq!(
            err,
            CoreError::OutOfStock {
                ingredient: "bun".to_string(),
                available: 2,
                requested: 3,
            }
        );
        assert_eq!(bun.quantity(), 2);
    }

    #[test]
    fn test_quantity_never_goes_negative() {
        let pickle = Ingredient::new("pickle", "Pickle", Money::from_major(20), 5);
        let mut successes = 0;
        for amount in [2, 4, 1, 3, 2, 1, 1] {
            if pickle.consume(amount).is_ok() {
                successes += amount;
            }
        }
        assert_eq!(successes, 5);
        assert_eq!(pickle.quantity(), 0);
        assert!(pickle.consume_one().is_err());
    }

    #[test]
    fn test_lookup_unknown_leaves_inventory_unchanged() {
        let inventory = Inventory::with_default_stock();

        let err = inventory.lookup("nonexistent").unwrap_err();

        assert_eq!(err, CoreError::UnknownIngredient("nonexistent".to_string()));
        assert_eq!(inventory.len(), 9);
        assert!(inventory
            .list_all()
            .iter()
            .all(|ingredient| ingredient.quantity() == DEFAULT_STOCK));
    }

    #[test]
    fn test_default_stock() {
        let inventory = Inventory::with_default_stock();
        let ids: Vec<&str> = inventory.list_all().iter().map(|i| i.id()).collect();
        assert_eq!(
            ids,
            vec![
                "bun",
                "sausage",
                "ketchup",
                "mustard",
                "mayonnaise",
                "sweet_onion",
                "jalapeno",
                "chili",
                "pickle"
            ]
        );

        let mustard = inventory.lookup("mustard").unwrap();
        assert_eq!(mustard.name(), "Mustard");
        assert_eq!(mustard.unit_price(), Money::from_major(20));
        assert_eq!(mustard.quantity(), DEFAULT_STOCK);
        assert!(inventory.missing().is_empty());
    }

    #[test]
    fn test_missing_lists_exhausted_ingredients() {
        let inventory = single_bun();
        assert!(inventory.missing().is_empty());

        inventory.lookup("bun").unwrap().consume_one().unwrap();

        assert_eq!(inventory.missing(), vec!["bun"]);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Inventory::new(vec![
            Ingredient::new("bun", "Bun", Money::from_major(50), 1),
            Ingredient::new("bun", "Brioche", Money::from_major(60), 1),
        ]);
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_rejects_negative_price() {
        let result = Inventory::new(vec![Ingredient::new(
            "bun",
            "Bun",
            Money::from_minor(-1),
            1,
        )]);
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_release_restores_units() {
        let inventory = single_bun();
        let bun = inventory.lookup("bun").unwrap();
        bun.consume_one().unwrap();
        bun.release(1);
        assert_eq!(bun.quantity(), 1);
    }

    #[test]
    fn test_display() {
        let bun = Ingredient::new("bun", "Bun", Money::from_major(50), 12);
        assert_eq!(bun.to_string(), "Bun: 12 pcs.");
    }
}
