//! Recipe records and the built-in catalog
//!
//! Recipes are immutable once built. The only "mutation" the app performs is
//! stamping a copy with a saved-date label when it lands in the cookbook.

use serde::{Deserialize, Serialize};

/// Maximum number of ingredient chips shown on a swipe card
pub const CARD_INGREDIENT_PREVIEW: usize = 5;

/// A single recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Image URL
    pub image: String,

    /// Cook time label (e.g., "30 min")
    pub cook_time: String,

    /// Difficulty label (e.g., "Easy")
    pub difficulty: String,

    /// Ingredients in display order
    pub ingredients: Vec<String>,

    /// Instruction steps in cooking order
    pub instructions: Vec<String>,

    /// When the recipe was saved to the cookbook
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_date: Option<String>,
}

impl Recipe {
    /// Create a new recipe with no saved date
    pub fn new(
        id: u32,
        name: impl Into<String>,
        image: impl Into<String>,
        cook_time: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            cook_time: cook_time.into(),
            difficulty: difficulty.into(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            saved_date: None,
        }
    }

    /// Set the ingredient list
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Set the instruction steps
    pub fn with_instructions<I, S>(mut self, instructions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = instructions.into_iter().map(Into::into).collect();
        self
    }

    /// Copy of this recipe stamped with a saved-date label
    pub fn stamped(&self, saved_date: impl Into<String>) -> Self {
        Self {
            saved_date: Some(saved_date.into()),
            ..self.clone()
        }
    }

    /// Check if this copy came from the cookbook
    pub fn is_saved(&self) -> bool {
        self.saved_date.is_some()
    }

    /// Number of instruction steps
    pub fn step_count(&self) -> usize {
        self.instructions.len()
    }

    /// Ingredients shown on the swipe card
    pub fn ingredient_preview(&self) -> &[String] {
        let end = self.ingredients.len().min(CARD_INGREDIENT_PREVIEW);
        &self.ingredients[..end]
    }

    /// Count of ingredients hidden behind the "+N more" chip
    pub fn hidden_ingredient_count(&self) -> usize {
        self.ingredients.len().saturating_sub(CARD_INGREDIENT_PREVIEW)
    }
}

/// The fixed five-recipe catalog used while discovery is mocked
pub fn mock_catalog() -> Vec<Recipe> {
    vec![
        Recipe::new(
            1,
            "Creamy Chicken Pasta",
            "https://images.unsplash.com/photo-1564813227527-a99b83712e45?w=1080",
            "30 min",
            "Easy",
        )
        .with_ingredients([
            "2 chicken breasts, diced",
            "8 oz pasta",
            "1 cup heavy cream",
            "1 cup shredded cheese",
            "2 cloves garlic, minced",
            "1 tbsp olive oil",
            "Salt and pepper to taste",
            "Fresh parsley for garnish",
        ])
        .with_instructions([
            "Cook pasta according to package directions. Drain and set aside.",
            "In a large skillet, heat olive oil over medium-high heat. Add diced chicken and cook until golden brown, about 5-7 minutes.",
            "Add minced garlic and cook for 1 minute until fragrant.",
            "Pour in heavy cream and bring to a simmer. Cook for 3-4 minutes until slightly thickened.",
            "Add shredded cheese and stir until melted and smooth.",
            "Toss cooked pasta with the creamy chicken sauce. Season with salt and pepper.",
            "Garnish with fresh parsley and serve hot.",
        ]),
        Recipe::new(
            2,
            "Avocado Toast Deluxe",
            "https://images.unsplash.com/photo-1676471970358-1cff04452e7b?w=1080",
            "10 min",
            "Easy",
        )
        .with_ingredients([
            "2 slices whole grain bread",
            "1 ripe avocado",
            "2 eggs",
            "Cherry tomatoes, halved",
            "Feta cheese, crumbled",
            "Red pepper flakes",
            "Lemon juice",
            "Salt and pepper",
        ])
        .with_instructions([
            "Toast the bread slices until golden and crispy.",
            "Mash the avocado with lemon juice, salt, and pepper.",
            "Fry or poach eggs to your preference.",
            "Spread mashed avocado on toasted bread.",
            "Top with eggs, cherry tomatoes, and feta cheese.",
            "Sprinkle with red pepper flakes and additional salt if desired.",
            "Serve immediately and enjoy!",
        ]),
        Recipe::new(
            3,
            "Grilled Salmon with Herbs",
            "https://images.unsplash.com/photo-1704007573697-6a516da421ec?w=1080",
            "25 min",
            "Medium",
        )
        .with_ingredients([
            "2 salmon fillets",
            "2 tbsp olive oil",
            "Fresh dill, chopped",
            "Fresh parsley, chopped",
            "2 cloves garlic, minced",
            "Lemon slices",
            "Salt and pepper",
            "Asparagus for serving",
        ])
        .with_instructions([
            "Preheat grill or grill pan to medium-high heat.",
            "Mix olive oil, garlic, dill, and parsley in a small bowl.",
            "Season salmon fillets with salt and pepper.",
            "Brush herb mixture generously over salmon.",
            "Grill salmon skin-side down for 4-5 minutes.",
            "Flip carefully and grill for another 3-4 minutes until cooked through.",
            "Serve with grilled asparagus and lemon slices.",
        ]),
        Recipe::new(
            4,
            "Asian Vegetable Stir Fry",
            "https://images.unsplash.com/photo-1464500650248-1a4b45debb9f?w=1080",
            "20 min",
            "Easy",
        )
        .with_ingredients([
            "Mixed vegetables (bell peppers, broccoli, carrots)",
            "2 tbsp soy sauce",
            "1 tbsp sesame oil",
            "2 cloves garlic, minced",
            "1 tsp ginger, grated",
            "2 tbsp vegetable oil",
            "Sesame seeds for garnish",
            "Cooked rice for serving",
        ])
        .with_instructions([
            "Heat vegetable oil in a large wok or skillet over high heat.",
            "Add garlic and ginger, stir-fry for 30 seconds.",
            "Add harder vegetables like carrots and broccoli first, stir-fry for 3 minutes.",
            "Add softer vegetables like bell peppers, continue stir-frying.",
            "Pour in soy sauce and sesame oil, toss everything together.",
            "Cook for 2-3 more minutes until vegetables are tender-crisp.",
            "Garnish with sesame seeds and serve over rice.",
        ]),
        Recipe::new(
            5,
            "Gourmet Burger & Fries",
            "https://images.unsplash.com/photo-1627378378955-a3f4e406c5de?w=1080",
            "35 min",
            "Medium",
        )
        .with_ingredients([
            "1 lb ground beef",
            "Burger buns",
            "Cheddar cheese slices",
            "Lettuce, tomato, onion",
            "Pickles",
            "Special sauce (mayo, ketchup, relish)",
            "4 potatoes for fries",
            "Salt and pepper",
        ])
        .with_instructions([
            "Cut potatoes into fries and soak in cold water for 15 minutes.",
            "Form ground beef into patties, season with salt and pepper.",
            "Heat grill or skillet to medium-high heat.",
            "Cook burger patties for 4-5 minutes per side.",
            "Add cheese in last minute to melt.",
            "Fry potato fries in oil until golden and crispy.",
            "Assemble burgers with sauce, lettuce, tomato, pickles, and serve with fries.",
        ]),
    ]
}
