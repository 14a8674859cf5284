use recipe_extract::extract_recipe;

fn recipe_page(json_ld: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head>
            <script type="application/ld+json">
                {json_ld}
            </script>
        </head>
        <body></body>
        </html>
        "#
    )
}

#[test]
fn maps_all_schema_fields() {
    let html = recipe_page(
        r#"
        {
            "@context": "https://schema.org",
            "@type": "Recipe",
            "name": "Weeknight Chili",
            "description": "Ready in under an hour",
            "image": "https://example.com/chili.jpg",
            "prepTime": "PT20M",
            "cookTime": "PT40M",
            "totalTime": "PT1H",
            "recipeYield": "6 servings",
            "recipeCategory": ["Dinner", "Main Course"],
            "recipeCuisine": "Tex-Mex",
            "recipeIngredient": ["1 lb ground beef", "2 cans kidney beans", "Salt to taste"],
            "recipeInstructions": [
                {"@type": "HowToStep", "text": "Brown the beef"},
                {"@type": "HowToStep", "text": "Add beans and simmer"}
            ]
        }
        "#,
    );

    let recipe = extract_recipe(&html);

    assert_eq!(recipe.title, "Weeknight Chili");
    assert_eq!(recipe.description.as_deref(), Some("Ready in under an hour"));
    assert_eq!(recipe.image.as_deref(), Some("https://example.com/chili.jpg"));
    assert_eq!(recipe.prep_time_minutes, 20);
    assert_eq!(recipe.cook_time_minutes, 40);
    assert_eq!(recipe.total_time_minutes, 60);
    assert_eq!(recipe.servings, 6);

    // Categories first, cuisines after, order preserved
    assert_eq!(recipe.tags, vec!["Dinner", "Main Course", "Tex-Mex"]);

    assert_eq!(recipe.ingredients.len(), 3);
    assert_eq!(recipe.ingredients[0].amount, Some(1.0));
    assert_eq!(recipe.ingredients[0].unit.as_deref(), Some("lb"));
    assert_eq!(recipe.ingredients[0].name, "ground beef");
    assert_eq!(recipe.ingredients[1].amount, Some(2.0));
    assert_eq!(recipe.ingredients[1].unit.as_deref(), Some("cans"));
    assert_eq!(recipe.ingredients[1].name, "kidney beans");
    assert_eq!(recipe.ingredients[2].amount, None);
    assert_eq!(recipe.ingredients[2].name, "Salt to taste");

    assert_eq!(recipe.instructions[0].instruction, "Brown the beef");
    assert_eq!(recipe.instructions[1].instruction, "Add beans and simmer");
}

#[test]
fn recipe_yield_variations() {
    // Plain string with text
    let recipe = extract_recipe(&recipe_page(
        r#"{"@type": "Recipe", "name": "A", "recipeYield": "8 portions"}"#,
    ));
    assert_eq!(recipe.servings, 8);

    // Bare number
    let recipe = extract_recipe(&recipe_page(
        r#"{"@type": "Recipe", "name": "B", "recipeYield": 12}"#,
    ));
    assert_eq!(recipe.servings, 12);

    // Array: first element counts
    let recipe = extract_recipe(&recipe_page(
        r#"{"@type": "Recipe", "name": "C", "recipeYield": ["15", "15 pieces"]}"#,
    ));
    assert_eq!(recipe.servings, 15);

    // No digits anywhere: default applies
    let recipe = extract_recipe(&recipe_page(
        r#"{"@type": "Recipe", "name": "D", "recipeYield": "a large batch"}"#,
    ));
    assert_eq!(recipe.servings, 4);

    // Absent entirely: default applies
    let recipe = extract_recipe(&recipe_page(r#"{"@type": "Recipe", "name": "E"}"#));
    assert_eq!(recipe.servings, 4);
}

#[test]
fn tags_keep_duplicates() {
    let recipe = extract_recipe(&recipe_page(
        r#"
        {
            "@type": "Recipe",
            "name": "Double Tagged",
            "recipeCategory": ["Italian", "Dinner"],
            "recipeCuisine": ["Italian"]
        }
        "#,
    ));
    assert_eq!(recipe.tags, vec!["Italian", "Dinner", "Italian"]);
}

#[test]
fn instruction_strings_and_objects_mix() {
    let recipe = extract_recipe(&recipe_page(
        r#"
        {
            "@type": "Recipe",
            "name": "Mixed Steps",
            "recipeInstructions": [
                "Preheat the oven",
                {"@type": "HowToStep", "text": "Mix the batter"},
                {"@type": "HowToStep", "name": "Bake until golden"}
            ]
        }
        "#,
    ));
    let steps: Vec<&str> = recipe
        .instructions
        .iter()
        .map(|s| s.instruction.as_str())
        .collect();
    assert_eq!(
        steps,
        vec!["Preheat the oven", "Mix the batter", "Bake until golden"]
    );
}

#[test]
fn single_instruction_string_becomes_one_step() {
    let recipe = extract_recipe(&recipe_page(
        r#"{"@type": "Recipe", "name": "One Step", "recipeInstructions": "Stir everything together."}"#,
    ));
    assert_eq!(recipe.instructions.len(), 1);
    assert_eq!(recipe.instructions[0].instruction, "Stir everything together.");
}

#[test]
fn image_list_of_objects_takes_first_url() {
    let recipe = extract_recipe(&recipe_page(
        r#"
        {
            "@type": "Recipe",
            "name": "Pictured",
            "image": [
                {"@type": "ImageObject", "url": "https://example.com/first.jpg"},
                {"@type": "ImageObject", "url": "https://example.com/second.jpg"}
            ]
        }
        "#,
    ));
    assert_eq!(recipe.image.as_deref(), Some("https://example.com/first.jpg"));
}

#[test]
fn entities_are_decoded_in_text_fields() {
    let recipe = extract_recipe(&recipe_page(
        r#"
        {
            "@type": "Recipe",
            "name": "Mac &amp; Cheese",
            "description": "Bake at 350&deg;F until bubbling",
            "recipeIngredient": ["&frac12; cup butter"],
            "recipeInstructions": ["Don&#39;t overcook the pasta"]
        }
        "#,
    ));
    assert_eq!(recipe.title, "Mac & Cheese");
    assert_eq!(
        recipe.description.as_deref(),
        Some("Bake at 350\u{b0}F until bubbling")
    );
    assert_eq!(recipe.ingredients[0].name, "\u{bd} cup butter");
    assert_eq!(
        recipe.instructions[0].instruction,
        "Don't overcook the pasta"
    );
}

#[test]
fn free_text_durations_fall_back_to_digits() {
    let recipe = extract_recipe(&recipe_page(
        r#"{"@type": "Recipe", "name": "Loose Times", "prepTime": "35 minutes", "cookTime": "about 20 mins"}"#,
    ));
    assert_eq!(recipe.prep_time_minutes, 35);
    assert_eq!(recipe.cook_time_minutes, 20);
}
