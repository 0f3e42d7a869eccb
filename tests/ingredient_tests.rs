#[cfg(test)]
mod tests {
    use recipe_extract::ingredients::extract_ingredients;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn extract(items: &[&str]) -> Vec<recipe_extract::Ingredient> {
        extract_ingredients(&lines(items), 50)
    }

    #[test]
    fn test_chinese_name_quantity_unit() {
        let result = extract(&["鸡腿 300g", "面粉 500 克", "牛奶250ml", "蒜 3瓣"]);
        assert_eq!(result.len(), 4);

        assert_eq!(result[0].name, "鸡腿");
        assert_eq!(result[0].amount, "300");
        assert_eq!(result[0].unit, "g");

        assert_eq!(result[1].name, "面粉");
        assert_eq!(result[1].amount, "500");
        assert_eq!(result[1].unit, "克");

        assert_eq!(result[2].name, "牛奶");
        assert_eq!(result[2].amount, "250");
        assert_eq!(result[2].unit, "ml");

        assert_eq!(result[3].name, "蒜");
        assert_eq!(result[3].amount, "3");
        assert_eq!(result[3].unit, "瓣");
    }

    #[test]
    fn test_loose_chinese_pattern_with_embedded_whitespace() {
        // OCR often injects spaces into Chinese ingredient names
        let result = extract(&["葱 白 段 3厘米", "嫩 豆腐 1块"]);
        assert_eq!(result.len(), 2);

        assert_eq!(result[0].name, "葱白段");
        assert_eq!(result[0].amount, "3");
        assert_eq!(result[0].unit, "厘米");

        assert_eq!(result[1].name, "嫩豆腐");
        assert_eq!(result[1].amount, "1");
        assert_eq!(result[1].unit, "块");
    }

    #[test]
    fn test_qualitative_amounts() {
        let result = extract(&["盐 适量", "香菜少许"]);
        assert_eq!(result.len(), 2);

        assert_eq!(result[0].name, "盐");
        assert_eq!(result[0].amount, "适量");
        assert_eq!(result[0].unit, "");

        assert_eq!(result[1].name, "香菜");
        assert_eq!(result[1].amount, "少许");
        assert_eq!(result[1].unit, "");
    }

    #[test]
    fn test_english_quantity_unit_name() {
        let result = extract(&[
            "2 cups flour",
            "1 tablespoon salt",
            "3 teaspoons ground cinnamon",
            "2.5 ounces dark chocolate",
            "1 pound chicken thighs",
        ]);
        assert_eq!(result.len(), 5);

        assert_eq!(result[0].amount, "2");
        assert_eq!(result[0].unit, "cups");
        assert_eq!(result[0].name, "flour");

        assert_eq!(result[2].amount, "3");
        assert_eq!(result[2].unit, "teaspoons");
        assert_eq!(result[2].name, "ground cinnamon");

        assert_eq!(result[3].amount, "2.5");
        assert_eq!(result[3].unit, "ounces");
        assert_eq!(result[3].name, "dark chocolate");

        assert_eq!(result[4].amount, "1");
        assert_eq!(result[4].unit, "pound");
        assert_eq!(result[4].name, "chicken thighs");
    }

    #[test]
    fn test_food_word_fallback_keeps_line_verbatim() {
        let result = extract(&["minced garlic cloves", "切碎的大蒜"]);
        assert_eq!(result.len(), 2);

        assert_eq!(result[0].name, "minced garlic cloves");
        assert_eq!(result[0].amount, "");
        assert_eq!(result[0].unit, "");

        assert_eq!(result[1].name, "切碎的大蒜");
    }

    #[test]
    fn test_fallback_rejects_long_lines_and_non_food_lines() {
        let result = extract(&[
            "slowly braise the chicken pieces in the covered pot for one hour",
            "wash your hands before starting",
        ]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_section_headers_are_never_ingredients() {
        let result = extract(&["做法", "Instructions:", "Directions", "method"]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_dedup_is_case_insensitive_first_wins() {
        let result = extract(&["2 cups Flour", "1 cup flour"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Flour");
        assert_eq!(result[0].amount, "2");
    }

    #[test]
    fn test_ids_are_assigned_before_dedup() {
        // The duplicate consumes id "2"; dedup does not renumber
        let result = extract(&["2 cups flour", "2 cups flour", "1 tablespoon salt"]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, "1");
        assert_eq!(result[1].id, "3");
    }

    #[test]
    fn test_name_first_english_phrasing_is_not_parsed() {
        // Known limitation: the English pattern reads quantity-unit-name in
        // strict order, so name-first phrasing falls through to the
        // food-word fallback and keeps the whole line as the name.
        let result = extract(&["flour, 2 cups"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "flour, 2 cups");
        assert_eq!(result[0].amount, "");
        assert_eq!(result[0].unit, "");
    }
}
