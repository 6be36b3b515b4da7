use crate::models::Product;

fn contains_folded(haystack: Option<&str>, needle: &str) -> bool {
    haystack.map_or(false, |h| h.to_lowercase().contains(needle))
}

pub fn matches_category(product: &Product, category: &str) -> bool {
    contains_folded(product.category.as_deref(), &category.to_lowercase())
}

pub fn matches_search(product: &Product, query: &str) -> bool {
    let query = query.to_lowercase();
    contains_folded(Some(&product.name), &query)
        || contains_folded(product.description.as_deref(), &query)
        || contains_folded(product.category.as_deref(), &query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(name: &str, description: Option<&str>, category: Option<&str>) -> Product {
        let now = Utc::now();
        Product {
            id: 1,
            name: name.to_string(),
            price: "1".to_string(),
            image: "x".to_string(),
            description: description.map(str::to_string),
            category: category.map(str::to_string),
            sizes: None,
            colors: None,
            stock: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn category_match_ignores_case_and_allows_substrings() {
        let p = product("Pegasus", None, Some("Running"));
        assert!(matches_category(&p, "running"));
        assert!(matches_category(&p, "RUN"));
        assert!(!matches_category(&p, "lifestyle"));
        assert!(!matches_category(&product("Dunk", None, None), "running"));
    }

    #[test]
    fn search_checks_name_description_and_category() {
        assert!(matches_search(&product("NIKE Dunk", None, None), "nike"));
        assert!(matches_search(&product("Dunk", Some("by Nike"), None), "nike"));
        assert!(matches_search(&product("Dunk", None, Some("nike sb")), "Nike"));
        assert!(!matches_search(&product("Dunk", Some("retro"), Some("Lifestyle")), "nike"));
    }
}
