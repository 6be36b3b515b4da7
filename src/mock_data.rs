use crate::models::NewProduct;

fn labels(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

/// Sample sneaker catalog used to seed an empty store.
pub fn sample_catalog() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "Nike Air Max 270".to_string(),
            price: "3.500.000₫".to_string(),
            image: "https://static.nike.com/a/images/t_PDP_864_v1/f_auto,q_auto:eco/air-max-270-shoes-KkLcGR.png".to_string(),
            description: Some("The largest Air unit yet under the heel, for all-day comfort with a modern silhouette.".to_string()),
            category: Some("Lifestyle".to_string()),
            sizes: labels(&["38", "39", "40", "41", "42", "43", "44"]),
            colors: labels(&["Black/White", "Navy", "Grey"]),
            stock: 50,
        },
        NewProduct {
            name: "Nike Air Force 1".to_string(),
            price: "2.900.000₫".to_string(),
            image: "https://static.nike.com/a/images/t_PDP_864_v1/f_auto,q_auto:eco/air-force-1-07-shoes-WrLlWX.png".to_string(),
            description: Some("A sneaker-culture icon with a durable rubber cupsole and timeless lines.".to_string()),
            category: Some("Lifestyle".to_string()),
            sizes: labels(&["38", "39", "40", "41", "42", "43", "44", "45"]),
            colors: labels(&["White", "Black", "White/Black"]),
            stock: 75,
        },
        NewProduct {
            name: "Nike Dunk Low".to_string(),
            price: "3.200.000₫".to_string(),
            image: "https://static.nike.com/a/images/t_PDP_864_v1/f_auto,q_auto:eco/dunk-low-shoes-7MmlFJ.png".to_string(),
            description: Some("Retro basketball styling that moved from the court to the street.".to_string()),
            category: Some("Lifestyle".to_string()),
            sizes: labels(&["38", "39", "40", "41", "42", "43"]),
            colors: labels(&["Panda", "Blue/White", "Red/White"]),
            stock: 40,
        },
        NewProduct {
            name: "Nike React Infinity".to_string(),
            price: "4.100.000₫".to_string(),
            image: "https://static.nike.com/a/images/t_PDP_864_v1/f_auto,q_auto:eco/react-infinity-run-flyknit-3-running-shoe-5MmlFJ.png".to_string(),
            description: Some("React foam cushioning built to help keep runners running.".to_string()),
            category: Some("Running".to_string()),
            sizes: labels(&["39", "40", "41", "42", "43", "44"]),
            colors: labels(&["Black/White", "Blue", "Orange"]),
            stock: 30,
        },
        NewProduct {
            name: "Nike Blazer Mid".to_string(),
            price: "3.800.000₫".to_string(),
            image: "https://static.nike.com/a/images/t_PDP_864_v1/f_auto,q_auto:eco/blazer-mid-77-vintage-shoe-nw30B2.png".to_string(),
            description: Some("Vintage '77 styling with a premium leather upper and a mid-cut collar.".to_string()),
            category: Some("Lifestyle".to_string()),
            sizes: labels(&["38", "39", "40", "41", "42", "43", "44"]),
            colors: labels(&["White/Black", "Mint", "Pink"]),
            stock: 45,
        },
        NewProduct {
            name: "Nike Pegasus 40".to_string(),
            price: "3.600.000₫".to_string(),
            image: "https://static.nike.com/a/images/t_PDP_864_v1/f_auto,q_auto:eco/pegasus-40-running-shoe-5MmlFJ.png".to_string(),
            description: Some("Air Zoom and React foam balanced for every distance.".to_string()),
            category: Some("Running".to_string()),
            sizes: labels(&["39", "40", "41", "42", "43", "44", "45"]),
            colors: labels(&["Black", "Navy", "Grey/Orange"]),
            stock: 60,
        },
    ]
}
