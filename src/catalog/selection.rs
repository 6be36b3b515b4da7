use crate::models::Product;

/// What the shopper has picked on a product detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSelection {
    sizes: Vec<String>,
    colors: Vec<String>,
    size: Option<String>,
    color: Option<String>,
    quantity: u32,
}

impl ProductSelection {
    /// Starts on the first offered size and color with a quantity of one.
    pub fn for_product(product: &Product) -> Self {
        let sizes = product.sizes.clone().unwrap_or_default();
        let colors = product.colors.clone().unwrap_or_default();
        ProductSelection {
            size: sizes.first().cloned(),
            color: colors.first().cloned(),
            sizes,
            colors,
            quantity: 1,
        }
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns false, leaving the selection alone, for sizes not on offer.
    pub fn select_size(&mut self, size: &str) -> bool {
        if !self.sizes.iter().any(|s| s == size) {
            return false;
        }
        self.size = Some(size.to_string());
        true
    }

    pub fn select_color(&mut self, color: &str) -> bool {
        if !self.colors.iter().any(|c| c == color) {
            return false;
        }
        self.color = Some(color.to_string());
        true
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }
}
