//! Fixed category table for the category strip.

use once_cell::sync::Lazy;

/// One selectable category.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Display name shown in the strip.
    pub name: &'static str,
    /// Stable label matched against `BusinessRecord::category`.
    pub slug: &'static str,
}

static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category { name: "Restaurants", slug: "restaurants" },
        Category { name: "Cafes", slug: "cafes" },
        Category { name: "Shops", slug: "shops" },
        Category { name: "Services", slug: "services" },
        Category { name: "Health", slug: "health" },
        Category { name: "Beauty", slug: "beauty" },
        Category { name: "Education", slug: "education" },
        Category { name: "Entertainment", slug: "entertainment" },
    ]
});

/// All selectable categories, in strip order.
///
/// The strip prepends its own "All Categories" entry; that sentinel is
/// represented as `None` in the filter criteria, not as a row here.
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_nonempty_and_unique() {
        let cats = categories();
        assert!(!cats.is_empty());

        let mut slugs: Vec<_> = cats.iter().map(|c| c.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), cats.len());
    }
}
