use crate::{
    category::{Category, CATEGORY_COUNT},
    chart::multiplier,
};

/// Combined damage multipliers taken by a defender with one or two
/// categories, indexed by attacking category.  Dual categories multiply, so
/// values range over 0, 0.25, 0.5, 1, 2 and 4.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Defenses([f64; CATEGORY_COUNT]);

impl Defenses {
    pub fn new(categories: &[Category]) -> Self {
        let mut out = [1.0; CATEGORY_COUNT];
        for attacking in Category::all() {
            out[attacking.index()] = categories
                .iter()
                .map(|&defending| multiplier(attacking, defending))
                .product();
        }
        Defenses(out)
    }

    /// Iterates over `(attacking category, multiplier)` in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::all().map(move |c| (c, self.0[c.index()]))
    }
}

impl std::ops::Index<Category> for Defenses {
    type Output = f64;
    fn index(&self, index: Category) -> &Self::Output {
        &self.0[index.index()]
    }
}
