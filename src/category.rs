//! Defines [`CategoryIndex`], the ordered list of categories for which index
//! pages are generated.

use std::collections::HashMap;
use std::iter::FromIterator;

/// The distinct category names of a site, sorted by `str` ordering
/// (lexicographic over code points). Names are kept exactly as the host
/// supplied them; nothing is escaped or slugified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryIndex<'a> {
    names: Vec<&'a str>,
}

impl<'a> CategoryIndex<'a> {
    /// Builds the index from the host's category-to-posts mapping.
    pub fn new<P>(categories: &'a HashMap<String, Vec<P>>) -> CategoryIndex<'a> {
        categories.keys().map(String::as_str).collect()
    }

    /// The sorted category names.
    pub fn names(&self) -> &[&'a str] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.names.iter().copied()
    }
}

impl<'a> FromIterator<&'a str> for CategoryIndex<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut names: Vec<&'a str> = iter.into_iter().collect();
        names.sort_unstable();
        names.dedup();
        CategoryIndex { names }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sorted_and_deduplicated() {
        let index: CategoryIndex =
            vec!["jekyll", "Category Pages Plugin", "jekyll", "好的主意", "alpha"]
                .into_iter()
                .collect();
        assert_eq!(
            &["Category Pages Plugin", "alpha", "jekyll", "好的主意"],
            index.names()
        );
    }

    #[test]
    fn test_from_map() {
        let mut categories: HashMap<String, Vec<u32>> = HashMap::new();
        categories.insert("zeta".to_owned(), vec![1]);
        categories.insert("Great < & Greater".to_owned(), vec![2, 3]);
        categories.insert("beta".to_owned(), vec![4]);

        let index = CategoryIndex::new(&categories);
        assert_eq!(
            vec!["Great < & Greater", "beta", "zeta"],
            index.iter().collect::<Vec<_>>()
        );
        assert_eq!(3, index.len());
    }

    #[test]
    fn test_empty() {
        let categories: HashMap<String, Vec<u32>> = HashMap::new();
        let index = CategoryIndex::new(&categories);
        assert!(index.is_empty());
        assert!(index.names().is_empty());
    }
}
