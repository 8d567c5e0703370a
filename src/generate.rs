//! Exports [`PageGenerator`], which turns the host's category-to-posts
//! mapping into the full list of [`CategoryPage`]s: one page per category
//! when pagination is disabled, or a linked sequence of pages per category
//! when it is enabled.

use crate::category::CategoryIndex;
use crate::config::Config;
use crate::link::{link, page_ids};
use crate::page::{CategoryPage, Paginator};
use crate::paginate::plan_pages;
use rayon::prelude::*;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt;
use std::num::NonZeroUsize;

/// Generates category index pages. A generator is only constructed from a
/// valid page size, so generating pages cannot fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageGenerator {
    /// The number of posts per page, or `None` when pagination is disabled.
    page_size: Option<NonZeroUsize>,
}

impl PageGenerator {
    /// Constructs a generator from the raw `paginate` setting. Returns
    /// [`Error::InvalidPageSize`] if pagination is requested with a page size
    /// less than one.
    pub fn new(page_size: Option<i64>) -> Result<PageGenerator> {
        Ok(PageGenerator {
            page_size: page_size.map(validate_page_size).transpose()?,
        })
    }

    /// Constructs a generator from the site [`Config`].
    pub fn from_config(config: &Config) -> Result<PageGenerator> {
        PageGenerator::new(config.paginate)
    }

    pub fn page_size(&self) -> Option<NonZeroUsize> {
        self.page_size
    }

    /// Generates the pages for every category, in [`CategoryIndex`] order.
    pub fn generate<'a, P>(
        &self,
        categories: &'a HashMap<String, Vec<P>>,
    ) -> Vec<CategoryPage<'a, P>> {
        let index = CategoryIndex::new(categories);
        let pages: Vec<CategoryPage<'a, P>> = index
            .iter()
            .filter_map(|name| categories.get_key_value(name))
            .flat_map(|(name, posts)| self.category_pages(name, posts))
            .collect();
        self.log_summary(&index, &pages);
        pages
    }

    /// Like [`PageGenerator::generate`] but builds each category's pages on
    /// the rayon thread pool. The result is identical to the serial version:
    /// pages are collected in [`CategoryIndex`] order regardless of which
    /// category finishes first.
    pub fn par_generate<'a, P: Sync>(
        &self,
        categories: &'a HashMap<String, Vec<P>>,
    ) -> Vec<CategoryPage<'a, P>> {
        let index = CategoryIndex::new(categories);
        let per_category: Vec<Vec<CategoryPage<'a, P>>> = index
            .names()
            .par_iter()
            .filter_map(|name| categories.get_key_value(*name))
            .map(|(name, posts)| self.category_pages(name, posts))
            .collect();
        let pages: Vec<CategoryPage<'a, P>> =
            per_category.into_iter().flatten().collect();
        self.log_summary(&index, &pages);
        pages
    }

    fn category_pages<'a, P>(
        &self,
        category: &'a str,
        posts: &'a [P],
    ) -> Vec<CategoryPage<'a, P>> {
        if posts.is_empty() {
            tracing::info!(category, "Category has no posts; no index pages generated");
            return Vec::new();
        }
        match self.page_size {
            None => vec![CategoryPage::unpaginated(category, posts)],
            Some(page_size) => paginated_pages(category, posts, page_size),
        }
    }

    fn log_summary<P>(&self, index: &CategoryIndex, pages: &[CategoryPage<P>]) {
        match self.page_size {
            Some(page_size) => tracing::debug!(
                categories = index.len(),
                pages = pages.len(),
                per_page = page_size.get(),
                "Processed paginated category index pages"
            ),
            None => tracing::debug!(
                categories = index.len(),
                pages = pages.len(),
                "Processed category index pages"
            ),
        }
    }
}

/// Builds the linked pages of a single category. All slice and link data is
/// computed before the first page is constructed.
fn paginated_pages<'a, P>(
    category: &'a str,
    posts: &'a [P],
    page_size: NonZeroUsize,
) -> Vec<CategoryPage<'a, P>> {
    let slices = plan_pages(posts, page_size);
    let ids = page_ids(slices.len());
    let links = link(&ids);
    let total_pages = slices.len();

    ids.iter()
        .zip(links)
        .zip(slices)
        .map(|((id, neighbors), slice)| {
            let paginator = Paginator::new(
                id,
                neighbors,
                page_size.get(),
                total_pages,
                posts.len(),
                slice,
            );
            CategoryPage::paginated(category, posts, paginator)
        })
        .collect()
}

/// Generates category index pages from the host's category-to-posts mapping.
/// `page_size` is the raw `paginate` setting: `None` disables pagination and
/// a value less than one fails the whole run before any page is produced.
pub fn generate<P>(
    categories: &HashMap<String, Vec<P>>,
    page_size: Option<i64>,
) -> Result<Vec<CategoryPage<'_, P>>> {
    Ok(PageGenerator::new(page_size)?.generate(categories))
}

/// Converts a raw page size into a [`NonZeroUsize`], rejecting zero and
/// negative values.
pub fn validate_page_size(page_size: i64) -> Result<NonZeroUsize> {
    usize::try_from(page_size)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(Error::InvalidPageSize(page_size))
}

/// The result of a fallible page-generation operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error in the page-generation configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Returned when pagination is enabled with a page size less than one.
    InvalidPageSize(i64),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidPageSize(size) => write!(
                f,
                "Invalid page size `{}`: `paginate` must be a positive integer",
                size
            ),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn categories() -> HashMap<String, Vec<&'static str>> {
        let mut categories = HashMap::new();
        categories.insert("jekyll".to_owned(), vec!["j1", "j2", "j3", "j4", "j5"]);
        categories.insert("好的主意".to_owned(), vec!["h1"]);
        categories.insert("Category Pages Plugin".to_owned(), vec!["p1", "p2"]);
        categories
    }

    #[test]
    fn test_validate_page_size() {
        assert_eq!(NonZeroUsize::new(2), validate_page_size(2).ok());
        assert_eq!(Err(Error::InvalidPageSize(0)), validate_page_size(0));
        assert_eq!(Err(Error::InvalidPageSize(-3)), validate_page_size(-3));
    }

    #[test]
    fn test_invalid_page_size_fails_before_output() {
        let categories = categories();
        assert_eq!(
            Some(Error::InvalidPageSize(0)),
            generate(&categories, Some(0)).err()
        );
        assert_eq!(
            Some(Error::InvalidPageSize(-1)),
            generate(&categories, Some(-1)).err()
        );
    }

    #[test]
    fn test_error_message_names_page_size() {
        let message = Error::InvalidPageSize(-7).to_string();
        assert!(message.contains("-7"), "{}", message);
    }

    #[test]
    fn test_error_wraps_nothing() {
        use std::error::Error as _;
        assert!(Error::InvalidPageSize(0).source().is_none());
    }

    #[test]
    fn test_unpaginated_one_page_per_category() {
        let categories = categories();
        let pages = generate(&categories, None).unwrap();
        let summary: Vec<(&str, &str, usize)> = pages
            .iter()
            .map(|p| (p.category, p.file_name.as_str(), p.assigned_posts.len()))
            .collect();
        assert_eq!(
            vec![
                ("Category Pages Plugin", "index.html", 2),
                ("jekyll", "index.html", 5),
                ("好的主意", "index.html", 1),
            ],
            summary
        );
        assert!(pages.iter().all(|p| p.paginator.is_none()));
    }

    #[test]
    fn test_paginated_pages_in_category_order() {
        let categories = categories();
        let pages = generate(&categories, Some(2)).unwrap();
        let summary: Vec<(&str, usize, &[&str])> = pages
            .iter()
            .map(|p| (p.category, p.page_number, p.assigned_posts))
            .collect();
        assert_eq!(
            vec![
                ("Category Pages Plugin", 1, &["p1", "p2"][..]),
                ("jekyll", 1, &["j1", "j2"][..]),
                ("jekyll", 2, &["j3", "j4"][..]),
                ("jekyll", 3, &["j5"][..]),
                ("好的主意", 1, &["h1"][..]),
            ],
            summary
        );
    }

    #[test]
    fn test_paginator_fields() {
        let categories = categories();
        let pages = generate(&categories, Some(2)).unwrap();
        let jekyll: Vec<&Paginator<&str>> = pages
            .iter()
            .filter(|p| p.category == "jekyll")
            .filter_map(|p| p.paginator.as_ref())
            .collect();

        assert_eq!(3, jekyll.len());
        for paginator in &jekyll {
            assert_eq!(2, paginator.per_page);
            assert_eq!(3, paginator.total_pages);
            assert_eq!(5, paginator.total_posts);
        }
        assert_eq!(None, jekyll[0].previous_page_path);
        assert_eq!(Some("page2.html"), jekyll[0].next_page_path.as_deref());
        assert_eq!(Some("index.html"), jekyll[1].previous_page_path.as_deref());
        assert_eq!(Some("page3.html"), jekyll[1].next_page_path.as_deref());
        assert_eq!(Some(2), jekyll[2].previous_page);
        assert_eq!(None, jekyll[2].next_page);
    }

    #[test]
    fn test_empty_category_yields_no_pages() {
        let mut categories = categories();
        categories.insert("empty".to_owned(), Vec::new());

        for page_size in &[None, Some(2)] {
            let pages = generate(&categories, *page_size).unwrap();
            assert!(pages.iter().all(|p| p.category != "empty"));
        }
    }

    #[test]
    fn test_no_categories() {
        let categories: HashMap<String, Vec<u8>> = HashMap::new();
        assert!(generate(&categories, Some(3)).unwrap().is_empty());
        assert!(generate(&categories, None).unwrap().is_empty());
    }

    #[test]
    fn test_generate_is_idempotent() {
        let categories = categories();
        let generator = PageGenerator::new(Some(2)).unwrap();
        assert_eq!(generator.generate(&categories), generator.generate(&categories));
    }

    #[test]
    fn test_par_generate_matches_generate() {
        let mut categories: HashMap<String, Vec<usize>> = HashMap::new();
        for i in 0..50 {
            categories.insert(format!("category-{:02}", i), (0..(i * 3 % 17)).collect());
        }
        for page_size in &[None, Some(1), Some(4)] {
            let generator = PageGenerator::new(*page_size).unwrap();
            assert_eq!(
                generator.generate(&categories),
                generator.par_generate(&categories)
            );
        }
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        assert_eq!(None, PageGenerator::from_config(&config).unwrap().page_size());

        config.paginate = Some(5);
        assert_eq!(
            NonZeroUsize::new(5),
            PageGenerator::from_config(&config).unwrap().page_size()
        );

        config.paginate = Some(0);
        assert_eq!(
            Err(Error::InvalidPageSize(0)),
            PageGenerator::from_config(&config)
        );
    }
}
