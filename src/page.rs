//! Defines the [`CategoryPage`] and [`Paginator`] types handed to the host for
//! rendering. Both borrow their posts from the host's category mapping and
//! are never modified once constructed.

use crate::link::{Neighbors, PageId};

/// Describes where a page sits within its category's sequence of index pages.
/// Only pages generated with pagination enabled carry one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paginator<'a, P> {
    /// This page's 1-based number.
    pub page: usize,

    /// The configured number of posts per page.
    pub per_page: usize,

    /// The number of pages in the category.
    pub total_pages: usize,

    /// The number of posts in the category (not just on this page).
    pub total_posts: usize,

    pub previous_page: Option<usize>,
    pub previous_page_path: Option<String>,
    pub next_page: Option<usize>,
    pub next_page_path: Option<String>,

    /// The posts shown on this page.
    pub posts: &'a [P],
}

impl<'a, P> Paginator<'a, P> {
    /// Builds the paginator for page `id` from its already-computed
    /// `neighbors`.
    pub fn new(
        id: &PageId,
        neighbors: Neighbors,
        per_page: usize,
        total_pages: usize,
        total_posts: usize,
        posts: &'a [P],
    ) -> Paginator<'a, P> {
        let (previous_page, previous_page_path) = split(neighbors.previous);
        let (next_page, next_page_path) = split(neighbors.next);
        Paginator {
            page: id.number,
            per_page,
            total_pages,
            total_posts,
            previous_page,
            previous_page_path,
            next_page,
            next_page_path,
            posts,
        }
    }
}

fn split(id: Option<PageId>) -> (Option<usize>, Option<String>) {
    match id {
        Some(PageId { number, file_name }) => (Some(number), Some(file_name)),
        None => (None, None),
    }
}

/// One generated index page for a category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryPage<'a, P> {
    /// The category name, exactly as supplied by the host.
    pub category: &'a str,

    pub page_number: usize,

    /// `index.html` for the first page, `page{n}.html` otherwise.
    pub file_name: String,

    /// The slice of the category's posts assigned to this page. Without
    /// pagination this is every post in the category.
    pub assigned_posts: &'a [P],

    /// Every post in the category, in the host's order.
    pub category_posts: &'a [P],

    pub paginator: Option<Paginator<'a, P>>,
}

impl<'a, P> CategoryPage<'a, P> {
    /// The single index page of a category generated without pagination.
    pub fn unpaginated(category: &'a str, posts: &'a [P]) -> CategoryPage<'a, P> {
        let id = PageId::new(1);
        CategoryPage {
            category,
            page_number: id.number,
            file_name: id.file_name,
            assigned_posts: posts,
            category_posts: posts,
            paginator: None,
        }
    }

    /// One page of a paginated category. The page's number, file name and
    /// assigned posts are taken from `paginator`.
    pub fn paginated(
        category: &'a str,
        category_posts: &'a [P],
        paginator: Paginator<'a, P>,
    ) -> CategoryPage<'a, P> {
        let id = PageId::new(paginator.page);
        CategoryPage {
            category,
            page_number: id.number,
            file_name: id.file_name,
            assigned_posts: paginator.posts,
            category_posts,
            paginator: Some(paginator),
        }
    }

    /// The number of posts in the page's category.
    pub fn total_posts(&self) -> usize {
        self.category_posts.len()
    }
}
