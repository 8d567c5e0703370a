//! Names the pages of a paginated category and chains each page to its
//! neighbors.

/// The file name of a category's first index page.
pub const INDEX_FILE: &str = "index.html";

/// Returns the output file name for a 1-based page number: `index.html` for
/// the first page and `page{n}.html` for every other page.
pub fn file_name(page_number: usize) -> String {
    match page_number {
        1 => INDEX_FILE.to_owned(),
        n => format!("page{}.html", n),
    }
}

/// Identifies a generated page within its category: its 1-based number and
/// the file name derived from it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PageId {
    pub number: usize,
    pub file_name: String,
}

impl PageId {
    /// Constructs the [`PageId`] for page `number` (1-based).
    pub fn new(number: usize) -> PageId {
        PageId {
            number,
            file_name: file_name(number),
        }
    }
}

/// The pages immediately before and after a page. `None` means there is no
/// such page; it is never replaced by a placeholder file name here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub previous: Option<PageId>,
    pub next: Option<PageId>,
}

/// Returns the ids for pages `1..=total_pages`, in order.
pub fn page_ids(total_pages: usize) -> Vec<PageId> {
    (1..=total_pages).map(PageId::new).collect()
}

/// Computes the [`Neighbors`] of every page in `ids`, which must already be
/// in page order. Element `i` of the result belongs to `ids[i]`.
pub fn link(ids: &[PageId]) -> Vec<Neighbors> {
    (0..ids.len())
        .map(|i| Neighbors {
            previous: match i {
                0 => None,
                _ => Some(ids[i - 1].clone()),
            },
            next: ids.get(i + 1).cloned(),
        })
        .collect()
}
