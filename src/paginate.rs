//! Splits a category's posts into the slices that make up its index pages.
//! Everything here is a pure function of the post list and the page size, so
//! the same inputs always produce the same plan.

use std::num::NonZeroUsize;

/// Returns the number of index pages needed to show `total_posts` posts,
/// `page_size` at a time. This is `ceil(total_posts / page_size)`, which is
/// zero for an empty category and at least one otherwise.
pub fn page_count(total_posts: usize, page_size: NonZeroUsize) -> usize {
    let page_size = page_size.get();
    match total_posts % page_size {
        0 => total_posts / page_size,
        _ => total_posts / page_size + 1,
    }
}

/// Partitions `posts` into contiguous slices of `page_size` posts. The final
/// slice holds whatever remains (between 1 and `page_size` posts). Slice `k`
/// (zero-based) covers `posts[k * page_size..min((k + 1) * page_size, len)]`.
///
/// An empty post list yields an empty plan rather than a single empty page.
pub fn plan_pages<P>(posts: &[P], page_size: NonZeroUsize) -> Vec<&[P]> {
    posts.chunks(page_size.get()).collect()
}
