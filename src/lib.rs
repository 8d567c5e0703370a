//! Generates category index pages for a static site. The host supplies a
//! mapping from category name to that category's posts; this crate decides
//! which pages exist and what each one shows. The work breaks down into three
//! steps:
//!
//! 1. Ordering the categories ([`crate::category`])
//! 2. Splitting each category's posts into pages ([`crate::paginate`])
//! 3. Linking each page to its previous and next page ([`crate::link`])
//!
//! [`crate::generate`] stitches these together into a list of
//! [`crate::page::CategoryPage`]s. When pagination is disabled every category
//! gets a single `index.html`; otherwise a category with `N` posts and a page
//! size of `P` gets `ceil(N / P)` pages named `index.html`, `page2.html`,
//! `page3.html`, and so on, each carrying a [`crate::page::Paginator`].
//!
//! Rendering and writing the pages is left to the host. [`crate::value`]
//! converts pages into template values with the attribute names category
//! layouts expect.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod category;
pub mod config;
pub mod generate;
pub mod link;
pub mod page;
pub mod paginate;
pub mod post;
pub mod value;

pub use crate::generate::{generate, Error, PageGenerator};
