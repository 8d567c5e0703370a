//! Converts generated pages into [`Value`]s for templating. This is the
//! boundary between the page generator and the host's rendering layer: the
//! attribute names are the ones category index layouts already use, and an
//! absent neighbor becomes an empty path (or nil page number) here rather
//! than in the core types.

use crate::config::Config;
use crate::page::{CategoryPage, Paginator};
use crate::post::Post;
use gtmpl_value::Value;
use regex::Regex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;

static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{M}\p{L}\p{Nd}]+").unwrap());

/// Converts a category name into a directory name. Every run of characters
/// that are not letters, marks or digits becomes a single `-`, leading and
/// trailing hyphens are dropped, and the result is lowercased. Non-ASCII
/// letters are kept as they are, so `好的主意` stays `好的主意`.
pub fn slugify(name: &str) -> String {
    NON_SLUG_RE
        .replace_all(name, "-")
        .trim_matches('-')
        .to_lowercase()
}

impl From<&Post> for Value {
    fn from(p: &Post) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("title".to_owned(), Value::String(p.title.clone()));
        m.insert("url".to_owned(), Value::String(p.url.clone()));
        Value::Object(m)
    }
}

fn count(n: usize) -> Value {
    Value::from(n as u64)
}

fn posts_to_value<P>(posts: &[P]) -> Value
where
    for<'p> Value: From<&'p P>,
{
    Value::Array(posts.iter().map(|p| Value::from(p)).collect())
}

impl<'a, P> From<&Paginator<'a, P>> for Value
where
    for<'p> Value: From<&'p P>,
{
    /// Exposes `page`, `per_page`, `posts`, `total_posts`, `total_pages`,
    /// `previous_page`, `previous_page_path`, `next_page` and
    /// `next_page_path`. Missing neighbor numbers are nil; missing neighbor
    /// paths are empty strings.
    fn from(paginator: &Paginator<'a, P>) -> Value {
        let number = |n: Option<usize>| n.map(count).unwrap_or(Value::Nil);
        let path =
            |p: &Option<String>| Value::String(p.clone().unwrap_or_default());

        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("page".to_owned(), count(paginator.page));
        m.insert("per_page".to_owned(), count(paginator.per_page));
        m.insert("posts".to_owned(), posts_to_value::<P>(paginator.posts));
        m.insert("total_posts".to_owned(), count(paginator.total_posts));
        m.insert("total_pages".to_owned(), count(paginator.total_pages));
        m.insert("previous_page".to_owned(), number(paginator.previous_page));
        m.insert(
            "previous_page_path".to_owned(),
            path(&paginator.previous_page_path),
        );
        m.insert("next_page".to_owned(), number(paginator.next_page));
        m.insert("next_page_path".to_owned(), path(&paginator.next_page_path));
        Value::Object(m)
    }
}

impl<'a, P> CategoryPage<'a, P> {
    /// The directory holding this category's pages:
    /// `{category_path}/{slug}`, where the slug is derived from the category
    /// name.
    pub fn directory(&self, config: &Config) -> PathBuf {
        PathBuf::from(&config.category_path).join(slugify(self.category))
    }

    /// The page's output path relative to the site root.
    pub fn path(&self, config: &Config) -> PathBuf {
        self.directory(config).join(&self.file_name)
    }

    /// Converts the page into a [`Value::Object`] with fields `category`,
    /// `title`, `posts` (every post in the category), `total_posts`,
    /// `paginator` (nil without pagination), `layout`, `dir`, `name` and
    /// `path`.
    pub fn to_value(&self, config: &Config) -> Value
    where
        for<'p> Value: From<&'p P>,
    {
        let path_value =
            |p: PathBuf| Value::String(p.to_string_lossy().into_owned());

        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert(
            "category".to_owned(),
            Value::String(self.category.to_owned()),
        );
        m.insert("title".to_owned(), Value::String(self.category.to_owned()));
        m.insert("posts".to_owned(), posts_to_value::<P>(self.category_posts));
        m.insert("total_posts".to_owned(), count(self.total_posts()));
        m.insert(
            "paginator".to_owned(),
            match &self.paginator {
                Some(paginator) => paginator.into(),
                None => Value::Nil,
            },
        );
        m.insert(
            "layout".to_owned(),
            Value::String(config.category_layout.clone()),
        );
        m.insert("dir".to_owned(), path_value(self.directory(config)));
        m.insert("name".to_owned(), Value::String(self.file_name.clone()));
        m.insert("path".to_owned(), path_value(self.path(config)));
        Value::Object(m)
    }
}
