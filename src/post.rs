//! Defines [`Post`], a minimal post handle for hosts that don't bring their
//! own. The page generator itself works with any post type.

use serde::Deserialize;

/// A post as seen by a category index template: a title and a link to the
/// rendered post.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash)]
pub struct Post {
    pub title: String,
    pub url: String,
}

impl Post {
    pub fn new(title: &str, url: &str) -> Post {
        Post {
            title: title.to_owned(),
            url: url.to_owned(),
        }
    }
}
