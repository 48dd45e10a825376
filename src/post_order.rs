use std::cmp::Reverse;

use spdlog::warn;

use crate::content::PostSource;
use crate::text_utils::parse_uploaded;

/// Anything carrying an upload timestamp that can be ordered on the listing page.
pub trait Uploaded {
    fn uploaded(&self) -> &str;

    fn label(&self) -> &str {
        ""
    }
}

impl Uploaded for PostSource {
    fn uploaded(&self) -> &str {
        &self.uploaded
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl<T: Uploaded> Uploaded for &T {
    fn uploaded(&self) -> &str {
        (**self).uploaded()
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}

/// Sorts newest first. Stable: equal timestamps keep their order.
/// Posts with a malformed timestamp are kept and go to the end.
pub fn order_by_recency<P: Uploaded>(posts: &mut [P]) {
    posts.sort_by_cached_key(|post| {
        let date_time = parse_uploaded(post.uploaded());
        if date_time.is_none() {
            warn!("Unable to parse upload time '{}' of post '{}'", post.uploaded(), post.label());
        }
        (date_time.is_none(), Reverse(date_time))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str, &'static str);

    impl Uploaded for Item {
        fn uploaded(&self) -> &str {
            self.1
        }
    }

    fn names(items: &[Item]) -> Vec<&'static str> {
        items.iter().map(|i| i.0).collect()
    }

    #[test]
    fn test_newest_first_stable_malformed_last() {
        let mut items = vec![
            Item("jan", "2024-01-01T00:00:00+00:00"),
            Item("jun-a", "2024-06-01T00:00:00+00:00"),
            Item("jun-b", "2024-06-01T00:00:00+00:00"),
            Item("bad", "2024-13-45"),
        ];
        order_by_recency(&mut items);
        assert_eq!(names(&items), ["jun-a", "jun-b", "jan", "bad"]);
    }

    #[test]
    fn test_malformed_keep_relative_order() {
        let mut items = vec![
            Item("bad-1", ""),
            Item("old", "2020-05-22T10:54:25+01:00"),
            Item("bad-2", "garbage"),
            Item("new", "2022-04-02T12:05:00+01:00"),
        ];
        order_by_recency(&mut items);
        assert_eq!(names(&items), ["new", "old", "bad-1", "bad-2"]);
    }

    #[test]
    fn test_offsets_compare_as_instants() {
        // 10:00+02:00 is 08:00 UTC, earlier than 09:00+00:00
        let mut items = vec![
            Item("plus-two", "2024-06-01T10:00:00+02:00"),
            Item("utc", "2024-06-01T09:00:00+00:00"),
        ];
        order_by_recency(&mut items);
        assert_eq!(names(&items), ["utc", "plus-two"]);
    }

    #[test]
    fn test_sources_by_reference() {
        let sources = vec![
            PostSource::new("first", "", "2021-01-01T00:00:00Z"),
            PostSource::new("second", "", "2023-01-01T00:00:00Z"),
        ];
        let mut refs: Vec<&PostSource> = sources.iter().collect();
        order_by_recency(&mut refs);
        let titles: Vec<&str> = refs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["second", "first"]);
    }

    #[test]
    fn test_empty() {
        let mut items: Vec<Item> = vec![];
        order_by_recency(&mut items);
        assert!(items.is_empty());
    }
}
