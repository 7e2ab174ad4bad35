//! Queries over a loaded post list: categories, lookup and ordering.

use super::PostMeta;

/// Distinct categories in first-seen order. Posts without one are skipped.
pub fn categories(posts: &[PostMeta]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for category in posts.iter().filter_map(PostMeta::category) {
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

/// Posts filed under `category`, compared case-insensitively, in list order.
pub fn in_category<'a>(posts: &'a [PostMeta], category: &str) -> Vec<&'a PostMeta> {
    posts
        .iter()
        .filter(|p| {
            p.category()
                .is_some_and(|c| c.eq_ignore_ascii_case(category))
        })
        .collect()
}

/// Finds a post by id or slug.
pub fn find_post<'a>(posts: &'a [PostMeta], key: &str) -> Option<&'a PostMeta> {
    posts
        .iter()
        .find(|p| p.id() == key || p.slug() == Some(key))
}

/// Sorts posts newest first. Posts without a parseable date sort to the
/// bottom; ties keep their file order.
pub fn sort_by_date_desc(posts: &mut [PostMeta]) {
    posts.sort_by(|a, b| match (a.published_on(), b.published_on()) {
        (Some(a), Some(b)) => b.cmp(&a), // descending: newest first
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, category: Option<&str>, date: Option<&str>) -> PostMeta {
        let mut post = PostMeta::new(id);
        if let Some(category) = category {
            post = post.with("category", category);
        }
        if let Some(date) = date {
            post = post.with("date", date);
        }
        post
    }

    fn ids(posts: &[PostMeta]) -> Vec<String> {
        posts.iter().map(|p| p.id().into_owned()).collect()
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let posts = vec![
            post("a", Some("Dev"), None),
            post("b", None, None),
            post("c", Some("Life"), None),
            post("d", Some("Dev"), None),
        ];
        assert_eq!(categories(&posts), vec!["Dev", "Life"]);
    }

    #[test]
    fn category_filter_ignores_case() {
        let posts = vec![post("a", Some("Dev"), None), post("b", Some("Life"), None)];
        let dev: Vec<String> = in_category(&posts, "dev")
            .iter()
            .map(|p| p.id().into_owned())
            .collect();
        assert_eq!(dev, vec!["a"]);
        assert!(in_category(&posts, "Travel").is_empty());
    }

    #[test]
    fn find_matches_id_or_slug() {
        let with_slug = post("a", None, None).with("slug", "hello-world");
        let posts = vec![with_slug, post("b", None, None)];

        assert_eq!(find_post(&posts, "hello-world").map(PostMeta::id).as_deref(), Some("a"));
        assert_eq!(find_post(&posts, "b").map(PostMeta::id).as_deref(), Some("b"));
        assert!(find_post(&posts, "zzz").is_none());
    }

    #[test]
    fn sort_puts_newest_first_and_undated_last() {
        let mut posts = vec![
            post("old", None, Some("2022-01-01")),
            post("undated-1", None, None),
            post("new", None, Some("2024-05-05")),
            post("undated-2", None, Some("someday")),
            post("mid", None, Some("2023-06-01T08:00:00Z")),
        ];
        sort_by_date_desc(&mut posts);
        assert_eq!(ids(&posts), vec!["new", "mid", "old", "undated-1", "undated-2"]);
    }
}
