//! Blog-post eligibility.

/// Directory segment that marks a document as a blog post.
const POSTS_SEGMENT: &str = "posts";

/// Check whether a document path identifies a blog post.
///
/// A path is eligible when it ends with `.md` and one of its directory
/// segments is `posts`. Backslash separators are accepted.
pub fn is_blog_post(src_path: &str) -> bool {
    let normalized = src_path.replace('\\', "/");
    if !normalized.ends_with(".md") {
        return false;
    }

    match normalized.rsplit_once('/') {
        Some((dirs, _file)) => dirs.split('/').any(|segment| segment == POSTS_SEGMENT),
        None => false,
    }
}
