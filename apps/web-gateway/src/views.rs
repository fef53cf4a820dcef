//! HTML pages, rendered with maud. Interpolated values are escaped.

use maud::{DOCTYPE, Markup, html};

use blog_core::domain::{AUTHOR_MAX_LEN, Post, PostId, TITLE_MAX_LEN};

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
article { border-bottom: 1px solid #ddd; padding: 1rem 0; }
.meta { color: #666; font-size: 0.9rem; }
.content { white-space: pre-wrap; }
label { display: block; margin-top: 1rem; }
input, textarea { width: 100%; box-sizing: border-box; }
textarea { min-height: 12rem; }
.danger { color: #b00020; }
";

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Blog" }
                style { (STYLE) }
            }
            body {
                header {
                    h1 { a href="/" { "Blog" } }
                    nav { a href="/create" { "New post" } }
                }
                main { (body) }
            }
        }
    }
}

/// Title, content and author inputs, pre-filled when editing.
fn post_fields(post: Option<&Post>) -> Markup {
    let title = post.map(|p| p.title.as_str()).unwrap_or_default();
    let content = post.map(|p| p.content.as_str()).unwrap_or_default();
    let author = post.map(|p| p.author.as_str()).unwrap_or_default();

    html! {
        label for="title" { "Title" }
        input type="text" id="title" name="title" value=(title)
            maxlength=(TITLE_MAX_LEN) required;
        label for="content" { "Content" }
        textarea id="content" name="content" required { (content) }
        label for="author" { "Author" }
        input type="text" id="author" name="author" value=(author)
            maxlength=(AUTHOR_MAX_LEN) required;
    }
}

/// `/` - every post, newest first.
pub fn index(posts: &[Post]) -> Markup {
    layout(
        "Posts",
        html! {
            @if posts.is_empty() {
                p { "No posts yet." }
            }
            @for post in posts {
                article {
                    h2 { (post.title) }
                    p.meta {
                        "by " (post.author) " on "
                        (post.created_at.format("%Y-%m-%d %H:%M").to_string())
                    }
                    p.content { (post.content) }
                    p {
                        a href={ "/edit/" (post.id) } { "Edit" }
                        " | "
                        a.danger href={ "/delete/" (post.id) } { "Delete" }
                    }
                }
            }
        },
    )
}

/// `/create` - blank form.
pub fn create_form() -> Markup {
    layout(
        "New post",
        html! {
            h2 { "New post" }
            form method="post" action="/create" {
                (post_fields(None))
                p { button type="submit" { "Create" } }
            }
        },
    )
}

/// `/edit/{id}` - form pre-filled with the stored post.
pub fn edit_form(post: &Post) -> Markup {
    layout(
        "Edit post",
        html! {
            h2 { "Edit post" }
            form method="post" action={ "/edit/" (post.id) } {
                (post_fields(Some(post)))
                p {
                    button type="submit" { "Save" }
                    " "
                    a href="/" { "Cancel" }
                }
            }
        },
    )
}

/// `/delete/{id}` - the delete itself only happens on the POST.
pub fn confirm_delete(id: PostId) -> Markup {
    layout(
        "Delete post",
        html! {
            h2 { "Delete post #" (id) "?" }
            p { "This cannot be undone." }
            form method="post" action={ "/delete/" (id) } {
                button.danger type="submit" { "Delete" }
                " "
                a href="/" { "Cancel" }
            }
        },
    )
}

pub fn not_found(id: PostId) -> Markup {
    layout(
        "Not found",
        html! {
            h2 { "Post not found" }
            p { "There is no post #" (id) "." }
            p { a href="/" { "Back to all posts" } }
        },
    )
}

pub fn backend_unavailable() -> Markup {
    layout(
        "Unavailable",
        html! {
            h2 { "Backend unavailable" }
            p { "The posts service could not be reached. Try again shortly." }
            p { a href="/" { "Back to all posts" } }
        },
    )
}
