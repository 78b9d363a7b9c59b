// SPDX-License-Identifier: GPL-3.0-only
use crate::store::Post;

pub const EMPTY_TABLE_MESSAGE: &str = "No posts found. Add your first post!";

/// Render posts as a left-aligned table with ID, Title and Key columns
pub fn render_table(posts: &[Post]) -> String {
    if posts.is_empty() {
        return format!("{EMPTY_TABLE_MESSAGE}\n");
    }

    let id_width = posts
        .iter()
        .map(|p| p.id.to_string().len())
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let title_width = posts
        .iter()
        .map(|p| p.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("Title".len());

    let mut out = String::new();
    out.push_str(&format!("{:<id_width$}  {:<title_width$}  Key\n", "ID", "Title"));
    out.push_str(&format!("{}  {}  {}\n", "-".repeat(id_width), "-".repeat(title_width), "---"));
    for post in posts {
        out.push_str(&format!(
            "{:<id_width$}  {:<title_width$}  {}\n",
            post.id, post.title, post.remote_key
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table(&[]), "No posts found. Add your first post!\n");
    }

    #[test]
    fn test_render_rows_in_order() {
        let posts = vec![
            Post { id: 1, title: "Hello".to_string(), remote_key: "-Na".to_string() },
            Post { id: 200, title: "A longer title".to_string(), remote_key: "-Nb".to_string() },
        ];

        let table = render_table(&posts);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "ID   Title           Key");
        assert_eq!(lines[2], "1    Hello           -Na");
        assert_eq!(lines[3], "200  A longer title  -Nb");
    }
}
