//! Reply tree reconstruction
//!
//! Turns the flat cache into a depth-annotated render list. The parent index
//! is built once per pass over the slice and walked with an explicit work
//! stack, so reply depth never grows the call stack. Roots and replies keep
//! collection order.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::shared::Post;

/// Characters shown before a post body is cut off
pub const MAX_TEXT_LENGTH: usize = 300;

const ELLIPSIS: &str = "...";

/// One post in render order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRow {
    pub depth: usize,
    pub post: Post,
    /// Number of posts below this one
    pub descendant_count: usize,
}

/// Rendered forest for one cache revision
///
/// Rows are in depth-first order: each post is followed by its replies,
/// and a row's subtree is the run of rows after it with greater depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadTree {
    rows: Vec<ThreadRow>,
    orphan_count: usize,
}

impl ThreadTree {
    pub fn rows(&self) -> &[ThreadRow] {
        &self.rows
    }

    /// Top-level threads in collection order
    pub fn roots(&self) -> Vec<&ThreadRow> {
        self.rows.iter().filter(|row| row.depth == 0).collect()
    }

    /// Direct replies of `id`, empty when it is not rendered
    pub fn replies_of(&self, id: &Uuid) -> Vec<&ThreadRow> {
        let Some(at) = self.rows.iter().position(|row| row.post.id == *id) else {
            return Vec::new();
        };
        let depth = self.rows[at].depth;
        self.rows[at + 1..]
            .iter()
            .take_while(|row| row.depth > depth)
            .filter(|row| row.depth == depth + 1)
            .collect()
    }

    /// Posts that cannot be reached from any root (missing ancestor)
    pub fn orphan_count(&self) -> usize {
        self.orphan_count
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(depth, post)` listing in render order
    pub fn flatten(&self) -> Vec<(usize, &Post)> {
        self.rows.iter().map(|row| (row.depth, &row.post)).collect()
    }
}

/// Build the reply forest for `posts`
pub fn build_tree(posts: &[Post]) -> ThreadTree {
    let mut children: HashMap<Uuid, Vec<usize>> = HashMap::new();
    let mut root_indices = Vec::new();

    for (index, post) in posts.iter().enumerate() {
        match post.parent_id {
            None => root_indices.push(index),
            Some(parent) => children.entry(parent).or_default().push(index),
        }
    }

    let mut visited = HashSet::with_capacity(posts.len());
    let mut rows = Vec::with_capacity(posts.len());
    let mut work: Vec<(usize, usize)> = root_indices.into_iter().rev().map(|i| (i, 0)).collect();

    while let Some((index, depth)) = work.pop() {
        if !visited.insert(index) {
            continue;
        }
        let post = &posts[index];
        rows.push(ThreadRow {
            depth,
            post: post.clone(),
            descendant_count: 0,
        });
        if let Some(indices) = children.get(&post.id) {
            work.extend(indices.iter().rev().map(|&child| (child, depth + 1)));
        }
    }

    count_descendants(&mut rows);

    let orphan_count = posts.len() - visited.len();
    if orphan_count > 0 {
        tracing::debug!("[Threads] {} post(s) hidden, parent not loaded", orphan_count);
    }

    ThreadTree { rows, orphan_count }
}

/// Fill `descendant_count` from subtree extents in the row list
fn count_descendants(rows: &mut [ThreadRow]) {
    let mut open: Vec<usize> = Vec::new();
    for at in 0..rows.len() {
        while let Some(&top) = open.last() {
            if rows[top].depth < rows[at].depth {
                break;
            }
            rows[top].descendant_count = at - top - 1;
            open.pop();
        }
        open.push(at);
    }
    let len = rows.len();
    for top in open {
        rows[top].descendant_count = len - top - 1;
    }
}

/// Whether `text` is long enough to be cut off
pub fn is_truncatable(text: &str) -> bool {
    text.chars().nth(MAX_TEXT_LENGTH).is_some()
}

/// Body text as shown in the board
///
/// Collapsed long text is cut after `MAX_TEXT_LENGTH` characters and
/// followed by `...`.
pub fn display_text(text: &str, expanded: bool) -> Cow<'_, str> {
    if expanded {
        return Cow::Borrowed(text);
    }
    match text.char_indices().nth(MAX_TEXT_LENGTH) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], ELLIPSIS)),
        None => Cow::Borrowed(text),
    }
}
