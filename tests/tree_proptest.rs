//! Property-based tests for the reply tree and session cache
//!
//! Random forests are generated as flat post lists in which every reply
//! points at an earlier post or at an id that was never loaded.

mod common;

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use threadify::egui_app::threads::tree::{build_tree, display_text, is_truncatable, MAX_TEXT_LENGTH};
use threadify::egui_app::ThreadCache;
use threadify::shared::Post;
use uuid::Uuid;

use common::{reply_post, root_post};

#[derive(Debug, Clone)]
enum Shape {
    Root,
    ReplyTo(usize),
    Dangling,
}

fn shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        2 => Just(Shape::Root),
        5 => any::<usize>().prop_map(Shape::ReplyTo),
        1 => Just(Shape::Dangling),
    ]
}

fn forest(shapes: &[Shape]) -> Vec<Post> {
    let mut posts: Vec<Post> = Vec::with_capacity(shapes.len());
    for (i, shape) in shapes.iter().enumerate() {
        let post = match shape {
            Shape::ReplyTo(pick) if i > 0 => {
                let parent = posts[pick % i].clone();
                reply_post(&parent, &format!("reply {}", i))
            }
            Shape::Dangling => {
                let missing = root_post("missing", "never loaded");
                reply_post(&missing, &format!("dangling {}", i))
            }
            _ => root_post(&format!("root {}", i), "body"),
        };
        posts.push(post);
    }
    posts
}

/// Posts whose whole ancestor chain is present
fn reachable(posts: &[Post]) -> HashSet<Uuid> {
    let by_id: HashMap<Uuid, &Post> = posts.iter().map(|p| (p.id, p)).collect();
    posts
        .iter()
        .filter(|post| {
            let mut current = *post;
            let mut steps = 0;
            loop {
                match current.parent_id {
                    None => return true,
                    Some(parent) => match by_id.get(&parent) {
                        Some(next) if steps < posts.len() => {
                            current = *next;
                            steps += 1;
                        }
                        _ => return false,
                    },
                }
            }
        })
        .map(|p| p.id)
        .collect()
}

proptest! {
    #[test]
    fn test_render_is_idempotent(shapes in prop::collection::vec(shape(), 0..40)) {
        let posts = forest(&shapes);
        prop_assert_eq!(build_tree(&posts), build_tree(&posts));
    }

    #[test]
    fn test_every_reachable_post_rendered_exactly_once(
        shapes in prop::collection::vec(shape(), 0..40),
    ) {
        let posts = forest(&shapes);
        let tree = build_tree(&posts);
        let flat = tree.flatten();

        let rendered: Vec<Uuid> = flat.iter().map(|(_, p)| p.id).collect();
        let unique: HashSet<Uuid> = rendered.iter().copied().collect();
        prop_assert_eq!(rendered.len(), unique.len());
        prop_assert_eq!(unique, reachable(&posts));
        prop_assert_eq!(rendered.len() + tree.orphan_count(), posts.len());
    }

    #[test]
    fn test_replies_sit_one_level_below_parent(
        shapes in prop::collection::vec(shape(), 1..40),
    ) {
        let posts = forest(&shapes);
        let tree = build_tree(&posts);
        let flat = tree.flatten();
        let depth_of: HashMap<Uuid, usize> = flat.iter().map(|(d, p)| (p.id, *d)).collect();

        for (depth, post) in &flat {
            match post.parent_id {
                None => prop_assert_eq!(*depth, 0),
                Some(parent) => prop_assert_eq!(*depth, depth_of[&parent] + 1),
            }
        }
    }

    #[test]
    fn test_roots_keep_collection_order(shapes in prop::collection::vec(shape(), 0..40)) {
        let posts = forest(&shapes);
        let tree = build_tree(&posts);
        let roots: Vec<Uuid> = tree.roots().iter().map(|n| n.post.id).collect();
        let expected: Vec<Uuid> = posts.iter().filter(|p| p.is_root()).map(|p| p.id).collect();
        prop_assert_eq!(roots, expected);
    }

    #[test]
    fn test_collapsed_text_is_bounded(text in "\\PC{0,400}") {
        let shown = display_text(&text, false);
        let count = text.chars().count();
        if count <= MAX_TEXT_LENGTH {
            prop_assert_eq!(&*shown, text.as_str());
            prop_assert!(!is_truncatable(&text));
        } else {
            prop_assert_eq!(shown.chars().count(), MAX_TEXT_LENGTH + 3);
            prop_assert!(shown.ends_with("..."));
            prop_assert!(text.starts_with(&shown[..shown.len() - 3]));
        }
        prop_assert_eq!(&*display_text(&text, true), text.as_str());
    }

    #[test]
    fn test_cache_ignores_redelivery(
        shapes in prop::collection::vec(shape(), 0..30),
        repeats in prop::collection::vec(any::<usize>(), 0..30),
    ) {
        let posts = forest(&shapes);
        let mut cache = ThreadCache::new();
        for post in &posts {
            cache.apply(post.clone());
        }
        if !posts.is_empty() {
            for pick in repeats {
                prop_assert!(!cache.apply(posts[pick % posts.len()].clone()));
            }
        }
        prop_assert_eq!(cache.posts(), posts.as_slice());
    }
}

#[test]
fn test_truncation_boundary() {
    let exact = "a".repeat(MAX_TEXT_LENGTH);
    let over = "a".repeat(MAX_TEXT_LENGTH + 1);
    assert_eq!(display_text(&exact, false), exact);
    assert_eq!(display_text(&over, false), format!("{}...", exact));
}
