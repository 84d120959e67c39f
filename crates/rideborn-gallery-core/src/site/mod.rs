pub mod post;

pub use post::{CardSource, Post, PostList, Thumbnail};
