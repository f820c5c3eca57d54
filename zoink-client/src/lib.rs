pub mod board;
pub mod error;
pub mod post;
pub mod store;
pub mod validate;

#[cfg(feature = "http")]
mod http_store;

pub use board::{FeedStatus, Field, PostBoard};
pub use error::StoreError;
#[cfg(feature = "http")]
pub use http_store::SupabaseStore;
pub use post::{Draft, Location, NewPost, Post};
pub use store::{PostStore, decode_insert, decode_listing};
pub use validate::{FieldErrors, validate};
