use crate::error::StoreError;
use crate::post::{Draft, NewPost, Post};
use crate::store::PostStore;
use crate::validate::{FieldErrors, validate};

/// Lifecycle of the one-shot feed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    Loading,
    Loaded,
    Failed(String),
}

/// Form fields as the rendering layer names them in change events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Body,
    Location,
}

/// UI state for the post board: the compose form plus the fetched
/// feed. Hosts that cannot hold a mutable borrow across an await
/// drive the begin/finish pairs instead of the async methods.
#[derive(Debug)]
pub struct PostBoard {
    pub draft: Draft,
    pub errors: FieldErrors,
    pub submit_error: Option<String>,
    pub submitting: bool,
    pub posts: Vec<Post>,
    pub feed: FeedStatus,
}

impl Default for PostBoard {
    fn default() -> Self {
        Self {
            draft: Draft::default(),
            errors: FieldErrors::default(),
            submit_error: None,
            submitting: false,
            posts: Vec::new(),
            feed: FeedStatus::Loading,
        }
    }
}

impl PostBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field-change event from the rendering layer.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.draft.title = value,
            Field::Body => self.draft.body = value,
            Field::Location => self.draft.location = value,
        }
    }

    /// Submit-intent gate. `None` means the submission was refused —
    /// a request is already in flight, or `errors` now says why.
    pub fn begin_submit(&mut self) -> Option<NewPost> {
        if self.submitting {
            return None;
        }
        self.errors = FieldErrors::default();
        self.submit_error = None;

        // Gate on the title before running the full validator.
        if self.draft.title.trim().is_empty() {
            self.errors = FieldErrors::title_required();
            return None;
        }

        match validate(&self.draft) {
            Ok(record) => {
                self.submitting = true;
                Some(record)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Success clears the draft; failure keeps it so the user can
    /// retry.
    pub fn finish_submit(&mut self, result: Result<Post, StoreError>) -> bool {
        self.submitting = false;
        match result {
            Ok(post) => {
                tracing::debug!(id = %post.id, "post created");
                self.draft = Draft::default();
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "post creation failed");
                self.submit_error = Some(err.to_string());
                false
            }
        }
    }

    /// Validate, create, and on success refresh the feed.
    pub async fn submit(&mut self, store: &impl PostStore) -> bool {
        let Some(record) = self.begin_submit() else {
            return false;
        };
        let created = self.finish_submit(store.create(&record).await);
        if created {
            self.load(store).await;
        }
        created
    }

    pub fn begin_load(&mut self) {
        self.feed = FeedStatus::Loading;
    }

    /// A failed load leaves the list empty and the view standing.
    pub fn finish_load(&mut self, result: Result<Vec<Post>, StoreError>) {
        match result {
            Ok(posts) => {
                self.posts = posts;
                self.feed = FeedStatus::Loaded;
            }
            Err(err) => {
                tracing::warn!(error = %err, "feed load failed");
                self.posts.clear();
                self.feed = FeedStatus::Failed(err.to_string());
            }
        }
    }

    /// Fetch the feed, newest first.
    pub async fn load(&mut self, store: &impl PostStore) {
        self.begin_load();
        self.finish_load(store.list().await);
    }
}
