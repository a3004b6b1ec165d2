/// Database access layer
///
/// Query functions over the shared post collection handle. All reads go
/// through here; the service performs no writes.
pub mod post_repo;

pub use post_repo::PostFilter;
