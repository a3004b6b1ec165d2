use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

use crate::models::{Post, PostId};

/// Optional exact-match filters for listing posts
#[derive(Debug, Default, Clone)]
pub struct PostFilter {
    pub username: Option<String>,
    pub hashtag: Option<String>,
}

impl PostFilter {
    /// Build the conjunction filter document; absent fields are unconstrained
    pub fn to_document(&self) -> Document {
        let mut filter = doc! {};
        if let Some(username) = &self.username {
            filter.insert("username", username);
        }
        if let Some(hashtag) = &self.hashtag {
            filter.insert("hashtags", hashtag);
        }
        filter
    }
}

/// Case-insensitive substring filter over title, username and hashtag entries.
///
/// The keyword is escaped so regex metacharacters match literally. An empty
/// keyword matches every record.
pub fn search_filter(keyword: &str) -> Document {
    let pattern = regex::escape(keyword);
    doc! {
        "$or": [
            { "title": { "$regex": &pattern, "$options": "i" } },
            { "username": { "$regex": &pattern, "$options": "i" } },
            { "hashtags": { "$regex": &pattern, "$options": "i" } },
        ]
    }
}

/// List posts in natural store order with skip/limit pagination
pub async fn list_posts(
    collection: &Collection<Post>,
    skip: u64,
    limit: i64,
    filter: &PostFilter,
) -> Result<Vec<Post>, mongodb::error::Error> {
    let cursor = collection
        .find(filter.to_document())
        .skip(skip)
        .limit(limit)
        .await?;

    cursor.try_collect().await
}

/// Fetch a single post by its identifier
pub async fn get_post_by_id(
    collection: &Collection<Post>,
    id: &PostId,
) -> Result<Option<Post>, mongodb::error::Error> {
    collection.find_one(doc! { "_id": id.as_object_id() }).await
}

/// Return every post matching the keyword
pub async fn search_posts(
    collection: &Collection<Post>,
    keyword: &str,
) -> Result<Vec<Post>, mongodb::error::Error> {
    let cursor = collection.find(search_filter(keyword)).await?;
    cursor.try_collect().await
}

/// Total number of posts in the collection
pub async fn count_posts(collection: &Collection<Post>) -> Result<u64, mongodb::error::Error> {
    collection.count_documents(doc! {}).await
}

/// Sum of embedded comment list lengths across the whole collection.
///
/// Records without a comments field count as zero; an empty collection
/// yields 0 rather than an error.
pub async fn count_comments(collection: &Collection<Post>) -> Result<i64, mongodb::error::Error> {
    let pipeline = vec![
        doc! { "$project": { "comment_count": { "$size": { "$ifNull": ["$comments", []] } } } },
        doc! { "$group": { "_id": null, "total": { "$sum": "$comment_count" } } },
    ];

    let mut cursor = collection.aggregate(pipeline).await?;
    match cursor.try_next().await? {
        Some(doc) => Ok(doc
            .get_i64("total")
            .or_else(|_| doc.get_i32("total").map(i64::from))
            .unwrap_or(0)),
        None => Ok(0),
    }
}
