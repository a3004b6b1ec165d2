use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Validated post identifier
///
/// Wraps the store-native ObjectId. Construction from a string fails when the
/// input is not a 24-character hex ObjectId; the hex form is what clients see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostId(ObjectId);

impl PostId {
    /// Parse an identifier from its string form
    pub fn parse(s: &str) -> Result<Self, AppError> {
        let oid = ObjectId::parse_str(s)?;
        Ok(Self(oid))
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// A scraped post as stored in the collection.
///
/// Every field is required: a stored record missing any of them fails
/// deserialization rather than being silently defaulted. Engagement counts
/// and dates are kept as the scraped text, no arithmetic is done on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub video_url: String,
    pub like: String,
    pub comment: String,
    pub share: String,
    pub date: String,
    pub username: String,
    pub comments: Vec<Comment>,
    pub hashtags: Vec<String>,
}

/// A comment embedded in a post
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub username: String,
    pub text: String,
    pub date: String,
    pub likes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use mongodb::bson::doc;

    #[test]
    fn parse_valid_object_id() {
        let id = PostId::parse("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
    }

    #[test]
    fn reject_short_id() {
        assert!(matches!(
            PostId::parse("abc123"),
            Err(AppError::InvalidId(_))
        ));
    }

    #[test]
    fn reject_non_hex_id() {
        assert!(matches!(
            PostId::parse("zzzzzzzzzzzzzzzzzzzzzzzz"),
            Err(AppError::InvalidId(_))
        ));
    }

    #[test]
    fn post_deserializes_from_document() {
        let doc = doc! {
            "_id": ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap(),
            "title": "dance challenge",
            "video_url": "https://example.com/v/1",
            "like": "1.2M",
            "comment": "4520",
            "share": "980",
            "date": "2024-03-01",
            "username": "alice",
            "comments": [
                { "username": "bob", "text": "nice", "date": "2024-03-02", "likes": "12" }
            ],
            "hashtags": ["dance", "fyp"],
        };

        let post: Post = mongodb::bson::from_document(doc).unwrap();
        assert_eq!(post.username, "alice");
        assert_eq!(post.hashtags, vec!["dance", "fyp"]);
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].likes, "12");
    }

    #[test]
    fn post_requires_every_field() {
        // no "username" field
        let doc = doc! {
            "_id": ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap(),
            "title": "dance challenge",
            "video_url": "https://example.com/v/1",
            "like": "1.2M",
            "comment": "4520",
            "share": "980",
            "date": "2024-03-01",
            "comments": [],
            "hashtags": [],
        };

        assert!(mongodb::bson::from_document::<Post>(doc).is_err());
    }
}
