use crate::{
    entities::like::{Like, NewLike},
    interfaces::doc_collection::{DocCollection, DocFilter, QryOrder, ReadOptions},
    middleware::error::{AppError, AppResult},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const LIKE_CREATED_MSG: &str = "Like successfully created!";
pub const LIKE_DELETED_MSG: &str = "Like deleted successfully!";

#[derive(Debug, Serialize, Deserialize)]
pub struct LikeCreated {
    pub msg: String,
    pub like: Like,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

/// Records which author liked which post.
///
/// Deleting does not check ownership. Callers that need it run
/// [`LikingService::assert_author_is_user`] first.
pub struct LikingService<'a, C>
where
    C: DocCollection<Doc = Like, NewDoc = NewLike>,
{
    likes: &'a C,
}

impl<'a, C> LikingService<'a, C>
where
    C: DocCollection<Doc = Like, NewDoc = NewLike>,
{
    pub fn new(likes: &'a C) -> Self {
        Self { likes }
    }

    pub async fn add_like(&self, author: &str, post: &str) -> AppResult<LikeCreated> {
        let id = self
            .likes
            .create_one(NewLike {
                author: author.to_string(),
                post: post.to_string(),
            })
            .await?;
        debug!("like {id} created author={author} post={post}");

        let like = self
            .likes
            .read_one(&DocFilter::id(&id))
            .await?
            .ok_or(AppError::SurrealDbNoResult {
                source: "add_like".to_string(),
                id,
            })?;

        Ok(LikeCreated {
            msg: LIKE_CREATED_MSG.to_string(),
            like,
        })
    }

    /// All likes on all posts, newest first. Not paginated.
    pub async fn get_likes(&self) -> AppResult<Vec<Like>> {
        let options = ReadOptions::default()
            .sort_by("created_at", QryOrder::DESC)
            .sort_by("id", QryOrder::DESC);
        self.likes.read_many(&DocFilter::All, options).await
    }

    pub async fn get_by_author(&self, author: &str) -> AppResult<Vec<Like>> {
        self.likes
            .read_many(&DocFilter::field("author", author), ReadOptions::default())
            .await
    }

    /// Succeeds whether or not the like still exists.
    pub async fn delete(&self, id: &str) -> AppResult<MessageResponse> {
        let deleted = self.likes.delete_one(&DocFilter::id(id)).await?;
        debug!("like {id} delete requested, removed={deleted}");
        Ok(MessageResponse {
            msg: LIKE_DELETED_MSG.to_string(),
        })
    }

    pub async fn assert_author_is_user(&self, id: &str, user: &str) -> AppResult<()> {
        let like = self
            .likes
            .read_one(&DocFilter::id(id))
            .await?
            .ok_or(AppError::EntityFailIdNotFound {
                ident: id.to_string(),
            })?;

        if like.author != user {
            warn!("user {user} is not the author of like {id}");
            return Err(AppError::LikeAuthorNotMatch {
                user: user.to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
