// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::ensure_capability,
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleContent, ArticleTitle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub publisher_id: Option<i64>,
}

impl ArticleCommandService {
    /// New articles always start pending, authored by the caller.
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "create")?;

        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let publisher_id = self.resolve_publisher(command.publisher_id).await?;

        let new_article = NewArticle {
            title,
            content,
            author_id: actor.id,
            publisher_id,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = i64::from(created.id), author_id = i64::from(actor.id), "article submitted");
        Ok(self.load_record(created.id).await?.into())
    }
}
