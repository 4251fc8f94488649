// src/application/notifications.rs
use std::sync::Arc;

use tracing::{info, warn};

use crate::application::ports::notification::{EmailMessage, Mailer, SocialPublisher};
use crate::domain::article::ArticleRecord;
use crate::domain::errors::DomainResult;
use crate::domain::subscription::SubscriptionRepository;
use crate::domain::user::UserSummary;

pub const SOCIAL_POST_LIMIT: usize = 280;
const EMAIL_EXCERPT_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct NotificationSettings {
    pub site_name: String,
}

impl NotificationSettings {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
        }
    }

    fn hashtag(&self) -> String {
        self.site_name
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Sent,
    Skipped,
    Failed,
}

/// What happened to each side effect of one approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationReport {
    pub recipients: usize,
    pub email: DispatchOutcome,
    pub social: DispatchOutcome,
}

/// Runs the advisory side effects of an approval. Every failure is logged
/// and absorbed here; nothing is returned to the caller as an error.
pub struct ApprovalNotifier {
    subscriptions: Arc<dyn SubscriptionRepository>,
    mailer: Arc<dyn Mailer>,
    social: Arc<dyn SocialPublisher>,
    settings: NotificationSettings,
}

impl ApprovalNotifier {
    pub fn new(
        subscriptions: Arc<dyn SubscriptionRepository>,
        mailer: Arc<dyn Mailer>,
        social: Arc<dyn SocialPublisher>,
        settings: NotificationSettings,
    ) -> Self {
        Self {
            subscriptions,
            mailer,
            social,
            settings,
        }
    }

    pub async fn article_approved(&self, record: &ArticleRecord) -> NotificationReport {
        let (recipients, email) = self.send_email(record).await;
        let social = self.post_social(record).await;
        NotificationReport {
            recipients,
            email,
            social,
        }
    }

    async fn audience(&self, record: &ArticleRecord) -> DomainResult<Vec<UserSummary>> {
        match &record.publisher {
            Some(publisher) => self.subscriptions.publisher_subscribers(publisher.id).await,
            None => {
                self.subscriptions
                    .journalist_followers(record.article.author_id)
                    .await
            }
        }
    }

    async fn send_email(&self, record: &ArticleRecord) -> (usize, DispatchOutcome) {
        let article_id = i64::from(record.article.id);
        let audience = match self.audience(record).await {
            Ok(audience) => audience,
            Err(err) => {
                warn!(article_id, error = %err, "could not resolve notification audience");
                return (0, DispatchOutcome::Failed);
            }
        };

        let recipients: Vec<String> = audience
            .into_iter()
            .map(|user| String::from(user.email))
            .filter(|email| !email.trim().is_empty())
            .collect();

        if recipients.is_empty() {
            info!(article_id, "no subscribers to notify");
            return (0, DispatchOutcome::Skipped);
        }

        let count = recipients.len();
        let message = compose_email(record, &self.settings, recipients);
        match self.mailer.send(&message).await {
            Ok(()) => {
                info!(article_id, recipients = count, "approval email sent");
                (count, DispatchOutcome::Sent)
            }
            Err(err) => {
                warn!(article_id, recipients = count, error = %err, "approval email failed");
                (count, DispatchOutcome::Failed)
            }
        }
    }

    async fn post_social(&self, record: &ArticleRecord) -> DispatchOutcome {
        let article_id = i64::from(record.article.id);
        if !self.social.is_enabled() {
            info!(article_id, "social posting disabled, skipping");
            return DispatchOutcome::Skipped;
        }
        let text = compose_social_post(record, &self.settings);
        match self.social.publish(&text).await {
            Ok(()) => {
                info!(article_id, "approval posted to social network");
                DispatchOutcome::Sent
            }
            Err(err) => {
                warn!(article_id, error = %err, "social post failed");
                DispatchOutcome::Failed
            }
        }
    }
}

pub fn compose_email(
    record: &ArticleRecord,
    settings: &NotificationSettings,
    recipients: Vec<String>,
) -> EmailMessage {
    let title = record.article.title.as_str();
    let body = format!(
        "Hello!\n\n\
         A new article has been published\n\
         that you might be interested in:\n\n\
         Title: {title}\n\
         Author: {author}\n\n\
         {excerpt}...\n\n\
         Read the full article on {site}!\n\n\
         Best regards,\n\
         The {site} Team",
        author = record.author.username,
        excerpt = record.article.content.excerpt(EMAIL_EXCERPT_CHARS),
        site = settings.site_name,
    );
    EmailMessage {
        subject: format!("New Article: {title}"),
        body,
        recipients,
    }
}

pub fn compose_social_post(record: &ArticleRecord, settings: &NotificationSettings) -> String {
    let text = format!(
        "New Article Published!\n\n{title}\n\nBy: {author}\n\nRead it on {site}! #{tag} #News",
        title = record.article.title,
        author = record.author.username,
        site = settings.site_name,
        tag = settings.hashtag(),
    );
    truncate_post(&text, SOCIAL_POST_LIMIT)
}

/// Fits `text` into `limit` characters, replacing the tail with `...` when
/// it has to be cut.
pub fn truncate_post(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let keep = limit.saturating_sub(3);
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{Article, ArticleContent, ArticleId, ArticleTitle};
    use crate::domain::user::{EmailAddress, Role, UserId, Username};
    use chrono::Utc;

    fn record(title: &str, content: &str) -> ArticleRecord {
        ArticleRecord {
            article: Article {
                id: ArticleId(3),
                title: ArticleTitle::new(title).unwrap(),
                content: ArticleContent::new(content).unwrap(),
                author_id: UserId(1),
                publisher_id: None,
                approved: true,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            author: UserSummary {
                id: UserId(1),
                username: Username::new("jdoe").unwrap(),
                email: EmailAddress::new("jdoe@example.com").unwrap(),
                role: Role::Journalist,
            },
            publisher: None,
        }
    }

    #[test]
    fn short_posts_are_left_alone() {
        assert_eq!(truncate_post("hello", 280), "hello");
        let exact = "x".repeat(280);
        assert_eq!(truncate_post(&exact, 280), exact);
    }

    #[test]
    fn long_posts_end_with_ellipsis_at_the_limit() {
        let long = "y".repeat(400);
        let cut = truncate_post(&long, 280);
        assert_eq!(cut.chars().count(), 280);
        assert!(cut.ends_with("..."));
        assert_eq!(&cut[..277], &long[..277]);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let long = "é".repeat(300);
        let cut = truncate_post(&long, 280);
        assert_eq!(cut.chars().count(), 280);
        assert!(cut.starts_with("ééé"));
    }

    #[test]
    fn social_post_mentions_title_author_and_site() {
        let settings = NotificationSettings::new("News App");
        let text = compose_social_post(&record("Big Story", "body"), &settings);
        assert_eq!(
            text,
            "New Article Published!\n\nBig Story\n\nBy: jdoe\n\nRead it on News App! #NewsApp #News"
        );
    }

    #[test]
    fn social_post_with_huge_title_is_capped() {
        let settings = NotificationSettings::new("NewsApp");
        let text = compose_social_post(&record(&"T".repeat(250), "body"), &settings);
        assert_eq!(text.chars().count(), SOCIAL_POST_LIMIT);
        assert!(text.ends_with("..."));
    }

    #[test]
    fn email_carries_subject_and_excerpt() {
        let settings = NotificationSettings::new("NewsApp");
        let content = "c".repeat(500);
        let message = compose_email(
            &record("Big Story", &content),
            &settings,
            vec!["a@example.com".into()],
        );
        assert_eq!(message.subject, "New Article: Big Story");
        assert!(message.body.contains("Author: jdoe"));
        assert!(message.body.contains(&format!("{}...", "c".repeat(200))));
        assert!(!message.body.contains(&"c".repeat(201)));
        assert!(message.body.starts_with("Hello!\n\n"));
        assert!(message.body.contains("Read the full article on NewsApp!"));
        assert!(message.body.ends_with("Best regards,\nThe NewsApp Team"));
        assert_eq!(message.recipients, vec!["a@example.com".to_string()]);
    }
}
