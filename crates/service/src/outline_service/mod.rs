#[cfg(test)]
mod tests;

use std::sync::Arc;

use outliner_core::{
    filter_by_title, AuthSession, NewOutline, Outline, OutlineContent, OutlinePage,
    RECENT_OUTLINES_PREVIEW,
};
use outliner_llm::LlmClient;
use outliner_storage::OutlineStore;

use crate::ServiceError;

/// Generates, stores, and reads outlines on behalf of one session at a time.
///
/// Every path is a straight pipeline: at most one model call, then at most one
/// store call. Nothing is retried.
pub struct OutlineService {
    store: Arc<dyn OutlineStore>,
    llm: Arc<LlmClient>,
}

impl OutlineService {
    #[must_use]
    pub fn new(store: Arc<dyn OutlineStore>, llm: Arc<LlmClient>) -> Self {
        Self { store, llm }
    }

    /// Ask the model for an outline of `question` and persist it with the
    /// question as its title.
    ///
    /// A reply that splits into an empty thesis or no points is rejected
    /// before anything is written. If the insert fails the generated content
    /// is dropped.
    pub async fn generate_outline(
        &self,
        session: &AuthSession,
        question: &str,
    ) -> Result<Outline, ServiceError> {
        if question.is_empty() {
            return Err(ServiceError::InvalidInput("question must not be empty".to_owned()));
        }

        let content = self.llm.generate_outline(question).await.inspect_err(|e| {
            tracing::error!(user_id = %session.user_id, error = %e, "outline generation failed");
        })?;

        if !content.is_complete() {
            tracing::error!(
                user_id = %session.user_id,
                thesis_empty = content.thesis.is_empty(),
                points = content.points.len(),
                "invalid outline format generated by model"
            );
            return Err(ServiceError::InvalidGeneration);
        }

        let outline = self
            .store
            .insert_outline(session, NewOutline::new(question, content))
            .await
            .inspect_err(|e| {
                tracing::error!(user_id = %session.user_id, error = %e, "failed to insert outline");
            })?;
        tracing::info!(user_id = %session.user_id, outline_id = %outline.id, "outline generated");
        Ok(outline)
    }

    /// Persist a caller-authored outline as given.
    pub async fn submit_outline(
        &self,
        session: &AuthSession,
        title: String,
        content: OutlineContent,
    ) -> Result<Outline, ServiceError> {
        let outline = self
            .store
            .insert_outline(session, NewOutline { title, content })
            .await
            .inspect_err(|e| {
                tracing::error!(user_id = %session.user_id, error = %e, "failed to insert outline");
            })?;
        tracing::info!(user_id = %session.user_id, outline_id = %outline.id, "outline submitted");
        Ok(outline)
    }

    /// The session user's outlines, newest first, narrowed to titles
    /// containing `query` (case-insensitive) when one is given.
    pub async fn list_outlines(
        &self,
        session: &AuthSession,
        query: Option<&str>,
        page: OutlinePage,
    ) -> Result<Vec<Outline>, ServiceError> {
        let outlines = self.store.list_outlines(session, page).await?;
        Ok(match query {
            Some(q) if !q.is_empty() => filter_by_title(&outlines, q).into_iter().cloned().collect(),
            _ => outlines,
        })
    }

    /// The few newest outlines shown on the dashboard.
    pub async fn recent_outlines(&self, session: &AuthSession) -> Result<Vec<Outline>, ServiceError> {
        Ok(self.store.list_outlines(session, OutlinePage::latest(RECENT_OUTLINES_PREVIEW)).await?)
    }

    pub async fn get_outline(&self, session: &AuthSession, id: &str) -> Result<Outline, ServiceError> {
        self.store
            .get_outline(session, id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("outline '{id}'")))
    }
}
