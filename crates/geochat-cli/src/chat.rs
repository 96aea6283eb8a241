//! Chat session controller.
//!
//! Owns query submission: reads the pending input, appends the user entry,
//! issues the request, and feeds the reply to the renderer. Failures become
//! error-role transcript entries; the session always stays interactive.

use console::style;

use geochat_client::MappingApi;
use geochat_core::models::ChatMessage;
use geochat_core::session::{Flow, FlowTokens, Transcript};

use crate::progress;
use crate::render::ResponseRenderer;

pub struct ChatController<'a> {
    pub api: &'a dyn MappingApi,
    pub transcript: &'a mut Transcript,
    pub tokens: &'a mut FlowTokens,
    pub renderer: &'a ResponseRenderer,
}

impl ChatController<'_> {
    /// Submit one query. Blank or whitespace-only input is a silent no-op:
    /// no request, no transcript entry.
    pub async fn submit_query(&mut self, raw: &str) -> anyhow::Result<()> {
        let message = raw.trim();
        if message.is_empty() {
            return Ok(());
        }

        self.transcript.push(ChatMessage::user(message));

        let token = self.tokens.issue(Flow::Query);
        let spinner = progress::create_spinner("Thinking...");
        let result = self.api.process_query(message).await;
        progress::finish_and_clear(&spinner);

        if !self.tokens.is_current(token) {
            tracing::debug!("discarding stale query response");
            return Ok(());
        }

        match result {
            Ok(response) => {
                self.renderer.render(self.transcript, &response.into_reply())?;
            }
            Err(error) => {
                let text = format!("Error: {error}");
                eprintln!("{} {}", style("error>").red().bold(), text);
                self.transcript.push(ChatMessage::error(text));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockApi;
    use geochat_client::dto::QueryResponse;
    use geochat_core::models::Role;
    use geochat_core::registry::MemoryMapRegistry;
    use std::sync::Arc;

    fn test_renderer() -> ResponseRenderer {
        let dir = std::env::temp_dir().join(format!("geochat-chat-{}", uuid::Uuid::new_v4()));
        ResponseRenderer::new(dir, Arc::new(MemoryMapRegistry::new()))
    }

    async fn submit(api: &MockApi, raw: &str) -> Transcript {
        let mut transcript = Transcript::new();
        let mut tokens = FlowTokens::new();
        let renderer = test_renderer();
        let mut controller = ChatController {
            api,
            transcript: &mut transcript,
            tokens: &mut tokens,
            renderer: &renderer,
        };
        controller.submit_query(raw).await.unwrap();
        transcript
    }

    #[tokio::test]
    async fn whitespace_only_input_is_a_silent_no_op() {
        let api = MockApi::new();
        let transcript = submit(&api, "   \t  ").await;

        assert!(transcript.is_empty());
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn query_appends_user_then_ai_entries() {
        let api = MockApi::with_query(
            serde_json::from_value::<QueryResponse>(serde_json::json!({
                "ai_response": "3 flood zones found",
                "statistics": "No numeric columns",
            }))
            .unwrap(),
        );

        let transcript = submit(&api, "  show flood zones  ").await;

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[0].role, Role::User);
        assert_eq!(transcript.entries()[0].text, "show flood zones");
        assert_eq!(transcript.entries()[1].role, Role::Ai);
        assert_eq!(transcript.entries()[1].text, "3 flood zones found");

        // trimmed text is what goes over the wire
        assert_eq!(
            api.last_query.lock().unwrap().as_deref(),
            Some("show flood zones")
        );
    }

    #[tokio::test]
    async fn failure_appends_an_error_entry() {
        let api = MockApi::with_query_error("Please upload a GeoJSON file first! 📁");

        let transcript = submit(&api, "show flood zones").await;

        assert_eq!(transcript.len(), 2);
        let error_entry = &transcript.entries()[1];
        assert_eq!(error_entry.role, Role::Error);
        assert_eq!(error_entry.text, "Error: Please upload a GeoJSON file first! 📁");
    }
}
