//! Runs a classified route against the external services and sends the replies.

use crate::core::commands;
use crate::core::config::{Config, InferenceConfig};
use crate::core::docs;
use crate::core::github::{GitHubClient, GitHubError};
use crate::core::inference::{InferenceClient, InferenceError};
use crate::core::prompts::{self, PromptKind};
use crate::core::util;

use super::format;
use super::reply::{ReplySink, SendError, deliver_chunked};
use super::{COMMAND_PREFIX, Command, Route, classify};

/// Failure of a single invocation. The adapter logs it; the user sees nothing.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    GitHub(#[from] GitHubError),
    #[error(transparent)]
    Send(#[from] SendError),
}

/// Failure to build the service clients at startup.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    GitHub(#[from] GitHubError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Shared, immutable handler state. One instance serves every message.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    github: GitHubClient,
    inference: InferenceClient,
    inference_config: InferenceConfig,
    gitsearch_max_results: u32,
}

impl Dispatcher {
    pub fn new(config: &Config) -> Result<Self, InitError> {
        Ok(Dispatcher {
            github: GitHubClient::new(&config.github_api_url, config.github_token.as_deref())?,
            inference: InferenceClient::new(&config.inference.url)?,
            inference_config: config.inference.clone(),
            gitsearch_max_results: config.gitsearch_max_results,
        })
    }

    /// Classify and handle one inbound message.
    pub async fn handle(&self, text: &str, sink: &dyn ReplySink) -> Result<(), DispatchError> {
        let route = classify(text, COMMAND_PREFIX);
        if route != Route::Ignore {
            log::debug!("dispatch: {} <- {:?}", route_name(&route), util::preview(text, 60));
        }
        self.execute(route, sink).await
    }

    pub async fn execute(&self, route: Route, sink: &dyn ReplySink) -> Result<(), DispatchError> {
        match route {
            Route::Ignore => Ok(()),
            Route::EasterEgg => Ok(sink.send_text(format::EASTER_EGG_REPLY).await?),
            Route::Usage(name) => {
                let usage = commands::usage(name).unwrap_or(name);
                Ok(sink.send_text(&format::usage_hint(usage)).await?)
            }
            Route::FreeForm(text) => self.answer(PromptKind::FreeForm, &text, sink).await,
            Route::Command(cmd) => self.run_command(cmd, sink).await,
        }
    }

    async fn run_command(&self, cmd: Command, sink: &dyn ReplySink) -> Result<(), DispatchError> {
        match cmd {
            Command::Search { lang, query } => {
                sink.send_text(&format::docs_status(&lang, &query)).await?;
                let reply = docs::search_docs(&lang, &query);
                if docs::is_doc_url(&reply) {
                    sink.send_embed(&format::docs_embed(&lang, &query, &reply))
                        .await?;
                } else {
                    sink.send_text(&reply).await?;
                }
            }
            Command::GitSearch { query } => {
                sink.send_text(&format::gitsearch_status(&query)).await?;
                let repos = self
                    .github
                    .search_repos(&query, self.gitsearch_max_results)
                    .await?;
                if repos.is_empty() {
                    sink.send_text(format::NO_REPOS_MESSAGE).await?;
                } else {
                    deliver_chunked(sink, &format::repo_list(&repos)).await?;
                }
            }
            Command::GitUser { username } => {
                sink.send_text(&format::gituser_status(&username)).await?;
                match self.github.fetch_user(&username).await? {
                    Some(user) => sink.send_embed(&format::user_embed(&user)).await?,
                    None => sink.send_text(format::USER_NOT_FOUND_MESSAGE).await?,
                }
            }
            Command::Ask { question } => {
                sink.send_text(format::THINKING_MESSAGE).await?;
                self.answer(PromptKind::Ask, &question, sink).await?;
            }
            Command::Help => sink.send_embed(&format::help_embed()).await?,
            Command::About => sink.send_embed(&format::about_embed()).await?,
        }
        Ok(())
    }

    async fn answer(
        &self,
        kind: PromptKind,
        question: &str,
        sink: &dyn ReplySink,
    ) -> Result<(), DispatchError> {
        if let Err(e) = sink.typing().await {
            log::debug!("typing indicator failed: {}", e);
        }
        let payload = prompts::payload_for(kind, question, &self.inference_config);
        let result = self.inference.generate(&payload).await;
        deliver_chunked(sink, &format::inference_reply(&result, kind)).await?;
        Ok(())
    }
}

fn route_name(route: &Route) -> &'static str {
    match route {
        Route::Command(cmd) => cmd.name(),
        Route::Usage(_) => "usage",
        Route::EasterEgg => "easter-egg",
        Route::FreeForm(_) => "free-form",
        Route::Ignore => "ignore",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use mockito::{Matcher, Server, ServerGuard};
    use serde_json::json;

    use super::super::reply::testing::{RecordingSink, Sent};
    use super::*;

    fn dispatcher_for(server: &ServerGuard) -> Dispatcher {
        let vars: HashMap<&str, String> = HashMap::from([
            ("GITHUB_API_URL", server.url()),
            ("INFERENCE_URL", server.url()),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();
        Dispatcher::new(&config).unwrap()
    }

    fn offline_dispatcher() -> Dispatcher {
        let vars: HashMap<&str, String> = HashMap::from([
            ("GITHUB_API_URL", "http://127.0.0.1:1".to_string()),
            ("INFERENCE_URL", "http://127.0.0.1:1".to_string()),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();
        Dispatcher::new(&config).unwrap()
    }

    #[tokio::test]
    async fn search_python_sends_status_then_embed() {
        let sink = RecordingSink::default();
        offline_dispatcher()
            .handle("/search python list comprehension", &sink)
            .await
            .unwrap();

        let sent = sink.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(
            sent[0],
            Sent::Text("🔍 Searching **python** docs for: `list comprehension`...".to_string())
        );
        match &sent[1] {
            Sent::Embed(embed) => {
                assert_eq!(
                    embed.url.as_deref(),
                    Some("https://devdocs.io/python~3/list+comprehension")
                );
            }
            other => panic!("expected embed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn search_with_long_query_still_sends_link() {
        let query = "word ".repeat(80);
        let sink = RecordingSink::default();
        offline_dispatcher()
            .handle(&format!("/search python {}", query), &sink)
            .await
            .unwrap();

        let embeds = sink.embeds();
        assert_eq!(embeds.len(), 1);
        assert!(embeds[0].title.chars().count() <= format::EMBED_TITLE_MAX);
        let url = embeds[0].url.as_deref().unwrap();
        assert_eq!(url.matches("word").count(), 80);
    }

    #[tokio::test]
    async fn search_unsupported_language_replies_plain_text() {
        let sink = RecordingSink::default();
        offline_dispatcher()
            .handle("/search ruby blocks", &sink)
            .await
            .unwrap();
        assert_eq!(sink.texts().last().unwrap(), docs::UNSUPPORTED_MESSAGE);
        assert!(sink.embeds().is_empty());
    }

    #[tokio::test]
    async fn gitsearch_lists_repositories() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/repositories")
            .match_query(Matcher::UrlEncoded("per_page".into(), "3".into()))
            .with_status(200)
            .with_body(
                json!({
                    "items": [
                        { "full_name": "a/one", "html_url": "https://github.com/a/one", "stargazers_count": 10, "description": "First" },
                        { "full_name": "b/two", "html_url": "https://github.com/b/two", "stargazers_count": 5, "description": null }
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let sink = RecordingSink::default();
        dispatcher_for(&server)
            .handle("/gitsearch web framework", &sink)
            .await
            .unwrap();

        let texts = sink.texts();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0], "🔍 Searching GitHub for: `web framework`...");
        let one = texts[1].find("a/one").unwrap();
        let two = texts[1].find("b/two").unwrap();
        assert!(one < two);
        assert!(texts[1].contains("No description."));
    }

    #[tokio::test]
    async fn gitsearch_api_error_is_canned_message() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/repositories")
            .match_query(Matcher::Any)
            .with_status(403)
            .create_async()
            .await;

        let sink = RecordingSink::default();
        dispatcher_for(&server)
            .handle("/gitsearch anything", &sink)
            .await
            .unwrap();
        assert_eq!(sink.texts().last().unwrap(), format::NO_REPOS_MESSAGE);
    }

    #[tokio::test]
    async fn gitsearch_transport_error_propagates_without_reply() {
        let sink = RecordingSink::default();
        let err = offline_dispatcher()
            .handle("/gitsearch anything", &sink)
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::GitHub(_)));
        // Only the status line made it out.
        assert_eq!(sink.sent().len(), 1);
    }

    #[tokio::test]
    async fn gituser_not_found() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/users/nobody-here")
            .with_status(404)
            .create_async()
            .await;

        let sink = RecordingSink::default();
        dispatcher_for(&server)
            .handle("/gituser nobody-here", &sink)
            .await
            .unwrap();
        assert_eq!(
            sink.texts(),
            vec![
                "🔍 Fetching GitHub user `nobody-here`...".to_string(),
                format::USER_NOT_FOUND_MESSAGE.to_string()
            ]
        );
    }

    #[tokio::test]
    async fn gituser_found_sends_embed() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/users/octocat")
            .with_status(200)
            .with_body(
                json!({
                    "login": "octocat",
                    "html_url": "https://github.com/octocat",
                    "avatar_url": "https://avatars.example/octocat",
                    "name": "The Octocat",
                    "bio": null,
                    "public_repos": 8,
                    "followers": 100,
                    "following": 9
                })
                .to_string(),
            )
            .create_async()
            .await;

        let sink = RecordingSink::default();
        dispatcher_for(&server)
            .handle("/gituser octocat", &sink)
            .await
            .unwrap();

        let embeds = sink.embeds();
        assert_eq!(embeds.len(), 1);
        assert_eq!(embeds[0].title, "The Octocat (@octocat)");
        assert_eq!(embeds[0].description.as_deref(), Some("No bio available."));
    }

    #[tokio::test]
    async fn ask_chunks_long_answers_in_order() {
        let mut server = Server::new_async().await;
        let answer = format!("{}{}", "x".repeat(2500), "END");
        let _mock = server
            .mock("POST", "/api/generate")
            .match_body(Matcher::PartialJson(json!({ "options": { "num_predict": 800 } })))
            .with_status(200)
            .with_body(json!({ "response": answer }).to_string())
            .create_async()
            .await;

        let sink = RecordingSink::default();
        dispatcher_for(&server)
            .handle("/ask what is a monad", &sink)
            .await
            .unwrap();

        let sent = sink.sent();
        assert_eq!(sent[0], Sent::Text(format::THINKING_MESSAGE.to_string()));
        assert_eq!(sent[1], Sent::Typing);
        let texts = sink.texts();
        // thinking + two chunks
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[1].chars().count(), 2000);
        assert!(texts[1].starts_with("**Curiosity says:**\n"));
        assert!(texts[2].contains("END"));
        assert!(texts[2].contains("*Response time:"));
    }

    #[tokio::test]
    async fn ask_failure_is_canned_message() {
        let sink = RecordingSink::default();
        offline_dispatcher()
            .handle("/ask anything at all", &sink)
            .await
            .unwrap();
        assert_eq!(sink.texts().last().unwrap(), format::ASK_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn free_form_question_reaches_inference() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate")
            .match_body(Matcher::PartialJson(json!({ "options": { "num_predict": 1000 } })))
            .with_status(200)
            .with_body(json!({ "response": "Use reversed() or slicing." }).to_string())
            .expect(1)
            .create_async()
            .await;

        let sink = RecordingSink::default();
        dispatcher_for(&server)
            .handle("how do I reverse a list in python", &sink)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(sink.sent()[0], Sent::Typing);
        assert!(sink.texts()[0].contains("Use reversed() or slicing."));
    }

    #[tokio::test]
    async fn easter_egg_never_calls_inference() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate")
            .expect(0)
            .create_async()
            .await;

        let sink = RecordingSink::default();
        dispatcher_for(&server)
            .handle("India, how does this code work?", &sink)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(sink.texts(), vec![format::EASTER_EGG_REPLY.to_string()]);
    }

    #[tokio::test]
    async fn small_talk_sends_nothing() {
        let sink = RecordingSink::default();
        offline_dispatcher().handle("hi", &sink).await.unwrap();
        offline_dispatcher().handle("/unknown thing", &sink).await.unwrap();
        assert!(sink.sent().is_empty());
    }

    #[tokio::test]
    async fn missing_argument_gets_usage_hint() {
        let sink = RecordingSink::default();
        offline_dispatcher().handle("/gituser", &sink).await.unwrap();
        assert_eq!(sink.texts(), vec!["Usage: `/gituser <username>`".to_string()]);
    }

    #[tokio::test]
    async fn help_and_about_are_embeds() {
        let sink = RecordingSink::default();
        let dispatcher = offline_dispatcher();
        dispatcher.handle("/help", &sink).await.unwrap();
        dispatcher.handle("/about", &sink).await.unwrap();
        let embeds = sink.embeds();
        assert_eq!(embeds.len(), 2);
        assert!(embeds[0].title.contains("Help"));
        assert!(embeds[1].title.contains("About"));
    }
}
