//! Natural-language assistant scoped to the project catalog.
//!
//! The gateway never fails from the caller's point of view. Anything that goes wrong on the
//! way to the language model is logged and answered with [`FALLBACK_ANSWER`].

use std::{fmt::Write as _, sync::Arc, time::Instant};

use async_trait::async_trait;
use catalog::{Award, Catalog};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::{config::AssistantSettings, error::AssistantError};

pub const FALLBACK_ANSWER: &str = "I'm sorry, I'm having trouble connecting to my brain right now. Please try again or explore the projects manually.";

const PROMPT_PREAMBLE: &str = "You are a helpful Capstone Project Assistant at a university. Use the following context about student projects to answer questions concisely for totem visitors. Use the semester notation YEAR.SEM (e.g. 2024.1) when referring to dates.";

/// A trimmed, non-blank visitor question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantQuery(String);

impl AssistantQuery {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn build_context(catalog: &Catalog) -> String {
    let mut blocks = Vec::with_capacity(catalog.len());
    for project in catalog.projects() {
        let award = match project.award {
            Award::None => "No special award",
            award => award.label(),
        };
        let mut block = String::new();
        let _ = writeln!(block, "Project: {}", project.title);
        let _ = writeln!(block, "Category: {}", project.category.label());
        let _ = writeln!(block, "Semester: {}", project.semester_label());
        let _ = writeln!(block, "Advisor: {}", project.advisor);
        let _ = writeln!(block, "Award: {award}");
        let _ = write!(block, "Summary: {}", project.long_description);
        blocks.push(block);
    }
    blocks.join("\n\n")
}

pub fn build_prompt(context: &str, query: &AssistantQuery) -> String {
    format!(
        "{PROMPT_PREAMBLE}\n\nCONTEXT:\n{context}\n\nQUESTION:\n{}",
        query.as_str()
    )
}

#[async_trait]
pub trait AssistantBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AssistantError>;
}

/// Google Generative Language `generateContent` client.
pub struct GeminiBackend {
    http: Client,
    settings: AssistantSettings,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiBackend {
    pub fn new(settings: AssistantSettings) -> Result<Self, AssistantError> {
        let http = Client::builder()
            .timeout(settings.request_timeout)
            .build()?;
        Ok(Self { http, settings })
    }

    fn endpoint(&self) -> Result<Url, AssistantError> {
        let raw = format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        );
        Url::parse(&raw).map_err(|source| AssistantError::InvalidEndpoint { url: raw, source })
    }
}

#[async_trait]
impl AssistantBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(AssistantError::MissingApiKey)?;

        let body = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                max_output_tokens: self.settings.max_output_tokens,
            },
        };

        let response = self
            .http
            .post(self.endpoint()?)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)
            .map_err(|err| AssistantError::Malformed(err.to_string()))?;
        extract_text(parsed)
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String, AssistantError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AssistantError::Malformed("response has no candidates".into()))?;
    let content = candidate
        .content
        .ok_or_else(|| AssistantError::Malformed("candidate has no content".into()))?;

    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    let text = text.trim();
    if text.is_empty() {
        return Err(AssistantError::EmptyAnswer);
    }
    Ok(text.to_string())
}

/// Answers visitor questions with the catalog as context.
///
/// Cheap to clone; clones share the backend and the prebuilt context document.
#[derive(Clone)]
pub struct AssistantGateway {
    backend: Arc<dyn AssistantBackend>,
    context: Arc<str>,
}

impl AssistantGateway {
    pub fn new(backend: Arc<dyn AssistantBackend>, catalog: &Catalog) -> Self {
        Self {
            backend,
            context: build_context(catalog).into(),
        }
    }

    pub fn from_settings(
        settings: AssistantSettings,
        catalog: &Catalog,
    ) -> Result<Self, AssistantError> {
        let backend = GeminiBackend::new(settings)?;
        Ok(Self::new(Arc::new(backend), catalog))
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub async fn ask(&self, query: &AssistantQuery) -> String {
        let prompt = build_prompt(&self.context, query);
        let started = Instant::now();
        debug!(query_len = query.as_str().len(), "dispatching assistant query");

        match self.backend.generate(&prompt).await {
            Ok(answer) => {
                debug!(elapsed_ms = started.elapsed().as_millis() as u64, "assistant answered");
                answer
            }
            Err(err) => {
                warn!(
                    error = %err,
                    timeout = err.is_timeout(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "assistant query failed; using fallback answer"
                );
                FALLBACK_ANSWER.to_string()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/assistant_tests.rs"]
mod tests;
