use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::assistant::{WellnessAssistant, ANSWER_EMPTY, ANSWER_FALLBACK, TIP_EMPTY, TIP_FALLBACK};
use crate::config::AssistantConfig;
use crate::error::{PortalError, PortalResult};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

const SYSTEM_INSTRUCTION: &str = "You are Francis, a helpful, empathetic, and professional health assistant for St. Francis College Guihulngan (SFCG). Your goal is to provide general wellness advice, explain medical terms simply, and guide users to book appointments at the school clinic for serious issues. Do not provide definitive medical diagnoses or prescribe medication. Always maintain a caring tone suitable for students and faculty.";

const TIP_PROMPT: &str =
    "Generate a short, single-sentence, inspiring health or wellness tip for college students.";

/// Client for the Google Generative Language `generateContent` endpoint.
///
/// A missing API key is not an error: every call quietly degrades to the
/// fallback phrase without touching the network.
pub struct GeminiAssistant {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    question_temperature: f32,
    tip_temperature: f32,
}

impl GeminiAssistant {
    pub fn new(config: &AssistantConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config
                .api_base_url
                .clone()
                .unwrap_or_else(|| GEMINI_API_BASE.to_string()),
            question_temperature: config.question_temperature,
            tip_temperature: config.tip_temperature,
        }
    }

    /// Point the client at a different host. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(
        &self,
        prompt: &str,
        temperature: f32,
        system_instruction: Option<&str>,
    ) -> PortalResult<Option<String>> {
        let api_key = match &self.api_key {
            Some(key) => key,
            None => {
                debug!("no assistant API key configured, skipping request");
                return Err(PortalError::MissingApiKey);
            }
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content::user(prompt)],
            generation_config: GenerationConfig { temperature },
            system_instruction: system_instruction.map(Content::system),
        };

        let response = self.client.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(PortalError::ApiRequestFailed(format!(
                "assistant API returned status {}",
                response.status()
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| PortalError::ApiParseError(e.to_string()))?;

        Ok(body.first_text())
    }
}

#[async_trait]
impl WellnessAssistant for GeminiAssistant {
    fn assistant_name(&self) -> &str {
        "gemini"
    }

    async fn answer_question(&self, question: &str) -> String {
        match self
            .generate(question, self.question_temperature, Some(SYSTEM_INSTRUCTION))
            .await
        {
            Ok(Some(text)) => text,
            Ok(None) => ANSWER_EMPTY.to_string(),
            Err(e) => {
                warn!(code = e.error_code(), "assistant question failed: {}", e);
                ANSWER_FALLBACK.to_string()
            }
        }
    }

    async fn daily_tip(&self) -> String {
        match self.generate(TIP_PROMPT, self.tip_temperature, None).await {
            Ok(Some(text)) => text,
            Ok(None) => TIP_EMPTY.to_string(),
            Err(e) => {
                warn!(code = e.error_code(), "daily tip fetch failed: {}", e);
                TIP_FALLBACK.to_string()
            }
        }
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

impl Content {
    fn user(text: &str) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }

    fn system(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|p| p.text.clone())
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}
