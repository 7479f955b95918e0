use super::parse::parse_suggestions;
use super::prompt::build_prompt;
use super::SuggestionEnhancer;
use crate::error::EnhancerError;
use crate::types::analysis::AnalysisResult;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Suggestions from the Gemini `generateContent` endpoint.
pub struct GeminiEnhancer {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
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
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn reply_text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl GeminiEnhancer {
    pub fn new(api_key: String, model: String, timeout: Duration) -> Result<Self, EnhancerError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("readme-ranker/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_key,
            model,
        })
    }

    pub fn from_env(model: String, timeout: Duration) -> Result<Self, EnhancerError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(EnhancerError::MissingApiKey)?;
        Self::new(api_key, model, timeout)
    }

    fn endpoint(&self) -> String {
        format!("{API_BASE}/{}:generateContent", self.model)
    }

    fn generate(&self, prompt: &str) -> Result<String, EnhancerError> {
        let request = GenerateRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        };

        debug!(model = %self.model, "requesting suggestions");
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EnhancerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json()?;
        parsed.reply_text().ok_or(EnhancerError::MalformedReply)
    }
}

impl SuggestionEnhancer for GeminiEnhancer {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn enhance(
        &self,
        analysis: &AnalysisResult,
        content: &str,
    ) -> Result<Vec<String>, EnhancerError> {
        let reply = self.generate(&build_prompt(analysis, content))?;
        let suggestions = parse_suggestions(&reply);
        if suggestions.is_empty() {
            return Err(EnhancerError::Empty);
        }
        Ok(suggestions)
    }
}
