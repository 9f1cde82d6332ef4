// src/classifier/gemini.rs
use crate::classifier::image::InlineImage;
use crate::classifier::{Classification, Classifier, ClassifierError};
use crate::domain::AiAnalysis;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use url::Url;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";

const SYSTEM_INSTRUCTION: &str = "You are an intelligent civic grievance assistant. \
Analyze the user's complaint (text and optional image). \
Categorize the issue into one of: Sanitation, Roads, Water Supply, Electricity, Garbage, Public Transport, Other. \
Assign a priority (High, Medium, Low) based on urgency and public impact. \
Provide a short 1-sentence summary. \
Suggest a short 1-sentence action for the municipal team.";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// `None` puts the gateway in fallback mode.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

pub struct GeminiClassifier {
    api_key: Option<String>,
    endpoint: Url,
    client: Client,
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlinePart<'a> {
    inline_data: InlineData<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Text(TextPart<'a>),
    Inline(InlinePart<'a>),
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: SystemInstruction<'a>,
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// All four fields required, priority restricted to the closed set.
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "category": { "type": "STRING" },
            "priority": { "type": "STRING", "enum": ["High", "Medium", "Low"] },
            "summary": { "type": "STRING" },
            "suggestedAction": { "type": "STRING" }
        },
        "required": ["category", "priority", "summary", "suggestedAction"]
    })
}

fn build_request<'a>(
    description: &'a str,
    image: Option<&'a InlineImage>,
) -> GenerateContentRequest<'a> {
    let mut parts = vec![RequestPart::Text(TextPart { text: description })];

    if let Some(img) = image {
        parts.push(RequestPart::Inline(InlinePart {
            inline_data: InlineData {
                mime_type: &img.mime_type,
                data: &img.data,
            },
        }));
    }

    GenerateContentRequest {
        system_instruction: SystemInstruction {
            parts: vec![TextPart {
                text: SYSTEM_INSTRUCTION,
            }],
        },
        contents: vec![RequestContent { role: "user", parts }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            response_schema: response_schema(),
        },
    }
}

/// Pull the model's JSON text out of the first candidate.
fn extract_text(body: &str) -> Result<String, ClassifierError> {
    let resp: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| ClassifierError::JsonParse(e.to_string()))?;

    let text: String = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect::<String>())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ClassifierError::EmptyResponse);
    }
    Ok(text)
}

fn parse_analysis(text: &str) -> Result<AiAnalysis, ClassifierError> {
    let analysis: AiAnalysis = serde_json::from_str(text.trim())
        .map_err(|e| ClassifierError::JsonParse(e.to_string()))?;

    if analysis.category.trim().is_empty() {
        return Err(ClassifierError::JsonParse("empty category".into()));
    }
    Ok(analysis)
}

impl GeminiClassifier {
    pub fn new(cfg: &GeminiConfig) -> Result<Self, ClassifierError> {
        let mut base = cfg.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let endpoint = Url::parse(&base)
            .and_then(|u| u.join(&format!("models/{}:generateContent", cfg.model)))
            .map_err(|e| ClassifierError::Network(format!("bad endpoint: {e}")))?;

        let client = Client::builder()
            .build()
            .map_err(|e| ClassifierError::Network(e.to_string()))?;

        Ok(Self {
            api_key: cfg.api_key.clone().filter(|k| !k.trim().is_empty()),
            endpoint,
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn is_live(&self) -> bool {
        self.api_key.is_some()
    }

    fn try_classify(
        &self,
        description: &str,
        image_base64: Option<&str>,
    ) -> Result<AiAnalysis, ClassifierError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ClassifierError::MissingCredential)?;

        // A broken photo should not cost us the text classification.
        let image = match image_base64.map(InlineImage::from_payload) {
            Some(Ok(img)) => Some(img),
            Some(Err(e)) => {
                tracing::warn!("dropping image from classification request: {e}");
                None
            }
            None => None,
        };

        let payload = build_request(description, image.as_ref());

        let resp = self
            .client
            .post(self.endpoint.clone())
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .map_err(|e| ClassifierError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| ClassifierError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ClassifierError::Api {
                status: status.as_u16(),
                body,
            });
        }

        parse_analysis(&extract_text(&body)?)
    }
}

impl Classifier for GeminiClassifier {
    fn classify(&self, description: &str, image_base64: Option<&str>) -> Classification {
        match self.try_classify(description, image_base64) {
            Ok(analysis) => Classification::Model(analysis),
            Err(ClassifierError::MissingCredential) => {
                tracing::debug!("no API key configured, using fallback classification");
                Classification::fallback()
            }
            Err(e) => {
                tracing::error!("AI analysis failed: {e}");
                Classification::fallback()
            }
        }
    }
}
