use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
