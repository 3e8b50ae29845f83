use std::sync::{Arc, Mutex};
use synopsis::{AbstractiveModel, DecodingParams};

#[derive(Clone)]
pub struct MockModel {
    pub summary: String,
    pub calls: Arc<Mutex<Vec<(String, DecodingParams)>>>,
    pub fail_with: Option<String>,
}

impl MockModel {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            summary: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl AbstractiveModel for MockModel {
    type Error = anyhow::Error;

    async fn generate(&self, text: &str, params: &DecodingParams) -> Result<String, Self::Error> {
        self.calls.lock().unwrap().push((text.to_string(), *params));
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.summary.clone())
    }
}
