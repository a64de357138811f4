use serde::Serialize;

pub const GREETING: &str = "Hello From firebase functions";

/// Body returned by the hello function
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelloMessage {
    pub message: &'static str,
}

impl HelloMessage {
    pub fn greeting() -> Self {
        Self { message: GREETING }
    }
}
