use serde::Serialize;
use serde_json::Value;

/// What the email provider answered: status code and parsed JSON body.
#[derive(Debug, Clone)]
pub struct ProviderReply {
    pub status: u16,
    pub body: Value,
}

impl ProviderReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outcome returned to the caller once the provider has answered.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RelayResult {
    pub success: bool,
    pub result: Value,
}

impl RelayResult {
    /// HTTP status for the caller: 200 when the provider accepted the email, 500 otherwise.
    pub fn http_status_code(&self) -> u16 {
        if self.success {
            200
        } else {
            500
        }
    }
}

impl From<ProviderReply> for RelayResult {
    fn from(reply: ProviderReply) -> Self {
        Self {
            success: reply.is_success(),
            result: reply.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepted_reply_becomes_success() {
        let result = RelayResult::from(ProviderReply {
            status: 200,
            body: json!({"id": "abc"}),
        });
        assert_eq!(result.http_status_code(), 200);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"success": true, "result": {"id": "abc"}})
        );
    }

    #[test]
    fn rejected_reply_keeps_provider_payload() {
        let result = RelayResult::from(ProviderReply {
            status: 422,
            body: json!({"message": "invalid to address"}),
        });
        assert!(!result.success);
        assert_eq!(result.http_status_code(), 500);
        assert_eq!(result.result["message"], "invalid to address");
    }
}
