use serde::Serialize;

pub use self::book::*;

mod book;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
}

/// Body shared by every response: `{status, message?, data?}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T = ()> {
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..self
        }
    }
}

impl Envelope {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: Status::Fail,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::Envelope;

    #[test]
    fn omits_absent_fields() {
        let fail = serde_json::to_value(Envelope::fail("Buku tidak ditemukan")).unwrap();
        assert_eq!(
            fail,
            json!({ "status": "fail", "message": "Buku tidak ditemukan" })
        );

        let success = serde_json::to_value(Envelope::success(json!({ "books": [] }))).unwrap();
        assert_eq!(success, json!({ "status": "success", "data": { "books": [] } }));
    }
}
