//! Success envelope: `{status: "success", message, ...}`

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use super::operation::Operation;

/// Successful handler response. `body` is flattened next to `status` and
/// `message`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    #[serde(skip)]
    code: StatusCode,
    status: &'static str,
    message: &'static str,
    #[serde(flatten)]
    body: T,
}

/// Body carrying a `result` field (rows or execution metadata).
#[derive(Debug, Serialize)]
pub struct WithResult<T> {
    pub result: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(op: Operation, body: T) -> Self {
        Self {
            code: op.success_status(),
            status: "success",
            message: op.success_message(),
            body,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.code
    }
}

impl<T: Serialize> Envelope<WithResult<T>> {
    pub fn result(op: Operation, result: T) -> Self {
        Self::new(op, WithResult { result })
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn result_envelope_shape() {
        let env = Envelope::result(Operation::List, vec![1, 2]);
        assert_eq!(env.status_code(), StatusCode::OK);
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({
                "status": "success",
                "message": "Obteniendo Tareas",
                "result": [1, 2]
            })
        );
    }

    #[test]
    fn flattened_body_sits_beside_message() {
        #[derive(Serialize)]
        struct Created {
            id: u64,
        }

        let env = Envelope::new(Operation::Create, Created { id: 3 });
        let value = serde_json::to_value(&env).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["message"], "Tarea insertada con exito");
    }
}
