//! Status and message table for the five task handlers
//!
//! The only place that decides which status code and message a handler's
//! outcome maps to.

use axum::http::StatusCode;

/// The handler an outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn success_status(self) -> StatusCode {
        match self {
            Self::Delete => StatusCode::NO_CONTENT,
            _ => StatusCode::OK,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::List => "Obteniendo Tareas",
            Self::Get => "Obteniendo la Tarea",
            Self::Create => "Tarea insertada con exito",
            Self::Update => "Actualizando Tarea",
            Self::Delete => "Borrando Tarea",
        }
    }

    /// Status for a failed statement. List keeps its historical 404.
    pub fn failure_status(self) -> StatusCode {
        match self {
            Self::List => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Self::List => "No se pudo obtener las tareas",
            Self::Get => "No se pudo obtener la tarea",
            Self::Create => "No se pudo crear la tarea",
            Self::Update => "No se pudo actualizar la tarea",
            Self::Delete => "No se pudo borrar la tarea",
        }
    }

    pub fn not_found_message(self) -> &'static str {
        "No se encontro la tarea"
    }
}
