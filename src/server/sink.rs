//! Contact delivery collaborator.
//!
//! The handler hands every accepted submission to a [`ContactSink`]. A real
//! deployment would plug in an email or persistence collaborator here; this
//! system ships a logging sink whose configurable delay stands in for that
//! downstream call.

use crate::error::SinkError;
use crate::server::contacto::ContactPayload;
use async_trait::async_trait;
use std::time::Duration;

/// Destination for accepted contact requests.
#[async_trait]
pub trait ContactSink: Send + Sync {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), SinkError>;
}

/// Sink that logs the submission and simulates processing latency.
pub struct LoggingSink {
    delay: Duration,
}

impl LoggingSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ContactSink for LoggingSink {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), SinkError> {
        tracing::info!(
            nombre = ?payload.nombre,
            email = ?payload.email,
            telefono = ?payload.telefono,
            permiso = ?payload.permiso,
            mensaje = ?payload.mensaje,
            "Formulario recibido"
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logging_sink_accepts() {
        let sink = LoggingSink::new(Duration::ZERO);
        let payload = ContactPayload {
            nombre: Some("Ana".to_string()),
            email: Some("ana@example.com".to_string()),
            telefono: None,
            mensaje: None,
            permiso: None,
        };

        assert!(sink.submit(&payload).await.is_ok());
    }

    #[tokio::test]
    async fn test_logging_sink_applies_delay() {
        let sink = LoggingSink::new(Duration::from_millis(20));
        let payload = ContactPayload::default();

        let start = std::time::Instant::now();
        sink.submit(&payload).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
