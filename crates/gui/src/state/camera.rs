//! Camera permission and feed readiness.
//!
//! The permission answer arrives asynchronously over a oneshot channel and is
//! polled from the UI tick. Once granted, the feed counts as ready when it
//! says so or after a fallback delay.

use std::time::{Duration, Instant};

use tokio::sync::oneshot;

use super::settings::CameraSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Source of the camera permission answer
pub trait CameraAccess {
    fn request(&mut self, reply: oneshot::Sender<PermissionStatus>);
}

/// Desktop stand-in: answers from settings immediately
pub struct ConfiguredAccess {
    pub grant: bool,
}

impl CameraAccess for ConfiguredAccess {
    fn request(&mut self, reply: oneshot::Sender<PermissionStatus>) {
        let status = if self.grant {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        };
        // Receiver gone means the state was dropped; nothing to report to
        let _ = reply.send(status);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraPhase {
    /// Waiting for the permission answer
    Requesting,
    Denied,
    /// Granted, feed not ready yet
    Warming,
    Ready,
}

pub struct CameraState {
    pending: Option<oneshot::Receiver<PermissionStatus>>,
    phase: CameraPhase,
    granted_at: Option<Instant>,
    fallback: Duration,
}

impl CameraState {
    /// Ask `access` for permission and start waiting for the answer
    pub fn request<A: CameraAccess + ?Sized>(access: &mut A, settings: &CameraSettings) -> Self {
        let (tx, rx) = oneshot::channel();
        access.request(tx);
        Self {
            pending: Some(rx),
            phase: CameraPhase::Requesting,
            granted_at: None,
            fallback: Duration::from_millis(settings.ready_fallback_ms),
        }
    }

    pub fn phase(&self) -> CameraPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == CameraPhase::Ready
    }

    /// Pick up the permission answer and apply the readiness fallback.
    /// Returns the phase after polling.
    pub fn poll(&mut self, now: Instant) -> CameraPhase {
        if let Some(rx) = self.pending.as_mut() {
            match rx.try_recv() {
                Ok(PermissionStatus::Granted) => {
                    tracing::info!("Camera permission granted");
                    self.pending = None;
                    self.phase = CameraPhase::Warming;
                    self.granted_at = Some(now);
                }
                Ok(PermissionStatus::Denied) => {
                    tracing::warn!("Camera permission denied");
                    self.pending = None;
                    self.phase = CameraPhase::Denied;
                }
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    tracing::warn!("Camera permission request dropped without an answer");
                    self.pending = None;
                    self.phase = CameraPhase::Denied;
                }
            }
        }

        if self.phase == CameraPhase::Warming {
            if let Some(at) = self.granted_at {
                if now.saturating_duration_since(at) >= self.fallback {
                    tracing::debug!("Camera ready by fallback delay");
                    self.phase = CameraPhase::Ready;
                }
            }
        }
        self.phase
    }

    /// The feed reported ready. Ignored unless permission was granted.
    pub fn mark_ready(&mut self) {
        if self.phase == CameraPhase::Warming {
            self.phase = CameraPhase::Ready;
        }
    }
}
