//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Page error: {0}")]
    Page(#[from] lumen_page::PageError),

    #[error("Tab error: {0}")]
    Tab(#[from] lumen_tabs::TabError),

    #[error("Overlay error: {0}")]
    Overlay(#[from] lumen_overlay::OverlayError),

    #[error("Notification error: {0}")]
    Notify(#[from] lumen_notify::NotifyError),

    #[error("Motion error: {0}")]
    Motion(#[from] lumen_motion::MotionError),

    #[error("Form error: {0}")]
    Form(#[from] lumen_form::FormError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Coordinator not initialized")]
    NotInitialized,
}
