//! Server-side data loading for rendered views.
//!
//! Loaders hand a view model to the rendering layer unmodified, or send the
//! browser elsewhere when there is nothing to render.

pub mod lead_edit;

pub use lead_edit::*;

use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;

pub const LOGIN_PATH: &str = "/login";
pub const LEADS_PATH: &str = "/leads";

#[derive(Debug, PartialEq)]
pub enum PageOutcome<T> {
    Render(T),
    Redirect(&'static str),
}

impl<T: Serialize> IntoResponse for PageOutcome<T> {
    fn into_response(self) -> Response {
        match self {
            PageOutcome::Render(page) => Json(page).into_response(),
            PageOutcome::Redirect(to) => Redirect::to(to).into_response(),
        }
    }
}
