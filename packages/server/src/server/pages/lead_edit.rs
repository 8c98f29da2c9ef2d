use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::{PageOutcome, LEADS_PATH, LOGIN_PATH};
use crate::common::{Actor, Capability, LeadId, Session, StoreError, StoreResult};
use crate::domains::leads::Lead;
use crate::domains::properties::PropertyOption;
use crate::domains::users::UserSummary;
use crate::kernel::BaseCrmStore;
use crate::server::middleware::CurrentSession;
use crate::server::{ApiError, AxumAppState};

/// How many properties the lead form offers.
pub const PROPERTY_OPTION_LIMIT: i64 = 100;

/// View model for the lead edit screen.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadEditPage {
    pub lead: Lead,
    pub properties: Vec<PropertyOption>,
    pub users: Vec<UserSummary>,
}

/// Load the lead plus the properties and users the form can pick from.
///
/// The three reads run concurrently. No session sends the browser to the
/// login page; an unknown lead sends it back to the lead list.
pub async fn load_lead_edit_page(
    store: &dyn BaseCrmStore,
    session: Option<&Session>,
    lead_id: LeadId,
) -> StoreResult<PageOutcome<LeadEditPage>> {
    if Actor::new(session).can(Capability::EditLeads).check().is_err() {
        return Ok(PageOutcome::Redirect(LOGIN_PATH));
    }

    let loaded = tokio::try_join!(
        store.find_lead(lead_id),
        store.list_property_options(PROPERTY_OPTION_LIMIT),
        store.list_users(),
    );

    match loaded {
        Ok((lead, properties, users)) => Ok(PageOutcome::Render(LeadEditPage {
            lead,
            properties,
            users,
        })),
        Err(StoreError::NotFound) => Ok(PageOutcome::Redirect(LEADS_PATH)),
        Err(e) => Err(e),
    }
}

/// `GET /leads/{id}/edit`
pub async fn lead_edit_page(
    State(state): State<AxumAppState>,
    session: CurrentSession,
    path: Result<Path<LeadId>, PathRejection>,
) -> Result<Response, ApiError> {
    let outcome = match path {
        Ok(Path(lead_id)) => {
            load_lead_edit_page(state.store.as_ref(), session.0.as_ref(), lead_id).await?
        }
        Err(_) if session.0.is_none() => PageOutcome::Redirect(LOGIN_PATH),
        Err(_) => PageOutcome::Redirect(LEADS_PATH),
    };

    Ok(outcome.into_response())
}
