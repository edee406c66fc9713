//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use units_app::{
    context::AppContext,
    domain::units::{
        MockUnitsService,
        records::{UnitRecord, UnitUuid},
        types::{UnitStatus, UnitType},
    },
};

use crate::{router::app_router, state::State};

pub(crate) fn state_with_units(units: MockUnitsService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(units)))
}

pub(crate) fn units_service(units: MockUnitsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_units(units)))
            .push(route),
    )
}

/// The full application router over an empty in-memory store.
pub(crate) fn in_memory_service() -> Service {
    Service::new(app_router(State::from_app_context(AppContext::in_memory())))
}

pub(crate) fn make_unit(uuid: UnitUuid, name: &str, status: UnitStatus) -> UnitRecord {
    UnitRecord {
        uuid,
        name: name.to_string(),
        unit_type: UnitType::Capsule,
        status,
        last_updated: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}
