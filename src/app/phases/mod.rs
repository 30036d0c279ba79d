pub(super) mod phase_view;
pub(super) mod setup;
pub(super) mod tracking;

pub(crate) use phase_view::PhaseView;
