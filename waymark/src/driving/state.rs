//! Driving state reported to the map UI.

/// Whether the user is currently driving.
///
/// The map UI uses this to switch between the free-driving presentation and
/// the stationary/home presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrivingState {
    /// No sustained displacement in the retained history.
    #[default]
    NotDriving,

    /// Some retained fix lies beyond the driving threshold from the newest fix.
    Driving,
}

impl DrivingState {
    /// Boolean view of the state.
    pub fn is_driving(&self) -> bool {
        matches!(self, DrivingState::Driving)
    }

    /// Get a human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            DrivingState::NotDriving => "stationary or walking",
            DrivingState::Driving => "free driving",
        }
    }
}

impl From<bool> for DrivingState {
    fn from(driving: bool) -> Self {
        if driving {
            DrivingState::Driving
        } else {
            DrivingState::NotDriving
        }
    }
}

impl From<DrivingState> for bool {
    fn from(state: DrivingState) -> Self {
        state.is_driving()
    }
}

impl std::fmt::Display for DrivingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrivingState::NotDriving => write!(f, "not driving"),
            DrivingState::Driving => write!(f, "driving"),
        }
    }
}
