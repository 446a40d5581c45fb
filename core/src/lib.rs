pub mod panels;
pub mod wheel;

pub use panels::{
    nearest_panel, GestureOutcome, PanelNavigator, RELEASE_FALLBACK_MS, SETTLE_TOLERANCE_PX,
};
pub use wheel::{ClassifierTuning, SourceClassifier};
