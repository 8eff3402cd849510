mod settings;

pub use settings::{FeedSettings, ModelSettings, ProfileSettings, Settings, SimulationSettings};
