use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Planted crop a fertilization record belongs to.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    OilPalm,
    Rubber,
}
