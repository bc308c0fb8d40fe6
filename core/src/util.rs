use lazy_static::lazy_static;
use ron::{extensions::Extensions, ser::PrettyConfig};
use serde::Serialize;

lazy_static! {
    /// Shared RON dialect for config files and printed plans.
    pub static ref RON: ron::Options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
}

pub fn to_pretty_ron<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(RON.to_string_pretty(value, PrettyConfig::default())?)
}
