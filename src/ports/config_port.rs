//! Configuration access port trait.

/// Lookups into sectioned key/value configuration.
///
/// Values come back as raw strings; parsing and validation belong to
/// `domain::config_validation`.
pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
}
