/// An operator who passed authentication.
///
/// Only [`crate::UserDirectory`] hands these out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operator {
    username: String,
}

impl Operator {
    pub(crate) fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl core::fmt::Display for Operator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.username)
    }
}
