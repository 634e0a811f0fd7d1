// ###################################
// ->   STRUCTS
// ###################################
/// The raw value of the email input field.
///
/// Only checked for presence: format validation belongs to the backend,
/// which reports problems through the `detail` field.
#[derive(Debug, Clone)]
pub struct EmailField(String);

// ###################################
// ->   IMPLS
// ###################################
impl AsRef<str> for EmailField {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl EmailField {
    pub fn parse<S>(value: S) -> Result<Self, DataParsingError>
    where
        S: AsRef<str>,
    {
        let value = value.as_ref();

        if value.trim().is_empty() {
            return Err(DataParsingError::EmailEmpty);
        }

        Ok(EmailField(value.to_owned()))
    }
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug)]
pub enum DataParsingError {
    EmailEmpty,
}
// Error Boilerplate
impl core::fmt::Display for DataParsingError {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for DataParsingError {}
