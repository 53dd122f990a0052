use crate::config::Config;

/// Base of WhatsApp click-to-chat links.
pub const WHATSAPP_LINK_BASE: &str = "https://wa.me";

/// Builds the WhatsApp deep link used by the page's call-to-action buttons.
///
/// Holds a snapshot of the configured number and greeting; both are fixed for the
/// lifetime of the process. The number is used verbatim, no format checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinkBuilder {
    destination_number: String,
    greeting_message: String,
}

impl ContactLinkBuilder {
    pub fn new(destination_number: impl Into<String>, greeting_message: impl Into<String>) -> Self {
        Self {
            destination_number: destination_number.into(),
            greeting_message: greeting_message.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.destination_number.clone(),
            config.greeting_message.clone(),
        )
    }

    /// `https://wa.me/<number>?text=<greeting>` with the greeting percent-encoded
    /// as a URI component (space becomes `%20`).
    pub fn build_contact_link(&self) -> String {
        format!(
            "{}/{}?text={}",
            WHATSAPP_LINK_BASE,
            self.destination_number,
            urlencoding::encode(&self.greeting_message)
        )
    }

    /// Whether a destination number is configured at all.
    pub fn has_destination(&self) -> bool {
        !self.destination_number.is_empty()
    }

    /// The deep link when a destination exists, `fallback` otherwise.
    pub fn href_or(&self, fallback: &str) -> String {
        if self.has_destination() {
            self.build_contact_link()
        } else {
            fallback.to_string()
        }
    }

    pub fn destination_number(&self) -> &str {
        &self.destination_number
    }

    pub fn greeting_message(&self) -> &str {
        &self.greeting_message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_GREETING;

    #[test]
    fn test_link_with_default_greeting() {
        let builder = ContactLinkBuilder::new("5511999999999", DEFAULT_GREETING);
        let link = builder.build_contact_link();

        let prefix = "https://wa.me/5511999999999?text=";
        assert!(link.starts_with(prefix));

        let encoded = &link[prefix.len()..];
        assert!(!encoded.contains(' '));
        assert!(encoded.starts_with("Quero%20um%20diagn%C3%B3stico"));
        assert!(encoded.ends_with("Pode%20me%20chamar%3F"));
        assert_eq!(urlencoding::decode(encoded).unwrap(), DEFAULT_GREETING);
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let builder = ContactLinkBuilder::new("1", "a&b=c?d#e/f+g");
        assert_eq!(
            builder.build_contact_link(),
            "https://wa.me/1?text=a%26b%3Dc%3Fd%23e%2Ff%2Bg"
        );
    }

    #[test]
    fn test_has_destination() {
        assert!(!ContactLinkBuilder::new("", "oi").has_destination());
        assert!(ContactLinkBuilder::new("5511999999999", "oi").has_destination());
        assert!(ContactLinkBuilder::new("not-a-number", "oi").has_destination());
        assert!(ContactLinkBuilder::new(" ", "oi").has_destination());
    }

    #[test]
    fn test_href_or_falls_back_without_destination() {
        let without = ContactLinkBuilder::new("", "oi");
        assert_eq!(without.href_or("#contato"), "#contato");

        let with = ContactLinkBuilder::new("5511999999999", "oi");
        assert_eq!(with.href_or("#contato"), "https://wa.me/5511999999999?text=oi");
    }

    #[test]
    fn test_link_is_built_even_without_destination() {
        let builder = ContactLinkBuilder::new("", "oi");
        assert_eq!(builder.build_contact_link(), "https://wa.me/?text=oi");
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            destination_number: "5521988887777".to_string(),
            ..Config::default()
        };
        let builder = ContactLinkBuilder::from_config(&config);
        assert_eq!(builder.destination_number(), "5521988887777");
        assert_eq!(builder.greeting_message(), DEFAULT_GREETING);
    }
}
