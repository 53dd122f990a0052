use serde::Deserialize;

/// Greeting used when `WHATSAPP_MESSAGE` is unset or blank.
pub const DEFAULT_GREETING: &str =
    "Quero um diagnóstico rápido para gerar mais leads. Pode me chamar?";

/// Default request body limit for the lead form (64 KiB).
pub const DEFAULT_MAX_FORM_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// WhatsApp number the call-to-action links point at. Empty disables the links.
    pub destination_number: String,
    /// Message prefilled in the WhatsApp conversation.
    pub greeting_message: String,
    pub max_form_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            destination_number: String::new(),
            greeting_message: DEFAULT_GREETING.to_string(),
            max_form_bytes: DEFAULT_MAX_FORM_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_vars(|key| std::env::var(key).ok())?;

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Server Port: {}", config.port);
        tracing::debug!(
            "WhatsApp number configured: {}",
            !config.destination_number.is_empty()
        );
        tracing::debug!("WhatsApp greeting: {}", config.greeting_message);
        tracing::debug!("Max form size: {} bytes", config.max_form_bytes);

        Ok(config)
    }

    /// Resolves the configuration against an arbitrary variable lookup.
    ///
    /// `from_env` delegates here with `std::env::var`; tests pass a closure over a
    /// fixed map instead of touching the process environment.
    pub fn from_vars<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?;

        let destination_number = lookup("WHATSAPP_NUMBER")
            .or_else(|| lookup("NEXT_PUBLIC_WHATSAPP_NUMBER"))
            .unwrap_or_default();

        // A blank message counts as unset so the page never links to an empty chat.
        let greeting_message = lookup("WHATSAPP_MESSAGE")
            .or_else(|| lookup("NEXT_PUBLIC_WHATSAPP_MESSAGE"))
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GREETING.to_string());

        let max_form_bytes = match lookup("MAX_FORM_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|_| anyhow::anyhow!("MAX_FORM_BYTES must be a positive integer"))
                .and_then(|bytes| {
                    if bytes == 0 {
                        anyhow::bail!("MAX_FORM_BYTES cannot be zero");
                    }
                    Ok(bytes)
                })?,
            None => DEFAULT_MAX_FORM_BYTES,
        };

        Ok(Self {
            port,
            destination_number,
            greeting_message,
            max_form_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_vars(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.destination_number, "");
        assert_eq!(config.greeting_message, DEFAULT_GREETING);
        assert_eq!(config.max_form_bytes, DEFAULT_MAX_FORM_BYTES);
    }

    #[test]
    fn test_primary_variables_win_over_legacy_names() {
        let config = Config::from_vars(lookup_from(&[
            ("WHATSAPP_NUMBER", "5511999999999"),
            ("NEXT_PUBLIC_WHATSAPP_NUMBER", "5521888888888"),
            ("WHATSAPP_MESSAGE", "Oi!"),
            ("NEXT_PUBLIC_WHATSAPP_MESSAGE", "Olá!"),
        ]))
        .unwrap();
        assert_eq!(config.destination_number, "5511999999999");
        assert_eq!(config.greeting_message, "Oi!");
    }

    #[test]
    fn test_legacy_variable_names_are_accepted() {
        let config = Config::from_vars(lookup_from(&[
            ("NEXT_PUBLIC_WHATSAPP_NUMBER", "5521888888888"),
            ("NEXT_PUBLIC_WHATSAPP_MESSAGE", "Olá!"),
        ]))
        .unwrap();
        assert_eq!(config.destination_number, "5521888888888");
        assert_eq!(config.greeting_message, "Olá!");
    }

    #[test]
    fn test_blank_message_falls_back_to_default() {
        let config = Config::from_vars(lookup_from(&[("WHATSAPP_MESSAGE", "   ")])).unwrap();
        assert_eq!(config.greeting_message, DEFAULT_GREETING);
    }

    #[test]
    fn test_number_is_taken_verbatim() {
        let config =
            Config::from_vars(lookup_from(&[("WHATSAPP_NUMBER", " +55 (11) 9999 ")])).unwrap();
        assert_eq!(config.destination_number, " +55 (11) 9999 ");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_vars(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_zero_form_limit_is_rejected() {
        assert!(Config::from_vars(lookup_from(&[("MAX_FORM_BYTES", "0")])).is_err());
        assert!(Config::from_vars(lookup_from(&[("MAX_FORM_BYTES", "abc")])).is_err());

        let config = Config::from_vars(lookup_from(&[("MAX_FORM_BYTES", "1024")])).unwrap();
        assert_eq!(config.max_form_bytes, 1024);
    }
}
