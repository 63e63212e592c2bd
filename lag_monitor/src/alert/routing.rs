use getset::Getters;

#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct AlertRouting {
    token: String,
    recipients: Vec<String>,
}

impl AlertRouting {
    /// Returns `None` unless both a token and at least one recipient are present.
    pub fn new(token: &str, recipients: Vec<String>) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() || recipients.is_empty() {
            return None;
        }

        Some(Self {
            token: token.to_owned(),
            recipients,
        })
    }

    /// Parses a `;` or `|` separated recipient list.
    pub fn parse(token: &str, recipients: &str) -> Option<Self> {
        let recipients = recipients
            .split([';', '|'])
            .map(str::trim)
            .filter(|recipient| !recipient.is_empty())
            .map(str::to_owned)
            .collect::<Vec<_>>();

        Self::new(token, recipients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_both_separators() {
        let routing = AlertRouting::parse(" token ", "100; 200|300;").unwrap();

        assert_eq!(routing.token(), "token");
        assert_eq!(routing.recipients(), &["100", "200", "300"]);
    }

    #[test]
    fn blank_values_disable_routing() {
        assert!(AlertRouting::parse("", "100").is_none());
        assert!(AlertRouting::parse("token", " ; |").is_none());
    }
}
