use error_stack::ResultExt;
use kernel::KernelError;
use vodca::References;

static BOOKSHELF_HOST: &str = "BOOKSHELF_HOST";
static BOOKSHELF_PORT: &str = "BOOKSHELF_PORT";

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 9000;

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct ServerConfig {
    host: String,
    port: u16,
}

impl ServerConfig {
    /// Reads the process environment, `.env` included.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> error_stack::Result<Self, KernelError> {
        let host = lookup(BOOKSHELF_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup(BOOKSHELF_PORT) {
            None => DEFAULT_PORT,
            Some(port) => port
                .parse::<u16>()
                .change_context(KernelError::Internal)
                .attach_printable_lazy(|| format!("{BOOKSHELF_PORT}={port}"))?,
        };
        Ok(Self { host, port })
    }
}

#[cfg(test)]
mod test {
    use kernel::KernelError;

    use super::ServerConfig;

    #[test]
    fn falls_back_to_defaults() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.host(), "localhost");
        assert_eq!(*config.port(), 9000);
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(|key| match key {
            "BOOKSHELF_HOST" => Some("0.0.0.0".to_string()),
            "BOOKSHELF_PORT" => Some("8080".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(*config.port(), 8080);
    }

    #[test]
    fn rejects_invalid_port() {
        let error = ServerConfig::from_lookup(|key| {
            (key == "BOOKSHELF_PORT").then(|| "ninety".to_string())
        })
        .unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Internal);
    }
}
