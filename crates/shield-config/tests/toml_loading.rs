//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use shield_config::ShieldConfig;

#[test]
fn loads_provider_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[groq]
api_key = "gsk_toml"
model = "llama-3.1-8b-instant"
temperature = 0.2
max_tokens = 1500
timeout_secs = 12

[openai]
api_key = "sk-toml"
base_url = "http://localhost:8080/v1"
temperature = 0.1
"#,
        )?;

        let config: ShieldConfig = Figment::from(Serialized::defaults(ShieldConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.groq.api_key, "gsk_toml");
        assert_eq!(config.groq.model, "llama-3.1-8b-instant");
        assert!((config.groq.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.groq.max_tokens, 1500);
        assert_eq!(config.groq.timeout_secs, 12);
        assert_eq!(config.groq.base_url, "https://api.groq.com/openai/v1");
        assert!(config.groq.is_configured());

        assert_eq!(config.openai.base_url, "http://localhost:8080/v1");
        assert_eq!(config.openai.model, "gpt-4o");
        assert_eq!(config.openai.temperature, Some(0.1));
        assert_eq!(config.openai.max_tokens, None);
        assert!(config.openai.is_configured());
        Ok(())
    });
}

#[test]
fn loads_server_and_database_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
bind = "0.0.0.0:8443"
reports_dir = "/var/lib/jobshield/reports"

[database]
path = ":memory:"

[auth]
dev_mode = true
"#,
        )?;

        let config: ShieldConfig = Figment::from(Serialized::defaults(ShieldConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.socket_addr().unwrap().port(), 8443);
        assert_eq!(
            config.server.reports_dir,
            std::path::PathBuf::from("/var/lib/jobshield/reports")
        );
        assert_eq!(config.server.reports_url_prefix, "/reports");
        assert!(config.database.is_in_memory());
        assert!(config.auth.dev_mode);
        Ok(())
    });
}

#[test]
fn project_local_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".jobshield")?;
        jail.create_file(
            ".jobshield/config.toml",
            r#"
[clerk]
secret_key = "sk_test_project"
"#,
        )?;

        let config: ShieldConfig = ShieldConfig::figment().extract()?;
        assert_eq!(config.clerk.secret_key, "sk_test_project");
        assert!(config.clerk.is_configured());
        Ok(())
    });
}

#[test]
fn browser_only_clerk_key_is_ignored() {
    Jail::expect_with(|jail| {
        jail.create_dir(".jobshield")?;
        jail.create_file(
            ".jobshield/config.toml",
            r#"
[clerk]
publishable_key = "pk_test_frontend"
"#,
        )?;

        let config: ShieldConfig = ShieldConfig::figment().extract()?;
        assert!(!config.clerk.is_configured());
        assert!(config.clerk.secret_key.is_empty());
        Ok(())
    });
}

#[test]
fn malformed_value_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[groq]
max_tokens = "lots"
"#,
        )?;

        let result: Result<ShieldConfig, _> =
            Figment::from(Serialized::defaults(ShieldConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
