//! Startup warnings for environment keys that figment silently ignored.

use shield_config::{ENV_PREFIX, ShieldConfig};

/// Sections without a meaningful "configured" state; any single-underscore
/// key under them is suspicious.
const PLAIN_SECTIONS: [(&str, &str); 4] = [
    ("SERVER", "BIND"),
    ("DATABASE", "PATH"),
    ("AUTH", "DEV_MODE"),
    ("GENERAL", "LOG_LEVEL"),
];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &ShieldConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ShieldConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let credentialed = [
        ("Groq", "GROQ", "API_KEY", config.groq.is_configured()),
        ("OpenAI", "OPENAI", "API_KEY", config.openai.is_configured()),
        ("Clerk", "CLERK", "SECRET_KEY", config.clerk.is_configured()),
    ];

    let mut warnings = Vec::new();

    for (label, section, example, configured) in credentialed {
        let prefix = format!("{ENV_PREFIX}{section}");
        if !configured && has_single_underscore_key(&env_keys, &prefix) {
            warnings.push(format!(
                "{label} config appears default while {prefix}_* env vars exist. Use double underscores (example: {prefix}__{example})."
            ));
        }
    }

    for (section, example) in PLAIN_SECTIONS {
        let prefix = format!("{ENV_PREFIX}{section}");
        if has_single_underscore_key(&env_keys, &prefix) {
            warnings.push(format!(
                "{prefix}_* env vars are ignored. Use double underscores (example: {prefix}__{example})."
            ));
        }
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}
