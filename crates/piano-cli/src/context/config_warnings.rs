use piano_config::PianoConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &PianoConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PianoConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let defaults = PianoConfig::default();

    let mut warnings = Vec::new();

    if !config.auth.is_configured() && has_single_underscore_key(&env_keys, "PIANO_AUTH") {
        warnings.push(
            "Auth config appears default while PIANO_AUTH_* env vars exist. Use double underscores (example: PIANO_AUTH__USERNAME)."
                .to_string(),
        );
    }

    if config.api.base_url == defaults.api.base_url
        && has_single_underscore_key(&env_keys, "PIANO_API")
    {
        warnings.push(
            "API config appears default while PIANO_API_* env vars exist. Use double underscores (example: PIANO_API__BASE_URL)."
                .to_string(),
        );
    }

    if config.cache.ttl_ms == defaults.cache.ttl_ms
        && config.cache.enabled == defaults.cache.enabled
        && has_single_underscore_key(&env_keys, "PIANO_CACHE")
    {
        warnings.push(
            "Cache config appears default while PIANO_CACHE_* env vars exist. Use double underscores (example: PIANO_CACHE__TTL_MS)."
                .to_string(),
        );
    }

    if config.i18n.default_language == defaults.i18n.default_language
        && has_single_underscore_key(&env_keys, "PIANO_I18N")
    {
        warnings.push(
            "I18n config appears default while PIANO_I18N_* env vars exist. Use double underscores (example: PIANO_I18N__DEFAULT_LANGUAGE)."
                .to_string(),
        );
    }

    warnings
}

/// `PIANO_AUTH_USERNAME` style keys (single underscore after the section).
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let single = format!("{section}_");
    let double = format!("{section}__");
    keys.iter()
        .any(|key| key.starts_with(&single) && !key.starts_with(&double))
}

#[cfg(test)]
mod tests {
    use piano_config::{AuthConfig, PianoConfig};

    use super::collect_unconfigured_warnings;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &PianoConfig::default(),
            env(&[
                ("PIANO_AUTH_USERNAME", "admin"),
                ("PIANO_API_BASE_URL", "http://example.com/api"),
                ("PIANO_CACHE_TTL_MS", "1000"),
                ("PIANO_I18N_DEFAULT_LANGUAGE", "zh"),
            ]),
        );
        assert_eq!(warnings.len(), 4);
    }

    #[test]
    fn double_underscore_keys_are_fine() {
        let warnings = collect_unconfigured_warnings(
            &PianoConfig::default(),
            env(&[("PIANO_AUTH__USERNAME", "admin"), ("PIANO_API__BASE_URL", "x")]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn does_not_warn_when_section_is_configured() {
        let config = PianoConfig {
            auth: AuthConfig {
                username: "admin".into(),
                password: "admin123".into(),
            },
            ..Default::default()
        };
        let warnings =
            collect_unconfigured_warnings(&config, env(&[("PIANO_AUTH_USERNAME", "admin")]));
        assert!(warnings.is_empty());
    }
}
