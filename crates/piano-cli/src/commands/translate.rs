use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TranslateArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct Translation {
    key: String,
    language: String,
    text: String,
}

/// Handle `piano translate`.
pub fn handle(args: &TranslateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pairs = parse_args(&args.args)?;
    let borrowed = pairs
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect::<Vec<_>>();

    let text = ctx.translator.t_with(&args.key, &borrowed);
    if text == args.key {
        tracing::debug!(key = %args.key, "no translation found; echoing key");
    }

    output(
        &Translation {
            key: args.key.clone(),
            language: ctx.translator.language().to_string(),
            text,
        },
        flags.format,
    )
}

fn parse_args(raw: &[String]) -> anyhow::Result<Vec<(String, String)>> {
    raw.iter()
        .map(|arg| {
            let (name, value) = arg
                .split_once('=')
                .ok_or_else(|| anyhow::anyhow!("invalid --arg '{arg}' (expected NAME=VALUE)"))?;
            if name.trim().is_empty() {
                anyhow::bail!("invalid --arg '{arg}': empty name");
            }
            Ok((name.trim().to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_args;

    #[test]
    fn splits_on_first_equals() {
        let pairs = parse_args(&["name=a=b".to_string()]).unwrap();
        assert_eq!(pairs, vec![("name".to_string(), "a=b".to_string())]);
    }

    #[test]
    fn rejects_missing_equals() {
        let err = parse_args(&["name".to_string()]).unwrap_err();
        assert!(err.to_string().contains("expected NAME=VALUE"));
    }

    #[test]
    fn rejects_empty_name() {
        assert!(parse_args(&["=Alice".to_string()]).is_err());
    }
}
