use anyhow::{anyhow, Result};
use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "prompt2json",
    author,
    version,
    about = "Convert prompts to JSON format",
    long_about = None
)]
pub struct Args {
    /// The prompt to convert (if not provided, reads from stdin)
    pub prompt: Option<String>,

    /// Output file path (if not provided, prints to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exclude metadata from the output
    #[arg(long)]
    pub no_metadata: bool,

    /// JSON indentation level [default: 2]
    #[arg(long)]
    pub indent: Option<usize>,

    /// Extra metadata entry; VALUE is parsed as JSON when possible
    #[arg(short, long = "meta", value_name = "KEY=VALUE", value_parser = parse_meta_entry)]
    pub meta: Vec<(String, Value)>,

    /// Treat each non-empty input line as a separate prompt
    #[arg(long)]
    pub batch: bool,

    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    pub generate_config: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

/// Parse a `KEY=VALUE` metadata entry.
///
/// `count=3` yields a number, `tags=["a","b"]` an array, and anything that is
/// not valid JSON is kept as a plain string.
pub fn parse_meta_entry(entry: &str) -> Result<(String, Value)> {
    let (key, raw) = entry
        .split_once('=')
        .ok_or_else(|| anyhow!("Invalid metadata entry '{}': expected KEY=VALUE", entry))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("Invalid metadata entry '{}': key is empty", entry));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_meta_entry() {
        assert_eq!(parse_meta_entry("project=demo").unwrap(), ("project".to_string(), json!("demo")));
        assert_eq!(parse_meta_entry("count=3").unwrap(), ("count".to_string(), json!(3)));
        assert_eq!(parse_meta_entry("flag=true").unwrap(), ("flag".to_string(), json!(true)));
        assert_eq!(
            parse_meta_entry(r#"tags=["a","b"]"#).unwrap(),
            ("tags".to_string(), json!(["a", "b"]))
        );
        assert_eq!(parse_meta_entry("url=a=b").unwrap(), ("url".to_string(), json!("a=b")));
        assert_eq!(parse_meta_entry("empty=").unwrap(), ("empty".to_string(), json!("")));
    }

    #[test]
    fn test_parse_meta_entry_errors() {
        assert!(parse_meta_entry("novalue").is_err());
        assert!(parse_meta_entry("=value").is_err());
    }

    #[test]
    fn test_args_parsing() {
        let args = Args::try_parse_from([
            "prompt2json",
            "-o",
            "out.json",
            "--indent",
            "4",
            "-m",
            "a=1",
            "--meta",
            "b=two",
            "-vv",
            "Write a test",
        ])
        .unwrap();

        assert_eq!(args.prompt.as_deref(), Some("Write a test"));
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert_eq!(args.indent, Some(4));
        assert_eq!(args.meta, vec![("a".to_string(), json!(1)), ("b".to_string(), json!("two"))]);
        assert_eq!(args.verbosity, 2);
        assert!(!args.no_metadata);
        assert!(!args.batch);
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["prompt2json"]).unwrap();
        assert!(args.prompt.is_none());
        assert!(args.indent.is_none());
        assert!(args.meta.is_empty());
    }

    #[test]
    fn test_args_rejects_bad_meta() {
        assert!(Args::try_parse_from(["prompt2json", "--meta", "oops"]).is_err());
    }
}
