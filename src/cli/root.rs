use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::io::{Read, Write};

use prompt2json_core::trim_prompt;

use crate::cli::args::Args;
use crate::config::Prompt2JsonConfig;
use crate::converter::{records_to_json_string, PromptConverter};

pub struct RootCommand;

impl RootCommand {
    /// Run with the process environment, stdin and stdout.
    pub fn execute(args: Args) -> Result<()> {
        if args.generate_config {
            println!("{}", Prompt2JsonConfig::generate_default_config()?);
            return Ok(());
        }

        let env_vars: HashMap<String, String> = std::env::vars().collect();
        let config = Prompt2JsonConfig::load_with_precedence(&args, &env_vars)
            .context("Failed to load configuration")?;

        if args.prompt.is_none() && atty::is(atty::Stream::Stdin) {
            log::info!("Reading prompt from stdin (end input with Ctrl-D)");
        }

        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        Self::run(&args, &config, &mut stdin.lock(), &mut stdout.lock())
    }

    /// Convert the prompt(s) described by `args` and write the JSON result.
    pub fn run<R: Read, W: Write>(
        args: &Args,
        config: &Prompt2JsonConfig,
        input: &mut R,
        out: &mut W,
    ) -> Result<()> {
        let converter = PromptConverter::new(config.output.include_metadata);
        let indent = Some(config.output.indent);

        let json_output = if args.batch {
            let prompts = read_batch_prompts(args, input)?;
            log::info!("Converting {} prompts", prompts.len());
            let records = converter.convert_batch(&prompts, &config.metadata);
            records_to_json_string(&records, indent)?
        } else {
            let prompt = read_prompt(args, input)?;
            converter.to_json_string(&prompt, indent, &config.metadata)?
        };

        if let Some(path) = &args.output {
            std::fs::write(path, &json_output)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            writeln!(out, "Output written to {}", path.display())?;
        } else {
            writeln!(out, "{}", json_output)?;
        }

        Ok(())
    }
}

fn read_prompt<R: Read>(args: &Args, input: &mut R) -> Result<String> {
    if let Some(prompt) = args.prompt.as_deref().filter(|p| !p.is_empty()) {
        return Ok(prompt.to_string());
    }

    let mut buffer = String::new();
    input
        .read_to_string(&mut buffer)
        .context("Failed to read prompt from stdin")?;

    let prompt = trim_prompt(&buffer);
    if prompt.is_empty() {
        return Err(anyhow!("No prompt provided"));
    }
    Ok(prompt.to_string())
}

fn read_batch_prompts<R: Read>(args: &Args, input: &mut R) -> Result<Vec<String>> {
    let text = match args.prompt.as_deref().filter(|p| !p.is_empty()) {
        Some(prompt) => prompt.to_string(),
        None => {
            let mut buffer = String::new();
            input
                .read_to_string(&mut buffer)
                .context("Failed to read prompts from stdin")?;
            buffer
        }
    };

    let prompts: Vec<String> = text
        .lines()
        .filter(|line| !trim_prompt(line).is_empty())
        .map(str::to_string)
        .collect();

    if prompts.is_empty() {
        return Err(anyhow!("No prompt provided"));
    }
    Ok(prompts)
}
