use std::fs;

use anyhow::Context as _;
use jpat::Parse;
use log::debug;

use crate::{
    args::{InputArgs, InputKind, JpatCliArgs, JpatCliCommand},
    Context,
};

mod check;
mod parse;

impl Context {
    /// Runs a command and returns the process exit code.
    pub fn execute(&mut self, args: JpatCliArgs) -> Result<i32, anyhow::Error> {
        match args.cmd {
            JpatCliCommand::Parse(cmd) => self.execute_parse(cmd),
            JpatCliCommand::Check(cmd) => self.execute_check(cmd),
        }
    }

    fn parse_input(&self, input: &InputArgs) -> Result<Parse, anyhow::Error> {
        let text = read_input(input)?;
        debug!("parsing {} bytes as {:?}", text.len(), input.kind);
        Ok(match input.kind {
            InputKind::Pattern => jpat::parse_pattern(&text),
            InputKind::Expression => jpat::parse_expression(&text),
            InputKind::SwitchLabel => jpat::parse_switch_label(&text),
        })
    }
}

/// Reads the inline text or the file, as is. A trailing newline is trivia.
fn read_input(input: &InputArgs) -> Result<String, anyhow::Error> {
    match (&input.expr, &input.path) {
        (Some(expr), _) => Ok(expr.clone()),
        (None, Some(path)) => {
            fs::read_to_string(path).with_context(|| format!("could not read `{path}`"))
        }
        (None, None) => anyhow::bail!("no input given"),
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;

    #[test]
    fn test_file_input_keeps_trailing_newline() {
        let path = env::temp_dir().join(format!("jpat-cli-{}.txt", process::id()));
        fs::write(&path, "String s\r\n").unwrap();
        let input = InputArgs {
            path: Some(path.to_string_lossy().into_owned()),
            expr: None,
            kind: InputKind::Pattern,
        };
        let parse = Context.parse_input(&input).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(parse.errors().is_empty(), "{:?}", parse.errors());
        assert_eq!(parse.syntax().text().to_string(), "String s\r\n");
    }

    #[test]
    fn test_missing_file() {
        let input = InputArgs {
            path: Some("does/not/exist.txt".to_owned()),
            expr: None,
            kind: InputKind::Pattern,
        };
        let err = read_input(&input).unwrap_err();
        assert!(format!("{err:#}").starts_with("could not read `does/not/exist.txt`"));
    }
}
