use crate::{args::CheckCommand, Context};

impl Context {
    pub fn execute_check(&mut self, cmd: CheckCommand) -> Result<i32, anyhow::Error> {
        let parse = self.parse_input(&cmd.input)?;
        if parse.errors().is_empty() {
            return Ok(0);
        }
        println!("{}", parse.diagnostics());
        Ok(1)
    }
}
