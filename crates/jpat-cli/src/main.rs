use std::process::exit;

use clap::Parser;

use crate::args::JpatCliArgs;

pub mod args;
pub mod commands;

#[derive(Debug, Clone)]
pub struct Context;

fn main() {
    env_logger::init();
    let mut context = Context;
    let args = JpatCliArgs::parse();
    match context.execute(args) {
        Ok(code) => exit(code),
        Err(err) => {
            eprintln!("{err:#}");
            exit(2);
        }
    }
}
