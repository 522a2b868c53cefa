use std::process::ExitCode;

use infix_ast::{display_error, parse};

const DEMO_EXPRESSION: &str = "3 - 4 + 5";

fn main() -> ExitCode {
    env_logger::init();
    log::info!("parsing {:?}", DEMO_EXPRESSION);

    match parse(DEMO_EXPRESSION) {
        Ok(tree) => {
            println!("{}", tree.pre_order().join(" "));
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprint!("{}", display_error(&error));
            ExitCode::FAILURE
        }
    }
}
