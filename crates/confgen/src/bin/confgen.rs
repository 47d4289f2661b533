//! confgen - Generate random bracket-notation fixture files.
//!
//! Thin wrapper over the `generate` command implementation.

fn main() -> std::process::ExitCode {
    confgen::cmd::generate::main()
}
