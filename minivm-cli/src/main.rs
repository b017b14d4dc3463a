//! `minivm`: run the built-in `255 + 3` program and dump memory around it.

use anyhow::{Context, Result};
use clap::Parser;
use minivm_disassembler::disassemble;
use minivm_runtime::{VMConfig, VM};
use minivm_spec::Image;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "minivm", version, about = "Run the MiniVM sample program")]
struct Cli {
    /// Fail on unassigned opcodes instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Print the program's disassembly before running it
    #[arg(long)]
    disasm: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let image = Image::sample();

    if cli.disasm {
        let asm = disassemble(&image).context("failed to disassemble sample program")?;
        println!("{}", asm);
    }

    let mut vm = VM::with_config(VMConfig {
        strict_opcodes: cli.strict,
    });
    vm.load(image);
    vm.print("Before:");
    vm.compute().context("sample program faulted")?;
    vm.print("After:");

    tracing::info!(
        "output word = {} after {} steps",
        Image::new(*vm.memory()).output(),
        vm.steps()
    );
    Ok(())
}
