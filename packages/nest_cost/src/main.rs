#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point for the `nest_cost` harness.
//!
//! This module is excluded from mutation testing because testing process
//! entry/exit behavior is impractical - it requires spawning subprocesses and
//! checking exit codes.

use std::num::NonZero;
use std::process::ExitCode;

use alloc_meter::Allocator;
use argh::FromArgs;
use nest_cost::{Variant, measure};
use new_zealand::nz;

// The meter only sees what the allocator records, so the metering allocator
// must be installed before anything in the run allocates.
#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

/// Messages per run: 2^24. Large enough that per-message costs dominate the
/// fixed setup overhead also captured by the meter.
const MESSAGE_COUNT: NonZero<usize> = nz!(16_777_216);

/// Measures the allocation, size, and time cost of wrapping a string payload
/// inside one level of message nesting, versus holding it flat.
#[derive(FromArgs)]
struct Args {
    /// message shape to measure (flat or wrapper)
    #[argh(positional)]
    variant: Variant,
}

// Binary entry point - mutations would require subprocess testing which is impractical.
#[cfg_attr(test, mutants::skip)]
fn main() -> ExitCode {
    let env_args: Vec<String> = std::env::args().collect();
    let str_args: Vec<&str> = env_args.iter().map(String::as_str).collect();

    let program_name = str_args
        .first()
        .expect("std::env::args() always provides at least the program name");

    let args: Args = match Args::from_args(&[program_name], str_args.get(1..).unwrap_or(&[])) {
        Ok(args) => args,
        Err(early_exit) => {
            println!("{}", early_exit.output);
            // argh reports a requested help screen with a success status;
            // every other early exit is a usage error.
            return if early_exit.status.is_ok() {
                ExitCode::SUCCESS
            } else {
                println!("Usage: {program_name} <flat|wrapper>");
                ExitCode::FAILURE
            };
        }
    };

    let metrics = measure(args.variant, MESSAGE_COUNT);
    metrics.print_to_stdout();

    ExitCode::SUCCESS
}
