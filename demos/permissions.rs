//! Flag Queries Example
//!
//! This example walks through the three ways to ask questions about a flag
//! state: free functions, chained queries, and reusable predicates.
//!
//! Run with: cargo run --example permissions

use flagwater::flags::*;
use flagwater::predicate::*;
use flagwater::{log, template, NonEmptyVec};

const READ: u16 = 1 << 0;
const WRITE: u16 = 1 << 1;
const EXEC: u16 = 1 << 2;
const SETUID: u16 = 1 << 3;
const STICKY: u16 = 1 << 4;

fn main() {
    println!("=== Flag Queries Example ===\n");

    free_functions();
    chained_queries();
    reusable_predicates();
    runtime_flag_lists();
}

/// Demonstrates the predicate functions
fn free_functions() {
    println!("--- Free Functions ---\n");

    let state = READ | WRITE;
    println!("state = {state:#07b}");
    println!("  has(READ):                     {}", has(state, READ));
    println!("  has_all([READ, WRITE]):        {}", has_all(state, [READ, WRITE]));
    println!("  has_any([EXEC, SETUID]):       {}", has_any(state, [EXEC, SETUID]));
    println!("  has_none([EXEC, SETUID]):      {}", has_none(state, [EXEC, SETUID]));
    println!("  has_not_all([READ, EXEC]):     {}", has_not_all(state, [READ, EXEC]));
    println!(
        "  has_any_but_not_all([R, W, X]): {}",
        has_any_but_not_all(state, [READ, WRITE, EXEC])
    );
    println!();
}

/// Demonstrates building one verdict from several checks
fn chained_queries() {
    println!("--- Chained Queries ---\n");

    for state in [READ | WRITE, READ | WRITE | SETUID, READ] {
        let verdict = query(state)
            .has_all([READ, WRITE])
            .has_none([SETUID, STICKY])
            .ensure_with(|s| template!("rejected state %", s));

        match verdict {
            Ok(s) => println!("  {s:#07b}: plain read/write file"),
            Err(message) => println!("  {state:#07b}: {message}"),
        }
    }
    println!();
}

/// Demonstrates predicates as reusable values
fn reusable_predicates() {
    println!("--- Reusable Predicates ---\n");

    let executable = flag_set(EXEC).and(flag_unset(SETUID));
    let writable = all_set([READ, WRITE]);
    let suspicious = some_but_not_all_set([EXEC, SETUID]).or(flag_set(STICKY));

    for state in [READ | EXEC, READ | WRITE, EXEC | SETUID, READ | STICKY] {
        println!(
            "  {state:#07b}: executable={} writable={} suspicious={}",
            executable.check(&state),
            writable.check(&state),
            suspicious.check(&state)
        );
    }

    match validate(READ | EXEC | SETUID, &executable, "setuid executables are refused") {
        Ok(state) => println!("  accepted {state:#07b}"),
        Err(reason) => log::warning_fmt("validation failed: %", &[&reason]),
    }
    println!();
}

/// Demonstrates flag lists only known at runtime
fn runtime_flag_lists() {
    println!("--- Runtime Flag Lists ---\n");

    let requested = vec![READ, EXEC];
    match NonEmptyVec::from_vec(requested) {
        Some(flags) => {
            let state = READ | WRITE;
            println!("  requested {} flags", flags.len());
            println!("  all granted: {}", has_all(state, &flags));
            println!("  some granted: {}", has_any_but_not_all(state, &flags));
        }
        None => println!("  nothing requested"),
    }
}
