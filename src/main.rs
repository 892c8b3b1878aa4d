//! Interactive console front end.
//!
//! Prompts for the process batch and quantum, re-prompting until the
//! input is well-formed, then runs the simulation and prints the result
//! table, the averages, and the Gantt chart.

use std::io::{self, BufRead, Write};
use std::process::exit;

use procsim::models::Process;
use procsim::render::{render_process_table, render_summary, GanttChart, DEFAULT_SCALE};
use procsim::scheduler::{SimulationRequest, Simulator};
use procsim::validation::validate_request;

fn main() {
    let stdin = io::stdin();
    let request = acquire_request(&mut stdin.lock());

    // Unreachable from the prompts, which only produce valid input; kept
    // so the binary and programmatic callers share one contract.
    if let Err(errors) = validate_request(&request) {
        for error in &errors {
            eprintln!("error: {}", error.message);
        }
        exit(1);
    }

    let report = Simulator::new().run(request);

    println!("\nExecuting as {} Scheduling...", report.mode);
    println!();
    print!("{}", render_process_table(&report.processes));
    println!();
    print!("{}", render_summary(&report.metrics));
    println!("\nGantt Chart:\n");
    print!("{}", GanttChart::from_trace(&report.trace, DEFAULT_SCALE).render());
}

/// Prompts for the whole batch: count, quantum, arrival mode, and the
/// per-process times.
fn acquire_request(input: &mut impl BufRead) -> SimulationRequest {
    let count = prompt_positive(input, "Enter number of processes: ");
    let quantum = prompt_positive(input, "Enter quantum time: ");
    let same_arrival = prompt_yes_no(input, "Do all processes arrive at time 0? (y/n): ");

    let mut processes = Vec::with_capacity(count as usize);
    for id in 1..=count {
        let burst = prompt_positive(input, &format!("Enter burst time for P{id}: "));
        let arrival = if same_arrival {
            0
        } else {
            prompt_non_negative(input, &format!("Enter arrival time for P{id}: "))
        };
        processes.push(Process::new(id, arrival, burst));
    }

    SimulationRequest::new(processes, quantum)
}

/// Re-prompts until the answer is a positive integer.
fn prompt_positive(input: &mut impl BufRead, prompt: &str) -> u32 {
    loop {
        match parse_integer(&read_answer(input, prompt)) {
            Some(value) if value > 0 => match u32::try_from(value) {
                Ok(value) => return value,
                Err(_) => println!("Please enter a smaller value."),
            },
            Some(_) => println!("Please enter a positive integer."),
            None => println!("Invalid input. Enter an integer."),
        }
    }
}

/// Re-prompts until the answer is a non-negative integer.
fn prompt_non_negative(input: &mut impl BufRead, prompt: &str) -> u32 {
    loop {
        match parse_integer(&read_answer(input, prompt)) {
            Some(value) if value >= 0 => match u32::try_from(value) {
                Ok(value) => return value,
                Err(_) => println!("Please enter a smaller value."),
            },
            Some(_) => println!("Please enter a non-negative integer."),
            None => println!("Invalid input. Enter an integer."),
        }
    }
}

/// Re-prompts until the answer is `y` or `n` (case-insensitive).
fn prompt_yes_no(input: &mut impl BufRead, prompt: &str) -> bool {
    loop {
        match parse_yes_no(&read_answer(input, prompt)) {
            Some(answer) => return answer,
            None => println!("Invalid input. Enter 'y' or 'n'."),
        }
    }
}

/// Prints the prompt and reads one line. Exits cleanly on EOF or a
/// broken stdin — there is nothing left to re-prompt.
fn read_answer(input: &mut impl BufRead, prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => {
            println!();
            exit(0);
        }
        Ok(_) => line,
    }
}

fn parse_integer(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}
