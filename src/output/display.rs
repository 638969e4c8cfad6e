//! Display functions for command results

use super::formatters::{format_grid, format_lengths, format_solution};
use crate::commands::{BenchmarkResult, FindResult, SolveResult};
use crate::core::Grid;
use colored::Colorize;

/// Print a grid inside a ruled box
pub fn print_grid(grid: &Grid) {
    let width = (grid.column_count() * 2).max(12);
    println!("{}", "─".repeat(width).cyan());
    for line in format_grid(grid).lines() {
        println!("{}", line.bright_white().bold());
    }
    println!("{}", "─".repeat(width).cyan());
}

/// Print found words, one per line in uppercase
///
/// At most `limit` words are printed when a limit is given.
pub fn print_find_result(result: &FindResult, limit: Option<usize>) {
    if result.words.is_empty() {
        println!("No results");
        return;
    }

    let shown = limit.unwrap_or(result.words.len());
    for word in result.words.iter().take(shown) {
        println!("{}", word.to_uppercase());
    }
    print_truncation(result.words.len(), shown);

    let prefix = if result.prefix.is_empty() {
        String::new()
    } else {
        format!(" starting with {}", result.prefix.to_uppercase())
    };
    println!(
        "{}",
        format!(
            "{} words of length {}{prefix} ({} paths) in {:.2?}",
            result.words.len(),
            result.length,
            result.total_paths,
            result.duration
        )
        .bright_black()
    );
}

/// Print game solutions, one per line
pub fn print_solve_result(result: &SolveResult, limit: Option<usize>) {
    println!(
        "\n{} {}",
        "Solving for".bright_cyan().bold(),
        format_lengths(&result.word_lengths).bright_yellow().bold()
    );

    if result.solutions.is_empty() {
        println!("No results");
        return;
    }

    let shown = limit.unwrap_or(result.solutions.len());
    for solution in result.solutions.iter().take(shown) {
        println!("{}", format_solution(solution));
    }
    print_truncation(result.solutions.len(), shown);

    println!(
        "{}",
        format!(
            "{} solutions ({} path combinations) in {:.2?}",
            result.solutions.len(),
            result.total_solutions,
            result.duration
        )
        .bright_black()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Path search:".bright_cyan().bold());
    println!("   Grids searched:   {}", result.trials);
    println!("   Word length:      {}", result.word_length);
    println!("   Seed:             {}", result.seed);
    println!(
        "   Paths found:      {}",
        format!("{}", result.total_paths).bright_yellow().bold()
    );
    println!(
        "   Fastest grid:     {}",
        format!("{:.2?}", result.min_duration).green()
    );
    println!(
        "   Slowest grid:     {}",
        format!("{:.2?}", result.max_duration).yellow()
    );
    println!("   Average grid:     {:.2?}", result.average_duration);
    println!("   Total time:       {:.2}s", result.duration.as_secs_f64());
    println!("   Paths/second:     {:.0}", result.paths_per_second);
}

fn print_truncation(total: usize, shown: usize) {
    if total > shown {
        println!(
            "{}",
            format!("… {} more (raise --limit to see them)", total - shown).bright_black()
        );
    }
}
