//! The `fracdrill bank` command.

use anyhow::Result;
use clap::ValueEnum;
use comfy_table::{Cell, Table};

use fracdrill_core::bank::{arithmetic_bank, benchmark_bank};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BankArg {
    Benchmark,
    Arithmetic,
}

pub fn execute(quiz: BankArg) -> Result<()> {
    let mut table = Table::new();
    match quiz {
        BankArg::Benchmark => {
            table.set_header(vec!["#", "Question", "Options", "Answer"]);
            for (i, item) in benchmark_bank().iter().enumerate() {
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(&item.text),
                    Cell::new(item.options.join("\n")),
                    Cell::new(item.correct_option()),
                ]);
            }
        }
        BankArg::Arithmetic => {
            table.set_header(vec!["#", "Problem", "Answer"]);
            for (i, template) in arithmetic_bank().iter().enumerate() {
                table.add_row(vec![
                    Cell::new(i + 1),
                    Cell::new(template.expression()),
                    Cell::new(template.answer()?),
                ]);
            }
        }
    }
    println!("{table}");
    Ok(())
}
