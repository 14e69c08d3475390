//! Terminal bar chart of the most frequent words.

use std::io::{self, Write};

use itertools::Itertools;

use crate::FrequencyTable;

/// Cells used by the longest bar.
pub const BAR_WIDTH: usize = 50;

const BAR: char = '█';
const WORDS: &str = "Words";

/// Renders the `top_n` most frequent words as a horizontal bar chart,
/// highest count on the first row.
pub fn render_chart(table: &FrequencyTable, top_n: usize) -> String {
    let mut out = format!("Top {top_n} Most Frequent Words\n\n");
    let top = table.top(top_n);
    let Some(&(_, max)) = top.first() else {
        out.push_str("(no words)\n");
        return out;
    };

    let label_width = top
        .iter()
        .map(|(w, _)| w.chars().count())
        .chain([WORDS.len()])
        .max()
        .unwrap_or(0);
    out.push_str(&format!("{WORDS:>label_width$}\n"));
    let rows = top
        .iter()
        .map(|&(word, count)| {
            let bar = BAR.to_string().repeat(bar_len(count, max));
            format!("{word:>label_width$} | {bar} {count}")
        })
        .join("\n");
    out.push_str(&rows);
    out.push('\n');
    out.push_str(&format!("{:>w$}   Frequency\n", "", w = label_width));
    out
}

fn bar_len(count: u64, max: u64) -> usize {
    if max == 0 {
        return 0;
    }
    let scaled = (count as u128 * BAR_WIDTH as u128).div_ceil(max as u128);
    scaled.clamp(1, BAR_WIDTH as u128) as usize
}

/// Draws the chart on standard output.
pub fn show(table: &FrequencyTable, top_n: usize) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render_chart(table, top_n).as_bytes())?;
    stdout.flush()
}
