use crate::presentation::tables::{DIVIDER, TableData};

/// GitHub flavoured markdown table.
///
/// Divider columns only make sense in the terminal and are dropped, multi-line
/// cells are joined with `<br>`.
pub fn render(data: &TableData) -> String {
    let keep: Vec<usize> = data
        .header
        .iter()
        .enumerate()
        .filter(|(_, h)| h.as_str() != DIVIDER)
        .map(|(i, _)| i)
        .collect();

    let line = |cells: &[String]| {
        let cells: Vec<String> = keep
            .iter()
            .map(|&i| cell(cells.get(i).map(String::as_str).unwrap_or_default()))
            .collect();
        format!("| {} |\n", cells.join(" | "))
    };

    let header: Vec<String> = data.header.iter().map(|h| h.to_uppercase()).collect();
    let mut out = line(&header);
    out.push_str(&format!("|{}\n", "---|".repeat(keep.len())));
    for row in &data.rows {
        out.push_str(&line(row));
    }
    out
}

fn cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_multiline_cells_and_dividers() {
        let data = TableData {
            header: strings(&["Partition", "Free", "|", "Total"]),
            rows: vec![
                strings(&["fra-equ01", "3", "|", "10"]),
                strings(&["a\nb", "", "|"]),
            ],
            auto_wrap: true,
        };

        insta::assert_snapshot!(render(&data), @r"
        | PARTITION | FREE | TOTAL |
        |---|---|---|
        | fra-equ01 | 3 | 10 |
        | a<br>b |  |  |
        ");
    }
}
