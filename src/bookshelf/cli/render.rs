use bookshelf::model::{Book, COLUMNS};
use unicode_width::UnicodeWidthStr;

/// Box-drawn table of `books` with `title` set into the top border.
pub fn book_table(title: &str, books: &[Book]) -> String {
    let header = COLUMNS.map(String::from);
    let rows: Vec<[String; 5]> = std::iter::once(header)
        .chain(books.iter().map(Book::cells))
        .collect();

    let mut widths = [0usize; 5];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    out.push_str(&titled_border(title, &widths));
    out.push('\n');
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push_str(&border('├', '┼', '┤', &widths));
            out.push('\n');
        }
        out.push('│');
        for (cell, width) in row.iter().zip(widths) {
            let padding = width - cell.width();
            out.push(' ');
            out.push_str(cell);
            out.push_str(&" ".repeat(padding + 1));
            out.push('│');
        }
        out.push('\n');
    }
    out.push_str(&border('└', '┴', '┘', &widths));
    out
}

fn border(left: char, joint: char, right: char, widths: &[usize]) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{}{}{}", left, segments.join(&joint.to_string()), right)
}

fn titled_border(title: &str, widths: &[usize]) -> String {
    let plain = border('┌', '┬', '┐', widths);
    let inner: Vec<char> = plain.chars().skip(1).collect();
    let title_width = title.width();

    // Leave room for the closing corner; drop the title if it cannot fit.
    if title_width == 0 || title_width >= inner.len() {
        return plain;
    }
    let rest: String = inner[title_width..].iter().collect();
    format!("┌{}{}", title, rest)
}
