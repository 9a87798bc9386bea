use catalog::types::{Product, PRODUCT_COLUMNS};
//
// Prints the product table like this:
//
// id produto  setor  lancamento qualificacao treinamento manual_datasheet laboratorio
// -- -------- ------ ---------- ------------ ----------- ---------------- -----------
//  1 Camera   Video  2024-01-01            4           5                4           5
//  2 Intercom Access 2022-12-01            6           5                4           7
// -- -------- ------ ---------- ------------ ----------- ---------------- -----------
// 2 products
//

/// Text columns are left aligned, the numbers right aligned
const LEFT_ALIGNED: [bool; 8] = [false, true, true, true, false, false, false, false];

pub fn table_report(products: &[Product]) {
    for line in table_lines(products) {
        println!("{line}");
    }
}

fn table_lines(products: &[Product]) -> Vec<String> {
    let rows: Vec<[String; 8]> = products.iter().map(Product::to_row).collect();

    let mut widths = PRODUCT_COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let dashes = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(format_line(&PRODUCT_COLUMNS.map(String::from), &widths));
    lines.push(dashes.clone());
    for row in &rows {
        lines.push(format_line(row, &widths));
    }
    lines.push(dashes);
    lines.push(match rows.len() {
        1 => "1 product".to_string(),
        n => format!("{n} products"),
    });
    lines
}

fn format_line(cells: &[String; 8], widths: &[usize; 8]) -> String {
    cells
        .iter()
        .zip(widths)
        .zip(LEFT_ALIGNED)
        .map(|((cell, width), left)| {
            if left {
                format!("{cell:<width$}")
            } else {
                format!("{cell:>width$}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_string()
}
