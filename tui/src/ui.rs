use catalog::types::Product;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::app::{App, EditDialog, ExportPrompt, Focus, Modal, Notification, Severity};
use crate::input::{FormInputs, FIELD_COUNT, FIELD_LABELS};

const TABLE_HEADER: [&str; 8] = [
    "Id",
    "Product",
    "Sector",
    "Release",
    "Qualification",
    "Training",
    "Manual/Datasheet",
    "Laboratory",
];

const LABEL_WIDTH: usize = 20;

pub(crate) fn draw(frame: &mut Frame, app: &mut App) {
    #[allow(clippy::cast_possible_truncation)]
    let form_height = FIELD_COUNT as u16 + 2;
    let [form_area, hint_area, table_area] = Layout::vertical([
        Constraint::Length(form_height),
        Constraint::Length(1),
        Constraint::Min(3),
    ])
    .areas(frame.area());

    let focused_field = match app.focus {
        Focus::Field(index) => Some(index),
        Focus::Table => None,
    };
    let form = Paragraph::new(form_lines(&app.inputs, focused_field)).block(
        Block::new()
            .borders(Borders::ALL)
            .title("Product")
            .border_style(focus_style(focused_field.is_some())),
    );
    frame.render_widget(form, form_area);

    let hint = match app.focus {
        Focus::Field(_) => "Enter: insert  Ctrl-X: export  Tab: next  Ctrl-C: quit",
        Focus::Table => "e: edit  d: delete  Ctrl-X: export  Tab: next  q: quit",
    };
    frame.render_widget(Paragraph::new(hint).style(Style::new().dark_gray()), hint_area);

    let table = product_table(&app.products).block(
        Block::new()
            .borders(Borders::ALL)
            .title(format!("Products ({})", app.products.len()))
            .border_style(focus_style(app.focus == Focus::Table)),
    );
    frame.render_stateful_widget(table, table_area, &mut app.table_state);

    match &app.modal {
        Some(Modal::Edit(dialog)) => draw_edit_dialog(frame, dialog),
        Some(Modal::Export(prompt)) => draw_export_prompt(frame, prompt),
        None => {}
    }
    if let Some(notification) = app.notifications.front() {
        draw_notification(frame, notification, app.notifications.len());
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::new().yellow()
    } else {
        Style::new()
    }
}

fn form_lines(inputs: &FormInputs, focused: Option<usize>) -> Vec<Line<'_>> {
    FIELD_LABELS
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let mut spans = vec![
                Span::styled(format!("{label:>LABEL_WIDTH$}: "), Style::new().bold()),
                Span::raw(inputs.value(index)),
            ];
            if focused == Some(index) {
                spans.push(Span::styled(" ", Style::new().reversed()));
            }
            Line::from(spans)
        })
        .collect()
}

fn product_table(products: &[Product]) -> Table<'static> {
    let rows: Vec<Row> = products.iter().map(|p| Row::new(p.to_row())).collect();
    let widths = [
        Constraint::Length(5),
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Length(13),
        Constraint::Length(8),
        Constraint::Length(16),
        Constraint::Length(10),
    ];
    Table::new(rows, widths)
        .column_spacing(1)
        .header(
            Row::new(TABLE_HEADER)
                .style(Style::new().bold())
                .bottom_margin(1),
        )
        .highlight_style(Style::new().reversed())
        .highlight_symbol(">>")
}

/// A `width` x `height` rectangle in the middle of `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

fn draw_edit_dialog(frame: &mut Frame, dialog: &EditDialog) {
    #[allow(clippy::cast_possible_truncation)]
    let area = centered(frame.area(), 64, FIELD_COUNT as u16 + 4);
    let mut lines = form_lines(&dialog.inputs, Some(dialog.focused));
    lines.push(Line::default());
    lines.push(Line::from("Enter: save  Esc: cancel  Tab: next").dark_gray());

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::new()
                .borders(Borders::ALL)
                .title(format!("Edit product {}", dialog.id))
                .border_style(Style::new().yellow()),
        ),
        area,
    );
}

fn draw_export_prompt(frame: &mut Frame, prompt: &ExportPrompt) {
    let area = centered(frame.area(), 64, 5);
    let lines = vec![
        Line::from(vec![
            Span::styled("Save as: ", Style::new().bold()),
            Span::raw(prompt.path.as_str()),
            Span::styled(" ", Style::new().reversed()),
        ]),
        Line::default(),
        match &prompt.overwrite {
            Some(_) => Line::from("File exists. Enter: replace it  Esc: cancel").red(),
            None => Line::from("Enter: export (.xlsx or .csv)  Esc: cancel").dark_gray(),
        },
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::new()
                .borders(Borders::ALL)
                .title("Export")
                .border_style(Style::new().yellow()),
        ),
        area,
    );
}

fn draw_notification(frame: &mut Frame, notification: &Notification, queued: usize) {
    let area = centered(frame.area(), 60, 7);
    let color = match notification.severity {
        Severity::Info => Color::Green,
        Severity::Error => Color::Red,
    };
    let title = if queued > 1 {
        format!("{} (1 of {queued})", notification.title)
    } else {
        notification.title.clone()
    };
    let lines = vec![
        Line::from(notification.message.as_str()),
        Line::default(),
        Line::from("Press any key").dark_gray(),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::new()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::new().fg(color)),
        ),
        area,
    );
}
