use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use crate::ui::app::{App, Page};
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::login::LoginField;
use crate::ui::theme::{ACCENT, BORDER, HIGHLIGHT, MUTED, STATUS_ERROR, STATUS_OK, TEXT};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    draw_header(frame, app, header);
    match app.page() {
        Page::Welcome => draw_welcome(frame, app, body),
        Page::Products => draw_products(frame, app, body),
        Page::Login => draw_login(frame, app, body),
    }
    draw_footer(frame, app, footer);
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let regions = Layout::horizontal([Constraint::Min(1), Constraint::Length(30)]).split(area);

    let titles: Vec<Line> = [Page::Welcome, Page::Products, Page::Login]
        .iter()
        .map(|page| Line::from(page.title()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.page().index())
        .style(Style::new().fg(MUTED))
        .highlight_style(Style::new().fg(ACCENT).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, regions[0]);

    let user = match app.current_user() {
        Some(user) => Span::styled(user.user_name, Style::new().fg(STATUS_OK)),
        None => Span::styled("not logged in", Style::new().fg(MUTED)),
    };
    frame.render_widget(
        Paragraph::new(Line::from(user)).alignment(Alignment::Right),
        regions[1],
    );
}

fn draw_welcome(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut lines = vec![
        Line::styled("Stockroom", Style::new().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::styled("A product catalog on a unidirectional state container.", Style::new().fg(TEXT)),
        Line::from(""),
    ];
    match app.current_user() {
        Some(user) if user.is_admin => {
            lines.push(Line::styled(
                format!("Logged in as {} (admin)", user.user_name),
                Style::new().fg(STATUS_OK),
            ));
        }
        Some(user) => {
            lines.push(Line::styled(
                format!("Logged in as {}", user.user_name),
                Style::new().fg(STATUS_OK),
            ));
        }
        None => {
            lines.push(Line::styled(
                "Press Tab to reach the products or the login screen.",
                Style::new().fg(MUTED),
            ));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        centered_rect(64, 9, area),
    );
}

fn draw_products(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let regions =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(area);

    let products = app.products();
    let show_code = app.show_product_code();
    let error = app.error_message();
    let selected_id = app.current_product().map(|product| product.id);

    let mut lines = Vec::new();
    if !error.is_empty() {
        lines.push(Line::styled(error, Style::new().fg(STATUS_ERROR)));
    }
    if products.is_empty() {
        lines.push(Line::styled("No products loaded. Press r.", Style::new().fg(MUTED)));
    }
    for product in &products {
        let label = if show_code {
            format!(
                " {:<30} {:<10} {:>9.2}",
                product.product_name, product.product_code, product.price
            )
        } else {
            format!(" {:<30} {:>9.2}", product.product_name, product.price)
        };
        let style = if selected_id == Some(product.id) {
            Style::new().fg(ACCENT).bg(HIGHLIGHT).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(TEXT)
        };
        lines.push(Line::styled(label, style));
    }

    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(BORDER))
        .title("Products");
    frame.render_widget(Paragraph::new(lines).block(list_block), regions[0]);

    let detail_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(BORDER))
        .title("Detail");
    let detail = match app.current_product() {
        Some(product) if product.id == 0 => vec![
            Line::styled("New Product", Style::new().fg(ACCENT)),
            Line::from(""),
            Line::styled("Not saved yet.", Style::new().fg(MUTED)),
        ],
        Some(product) => {
            let mut lines = vec![
                Line::styled(product.product_name.clone(), Style::new().fg(ACCENT)),
                Line::from(""),
            ];
            if show_code {
                lines.push(Line::from(format!("Code:  {}", product.product_code)));
            }
            lines.push(Line::from(format!("Price: {:.2}", product.price)));
            lines.push(Line::from(""));
            lines.push(Line::styled(product.description.clone(), Style::new().fg(TEXT)));
            lines
        }
        None => vec![Line::styled("No product selected.", Style::new().fg(MUTED))],
    };
    frame.render_widget(Paragraph::new(detail).block(detail_block), regions[1]);
}

fn draw_login(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let form = app.login();
    let mask = app.mask_user_name();

    let user_display = if mask {
        "*".repeat(form.user_name.chars().count())
    } else {
        form.user_name.clone()
    };
    let pass_display = "*".repeat(form.password.chars().count());

    let field_style = |field: LoginField| {
        if form.focus == field {
            Style::new().fg(ACCENT)
        } else {
            Style::new().fg(TEXT)
        }
    };

    let mut lines = vec![
        Line::styled("Log In", Style::new().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::styled(
            format!("User Name: {user_display}"),
            field_style(LoginField::UserName),
        ),
        Line::styled(
            format!("Password:  {pass_display}"),
            field_style(LoginField::Password),
        ),
        Line::from(""),
        Line::styled(
            format!("[{}] Mask user name (F2)", if mask { "x" } else { " " }),
            Style::new().fg(MUTED),
        ),
    ];
    if !form.error.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(form.error.clone(), Style::new().fg(STATUS_ERROR)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block),
        centered_rect(48, 11, area),
    );
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let hints = match app.page() {
        Page::Welcome => "Tab page · Enter products · o log out · Ctrl+Q quit",
        Page::Products => {
            "↑/↓ select · c code · n new · Esc clear · r reload · Tab page · Ctrl+Q quit"
        }
        Page::Login => "type to edit · ↑/↓ field · F2 mask · Enter log in · Tab page",
    };
    frame.render_widget(
        Paragraph::new(Line::styled(hints, Style::new().fg(MUTED))),
        area,
    );
}
